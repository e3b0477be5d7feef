//! Global constants used throughout the terraconf codebase.
//!
//! This module contains the delimiters, sentinels, and default settings that
//! are shared between the state reader, the flatmap expander, the renderer,
//! and the CLI. Defining them centrally keeps the flattened-key conventions
//! of Terraform state in one discoverable place.

/// Separator between the parts of a resource ID and between the segments of
/// a flattened attribute key (`aws_instance.web`, `tags.Name`, `list.0.id`).
pub const RESOURCE_NAME_DELIMITER: &str = ".";

/// Prefix of resource IDs that refer to data sources.
///
/// Data sources are skipped during generation because their attributes
/// cannot be split into configurable inputs and computed outputs.
pub const DATA_SOURCE_PREFIX: &str = "data.";

/// Key suffix holding the element count of a flattened list or set.
pub const LIST_COUNT_SUFFIX: &str = "#";

/// Key suffix holding the entry count of a flattened map.
pub const MAP_COUNT_SUFFIX: &str = "%";

/// Marker prefix for list indices whose value was computed at apply time.
pub const COMPUTED_INDEX_PREFIX: char = '~';

/// Sentinel Terraform stored in place of values unknown until apply.
pub const UNKNOWN_VARIABLE_VALUE: &str = "74D93920-ED26-11E3-AC10-0800200C9A66";

/// Oldest legacy state format version that can be read.
pub const MIN_STATE_VERSION: u64 = 1;

/// Newest legacy state format version that can be read.
///
/// Version 4 replaced flattened attributes with nested JSON values and is
/// rejected by the state reader.
pub const MAX_STATE_VERSION: u64 = 3;

/// Default number of spaces per nesting level in formatted output.
pub const DEFAULT_INDENT: usize = 2;

/// Largest indent width accepted from configuration.
pub const MAX_INDENT: usize = 8;

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "terraconf.toml";

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "TERRACONF_CONFIG";

/// Argument value meaning "read the state from stdin".
pub const STDIN_ARG: &str = "-";

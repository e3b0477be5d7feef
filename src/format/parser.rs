//! `nom` parser producing the formatter's syntax tree.
//!
//! The tree only keeps what the printer needs: key and literal text
//! verbatim from the source, and the start line of every item and value
//! (line adjacency decides alignment groups and single-line lists).
//! Positions come from [`LocatedSpan`], so errors carry the line and
//! column of the offending input.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while},
    character::complete::{char, digit1, multispace1, none_of, one_of, satisfy},
    combinator::{cut, map, opt, peek, recognize, value},
    error::{ContextError, ErrorKind, ParseError, context},
    multi::{many0, many1},
    sequence::{pair, preceded, terminated, tuple},
};
use nom_locate::LocatedSpan;

use super::FormatError;

type Span<'a> = LocatedSpan<&'a str>;
type PResult<'a, T> = IResult<Span<'a>, T, SyntaxError<'a>>;

/// `keys... = value` or `keys... { body }`
#[derive(Debug, Clone)]
pub(crate) struct Item {
    pub keys: Vec<String>,
    pub line: usize,
    pub kind: ItemKind,
}

#[derive(Debug, Clone)]
pub(crate) enum ItemKind {
    Assign(Expr),
    Block(Body),
}

#[derive(Debug, Clone)]
pub(crate) struct Body {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone)]
pub(crate) enum Expr {
    Literal { text: String, line: usize },
    List { elements: Vec<Expr>, line: usize },
    Object { body: Body, line: usize },
}

impl Expr {
    pub(crate) const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. } | Self::List { line, .. } | Self::Object { line, .. } => {
                *line
            }
        }
    }
}

impl Item {
    /// Single-line assignment of a literal; the only items that join
    /// `=`-aligned groups.
    pub(crate) const fn is_simple_assignment(&self) -> bool {
        matches!(self.kind, ItemKind::Assign(Expr::Literal { .. }))
    }

    /// Block with an empty body, which prints on one line.
    pub(crate) fn is_empty_block(&self) -> bool {
        matches!(&self.kind, ItemKind::Block(body) if body.items.is_empty())
    }
}

/// Returns `true` if `name` can be written as a bare HCL key.
///
/// Bare keys start with a letter or underscore and continue with letters,
/// digits, underscores or dashes. `true` and `false` parse as booleans and
/// must be quoted.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        && name != "true"
        && name != "false"
}

/// Parse error positioned at the input that could not be parsed.
///
/// The innermost context wins: once a message is set, outer contexts
/// leave it alone.
#[derive(Debug)]
pub(crate) struct SyntaxError<'a> {
    span: Span<'a>,
    message: Option<String>,
}

impl<'a> SyntaxError<'a> {
    fn expected(span: Span<'a>, what: &str) -> Self {
        let message = format!("expected {what}, found {}", describe(&span));
        Self {
            span,
            message: Some(message),
        }
    }

    fn message(span: Span<'a>, message: &str) -> Self {
        Self {
            span,
            message: Some(message.to_string()),
        }
    }

    fn into_format_error(self) -> FormatError {
        let message = self.message.unwrap_or_else(|| format!("unexpected {}", describe(&self.span)));
        FormatError {
            line: self.span.location_line() as usize,
            column: self.span.get_utf8_column(),
            message,
        }
    }
}

impl<'a> ParseError<Span<'a>> for SyntaxError<'a> {
    fn from_error_kind(input: Span<'a>, _kind: ErrorKind) -> Self {
        Self {
            span: input,
            message: None,
        }
    }

    fn append(_input: Span<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ContextError<Span<'a>> for SyntaxError<'a> {
    fn add_context(_input: Span<'a>, ctx: &'static str, other: Self) -> Self {
        match other.message {
            Some(_) => other,
            None => Self::expected(other.span, ctx),
        }
    }
}

/// What the parser ran into, for error messages.
fn describe(span: &Span<'_>) -> String {
    match span.fragment().chars().next() {
        None => "end of input".to_string(),
        Some('\n') => "newline".to_string(),
        Some('"') => "string".to_string(),
        Some(c) if c.is_ascii_digit() => "number".to_string(),
        Some(c) if c.is_alphabetic() || c == '_' => "identifier".to_string(),
        Some(c) => format!("'{c}'"),
    }
}

fn line_of(span: &Span<'_>) -> usize {
    span.location_line() as usize
}

/// Parse a whole document into its top-level items.
pub(crate) fn parse_file(source: &str) -> Result<Vec<Item>, FormatError> {
    match file(Span::new(source)) {
        Ok((_, items)) => Ok(items),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e.into_format_error()),
        Err(nom::Err::Incomplete(_)) => Err(FormatError {
            line: 1,
            column: 1,
            message: "unexpected end of input".to_string(),
        }),
    }
}

fn file(input: Span<'_>) -> PResult<'_, Vec<Item>> {
    let (input, items) = many0(item)(input)?;
    let (input, ()) = trivia(input)?;
    if !input.fragment().is_empty() {
        return Err(nom::Err::Failure(SyntaxError::expected(input, "a key")));
    }
    Ok((input, items))
}

// Whitespace and comments

fn trivia(input: Span<'_>) -> PResult<'_, ()> {
    value((), many0(alt((value((), multispace1), line_comment, block_comment))))(input)
}

fn line_comment(input: Span<'_>) -> PResult<'_, ()> {
    value((), pair(alt((tag("#"), tag("//"))), take_while(|c: char| c != '\n')))(input)
}

fn block_comment(input: Span<'_>) -> PResult<'_, ()> {
    let (rest, _) = tag("/*")(input)?;
    let (rest, _) = terminated(take_until("*/"), tag("*/"))(rest).map_err(
        |_: nom::Err<SyntaxError<'_>>| {
            nom::Err::Failure(SyntaxError::message(input, "comment not terminated"))
        },
    )?;
    Ok((rest, ()))
}

// Literals

fn identifier(input: Span<'_>) -> PResult<'_, Span<'_>> {
    recognize(pair(
        satisfy(|c| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || matches!(c, '_' | '-' | '.')),
    ))(input)
}

fn number(input: Span<'_>) -> PResult<'_, Span<'_>> {
    recognize(tuple((
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// A double-quoted string, kept verbatim with its quotes and escapes.
fn string_literal(input: Span<'_>) -> PResult<'_, String> {
    let (rest, _) = char('"')(input)?;
    let contents = many0(alt((
        recognize(pair(char('\\'), none_of("\n"))),
        recognize(none_of("\"\\\n")),
    )));
    let (rest, _) = terminated(contents, char('"'))(rest).map_err(
        |_: nom::Err<SyntaxError<'_>>| {
            nom::Err::Failure(SyntaxError::message(input, "literal not terminated"))
        },
    )?;

    let consumed = input.fragment().len() - rest.fragment().len();
    Ok((rest, input.fragment()[..consumed].to_string()))
}

fn key(input: Span<'_>) -> PResult<'_, String> {
    alt((string_literal, map(identifier, |s: Span<'_>| s.fragment().to_string())))(input)
}

// Items and values

fn item(input: Span<'_>) -> PResult<'_, Item> {
    let (input, ()) = trivia(input)?;
    let line = line_of(&input);
    let (input, keys) = many1(terminated(key, trivia))(input)?;

    let (input, kind) = cut(context(
        "'=' or '{'",
        alt((
            map(
                preceded(char('='), cut(preceded(trivia, context("a value", expression)))),
                ItemKind::Assign,
            ),
            map(body, ItemKind::Block),
        )),
    ))(input)?;
    let (input, _) = opt(preceded(trivia, char(',')))(input)?;

    Ok((input, Item {
        keys,
        line,
        kind,
    }))
}

fn body(input: Span<'_>) -> PResult<'_, Body> {
    let (input, _) = char('{')(input)?;
    let (input, items) = many0(item)(input)?;
    let (input, _) = cut(preceded(trivia, context("'}'", char('}'))))(input)?;
    Ok((input, Body {
        items,
    }))
}

fn expression(input: Span<'_>) -> PResult<'_, Expr> {
    alt((literal, list, object))(input)
}

fn literal(input: Span<'_>) -> PResult<'_, Expr> {
    let line = line_of(&input);
    map(
        alt((string_literal, map(alt((number, identifier)), |s: Span<'_>| s.fragment().to_string()))),
        move |text| Expr::Literal {
            text,
            line,
        },
    )(input)
}

fn object(input: Span<'_>) -> PResult<'_, Expr> {
    let line = line_of(&input);
    map(body, move |body| Expr::Object {
        body,
        line,
    })(input)
}

/// `[` values separated by commas, with an optional trailing comma `]`
fn list(input: Span<'_>) -> PResult<'_, Expr> {
    let line = line_of(&input);
    let (mut input, _) = char('[')(input)?;
    let mut elements = Vec::new();

    loop {
        let (rest, ()) = trivia(input)?;
        if let Ok((rest, _)) = char::<_, SyntaxError<'_>>(']')(rest) {
            return Ok((rest, Expr::List {
                elements,
                line,
            }));
        }

        let (rest, element) = cut(context("a value", expression))(rest)?;
        elements.push(element);

        let (rest, ()) = trivia(rest)?;
        let (rest, ()) = cut(context(
            "',' or ']'",
            alt((value((), char(',')), value((), peek(char(']'))))),
        ))(rest)?;
        input = rest;
    }
}

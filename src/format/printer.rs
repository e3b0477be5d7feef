//! Canonical printer for the formatter's syntax tree.

use super::FormatOptions;
use super::parser::{Body, Expr, Item, ItemKind};

pub(crate) struct Printer<'a> {
    options: &'a FormatOptions,
    out: String,
}

impl<'a> Printer<'a> {
    pub(crate) const fn new(options: &'a FormatOptions) -> Self {
        Self {
            options,
            out: String::new(),
        }
    }

    /// Print top-level items.
    ///
    /// Top-level items are separated by a blank line, except adjacent
    /// empty blocks which stay on consecutive lines. The document always
    /// ends with a newline, so an empty document prints as `"\n"`.
    pub(crate) fn print_file(mut self, items: &[Item]) -> String {
        for (index, item) in items.iter().enumerate() {
            self.item(item, 0);
            if let Some(next) = items.get(index + 1) {
                self.out.push('\n');
                let tight =
                    next.line == item.line + 1 && item.is_empty_block() && next.is_empty_block();
                if !tight {
                    self.out.push('\n');
                }
            }
        }
        self.out.push('\n');
        self.out
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth * self.options.indent {
            self.out.push(' ');
        }
    }

    fn keys(item: &Item) -> String {
        item.keys.join(" ")
    }

    /// Print the items of a block body, one group per run.
    ///
    /// A group is a run of literal assignments on consecutive source lines;
    /// its `=` signs are aligned. Every other item forms a group of its
    /// own, and groups are separated by a blank line.
    fn items(&mut self, items: &[Item], depth: usize) {
        let mut index = 0;
        while index < items.len() {
            if index > 0 {
                self.out.push('\n');
            }

            let run = aligned_run(&items[index..]);
            if run > 0 {
                self.aligned(&items[index..index + run], depth);
                index += run;
            } else {
                self.indent(depth);
                self.item(&items[index], depth);
                self.out.push('\n');
                index += 1;
            }
        }
    }

    fn aligned(&mut self, group: &[Item], depth: usize) {
        let longest = group.iter().map(|item| Self::keys(item).chars().count()).max().unwrap_or(0);

        for item in group {
            let keys = Self::keys(item);
            let padding = if self.options.align_equals {
                longest - keys.chars().count() + 1
            } else {
                1
            };

            self.indent(depth);
            self.out.push_str(&keys);
            for _ in 0..padding {
                self.out.push(' ');
            }
            self.out.push_str("= ");
            if let ItemKind::Assign(value) = &item.kind {
                self.expr(value, depth);
            }
            self.out.push('\n');
        }
    }

    fn item(&mut self, item: &Item, depth: usize) {
        self.out.push_str(&Self::keys(item));
        match &item.kind {
            ItemKind::Assign(value) => {
                self.out.push_str(" = ");
                self.expr(value, depth);
            }
            ItemKind::Block(body) => {
                self.out.push(' ');
                self.body(body, depth);
            }
        }
    }

    fn body(&mut self, body: &Body, depth: usize) {
        if body.items.is_empty() {
            self.out.push_str("{}");
            return;
        }

        self.out.push_str("{\n");
        self.items(&body.items, depth + 1);
        self.indent(depth);
        self.out.push('}');
    }

    fn expr(&mut self, expr: &Expr, depth: usize) {
        match expr {
            Expr::Literal { text, .. } => self.out.push_str(text),
            Expr::Object { body, .. } => self.body(body, depth),
            Expr::List { elements, line } => {
                if is_single_line_list(elements, *line) {
                    self.out.push('[');
                    for (index, element) in elements.iter().enumerate() {
                        if index > 0 {
                            self.out.push_str(", ");
                        }
                        self.expr(element, depth);
                    }
                    self.out.push(']');
                } else {
                    self.out.push_str("[\n");
                    for element in elements {
                        self.indent(depth + 1);
                        self.expr(element, depth + 1);
                        self.out.push_str(",\n");
                    }
                    self.indent(depth);
                    self.out.push(']');
                }
            }
        }
    }
}

/// Length of the alignable run at the start of `items`.
fn aligned_run(items: &[Item]) -> usize {
    let Some(first) = items.first() else {
        return 0;
    };
    if !first.is_simple_assignment() {
        return 0;
    }

    1 + items
        .windows(2)
        .take_while(|pair| pair[1].is_simple_assignment() && pair[1].line == pair[0].line + 1)
        .count()
}

/// A list stays on one line when every element starts on the line of its
/// opening bracket and none of them is an object.
fn is_single_line_list(elements: &[Expr], line: usize) -> bool {
    elements.iter().all(|element| {
        element.line() == line
            && match element {
                Expr::Literal { .. } => true,
                Expr::List { elements: nested, .. } => is_single_line_list(nested, line),
                Expr::Object { .. } => false,
            }
    })
}

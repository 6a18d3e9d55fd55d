//! Human-readable, multi-line rendering of node trees.
//!
//! Rendering is purely presentational: the output is deterministic for a
//! given tree, but carries no structural guarantee beyond JSON-like nesting.
//!
//! - Mappings put one `"key": value` entry per line, indented one level
//!   deeper than their braces.
//! - Arrays whose first element is a mapping put every element on its own
//!   line; all other arrays render inline.
//! - Text is quoted, other scalars render as their literal text.
//!
//! ```
//! use jsonnode::{Node, ObjectNode, PrettyPrint, path};
//!
//! let tree = ObjectNode::new()
//!     .with("Alice", path!("user", "name"))
//!     .with(vec![1, 2], path!("user", "ids"));
//!
//! assert_eq!(
//!     tree.pretty(),
//!     "{\n  \"user\": {\n    \"name\": \"Alice\",\n    \"ids\": [1, 2]\n  }\n}"
//! );
//! ```

use crate::{Node, ObjectNode};

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Configuration for pretty-printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Spaces added per nesting level
    pub indent: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl PrintOptions {
    /// Builder method to set the indent width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Types that render as indented, multi-line text.
pub trait PrettyPrint {
    /// Renders with explicit options.
    fn pretty_with(&self, options: &PrintOptions) -> String;

    /// Renders with [`PrintOptions::default`].
    fn pretty(&self) -> String {
        self.pretty_with(&PrintOptions::default())
    }
}

impl PrettyPrint for Node {
    fn pretty_with(&self, options: &PrintOptions) -> String {
        let mut out = String::new();
        Printer { options, out: &mut out }.node(self, 0);
        out
    }
}

impl PrettyPrint for ObjectNode {
    fn pretty_with(&self, options: &PrintOptions) -> String {
        let mut out = String::new();
        Printer { options, out: &mut out }.object(self, 0);
        out
    }
}

struct Printer<'a> {
    options: &'a PrintOptions,
    out: &'a mut String,
}

impl Printer<'_> {
    fn indent(&mut self, depth: usize) {
        let width = self.options.indent * depth;
        self.out.extend(std::iter::repeat_n(' ', width));
    }

    fn node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Null => self.out.push_str("null"),
            Node::Text(s) => self.out.push_str(&quote(s)),
            Node::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Node::Number(n) => self.out.push_str(&n.to_string()),
            Node::Array(items) => self.array(items, depth),
            Node::Object(object) => self.object(object, depth),
        }
    }

    fn object(&mut self, object: &ObjectNode, depth: usize) {
        if object.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push('{');
        for (i, (key, node)) in object.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.out.push('\n');
            self.indent(depth + 1);
            self.out.push_str(&quote(key));
            self.out.push_str(": ");
            self.node(node, depth + 1);
        }
        self.out.push('\n');
        self.indent(depth);
        self.out.push('}');
    }

    fn array(&mut self, items: &[Node], depth: usize) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        let multiline = items.first().is_some_and(Node::is_object);
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
                if !multiline {
                    self.out.push(' ');
                }
            }
            if multiline {
                self.out.push('\n');
                self.indent(depth + 1);
                self.node(item, depth + 1);
            } else {
                self.node(item, depth);
            }
        }
        if multiline {
            self.out.push('\n');
            self.indent(depth);
        }
        self.out.push(']');
    }
}

/// Wraps text in double quotes, escaping quotes and backslashes.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

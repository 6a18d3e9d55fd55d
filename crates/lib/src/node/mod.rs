//! The node tree.
//!
//! [`Node`] is a closed set of immutable values shaped like JSON: absence of
//! value, text, boolean, number, ordered arrays, and keyed mappings. Only the
//! mapping variant, [`ObjectNode`], is addressable by [`Path`](crate::Path)
//! and carries the structural editing operations.
//!
//! # Usage
//!
//! ```
//! use jsonnode::{Node, ObjectNode, path};
//!
//! let tree = ObjectNode::new()
//!     .with("Alice", path!("user", "name"))
//!     .with(30, path!("user", "age"));
//!
//! assert_eq!(tree.get_node(path!("user", "name")), Some(&Node::from("Alice")));
//! assert!(tree.get_node(path!("user", "email")).is_none());
//! ```

use std::fmt;

pub mod errors;
pub mod number;
pub mod object;

pub use errors::NodeError;
pub use number::Number;
pub use object::ObjectNode;

use crate::pretty::quote;

/// One immutable value in a JSON-shaped tree.
///
/// # Variants
///
/// ## Scalars
/// - [`Node::Null`] - Absence of value
/// - [`Node::Text`] - UTF-8 text
/// - [`Node::Bool`] - Boolean
/// - [`Node::Number`] - Number, keeping its numeric kind
///
/// ## Containers
/// - [`Node::Array`] - Ordered sequence of nodes, variants may be mixed
/// - [`Node::Object`] - String-keyed mapping, the only path-addressable variant
///
/// Equality and hashing are structural and recursive. Mapping equality does
/// not depend on key order.
///
/// # Direct Comparisons
///
/// ```
/// # use jsonnode::Node;
/// assert!(Node::from("hello") == "hello");
/// assert!(Node::from(42) == 42);
/// assert!(true == Node::from(true));
/// assert!(!(Node::from("42") == 42));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Node {
    /// Null/empty value
    #[default]
    Null,
    /// Text string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(Number),
    /// Ordered collection of nodes
    Array(Vec<Node>),
    /// Keyed mapping of nodes
    Object(ObjectNode),
}

impl Node {
    /// Returns true if this is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns true if this is a mapping
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Returns true if this is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Returns true if this is neither an array nor a mapping
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Node::Null | Node::Text(_) | Node::Bool(_) | Node::Number(_)
        )
    }

    /// Returns the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Text(_) => "text",
            Node::Bool(_) => "bool",
            Node::Number(_) => "number",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        }
    }

    /// Attempts to read as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to read as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to read as a number
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Node::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Attempts to read as an integer; integral floats qualify
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number()?.as_i64()
    }

    /// Attempts to read as a float
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    /// Attempts to read as an array
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to read as a mapping
    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Wraps this node in a new single-key mapping.
    ///
    /// ```
    /// # use jsonnode::Node;
    /// let object = Node::from(3).at("key");
    /// assert_eq!(object.get("key"), Some(&Node::from(3)));
    /// ```
    pub fn at(self, key: impl AsRef<str>) -> ObjectNode {
        ObjectNode::new().with_key(self, key)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Text(s) => write!(f, "{}", quote(s)),
            Node::Bool(b) => write!(f, "{b}"),
            Node::Number(n) => write!(f, "{n}"),
            Node::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Object(object) => write!(f, "{object}"),
        }
    }
}

// TryFrom implementations for typed reads
impl TryFrom<&Node> for String {
    type Error = NodeError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        match node {
            Node::Text(s) => Ok(s.clone()),
            _ => Err(NodeError::TypeMismatch {
                expected: "text",
                actual: node.type_name(),
            }),
        }
    }
}

impl<'a> TryFrom<&'a Node> for &'a str {
    type Error = NodeError;

    fn try_from(node: &'a Node) -> Result<Self, Self::Error> {
        node.as_text().ok_or(NodeError::TypeMismatch {
            expected: "text",
            actual: node.type_name(),
        })
    }
}

impl TryFrom<&Node> for bool {
    type Error = NodeError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        node.as_bool().ok_or(NodeError::TypeMismatch {
            expected: "bool",
            actual: node.type_name(),
        })
    }
}

impl TryFrom<&Node> for i64 {
    type Error = NodeError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        let number = node.as_number().ok_or(NodeError::TypeMismatch {
            expected: "number",
            actual: node.type_name(),
        })?;
        number.as_i64().ok_or_else(|| NodeError::NumberOutOfRange {
            value: number.to_string(),
            target: "i64",
        })
    }
}

impl TryFrom<&Node> for f64 {
    type Error = NodeError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        node.as_f64().ok_or(NodeError::TypeMismatch {
            expected: "number",
            actual: node.type_name(),
        })
    }
}

impl TryFrom<&Node> for ObjectNode {
    type Error = NodeError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        node.as_object().cloned().ok_or(NodeError::TypeMismatch {
            expected: "object",
            actual: node.type_name(),
        })
    }
}

// PartialEq implementations for comparing Node with primitives
impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Node {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        self.as_number() == Some(&Number::Int(*other))
    }
}

impl PartialEq<i32> for Node {
    fn eq(&self, other: &i32) -> bool {
        self == &(*other as i64)
    }
}

impl PartialEq<f64> for Node {
    fn eq(&self, other: &f64) -> bool {
        self.as_number() == Some(&Number::Float(*other))
    }
}

// Reverse implementations for symmetry
impl PartialEq<Node> for str {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for &str {
    fn eq(&self, other: &Node) -> bool {
        other == *self
    }
}

impl PartialEq<Node> for String {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for bool {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for i64 {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for i32 {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for f64 {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

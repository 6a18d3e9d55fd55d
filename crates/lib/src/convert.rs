//! Conversion of plain Rust values into nodes.
//!
//! Two routes lead to a [`Node`]:
//!
//! - Static: `From<T> for Node` for the supported value types. Every editing
//!   operation takes `impl Into<Node>`, so raw values and already-built
//!   nodes are accepted alike.
//! - Dynamic: [`from_any`] inspects a `&dyn Any` at runtime. Unsupported
//!   types become [`Node::Null`] instead of failing; callers needing strict
//!   conversion must check the type beforehand.
//!
//! `serde_json::Value` converts in both directions, which lets a tree be
//! exchanged with code that already holds dynamic JSON values in memory.
//!
//! ```
//! use jsonnode::{Node, Number, convert::from_any};
//!
//! assert_eq!(Node::from(Some("a")), Node::Text("a".into()));
//! assert_eq!(Node::from(None::<i32>), Node::Null);
//! assert_eq!(Node::from(vec![1, 2]), Node::Array(vec![Node::from(1), Node::from(2)]));
//!
//! assert_eq!(from_any(&7u8), Node::Number(Number::UInt(7)));
//! assert_eq!(from_any(&std::time::Duration::ZERO), Node::Null);
//! ```

use std::any::Any;

use tracing::debug;

use crate::{Node, Number, ObjectNode};

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&String> for Node {
    fn from(value: &String) -> Self {
        Node::Text(value.clone())
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<char> for Node {
    fn from(value: char) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<Number> for Node {
    fn from(value: Number) -> Self {
        Node::Number(value)
    }
}

macro_rules! node_from_number {
    ($($t:ty),*) => {
        $(impl From<$t> for Node {
            fn from(value: $t) -> Self {
                Node::Number(Number::from(value))
            }
        })*
    };
}

node_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<ObjectNode> for Node {
    fn from(value: ObjectNode) -> Self {
        Node::Object(value)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(value: Vec<T>) -> Self {
        Node::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node> + Clone> From<&[T]> for Node {
    fn from(value: &[T]) -> Self {
        Node::Array(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Node>, const N: usize> From<[T; N]> for Node {
    fn from(value: [T; N]) -> Self {
        Node::Array(value.into_iter().map(Into::into).collect())
    }
}

/// Converts a value whose type is only known at runtime.
///
/// Recognised:
/// - `Node` itself, returned unchanged, and `Box<dyn Any>`, unwrapped.
/// - `()`, text (`String`, `&str`, `char`), `bool`, the primitive integers
///   and floats, `Number`, `ObjectNode` and `serde_json::Value`.
/// - `Vec<T>`, `&'static [T]`, `[T; N]` (N up to 16), `Vec<Vec<T>>` and
///   `Option<T>` for any `T` above.
/// - `Vec<Box<dyn Any>>`, converted element by element.
///
/// Anything else becomes `Node::Null`.
pub fn from_any(value: &dyn Any) -> Node {
    macro_rules! try_cast {
        ($($t:ty),*) => {
            $(if let Some(v) = value.downcast_ref::<$t>() {
                return Node::from(v.clone());
            })*
        };
    }

    macro_rules! try_container {
        ($($t:ty),*) => {
            $(if let Some(node) = container::<$t>(value) {
                return node;
            })*
        };
    }

    if let Some(node) = value.downcast_ref::<Node>() {
        return node.clone();
    }
    if let Some(inner) = value.downcast_ref::<Box<dyn Any>>() {
        return from_any(&**inner);
    }
    if let Some(items) = value.downcast_ref::<Vec<Box<dyn Any>>>() {
        return Node::Array(items.iter().map(|item| from_any(&**item)).collect());
    }
    try_cast!(
        (),
        String,
        &'static str,
        char,
        bool,
        i8,
        i16,
        i32,
        i64,
        isize,
        u8,
        u16,
        u32,
        u64,
        usize,
        f32,
        f64,
        Number,
        ObjectNode,
        serde_json::Value
    );
    try_container!(
        Node,
        String,
        &'static str,
        char,
        bool,
        i8,
        i16,
        i32,
        i64,
        isize,
        u8,
        u16,
        u32,
        u64,
        usize,
        f32,
        f64,
        Number,
        ObjectNode,
        serde_json::Value
    );

    debug!(
        type_id = ?value.type_id(),
        "unrecognised value type converted to null"
    );
    Node::Null
}

/// Sequences and options of `T`, converted element by element.
fn container<T>(value: &dyn Any) -> Option<Node>
where
    T: Any + Clone + Into<Node>,
{
    macro_rules! try_array {
        ($($n:literal),*) => {
            $(if let Some(items) = value.downcast_ref::<[T; $n]>() {
                return Some(Node::from(items.as_slice()));
            })*
        };
    }

    if let Some(items) = value.downcast_ref::<Vec<T>>() {
        return Some(Node::from(items.as_slice()));
    }
    if let Some(items) = value.downcast_ref::<&'static [T]>() {
        return Some(Node::from(*items));
    }
    if let Some(rows) = value.downcast_ref::<Vec<Vec<T>>>() {
        return Some(Node::Array(
            rows.iter().map(|row| Node::from(row.as_slice())).collect(),
        ));
    }
    if let Some(option) = value.downcast_ref::<Option<T>>() {
        return Some(Node::from(option.clone()));
    }
    try_array!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16);
    None
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::Number(Number::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Node::Number(Number::UInt(u))
                } else {
                    n.as_f64().map_or(Node::Null, |f| Node::Number(Number::Float(f)))
                }
            }
            serde_json::Value::String(s) => Node::Text(s),
            serde_json::Value::Array(items) => {
                Node::Array(items.into_iter().map(Node::from).collect())
            }
            serde_json::Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Node> for serde_json::Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Null => serde_json::Value::Null,
            Node::Bool(b) => serde_json::Value::Bool(*b),
            Node::Text(s) => serde_json::Value::String(s.clone()),
            Node::Number(Number::Int(i)) => serde_json::Value::Number((*i).into()),
            Node::Number(Number::UInt(u)) => serde_json::Value::Number((*u).into()),
            Node::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Node::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Node::Object(object) => serde_json::Value::from(object),
        }
    }
}

impl From<&ObjectNode> for serde_json::Value {
    fn from(object: &ObjectNode) -> Self {
        serde_json::Value::Object(
            object
                .iter()
                .map(|(key, node)| (key.clone(), serde_json::Value::from(node)))
                .collect(),
        )
    }
}

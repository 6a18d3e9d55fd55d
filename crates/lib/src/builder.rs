//! Declarative construction of mappings.
//!
//! A [`NodeBuilder`] collects `(path, value)` pairs and folds them into an
//! empty mapping with [`ObjectNode::with`], in declaration order. The result
//! is identical to chaining the same `with` calls by hand. Nested scopes
//! are folded into their own mapping first and then attached at their key.
//!
//! ```
//! use jsonnode::{ObjectNode, builder::root, path};
//!
//! let tree = root(|b| {
//!     b.n("name", "Alice");
//!     b.obj("address", |b| {
//!         b.n("city", "Turin");
//!         b.n("zip", 10121);
//!     });
//! });
//!
//! let manual = ObjectNode::new()
//!     .with("Alice", path!("name"))
//!     .with(ObjectNode::new().with("Turin", path!("city")).with(10121, path!("zip")), path!("address"));
//!
//! assert_eq!(tree, manual);
//! ```

use crate::{Node, ObjectNode, PathBuf};

/// Collects path/value pairs for a mapping.
#[derive(Debug, Clone, Default)]
pub struct NodeBuilder {
    pairs: Vec<(PathBuf, Node)>,
}

impl NodeBuilder {
    /// Creates a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `value` under a single key.
    pub fn n(&mut self, key: impl AsRef<str>, value: impl Into<Node>) -> &mut Self {
        self.at(PathBuf::new().push(key), value)
    }

    /// Declares `value` at an arbitrary path.
    pub fn at(&mut self, path: impl Into<PathBuf>, value: impl Into<Node>) -> &mut Self {
        self.pairs.push((path.into(), value.into()));
        self
    }

    /// Declares a nested scope, folded into a mapping and attached at `key`.
    pub fn obj<F>(&mut self, key: impl AsRef<str>, init: F) -> &mut Self
    where
        F: FnOnce(&mut NodeBuilder),
    {
        let mut scope = NodeBuilder::new();
        init(&mut scope);
        let object = scope.build();
        self.n(key, object)
    }

    /// Returns the number of declared pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if nothing has been declared
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Folds the declared pairs into a new mapping.
    pub fn build(self) -> ObjectNode {
        self.pairs
            .into_iter()
            .fold(ObjectNode::new(), |acc, (path, value)| acc.with(value, path))
    }
}

/// Builds a mapping from the pairs declared in `init`.
pub fn root<F>(init: F) -> ObjectNode
where
    F: FnOnce(&mut NodeBuilder),
{
    let mut builder = NodeBuilder::new();
    init(&mut builder);
    builder.build()
}

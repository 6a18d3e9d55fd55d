//! The mapping variant and its path-addressed editing operations.
//!
//! [`ObjectNode`] owns a private key→node mapping. It exposes the plain
//! mapping reads (`get`, `keys`, `iter`, ...) next to the path-aware
//! operations:
//!
//! - [`ObjectNode::with`] - place a value at a path, creating intermediate
//!   mappings as needed
//! - [`ObjectNode::get_node`] - look a value up by path
//! - [`ObjectNode::extract`] - project a set of paths into a fresh mapping
//! - [`ObjectNode::merge`] - deep-merge another mapping into this one
//!
//! Every operation takes `&self` and returns a new mapping. The receiver is
//! never changed. Entries live behind an `Arc`, so a clone is cheap and an
//! edit only copies the mappings along the edited path; untouched subtrees
//! are shared between the old and the new snapshot.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::Node;
use crate::{Path, pretty::quote};

/// A string-keyed mapping of nodes.
///
/// Iteration follows insertion order: existing keys keep their position when
/// overwritten, new keys are appended. Equality and hashing ignore order.
///
/// # Examples
///
/// ```
/// # use jsonnode::{Node, ObjectNode, path};
/// let base = ObjectNode::new().with(1, path!("a"));
/// let edited = base.with("x", path!("a", "b"));
///
/// // The scalar at "a" was replaced by a mapping
/// assert_eq!(edited.get_node(path!("a", "b")), Some(&Node::from("x")));
/// // The original snapshot is unchanged
/// assert_eq!(base.get("a"), Some(&Node::from(1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectNode {
    entries: Arc<IndexMap<String, Node>>,
}

impl ObjectNode {
    /// Creates a new empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the empty mapping; same as [`ObjectNode::new`]
    pub fn empty() -> Self {
        Self::new()
    }

    /// Returns the number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the node bound directly to `key`
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Returns true if `key` is bound at this level
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns an iterator over all keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over all values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.values()
    }

    /// Returns an iterator over all key-value pairs in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    /// Get a reference to the underlying map for advanced access
    pub fn as_index_map(&self) -> &IndexMap<String, Node> {
        &self.entries
    }

    /// Returns a copy of this mapping with `key` bound to `node`.
    fn inserted(&self, key: &str, node: Node) -> ObjectNode {
        let mut result = self.clone();
        // Copies the map if any other snapshot still shares it
        Arc::make_mut(&mut result.entries).insert(key.to_string(), node);
        result
    }

    /// Places `value` at `at`, returning the resulting mapping.
    ///
    /// - A missing path is created, with a fresh mapping at each
    ///   intermediate level.
    /// - An existing value at the final segment is overwritten.
    /// - A non-mapping value stored at an intermediate segment is discarded
    ///   and replaced by a mapping for the rest of the path.
    /// - A mapping value is merged into whatever mapping already sits at the
    ///   target, key by key, instead of replacing it.
    /// - With an empty path, a mapping value is merged into the receiver and
    ///   any other value is ignored: the receiver is returned unchanged.
    ///
    /// No key is ever removed.
    ///
    /// ```
    /// # use jsonnode::{Node, ObjectNode, PathBuf, path};
    /// let tree = ObjectNode::new().with(true, path!("a", "b", "c"));
    /// assert_eq!(tree.get_node(path!("a", "b", "c")), Some(&Node::Bool(true)));
    ///
    /// // A scalar at the root has nowhere to go
    /// assert_eq!(tree.with(5, PathBuf::new()), tree);
    /// ```
    pub fn with(&self, value: impl Into<Node>, at: impl AsRef<Path>) -> ObjectNode {
        self.with_node(value.into(), at.as_ref())
    }

    /// Places `value` under a single key; shorthand for a one-segment path.
    pub fn with_key(&self, value: impl Into<Node>, key: impl AsRef<str>) -> ObjectNode {
        self.with(value, crate::PathBuf::new().push(key))
    }

    fn with_node(&self, value: Node, at: &Path) -> ObjectNode {
        let Some((head, tail)) = at.split_first() else {
            return match value {
                Node::Object(other) => other.iter().fold(self.clone(), |acc, (key, node)| {
                    acc.with_node(node.clone(), Path::from_slice(std::slice::from_ref(key)))
                }),
                other => {
                    debug!(
                        node_type = other.type_name(),
                        "discarding non-object value placed at the empty path"
                    );
                    self.clone()
                }
            };
        };

        if tail.is_empty() && !value.is_object() {
            return self.inserted(head, value);
        }

        let child = match self.entries.get(head) {
            Some(Node::Object(existing)) => existing.with_node(value, tail),
            Some(replaced) => {
                trace!(
                    key = head,
                    node_type = replaced.type_name(),
                    "replacing value with a mapping"
                );
                ObjectNode::new().with_node(value, tail)
            }
            None => ObjectNode::new().with_node(value, tail),
        };
        self.inserted(head, Node::Object(child))
    }

    /// Returns the node bound at `path`, or `None` if it is absent.
    ///
    /// Lookup stops with `None` when a segment is missing or when an
    /// intermediate segment holds something other than a mapping. The empty
    /// path is always absent. A stored `Null` is returned as
    /// `Some(&Node::Null)`.
    pub fn get_node(&self, path: impl AsRef<Path>) -> Option<&Node> {
        self.lookup(path.as_ref())
    }

    fn lookup(&self, path: &Path) -> Option<&Node> {
        let (head, tail) = path.split_first()?;
        let node = self.entries.get(head)?;
        if tail.is_empty() {
            return Some(node);
        }
        match node {
            Node::Object(object) => object.lookup(tail),
            _ => None,
        }
    }

    /// Builds a new mapping holding only the values found at `paths`.
    ///
    /// Each path that resolves in `self` is re-inserted at the same path in
    /// the result, in the order given. Paths that do not resolve are skipped.
    ///
    /// ```
    /// # use jsonnode::{ObjectNode, path};
    /// let tree = ObjectNode::new()
    ///     .with("x", path!("a", "b"))
    ///     .with("y", path!("c"));
    ///
    /// let view = tree.extract([path!("a", "b"), path!("missing")]);
    /// assert_eq!(view, ObjectNode::new().with("x", path!("a", "b")));
    /// ```
    pub fn extract<I, P>(&self, paths: I) -> ObjectNode
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().fold(ObjectNode::new(), |acc, path| {
            let path = path.as_ref();
            match self.lookup(path) {
                Some(node) => acc.with_node(node.clone(), path),
                None => {
                    trace!(%path, "extract path did not resolve");
                    acc
                }
            }
        })
    }

    /// Deep-merges `other` into this mapping.
    ///
    /// Keys only on one side are kept. When both sides hold a mapping at the
    /// same key, the two are merged recursively; otherwise the value from
    /// `other` wins. Passing `None` returns the receiver unchanged.
    ///
    /// ```
    /// # use jsonnode::{ObjectNode, path};
    /// let left = ObjectNode::new().with(1, path!("a", "x")).with(1, path!("b"));
    /// let right = ObjectNode::new().with(2, path!("a", "y")).with(2, path!("b"));
    ///
    /// let merged = left.merge(&right);
    /// assert_eq!(merged.get_node(path!("a", "x")).and_then(|n| n.as_i64()), Some(1));
    /// assert_eq!(merged.get_node(path!("a", "y")).and_then(|n| n.as_i64()), Some(2));
    /// assert_eq!(merged.get_node(path!("b")).and_then(|n| n.as_i64()), Some(2));
    /// assert_eq!(left.merge(None), left);
    /// ```
    pub fn merge<'a>(&self, other: impl Into<Option<&'a ObjectNode>>) -> ObjectNode {
        match other.into() {
            Some(other) => self.with_node(Node::Object(other.clone()), Path::empty()),
            None => self.clone(),
        }
    }
}

impl PartialEq for ObjectNode {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order
        Arc::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

impl Eq for ObjectNode {}

impl Hash for ObjectNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        state.write_usize(entries.len());
        for (key, node) in entries {
            key.hash(state);
            node.hash(state);
        }
    }
}

impl fmt::Display for ObjectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, node)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {node}", quote(key))?;
        }
        write!(f, "}}")
    }
}

impl From<IndexMap<String, Node>> for ObjectNode {
    fn from(entries: IndexMap<String, Node>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

/// Binds each pair directly; a repeated key keeps its first position and
/// its last value.
impl<K, V> FromIterator<(K, V)> for ObjectNode
where
    K: Into<String>,
    V: Into<Node>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<IndexMap<_, _>>()
            .into()
    }
}

impl<'a> IntoIterator for &'a ObjectNode {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ObjectNode {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        Arc::unwrap_or_clone(self.entries).into_iter()
    }
}

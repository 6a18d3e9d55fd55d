//!
//! jsonnode: immutable JSON-shaped trees with path-addressed structural editing.
//!
//! ## Core Concepts
//!
//! * **Nodes (`Node`)**: A closed set of immutable values: `Null`, `Text`,
//!   `Bool`, `Number`, `Array` and `Object`. Equality and hashing are
//!   structural; mapping equality ignores key order.
//! * **Paths (`Path`, `PathBuf`)**: Ordered sequences of string segments that
//!   address a location inside nested mappings.
//! * **Mappings (`ObjectNode`)**: The only container addressable by path. Its
//!   editing operations (`with`, `get_node`, `extract`, `merge`) never mutate
//!   the receiver; each returns a new snapshot that shares untouched subtrees
//!   with the old one.
//! * **Conversion (`convert`)**: Plain Rust values become nodes through `From`
//!   impls, or at runtime through `convert::from_any`.
//! * **Builder (`builder`)**: Declarative assembly of a mapping from
//!   path/value pairs.
//! * **Pretty-printing (`pretty`)**: Indented, multi-line rendering.
//!
//! ```
//! use jsonnode::{Node, ObjectNode, PrettyPrint, path};
//!
//! let tree = ObjectNode::new()
//!     .with("Alice", path!("user", "name"))
//!     .with(30, path!("user", "age"))
//!     .with(true, path!("active"));
//!
//! let view = tree.extract([path!("user", "name"), path!("missing")]);
//! assert_eq!(view, ObjectNode::new().with("Alice", path!("user", "name")));
//! assert_eq!(view.pretty(), "{\n  \"user\": {\n    \"name\": \"Alice\"\n  }\n}");
//! ```

pub mod builder;
pub mod convert;
pub mod node;
pub mod path;
pub mod pretty;

pub use builder::{NodeBuilder, root};
pub use node::{Node, NodeError, Number, ObjectNode};
pub use path::{Path, PathBuf, PathError};
pub use pretty::{PrettyPrint, PrintOptions};

/// Result type used throughout the jsonnode library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the jsonnode library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Structured path errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured node access errors from the node module
    #[error(transparent)]
    Node(node::NodeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Node(_) => "node",
        }
    }

    /// Check if this error is path-related.
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this error is a node type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_type_error(),
            _ => false,
        }
    }
}

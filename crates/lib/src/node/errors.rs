//! Error types for typed access to nodes.
//!
//! The editing operations on [`ObjectNode`](super::ObjectNode) are total and
//! never fail; these errors only arise when a caller asks for a node to be
//! read as a specific Rust type.

use thiserror::Error;

/// Structured error types for node access.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NodeError {
    /// The node is not of the requested variant
    #[error("node type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// The number does not fit the requested numeric type
    #[error("number {value} does not fit in {target}")]
    NumberOutOfRange { value: String, target: &'static str },
}

impl NodeError {
    /// Check if this error is a variant mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, NodeError::TypeMismatch { .. })
    }

    /// Check if this error is a numeric range failure
    pub fn is_range_error(&self) -> bool {
        matches!(self, NodeError::NumberOutOfRange { .. })
    }
}

impl From<NodeError> for crate::Error {
    fn from(err: NodeError) -> Self {
        crate::Error::Node(err)
    }
}

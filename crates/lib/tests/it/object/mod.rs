//! ObjectNode integration tests
//!
//! Tests are organized by operation: path-merge (`with`), lookup
//! (`get_node`), projection (`extract`), and whole-subtree `merge`.

mod lookup_tests;

//! Parsing of `path=value` command line assignments.

use jsonnode::{Node, ObjectNode, PathBuf};

/// A single `path=value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub path: PathBuf,
    pub value: Node,
}

impl Assignment {
    /// Parses `a.b.c=value`. The path must have at least one segment.
    pub fn parse(text: &str) -> Result<Self, String> {
        let (path, value) = text
            .split_once('=')
            .ok_or_else(|| format!("expected `path=value`, got `{text}`"))?;
        let path = parse_path(path);
        if path.is_empty() {
            return Err(format!("`{text}` has no path segments"));
        }
        Ok(Self {
            path,
            value: parse_value(value),
        })
    }
}

/// Splits dot-separated text into a path, dropping empty segments.
pub fn parse_path(text: &str) -> PathBuf {
    let Ok(path) = text.parse::<PathBuf>();
    path
}

/// Reads `null`, `true`/`false`, an integer, or a float; anything else is text.
pub fn parse_value(text: &str) -> Node {
    match text {
        "null" => Node::Null,
        "true" => Node::Bool(true),
        "false" => Node::Bool(false),
        _ => {
            if let Ok(i) = text.parse::<i64>() {
                Node::from(i)
            } else if let Ok(u) = text.parse::<u64>() {
                Node::from(u)
            } else if let Ok(f) = text.parse::<f64>() {
                Node::from(f)
            } else {
                Node::from(text)
            }
        }
    }
}

/// Folds assignments, in order, into a new mapping.
pub fn build(assignments: &[Assignment]) -> ObjectNode {
    assignments
        .iter()
        .fold(ObjectNode::new(), |acc, a| acc.with(a.value.clone(), &a.path))
}

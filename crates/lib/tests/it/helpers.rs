//! Shared fixtures and random tree generators.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use jsonnode::{Node, Number, ObjectNode, PathBuf, path};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Number of random cases each property check runs.
pub const CASES: usize = 200;

/// Small key alphabet so that random paths collide with existing keys often.
const KEYS: &[&str] = &["a", "b", "c", "d", "name", "id"];

/// Creates a deterministic generator for the given test seed.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Hashes a value with the standard hasher.
pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// A small user record used across tests:
///
/// ```text
/// { "user": { "name": "Alice", "age": 30, "tags": ["a", "b"] }, "active": true }
/// ```
pub fn user_tree() -> ObjectNode {
    ObjectNode::new()
        .with("Alice", path!("user", "name"))
        .with(30, path!("user", "age"))
        .with(vec!["a", "b"], path!("user", "tags"))
        .with(true, path!("active"))
}

pub fn random_key(rng: &mut StdRng) -> String {
    KEYS[rng.gen_range(0..KEYS.len())].to_string()
}

pub fn random_path(rng: &mut StdRng) -> PathBuf {
    let len = rng.gen_range(1..=3);
    (0..len).map(|_| random_key(rng)).collect()
}

pub fn random_scalar(rng: &mut StdRng) -> Node {
    match rng.gen_range(0..6) {
        0 => Node::Null,
        1 => Node::Bool(rng.r#gen()),
        2 => Node::Text(format!("t{}", rng.gen_range(0..100))),
        3 => Node::Number(Number::Int(rng.gen_range(-50..50))),
        4 => Node::Number(Number::UInt(rng.gen_range(0..50))),
        _ => Node::Number(Number::Float(rng.gen_range(-10.0..10.0))),
    }
}

/// Generates a mapping with up to `depth` levels of nested mappings.
pub fn random_object(rng: &mut StdRng, depth: usize) -> ObjectNode {
    let keys = rng.gen_range(1..=5);
    (0..keys).fold(ObjectNode::new(), |acc, _| {
        let key = random_key(rng);
        let value = match rng.gen_range(0..4) {
            0 if depth > 0 => Node::Object(random_object(rng, depth - 1)),
            1 => Node::Array((0..rng.gen_range(0..3)).map(|_| random_scalar(rng)).collect()),
            _ => random_scalar(rng),
        };
        acc.with_key(value, key)
    })
}

/// Generates either a scalar or a mapping.
pub fn random_node(rng: &mut StdRng) -> Node {
    if rng.gen_bool(0.3) {
        Node::Object(random_object(rng, 2))
    } else {
        random_scalar(rng)
    }
}

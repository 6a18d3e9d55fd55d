//! Seeded randomized checks of the editing laws.

use jsonnode::{Node, ObjectNode, PathBuf};

use crate::helpers::*;

#[test]
fn test_lookup_after_insert() {
    let mut rng = rng(1);
    for _ in 0..CASES {
        let m = random_object(&mut rng, 2);
        let path = random_path(&mut rng);
        let v = random_scalar(&mut rng);

        let updated = m.with(v.clone(), &path);
        assert_eq!(updated.get_node(&path), Some(&v), "path {path} in {m}");
    }
}

#[test]
fn test_mapping_insert_is_visible_key_by_key() {
    let mut rng = rng(2);
    for _ in 0..CASES {
        let m = random_object(&mut rng, 1);
        let path = random_path(&mut rng);
        let v = random_object(&mut rng, 1);

        let updated = m.with(v.clone(), &path);
        for (key, node) in &v {
            let full = path.clone().push(key);
            // Nested mappings were merged, so only scalars compare exactly
            if !node.is_object() {
                assert_eq!(updated.get_node(&full), Some(node), "path {full}");
            }
        }
    }
}

#[test]
fn test_reinsert_is_idempotent() {
    let mut rng = rng(3);
    for _ in 0..CASES {
        let m = random_object(&mut rng, 2);
        let path = random_path(&mut rng);
        let v = random_node(&mut rng);

        let once = m.with(v.clone(), &path);
        let twice = once.with(v, &path);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_receiver_is_unchanged() {
    let mut rng = rng(4);
    for _ in 0..CASES {
        let m = random_object(&mut rng, 2);
        let snapshot = m.clone();
        let other = random_object(&mut rng, 2);

        let _ = m.with(random_node(&mut rng), random_path(&mut rng));
        let _ = m.merge(&other);
        let _ = m.extract([random_path(&mut rng)]);
        assert_eq!(m, snapshot);
        assert_eq!(hash_of(&m), hash_of(&snapshot));
    }
}

#[test]
fn test_empty_path_distributes_over_keys() {
    let mut rng = rng(5);
    for _ in 0..CASES {
        let m = random_object(&mut rng, 2);
        let v = random_object(&mut rng, 2);

        let folded = m.with(v.clone(), PathBuf::new());
        let chained = v
            .iter()
            .fold(m.clone(), |acc, (key, node)| acc.with_key(node.clone(), key));
        assert_eq!(folded, chained);
    }
}

#[test]
fn test_scalar_at_empty_path_is_noop() {
    let mut rng = rng(6);
    for _ in 0..CASES {
        let m = random_object(&mut rng, 2);
        assert_eq!(m.with(random_scalar(&mut rng), PathBuf::new()), m);
    }
}

#[test]
fn test_extract_of_inserted_path() {
    let mut rng = rng(7);
    for _ in 0..CASES {
        let path = random_path(&mut rng);
        let v = random_scalar(&mut rng);
        let m = ObjectNode::new().with(v, &path);

        assert_eq!(m.extract([&path]), m);
    }
}

#[test]
fn test_merge_with_empty_is_identity() {
    let mut rng = rng(8);
    for _ in 0..CASES {
        let m = random_object(&mut rng, 2);
        assert_eq!(m.merge(&ObjectNode::new()), m);
        assert_eq!(ObjectNode::new().merge(&m), m);
        assert_eq!(m.merge(None), m);
    }
}

#[test]
fn test_merge_is_idempotent() {
    let mut rng = rng(9);
    for _ in 0..CASES {
        let m = random_object(&mut rng, 2);
        let other = random_object(&mut rng, 2);
        let merged = m.merge(&other);
        assert_eq!(merged.merge(&other), merged);
    }
}

#[test]
fn test_equal_trees_hash_equal() {
    let mut rng = rng(10);
    for _ in 0..CASES {
        let m = random_object(&mut rng, 2);
        // Rebuild in reverse key order
        let reversed: ObjectNode = m
            .iter()
            .rev()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        assert_eq!(m, reversed);
        assert_eq!(hash_of(&m), hash_of(&reversed));
        assert_eq!(hash_of(&Node::Object(m)), hash_of(&Node::Object(reversed)));
    }
}

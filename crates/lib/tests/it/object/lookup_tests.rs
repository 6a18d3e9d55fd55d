use jsonnode::{Node, ObjectNode, PathBuf, path};

use crate::helpers::*;

#[test]
fn test_lookup_present_values() {
    let tree = user_tree();
    assert_eq!(
        tree.get_node(path!("user", "name")),
        Some(&Node::from("Alice"))
    );
    assert_eq!(tree.get_node(path!("active")), Some(&Node::from(true)));
    assert!(tree.get_node(path!("user")).unwrap().is_object());
}

#[test]
fn test_lookup_missing_segment_is_absent() {
    let tree = user_tree();
    assert!(tree.get_node(path!("nope")).is_none());
    assert!(tree.get_node(path!("user", "nope")).is_none());
    assert!(tree.get_node(path!("user", "name", "first")).is_none());
}

#[test]
fn test_lookup_cannot_descend_through_non_mappings() {
    let tree = user_tree();
    // "tags" is an array, "active" a bool
    assert!(tree.get_node(path!("user", "tags", "0")).is_none());
    assert!(tree.get_node(path!("active", "x")).is_none());
}

#[test]
fn test_lookup_empty_path_is_absent() {
    assert!(user_tree().get_node(PathBuf::new()).is_none());
    assert!(ObjectNode::new().get_node(path!()).is_none());
}

#[test]
fn test_absent_is_distinct_from_present_null() {
    let tree = ObjectNode::new().with(Node::Null, path!("maybe"));
    assert_eq!(tree.get_node(path!("maybe")), Some(&Node::Null));
    assert_eq!(tree.get_node(path!("other")), None);
}

#[test]
fn test_lookup_on_empty_mapping() {
    let empty = ObjectNode::new();
    let mut rng = rng(7);
    for _ in 0..CASES {
        let path = random_path(&mut rng);
        assert!(empty.get_node(&path).is_none(), "{path} should be absent");
    }
}

use jsonnode::{Node, Number, ObjectNode, convert::from_any, path};
use serde_json::json;

#[test]
fn test_static_conversions() {
    assert_eq!(Node::from(()), Node::Null);
    assert_eq!(Node::from(None::<&str>), Node::Null);
    assert_eq!(Node::from(Some(1)), Node::from(1));
    assert_eq!(Node::from(String::from("s")), Node::Text("s".into()));
    assert_eq!(Node::from('c'), Node::Text("c".into()));
    assert_eq!(Node::from(-5i8), Node::Number(Number::Int(-5)));
    assert_eq!(Node::from(5usize), Node::Number(Number::UInt(5)));
    assert_eq!(Node::from(0.5f32), Node::Number(Number::Float(0.5)));
}

#[test]
fn test_sequences_convert_recursively() {
    let nested = Node::from(vec![vec![1, 2], vec![3]]);
    assert_eq!(
        nested,
        Node::Array(vec![
            Node::Array(vec![Node::from(1), Node::from(2)]),
            Node::Array(vec![Node::from(3)]),
        ])
    );

    let slice: &[&str] = &["a", "b"];
    assert_eq!(Node::from(slice), Node::from(["a", "b"]));
}

#[test]
fn test_nodes_pass_through_unchanged() {
    let node = Node::from(vec![Node::Null, Node::from(ObjectNode::new())]);
    let tree = ObjectNode::new().with(node.clone(), path!("k"));
    assert_eq!(tree.get("k"), Some(&node));
}

#[test]
fn test_raw_values_and_nodes_are_interchangeable() {
    let raw = ObjectNode::new().with("x", path!("a"));
    let built = ObjectNode::new().with(Node::Text("x".to_string()), path!("a"));
    assert_eq!(raw, built);
}

#[test]
fn test_dynamic_conversion() {
    let values: Vec<Box<dyn std::any::Any>> = vec![
        Box::new(1i64),
        Box::new("text"),
        Box::new(vec![true, false]),
        Box::new(Node::from(9)),
        Box::new(std::time::Instant::now()),
    ];
    let nodes: Vec<Node> = values.iter().map(|v| from_any(&**v)).collect();

    assert_eq!(
        nodes,
        vec![
            Node::from(1),
            Node::from("text"),
            Node::from(vec![true, false]),
            Node::from(9),
            Node::Null,
        ]
    );
}

#[test]
fn test_json_value_round_trip() {
    let value = json!({
        "user": {"name": "Alice", "ids": [1, 2, 3]},
        "big": u64::MAX,
        "ratio": 0.25,
        "none": null
    });
    let node = Node::from(value.clone());

    assert_eq!(
        node.as_object().and_then(|o| o.get_node(path!("big"))),
        Some(&Node::Number(Number::UInt(u64::MAX)))
    );
    assert_eq!(serde_json::Value::from(&node), value);
}

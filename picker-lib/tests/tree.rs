use picker_lib::{NodeType, Tree, TreeError, TreeNode};

#[test]
fn test_deserialize_tree() {
    let json = r#"[{"id": "org", "name": "可选择用户", "type": "organization",
        "children": [{"id": "u1", "name": "张三", "type": "person"}]}]"#;
    let tree: Tree = serde_json::from_str(json).unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.node_type("org"), Some(NodeType::Group));
    assert_eq!(tree.find("u1").map(|n| n.name.as_str()), Some("张三"));
}

#[test]
fn test_deserialize_rejects_duplicate_ids() {
    let json = r#"[{"id": "a", "name": "A", "type": "person"},
                   {"id": "a", "name": "B", "type": "person"}]"#;
    let err = serde_json::from_str::<Tree>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate node id: a"));
}

#[test]
fn test_duplicate_group_and_leaf_ids() {
    let roots = vec![TreeNode::group("x", "Group", vec![TreeNode::leaf("x", "Leaf")])];
    assert!(matches!(Tree::new(roots), Err(TreeError::DuplicateId { .. })));
}

#[test]
fn test_empty_id_rejected() {
    let roots = vec![TreeNode::leaf("", "Nameless")];
    match Tree::new(roots) {
        Err(TreeError::EmptyId { name }) => assert_eq!(name, "Nameless"),
        other => panic!("expected empty id error, got {other:?}"),
    }
}

#[test]
fn test_find_missing_and_group_ids() {
    let tree = Tree::new(vec![
        TreeNode::group("a", "A", vec![TreeNode::group("b", "B", vec![])]),
        TreeNode::leaf("c", "C"),
    ])
    .unwrap();
    assert!(tree.find("zzz").is_none());
    let mut groups: Vec<&str> = tree.group_ids().collect();
    groups.sort();
    assert_eq!(groups, ["a", "b"]);
}

#[test]
fn test_serialize_round_trip_shape() {
    let tree = Tree::new(vec![TreeNode::group("org", "Org", vec![TreeNode::leaf("u1", "A")])]).unwrap();
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json[0]["type"], "organization");
    assert_eq!(json[0]["children"][0]["type"], "person");
}

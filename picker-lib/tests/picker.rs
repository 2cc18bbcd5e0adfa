use std::cell::RefCell;
use std::rc::Rc;

use picker_lib::{Picker, Tree, TreeNode};

fn tree() -> Tree {
    Tree::new(vec![TreeNode::group(
        "org",
        "可选择用户",
        vec![TreeNode::leaf("u1", "张三"), TreeNode::leaf("u2", "李四")],
    )])
    .unwrap()
}

fn row_ids(picker: &Picker) -> Vec<String> {
    picker.rows().iter().map(|r| r.node.id.clone()).collect()
}

#[test]
fn test_expand_then_search() {
    let mut picker = Picker::new(tree());
    assert_eq!(row_ids(&picker), ["org"]);

    picker.toggle_expand("org");
    assert!(picker.is_expanded("org"));
    assert_eq!(row_ids(&picker), ["org", "u1", "u2"]);

    picker.set_search("李");
    assert_eq!(picker.search(), "李");
    assert_eq!(row_ids(&picker), ["org", "u2"]);

    picker.set_search("");
    assert_eq!(row_ids(&picker), ["org", "u1", "u2"]);
}

#[test]
fn test_toggle_expand_on_leaf_is_ignored() {
    let mut picker = Picker::new(tree());
    picker.toggle_expand("u1");
    assert!(picker.expansion().is_empty());
}

#[test]
fn test_expand_all_and_collapse_all() {
    let mut picker = Picker::new(tree());
    picker.expand_all();
    assert_eq!(row_ids(&picker).len(), 3);
    picker.collapse_all();
    assert_eq!(row_ids(&picker), ["org"]);
}

#[test]
fn test_selection_reported_and_presented() {
    let reports: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
    let sink = Rc::clone(&reports);
    let mut picker =
        Picker::new(tree()).with_on_select(move |ids| sink.borrow_mut().push(ids.to_vec()));

    picker.expand_all();
    picker.toggle_select("u2");
    picker.toggle_select("org");

    assert_eq!(picker.selected_ids(), ["u2"]);
    assert_eq!(*reports.borrow(), vec![vec!["u2".to_string()]]);

    let rows = picker.presented_rows();
    let selected: Vec<&str> = rows.iter().filter(|r| r.selected).map(|r| r.id).collect();
    assert_eq!(selected, ["u2"]);
}

#[test]
fn test_set_tree_prunes_state() {
    let mut picker = Picker::new(tree());
    picker.expand_all();
    picker.toggle_select("u1");
    picker.toggle_select("u2");

    let refreshed = Tree::new(vec![TreeNode::group(
        "org",
        "可选择用户",
        vec![TreeNode::leaf("u2", "李四"), TreeNode::leaf("u3", "王五")],
    )])
    .unwrap();
    picker.set_tree(refreshed);

    assert!(picker.is_expanded("org"));
    assert_eq!(picker.selected_ids(), ["u2"]);
    assert_eq!(row_ids(&picker), ["org", "u2", "u3"]);
}

#[test]
fn test_clear_selection() {
    let mut picker = Picker::new(tree());
    picker.toggle_select("u1");
    picker.clear_selection();
    assert!(picker.selection().is_empty());
}

#[test]
fn test_set_search_accepts_any_text() {
    let mut picker = Picker::new(tree());
    picker.set_search(&"k".repeat(50_000));
    assert!(picker.rows().is_empty());
    picker.set_search("(");
    assert!(picker.rows().is_empty());
}

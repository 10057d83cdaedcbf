use pretty_assertions::assert_eq;
use tree_sitter::{Node, Tree};

fn parse(source: &str) -> Tree {
    let mut parser = tree_sitter_roxygen2::parser().unwrap();
    parser.parse(source, None).unwrap()
}

fn named_kinds(node: Node) -> Vec<&'static str> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).map(|child| child.kind()).collect()
}

#[test]
fn description_only() {
    let tree = parse("/** Compute a sum. */");
    let root = tree.root_node();

    assert_eq!(root.kind(), "document");
    assert!(!root.has_error());
    assert_eq!(named_kinds(root), vec!["description"]);
}

#[test]
fn block_tag() {
    let source = "/** @return Nothing. */";
    let tree = parse(source);
    let root = tree.root_node();

    assert_eq!(root.kind(), "document");
    assert_eq!(named_kinds(root), vec!["tag"]);

    let mut cursor = root.walk();
    let tag = root.named_children(&mut cursor).next().unwrap();
    let mut cursor = tag.walk();
    let tag_name = tag
        .named_children(&mut cursor)
        .find(|child| child.kind() == "tag_name")
        .unwrap();
    assert_eq!(tag_name.utf8_text(source.as_bytes()).unwrap(), "@return");
}

#[test]
fn empty_comment() {
    let tree = parse("/**/");
    let root = tree.root_node();

    assert_eq!(root.kind(), "document");
    assert!(!root.has_error());
    assert_eq!(root.named_child_count(), 0);
}

//! Node lists survive a trip through JSON, holes included.

#![cfg(feature = "serde")]

use nodeseq::{ArrayMethods, Element, Node, NodeList};

#[test]
fn sparse_list_through_json() {
    let list: NodeList = [
        Some(Element::tag("item").with_attribute("id", "1").with_text("one")),
        None,
        Some(Element::text("tail")),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&list).unwrap();
    let back: NodeList = serde_json::from_str(&json).unwrap();

    assert_eq!(back, list);
    assert_eq!(back.holes(), 1);
}

#[test]
fn node_through_json_keeps_working() {
    let node = Node::from(["b", "a"].into_iter().map(Element::text).collect::<NodeList>());
    let json = serde_json::to_value(&node).unwrap();
    let mut back: Node = serde_json::from_value(json).unwrap();

    assert_eq!(back.push([Node::from("c")]), Ok(3));
    assert_eq!(back.join(",").unwrap(), "b,a,c");
}

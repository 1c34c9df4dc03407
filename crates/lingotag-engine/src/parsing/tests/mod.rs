//! Cross-cutting parser properties: structural invariants that must hold
//! for every well-formed input, independent of any particular tree shape.

use crate::parsing::{AllTags, Node, parse};
use pretty_assertions::assert_eq;
use regex::Regex;

/// Concatenates every text leaf in document order.
fn collected_text(nodes: &[Node]) -> String {
    nodes.iter().map(Node::plain_text).collect()
}

/// Strips all valid tag tokens from the input.
fn without_tag_tokens(input: &str) -> String {
    let token = Regex::new(r"</?[A-Za-z]\w*>").unwrap();
    token.replace_all(input, "").into_owned()
}

#[test]
fn text_leaves_reassemble_the_untagged_input() {
    let inputs = [
        "",
        "no tags at all",
        "<a>wrapped</a>",
        "Text with <Bold>tags</Bold>, some <Bold>are even <Italic>nested</Italic></Bold>!",
        "a<x>b<y>c</y>d</x>e",
        "français <em>déjà</em> vu",
        "<outer><inner>deep</inner></outer>",
    ];

    for input in inputs {
        let nodes = parse(input, &AllTags).unwrap();
        assert_eq!(
            collected_text(&nodes),
            without_tag_tokens(input),
            "input: {input:?}"
        );
    }
}

#[test]
fn text_runs_never_cross_element_boundaries() {
    let nodes = parse("left<m>mid</m>right", &AllTags).unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::text("left"),
            Node::element("m", vec![Node::text("mid")]),
            Node::text("right"),
        ]
    );
}

#[test]
fn deep_nesting_does_not_recurse() {
    // The open-tag stack is an explicit Vec, so depth is limited by memory,
    // not the call stack.
    let depth = 500;
    let input = format!("{}x{}", "<d>".repeat(depth), "</d>".repeat(depth));

    let mut nodes = parse(&input, &AllTags).unwrap();
    for _ in 0..depth {
        assert_eq!(nodes.len(), 1);
        match nodes.remove(0) {
            Node::Element { name, children } => {
                assert_eq!(name, "d");
                nodes = children;
            }
            other => panic!("expected element, got {other:?}"),
        }
    }
    assert_eq!(nodes, vec![Node::text("x")]);
}

#[test]
fn parser_keeps_no_state_across_calls() {
    let first = parse("<a>one</a>", &AllTags).unwrap();
    let _ = parse("<b>two", &AllTags).unwrap_err();
    let second = parse("<a>one</a>", &AllTags).unwrap();
    assert_eq!(first, second);
}

#[test]
fn representative_tree_shapes() {
    let nodes = parse("Hi <B>there</B>", &AllTags).unwrap();
    insta::assert_compact_debug_snapshot!(
        nodes,
        @r#"[Text("Hi "), Element { name: "B", children: [Text("there")] }]"#
    );

    let nodes = parse("<Note><Em>a</Em>b</Note>", &AllTags).unwrap();
    insta::assert_compact_debug_snapshot!(
        nodes,
        @r#"[Element { name: "Note", children: [Element { name: "Em", children: [Text("a")] }, Text("b")] }]"#
    );
}

//! # Tree rendering
//!
//! Maps parsed [`Node`] trees onto caller-supplied renderable units. The
//! engine never inspects what a renderable is: a [`ComponentMap`] pairs
//! each tag name with a constructor over the caller's own output type, and
//! [`render_tree`] walks the tree bottom-up invoking them.

pub mod html;

use std::collections::HashMap;
use std::fmt;

use crate::parsing::{KnownTags, Node, ParseError, parse};

pub use html::{html_components, render_to_html};

type ComponentFn<R> = Box<dyn Fn(Vec<R>) -> R + Send + Sync>;
type TextFn<R> = Box<dyn Fn(&str) -> R + Send + Sync>;

/// Maps tag names to renderable-unit constructors.
///
/// Generic over the caller's renderable type `R`: a constructor receives the
/// element's already-rendered children and produces the element's own
/// renderable. A separate text constructor turns text leaves into `R`.
///
/// A `ComponentMap` implements [`KnownTags`], so the same value drives both
/// parsing (membership) and rendering (construction).
pub struct ComponentMap<R> {
    components: HashMap<String, ComponentFn<R>>,
    text: TextFn<R>,
}

impl<R> ComponentMap<R> {
    /// Creates an empty map with the given text-leaf constructor.
    pub fn new(text: impl Fn(&str) -> R + Send + Sync + 'static) -> Self {
        Self {
            components: HashMap::new(),
            text: Box::new(text),
        }
    }

    /// Registers a constructor for `name`, replacing any previous one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        construct: impl Fn(Vec<R>) -> R + Send + Sync + 'static,
    ) {
        self.components.insert(name.into(), Box::new(construct));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_component(
        mut self,
        name: impl Into<String>,
        construct: impl Fn(Vec<R>) -> R + Send + Sync + 'static,
    ) -> Self {
        self.insert(name, construct);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn render_node(&self, node: &Node, out: &mut Vec<R>) {
        match node {
            Node::Text(content) => out.push((self.text)(content)),
            Node::Element { name, children } => {
                let mut rendered = Vec::with_capacity(children.len());
                for child in children {
                    self.render_node(child, &mut rendered);
                }
                match self.components.get(name) {
                    Some(construct) => out.push(construct(rendered)),
                    // Unreachable for trees parsed against this same map;
                    // foreign trees splice the children through unwrapped.
                    None => out.extend(rendered),
                }
            }
        }
    }
}

impl<R> KnownTags for ComponentMap<R> {
    fn is_known(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<R> fmt::Debug for ComponentMap<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ComponentMap")
            .field("components", &names)
            .finish()
    }
}

/// Renders a parsed tree through the map's constructors, bottom-up,
/// preserving document order.
pub fn render_tree<R>(nodes: &[Node], components: &ComponentMap<R>) -> Vec<R> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        components.render_node(node, &mut out);
    }
    out
}

/// Parses `text` and renders the resulting tree in one step, using
/// `components` both as the set of known tags and as the constructors.
pub fn render_text<R>(text: &str, components: &ComponentMap<R>) -> Result<Vec<R>, ParseError> {
    let nodes = parse(text, components)?;
    Ok(render_tree(&nodes, components))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A minimal renderable for exercising the generic bridge.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Out {
        Plain(String),
        Styled(&'static str, Vec<Out>),
    }

    fn test_components() -> ComponentMap<Out> {
        ComponentMap::new(|text| Out::Plain(text.to_string()))
            .with_component("Bold", |children| Out::Styled("bold", children))
            .with_component("Italic", |children| Out::Styled("italic", children))
    }

    #[test]
    fn map_is_a_known_tags_source() {
        let map = test_components();
        assert!(map.is_known("Bold"));
        assert!(!map.is_known("Link"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn renders_text_and_elements_in_document_order() {
        let rendered = render_text("a <Bold>b <Italic>c</Italic></Bold> d", &test_components())
            .unwrap();
        assert_eq!(
            rendered,
            vec![
                Out::Plain("a ".to_string()),
                Out::Styled(
                    "bold",
                    vec![
                        Out::Plain("b ".to_string()),
                        Out::Styled("italic", vec![Out::Plain("c".to_string())]),
                    ]
                ),
                Out::Plain(" d".to_string()),
            ]
        );
    }

    #[test]
    fn parse_errors_pass_through() {
        let err = render_text("broken <Bold>text", &test_components()).unwrap_err();
        assert_eq!(err.position(), 7);
    }

    #[test]
    fn unknown_tag_fails_before_construction() {
        let err = render_text("<Link>here</Link>", &test_components()).unwrap_err();
        assert!(matches!(err, ParseError::TagIsNotKnown { .. }));
    }

    #[test]
    fn foreign_trees_splice_unregistered_elements() {
        // A tree built elsewhere may name tags this map has never seen;
        // their children still render, unwrapped.
        let nodes = vec![Node::element(
            "Missing",
            vec![Node::text("inner")],
        )];
        let rendered = render_tree(&nodes, &test_components());
        assert_eq!(rendered, vec![Out::Plain("inner".to_string())]);
    }

    #[test]
    fn replacing_a_constructor_keeps_one_entry() {
        let mut map = test_components();
        map.insert("Bold", |children| Out::Styled("strong", children));
        assert_eq!(map.len(), 2);

        let rendered = render_text("<Bold>x</Bold>", &map).unwrap();
        assert_eq!(
            rendered,
            vec![Out::Styled("strong", vec![Out::Plain("x".to_string())])]
        );
    }
}

/// A node in a parsed markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A run of plain text between tag boundaries, preserved verbatim.
    Text(String),
    /// A named container produced by a matched opening/closing tag pair.
    Element {
        /// Tag name as it appeared in the source (case-preserving).
        name: String,
        /// Ordered content of the element.
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn element(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            name: name.into(),
            children,
        }
    }

    /// Concatenates the text leaves of this subtree in document order.
    pub fn plain_text(&self) -> String {
        match self {
            Node::Text(content) => content.clone(),
            Node::Element { children, .. } => {
                children.iter().map(Node::plain_text).collect::<String>()
            }
        }
    }
}

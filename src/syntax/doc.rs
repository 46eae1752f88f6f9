//! The documentation tree.

/// One node of a documentation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocNode {
    /// Literal text, emitted verbatim.
    Text(String),
    /// A cross-reference with an optional label sub-tree.
    Link {
        signature: String,
        label: Vec<DocNode>,
    },
    /// A group of nodes rendered in order.
    Container(Vec<DocNode>),
    /// Splices the rendering of a direct sub-module.
    Inclusion(String),
}

impl DocNode {
    /// Shorthand for a [`DocNode::Text`].
    pub fn text(body: impl Into<String>) -> Self {
        DocNode::Text(body.into())
    }

    /// Shorthand for an unlabelled [`DocNode::Link`].
    pub fn link(signature: impl Into<String>) -> Self {
        DocNode::Link {
            signature: signature.into(),
            label: Vec::new(),
        }
    }

    /// Shorthand for a [`DocNode::Link`] with a plain-text label.
    pub fn labelled_link(signature: impl Into<String>, label: impl Into<String>) -> Self {
        DocNode::Link {
            signature: signature.into(),
            label: vec![DocNode::Text(label.into())],
        }
    }

    /// Shorthand for a [`DocNode::Inclusion`].
    pub fn include(target: impl Into<String>) -> Self {
        DocNode::Inclusion(target.into())
    }

    /// Append the text bodies of this node to `out`.
    ///
    /// Link labels contribute their text; inclusion targets contribute
    /// nothing.
    pub fn collect_text(&self, out: &mut String) {
        match self {
            DocNode::Text(body) => out.push_str(body),
            DocNode::Link { label, .. } => label.iter().for_each(|n| n.collect_text(out)),
            DocNode::Container(children) => children.iter().for_each(|n| n.collect_text(out)),
            DocNode::Inclusion(_) => {}
        }
    }
}

/// The ordered top-level nodes of a module's documentation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocTree {
    pub nodes: Vec<DocNode>,
}

impl DocTree {
    pub fn new(nodes: Vec<DocNode>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Plain text of a node sequence, ignoring link resolution.
    pub fn plain_text(nodes: &[DocNode]) -> String {
        let mut out = String::new();
        nodes.iter().for_each(|n| n.collect_text(&mut out));
        out
    }
}

impl From<Vec<DocNode>> for DocTree {
    fn from(nodes: Vec<DocNode>) -> Self {
        Self::new(nodes)
    }
}

//! Markup element lookup.
//!
//! Pages often embed shader sources in script-like elements tagged with a
//! type such as `x-shader/x-vertex`. [`ElementLookup`] is the one capability
//! the shader compiler needs from such a page; [`Document`] is an in-memory
//! implementation keyed by element id.

use fxhash::FxHashMap;

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// An element with a declared type string and child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    kind: String,
    children: Vec<Node>,
}

impl Element {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// The declared type string, e.g. `x-shader/x-fragment`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenation of the direct text children. Nested elements are skipped.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

/// Resolves elements by name.
pub trait ElementLookup {
    fn element(&self, name: &str) -> Option<&Element>;
}

/// In-memory set of named elements.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: FxHashMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `element` under `id`, returning any element it replaced.
    pub fn insert(&mut self, id: impl Into<String>, element: Element) -> Option<Element> {
        self.elements.insert(id.into(), element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementLookup for Document {
    fn element(&self, name: &str) -> Option<&Element> {
        self.elements.get(name)
    }
}

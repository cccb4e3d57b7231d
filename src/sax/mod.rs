//! SAX-style event interface for building trees.
//!
//! A parser reports what it reads through [`SaxHandler`] callbacks.
//! [`TreeBuilder`] is the handler that turns those events into nodes: it
//! creates one node per event and inserts it with a single
//! [`Tree::add_child`] call, so nodes enter the tree strictly in document
//! order and never while already attached.
//!
//! # Examples
//!
//! ```
//! use xmlnode::sax::{SaxHandler, TreeBuilder};
//! use xmlnode::serial::xml_string;
//!
//! let mut builder = TreeBuilder::new();
//! builder.start_document();
//! builder.start_element("greeting", &[("lang".to_string(), "en".to_string())]);
//! builder.characters("hi");
//! builder.end_element("greeting");
//! builder.end_document();
//!
//! let (tree, doc) = builder.finish();
//! assert_eq!(xml_string(&tree, doc), "<greeting lang=\"en\">hi</greeting>");
//! ```

use crate::tree::{NodeId, Tree};

/// A SAX event handler trait.
///
/// Implement the callbacks you care about; all methods have default no-op
/// implementations so you only need to override what you need.
///
/// # Attribute pairs
///
/// Attributes are passed as `(qualified_name, value)` pairs with entity
/// and character references already expanded. Namespace declarations
/// (`xmlns`, `xmlns:prefix`) arrive as ordinary attributes.
#[allow(unused_variables)]
pub trait SaxHandler {
    /// Called at the start of the document, before any other events.
    fn start_document(&mut self) {}

    /// Called at the end of the document, after all other events.
    fn end_document(&mut self) {}

    /// Called when an element start tag is encountered.
    fn start_element(&mut self, name: &str, attributes: &[(String, String)]) {}

    /// Called when an element end tag is encountered (or a self-closing tag ends).
    fn end_element(&mut self, name: &str) {}

    /// Called for character data (text content).
    fn characters(&mut self, content: &str) {}

    /// Called for XML comments.
    fn comment(&mut self, content: &str) {}

    /// Called for processing instructions.
    fn processing_instruction(&mut self, target: &str, data: Option<&str>) {}
}

/// A [`SaxHandler`] that builds a node tree under a fresh document node.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: Tree,
    document: NodeId,
    /// Open elements, innermost last. The document sits at the bottom.
    open: Vec<NodeId>,
}

impl TreeBuilder {
    /// Creates a builder with a new, empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tree(Tree::new())
    }

    /// Creates a builder that adds a new document to an existing tree.
    #[must_use]
    pub fn with_tree(mut tree: Tree) -> Self {
        let document = tree.new_document();
        Self {
            tree,
            document,
            open: vec![document],
        }
    }

    /// Returns the document node being built.
    #[must_use]
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// Returns the tree built so far.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Consumes the builder, returning the tree and its document node.
    #[must_use]
    pub fn finish(self) -> (Tree, NodeId) {
        (self.tree, self.document)
    }

    fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or(self.document)
    }

    fn append(&mut self, node: NodeId) {
        let parent = self.current();
        self.tree.add_child(parent, node);
    }

    fn new_attribute_like(&mut self, name: &str, value: &str) -> NodeId {
        if name == "xmlns" {
            self.tree.new_namespace("", value)
        } else if let Some(prefix) = name.strip_prefix("xmlns:") {
            self.tree.new_namespace(prefix, value)
        } else {
            self.tree.new_attribute(name, value)
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SaxHandler for TreeBuilder {
    fn start_document(&mut self) {
        self.open.truncate(1);
    }

    fn end_document(&mut self) {
        if self.open.len() > 1 {
            log::debug!("{} elements left open at end of document", self.open.len() - 1);
            self.open.truncate(1);
        }
    }

    fn start_element(&mut self, name: &str, attributes: &[(String, String)]) {
        let element = self.tree.new_element(name);
        self.append(element);
        for (attr_name, value) in attributes {
            let attr = self.new_attribute_like(attr_name, value);
            self.tree.add_child(element, attr);
        }
        self.open.push(element);
    }

    fn end_element(&mut self, name: &str) {
        if self.open.len() <= 1 {
            log::debug!("ignoring unmatched end tag </{name}>");
            return;
        }
        if let Some(element) = self.open.pop() {
            if self.tree.name(element) != Some(name) {
                log::debug!(
                    "end tag </{name}> closes <{}>",
                    self.tree.name(element).unwrap_or_default()
                );
            }
        }
    }

    fn characters(&mut self, content: &str) {
        if content.is_empty() {
            return;
        }
        let text = self.tree.new_text(content);
        self.append(text);
    }

    fn comment(&mut self, content: &str) {
        let comment = self.tree.new_comment(content);
        self.append(comment);
    }

    fn processing_instruction(&mut self, target: &str, data: Option<&str>) {
        let pi = self
            .tree
            .new_processing_instruction(target, data.unwrap_or_default());
        self.append(pi);
    }
}

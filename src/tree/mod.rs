//! Arena-based XML node tree.
//!
//! This module implements the node store using arena allocation with typed
//! indices. All nodes live in a contiguous `Vec<NodeData>` owned by the
//! `Tree`, and are referenced by `NodeId`, a newtype over `NonZeroU32`.
//!
//! # Architecture
//!
//! A parent owns its children list; every other link (parent, siblings,
//! first and last child, root document) is a plain `NodeId`. No link owns
//! anything, so there are no reference cycles, and a detached node is simply
//! unreachable until the `Tree` is dropped.
//!
//! Each parent keeps a child count, and each child keeps its 0-based
//! position among its siblings. The child-list operations in this module keep
//! the following true after every call:
//!
//! - a node has at most one parent;
//! - walking `next_sibling` from `first_child` visits exactly `child_count`
//!   nodes and ends at `last_child`;
//! - every child's `index` is its offset from `first_child`;
//! - a detached node has no parent, no siblings and no index.

mod children;
mod navigate;
mod node;
mod path;

pub use navigate::{Ancestors, Children, Descendants};
pub use node::NodeKind;

use crate::error::TreeError;
use crate::util::qname;
use std::num::NonZeroU32;

/// A typed index into the tree's node arena.
///
/// `NodeId` is a newtype over `NonZeroU32`, meaning it can never be zero
/// and `Option<NodeId>` has the same size as `NodeId` (niche optimization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0.
    #[allow(clippy::expect_used, clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Self {
        Self(NonZeroU32::new(index as u32).expect("NodeId index must be non-zero"))
    }

    /// Returns the raw index as a `usize` for indexing into the arena.
    fn as_index(self) -> usize {
        self.0.get() as usize
    }

    /// Converts this `NodeId` to a raw `u32`.
    #[must_use]
    pub fn into_raw(self) -> u32 {
        self.0.get()
    }

    /// Creates a `NodeId` from a raw `u32`, if non-zero.
    #[must_use]
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }
}

/// Storage for a single node in the arena.
///
/// Read it through [`Tree::node`]; every mutation goes through `Tree` so the
/// sibling links, indices and counts stay consistent.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// What kind of node this is. Never changes.
    pub kind: NodeKind,
    /// The node's qualified name, if it has one.
    pub name: Option<String>,
    /// Stored content. Container kinds keep their text in child nodes instead.
    pub value: Option<String>,
    /// Namespace or origin URI. Stored, never interpreted.
    pub uri: Option<String>,
    /// Parent node, if attached.
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Last child node (for O(1) append).
    pub last_child: Option<NodeId>,
    /// Next sibling.
    pub next_sibling: Option<NodeId>,
    /// Previous sibling.
    pub prev_sibling: Option<NodeId>,
    /// Number of children in the sibling chain.
    pub child_count: usize,
    /// 0-based position among siblings; `None` while detached.
    pub index: Option<usize>,
    /// The document this node was first attached under.
    ///
    /// Set once, when the node is first inserted below a node that already
    /// has a document, and never refreshed on later moves.
    pub root_document: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: None,
            value: None,
            uri: None,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling: None,
            child_count: 0,
            index: None,
            root_document: None,
        }
    }
}

/// An arena holding any number of XML nodes and the trees they form.
///
/// Nodes are created detached by the `new_*` factories and enter a tree
/// through [`insert_child`](Tree::insert_child) and friends. All access goes
/// through `&Tree` (navigation) or `&mut Tree` (mutation).
///
/// # Examples
///
/// ```
/// use xmlnode::Tree;
///
/// let mut tree = Tree::new();
/// let root = tree.new_element("root");
/// let doc = tree.new_document_with_root(root);
/// let child = tree.new_element_with_value("child", "Hello");
/// tree.add_child(root, child);
///
/// assert_eq!(tree.root_element(doc), Some(root));
/// assert_eq!(tree.string_value(root).as_deref(), Some("Hello"));
/// assert_eq!(tree.xpath(child).as_deref(), Some("root/child"));
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    /// The node arena. Index 0 is unused (placeholder for `NonZeroU32`).
    nodes: Vec<NodeData>,
}

impl Tree {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        // Index 0: placeholder (NodeId uses NonZeroU32)
        nodes.push(NodeData::new(NodeKind::Invalid));
        Self { nodes }
    }

    /// Returns a reference to the `NodeData` for the given node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a node of this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.as_index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.as_index()]
    }

    /// Returns the total number of nodes ever allocated (attached or not).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1 // subtract placeholder at index 0
    }

    // --- Factories ---

    /// Allocates a new, detached node of the given kind.
    ///
    /// A document node is its own root document.
    pub fn new_node(&mut self, kind: NodeKind) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(NodeData::new(kind));
        let id = NodeId::from_index(index);
        if kind == NodeKind::Document {
            self.node_mut(id).root_document = Some(id);
        }
        id
    }

    fn new_named(&mut self, kind: NodeKind, name: &str, value: Option<&str>) -> NodeId {
        let id = self.new_node(kind);
        let data = self.node_mut(id);
        data.name = Some(name.to_string());
        data.value = value.map(str::to_string);
        id
    }

    /// Returns an empty document node.
    pub fn new_document(&mut self) -> NodeId {
        self.new_node(NodeKind::Document)
    }

    /// Returns a document node whose only child is `root`.
    ///
    /// # Panics
    ///
    /// Panics if `root` is already attached.
    pub fn new_document_with_root(&mut self, root: NodeId) -> NodeId {
        let doc = self.new_document();
        self.add_child(doc, root);
        doc
    }

    /// Returns an element `<name></name>`.
    pub fn new_element(&mut self, name: &str) -> NodeId {
        self.new_named(NodeKind::Element, name, None)
    }

    /// Returns an element whose namespace URI is `uri`.
    pub fn new_element_with_uri(&mut self, name: &str, uri: &str) -> NodeId {
        let id = self.new_element(name);
        self.node_mut(id).uri = Some(uri.to_string());
        id
    }

    /// Returns an element with a single text child, `<name>value</name>`.
    pub fn new_element_with_value(&mut self, name: &str, value: &str) -> NodeId {
        let id = self.new_element(name);
        self.set_string_value(id, Some(value));
        id
    }

    /// Returns an element holding `children` followed by `attributes`.
    ///
    /// # Panics
    ///
    /// Panics if any of the given nodes is already attached.
    pub fn new_element_with_children(
        &mut self,
        name: &str,
        children: &[NodeId],
        attributes: &[NodeId],
    ) -> NodeId {
        let id = self.new_element(name);
        self.set_children(id, children);
        for &attr in attributes {
            self.add_child(id, attr);
        }
        id
    }

    /// Returns an attribute `name="value"`.
    pub fn new_attribute(&mut self, name: &str, value: &str) -> NodeId {
        self.new_named(NodeKind::Attribute, name, Some(value))
    }

    /// Returns an attribute whose namespace URI is `uri`.
    pub fn new_attribute_with_uri(&mut self, name: &str, uri: &str, value: &str) -> NodeId {
        let id = self.new_attribute(name, value);
        self.node_mut(id).uri = Some(uri.to_string());
        id
    }

    /// Returns a namespace declaration `xmlns:name="value"`.
    ///
    /// An empty `name` declares the default namespace.
    pub fn new_namespace(&mut self, name: &str, value: &str) -> NodeId {
        self.new_named(NodeKind::Namespace, name, Some(value))
    }

    /// Returns a processing instruction `<?name value?>`.
    pub fn new_processing_instruction(&mut self, name: &str, value: &str) -> NodeId {
        self.new_named(NodeKind::ProcessingInstruction, name, Some(value))
    }

    /// Returns a comment `<!--value-->`.
    pub fn new_comment(&mut self, value: &str) -> NodeId {
        let id = self.new_node(NodeKind::Comment);
        self.node_mut(id).value = Some(value.to_string());
        id
    }

    /// Returns a text node.
    pub fn new_text(&mut self, value: &str) -> NodeId {
        let id = self.new_node(NodeKind::Text);
        self.node_mut(id).value = Some(value.to_string());
        id
    }

    /// Returns a document type declaration for the root element `name`.
    pub fn new_dtd(&mut self, name: &str) -> NodeId {
        self.new_named(NodeKind::Dtd, name, None)
    }

    // --- Node record ---

    /// Returns the kind of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    /// Returns the name of a node, if it has one.
    #[must_use]
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).name.as_deref()
    }

    /// Renames a node.
    ///
    /// Only elements, attributes, namespaces, processing instructions and the
    /// four declaration kinds can be renamed; for any other kind the
    /// assignment is ignored.
    pub fn set_name(&mut self, id: NodeId, name: Option<&str>) {
        let kind = self.kind(id);
        if kind.has_mutable_name() {
            self.node_mut(id).name = name.map(str::to_string);
        } else {
            log::trace!("ignoring name assignment on {kind} node {}", id.into_raw());
        }
    }

    /// Returns the URI of a node.
    #[must_use]
    pub fn uri(&self, id: NodeId) -> Option<&str> {
        self.node(id).uri.as_deref()
    }

    /// Sets the URI of a node.
    pub fn set_uri(&mut self, id: NodeId, uri: Option<&str>) {
        self.node_mut(id).uri = uri.map(str::to_string);
    }

    /// Returns the content stored directly on a node.
    ///
    /// Container nodes keep their text in children, so this is `None` for
    /// them; see [`string_value`](Tree::string_value).
    #[must_use]
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.node(id).value.as_deref()
    }

    /// Returns a node's 0-based position among its siblings, or `None` if
    /// it is detached.
    #[must_use]
    pub fn index(&self, id: NodeId) -> Option<usize> {
        self.node(id).index
    }

    /// Returns the depth of a node: the number of parent hops to the top of
    /// its tree. Documents and detached nodes are at level 0.
    #[must_use]
    pub fn level(&self, id: NodeId) -> usize {
        self.ancestors(id).count() - 1
    }

    /// Returns the document this node was attached under, if any.
    #[must_use]
    pub fn root_document(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).root_document
    }

    /// Returns the local part of the node's name: `bar` for `foo:bar`.
    #[must_use]
    pub fn local_name(&self, id: NodeId) -> Option<&str> {
        self.name(id).map(qname::local_name_for_name)
    }

    /// Returns the node's name prefix.
    ///
    /// This currently yields the same text as
    /// [`local_name`](Tree::local_name). Use
    /// [`prefix_for_name`](crate::util::qname::prefix_for_name) for the part
    /// before the colon.
    #[must_use]
    pub fn prefix(&self, id: NodeId) -> Option<&str> {
        self.name(id).map(qname::local_name_for_name)
    }

    /// Returns the textual value of a node.
    ///
    /// For documents, elements and DTDs this is the text of every descendant
    /// text node, concatenated in document order with no separator. For
    /// everything else it is the stored content.
    #[must_use]
    pub fn string_value(&self, id: NodeId) -> Option<String> {
        if self.kind(id).is_container() {
            let mut result = String::new();
            for node in self.descendants(id) {
                let data = self.node(node);
                if data.kind == NodeKind::Text {
                    if let Some(text) = &data.value {
                        result.push_str(text);
                    }
                }
            }
            Some(result)
        } else {
            self.node(id).value.clone()
        }
    }

    /// Replaces the content of a node.
    ///
    /// Every child except attributes is detached first. A container node then
    /// receives `value` as a single text child; any other node stores it
    /// directly.
    pub fn set_string_value(&mut self, id: NodeId, value: Option<&str>) {
        self.remove_non_attribute_children(id);
        if self.kind(id).is_container() {
            if let Some(text) = value {
                let text = self.new_text(text);
                self.add_child(id, text);
            }
        } else {
            self.node_mut(id).value = value.map(str::to_string);
        }
    }

    /// Sets the content as [`set_string_value`](Tree::set_string_value) does,
    /// optionally resolving `&name;` references against the document's
    /// entity declarations.
    ///
    /// # Errors
    ///
    /// Entity resolution is not available. When `resolve` is `true` and
    /// `value` contains at least one `&name;` span, the node's non-attribute
    /// children are removed and [`TreeError::Unsupported`] is returned. Text
    /// without references is stored as-is.
    pub fn set_string_value_resolving_entities(
        &mut self,
        id: NodeId,
        value: &str,
        resolve: bool,
    ) -> Result<(), TreeError> {
        if !resolve {
            self.set_string_value(id, Some(value));
            return Ok(());
        }

        let references = entity_references(value);
        if references.is_empty() {
            self.set_string_value(id, Some(value));
            return Ok(());
        }

        self.remove_non_attribute_children(id);
        let detail = references
            .iter()
            .map(|name| format!("&{name};"))
            .collect::<Vec<_>>()
            .join(", ");
        log::warn!("cannot resolve entity references {detail}");
        Err(TreeError::Unsupported {
            operation: "entity resolution",
            detail,
        })
    }

    fn remove_non_attribute_children(&mut self, id: NodeId) {
        let doomed: Vec<NodeId> = self
            .children(id)
            .filter(|&child| self.kind(child) != NodeKind::Attribute)
            .collect();
        for child in doomed {
            self.detach(child);
        }
    }

    // --- Attributes and documents ---

    /// Returns an iterator over the attribute children of a node.
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .filter(|&child| self.kind(child) == NodeKind::Attribute)
    }

    /// Returns the value of the attribute called `name`, if present.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)
            .find(|&attr| self.name(attr) == Some(name))
            .and_then(|attr| self.value(attr))
    }

    /// Returns the first element child of a document.
    #[must_use]
    pub fn root_element(&self, doc: NodeId) -> Option<NodeId> {
        self.children(doc)
            .find(|&child| self.kind(child) == NodeKind::Element)
    }

    /// Makes `element` the only child of `doc`.
    ///
    /// # Panics
    ///
    /// Panics if `element` is already attached.
    pub fn set_root_element(&mut self, doc: NodeId, element: NodeId) {
        self.set_children(doc, &[element]);
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects the names of the `&name;` spans in `text`.
///
/// A stray `&` is superseded by a later one before the closing `;`.
fn entity_references(text: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        let after = &rest[start + 1..];
        let Some(end) = after.find(';') else {
            break;
        };
        let span = &after[..end];
        let name = match span.rfind('&') {
            Some(pos) => &span[pos + 1..],
            None => span,
        };
        names.push(name);
        rest = &after[end + 1..];
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_tree_is_empty() {
        let tree = Tree::new();
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_document_is_its_own_root_document() {
        let mut tree = Tree::new();
        let doc = tree.new_document();
        assert_eq!(tree.kind(doc), NodeKind::Document);
        assert_eq!(tree.root_document(doc), Some(doc));
        assert_eq!(tree.index(doc), None);
    }

    #[test]
    fn test_factories_set_kind_name_and_value() {
        let mut tree = Tree::new();
        let attr = tree.new_attribute("id", "main");
        let pi = tree.new_processing_instruction("xml-stylesheet", "href=\"a.css\"");
        let comment = tree.new_comment(" note ");
        let text = tree.new_text("hello");
        let ns = tree.new_namespace("svg", "http://www.w3.org/2000/svg");

        assert_eq!(tree.kind(attr), NodeKind::Attribute);
        assert_eq!(tree.name(attr), Some("id"));
        assert_eq!(tree.value(attr), Some("main"));
        assert_eq!(tree.name(pi), Some("xml-stylesheet"));
        assert_eq!(tree.value(comment), Some(" note "));
        assert_eq!(tree.name(text), None);
        assert_eq!(tree.kind(ns), NodeKind::Namespace);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_element_with_uri() {
        let mut tree = Tree::new();
        let elem = tree.new_element_with_uri("Hello", "http://www.example.com");
        assert_eq!(tree.uri(elem), Some("http://www.example.com"));

        let attr = tree.new_attribute_with_uri("xml:lang", "http://www.w3.org/XML/1998/namespace", "en");
        assert_eq!(tree.uri(attr), Some("http://www.w3.org/XML/1998/namespace"));
        tree.set_uri(attr, None);
        assert_eq!(tree.uri(attr), None);
    }

    #[test]
    fn test_set_name_on_mutable_kinds() {
        let mut tree = Tree::new();
        let elem = tree.new_element("old");
        tree.set_name(elem, Some("new"));
        assert_eq!(tree.name(elem), Some("new"));

        let decl = tree.new_node(NodeKind::EntityDeclaration);
        tree.set_name(decl, Some("copy"));
        assert_eq!(tree.name(decl), Some("copy"));
    }

    #[test]
    fn test_set_name_ignored_on_other_kinds() {
        let mut tree = Tree::new();
        let text = tree.new_text("hi");
        tree.set_name(text, Some("nope"));
        assert_eq!(tree.name(text), None);

        let dtd = tree.new_dtd("html");
        tree.set_name(dtd, Some("svg"));
        assert_eq!(tree.name(dtd), Some("html"));

        let doc = tree.new_document();
        tree.set_name(doc, Some("doc"));
        assert_eq!(tree.name(doc), None);
    }

    #[test]
    fn test_level() {
        let mut tree = Tree::new();
        let root = tree.new_element("root");
        let doc = tree.new_document_with_root(root);
        let child = tree.new_element("child");
        tree.add_child(root, child);
        let orphan = tree.new_element("orphan");

        assert_eq!(tree.level(doc), 0);
        assert_eq!(tree.level(root), 1);
        assert_eq!(tree.level(child), 2);
        assert_eq!(tree.level(orphan), 0);
    }

    #[test]
    fn test_string_value_of_leaf() {
        let mut tree = Tree::new();
        let text = tree.new_text("abc");
        assert_eq!(tree.string_value(text).as_deref(), Some("abc"));

        let decl = tree.new_node(NodeKind::NotationDeclaration);
        assert_eq!(tree.string_value(decl), None);
    }

    #[test]
    fn test_string_value_concatenates_descendant_text() {
        let mut tree = Tree::new();
        let p = tree.new_element("p");
        let hello = tree.new_text("hello ");
        let b = tree.new_element("b");
        let world = tree.new_text("world");
        let comment = tree.new_comment("skipped");
        let attr = tree.new_attribute("class", "skipped");
        tree.add_child(p, attr);
        tree.add_child(p, hello);
        tree.add_child(p, b);
        tree.add_child(b, world);
        tree.add_child(p, comment);

        assert_eq!(tree.string_value(p).as_deref(), Some("hello world"));
    }

    #[test]
    fn test_string_value_of_empty_element() {
        let mut tree = Tree::new();
        let elem = tree.new_element("empty");
        assert_eq!(tree.string_value(elem).as_deref(), Some(""));
    }

    #[test]
    fn test_set_string_value_keeps_attributes() {
        let mut tree = Tree::new();
        let elem = tree.new_element("p");
        let attr = tree.new_attribute("id", "x");
        let old_text = tree.new_text("old");
        let comment = tree.new_comment("gone");
        tree.add_child(elem, attr);
        tree.add_child(elem, old_text);
        tree.add_child(elem, comment);

        tree.set_string_value(elem, Some("new"));

        assert_eq!(tree.child_count(elem), 2);
        assert_eq!(tree.child_at(elem, 0), attr);
        let text = tree.child_at(elem, 1);
        assert_eq!(tree.kind(text), NodeKind::Text);
        assert_eq!(tree.value(text), Some("new"));
        assert_eq!(tree.parent(old_text), None);
        assert_eq!(tree.parent(comment), None);
        assert_eq!(tree.string_value(elem).as_deref(), Some("new"));
    }

    #[test]
    fn test_set_string_value_none_clears_element() {
        let mut tree = Tree::new();
        let elem = tree.new_element_with_value("p", "text");
        tree.set_string_value(elem, None);
        assert_eq!(tree.child_count(elem), 0);
        assert_eq!(tree.string_value(elem).as_deref(), Some(""));
    }

    #[test]
    fn test_set_string_value_on_leaf() {
        let mut tree = Tree::new();
        let attr = tree.new_attribute("id", "a");
        tree.set_string_value(attr, Some("b"));
        assert_eq!(tree.value(attr), Some("b"));
        tree.set_string_value(attr, None);
        assert_eq!(tree.value(attr), None);
    }

    #[test]
    fn test_resolving_entities_disabled_sets_raw_text() {
        let mut tree = Tree::new();
        let elem = tree.new_element("p");
        let result = tree.set_string_value_resolving_entities(elem, "a &copy; b", false);
        assert_eq!(result, Ok(()));
        assert_eq!(tree.string_value(elem).as_deref(), Some("a &copy; b"));
    }

    #[test]
    fn test_resolving_entities_without_references() {
        let mut tree = Tree::new();
        let elem = tree.new_element("p");
        let result = tree.set_string_value_resolving_entities(elem, "plain text", true);
        assert_eq!(result, Ok(()));
        assert_eq!(tree.string_value(elem).as_deref(), Some("plain text"));
    }

    #[test]
    fn test_resolving_entities_is_unsupported() {
        let mut tree = Tree::new();
        let elem = tree.new_element("p");
        let attr = tree.new_attribute("id", "x");
        let old = tree.new_text("old");
        tree.add_child(elem, attr);
        tree.add_child(elem, old);

        let result = tree.set_string_value_resolving_entities(elem, "&copy; 2024 &me;", true);

        assert_eq!(
            result,
            Err(TreeError::Unsupported {
                operation: "entity resolution",
                detail: "&copy;, &me;".to_string(),
            })
        );
        // Non-attribute children are gone, attributes stay.
        assert_eq!(tree.child_count(elem), 1);
        assert_eq!(tree.child_at(elem, 0), attr);
        assert_eq!(tree.parent(old), None);
    }

    #[test]
    fn test_entity_references_scan() {
        assert_eq!(entity_references("a &amp; b &lt;"), vec!["amp", "lt"]);
        assert_eq!(entity_references("a & b &gt; c"), vec!["gt"]);
        assert_eq!(entity_references("no refs"), Vec::<&str>::new());
        assert_eq!(entity_references("dangling &amp"), Vec::<&str>::new());
    }

    #[test]
    fn test_local_name_and_prefix() {
        let mut tree = Tree::new();
        let bar = tree.new_element("msxml:Bar");
        let foo = tree.new_element("Foo");
        let text = tree.new_text("x");

        assert_eq!(tree.local_name(bar), Some("Bar"));
        assert_eq!(tree.local_name(foo), Some("Foo"));
        assert_eq!(tree.local_name(text), None);
        // The node-level prefix mirrors the local name.
        assert_eq!(tree.prefix(bar), Some("Bar"));
        assert_eq!(tree.prefix(foo), Some("Foo"));
    }

    #[test]
    fn test_attribute_lookup() {
        let mut tree = Tree::new();
        let id = tree.new_attribute("id", "main");
        let class = tree.new_attribute("class", "container");
        let text = tree.new_text("body");
        let div = tree.new_element_with_children("div", &[text], &[id, class]);

        assert_eq!(tree.attribute(div, "id"), Some("main"));
        assert_eq!(tree.attribute(div, "class"), Some("container"));
        assert_eq!(tree.attribute(div, "style"), None);
        assert_eq!(tree.attributes(div).collect::<Vec<_>>(), vec![id, class]);
        assert_eq!(tree.child_at(div, 0), text);
    }

    #[test]
    fn test_root_element() {
        let mut tree = Tree::new();
        let doc = tree.new_document();
        assert_eq!(tree.root_element(doc), None);

        let comment = tree.new_comment("prolog");
        tree.add_child(doc, comment);
        let first = tree.new_element("first");
        tree.add_child(doc, first);
        assert_eq!(tree.root_element(doc), Some(first));

        let second = tree.new_element("second");
        tree.set_root_element(doc, second);
        assert_eq!(tree.root_element(doc), Some(second));
        assert_eq!(tree.child_count(doc), 1);
        assert_eq!(tree.parent(first), None);
        assert_eq!(tree.parent(comment), None);
    }

    #[test]
    fn test_node_id_raw_roundtrip() {
        let mut tree = Tree::new();
        let elem = tree.new_element("e");
        assert_eq!(NodeId::from_raw(elem.into_raw()), Some(elem));
        assert_eq!(NodeId::from_raw(0), None);
    }
}

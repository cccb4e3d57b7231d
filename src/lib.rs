//! # xmlnode
//!
//! An in-memory, mutable XML node tree. Nodes of every XML kind (elements,
//! attributes, text, comments, processing instructions, DTD declarations)
//! live in one arena and are linked into sibling chains with dense positional
//! indices, so local navigation is O(1) and any sequence of inserts, removals
//! and replacements keeps the structure consistent.
//!
//! On top of the tree sit document-order stepping, positional path synthesis
//! (`foo/bar[2]/baz`), and a subtree serializer.
//!
//! ## Quick Start
//!
//! ```
//! use xmlnode::Tree;
//! use xmlnode::serial::xml_string;
//!
//! let mut tree = Tree::new();
//! let root = tree.new_element("root");
//! let doc = tree.new_document_with_root(root);
//! let child = tree.new_element_with_value("child", "Hello");
//! tree.add_child(root, child);
//!
//! assert_eq!(tree.xpath(child).as_deref(), Some("root/child"));
//! assert_eq!(xml_string(&tree, doc), "<root><child>Hello</child></root>");
//! ```

pub mod error;
pub mod sax;
pub mod serial;
pub mod tree;
pub mod util;

// Re-export primary types at the crate root for convenience.
pub use error::TreeError;
pub use tree::{NodeData, NodeId, NodeKind, Tree};

//! Node type definitions.
//!
//! The `NodeKind` enum names every node type a tree can hold. Unlike a
//! payload-carrying enum, the kind here is a plain tag: every node stores the
//! same record (name, value, URI, links) in `NodeData`, and the kind decides
//! which of those fields may change after construction.

use std::fmt;

/// The kind of an XML node.
///
/// A node's kind is fixed when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A node that does not represent any XML construct.
    Invalid,
    /// A document node, the top of a tree.
    Document,
    /// An element node, e.g., `<div>`.
    Element,
    /// An attribute, held as a child of its element.
    Attribute,
    /// A namespace declaration, e.g., `xmlns:svg="..."`.
    Namespace,
    /// A processing instruction, e.g., `<?target data?>`.
    ProcessingInstruction,
    /// A comment, e.g., `<!-- ... -->`.
    Comment,
    /// Character data.
    Text,
    /// A document type declaration.
    Dtd,
    /// `<!ENTITY name "value">`
    EntityDeclaration,
    /// `<!ATTLIST element ...>`
    AttributeDeclaration,
    /// `<!ELEMENT name content>`
    ElementDeclaration,
    /// `<!NOTATION name ...>`
    NotationDeclaration,
}

impl NodeKind {
    /// Returns `true` if a node of this kind accepts a new name after
    /// construction.
    ///
    /// Documents, text, comments, DTDs and invalid nodes keep whatever name
    /// they were built with; assignments to them are ignored.
    #[must_use]
    pub fn has_mutable_name(self) -> bool {
        matches!(
            self,
            Self::Attribute
                | Self::AttributeDeclaration
                | Self::Element
                | Self::ElementDeclaration
                | Self::EntityDeclaration
                | Self::Namespace
                | Self::NotationDeclaration
                | Self::ProcessingInstruction
        )
    }

    /// Returns `true` for kinds whose string value is derived from their
    /// descendant text rather than stored directly.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Document | Self::Element | Self::Dtd)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invalid => "invalid",
            Self::Document => "document",
            Self::Element => "element",
            Self::Attribute => "attribute",
            Self::Namespace => "namespace",
            Self::ProcessingInstruction => "processing-instruction",
            Self::Comment => "comment",
            Self::Text => "text",
            Self::Dtd => "dtd",
            Self::EntityDeclaration => "entity-declaration",
            Self::AttributeDeclaration => "attribute-declaration",
            Self::ElementDeclaration => "element-declaration",
            Self::NotationDeclaration => "notation-declaration",
        };
        f.write_str(name)
    }
}

//! Link reads, document-order stepping and tree iterators.

use super::{NodeId, Tree};

impl Tree {
    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Returns the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    /// Returns the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).last_child
    }

    /// Returns the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// Returns the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev_sibling
    }

    /// Returns the node before `id` in document order.
    ///
    /// That is the deepest last descendant of the previous sibling, the
    /// previous sibling itself if it has no children, or else the parent.
    #[must_use]
    pub fn previous_node(&self, id: NodeId) -> Option<NodeId> {
        let Some(prev) = self.prev_sibling(id) else {
            return self.parent(id);
        };
        let mut deepest = prev;
        while let Some(last) = self.last_child(deepest) {
            deepest = last;
        }
        Some(deepest)
    }

    /// Returns the node after `id` in document order.
    ///
    /// Steps to the first child, else the next sibling, else the parent's
    /// next sibling. The ascent stops after one level: the last node of a
    /// branch nested two or more levels below its nearest ancestor with a
    /// following sibling returns `None`.
    #[must_use]
    pub fn next_node(&self, id: NodeId) -> Option<NodeId> {
        self.first_child(id)
            .or_else(|| self.next_sibling(id))
            .or_else(|| self.parent(id).and_then(|parent| self.next_sibling(parent)))
    }

    /// Returns an iterator over the children of a node.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(id).first_child,
        }
    }

    /// Returns an iterator over a node and its ancestors (walking up to root).
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Returns an iterator over all descendants of a node (depth-first,
    /// pre-order). Unlike [`next_node`](Tree::next_node) this climbs as far
    /// as needed and never leaves the subtree.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            root: id,
            next: self.first_child(id),
        }
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).next_sibling;
        Some(current)
    }
}

/// Iterator over a node and its ancestors.
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).parent;
        Some(current)
    }
}

/// Depth-first iterator over all descendants of a node.
pub struct Descendants<'a> {
    tree: &'a Tree,
    root: NodeId,
    next: Option<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        if let Some(child) = self.tree.first_child(current) {
            self.next = Some(child);
            return Some(current);
        }

        if let Some(sibling) = self.tree.next_sibling(current) {
            self.next = Some(sibling);
            return Some(current);
        }

        let mut ancestor = self.tree.parent(current);
        while let Some(anc) = ancestor {
            if anc == self.root {
                self.next = None;
                return Some(current);
            }
            if let Some(sibling) = self.tree.next_sibling(anc) {
                self.next = Some(sibling);
                return Some(current);
            }
            ancestor = self.tree.parent(anc);
        }

        self.next = None;
        Some(current)
    }
}

//! Sibling-chain maintenance: insertion, removal, replacement and detaching.
//!
//! Every operation here checks its structural preconditions with `assert!`
//! and panics when they do not hold. Callers that cannot guarantee an index
//! is in range should check [`Tree::child_count`] first.

use super::{NodeId, Tree};

impl Tree {
    /// Returns the number of children of a node.
    #[must_use]
    pub fn child_count(&self, parent: NodeId) -> usize {
        self.node(parent).child_count
    }

    /// Returns the child at `index`, walking the sibling chain from the
    /// first child.
    ///
    /// # Panics
    ///
    /// Panics if `index >= child_count(parent)`.
    #[must_use]
    pub fn child_at(&self, parent: NodeId, index: usize) -> NodeId {
        let count = self.child_count(parent);
        assert!(
            index < count,
            "child index {index} out of bounds for {count} children"
        );
        let mut current = self.node(parent).first_child;
        for _ in 0..index {
            current = current.and_then(|node| self.node(node).next_sibling);
        }
        match current {
            Some(node) => node,
            None => panic!("sibling chain is shorter than child count {count}"),
        }
    }

    /// Inserts a detached node as the `index`-th child of `parent`.
    ///
    /// Siblings at or after `index` shift one place to the right. The child
    /// and every node below it that has no root document yet take the
    /// parent's. Existing associations are kept.
    ///
    /// # Panics
    ///
    /// Panics if `index > child_count(parent)`, if `child` already has a
    /// parent, or if `child` is `parent` or one of its ancestors.
    pub fn insert_child(&mut self, parent: NodeId, child: NodeId, index: usize) {
        let count = self.child_count(parent);
        assert!(
            index <= count,
            "insert index {index} out of bounds for {count} children"
        );
        assert!(
            self.node(child).parent.is_none(),
            "child already has a parent; detach it first"
        );
        assert!(
            !self.ancestors(parent).any(|ancestor| ancestor == child),
            "cannot insert a node below itself"
        );

        let (prev, next) = if index == count {
            (self.node(parent).last_child, None)
        } else {
            let next = self.child_at(parent, index);
            (self.node(next).prev_sibling, Some(next))
        };

        self.link(parent, child, prev, next, index);
        self.node_mut(parent).child_count += 1;
        self.renumber_from(next, index + 1);

        log::trace!(
            "inserted node {} at {index} under {}",
            child.into_raw(),
            parent.into_raw()
        );
    }

    /// Inserts `children` starting at `index`, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`insert_child`](Tree::insert_child)
    /// for any of the nodes.
    pub fn insert_children(&mut self, parent: NodeId, children: &[NodeId], index: usize) {
        for (offset, &child) in children.iter().enumerate() {
            self.insert_child(parent, child, index + offset);
        }
    }

    /// Appends a detached node after the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `child` already has a parent or is an ancestor of `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        let count = self.child_count(parent);
        self.insert_child(parent, child, count);
    }

    /// Removes and returns the child at `index`. The removed node is left
    /// fully detached.
    ///
    /// # Panics
    ///
    /// Panics if `index >= child_count(parent)`.
    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> NodeId {
        let child = self.child_at(parent, index);
        self.unlink(parent, child, index);
        child
    }

    /// Puts the detached `node` in place of the child at `index` and returns
    /// the replaced child, now fully detached.
    ///
    /// No other sibling moves, so no index changes.
    ///
    /// # Panics
    ///
    /// Panics if `index >= child_count(parent)`, if `node` already has a
    /// parent, or if `node` is an ancestor of `parent`.
    pub fn replace_child_at(&mut self, parent: NodeId, index: usize, node: NodeId) -> NodeId {
        assert!(
            self.node(node).parent.is_none(),
            "replacement already has a parent; detach it first"
        );
        assert!(
            !self.ancestors(parent).any(|ancestor| ancestor == node),
            "cannot insert a node below itself"
        );
        let old = self.child_at(parent, index);
        let prev = self.node(old).prev_sibling;
        let next = self.node(old).next_sibling;

        self.link(parent, node, prev, next, index);
        self.reset_links(old);

        log::trace!(
            "replaced node {} with {} at {index} under {}",
            old.into_raw(),
            node.into_raw(),
            parent.into_raw()
        );
        old
    }

    /// Detaches a node from its parent. Does nothing if it has no parent.
    ///
    /// # Panics
    ///
    /// Panics if the node's recorded index does not point back at it.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).parent else {
            return;
        };
        let Some(index) = self.node(id).index else {
            panic!("attached node {} has no index", id.into_raw());
        };
        assert!(
            self.child_at(parent, index) == id,
            "node {} is not child {index} of its recorded parent",
            id.into_raw()
        );
        self.unlink(parent, id, index);
    }

    /// Replaces all children of `parent` with `children`, in order.
    ///
    /// # Panics
    ///
    /// Panics if any of `children` is attached elsewhere.
    pub fn set_children(&mut self, parent: NodeId, children: &[NodeId]) {
        self.remove_all_children(parent);
        for &child in children {
            self.add_child(parent, child);
        }
    }

    /// Detaches every child of `parent`.
    pub fn remove_all_children(&mut self, parent: NodeId) {
        let mut current = self.node(parent).first_child;
        while let Some(child) = current {
            current = self.node(child).next_sibling;
            self.reset_links(child);
        }
        let data = self.node_mut(parent);
        data.first_child = None;
        data.last_child = None;
        data.child_count = 0;
    }

    /// Splices `child` between `prev` and `next` under `parent` at `index`.
    /// Does not touch the child count.
    fn link(
        &mut self,
        parent: NodeId,
        child: NodeId,
        prev: Option<NodeId>,
        next: Option<NodeId>,
        index: usize,
    ) {
        let inherited = self.node(parent).root_document;
        let data = self.node_mut(child);
        data.parent = Some(parent);
        data.prev_sibling = prev;
        data.next_sibling = next;
        data.index = Some(index);
        if data.root_document.is_none() {
            data.root_document = inherited;
        }
        if let Some(doc) = inherited {
            self.adopt_root_document(child, doc);
        }

        match prev {
            Some(p) => self.node_mut(p).next_sibling = Some(child),
            None => self.node_mut(parent).first_child = Some(child),
        }
        match next {
            Some(n) => self.node_mut(n).prev_sibling = Some(child),
            None => self.node_mut(parent).last_child = Some(child),
        }
    }

    /// Associates every node below `id` that has no root document yet with
    /// `doc`. Existing associations are kept.
    fn adopt_root_document(&mut self, id: NodeId, doc: NodeId) {
        let unassociated: Vec<NodeId> = self
            .descendants(id)
            .filter(|&node| self.node(node).root_document.is_none())
            .collect();
        for node in unassociated {
            self.node_mut(node).root_document = Some(doc);
        }
    }

    fn unlink(&mut self, parent: NodeId, child: NodeId, index: usize) {
        let prev = self.node(child).prev_sibling;
        let next = self.node(child).next_sibling;

        match prev {
            Some(p) => self.node_mut(p).next_sibling = next,
            None => self.node_mut(parent).first_child = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev_sibling = prev,
            None => self.node_mut(parent).last_child = prev,
        }

        self.node_mut(parent).child_count -= 1;
        self.reset_links(child);
        self.renumber_from(next, index);

        log::trace!(
            "removed node {} at {index} from {}",
            child.into_raw(),
            parent.into_raw()
        );
    }

    fn reset_links(&mut self, id: NodeId) {
        let data = self.node_mut(id);
        data.parent = None;
        data.prev_sibling = None;
        data.next_sibling = None;
        data.index = None;
    }

    /// Assigns consecutive indices starting at `index` to `start` and every
    /// sibling after it.
    fn renumber_from(&mut self, start: Option<NodeId>, index: usize) {
        let mut current = start;
        let mut index = index;
        while let Some(node) = current {
            let data = self.node_mut(node);
            data.index = Some(index);
            current = data.next_sibling;
            index += 1;
        }
    }
}

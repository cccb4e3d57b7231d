//! Positional path synthesis, e.g. `foo/bar[2]/baz`.

use super::{NodeId, Tree};

impl Tree {
    /// Returns a `/`-separated path from the top of the tree to `id`.
    ///
    /// Each step is the node's name, followed by a 1-based `[k]` when its
    /// parent has more than one child of that name. A nameless top node
    /// (the document) contributes no step. Returns `None` when the node has
    /// never been attached under a document.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlnode::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let foo = tree.new_element("foo");
    /// tree.new_document_with_root(foo);
    /// let bars: Vec<_> = (0..3).map(|_| tree.new_element("bar")).collect();
    /// tree.set_children(foo, &bars);
    /// let baz = tree.new_element("baz");
    /// tree.add_child(bars[1], baz);
    ///
    /// assert_eq!(tree.xpath(baz).as_deref(), Some("foo/bar[2]/baz"));
    /// ```
    #[must_use]
    pub fn xpath(&self, id: NodeId) -> Option<String> {
        self.root_document(id)?;
        if self.parent(id).is_none() {
            return self.name(id).map(str::to_string);
        }

        let mut steps: Vec<String> = self
            .ancestors(id)
            .filter_map(|node| self.path_step(node))
            .collect();
        steps.reverse();
        Some(steps.join("/"))
    }

    /// Builds one path step for `id` relative to its parent's children.
    fn path_step(&self, id: NodeId) -> Option<String> {
        let name = self.name(id);
        let Some(parent) = self.parent(id) else {
            return name.map(str::to_string);
        };

        let mut same_named = 0;
        let mut position = 0;
        for sibling in self.children(parent) {
            if self.name(sibling) == name {
                same_named += 1;
                if sibling == id {
                    position = same_named;
                }
            }
        }

        if same_named > 1 {
            Some(format!("{}[{position}]", name.unwrap_or_default()))
        } else {
            name.map(str::to_string)
        }
    }
}

#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlnode::serial::xml_string;
use xmlnode::{NodeId, Tree};

const MAX_NODES: usize = 256;

/// Checks links, counts and dense indices of every child list in the tree.
fn check(tree: &Tree, nodes: &[NodeId]) {
    for &node in nodes {
        let children: Vec<NodeId> = tree.children(node).collect();
        assert_eq!(children.len(), tree.child_count(node));
        assert_eq!(tree.first_child(node), children.first().copied());
        assert_eq!(tree.last_child(node), children.last().copied());
        for (i, &child) in children.iter().enumerate() {
            assert_eq!(tree.index(child), Some(i));
            assert_eq!(tree.parent(child), Some(node));
        }
        if tree.parent(node).is_none() {
            assert_eq!(tree.index(node), None);
            assert_eq!(tree.prev_sibling(node), None);
            assert_eq!(tree.next_sibling(node), None);
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut tree = Tree::new();
    let root = tree.new_element("root");
    let doc = tree.new_document_with_root(root);
    let mut nodes = vec![doc, root];

    for chunk in data.chunks_exact(3) {
        let (op, a, b) = (chunk[0], usize::from(chunk[1]), usize::from(chunk[2]));
        let target = nodes[a % nodes.len()];
        let count = tree.child_count(target);
        match op % 5 {
            0 if nodes.len() < MAX_NODES => {
                let name = if b % 2 == 0 { "a" } else { "b" };
                let child = tree.new_element(name);
                tree.insert_child(target, child, b % (count + 1));
                nodes.push(child);
            }
            1 if count > 0 => {
                let _ = tree.remove_child_at(target, b % count);
            }
            2 => tree.detach(target),
            3 if count > 0 && nodes.len() < MAX_NODES => {
                let text = tree.new_text("t<&>");
                let _ = tree.replace_child_at(target, b % count, text);
                nodes.push(text);
            }
            4 => {
                let moved = nodes[b % nodes.len()];
                if tree.parent(moved).is_none()
                    && !tree.ancestors(target).any(|n| n == moved)
                {
                    tree.insert_child(target, moved, b % (count + 1));
                }
            }
            _ => {}
        }
        check(&tree, &nodes);
    }

    for &node in &nodes {
        let _ = tree.xpath(node);
        let _ = tree.previous_node(node);
        let _ = tree.next_node(node);
    }
    let _ = xml_string(&tree, doc);
});

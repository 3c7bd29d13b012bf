use std::fmt::Display;

use crate::forest::{Forest, TreeId};
use crate::types::Node;

impl<T: Display> Forest<T> {
    fn print_nodes(&self, root: u32) -> String {
        let mut s = String::new();
        let mut stack: Vec<(u32, usize, &str)> = vec![(root, 0, "└─")];
        while let Some((node, depth, side)) = stack.pop() {
            let n = &self.arena()[node as usize];
            s.push('\n');
            s.push_str(&"  ".repeat(depth));
            s.push_str(side);
            s.push(' ');
            match n.item.as_ref() {
                Some(item) => s.push_str(&item.to_string()),
                None => s.push('∅'),
            }
            // Right first so the left subtree is printed before it.
            if let Some(r) = n.r() {
                stack.push((r, depth + 1, "→"));
            }
            if let Some(l) = n.l() {
                stack.push((l, depth + 1, "←"));
            }
        }
        s
    }

    /// Renders `tree` one node per line, left children marked `←` and right
    /// children `→`.
    ///
    /// ```text
    /// Tree
    /// └─ 2
    ///   ← 1
    ///   → 3
    /// ```
    pub fn print(&self, tree: TreeId) -> String {
        match self.tree_root(tree) {
            Some(Some(root)) => format!("Tree{}", self.print_nodes(root)),
            Some(None) => "Tree ∅".to_string(),
            None => "Tree (removed)".to_string(),
        }
    }
}

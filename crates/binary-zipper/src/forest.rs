//! Node arena shared by a family of trees.
//!
//! A [`Forest`] owns every node of every tree created in it. Trees are
//! addressed through [`TreeId`] handles; cutting a subtree out of one tree
//! and pasting it into another only re-points `u32` links inside the same
//! arena, so no payload is ever moved or copied.

use log::debug;

use crate::cursor::Cursor;
use crate::error::CursorError;
use crate::node::BinaryNode;
use crate::types::Side;
use crate::util::{self, child, descendants, set_child, set_p};

/// Handle of a tree inside a [`Forest`]. Two handles are the same tree iff
/// they compare equal.
///
/// A recycled slot gets a new generation, so a handle outliving
/// [`Forest::remove_tree`] never reaches the tree that reuses its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeId {
    index: u32,
    gen: u32,
}

impl TreeId {
    pub fn index(self) -> u32 {
        self.index
    }
}

#[derive(Clone, Debug, Default)]
struct TreeSlot {
    root: Option<u32>,
    live: bool,
    gen: u32,
}

/// Arena of binary nodes plus the table of trees rooted in it.
#[derive(Clone, Debug)]
pub struct Forest<T> {
    arena: Vec<BinaryNode<T>>,
    free: Vec<u32>,
    trees: Vec<TreeSlot>,
    free_trees: Vec<u32>,
    live_nodes: usize,
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Forest<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-sizes the node arena for `nodes` payloads.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            arena: Vec::with_capacity(nodes),
            free: Vec::new(),
            trees: Vec::new(),
            free_trees: Vec::new(),
            live_nodes: 0,
        }
    }

    /// Creates a new, empty tree.
    pub fn new_tree(&mut self) -> TreeId {
        self.push_tree(None)
    }

    /// Creates a tree holding a single leaf.
    pub fn singleton(&mut self, item: T) -> TreeId {
        let node = self.alloc(item);
        self.push_tree(Some(node))
    }

    /// Drops `tree` together with every node it owns and returns the number
    /// of nodes reclaimed. The handle is dead afterwards and its slot may be
    /// handed out again by [`Forest::new_tree`].
    pub fn remove_tree(&mut self, tree: TreeId) -> Result<usize, CursorError> {
        let root = self.tree_root(tree).ok_or(CursorError::Stale)?;
        let freed = root.map_or(0, |r| self.release_subtree(r));
        let slot = &mut self.trees[tree.index as usize];
        slot.root = None;
        slot.live = false;
        slot.gen = slot.gen.wrapping_add(1);
        self.free_trees.push(tree.index);
        debug!("removed tree {} ({freed} nodes)", tree.index);
        Ok(freed)
    }

    pub fn contains_tree(&self, tree: TreeId) -> bool {
        self.tree_root(tree).is_some()
    }

    /// Number of live trees, empty ones included.
    pub fn tree_count(&self) -> usize {
        self.trees.len() - self.free_trees.len()
    }

    /// Number of live nodes across all trees.
    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    /// `true` iff `tree` has no root. A dead handle reads as empty.
    pub fn is_empty(&self, tree: TreeId) -> bool {
        self.tree_root(tree).flatten().is_none()
    }

    /// Cursor on the root of `tree`, or at bottom if the tree is empty.
    pub fn root(&self, tree: TreeId) -> Cursor {
        Cursor::at_root(tree, self.tree_root(tree).flatten())
    }

    /// Number of nodes in `tree`.
    pub fn tree_len(&self, tree: TreeId) -> usize {
        util::size(&self.arena, self.tree_root(tree).flatten())
    }

    /// Number of nodes on the longest root-to-leaf path of `tree`.
    pub fn height(&self, tree: TreeId) -> usize {
        util::height(&self.arena, self.tree_root(tree).flatten())
    }

    /// Verifies the parent/child back-link invariant over all of `tree`.
    pub fn is_consistent(&self, tree: TreeId) -> bool {
        match self.tree_root(tree) {
            Some(root) => util::is_consistent(&self.arena, root),
            None => false,
        }
    }

    /// In-order iterator over the payloads of `tree`.
    pub fn iter(&self, tree: TreeId) -> Iter<'_, T> {
        Iter {
            forest: self,
            curr: util::first(&self.arena, self.tree_root(tree).flatten()),
        }
    }

    // ── crate-internal arena access ───────────────────────────────────────

    pub(crate) fn arena(&self) -> &[BinaryNode<T>] {
        &self.arena
    }

    /// `None` for an out-of-range or reclaimed slot.
    pub(crate) fn node(&self, idx: u32) -> Option<&BinaryNode<T>> {
        self.arena.get(idx as usize).filter(|n| n.is_live())
    }

    pub(crate) fn item(&self, idx: u32) -> Option<&T> {
        self.arena.get(idx as usize).and_then(|n| n.item.as_ref())
    }

    pub(crate) fn item_mut(&mut self, idx: u32) -> Option<&mut T> {
        self.arena.get_mut(idx as usize).and_then(|n| n.item.as_mut())
    }

    /// `None` for a dead handle, `Some(root)` otherwise.
    pub(crate) fn tree_root(&self, tree: TreeId) -> Option<Option<u32>> {
        self.trees
            .get(tree.index as usize)
            .filter(|s| s.live && s.gen == tree.gen)
            .map(|s| s.root)
    }

    pub(crate) fn set_tree_root(&mut self, tree: TreeId, root: Option<u32>) {
        self.trees[tree.index as usize].root = root;
    }

    pub(crate) fn push_tree(&mut self, root: Option<u32>) -> TreeId {
        match self.free_trees.pop() {
            Some(index) => {
                let slot = &mut self.trees[index as usize];
                slot.root = root;
                slot.live = true;
                TreeId {
                    index,
                    gen: slot.gen,
                }
            }
            None => {
                self.trees.push(TreeSlot {
                    root,
                    live: true,
                    gen: 0,
                });
                TreeId {
                    index: (self.trees.len() - 1) as u32,
                    gen: 0,
                }
            }
        }
    }

    /// Allocates a detached leaf, reusing a reclaimed slot when one exists.
    pub(crate) fn alloc(&mut self, item: T) -> u32 {
        self.live_nodes += 1;
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize] = BinaryNode::new(item);
                idx
            }
            None => {
                self.arena.push(BinaryNode::new(item));
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Drops every payload under `root` and returns the slots to the free
    /// list. `root` must already be unlinked from its parent or tree.
    pub(crate) fn release_subtree(&mut self, root: u32) -> usize {
        let nodes = descendants(&self.arena, Some(root));
        for &idx in &nodes {
            drop(self.arena[idx as usize].release());
            self.free.push(idx);
        }
        self.live_nodes -= nodes.len();
        nodes.len()
    }

    /// Writes `node` into the slot below `parent` on `side`, or into the
    /// root of `tree` when there is no parent, and fixes the back-link.
    pub(crate) fn link(
        &mut self,
        tree: TreeId,
        parent: Option<u32>,
        side: Side,
        node: Option<u32>,
    ) {
        match parent {
            Some(p) => set_child(&mut self.arena, p, side, node),
            None => self.set_tree_root(tree, node),
        }
        if let Some(n) = node {
            set_p(&mut self.arena, n, parent);
        }
    }

    pub(crate) fn set_parent(&mut self, idx: u32, parent: Option<u32>) {
        set_p(&mut self.arena, idx, parent);
    }

    pub(crate) fn child(&self, idx: u32, side: Side) -> Option<u32> {
        child(&self.arena, idx, side)
    }
}

/// In-order iterator returned by [`Forest::iter`].
pub struct Iter<'a, T> {
    forest: &'a Forest<T>,
    curr: Option<u32>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = util::next(self.forest.arena(), idx);
        self.forest.item(idx)
    }
}

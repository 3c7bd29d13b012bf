//! Zipper cursor over a tree in a [`Forest`].
//!
//! A [`Cursor`] is a small `Copy` value: the tree it was issued for, the
//! focus node (or `None` when positioned at an empty slot, "bottom"), the
//! node above the focus, and the side of that parent through which the
//! focus is reached. Navigation hands back a new cursor and never touches
//! the receiver; only [`insert`](Cursor::insert), [`cut`](Cursor::cut),
//! [`paste`](Cursor::paste) and the rotations change the shape of a tree.
//!
//! An edit made through one cursor can leave other cursors on the same tree
//! pointing at relinked or reclaimed nodes. Such cursors are detected and
//! rejected with [`CursorError::Stale`]: reads and navigation check the
//! cursor's own link in O(1), edits also walk up to confirm the cursor
//! still hangs below the root of its tree.

use log::{debug, trace};

use crate::error::CursorError;
use crate::forest::{Forest, TreeId};
use crate::node::BinaryNode;
use crate::types::{Node, Side};
use crate::util::{side_of, top};

/// Position inside a tree of a [`Forest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    tree: TreeId,
    focus: Option<u32>,
    parent: Option<u32>,
    // Always `Side::Right` at the root so equal positions compare equal.
    side: Side,
}

impl Cursor {
    pub(crate) fn at_root(tree: TreeId, root: Option<u32>) -> Self {
        Self {
            tree,
            focus: root,
            parent: None,
            side: Side::Right,
        }
    }

    /// Tree this cursor was issued for.
    pub fn tree(&self) -> TreeId {
        self.tree
    }

    /// Side of the parent through which the focus is reached. Meaningless at
    /// the root.
    pub fn side(&self) -> Side {
        self.side
    }

    /// `true` iff there is no node above the focus.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// `true` iff the cursor designates an empty slot.
    pub fn is_bottom(&self) -> bool {
        self.focus.is_none()
    }

    pub fn is_inside(&self, tree: TreeId) -> bool {
        self.tree == tree
    }

    /// Independent copy of this position.
    pub fn alias(&self) -> Cursor {
        *self
    }

    pub fn has_left<T>(&self, forest: &Forest<T>) -> bool {
        self.focus_node(forest).is_some_and(|n| n.l().is_some())
    }

    pub fn has_right<T>(&self, forest: &Forest<T>) -> bool {
        self.focus_node(forest).is_some_and(|n| n.r().is_some())
    }

    pub fn is_leaf<T>(&self, forest: &Forest<T>) -> bool {
        self.focus_node(forest)
            .is_some_and(|n| n.l().is_none() && n.r().is_none())
    }

    /// Payload of the focus node.
    pub fn consult<'f, T>(&self, forest: &'f Forest<T>) -> Result<&'f T, CursorError> {
        self.check(forest)?;
        let focus = self.focus.ok_or(CursorError::InvalidPosition)?;
        forest.item(focus).ok_or(CursorError::Stale)
    }

    pub fn consult_mut<'f, T>(
        &self,
        forest: &'f mut Forest<T>,
    ) -> Result<&'f mut T, CursorError> {
        self.check(forest)?;
        let focus = self.focus.ok_or(CursorError::InvalidPosition)?;
        forest.item_mut(focus).ok_or(CursorError::Stale)
    }

    /// Overwrites the focus payload in place and returns the previous one.
    pub fn update<T>(&self, forest: &mut Forest<T>, item: T) -> Result<T, CursorError> {
        let slot = self.consult_mut(forest)?;
        Ok(std::mem::replace(slot, item))
    }

    // ── navigation ────────────────────────────────────────────────────────

    /// Cursor on the parent of the focus.
    pub fn up<T>(&self, forest: &Forest<T>) -> Result<Cursor, CursorError> {
        let parent = self.parent.ok_or(CursorError::Root)?;
        self.check(forest)?;
        let side = side_of(forest.arena(), parent).unwrap_or_default();
        Ok(Cursor {
            tree: self.tree,
            focus: Some(parent),
            parent: forest.arena()[parent as usize].p(),
            side,
        })
    }

    /// Cursor on the left child slot of the focus.
    pub fn left<T>(&self, forest: &Forest<T>) -> Result<Cursor, CursorError> {
        self.descend(forest, Side::Left)
    }

    /// Cursor on the right child slot of the focus.
    pub fn right<T>(&self, forest: &Forest<T>) -> Result<Cursor, CursorError> {
        self.descend(forest, Side::Right)
    }

    /// Follows left links down to the empty slot below the leftmost node.
    pub fn left_most<T>(&self, forest: &Forest<T>) -> Result<Cursor, CursorError> {
        self.descend_most(forest, Side::Left)
    }

    /// Follows right links down to the empty slot below the rightmost node.
    pub fn right_most<T>(&self, forest: &Forest<T>) -> Result<Cursor, CursorError> {
        self.descend_most(forest, Side::Right)
    }

    fn descend<T>(&self, forest: &Forest<T>, side: Side) -> Result<Cursor, CursorError> {
        self.check(forest)?;
        let focus = self.focus.ok_or(CursorError::InvalidPosition)?;
        Ok(self.step(forest, focus, side))
    }

    fn descend_most<T>(&self, forest: &Forest<T>, side: Side) -> Result<Cursor, CursorError> {
        self.check(forest)?;
        let mut itr = self.alias();
        while let Some(focus) = itr.focus {
            itr = itr.step(forest, focus, side);
        }
        Ok(itr)
    }

    fn step<T>(&self, forest: &Forest<T>, focus: u32, side: Side) -> Cursor {
        Cursor {
            tree: self.tree,
            focus: forest.child(focus, side),
            parent: Some(focus),
            side,
        }
    }

    // ── structural edits ──────────────────────────────────────────────────

    /// Replaces whatever subtree occupies this position with a single leaf
    /// holding `item`. The replaced subtree is dropped.
    ///
    /// Fails only for a stale cursor.
    pub fn insert<T>(&mut self, forest: &mut Forest<T>, item: T) -> Result<(), CursorError> {
        self.check_rooted(forest)?;
        if let Some(old) = self.detach(forest) {
            forest.release_subtree(old);
        }
        let node = forest.alloc(item);
        self.attach(forest, node);
        trace!("insert node {node} into tree {}", self.tree.index());
        Ok(())
    }

    /// Detaches the subtree at this position and returns it as a new tree of
    /// the same forest. The cursor is left at bottom. At bottom already, an
    /// empty tree is returned and nothing else changes.
    ///
    /// The returned tree's slot stays live until it is handed to
    /// [`Forest::remove_tree`], and its nodes until they are pasted elsewhere
    /// or removed with it. Dropping the [`TreeId`] alone reclaims nothing.
    pub fn cut<T>(&mut self, forest: &mut Forest<T>) -> Result<TreeId, CursorError> {
        self.check_rooted(forest)?;
        let detached = self.detach(forest);
        let tree = forest.push_tree(detached);
        trace!(
            "cut {detached:?} from tree {} into tree {}",
            self.tree.index(),
            tree.index()
        );
        Ok(tree)
    }

    /// Replaces the subtree at this position with the contents of `tree`,
    /// which is left empty. The replaced subtree is dropped; pasting an empty
    /// tree therefore amounts to a cut whose result is discarded.
    pub fn paste<T>(&mut self, forest: &mut Forest<T>, tree: TreeId) -> Result<(), CursorError> {
        if self.is_inside(tree) {
            return Err(CursorError::Cycle);
        }
        self.check_rooted(forest)?;
        let source = forest.tree_root(tree).ok_or(CursorError::Stale)?;
        if let Some(old) = self.detach(forest) {
            forest.release_subtree(old);
        }
        if let Some(root) = source {
            forest.set_tree_root(tree, None);
            self.attach(forest, root);
        }
        trace!(
            "paste tree {} ({source:?}) into tree {}",
            tree.index(),
            self.tree.index()
        );
        Ok(())
    }

    /// Unlinks the focus from its parent (or from the tree root) and moves
    /// the cursor to bottom. Assumes a checked cursor.
    fn detach<T>(&mut self, forest: &mut Forest<T>) -> Option<u32> {
        let focus = self.focus.take()?;
        forest.link(self.tree, self.parent, self.side, None);
        forest.set_parent(focus, None);
        Some(focus)
    }

    /// Links a detached `node` into this (empty) position and focuses it.
    fn attach<T>(&mut self, forest: &mut Forest<T>, node: u32) {
        forest.link(self.tree, self.parent, self.side, Some(node));
        self.focus = Some(node);
    }

    // ── validation ────────────────────────────────────────────────────────

    /// O(1) check that the recorded link still holds.
    fn check<T>(&self, forest: &Forest<T>) -> Result<(), CursorError> {
        let Some(root) = forest.tree_root(self.tree) else {
            return Err(self.stale());
        };
        let linked = match self.parent {
            None => root == self.focus,
            Some(p) => forest.node(p).is_some() && forest.child(p, self.side) == self.focus,
        };
        let focus_live = self.focus.map_or(true, |f| forest.node(f).is_some());
        if linked && focus_live {
            Ok(())
        } else {
            Err(self.stale())
        }
    }

    /// [`check`](Self::check), plus the parent must still hang below the root
    /// of this cursor's tree.
    fn check_rooted<T>(&self, forest: &Forest<T>) -> Result<(), CursorError> {
        self.check(forest)?;
        let Some(p) = self.parent else {
            return Ok(());
        };
        if forest.tree_root(self.tree).flatten() == Some(top(forest.arena(), p)) {
            Ok(())
        } else {
            Err(self.stale())
        }
    }

    fn stale(&self) -> CursorError {
        debug!(
            "stale cursor on tree {} (focus {:?}, parent {:?})",
            self.tree.index(),
            self.focus,
            self.parent
        );
        CursorError::Stale
    }

    fn focus_node<'f, T>(&self, forest: &'f Forest<T>) -> Option<&'f BinaryNode<T>> {
        self.focus.and_then(|f| forest.node(f))
    }
}

//! Single rotations, the rebalancing primitive of AVL and red-black trees.
//!
//! Both rotations are composed from [`Cursor::cut`], [`Cursor::paste`] and
//! navigation only; there is no separate link-patching path. Scratch trees
//! created on the way are removed before returning.

use log::trace;

use crate::cursor::Cursor;
use crate::error::CursorError;
use crate::forest::Forest;
use crate::types::Side;

impl Cursor {
    /// Rotates the subtree at this position to the right.
    ///
    /// ```text
    ///        |                    |
    ///       [y]                  [x]
    ///       / \   rotate_right   / \
    ///     [x]  c      -->       a  [y]
    ///     / \                      / \
    ///    a   b                    b   c
    /// ```
    ///
    /// In-order sequence `a x b y c` is unchanged. The cursor ends up on `x`.
    /// Fails with [`CursorError::InvalidPosition`] when the focus has no left
    /// child.
    pub fn rotate_right<T>(&mut self, forest: &mut Forest<T>) -> Result<(), CursorError> {
        self.rotate(forest, Side::Left)
    }

    /// Rotates the subtree at this position to the left; the inverse of
    /// [`rotate_right`](Self::rotate_right).
    ///
    /// ```text
    ///        |                    |
    ///       [x]                  [y]
    ///       / \   rotate_left    / \
    ///      a  [y]     -->      [x]  c
    ///         / \              / \
    ///        b   c            a   b
    /// ```
    ///
    /// Fails with [`CursorError::InvalidPosition`] when the focus has no right
    /// child.
    pub fn rotate_left<T>(&mut self, forest: &mut Forest<T>) -> Result<(), CursorError> {
        self.rotate(forest, Side::Right)
    }

    /// Lifts the child on `rising` into this position; the old focus becomes
    /// that child's `rising.mirror()` child and adopts its inner subtree.
    fn rotate<T>(&mut self, forest: &mut Forest<T>, rising: Side) -> Result<(), CursorError> {
        self.consult(forest)?;
        let has_child = match rising {
            Side::Left => self.has_left(forest),
            Side::Right => self.has_right(forest),
        };
        if !has_child {
            return Err(CursorError::InvalidPosition);
        }
        let sinking = rising.mirror();

        let upper_tree = self.cut(forest)?;
        let upper = forest.root(upper_tree);
        let inner_tree = upper.child(forest, rising)?.child(forest, sinking)?.cut(forest)?;
        let lower_tree = upper.child(forest, rising)?.cut(forest)?;
        upper.child(forest, rising)?.paste(forest, inner_tree)?;
        forest
            .root(lower_tree)
            .child(forest, sinking)?
            .paste(forest, upper_tree)?;
        self.paste(forest, lower_tree)?;

        for scratch in [inner_tree, upper_tree, lower_tree] {
            forest.remove_tree(scratch)?;
        }
        trace!("rotate {rising:?} child up in tree {}", self.tree().index());
        Ok(())
    }

    fn child<T>(&self, forest: &Forest<T>, side: Side) -> Result<Cursor, CursorError> {
        match side {
            Side::Left => self.left(forest),
            Side::Right => self.right(forest),
        }
    }
}

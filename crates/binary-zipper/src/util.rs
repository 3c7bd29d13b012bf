//! Arena link helpers.
//!
//! Every function takes the arena as a slice plus `u32` node indices and
//! works for any element type implementing [`Node`]. None of them check
//! liveness; callers pass indices reachable from a tree root.

use crate::types::{Node, Side};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

/// Child of `idx` on `side`.
#[inline]
pub fn child<N: Node>(arena: &[N], idx: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, idx),
        Side::Right => get_r(arena, idx),
    }
}

/// Overwrites the `side` link of `idx`. The back-link of the new child is
/// left to the caller.
#[inline]
pub fn set_child<N: Node>(arena: &mut [N], idx: u32, side: Side, v: Option<u32>) {
    match side {
        Side::Left => arena[idx as usize].set_l(v),
        Side::Right => arena[idx as usize].set_r(v),
    }
}

/// Side of its parent through which `idx` is reached, `None` for a root.
pub fn side_of<N: Node>(arena: &[N], idx: u32) -> Option<Side> {
    let p = get_p(arena, idx)?;
    if get_l(arena, p) == Some(idx) {
        Some(Side::Left)
    } else {
        Some(Side::Right)
    }
}

/// Topmost ancestor of `idx` (the node itself when it has no parent).
pub fn top<N: Node>(arena: &[N], mut idx: u32) -> u32 {
    while let Some(p) = get_p(arena, idx) {
        idx = p;
    }
    idx
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Indices of every node under `root`, parents before children.
///
/// Iterative so that degenerate (list-shaped) trees cannot overflow the
/// stack.
pub fn descendants<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(idx) = stack.pop() {
        out.push(idx);
        if let Some(r) = get_r(arena, idx) {
            stack.push(r);
        }
        if let Some(l) = get_l(arena, idx) {
            stack.push(l);
        }
    }
    out
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    descendants(arena, root).len()
}

/// Number of nodes on the longest downward path from `root`.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut best = 0;
    let mut stack: Vec<(u32, usize)> = root.into_iter().map(|r| (r, 1)).collect();
    while let Some((idx, depth)) = stack.pop() {
        best = best.max(depth);
        if let Some(l) = get_l(arena, idx) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, idx) {
            stack.push((r, depth + 1));
        }
    }
    best
}

/// Checks the back-link invariant for every node under `root`: the root has
/// no parent, and each child's `p` points at the node that links to it.
pub fn is_consistent<N: Node>(arena: &[N], root: Option<u32>) -> bool {
    let Some(root) = root else {
        return true;
    };
    if get_p(arena, root).is_some() {
        return false;
    }
    descendants(arena, Some(root)).into_iter().all(|idx| {
        [get_l(arena, idx), get_r(arena, idx)]
            .into_iter()
            .flatten()
            .all(|c| get_p(arena, c) == Some(idx))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct N {
        key: u32,
        p: Option<u32>,
        l: Option<u32>,
        r: Option<u32>,
    }

    impl Node for N {
        fn p(&self) -> Option<u32> {
            self.p
        }
        fn l(&self) -> Option<u32> {
            self.l
        }
        fn r(&self) -> Option<u32> {
            self.r
        }
        fn set_p(&mut self, v: Option<u32>) {
            self.p = v;
        }
        fn set_l(&mut self, v: Option<u32>) {
            self.l = v;
        }
        fn set_r(&mut self, v: Option<u32>) {
            self.r = v;
        }
    }

    fn node(key: u32) -> N {
        N {
            key,
            ..Default::default()
        }
    }

    fn link(arena: &mut [N], parent: u32, side: Side, c: u32) {
        set_child(arena, parent, side, Some(c));
        set_p(arena, c, Some(parent));
    }

    /// ```text
    ///       3
    ///      / \
    ///     1   4
    ///    / \
    ///   0   2
    /// ```
    fn sample() -> (Vec<N>, u32) {
        let mut arena: Vec<N> = (0..5).map(node).collect();
        link(&mut arena, 3, Side::Left, 1);
        link(&mut arena, 3, Side::Right, 4);
        link(&mut arena, 1, Side::Left, 0);
        link(&mut arena, 1, Side::Right, 2);
        (arena, 3)
    }

    fn collect_inorder(arena: &[N], root: Option<u32>) -> Vec<u32> {
        let mut result = Vec::new();
        let mut curr = first(arena, root);
        while let Some(idx) = curr {
            result.push(arena[idx as usize].key);
            curr = next(arena, idx);
        }
        result
    }

    #[test]
    fn next_walks_in_order() {
        let (arena, root) = sample();
        assert_eq!(collect_inorder(&arena, Some(root)), vec![0, 1, 2, 3, 4]);
        assert_eq!(collect_inorder(&arena, None), Vec::<u32>::new());
    }

    #[test]
    fn prev_walks_backwards() {
        let (arena, root) = sample();
        let mut out = Vec::new();
        let mut curr = last(&arena, Some(root));
        while let Some(idx) = curr {
            out.push(idx);
            curr = prev(&arena, idx);
        }
        assert_eq!(out, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn size_height_and_top() {
        let (arena, root) = sample();
        assert_eq!(size(&arena, Some(root)), 5);
        assert_eq!(size(&arena, Some(1)), 3);
        assert_eq!(height(&arena, Some(root)), 3);
        assert_eq!(height(&arena, None), 0);
        assert_eq!(top(&arena, 2), root);
        assert_eq!(side_of(&arena, 0), Some(Side::Left));
        assert_eq!(side_of(&arena, 4), Some(Side::Right));
        assert_eq!(side_of(&arena, root), None);
    }

    #[test]
    fn consistency_detects_broken_back_link() {
        let (mut arena, root) = sample();
        assert!(is_consistent(&arena, Some(root)));
        assert!(!is_consistent(&arena, Some(1)));
        set_p(&mut arena, 2, Some(3));
        assert!(!is_consistent(&arena, Some(root)));
    }
}

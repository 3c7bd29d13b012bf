use binary_zipper::{Cursor, CursorError, Forest, TreeId};
use proptest::prelude::*;

/// Builds a search tree by walking each key down from the root and inserting
/// it at the empty slot it reaches. Duplicates go right.
fn build(forest: &mut Forest<u16>, keys: &[u16]) -> TreeId {
    let tree = forest.new_tree();
    for &key in keys {
        let mut itr = forest.root(tree);
        while !itr.is_bottom() {
            let here = *itr.consult(forest).unwrap();
            itr = if key < here {
                itr.left(forest).unwrap()
            } else {
                itr.right(forest).unwrap()
            };
        }
        itr.insert(forest, key).unwrap();
    }
    tree
}

/// Follows `path` (`true` = left) from the root, stopping before bottom.
fn walk(forest: &Forest<u16>, tree: TreeId, path: &[bool]) -> Cursor {
    let mut itr = forest.root(tree);
    for &left in path {
        let next = if left {
            itr.left(forest).unwrap()
        } else {
            itr.right(forest).unwrap()
        };
        if next.is_bottom() {
            break;
        }
        itr = next;
    }
    itr
}

fn items(forest: &Forest<u16>, tree: TreeId) -> Vec<u16> {
    forest.iter(tree).copied().collect()
}

fn sorted(keys: &[u16]) -> Vec<u16> {
    let mut out = keys.to_vec();
    out.sort_unstable();
    out
}

proptest! {
    #[test]
    fn rotations_preserve_in_order_sequence(
        keys in prop::collection::vec(any::<u16>(), 1..48),
        moves in prop::collection::vec(
            (prop::collection::vec(any::<bool>(), 0..8), any::<bool>()),
            0..32,
        ),
    ) {
        let mut forest = Forest::new();
        let tree = build(&mut forest, &keys);
        let expected = sorted(&keys);
        prop_assert_eq!(items(&forest, tree), expected.clone());

        for (path, right) in moves {
            let mut itr = walk(&forest, tree, &path);
            let rotated = if right {
                itr.rotate_right(&mut forest)
            } else {
                itr.rotate_left(&mut forest)
            };
            match rotated {
                Ok(()) | Err(CursorError::InvalidPosition) => {}
                Err(err) => prop_assert!(false, "unexpected {}", err),
            }
            prop_assert_eq!(items(&forest, tree), expected.clone());
            prop_assert!(forest.is_consistent(tree));
        }
        prop_assert_eq!(forest.node_count(), keys.len());
        prop_assert_eq!(forest.tree_count(), 1);
    }

    #[test]
    fn rotate_right_then_left_restores_shape(
        keys in prop::collection::vec(any::<u16>(), 1..48),
        path in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let mut forest = Forest::new();
        let tree = build(&mut forest, &keys);
        let before = forest.print(tree);

        let mut itr = walk(&forest, tree, &path);
        if itr.has_left(&forest) {
            itr.rotate_right(&mut forest).unwrap();
            itr.rotate_left(&mut forest).unwrap();
            prop_assert_eq!(forest.print(tree), before);
        }
    }

    #[test]
    fn cut_then_paste_is_identity(
        keys in prop::collection::vec(any::<u16>(), 1..48),
        path in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let mut forest = Forest::new();
        let tree = build(&mut forest, &keys);
        let before = forest.print(tree);

        let mut itr = walk(&forest, tree, &path);
        let focus = *itr.consult(&forest).unwrap();
        let size = forest.tree_len(tree);

        let sub = itr.cut(&mut forest).unwrap();
        prop_assert!(itr.is_bottom());
        prop_assert_eq!(forest.tree_len(tree) + forest.tree_len(sub), size);
        prop_assert!(forest.is_consistent(tree));
        prop_assert!(forest.is_consistent(sub));

        itr.paste(&mut forest, sub).unwrap();
        prop_assert!(forest.is_empty(sub));
        prop_assert_eq!(itr.consult(&forest).copied(), Ok(focus));
        prop_assert_eq!(forest.print(tree), before);
    }

    #[test]
    fn extreme_descents_reach_bottom(
        keys in prop::collection::vec(any::<u16>(), 1..48),
        path in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let mut forest = Forest::new();
        let tree = build(&mut forest, &keys);
        let itr = walk(&forest, tree, &path);

        let lo = itr.left_most(&forest).unwrap();
        let hi = itr.right_most(&forest).unwrap();
        prop_assert!(lo.is_bottom());
        prop_assert!(hi.is_bottom());

        // Slot parents are the extreme keys of the subtree under `itr`.
        let mut forest_copy = forest.clone();
        let sub = itr.alias().cut(&mut forest_copy).unwrap();
        let sub_items = items(&forest_copy, sub);
        prop_assert_eq!(lo.up(&forest).unwrap().consult(&forest).copied(), Ok(sub_items[0]));
        prop_assert_eq!(
            hi.up(&forest).unwrap().consult(&forest).copied(),
            Ok(sub_items[sub_items.len() - 1])
        );
    }
}

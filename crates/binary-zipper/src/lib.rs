//! Arena-backed binary tree with a zipper cursor.
//!
//! A [`Forest`] owns the nodes of any number of trees, each addressed by a
//! [`TreeId`]. All navigation and mutation goes through a [`Cursor`]: a
//! `Copy` position that can walk up and down a tree, read or replace the
//! payload at its focus, cut subtrees out into trees of their own, paste
//! trees back in, and perform the single left/right rotations used by
//! self-balancing trees. Payloads are opaque; no ordering is imposed.
//!
//! Links are `Option<u32>` indices into the forest's arena rather than
//! pointers, so cut and paste are O(1) re-pointing of indices.
//!
//! ```
//! use binary_zipper::Forest;
//!
//! let mut forest = Forest::new();
//! let tree = forest.new_tree();
//!
//! let mut root = forest.root(tree);
//! root.insert(&mut forest, "y").unwrap();
//! let mut x = root.left(&forest).unwrap();
//! x.insert(&mut forest, "x").unwrap();
//! root.right(&forest).unwrap().insert(&mut forest, "c").unwrap();
//! x.left(&forest).unwrap().insert(&mut forest, "a").unwrap();
//! x.right(&forest).unwrap().insert(&mut forest, "b").unwrap();
//!
//! root.rotate_right(&mut forest).unwrap();
//! assert_eq!(root.consult(&forest), Ok(&"x"));
//! assert_eq!(
//!     forest.iter(tree).copied().collect::<Vec<_>>(),
//!     vec!["a", "x", "b", "y", "c"],
//! );
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait, [`Side`] |
//! [`node`] | [`BinaryNode`], the arena element |
//! [`util`] | Generic arena helpers: `first`, `next`, `size`, `is_consistent` … |
//! [`forest`] | [`Forest`], [`TreeId`], in-order [`Iter`] |
//! [`cursor`] | [`Cursor`] navigation, `insert` / `cut` / `paste` |
//! `rotate` | `rotate_left` / `rotate_right` on [`Cursor`] |
//! `print` | [`Forest::print`] |
//! [`error`] | [`CursorError`] |

pub mod cursor;
pub mod error;
pub mod forest;
pub mod node;
mod print;
mod rotate;
pub mod types;
pub mod util;

pub use cursor::Cursor;
pub use error::CursorError;
pub use forest::{Forest, Iter, TreeId};
pub use node::BinaryNode;
pub use types::{Node, Side};

//! Link trait and side marker shared by the arena helpers.
//!
//! Nodes never hold references to each other. Each "pointer" is an
//! `Option<u32>` index into the [`Vec`]-backed arena owned by
//! [`Forest`](crate::Forest), and every helper in [`util`](crate::util)
//! takes that arena as a slice.

/// Binary-tree links (`p`, `l`, `r`).
///
/// `l` and `r` are owning links. `p` is the back-link used for upward
/// navigation and must agree with whichever downward link reaches the node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Which child link of the parent leads to a position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    #[default]
    Right,
}

impl Side {
    /// The opposite side.
    pub fn mirror(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

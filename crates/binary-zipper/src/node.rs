use crate::types::Node;

/// Arena element of a [`Forest`](crate::Forest).
#[derive(Clone, Debug)]
pub struct BinaryNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    // `None` marks a reclaimed slot sitting on the forest's free list.
    pub item: Option<T>,
}

impl<T> BinaryNode<T> {
    pub fn new(item: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            item: Some(item),
        }
    }

    pub fn is_live(&self) -> bool {
        self.item.is_some()
    }

    /// Clears all links and hands back the payload.
    pub(crate) fn release(&mut self) -> Option<T> {
        self.p = None;
        self.l = None;
        self.r = None;
        self.item.take()
    }
}

impl<T> Node for BinaryNode<T> {
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

use crate::record::Record;
use crate::types::Linked;

/// One cell of the chain: an owned [`Record`] plus the arena index of the
/// following cell.
///
/// Only [`crate::OrderedList::add`] rewrites `next`, when splicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: Record,
    pub next: Option<u32>,
}

impl Node {
    pub fn new(value: Record) -> Self {
        Self { value, next: None }
    }
}

impl Linked for Node {
    #[inline]
    fn next(&self) -> Option<u32> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, v: Option<u32>) {
        self.next = v;
    }
}

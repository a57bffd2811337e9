//! Arena walkers for singly linked chains.
//!
//! Every function takes the arena by slice and a node index, so they work for
//! any node layout implementing [`Linked`].

use crate::types::Linked;

#[inline]
pub(crate) fn get_next<N: Linked>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].next()
}

#[inline]
pub(crate) fn set_next<N: Linked>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_next(v);
}

/// Successor of `curr`, if any.
pub fn next<N: Linked>(arena: &[N], curr: u32) -> Option<u32> {
    get_next(arena, curr)
}

/// Number of nodes reachable from `head`.
pub fn len<N: Linked>(arena: &[N], head: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = head;
    while let Some(idx) = curr {
        count += 1;
        curr = get_next(arena, idx);
    }
    count
}

//! Link trait for arena nodes.
//!
//! A "pointer" is an `Option<u32>` index into a caller-owned `Vec<N>`.
//! Walkers in [`crate::util`] take the arena as a slice and work with
//! indices only.

/// Forward link (`next`) of a singly linked arena node.
pub trait Linked {
    fn next(&self) -> Option<u32>;
    fn set_next(&mut self, v: Option<u32>);
}

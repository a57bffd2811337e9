//! Singly linked list of [`Record`]s kept in ascending order by age.
//!
//! Nodes are not boxed individually. They live in a [`Vec`]-backed arena
//! owned by the [`OrderedList`], and every `next` "pointer" is an
//! `Option<u32>` index into that arena. Each node is reachable through
//! exactly one link (the list head or one predecessor), so the chain is
//! exclusively owned and acyclic.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`record`] | [`Record`] payload (name + age) and its display form |
//! [`types`] | [`Linked`] trait for arena nodes |
//! [`node`] | [`Node`] cell |
//! [`util`] | `next`, `len` arena walkers |
//! [`list`] | [`OrderedList`]: `first`, `add`, `print_all` |
//! [`error`] | [`ListError`], [`RosterError`] |
//! [`roster`] | Demo input: reference roster and JSON loading |
//! [`print`] | Line rendering shared by `print_all` and `render` |
//! [`demo`] | Script behind the `sorted-list-demo` binary |

pub mod demo;
pub mod error;
pub mod list;
pub mod node;
pub mod print;
pub mod record;
pub mod roster;
pub mod types;
pub mod util;

pub use error::{ListError, RosterError};
pub use list::{Iter, OrderedList};
pub use node::Node;
pub use record::Record;
pub use types::Linked;

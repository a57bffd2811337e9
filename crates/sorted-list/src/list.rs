//! [`OrderedList`]: records kept in non-decreasing age order.
//!
//! Insertion walks the chain with two cursors (`prior`, `current`) and
//! splices the new node in front of the first node whose age is strictly
//! greater. Equal ages are never displaced, so among equal ages the
//! traversal order is insertion order.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::error::ListError;
use crate::node::Node;
use crate::print::{render_lines, write_lines};
use crate::record::Record;
use crate::util::{self, get_next, set_next};

/// Singly linked list of [`Record`]s sorted ascending by age.
///
/// Nodes are stored in an arena and linked by index; nothing outside the
/// list can reach an interior node.
#[derive(Debug, Clone, Default)]
pub struct OrderedList {
    head: Option<u32>,
    arena: Vec<Node>,
}

impl OrderedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Record with the minimum age. O(1).
    pub fn first(&self) -> Result<&Record, ListError> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        let record = &self.arena[head as usize].value;
        trace!(target: "sorted_list::first", age = record.age(), "read head");
        Ok(record)
    }

    /// Inserts `record` so that ages stay non-decreasing from the head.
    ///
    /// O(1) on an empty list or for a new minimum, O(n) otherwise.
    pub fn add(&mut self, record: Record) {
        let age = record.age();

        let Some(head) = self.head else {
            let idx = self.alloc(record);
            self.head = Some(idx);
            debug!(target: "sorted_list::add", case = "empty", age, position = 0, "inserted");
            return;
        };

        if self.arena[head as usize].value.age() > age {
            let idx = self.alloc(record);
            set_next(&mut self.arena, idx, Some(head));
            self.head = Some(idx);
            debug!(target: "sorted_list::add", case = "front", age, position = 0, "inserted");
            return;
        }

        let mut prior = head;
        let mut current = get_next(&self.arena, head);
        let mut position = 1usize;
        while let Some(curr) = current {
            if self.arena[curr as usize].value.age() > age {
                let idx = self.alloc(record);
                set_next(&mut self.arena, idx, Some(curr));
                set_next(&mut self.arena, prior, Some(idx));
                debug!(target: "sorted_list::add", case = "splice", age, position, "inserted");
                return;
            }
            prior = curr;
            current = get_next(&self.arena, curr);
            position += 1;
        }

        let idx = self.alloc(record);
        set_next(&mut self.arena, prior, Some(idx));
        debug!(target: "sorted_list::add", case = "append", age, position, "inserted");
        debug_assert_eq!(util::len(&self.arena, self.head), self.arena.len());
    }

    fn alloc(&mut self, record: Record) -> u32 {
        let idx = self.arena.len() as u32;
        self.arena.push(Node::new(record));
        idx
    }

    /// Head-to-tail traversal.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            curr: self.head,
            remaining: self.arena.len(),
        }
    }

    /// Writes every record, one per line, in list order.
    pub fn write_all<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_lines(out, self.iter())
    }

    /// The lines [`OrderedList::print_all`] emits.
    pub fn render(&self) -> String {
        render_lines(self.iter())
    }

    /// Prints every record to stdout, one per line, in list order.
    pub fn print_all(&self) {
        print!("{}", self.render());
    }
}

/// Borrowing iterator over an [`OrderedList`], head first.
pub struct Iter<'a> {
    arena: &'a [Node],
    curr: Option<u32>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = util::next(self.arena, idx);
        self.remaining -= 1;
        Some(&self.arena[idx as usize].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a OrderedList {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Record> for OrderedList {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.add(record);
        }
    }
}

impl FromIterator<Record> for OrderedList {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

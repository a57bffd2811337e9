//! Demo script behind the `sorted-list-demo` binary.

use std::io::{self, Write};

use tracing::info;

use crate::list::OrderedList;
use crate::record::Record;

/// Runs the demo against `out`:
///
/// 1. reads the head of the empty list and prints the error message,
/// 2. adds every record of `roster` in order,
/// 3. prints the whole list,
/// 4. prints `front of list is -> <record>`.
pub fn run<W: Write + ?Sized>(roster: Vec<Record>, out: &mut W) -> io::Result<()> {
    let mut list = OrderedList::new();

    match list.first() {
        Ok(record) => writeln!(out, "{record}")?,
        Err(e) => writeln!(out, "{e}")?,
    }

    list.extend(roster);
    info!(target: "sorted_list::demo", len = list.len(), "roster loaded");

    list.write_all(out)?;

    match list.first() {
        Ok(record) => writeln!(out, "front of list is -> {record}")?,
        Err(e) => writeln!(out, "{e}")?,
    }
    Ok(())
}

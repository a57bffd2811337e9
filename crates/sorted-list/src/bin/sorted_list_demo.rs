//! `sorted-list-demo` — add a roster of users to an ordered list and print it.
//!
//! Usage:
//!   sorted-list-demo [ROSTER.json]
//!
//! Without an argument the reference roster is used. Log verbosity follows
//! `RUST_LOG` (default `warn`); logs go to stderr.

use sorted_list::demo;
use sorted_list::roster::{load_roster, reference_roster};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let roster = match std::env::args().nth(1) {
        Some(path) => match load_roster(&path) {
            Ok(roster) => roster,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => reference_roster(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo::run(roster, &mut out).and_then(|()| out.flush()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

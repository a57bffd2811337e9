use std::fmt::Display;
use std::io::{self, Write};

/// Writes every item's display form on its own line.
pub fn write_lines<W, I>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

/// Same output as [`write_lines`], collected into a `String`.
pub fn render_lines<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for item in items {
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out
}

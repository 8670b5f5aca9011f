// ABOUTME: Confirmation prompt shown before panes are opened.
// ABOUTME: Reads from any BufRead so the answer can be scripted in tests.

use std::io::{self, BufRead, Write};

/// Ask whether to open `count` panes. Only `y` (any case) confirms.
pub fn confirm(count: usize, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<bool> {
    writeln!(output, "\nNumber of panes to open: {count}")?;
    write!(output, "Press 'y' to continue or anything else to abort: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

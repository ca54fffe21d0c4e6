//! Dragon Dex CLI - Testing and development entry point
//!
//! Reads dragon records from stdin and prints them back in canonical form,
//! which is handy for normalizing a hand-edited catalog.

use std::io::{self, BufRead, Write};

use dragon_dex::config::Settings;
use dragon_dex::Dex;

fn main() -> io::Result<()> {
    let lines: Vec<String> = io::stdin().lock().lines().collect::<Result<_, _>>()?;
    let dex = Dex::from_records(lines.iter().map(String::as_str), Settings::default());

    let mut stdout = io::stdout().lock();
    for record in dex.to_records() {
        writeln!(stdout, "{}", record)?;
    }

    // Per-record rejection details go through `log`; no logger is installed here
    if dex.rejected() > 0 {
        eprintln!("{} records rejected", dex.rejected());
    }

    Ok(())
}

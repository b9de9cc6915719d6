// spell: report words not found in a dictionary.
//
// Usage:
//   spell [-s SUFFIX] [-v...] [-q] DICTIONARY [FILE_OR_DIR]...
//
// With no FILE_OR_DIR, standard input is checked. Directories are searched
// recursively for files ending in SUFFIX (default `.txt`). Every
// misspelled word is printed to stdout as
//
//   [FILE:]LINE:COL WORD
//
// Exit status is 0 when nothing was reported and every input was readable.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use spell_cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    spell_cli::init_logging(&args);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let outcome = spell_cli::run(&args, &mut out)
        .and_then(|outcome| {
            out.flush()?;
            Ok(outcome)
        })
        .unwrap_or_else(|e| spell_cli::fatal(&e.to_string()));

    if outcome.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// spell-cli: argument parsing, logging setup and input dispatch for `spell`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use spell_engine::{CheckOptions, CheckSummary, Dictionary, SpellChecker, SpellError};

/// Report every word of the input that is not in the dictionary.
///
/// Each misspelling is printed as `LINE:COL WORD`, prefixed with `FILE:`
/// when more than one input is given or a directory is searched. The exit
/// status is non-zero if any word was reported or any input was unreadable.
#[derive(Parser, Debug, Clone)]
#[command(name = "spell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Args {
    /// Filename suffix of the files checked inside directories
    #[arg(
        short,
        long,
        env = "SPELL_SUFFIX",
        default_value = ".txt",
        allow_hyphen_values = true
    )]
    pub suffix: String,

    /// Log more details to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Word list with one word per line
    pub dictionary: PathBuf,

    /// Files or directories to check; reads standard input when omitted
    pub inputs: Vec<PathBuf>,
}

impl Args {
    /// Effective verbosity level (0 = quiet, 1 = default).
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Install the stderr logger at the level selected by `-v`/`-q`.
///
/// `SPELL_LOG` may override it with `env_logger` filter syntax.
pub fn init_logging(args: &Args) {
    let level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("SPELL_LOG")
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Result of a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Counters over every checked source.
    pub summary: CheckSummary,
    /// Inputs that could not be accessed or read.
    pub failed_inputs: usize,
}

impl Outcome {
    /// True when no word was reported and every input was readable.
    pub fn success(&self) -> bool {
        self.summary.is_clean() && self.failed_inputs == 0
    }

    /// Fold a per-source result in. Unreadable inputs are reported on
    /// stderr and counted; any other error is returned.
    fn record(&mut self, result: Result<CheckSummary, SpellError>) -> Result<(), SpellError> {
        match result {
            Ok(summary) => {
                self.summary.merge(summary);
                Ok(())
            }
            Err(e @ SpellError::InputUnreadable { .. }) => {
                eprintln!("error: {e}");
                self.failed_inputs += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Run the checker with the process's standard input.
pub fn run<W: Write + ?Sized>(args: &Args, out: &mut W) -> Result<Outcome, SpellError> {
    run_with_stdin(args, io::stdin().lock(), out)
}

/// Run the checker, reading `stdin` when no inputs are named.
///
/// An unreadable dictionary or a failed report write aborts the run with
/// an error. Unreadable inputs are reported on stderr and skipped.
pub fn run_with_stdin<R: Read, W: Write + ?Sized>(
    args: &Args,
    stdin: R,
    out: &mut W,
) -> Result<Outcome, SpellError> {
    let dictionary = Dictionary::load(&args.dictionary)?;
    let checker = SpellChecker::new(dictionary, CheckOptions::default());
    let mut outcome = Outcome::default();

    if args.inputs.is_empty() {
        outcome.record(checker.check_reader(stdin, None, out))?;
        return Ok(outcome);
    }

    let show_labels = args.inputs.len() > 1;
    for input in &args.inputs {
        let metadata = match fs::metadata(input) {
            Ok(metadata) => metadata,
            Err(e) => {
                eprintln!("error: cannot access '{}': {e}", input.display());
                outcome.failed_inputs += 1;
                continue;
            }
        };

        if metadata.is_dir() {
            for found in walk_directory(input, &args.suffix) {
                let result = match found {
                    Ok(path) => {
                        let label = path.display().to_string();
                        checker.check_path(&path, Some(label.as_str()), out)
                    }
                    Err(e) => Err(e),
                };
                outcome.record(result)?;
            }
        } else {
            let label = show_labels.then(|| input.display().to_string());
            outcome.record(checker.check_path(input, label.as_deref(), out))?;
        }
    }

    log::info!(
        "checked {} tokens, {} misspellings, {} unreadable inputs",
        outcome.summary.tokens,
        outcome.summary.misspellings,
        outcome.failed_inputs
    );
    Ok(outcome)
}

/// Find the regular files under `root` whose names end with `suffix`.
///
/// Entries whose names start with `.` are skipped, as are entries whose
/// metadata cannot be read. Each directory is visited in file-name order,
/// depth first, so the result is deterministic. A directory that cannot be
/// opened yields an `InputUnreadable` error in its place.
pub fn walk_directory(root: &Path, suffix: &str) -> Vec<Result<PathBuf, SpellError>> {
    let mut found = Vec::new();
    walk_into(root, suffix.as_bytes(), &mut found);
    found
}

fn walk_into(dir: &Path, suffix: &[u8], found: &mut Vec<Result<PathBuf, SpellError>>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            found.push(Err(SpellError::InputUnreadable {
                path: dir.to_path_buf(),
                source,
            }));
            return;
        }
    };
    log::info!("searching {}", dir.display());

    let mut names: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name())
        .collect();
    names.sort();

    for name in names {
        let bytes = name.as_encoded_bytes();
        if bytes.first() == Some(&b'.') {
            log::trace!("skipping hidden entry {}", dir.join(&name).display());
            continue;
        }

        let path = dir.join(&name);
        let Ok(metadata) = fs::metadata(&path) else {
            continue;
        };
        if metadata.is_dir() {
            walk_into(&path, suffix, found);
        } else if metadata.is_file() && bytes.ends_with(suffix) {
            found.push(Ok(path));
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

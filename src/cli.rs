//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use crate::core::model::BatchSummary;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::batch::{run_batch, BatchConfig};
use crate::flows::report::{Reporter, Verbosity};

/// wordcount - count word frequencies in text files and save them as JSON.
#[derive(Parser, Debug)]
#[command(name = "wordcount")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordcount reads each FILE, splits it into words and writes a JSON table of
word frequencies next to it (or under --path).

A word is a run of ASCII letters that may contain apostrophes after its first
letter ("don't" is one word, a leading quote is dropped). Words are lowercased
unless --case-sensitive is given.

Each FILE is processed on its own: a file that cannot be read or written is
reported as failed and the remaining files are still processed.

Output formats:
- record (default): {"Total": N, "Unique": N, "Counts": {word: count}}
- flat: {word: count}

Examples:
    wordcount moby.txt
    wordcount -p results/ chapter1.txt chapter2.txt
    wordcount moby.txt -n whale.json --top 100
    wordcount --quiet --format flat texts/*.txt
"#
)]
pub struct Cli {
    /// Input text files.
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Count words case-sensitively.
    #[arg(
        short,
        long,
        visible_alias = "cs",
        long_help = "Count words case-sensitively.\n\n\
By default uppercase ASCII letters are folded to lowercase, so \"Hello\" and\n\
\"hello\" are the same word."
    )]
    pub case_sensitive: bool,

    /// Suppress per-file status output.
    #[arg(
        short,
        long,
        long_help = "Suppress the per-file status blocks. The final summary line is still\n\
printed."
    )]
    pub quiet: bool,

    /// Suppress all standard output (implies --quiet).
    #[arg(
        short,
        long,
        long_help = "Suppress everything on standard output, including the summary line.\n\
Diagnostics on stderr are controlled separately by RUST_LOG / --verbose."
    )]
    pub silent: bool,

    /// Name of the output file (single input only).
    #[arg(
        short,
        long,
        value_name = "FILE",
        long_help = "Name of the output file. Only valid when exactly one FILE is given.\n\n\
The name is joined with --path. If omitted, the output is named\n\
<input stem>_counts.json."
    )]
    pub name: Option<String>,

    /// Directory for output files.
    #[arg(
        short,
        long,
        default_value = ".",
        env = "WORDCOUNT_OUTPUT_DIR",
        value_name = "DIR",
        long_help = "Directory that output files are written to. It must already exist.\n\n\
Defaults to the current directory."
    )]
    pub path: PathBuf,

    /// Keep only the N most frequent words (0 keeps all).
    #[arg(
        short,
        long,
        default_value = "0",
        value_name = "N",
        long_help = "Keep only the N most frequent words in each output file. Words with\n\
equal counts are kept in the order they first appear. Total and Unique still\n\
describe the whole file. 0 (default) keeps every word."
    )]
    pub top: usize,

    /// Output file shape (record/flat).
    #[arg(
        long,
        default_value = "record",
        value_parser = ["record", "flat"],
        value_name = "FORMAT",
        long_help = "Select the shape of each output file.\n\n\
Supported values:\n\
- record (default): {\"Total\": N, \"Unique\": N, \"Counts\": {...}}\n\
- flat: {word: count}\n\n\
Words are always listed in alphabetical order."
    )]
    pub format: String,

    /// Write compact JSON instead of indented JSON.
    #[arg(long)]
    pub compact: bool,

    /// Write each output through a temporary file and rename it into place.
    #[arg(
        long,
        long_help = "Write each output to a temporary file in the output directory and rename\n\
it over the destination, so a crash never leaves a partial file behind."
    )]
    pub atomic: bool,

    /// Number of files processed at once.
    #[arg(
        short,
        long,
        default_value = "1",
        value_name = "N",
        long_help = "Number of files processed at once. Values above 1 need a build with the\n\
`parallel` feature; status is still reported in input order."
    )]
    pub jobs: usize,

    /// Exit with status 1 if any file failed.
    #[arg(
        long,
        long_help = "Exit with status 1 when at least one file failed. Without this flag the\n\
exit status is 0 whenever the options are valid."
    )]
    pub strict: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Options shared by every file of the batch
    pub fn batch_config(&self) -> BatchConfig {
        let format: OutputFormat = self.format.parse().unwrap_or_default();
        BatchConfig {
            case_sensitive: self.case_sensitive,
            output_name: self.name.clone(),
            output_dir: self.path.clone(),
            verbosity: Verbosity::from_flags(self.quiet, self.silent),
            top_words: self.top,
            render: RenderConfig::with_pretty(format, !self.compact),
            atomic: self.atomic,
            jobs: self.jobs,
        }
    }
}

/// Rewrite the `-cs` shorthand to `--cs` before clap sees it.
///
/// clap reads `-cs` as the cluster `-c -s`, which would also turn on
/// `--silent`. Arguments after a literal `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut options_done = false;
    args.into_iter()
        .map(|arg| {
            if options_done {
                return arg;
            }
            if arg == "--" {
                options_done = true;
            } else if arg == "-cs" {
                return OsString::from("--cs");
            }
            arg
        })
        .collect()
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    let started = Instant::now();
    let config = cli.batch_config();
    config.validate(&cli.inputs)?;

    let color = !cli.no_color && std::io::stdout().is_terminal();
    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), config.verbosity, cli.inputs.len())
        .with_color(color)
        .with_cwd(std::env::current_dir().ok());
    reporter.begin();

    let outcomes = run_batch(&cli.inputs, &config, |index, outcome| {
        reporter.outcome(index, outcome);
    })?;

    let summary = BatchSummary::from_outcomes(&outcomes);
    reporter.summary(&summary, started.elapsed());

    if cli.strict && summary.has_failures() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

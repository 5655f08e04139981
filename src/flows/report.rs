//! Status reporting - Per-file status blocks and the batch summary line

use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use crate::core::model::{BatchOutcome, BatchSummary, OutcomeStatus};
use crate::core::paths::{display_path, normalize_path};
use crate::core::util::format_duration;

const SEPARATOR: &str = "----------------";

/// How much of the report reaches standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Per-file status blocks and the summary
    #[default]
    Normal,
    /// Summary only
    Quiet,
    /// Nothing
    Silent,
}

impl Verbosity {
    /// `silent` implies `quiet`
    pub fn from_flags(quiet: bool, silent: bool) -> Self {
        if silent {
            Verbosity::Silent
        } else if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }

    pub fn shows_outcomes(self) -> bool {
        self == Verbosity::Normal
    }

    pub fn shows_summary(self) -> bool {
        self != Verbosity::Silent
    }
}

/// Writes the human-readable batch report.
///
/// The report never decides the outcome of a batch: the first failed write
/// to the underlying stream is logged once and later writes are skipped.
pub struct Reporter<W: Write> {
    out: W,
    verbosity: Verbosity,
    color: bool,
    total: usize,
    cwd: Option<PathBuf>,
    write_error: Option<io::Error>,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, verbosity: Verbosity, total: usize) -> Self {
        Self {
            out,
            verbosity,
            color: false,
            total,
            cwd: None,
            write_error: None,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Directory that input paths are shown relative to
    pub fn with_cwd(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    /// Blank line that opens a non-quiet report
    pub fn begin(&mut self) {
        if self.verbosity.shows_outcomes() {
            let result = writeln!(self.out);
            self.record(result);
        }
    }

    /// Status block for the file at `index` (0-based)
    pub fn outcome(&mut self, index: usize, outcome: &BatchOutcome) {
        if self.verbosity.shows_outcomes() {
            let result = self.write_outcome(index, outcome);
            self.record(result);
        }
    }

    /// Closing `N Completed. N Failed. N Total.` line
    pub fn summary(&mut self, summary: &BatchSummary, elapsed: Duration) {
        if self.verbosity.shows_summary() {
            let result = self.write_summary(summary, elapsed);
            self.record(result);
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.write_error.is_none() {
                warn!(error = %e, "failed to write status report");
                self.write_error = Some(e);
            }
        }
    }

    fn write_outcome(&mut self, index: usize, outcome: &BatchOutcome) -> io::Result<()> {
        if self.write_error.is_some() {
            return Ok(());
        }

        let position = format!("{} of {}", index + 1, self.total);
        match &outcome.status {
            OutcomeStatus::Success(scan) => {
                let header = self.paint("Completed", true);
                let input = self.input_display(outcome);
                writeln!(self.out, "{} {}", header, position)?;
                writeln!(self.out, "  Input:  {}", input)?;
                writeln!(
                    self.out,
                    "  Output: {}",
                    outcome
                        .output
                        .as_deref()
                        .map(normalize_path)
                        .unwrap_or_default()
                )?;
                writeln!(self.out, "  Lines:  {}", scan.lines_read)?;
                writeln!(self.out, "  Words:  {}", scan.total_words)?;
                writeln!(self.out, "  Unique: {}", scan.unique_words())?;
                writeln!(self.out, "  Took:   {}", format_duration(outcome.elapsed))?;
            }
            OutcomeStatus::Failure(err) => {
                let header = self.paint("Failed", false);
                writeln!(self.out, "{} {}: {}", header, position, err)?;
            }
        }
        writeln!(self.out, "{}", SEPARATOR)
    }

    fn write_summary(&mut self, summary: &BatchSummary, elapsed: Duration) -> io::Result<()> {
        if self.write_error.is_some() {
            return Ok(());
        }
        writeln!(
            self.out,
            "{} Completed. {} Failed. {} Total. Took: {}",
            summary.success,
            summary.failure,
            summary.total,
            format_duration(elapsed)
        )?;
        self.out.flush()
    }

    fn input_display(&self, outcome: &BatchOutcome) -> String {
        let absolute =
            std::path::absolute(&outcome.input).unwrap_or_else(|_| outcome.input.clone());
        display_path(&absolute, self.cwd.as_deref())
    }

    fn paint(&self, label: &str, ok: bool) -> String {
        match (self.color, ok) {
            (false, _) => label.to_string(),
            (true, true) => label.green().bold().to_string(),
            (true, false) => label.red().bold().to_string(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

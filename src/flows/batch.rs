//! Batch flow - Count words in each input file and write one JSON table per file
//!
//! Every input goes through resolve -> read -> count -> cap -> encode -> write.
//! A failure at any step is recorded in that file's outcome and the batch
//! moves on; only configuration errors stop the batch, and they are raised
//! before any file is opened.

use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};

use crate::core::error::{Result, WordcountError};
use crate::core::file_reader::read_input;
use crate::core::model::{BatchOutcome, OutcomeStatus, ScanResult};
use crate::core::output::write_output;
use crate::core::paths::{absolute_input, resolve_output_path};
use crate::core::render::{render_counts, RenderConfig};
use crate::core::tokenizer::count_words;
use crate::core::util::timed;
use crate::flows::report::Verbosity;

/// Options shared by every file in a batch
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Keep uppercase letters instead of folding them
    pub case_sensitive: bool,
    /// Explicit output file name; only valid for a single input
    pub output_name: Option<String>,
    /// Directory that output files are written to
    pub output_dir: PathBuf,
    pub verbosity: Verbosity,
    /// Keep only the N most frequent words (0 = all)
    pub top_words: usize,
    pub render: RenderConfig,
    /// Write through a temporary file and rename
    pub atomic: bool,
    /// Worker count; values above 1 need the `parallel` feature
    pub jobs: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            output_name: None,
            output_dir: PathBuf::from("."),
            verbosity: Verbosity::Normal,
            top_words: 0,
            render: RenderConfig::default(),
            atomic: false,
            jobs: 1,
        }
    }
}

impl BatchConfig {
    /// Check the options against the input list before any file is touched
    pub fn validate(&self, inputs: &[PathBuf]) -> Result<()> {
        if inputs.is_empty() {
            return Err(WordcountError::Config("missing input file".to_string()));
        }
        if self.output_name.is_some() && inputs.len() > 1 {
            return Err(WordcountError::Config(
                "output file name can only be specified when running on a single file".to_string(),
            ));
        }
        if matches!(self.output_name.as_deref(), Some("")) {
            return Err(WordcountError::Config(
                "output file name must not be empty".to_string(),
            ));
        }
        if self.jobs == 0 {
            return Err(WordcountError::Config("--jobs must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Process every input in order.
///
/// `on_outcome` sees each outcome with its 0-based position as soon as it is
/// available (after the whole batch when running on a worker pool). Returns
/// the outcomes in input order.
pub fn run_batch<F>(
    inputs: &[PathBuf],
    config: &BatchConfig,
    mut on_outcome: F,
) -> Result<Vec<BatchOutcome>>
where
    F: FnMut(usize, &BatchOutcome),
{
    config.validate(inputs)?;
    info!(files = inputs.len(), jobs = config.jobs, "starting batch");

    if config.jobs > 1 {
        if let Some(outcomes) = process_parallel(inputs, config)? {
            for (index, outcome) in outcomes.iter().enumerate() {
                on_outcome(index, outcome);
            }
            return Ok(outcomes);
        }
    }

    let mut outcomes = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let outcome = process_one(input, config);
        on_outcome(index, &outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

#[cfg(feature = "parallel")]
fn process_parallel(
    inputs: &[PathBuf],
    config: &BatchConfig,
) -> Result<Option<Vec<BatchOutcome>>> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| {
            WordcountError::Config(format!("cannot start {} workers: {}", config.jobs, e))
        })?;

    let outcomes: Vec<BatchOutcome> = pool.install(|| {
        inputs
            .par_iter()
            .map(|input| process_one(input, config))
            .collect()
    });
    Ok(Some(outcomes))
}

#[cfg(not(feature = "parallel"))]
fn process_parallel(
    _inputs: &[PathBuf],
    config: &BatchConfig,
) -> Result<Option<Vec<BatchOutcome>>> {
    warn!(
        jobs = config.jobs,
        "built without the `parallel` feature, processing files sequentially"
    );
    Ok(None)
}

/// Run the whole pipeline for one input file.
///
/// Never fails: errors end up in the returned outcome.
pub fn process_one(input: &Path, config: &BatchConfig) -> BatchOutcome {
    let span = info_span!("file", input = %input.display());
    let _guard = span.enter();

    let mut output = None;
    let (status, elapsed) = timed(|| match count_file(input, config, &mut output) {
        Ok(scan) => {
            debug!(
                words = scan.total_words,
                unique = scan.unique_words(),
                "file completed"
            );
            OutcomeStatus::Success(scan)
        }
        Err(err) => {
            warn!(code = err.code(), error = %err, "file failed");
            OutcomeStatus::Failure(err)
        }
    });

    BatchOutcome {
        input: input.to_path_buf(),
        output,
        status,
        elapsed,
    }
}

fn count_file(
    input: &Path,
    config: &BatchConfig,
    output: &mut Option<PathBuf>,
) -> Result<ScanResult> {
    let absolute = absolute_input(input).map_err(|source| WordcountError::FileAccess {
        path: input.to_path_buf(),
        source,
    })?;
    let out = resolve_output_path(&absolute, config.output_name.as_deref(), &config.output_dir);
    *output = Some(out.clone());

    debug!(path = %absolute.display(), "reading");
    let content = read_input(&absolute)?;
    if content.lossy_conversion {
        debug!("invalid UTF-8 replaced before counting");
    }

    let (table, total_words) = count_words(&content.text, config.case_sensitive);
    let scan = ScanResult {
        table,
        total_words,
        lines_read: content.line_count(),
    };
    drop(content);

    let capped;
    let counts = if config.top_words > 0 {
        capped = scan.table.top(config.top_words);
        &capped
    } else {
        &scan.table
    };

    let json = render_counts(&scan, counts, config.render).map_err(|source| {
        WordcountError::Serialization {
            path: absolute.clone(),
            source,
        }
    })?;

    debug!(path = %out.display(), bytes = json.len(), "writing");
    write_output(&out, json.as_bytes(), config.atomic)?;

    Ok(scan)
}

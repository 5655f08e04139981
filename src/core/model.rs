//! Counting Model
//!
//! Frequency tables, per-file scan results and the batch outcome records
//! produced by the pipeline.

use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::WordcountError;

/// Word -> occurrence count for a single input file.
///
/// Words are kept in first-seen order internally; serialization emits them
/// alphabetically so repeated runs produce identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl WordFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`
    pub fn increment(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    #[cfg(test)]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Alphabetically ordered view used for serialization
    pub fn sorted(&self) -> BTreeMap<&str, u64> {
        self.iter().collect()
    }

    /// Copy of this table holding only the `n` most frequent words.
    ///
    /// Equal counts keep first-seen order. `n == 0` means no limit.
    pub fn top(&self, n: usize) -> WordFrequencyTable {
        if n == 0 || n >= self.entries.len() {
            return self.clone();
        }

        let mut ranked: Vec<usize> = (0..self.entries.len()).collect();
        // sort_by is stable, so ties stay in first-seen order
        ranked.sort_by(|&a, &b| self.entries[b].1.cmp(&self.entries[a].1));
        ranked.truncate(n);
        ranked.sort_unstable();

        let mut table = WordFrequencyTable::new();
        for slot in ranked {
            let (word, count) = &self.entries[slot];
            table.index.insert(word.clone(), table.entries.len());
            table.entries.push((word.clone(), *count));
        }
        table
    }
}

impl Serialize for WordFrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sorted())
    }
}

/// Result of scanning one input text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub table: WordFrequencyTable,
    /// Every finalized word, repeats included
    pub total_words: u64,
    pub lines_read: usize,
}

impl ScanResult {
    pub fn unique_words(&self) -> usize {
        self.table.len()
    }
}

/// Success or failure of a single input file
#[derive(Debug)]
pub enum OutcomeStatus {
    Success(ScanResult),
    Failure(WordcountError),
}

/// Per-file record produced by the batch pipeline
#[derive(Debug)]
pub struct BatchOutcome {
    /// Path as given on the command line
    pub input: PathBuf,
    /// Resolved output location, if resolution got that far
    pub output: Option<PathBuf>,
    pub status: OutcomeStatus,
    pub elapsed: Duration,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Success(_))
    }

    #[cfg(test)]
    pub fn scan(&self) -> Option<&ScanResult> {
        match &self.status {
            OutcomeStatus::Success(scan) => Some(scan),
            OutcomeStatus::Failure(_) => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&WordcountError> {
        match &self.status {
            OutcomeStatus::Success(_) => None,
            OutcomeStatus::Failure(err) => Some(err),
        }
    }
}

/// Aggregate counts over a whole batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub success: usize,
    pub failure: usize,
    pub total: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let success = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            success,
            failure: outcomes.len() - success,
            total: outcomes.len(),
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failure > 0
    }
}

//! Word tokenizer - Splits text into ASCII words and counts them
//!
//! A word is a run of ASCII letters that may carry apostrophes after its
//! first letter (`don't`, `rock'n'roll`). Everything else is a boundary.
//!
//! Usage:
//! ```rust
//! use wordcount::core::tokenizer::count_words;
//!
//! let (table, total) = count_words("Hello hello HELLO", false);
//! assert_eq!(table.get("hello"), Some(3));
//! assert_eq!(total, 3);
//! ```

use crate::core::model::WordFrequencyTable;

const APOSTROPHE: char = '\'';

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    OutsideWord,
    InsideWord,
}

/// Incremental word counter.
///
/// Feed it any number of text chunks, then call [`WordCounter::finish`] to
/// flush the pending word. Chunks are joined without an implicit boundary.
#[derive(Debug, Default)]
pub struct WordCounter {
    case_sensitive: bool,
    state: ScanState,
    buffer: String,
    table: WordFrequencyTable,
    total: u64,
}

impl WordCounter {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            ..Default::default()
        }
    }

    /// Scan a chunk of text
    pub fn feed(&mut self, text: &str) {
        for c in text.chars() {
            self.push_char(c);
        }
    }

    fn push_char(&mut self, c: char) {
        match c {
            'A'..='Z' => {
                self.buffer.push(if self.case_sensitive {
                    c
                } else {
                    c.to_ascii_lowercase()
                });
                self.state = ScanState::InsideWord;
            }
            'a'..='z' => {
                self.buffer.push(c);
                self.state = ScanState::InsideWord;
            }
            // A leading apostrophe never opens a word
            APOSTROPHE if self.state == ScanState::InsideWord => self.buffer.push(c),
            APOSTROPHE => {}
            _ => self.end_word(),
        }
    }

    fn end_word(&mut self) {
        if self.state == ScanState::OutsideWord {
            return;
        }
        self.table.increment(&self.buffer);
        self.total += 1;
        self.buffer.clear();
        self.state = ScanState::OutsideWord;
    }

    /// Current state of the scanner
    #[cfg(test)]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Flush the trailing word and return the table with the total word count
    pub fn finish(mut self) -> (WordFrequencyTable, u64) {
        self.end_word();
        (self.table, self.total)
    }
}

/// Count the words in `text`.
///
/// Uppercase letters are folded to lowercase unless `case_sensitive` is set.
/// Returns the frequency table and the number of words, repeats included.
pub fn count_words(text: &str, case_sensitive: bool) -> (WordFrequencyTable, u64) {
    let mut counter = WordCounter::new(case_sensitive);
    counter.feed(text);
    counter.finish()
}

//! Renderer module
//!
//! Encodes frequency tables as JSON: either the enriched record
//! `{"Total", "Unique", "Counts"}` or a flat `{word: count}` object.

use serde::Serialize;

use crate::core::model::{ScanResult, WordFrequencyTable};

/// Output file shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Record,
    Flat,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Same spellings as the --format value list
        match s {
            "record" => Ok(OutputFormat::Record),
            "flat" => Ok(OutputFormat::Flat),
            _ => Err(format!("Unknown format: {} (expected record or flat)", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Record => write!(f, "record"),
            OutputFormat::Flat => write!(f, "flat"),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Record,
            pretty: true,
        }
    }
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Enriched output record.
///
/// `Total` and `Unique` describe the whole file even when `Counts` was
/// capped to the top words.
#[derive(Debug, Serialize)]
pub struct CountRecord<'a> {
    #[serde(rename = "Total")]
    pub total: u64,
    #[serde(rename = "Unique")]
    pub unique: usize,
    #[serde(rename = "Counts")]
    pub counts: &'a WordFrequencyTable,
}

/// Encode a scan as JSON, writing `counts` as the table
pub fn render_counts(
    scan: &ScanResult,
    counts: &WordFrequencyTable,
    config: RenderConfig,
) -> serde_json::Result<String> {
    match config.format {
        OutputFormat::Record => {
            let record = CountRecord {
                total: scan.total_words,
                unique: scan.unique_words(),
                counts,
            };
            to_json(&record, config.pretty)
        }
        OutputFormat::Flat => to_json(counts, config.pretty),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::count_words;

    fn scan_of(text: &str) -> ScanResult {
        let (table, total_words) = count_words(text, false);
        ScanResult {
            table,
            total_words,
            lines_read: text.lines().count(),
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("record".parse::<OutputFormat>(), Ok(OutputFormat::Record));
        assert_eq!("flat".parse::<OutputFormat>(), Ok(OutputFormat::Flat));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert!("full".parse::<OutputFormat>().is_err());
        assert!("map".parse::<OutputFormat>().is_err());
        assert!("FLAT".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Flat.to_string(), "flat");
    }

    #[test]
    fn test_render_record_compact() {
        let scan = scan_of("b a b");
        let json = render_counts(
            &scan,
            &scan.table,
            RenderConfig::with_pretty(OutputFormat::Record, false),
        )
        .unwrap();
        assert_eq!(json, r#"{"Total":3,"Unique":2,"Counts":{"a":1,"b":2}}"#);
    }

    #[test]
    fn test_render_flat_compact() {
        let scan = scan_of("b a b");
        let json = render_counts(
            &scan,
            &scan.table,
            RenderConfig::with_pretty(OutputFormat::Flat, false),
        )
        .unwrap();
        assert_eq!(json, r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn test_render_pretty_is_indented() {
        let scan = scan_of("word");
        let json = render_counts(&scan, &scan.table, RenderConfig::default()).unwrap();
        assert_eq!(
            json,
            "{\n  \"Total\": 1,\n  \"Unique\": 1,\n  \"Counts\": {\n    \"word\": 1\n  }\n}"
        );
    }

    #[test]
    fn test_record_totals_describe_whole_file() {
        let scan = scan_of("a b b c c c");
        let top = scan.table.top(1);
        let json = render_counts(
            &scan,
            &top,
            RenderConfig::with_pretty(OutputFormat::Record, false),
        )
        .unwrap();
        assert_eq!(json, r#"{"Total":6,"Unique":3,"Counts":{"c":3}}"#);
    }

    #[test]
    fn test_render_is_deterministic() {
        let text = "the quick brown fox jumps over the lazy dog while the cat sleeps";
        let first = render_counts(&scan_of(text), &scan_of(text).table, RenderConfig::default());
        let second = render_counts(&scan_of(text), &scan_of(text).table, RenderConfig::default());
        assert_eq!(first.unwrap(), second.unwrap());
    }
}

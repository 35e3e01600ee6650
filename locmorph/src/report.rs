//! Run statistics and the progress-reporting seam.
//!
//! The pipeline itself is silent: everything a front end might want to show
//! (per-line update notices, transformer failures, per-file summaries) flows
//! through the [`Reporter`] observer, and everything it might want to
//! persist lands in the serializable [`BatchReport`].

use std::path::Path;

use serde::Serialize;

use crate::error::Error;

/// Per-file line counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    /// Lines read from the input file.
    pub lines: usize,
    /// Lines whose rebuilt form differs from the input line.
    pub changed: usize,
    /// Values whose transformation failed and fell back to the original.
    pub failed: usize,
}

impl LineStats {
    /// Accumulates another file's counters into this one.
    pub fn absorb(&mut self, other: &LineStats) {
        self.lines += other.lines;
        self.changed += other.changed;
        self.failed += other.failed;
    }
}

/// Outcome of one file in a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// File name (identical in the input and output directories).
    pub file: String,
    pub stats: LineStats,
    /// Fatal per-file error, if the file could not be processed.
    pub error: Option<String>,
}

impl FileReport {
    /// Whether the file was fully processed.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a whole batch run, one entry per eligible file in processing
/// order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Number of files fully processed.
    pub fn processed(&self) -> usize {
        self.files.iter().filter(|f| f.succeeded()).count()
    }

    /// Number of files that failed with an I/O error.
    pub fn failed_files(&self) -> usize {
        self.files.len() - self.processed()
    }

    /// Line counters summed over all processed files.
    pub fn totals(&self) -> LineStats {
        let mut totals = LineStats::default();
        for file in &self.files {
            totals.absorb(&file.stats);
        }
        totals
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Observer for pipeline progress. All methods default to no-ops.
///
/// Line numbers are 1-based. `transform_failed` fires once per failed value;
/// `line_updated` fires once per line whose output differs from its input.
pub trait Reporter {
    fn file_started(&mut self, _input: &Path, _index: usize, _total: usize) {}

    fn line_updated(&mut self, _line_number: usize) {}

    fn transform_failed(&mut self, _line_number: usize, _reason: &str) {}

    fn file_finished(&mut self, _input: &Path, _stats: &LineStats) {}

    fn file_failed(&mut self, _input: &Path, _error: &Error) {}
}

/// A reporter that discards everything.
pub struct NullReporter;

impl Reporter for NullReporter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_sum_over_files() {
        let report = BatchReport {
            files: vec![
                FileReport {
                    file: "a_l_english.yml".to_string(),
                    stats: LineStats {
                        lines: 10,
                        changed: 4,
                        failed: 1,
                    },
                    error: None,
                },
                FileReport {
                    file: "b_l_english.yml".to_string(),
                    stats: LineStats {
                        lines: 3,
                        changed: 0,
                        failed: 0,
                    },
                    error: Some("I/O error: permission denied".to_string()),
                },
            ],
        };

        assert_eq!(report.processed(), 1);
        assert_eq!(report.failed_files(), 1);
        let totals = report.totals();
        assert_eq!(totals.lines, 13);
        assert_eq!(totals.changed, 4);
        assert_eq!(totals.failed, 1);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = BatchReport {
            files: vec![FileReport {
                file: "x_l_english.yml".to_string(),
                stats: LineStats::default(),
                error: None,
            }],
        };
        let json = report.to_json_pretty().unwrap();
        assert!(json.contains("x_l_english.yml"));
        assert!(json.contains("\"changed\": 0"));
    }
}

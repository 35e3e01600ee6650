//! Batch orchestration over a directory of localisation files.
//!
//! Discovers eligible files in an input directory, builds one transformer
//! for the whole run, and streams every file into a mirror file in the
//! output directory. Files are independent: an I/O failure in one is
//! recorded and the run continues with the rest.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::processor::StreamProcessor;
use crate::report::{BatchReport, FileReport, LineStats, Reporter};
use crate::transform::ValueTransformer;

/// File extensions recognised as localisation files, matched
/// case-insensitively.
pub const LOCALISATION_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Where a batch run reads from and writes to.
///
/// Threaded explicitly into [`run_batch`]; there are no process-wide
/// defaults at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl BatchOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        BatchOptions {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

/// One input file paired with its destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FileJob {
    /// The file name shared by input and output.
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn is_localisation_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            LOCALISATION_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Enumerates the jobs for one run: immediate children of the input
/// directory with a recognised extension, sorted by file name for
/// reproducible ordering. Subdirectories are not recursed into.
pub fn discover_jobs(options: &BatchOptions) -> Result<Vec<FileJob>, Error> {
    if !options.input_dir.is_dir() {
        return Err(Error::invalid_input(format!(
            "input folder {} does not exist or is not a directory",
            options.input_dir.display()
        )));
    }

    let mut jobs = Vec::new();
    for entry in fs::read_dir(&options.input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_localisation_file(&path) {
            let output = options.output_dir.join(entry.file_name());
            jobs.push(FileJob {
                input: path,
                output,
            });
        }
    }
    jobs.sort_by_key(|job| job.input.file_name().map(|name| name.to_owned()));

    Ok(jobs)
}

/// Runs a whole batch: one transformer instance, every discovered file in
/// sorted order.
///
/// The factory runs once, after discovery, and only if there is at least
/// one file to process; a factory error (missing credential, unreadable
/// prompt) is fatal for the run before any file is touched. Per-file I/O
/// errors land in that file's report entry and processing continues.
/// An empty run is a success with an empty report.
pub fn run_batch<F>(
    options: &BatchOptions,
    make_transformer: F,
    reporter: &mut dyn Reporter,
) -> Result<BatchReport, Error>
where
    F: FnOnce() -> Result<Box<dyn ValueTransformer>, Error>,
{
    let jobs = discover_jobs(options)?;
    fs::create_dir_all(&options.output_dir)?;

    let mut report = BatchReport::default();
    if jobs.is_empty() {
        return Ok(report);
    }

    // One transformer for the whole run, shared read-only across files.
    let transformer = make_transformer()?;
    let processor = StreamProcessor::new(transformer.as_ref());

    let total = jobs.len();
    for (index, job) in jobs.iter().enumerate() {
        reporter.file_started(&job.input, index + 1, total);
        match processor.process_file(&job.input, &job.output, reporter) {
            Ok(stats) => {
                reporter.file_finished(&job.input, &stats);
                report.files.push(FileReport {
                    file: job.file_name(),
                    stats,
                    error: None,
                });
            }
            Err(e) => {
                reporter.file_failed(&job.input, &e);
                report.files.push(FileReport {
                    file: job.file_name(),
                    stats: LineStats::default(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    Ok(report)
}

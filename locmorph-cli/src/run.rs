use std::path::{Path, PathBuf};

use locmorph::{BatchOptions, BatchReport, Error, ValueTransformer, run_batch};
use serde_json::json;

use crate::reporter::ConsoleReporter;
use crate::validation::{validate_input_dir, validate_output_dir};

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report_json: Option<PathBuf>,
    pub quiet: bool,
}

/// Runs one batch with the given transformer factory and prints the run
/// summary.
pub fn execute<F>(options: RunOptions, make_transformer: F) -> Result<(), String>
where
    F: FnOnce() -> Result<Box<dyn ValueTransformer>, Error>,
{
    validate_input_dir(&options.input)?;
    validate_output_dir(&options.output)?;

    let batch_options = BatchOptions::new(&options.input, &options.output);
    let mut reporter = ConsoleReporter::new(options.quiet);
    let report =
        run_batch(&batch_options, make_transformer, &mut reporter).map_err(|e| e.to_string())?;

    if report.files.is_empty() {
        println!(
            "No .yml or .yaml files found in {}",
            options.input.display()
        );
    }

    print_summary(&report);

    if let Some(report_path) = &options.report_json {
        write_report(report_path, &options, &report)?;
        println!("Report JSON written: {}", report_path.display());
    }

    if report.failed_files() > 0 {
        return Err(format!("{} file(s) failed", report.failed_files()));
    }

    Ok(())
}

fn print_summary(report: &BatchReport) {
    let totals = report.totals();
    println!("Files processed: {}", report.processed());
    if report.failed_files() > 0 {
        println!("Files failed: {}", report.failed_files());
    }
    println!("Lines: {}", totals.lines);
    println!("Updated values: {}", totals.changed);
    println!("Failed values: {}", totals.failed);
}

fn write_report(path: &Path, options: &RunOptions, report: &BatchReport) -> Result<(), String> {
    let totals = report.totals();
    let payload = json!({
        "input": options.input,
        "output": options.output,
        "summary": {
            "files": report.files.len(),
            "processed": report.processed(),
            "failed_files": report.failed_files(),
            "lines": totals.lines,
            "changed": totals.changed,
            "failed": totals.failed,
        },
        "files": report.files,
    });

    let text = serde_json::to_string_pretty(&payload)
        .map_err(|e| format!("Failed to serialize report JSON: {}", e))?;
    std::fs::write(path, text)
        .map_err(|e| format!("Failed to write report JSON '{}': {}", path.display(), e))
}

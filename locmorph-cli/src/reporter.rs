use std::path::Path;

use locmorph::{Error, LineStats, Reporter};

/// Prints batch progress to the console as files stream through.
///
/// Update notices go to stdout, failures to stderr. `quiet` drops the
/// per-line notices but keeps file headers and failure warnings.
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        ConsoleReporter { quiet }
    }
}

fn display_name(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

impl Reporter for ConsoleReporter {
    fn file_started(&mut self, input: &Path, index: usize, total: usize) {
        println!("[{}/{}] {}", index, total, display_name(input));
    }

    fn line_updated(&mut self, line_number: usize) {
        if !self.quiet {
            println!("  line {}: updated", line_number);
        }
    }

    fn transform_failed(&mut self, line_number: usize, reason: &str) {
        eprintln!("  line {}: {} (keeping original value)", line_number, reason);
    }

    fn file_finished(&mut self, _input: &Path, stats: &LineStats) {
        if !self.quiet {
            println!(
                "  {} line(s), {} updated, {} failed",
                stats.lines, stats.changed, stats.failed
            );
        }
    }

    fn file_failed(&mut self, input: &Path, error: &Error) {
        eprintln!("Error processing {}: {}", display_name(input), error);
    }
}

//! Streaming per-file transformation.
//!
//! Reads an input file line by line, rewrites the quoted value of each
//! record through a [`ValueTransformer`], and writes every line to the
//! output immediately, in input order, terminators preserved.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::line::{self, ParsedLine};
use crate::report::{LineStats, Reporter};
use crate::transform::{ValueTransformer, apply_resilient};

/// Drives one input stream through the line pipeline.
pub struct StreamProcessor<'a> {
    transformer: &'a dyn ValueTransformer,
}

impl<'a> StreamProcessor<'a> {
    pub fn new(transformer: &'a dyn ValueTransformer) -> Self {
        StreamProcessor { transformer }
    }

    /// Transforms `reader` into `writer`, one line at a time.
    ///
    /// Passthrough lines are written byte-identical. Record values go
    /// through the resilient transform: a failed value keeps its original
    /// text and is reported, never aborting the stream. Only I/O errors
    /// are fatal here.
    pub fn process<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
        reporter: &mut dyn Reporter,
    ) -> Result<LineStats, Error> {
        let mut stats = LineStats::default();
        let mut raw = String::new();

        loop {
            raw.clear();
            if reader.read_line(&mut raw)? == 0 {
                break;
            }
            stats.lines += 1;

            match line::parse(&raw) {
                ParsedLine::Passthrough(untouched) => {
                    writer.write_all(untouched.as_bytes())?;
                }
                ParsedLine::Record(envelope) => {
                    let outcome = apply_resilient(self.transformer, envelope.value);
                    if let Some(reason) = outcome.failure_reason() {
                        stats.failed += 1;
                        reporter.transform_failed(stats.lines, reason);
                    }
                    let rebuilt = envelope.rebuild(outcome.value_or(envelope.value));
                    if rebuilt != raw {
                        stats.changed += 1;
                        reporter.line_updated(stats.lines);
                    }
                    writer.write_all(rebuilt.as_bytes())?;
                }
            }
        }

        writer.flush()?;
        Ok(stats)
    }

    /// Processes `input` into `output`, creating missing parent directories
    /// of the output path.
    ///
    /// An unreadable input file is fatal for this file and surfaces as an
    /// error, unlike per-value transformer failures.
    pub fn process_file(
        &self,
        input: &Path,
        output: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<LineStats, Error> {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }

        let reader = BufReader::new(File::open(input)?);
        let writer = BufWriter::new(File::create(output)?);
        self.process(reader, writer, reporter)
    }
}

#![forbid(unsafe_code)]
//! Batch value rewriter for Paradox-style localisation files.
//!
//! Rewrites the quoted value of every `key: "value"` line in a directory of
//! localisation files through a pluggable [`ValueTransformer`], leaving
//! keys, indentation, comments and quoting byte-identical. Transformer
//! failures degrade per value (the original text is kept and reported),
//! never per file or per run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use locmorph::{BatchOptions, NullReporter, run_batch, transformers::Capitalize};
//!
//! let options = BatchOptions::new("read1", "write1");
//! let report = run_batch(
//!     &options,
//!     || Ok(Box::new(Capitalize)),
//!     &mut NullReporter,
//! )?;
//! println!("{} file(s) processed", report.processed());
//! # Ok::<(), locmorph::Error>(())
//! ```
//!
//! # Pipeline
//!
//! - [`line`]: splits a raw line into prefix, quoted value, and suffix, or
//!   classifies it as passthrough
//! - [`transform`]: the [`ValueTransformer`] contract and its
//!   failure-isolating wrapper
//! - [`processor`]: streams one file through the line pipeline
//! - [`batch`]: drives a whole input directory into an output directory
//! - [`transformers`]: built-in pure strategies (capitalize, strip
//!   diacritics, CJK gating)

pub mod batch;
pub mod error;
pub mod line;
pub mod processor;
pub mod report;
pub mod transform;
pub mod transformers;

// Re-export most used types for easy consumption
pub use crate::{
    batch::{BatchOptions, FileJob, LOCALISATION_EXTENSIONS, discover_jobs, run_batch},
    error::Error,
    line::{Envelope, ParsedLine, parse},
    processor::StreamProcessor,
    report::{BatchReport, FileReport, LineStats, NullReporter, Reporter},
    transform::{TransformOutcome, ValueTransformer, apply_resilient},
};

//! CLI library for testing purposes

pub mod reporter;
pub mod run;
pub mod transformers;
pub mod validation;

pub use reporter::ConsoleReporter;
pub use run::{RunOptions, execute};

//! Capitalizes the first character of a value.

use crate::error::Error;
use crate::transform::ValueTransformer;

/// Uppercases the first character (Unicode-aware), leaving the rest of the
/// value unchanged. Identity for empty input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capitalize;

impl ValueTransformer for Capitalize {
    fn transform(&self, value: &str) -> Result<String, Error> {
        let mut chars = value.chars();
        Ok(match chars.next() {
            // to_uppercase may expand to more than one char (e.g. ß -> SS).
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        })
    }

    fn name(&self) -> &str {
        "capitalize"
    }
}

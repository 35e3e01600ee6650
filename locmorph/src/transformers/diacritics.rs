//! Removes diacritics (accents) from a value.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::Error;
use crate::transform::ValueTransformer;

/// Strips combining marks by Unicode normalization: decompose to NFD, drop
/// the marks, recompose to NFC.
///
/// `"gwóngdūngyàhn"` becomes `"gwongdungyahn"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripDiacritics;

impl ValueTransformer for StripDiacritics {
    fn transform(&self, value: &str) -> Result<String, Error> {
        Ok(value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .nfc()
            .collect())
    }

    fn name(&self) -> &str {
        "strip-diacritics"
    }
}

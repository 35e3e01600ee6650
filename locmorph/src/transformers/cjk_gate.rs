//! Script gating for transformers that only make sense on CJK text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;
use crate::transform::ValueTransformer;

lazy_static! {
    static ref HAN_REGEX: Regex = Regex::new(r"\p{Han}").unwrap();
}

/// Wraps a transformer and invokes it only for values containing Han
/// ideographs; anything else passes through unchanged.
///
/// This is the integration point for transliteration backends: the decision
/// of which values to romanize is made here, not inside the backend.
#[derive(Debug, Clone)]
pub struct CjkGate<T: ValueTransformer> {
    inner: T,
}

impl<T: ValueTransformer> CjkGate<T> {
    pub fn new(inner: T) -> Self {
        CjkGate { inner }
    }
}

/// Whether `text` contains at least one Han ideograph.
pub fn contains_cjk(text: &str) -> bool {
    HAN_REGEX.is_match(text)
}

impl<T: ValueTransformer> ValueTransformer for CjkGate<T> {
    fn transform(&self, value: &str) -> Result<String, Error> {
        if contains_cjk(value) {
            self.inner.transform(value)
        } else {
            Ok(value.to_string())
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

//! Error results that can be returned from the css crates

use crate::location::Location;
use thiserror::Error;

/// Errors produced while turning source text into a token stream. The tree
/// builder itself never fails; anything it cannot place in the tree is
/// dropped, so tokenization is the only error source.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CssError {
    #[error("tokenize error: {0} at {1:?}")]
    Tokenize(String, Location),
}

impl CssError {
    #[must_use]
    pub fn tokenize(message: &str, location: Location) -> Self {
        CssError::Tokenize(message.to_string(), location)
    }
}

/// Result that can be returned which holds either T or a `CssError`
pub type CssResult<T> = Result<T, CssError>;

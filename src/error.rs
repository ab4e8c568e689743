//! Conversion error type.

use thiserror::Error;

/// The candidate string is not a syntactically valid Roman numeral.
///
/// Carries the offending input verbatim. The display text is fixed;
/// existing consumers match on it, including the French wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("la chaine passée en paramètre n'est pas dans un format correct : {input}")]
pub struct FormatError {
    input: String,
}

impl FormatError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The original candidate string, unmodified.
    pub fn input(&self) -> &str {
        &self.input
    }
}

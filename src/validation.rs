//! Format validation for candidate Roman numerals.
//!
//! Two layered checks: a character-class test over {I,V,X,L,C,D,M},
//! then a blacklist of substrings that never occur in a well-formed
//! numeral. The blacklist is needed because the character class alone
//! cannot tell "IIII" from "III".

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FormatError;

static ROMAN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[IVXLCDM]+$").expect("literal character class"));

/// Substrings that never appear in a well-formed numeral: four-in-a-row
/// repetition, repeated subtractive pairs, and subtractions of a symbol
/// from a non-adjacent larger one. Fixed policy rather than a derived
/// grammar; extended when new invalid shapes turn up.
pub const FORBIDDEN_PATTERNS: [&str; 27] = [
    "IC", "IL", "ID", "IM", "XD", "XM", "XCC", "LC", "LD", "LM", "IIII", "IVIV", "VV", "VC", "VX",
    "VM", "XXXXX", "XLXL", "XCXC", "CDCD", "CMCM", "CCCCC", "CMM", "LL", "DD", "DM", "MMMMM",
];

/// Check that `candidate` is a syntactically legal Roman numeral.
///
/// Pure and idempotent. On failure the error carries `candidate`
/// verbatim. The patterns are literal, so containment is checked with
/// `str::contains` rather than regex.
pub fn validate(candidate: &str) -> Result<(), FormatError> {
    if !ROMAN_CHARS.is_match(candidate) {
        return Err(FormatError::new(candidate));
    }
    if FORBIDDEN_PATTERNS
        .iter()
        .any(|pattern| candidate.contains(pattern))
    {
        return Err(FormatError::new(candidate));
    }
    Ok(())
}

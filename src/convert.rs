//! Conversion entry point.

use log::debug;

use crate::decode::decode;
use crate::error::FormatError;
use crate::validation::validate;

/// Convert a Roman numeral string into its Arabic value.
///
/// Validates the candidate first; the decoder is never invoked on a
/// string that failed validation.
pub fn convert(input: &str) -> Result<u32, FormatError> {
    validate(input)?;
    let value = decode(input);
    debug!("decoded {input} as {value}");
    Ok(value)
}

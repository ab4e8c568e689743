//! Roman symbol table.
//!
//! A plain static list of (token, value) pairs, highest value first.
//! Two-letter tokens are the subtractive pairs; every valid numeral
//! decomposes fully into a sequence of these tokens with no remainder.

/// Token/value pairs in descending value order.
pub const SYMBOLS: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Symbols in decoding order: longest token first, then highest value,
/// so a subtractive pair is consumed before its component letters
/// could be matched separately.
pub(crate) fn decode_order() -> impl Iterator<Item = (&'static str, u32)> {
    let pairs = SYMBOLS.iter().copied().filter(|(token, _)| token.len() == 2);
    let singles = SYMBOLS.iter().copied().filter(|(token, _)| token.len() == 1);
    pairs.chain(singles)
}

//! Greedy decoding of validated numerals.

use crate::symbol::decode_order;

/// Decode a numeral that already passed [`validate`](crate::validate).
///
/// Walks the symbol table longest token first and, for each token,
/// removes its first occurrence anywhere in the working string (not
/// necessarily a prefix) while adding the token's value. The
/// validator's restrictions keep position-free removal correct for
/// every accepted input.
pub fn decode(candidate: &str) -> u32 {
    let mut rest = candidate.to_string();
    let mut value = 0;

    for (token, token_value) in decode_order() {
        while let Some(at) = rest.find(token) {
            value += token_value;
            rest.replace_range(at..at + token.len(), "");
        }
    }

    debug_assert!(rest.is_empty(), "unconsumed characters: {rest:?}");
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_symbols() {
        assert_eq!(decode("I"), 1);
        assert_eq!(decode("V"), 5);
        assert_eq!(decode("D"), 500);
        assert_eq!(decode("M"), 1000);
    }

    #[test]
    fn subtractive_pairs_are_matched_before_their_letters() {
        assert_eq!(decode("IV"), 4);
        assert_eq!(decode("IX"), 9);
        assert_eq!(decode("XL"), 40);
        assert_eq!(decode("CM"), 900);
    }

    #[test]
    fn decodes_mixed_numerals() {
        assert_eq!(decode("XIV"), 14);
        assert_eq!(decode("LXXXIX"), 89);
        assert_eq!(decode("DCCCLXXXVIII"), 888);
        assert_eq!(decode("MMMCMXCIX"), 3999);
    }

    #[test]
    fn consumes_the_whole_working_string() {
        // decode debug-asserts that nothing is left over
        for candidate in ["III", "XIV", "CIII", "MMXXI", "MMMCMXCIX"] {
            let _ = decode(candidate);
        }
    }
}

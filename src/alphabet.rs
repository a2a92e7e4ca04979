//! Translation of text into the strictly positive symbols the suffix array
//! builder operates on.

use std::ops::RangeInclusive;

/// Maps each character of `text` to an integer in `[1, alphabet size]` such
/// that integer order matches character order. The value `0` is never
/// produced; it stays reserved for the builder's sentinel.
///
/// # Examples
///
/// ```rust
/// use dc3::encode;
///
/// assert_eq!(encode("cab", 'a'..='z'), [3, 1, 2]);
/// ```
///
/// # Panics
///
/// Panics if a character of `text` falls outside `alphabet`.
pub fn encode(text: &str, alphabet: RangeInclusive<char>) -> Vec<u32> {
    let first = *alphabet.start() as u32;
    text.chars()
        .map(|symbol| {
            assert!(
                alphabet.contains(&symbol),
                "character {symbol:?} is outside the accepted alphabet"
            );
            symbol as u32 - first + 1
        })
        .collect()
}

/// Maps a string over `'a'..='z'` to the symbols `1..=26`.
///
/// # Panics
///
/// Panics if `text` contains anything but lowercase ASCII letters.
pub fn encode_lowercase(text: &str) -> Vec<u32> {
    encode(text, 'a'..='z')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], "")]
    #[case(&[1], "a")]
    #[case(&[26], "z")]
    #[case(&[2, 1, 14, 1, 14, 1], "banana")]
    fn test_encode_lowercase(#[case] expected: &[u32], #[case] text: &str) {
        assert_eq!(expected, encode_lowercase(text).as_slice());
    }

    #[test]
    fn test_encode_preserves_order() {
        assert_eq!(encode("zyxabc", 'a'..='z'), [26, 25, 24, 1, 2, 3]);
    }

    #[test]
    fn test_encode_custom_range() {
        assert_eq!(encode("031", '0'..='9'), [1, 4, 2]);
    }

    #[test]
    #[should_panic(expected = "outside the accepted alphabet")]
    fn test_encode_rejects_out_of_alphabet() {
        encode_lowercase("ban ana");
    }

    #[test]
    #[should_panic(expected = "outside the accepted alphabet")]
    fn test_encode_rejects_uppercase() {
        encode_lowercase("Banana");
    }
}

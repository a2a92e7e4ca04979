//! Distinct substring counting on top of the suffix and LCP arrays.

use num_traits::ToPrimitive;

use crate::lcp::make_lcp_array;
use crate::suffix_array::make_suffix_array;

/// Counts the distinct non-empty substrings of a sequence whose suffix
/// array and LCP array are already known.
///
/// Walking the suffixes in sorted order, each one contributes its length
/// minus the prefix it shares with its predecessor; everything shorter than
/// that shared prefix was already counted. The total equals
/// `n(n + 1)/2 - Σ lcp[i]`.
///
/// # Panics
///
/// Panics if `suffix_array` does not have `length` entries or `lcp` does
/// not have `length - 1`.
pub fn count_from_arrays(length: usize, suffix_array: &[usize], lcp: &[usize]) -> u64 {
    assert_eq!(
        length,
        suffix_array.len(),
        "suffix array length must match the sequence"
    );
    assert_eq!(
        length - 1,
        lcp.len(),
        "LCP array must have one entry per adjacent suffix pair"
    );

    let mut total = 0u64;
    for (order_number, &begin) in suffix_array.iter().enumerate() {
        let overlap = if order_number == 0 {
            0
        } else {
            lcp[order_number - 1]
        };
        total += (length - begin - overlap) as u64;
    }
    total
}

/// Counts the distinct non-empty substrings of `input` by running the full
/// pipeline: suffix array, LCP array, then the counting formula.
///
/// # Examples
///
/// ```rust
/// use dc3::{count_distinct_substrings, encode_lowercase};
///
/// assert_eq!(count_distinct_substrings(&encode_lowercase("banana")), 15);
/// ```
///
/// # Panics
///
/// Panics if `input` is empty or contains a symbol that is not strictly
/// positive.
pub fn count_distinct_substrings<S>(input: &[S]) -> u64
where
    S: Ord + Clone + ToPrimitive,
{
    let suffix_array = make_suffix_array(input);
    let lcp = make_lcp_array(input, &suffix_array);
    count_from_arrays(input.len(), &suffix_array, &lcp)
}

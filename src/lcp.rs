//! Longest-common-prefix arrays, computed with Kasai's amortized linear
//! scan.

use crate::sort::invert;

/// Builds the LCP array for `input` and its suffix array: `lcp[i]` is the
/// length of the longest common prefix of the suffixes starting at
/// `suffix_array[i]` and `suffix_array[i + 1]`.
///
/// Original string positions are visited in order while a running match
/// length is carried over, shrinking by at most one per step; the carry
/// bounds total symbol comparisons to O(n).
///
/// # Examples
///
/// ```rust
/// use dc3::make_lcp_array;
///
/// let lcp = make_lcp_array(b"banana", &[5, 3, 1, 0, 4, 2]);
/// assert_eq!(lcp, [1, 3, 0, 0, 2]);
/// ```
///
/// # Panics
///
/// Panics if `input` is empty or `suffix_array` does not have one entry per
/// input position.
pub fn make_lcp_array<S>(input: &[S], suffix_array: &[usize]) -> Vec<usize>
where
    S: Eq,
{
    let length = input.len();
    assert!(length > 0, "cannot build the LCP array of an empty sequence");
    assert_eq!(
        length,
        suffix_array.len(),
        "suffix array length must match the input"
    );

    let rank = invert(suffix_array);
    let mut lcp = vec![0usize; length - 1];
    let mut matched = 0usize;
    for index in 0..length {
        let order_number = rank[index];
        if order_number == length - 1 {
            // The largest suffix has no successor to share a prefix with.
            continue;
        }
        let successor = suffix_array[order_number + 1];
        // Dropping the first symbol of the previous pair loses at most one
        // matched position, so the match is resumed from there.
        matched = matched.saturating_sub(1);
        while index + matched < length
            && successor + matched < length
            && input[index + matched] == input[successor + matched]
        {
            matched += 1;
        }
        lcp[order_number] = matched;
    }
    lcp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make_suffix_array;
    use rstest::rstest;

    fn brute_force_lcp(first: &[u8], second: &[u8]) -> usize {
        first
            .iter()
            .zip(second)
            .take_while(|(left, right)| left == right)
            .count()
    }

    #[rstest]
    #[case(&[], b"a")]
    #[case(&[1], b"aa")]
    #[case(&[0], b"ab")]
    #[case(&[1, 2, 3], b"aaaa")]
    #[case(&[1, 3, 0, 0, 2], b"banana")]
    #[case(&[1, 1, 4, 0, 0, 1, 0, 2, 1, 3], b"mississippi")]
    fn test_known_arrays(#[case] expected: &[usize], #[case] input: &[u8]) {
        let suffix_array = make_suffix_array(input);
        assert_eq!(expected, make_lcp_array(input, &suffix_array).as_slice());
    }

    #[test]
    fn test_matches_brute_force_on_corpus() {
        let corpus: [&[u8]; 5] = [
            b"tobeornottobe",
            b"walawalawashington",
            b"elephantelephantelephantelephantelephant",
            b"abccbaabccbaabccbaabccbaabccbaabccbaabccba",
            b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        ];
        for input in corpus {
            let suffix_array = make_suffix_array(input);
            let lcp = make_lcp_array(input, &suffix_array);
            assert_eq!(lcp.len(), input.len() - 1);
            for (order_number, &shared) in lcp.iter().enumerate() {
                let first = &input[suffix_array[order_number]..];
                let second = &input[suffix_array[order_number + 1]..];
                assert_eq!(shared, brute_force_lcp(first, second));
            }
        }
    }

    #[test]
    #[should_panic(expected = "empty sequence")]
    fn test_rejects_empty_input() {
        make_lcp_array::<u8>(&[], &[]);
    }

    #[test]
    #[should_panic(expected = "must match the input")]
    fn test_rejects_mismatched_suffix_array() {
        make_lcp_array(b"banana", &[0, 1, 2]);
    }
}

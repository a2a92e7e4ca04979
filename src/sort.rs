//! Stable integer sorting primitives.
//!
//! Both sorts are expressed as *destination permutations*: the returned
//! vector maps every input index to the position that element takes in the
//! sorted order. Destination permutations compose, which is what lets the
//! radix sort run one counting sort per coordinate and stay stable across
//! coordinates.

/// Stable counting sort over non-negative keys bounded by their maximum.
///
/// Returns the destination permutation: `perm[i]` is the position of
/// `keys[i]` in ascending sorted order. Runs in O(n + K) for n keys bounded
/// by K.
pub(crate) fn counting_sort(keys: &[usize]) -> Vec<usize> {
    let Some(&bound) = keys.iter().max() else {
        return Vec::new();
    };
    let mut box_sizes = vec![0usize; bound + 1];
    for &key in keys {
        box_sizes[key] += 1;
    }
    // Exclusive prefix sums give each key's first destination slot.
    let mut positions = vec![0usize; bound + 1];
    let mut indent = 0;
    for (key, &size) in box_sizes.iter().enumerate() {
        positions[key] = indent;
        indent += size;
    }
    let mut destination = vec![0usize; keys.len()];
    for (index, &key) in keys.iter().enumerate() {
        destination[index] = positions[key];
        positions[key] += 1;
    }
    destination
}

/// Lexicographic sort of fixed-width tuples, least-significant coordinate
/// first, one counting sort per coordinate.
///
/// Returns the destination permutation of the tuples. Stability of the
/// counting sort is what makes later (more significant) passes preserve the
/// order established by earlier ones; the passes compose through
/// `composed[i] = step[previous[i]]`.
pub(crate) fn radix_sort<const W: usize>(tuples: &[[usize; W]]) -> Vec<usize> {
    let mut result: Vec<usize> = (0..tuples.len()).collect();
    let mut projection = vec![0usize; tuples.len()];
    for coordinate in (0..W).rev() {
        // Project the coordinate through the order established so far.
        for (index, tuple) in tuples.iter().enumerate() {
            projection[result[index]] = tuple[coordinate];
        }
        let step = counting_sort(&projection);
        for slot in &mut result {
            *slot = step[*slot];
        }
    }
    result
}

/// Inverse permutation: `invert(perm)[perm[i]] == i`.
pub(crate) fn invert(permutation: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; permutation.len()];
    for (index, &target) in permutation.iter().enumerate() {
        inverse[target] = index;
    }
    inverse
}

//! Recursive skew (DC3) suffix array construction.
//!
//! Two thirds of the suffix positions (residues 0 and 1 mod 3, the
//! "sample") are ordered through a recursive call on a reduced sequence of
//! triple colors. The remaining third (residue 2) is radix-sorted against
//! the sample ranks, and the two orders are merged with a comparator that
//! reads at most two symbols before both sides land on known ranks.

use log::debug;
use num_traits::ToPrimitive;

use crate::sort::{invert, radix_sort};

/// Sequences shorter than this are sorted by direct suffix comparison
/// instead of recursing.
const SMALL_SIZE: usize = 20;

/// Builds the suffix array of `input`: a permutation of `0..input.len()`
/// listing every suffix start position in ascending lexicographic order,
/// where a suffix that is a strict prefix of another sorts first.
///
/// Construction is O(n): the sequence shrinks to roughly two thirds per
/// recursion level and every level does linear work in counting sorts.
///
/// # Examples
///
/// ```rust
/// use dc3::make_suffix_array;
///
/// let answer = make_suffix_array(b"banana");
/// assert_eq!(answer, [5, 3, 1, 0, 4, 2]);
/// ```
///
/// # Panics
///
/// Panics if `input` is empty, or if any element is not convertible to a
/// strictly positive `usize`. The value `0` is reserved for the sentinel
/// appended internally, which must stay uniquely minimal.
pub fn make_suffix_array<S>(input: &[S]) -> Vec<usize>
where
    S: Ord + Clone + ToPrimitive,
{
    assert!(!input.is_empty(), "cannot build the suffix array of an empty sequence");
    let symbols: Vec<usize> = input.iter().map(item_to_symbol).collect();
    sort_suffixes(&symbols)
}

fn item_to_symbol<S>(item: &S) -> usize
where
    S: ToPrimitive,
{
    let symbol = item.to_usize().expect("input is not convertible to usize");
    assert!(symbol > 0, "symbol values must be strictly positive");
    symbol
}

fn sort_suffixes(symbols: &[usize]) -> Vec<usize> {
    let length = symbols.len();
    if length < SMALL_SIZE {
        // Slice comparison is exactly the shorter-is-smaller lexicographic
        // order, so small inputs and recursion tails are sorted directly.
        let mut order: Vec<usize> = (0..length).collect();
        order.sort_unstable_by(|&first, &second| symbols[first..].cmp(&symbols[second..]));
        return order;
    }
    debug_assert!(symbols.iter().all(|&symbol| symbol > 0));

    // The sentinel makes triple extraction well defined at the end of the
    // sequence and sorts below every real symbol.
    let mut padded = Vec::with_capacity(length + 1);
    padded.extend_from_slice(symbols);
    padded.push(0);

    let reduced = reduce_to_colors(&padded);
    debug!("level: {} symbols reduced to {}", padded.len(), reduced.len());
    let reduced_suffix_array = sort_suffixes(&reduced);
    let sample_order = sample_positions_from_reduced(&reduced_suffix_array);

    // rank[position] is the 1-based place of a sampled suffix in
    // `sample_order`; 0 covers positions past the end, keeping the sentinel
    // extension minimal under every comparison below.
    let mut rank = vec![0usize; padded.len() + 2];
    for (place, &position) in sample_order.iter().enumerate() {
        rank[position] = place + 1;
    }

    let leftover_order = sort_leftover_suffixes(&padded, &rank);
    let merged = merge_suffix_orders(&padded, &rank, &sample_order, &leftover_order);

    // The sentinel suffix is the minimum; everything after it is the answer
    // for the original, unpadded sequence.
    assert_eq!(
        merged[0],
        padded.len() - 1,
        "sentinel suffix did not sort first"
    );
    merged[1..].to_vec()
}

/// Replaces every 3-symbol triple starting at a sampled position with its
/// color: equal triples share a color and colors increase strictly across
/// distinct triples in sorted order. The colors, taken in (0-block,
/// 1-block) order, form the reduced sequence for the recursive call.
fn reduce_to_colors(padded: &[usize]) -> Vec<usize> {
    let length = padded.len();
    let mut triples = Vec::with_capacity(2 * length / 3 + 2);
    for modulo in [0, 1] {
        let mut begin = modulo;
        while begin < length {
            triples.push([
                symbol_at(padded, begin),
                symbol_at(padded, begin + 1),
                symbol_at(padded, begin + 2),
            ]);
            begin += 3;
        }
    }

    let destination = radix_sort(&triples);
    let by_rank = invert(&destination);
    let mut colors = vec![0usize; triples.len()];
    // Colors start at 1 so the reduced sequence satisfies the builder's
    // strictly-positive precondition.
    let mut color = 1;
    colors[by_rank[0]] = color;
    for place in 1..by_rank.len() {
        if triples[by_rank[place]] != triples[by_rank[place - 1]] {
            color += 1;
        }
        colors[by_rank[place]] = color;
    }
    colors
}

/// Translates the recursive suffix array of the reduced sequence back to
/// positions in the padded sequence. Reduced ranks below the split between
/// the 0-block and the 1-block map to positions `3r`, the rest to
/// `3(r - split) + 1`.
fn sample_positions_from_reduced(reduced_suffix_array: &[usize]) -> Vec<usize> {
    let size = reduced_suffix_array.len();
    let split = size.div_ceil(2);
    reduced_suffix_array
        .iter()
        .map(|&reduced_rank| {
            if reduced_rank < split {
                3 * reduced_rank
            } else {
                3 * (reduced_rank - split) + 1
            }
        })
        .collect()
}

/// Orders the suffixes at positions ≡ 2 (mod 3) by the pair
/// `(symbol, rank of the successor suffix)`; the successor is always a
/// sampled position, so its rank is known.
fn sort_leftover_suffixes(padded: &[usize], rank: &[usize]) -> Vec<usize> {
    let positions: Vec<usize> = (2..padded.len()).step_by(3).collect();
    let pairs: Vec<[usize; 2]> = positions
        .iter()
        .map(|&position| [padded[position], rank[position + 1]])
        .collect();
    let destination = radix_sort(&pairs);
    let mut order = vec![0usize; positions.len()];
    for (index, &position) in positions.iter().enumerate() {
        order[destination[index]] = position;
    }
    order
}

/// Merges the sorted sample order with the sorted leftover order into the
/// full suffix order of the padded sequence.
fn merge_suffix_orders(
    padded: &[usize],
    rank: &[usize],
    sample_order: &[usize],
    leftover_order: &[usize],
) -> Vec<usize> {
    let mut merged = Vec::with_capacity(sample_order.len() + leftover_order.len());
    let mut sample_index = 0;
    let mut leftover_index = 0;
    while sample_index < sample_order.len() && leftover_index < leftover_order.len() {
        let sample = sample_order[sample_index];
        let leftover = leftover_order[leftover_index];
        if sample_suffix_is_smaller(padded, rank, sample, leftover) {
            merged.push(sample);
            sample_index += 1;
        } else {
            merged.push(leftover);
            leftover_index += 1;
        }
    }
    merged.extend_from_slice(&sample_order[sample_index..]);
    merged.extend_from_slice(&leftover_order[leftover_index..]);
    merged
}

/// Compares a sampled suffix against a leftover suffix. A sampled position
/// ≡ 0 (mod 3) needs one symbol before both successors are sampled; a
/// position ≡ 1 needs two. Two distinct suffixes can never compare equal.
fn sample_suffix_is_smaller(
    padded: &[usize],
    rank: &[usize],
    sample: usize,
    leftover: usize,
) -> bool {
    let ordering = if sample % 3 == 0 {
        let sample_key = [symbol_at(padded, sample), rank[sample + 1]];
        let leftover_key = [symbol_at(padded, leftover), rank[leftover + 1]];
        sample_key.cmp(&leftover_key)
    } else {
        let sample_key = [
            symbol_at(padded, sample),
            symbol_at(padded, sample + 1),
            rank[sample + 2],
        ];
        let leftover_key = [
            symbol_at(padded, leftover),
            symbol_at(padded, leftover + 1),
            rank[leftover + 2],
        ];
        sample_key.cmp(&leftover_key)
    };
    assert_ne!(
        ordering,
        std::cmp::Ordering::Equal,
        "distinct suffixes compared equal during merge"
    );
    ordering == std::cmp::Ordering::Less
}

/// Reads past the end of the padded sequence as a run of sentinels.
fn symbol_at(padded: &[usize], position: usize) -> usize {
    padded.get(position).copied().unwrap_or(0)
}

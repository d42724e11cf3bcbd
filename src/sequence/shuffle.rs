//! Sequence shuffling algorithms.
//!
//! - `fisher_yates`: full in-place shuffle, uniform over permutations
//! - `two_random_indexes`: cheap sampler for two distinct positions
//! - `swap_pairs`: bounded partial shuffle ("swap N times")
//! - `shuffled` / `shifted`: copying variants that leave short inputs as-is
//!
//! All draws go through `DeckRng`, so a scripted source pins the result.

use crate::core::DeckRng;
use crate::error::{DeckError, Result};

/// Shuffle `items` in place.
///
/// For `i` from the last index down to 1, draws `j` in `[0, i]` and swaps
/// `i` with `j`. Slices shorter than 2 are left untouched.
pub fn fisher_yates<T, R: DeckRng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index_below(i + 1);
        items.swap(i, j);
    }
}

/// Draw two distinct indexes in `[0, len)`.
///
/// `i` is drawn from `[0, len)`, `j` from `[0, len - 1)` and bumped by one
/// when `j >= i`. The marginal of `i` is uniform; the joint distribution over
/// pairs is not.
///
/// ```
/// use memo_deck::core::ScriptedRng;
/// use memo_deck::sequence::shuffle::two_random_indexes;
///
/// let mut rng = ScriptedRng::new([0.0, 0.999]);
/// assert_eq!(two_random_indexes(3, &mut rng).unwrap(), (0, 2));
/// ```
pub fn two_random_indexes<R: DeckRng + ?Sized>(len: usize, rng: &mut R) -> Result<(usize, usize)> {
    if len < 2 {
        return Err(DeckError::InsufficientLength {
            operation: "random index pair",
            len,
        });
    }
    Ok(random_pair(len, rng))
}

/// Swap `min(amount, len)` random pairs of positions in place.
///
/// A non-positive `amount` performs no swaps. Returns the number of swaps
/// performed.
pub fn swap_pairs<T, R: DeckRng + ?Sized>(items: &mut [T], amount: i64, rng: &mut R) -> Result<usize> {
    let len = items.len();
    if len < 2 {
        return Err(DeckError::InsufficientLength {
            operation: "swap",
            len,
        });
    }
    Ok(swap_n(items, amount, rng))
}

/// Shuffled copy of `items`.
///
/// Inputs shorter than 2 come back unchanged.
#[must_use]
pub fn shuffled<T: Clone, R: DeckRng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    fisher_yates(&mut copy, rng);
    copy
}

/// Copy of `items` with `min(amount, len)` random pairwise swaps applied.
///
/// Inputs shorter than 2 come back unchanged.
#[must_use]
pub fn shifted<T: Clone, R: DeckRng + ?Sized>(items: &[T], amount: i64, rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    if copy.len() >= 2 {
        swap_n(&mut copy, amount, rng);
    }
    copy
}

/// Requires `items.len() >= 2`.
fn swap_n<T, R: DeckRng + ?Sized>(items: &mut [T], amount: i64, rng: &mut R) -> usize {
    let len = items.len();
    let swaps = usize::try_from(amount).map_or(0, |amount| amount.min(len));
    for _ in 0..swaps {
        let (i, j) = random_pair(len, rng);
        items.swap(i, j);
    }
    swaps
}

/// Requires `len >= 2`.
fn random_pair<R: DeckRng + ?Sized>(len: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.index_below(len);
    let mut j = rng.index_below(len - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

//! Match scoring and the perfect-match policy.

use std::collections::HashSet;

use crate::dim::Dimensions;

/// Specificity score of a set of matched dimensional tokens.
///
/// Each token sets the bit `1 << (l - i)` where `i` is the declaration
/// index of its dimension and `l` the number of dimensions, so a match
/// in an earlier dimension strictly outranks any combination of
/// matches in later ones.
pub fn score(tokens: &[String], dims: &Dimensions) -> u64 {
    let l = dims.len() as u64;
    let mut rst = 0u64;

    for token in tokens {
        if let Some(i) = dims.index_of(token) {
            rst |= 1 << (l - i as u64);
        }
    }

    rst
}

/// Keep `tokens` only when it is a perfect match against the active
/// selectors: non-empty, and every token currently enabled. Anything
/// less (or more) specific than the selectors allow is excluded from
/// candidacy, not merely deprioritized.
pub fn perfect_match<'a>(tokens: &'a [String], selectors: &HashSet<String>) -> Option<&'a [String]> {
    if !tokens.is_empty() && tokens.iter().all(|t| selectors.contains(t)) {
        Some(tokens)
    } else {
        None
    }
}

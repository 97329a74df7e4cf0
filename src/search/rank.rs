//! Ranking and diversification of scored candidates.
//!
//! Scoring alone returns the same results for the same ingredients. Instead the
//! best `pool` candidates are kept, shuffled, and only the first `limit` of the
//! shuffled pool survive, which keeps results relevant while varying them.

use super::scoring::ScoredCandidate;
use rand::Rng;

/// Uniform in-place Fisher–Yates shuffle.
///
/// For each index `i` from last down to 1, a `j` is drawn uniformly from `[0, i]`
/// and the two elements are swapped.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Sort by descending score, keep the top `pool`, shuffle them, and keep `limit`.
///
/// The sort is stable, so equal scores keep catalog order when deciding which
/// candidates enter the pool. Short inputs are never padded.
pub fn diversify<'a, R: Rng + ?Sized>(
    mut candidates: Vec<ScoredCandidate<'a>>,
    pool: usize,
    limit: usize,
    rng: &mut R,
) -> Vec<ScoredCandidate<'a>> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(pool);

    if let Some(cutoff) = candidates.last() {
        tracing::trace!(
            "Diversifying {} candidates (pool cutoff score {:.3})",
            candidates.len(),
            cutoff.score
        );
    }

    shuffle(&mut candidates, rng);
    candidates.truncate(limit);
    candidates
}

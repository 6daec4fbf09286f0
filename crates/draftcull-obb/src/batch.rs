//! Many-box overlap queries.
//!
//! Each pair test is independent; with the `parallel` feature the pairs are
//! spread over rayon's thread pool. Results are sorted, so both builds return
//! the same vectors.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bbox::BoundingBox;
use crate::sat::intersects;

/// All index pairs `(i, j)` with `i < j` whose boxes overlap, ascending.
pub fn overlapping_pairs(boxes: &[BoundingBox]) -> Vec<(usize, usize)> {
    let n = boxes.len();
    let test = |i: usize| {
        ((i + 1)..n)
            .filter(|&j| intersects(&boxes[i], &boxes[j]))
            .map(|j| (i, j))
            .collect::<Vec<_>>()
    };

    #[cfg(feature = "parallel")]
    let pairs: Vec<(usize, usize)> = (0..n).into_par_iter().flat_map_iter(test).collect();
    #[cfg(not(feature = "parallel"))]
    let pairs: Vec<(usize, usize)> = (0..n).flat_map(test).collect();

    log::debug!(
        "{} of {} box pairs overlap",
        pairs.len(),
        n * n.saturating_sub(1) / 2
    );
    pairs
}

/// Indices of the boxes in `candidates` that overlap `probe`, ascending.
///
/// With `probe` set to a drawing's view box this is the cull list: every
/// index not returned lies entirely outside the view.
pub fn overlapping_with(probe: &BoundingBox, candidates: &[BoundingBox]) -> Vec<usize> {
    #[cfg(feature = "parallel")]
    let hits: Vec<usize> = candidates
        .par_iter()
        .enumerate()
        .filter(|(_, c)| intersects(probe, c))
        .map(|(i, _)| i)
        .collect();
    #[cfg(not(feature = "parallel"))]
    let hits: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| intersects(probe, c))
        .map(|(i, _)| i)
        .collect();

    log::debug!(
        "{} of {} boxes overlap the probe",
        hits.len(),
        candidates.len()
    );
    hits
}

//! Per-element rank estimates derived from a dominance matrix.

use super::dominance::DominanceMatrix;
use crate::core::ElementId;
use serde::Serialize;

/// Rank estimate of one element under one order.
///
/// `score` is the row-sum of the element's dominance row: how many
/// elements it may precede or tie. `position` is `N - score`, the number
/// of elements strictly ahead of it; lower positions rank earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RankEstimate {
    pub score: usize,
    pub position: usize,
}

pub fn estimate(matrix: &DominanceMatrix, id: ElementId) -> RankEstimate {
    let score = matrix.row_sum(id);
    RankEstimate {
        score,
        position: matrix.size() - score,
    }
}

/// Estimates for every element, indexed by `id - 1`
pub fn estimate_all(matrix: &DominanceMatrix) -> Vec<RankEstimate> {
    (1..=matrix.size()).map(|id| estimate(matrix, id)).collect()
}

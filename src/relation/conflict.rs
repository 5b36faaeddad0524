//! Conflict core: the relation two weak orders agree on.
//!
//! `F[i][j] = (D1[i][j] ∧ D2[i][j]) ∨ (D1[j][i] ∧ D2[j][i])`. A true entry
//! only certifies that the orders do not contradict each other on the
//! pair; it carries no direction. A false entry is a contradiction: one
//! order puts `i` strictly first and the other puts `j` strictly first.

use super::dominance::DominanceMatrix;
use super::matrix::BoolMatrix;
use crate::core::{ElementId, FusionError, Result};
use serde::Serialize;
use tracing::debug;

/// Symmetric agreement matrix of two dominance relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FusedMatrix {
    cells: BoolMatrix,
}

impl FusedMatrix {
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Whether the two orders are free of direct contradiction on `(i, j)`
    pub fn agrees(&self, i: ElementId, j: ElementId) -> bool {
        self.cells.get(i - 1, j - 1)
    }

    pub fn is_contradiction(&self, i: ElementId, j: ElementId) -> bool {
        !self.agrees(i, j)
    }

    pub fn is_symmetric(&self) -> bool {
        self.cells.is_symmetric()
    }

    pub fn is_all_true(&self) -> bool {
        self.cells.all()
    }

    pub fn as_matrix(&self) -> &BoolMatrix {
        &self.cells
    }

    pub fn to_binary_rows(&self) -> Vec<Vec<u8>> {
        self.cells.to_binary_rows()
    }
}

/// Fused matrix together with the two source relations it came from.
///
/// The sources are retained because the consensus step scores groups
/// against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictCore {
    fused: FusedMatrix,
    left: DominanceMatrix,
    right: DominanceMatrix,
}

impl ConflictCore {
    pub fn fused(&self) -> &FusedMatrix {
        &self.fused
    }

    pub fn left(&self) -> &DominanceMatrix {
        &self.left
    }

    pub fn right(&self) -> &DominanceMatrix {
        &self.right
    }

    pub fn size(&self) -> usize {
        self.fused.size()
    }

    /// Unordered pairs `(i, j)`, `i < j`, on which the orders contradict
    pub fn contradictions(&self) -> Vec<(ElementId, ElementId)> {
        self.upper_pairs()
            .filter(|&(i, j)| self.fused.is_contradiction(i, j))
            .collect()
    }

    /// Unordered pairs on which the two source relations differ at all.
    ///
    /// Includes tie-versus-strict differences, which the fused matrix
    /// does not record, as well as every contradiction.
    pub fn disagreements(&self) -> Vec<(ElementId, ElementId)> {
        self.upper_pairs()
            .filter(|&(i, j)| {
                self.left.may_precede(i, j) != self.right.may_precede(i, j)
                    || self.left.may_precede(j, i) != self.right.may_precede(j, i)
            })
            .collect()
    }

    pub fn into_parts(self) -> (FusedMatrix, DominanceMatrix, DominanceMatrix) {
        (self.fused, self.left, self.right)
    }

    fn upper_pairs(&self) -> impl Iterator<Item = (ElementId, ElementId)> + '_ {
        let n = self.size();
        (1..=n).flat_map(move |i| (i + 1..=n).map(move |j| (i, j)))
    }
}

/// Fuse two dominance matrices into their conflict core.
///
/// Fails with [`FusionError::DimensionMismatch`] when the universes differ;
/// matrices are never truncated or padded.
pub fn extract_conflict_core(left: DominanceMatrix, right: DominanceMatrix) -> Result<ConflictCore> {
    if left.size() != right.size() {
        return Err(FusionError::DimensionMismatch {
            left: left.size(),
            right: right.size(),
        });
    }

    let (l, r) = (left.as_matrix(), right.as_matrix());
    let cells = BoolMatrix::from_fn(left.size(), |i, j| {
        (l.get(i, j) && r.get(i, j)) || (l.get(j, i) && r.get(j, i))
    });
    let fused = FusedMatrix { cells };

    debug_assert!(fused.is_symmetric());
    debug!(size = fused.size(), "extracted conflict core");

    Ok(ConflictCore { fused, left, right })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::build_dominance_matrix;
    use pretty_assertions::assert_eq;

    fn dominance(order: &str) -> DominanceMatrix {
        build_dominance_matrix(&order.parse().unwrap())
    }

    fn core(a: &str, b: &str) -> ConflictCore {
        extract_conflict_core(dominance(a), dominance(b)).unwrap()
    }

    #[test]
    fn test_self_fusion_is_all_true() {
        let d = dominance("[1, [2, 3], 4]");
        let core = extract_conflict_core(d.clone(), d).unwrap();
        assert!(core.fused().is_all_true());
        assert!(core.contradictions().is_empty());
        assert!(core.disagreements().is_empty());
    }

    #[test]
    fn test_reversed_orders_contradict_everywhere() {
        let core = core("[1, 2, 3]", "[3, 2, 1]");
        assert_eq!(core.contradictions(), vec![(1, 2), (1, 3), (2, 3)]);
        assert_eq!(
            core.fused().to_binary_rows(),
            vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
        );
    }

    #[test]
    fn test_tie_against_strict_is_not_a_contradiction() {
        let core = core("[[1, 2], 3]", "[1, [2, 3]]");
        assert!(core.fused().is_all_true());
        assert!(core.contradictions().is_empty());
        assert_eq!(core.disagreements(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_classic_contradiction_kernel() {
        let core = core(
            "[1, [2, 3], 4, [5, 6, 7], 8, 9, 10]",
            "[[1, 2], [3, 4, 5], 6, 7, 9, [8, 10]]",
        );
        assert_eq!(core.contradictions(), vec![(8, 9)]);
        assert!(core.fused().is_symmetric());
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = extract_conflict_core(dominance("[1, 2, 3, 4]"), dominance("[1, 2, 3, 4, 5]"))
            .unwrap_err();
        assert_eq!(err, FusionError::DimensionMismatch { left: 4, right: 5 });
    }

    #[test]
    fn test_sources_are_retained() {
        let left = dominance("[2, 1]");
        let right = dominance("[1, 2]");
        let core = extract_conflict_core(left.clone(), right.clone()).unwrap();
        assert_eq!(core.left(), &left);
        assert_eq!(core.right(), &right);
    }
}

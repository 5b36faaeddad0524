//! Dominance matrices built from a single weak order.
//!
//! `D[i][j]` is true when element `i` may precede or tie element `j`, i.e.
//! `j` does not strictly precede `i`. The matrix is reflexive, tied pairs
//! are true in both directions, and a strictly ordered pair is false only
//! in the direction that would put the later element first.

use super::matrix::BoolMatrix;
use crate::core::{ElementId, OrderEntry, Result, WeakOrder};
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DominanceMatrix {
    cells: BoolMatrix,
}

impl DominanceMatrix {
    /// Build the dominance relation of an already validated order.
    pub fn from_order(order: &WeakOrder) -> Self {
        build_dominance_matrix(order)
    }

    /// Validate raw entries and build their dominance relation.
    pub fn try_from_entries(entries: Vec<OrderEntry>) -> Result<Self> {
        let order = WeakOrder::try_from(entries)?;
        Ok(build_dominance_matrix(&order))
    }

    /// Universe size `N`
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Whether `i` may precede or tie `j` (1-based ids)
    pub fn may_precede(&self, i: ElementId, j: ElementId) -> bool {
        self.cells.get(i - 1, j - 1)
    }

    pub fn strictly_precedes(&self, i: ElementId, j: ElementId) -> bool {
        self.may_precede(i, j) && !self.may_precede(j, i)
    }

    pub fn is_tied(&self, i: ElementId, j: ElementId) -> bool {
        self.may_precede(i, j) && self.may_precede(j, i)
    }

    /// Count of elements `i` may precede or tie, itself included
    pub fn row_sum(&self, i: ElementId) -> usize {
        self.cells.row_sum(i - 1)
    }

    pub fn as_matrix(&self) -> &BoolMatrix {
        &self.cells
    }

    pub fn to_binary_rows(&self) -> Vec<Vec<u8>> {
        self.cells.to_binary_rows()
    }
}

/// Build the dominance matrix of `order`.
///
/// Starts from an all-true matrix and walks the groups in declared order,
/// clearing `D[c][p]` for every element `c` of the current group and every
/// element `p` of an earlier group. Worst case `O(N²)` for all-singleton
/// orders.
pub fn build_dominance_matrix(order: &WeakOrder) -> DominanceMatrix {
    let mut cells = BoolMatrix::filled(order.len(), true);
    let mut processed: Vec<ElementId> = Vec::with_capacity(order.len());

    for group in order {
        for &current in group.members() {
            for &previous in &processed {
                cells.set(current - 1, previous - 1, false);
            }
        }
        processed.extend_from_slice(group.members());
    }

    trace!(size = order.len(), groups = order.group_count(), "built dominance matrix");
    DominanceMatrix { cells }
}

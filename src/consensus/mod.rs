//! Consensus reconstruction from a conflict core.
//!
//! The pipeline runs in four steps:
//!
//! 1. **Grouping** ([`grouping`]): contradicted pairs are tied together.
//! 2. **Scoring** ([`ordering::score_groups`]): each group takes the rank
//!    estimates of its smallest member under both source orders.
//! 3. **Ordering** ([`ordering::order_groups`]): stable insertion by rank
//!    position, merging groups with identical positions into one tier.
//! 4. **Checking** ([`ordering::verify_acyclic`]): a layout in which a later
//!    tier should precede an earlier one is rejected.
//!
//! ```rust
//! use rankfuse::{fuse, WeakOrder};
//!
//! let a: WeakOrder = "[1, [2, 3], 4, [5, 6, 7], 8, 9, 10]".parse().unwrap();
//! let b: WeakOrder = "[[1, 2], [3, 4, 5], 6, 7, 9, [8, 10]]".parse().unwrap();
//! let consensus = fuse(&a, &b).unwrap();
//! assert_eq!(consensus.to_string(), "[1,2,3,4,5,6,7,[8,9],10]");
//! ```

pub mod grouping;
pub mod ordering;

pub use grouping::{group_elements, GroupingStrategy};
pub use ordering::{order_groups, score_groups, verify_acyclic, ScoredGroup};

use crate::core::{FusionError, Result, WeakOrder};
use crate::relation::{build_dominance_matrix, extract_conflict_core, ConflictCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

/// Knobs for a fusion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FusionOptions {
    pub grouping: GroupingStrategy,
    /// Build the two dominance matrices on the rayon pool
    pub parallel: bool,
}

impl FusionOptions {
    pub fn with_grouping(mut self, grouping: GroupingStrategy) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Everything a fusion run produced
#[derive(Debug, Clone, Serialize)]
pub struct FusionReport {
    pub consensus: WeakOrder,
    pub tiers: Vec<ScoredGroup>,
    pub core: ConflictCore,
}

/// Consensus plus the tiers it was laid out from.
pub fn recluster_tiers(
    core: &ConflictCore,
    strategy: GroupingStrategy,
) -> Result<(WeakOrder, Vec<ScoredGroup>)> {
    let groups = group_elements(core.fused(), strategy);
    debug!(groups = groups.len(), ?strategy, "grouped elements");

    let tiers = order_groups(score_groups(groups, core.left(), core.right()));
    verify_acyclic(&tiers)?;

    let consensus = WeakOrder::from_groups(tiers.iter().map(|t| t.members.iter().copied()))?;
    debug!(tiers = consensus.group_count(), "reconstructed consensus");
    Ok((consensus, tiers))
}

/// Reconstruct the consensus weak order from a conflict core.
pub fn recluster(core: &ConflictCore, strategy: GroupingStrategy) -> Result<WeakOrder> {
    recluster_tiers(core, strategy).map(|(consensus, _)| consensus)
}

/// Run the whole pipeline on two validated orders.
pub fn fuse_orders(left: &WeakOrder, right: &WeakOrder, options: &FusionOptions) -> Result<FusionReport> {
    let _span = debug_span!("fuse_orders", n = left.len()).entered();

    if left.len() != right.len() {
        return Err(FusionError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let (left_matrix, right_matrix) = if options.parallel {
        rayon::join(
            || build_dominance_matrix(left),
            || build_dominance_matrix(right),
        )
    } else {
        (build_dominance_matrix(left), build_dominance_matrix(right))
    };

    let core = extract_conflict_core(left_matrix, right_matrix)?;
    let (consensus, tiers) = recluster_tiers(&core, options.grouping)?;

    Ok(FusionReport {
        consensus,
        tiers,
        core,
    })
}

/// Fuse with default options and return only the consensus.
pub fn fuse(left: &WeakOrder, right: &WeakOrder) -> Result<WeakOrder> {
    fuse_orders(left, right, &FusionOptions::default()).map(|report| report.consensus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn order(s: &str) -> WeakOrder {
        s.parse().unwrap()
    }

    #[test]
    fn test_identical_orders_round_trip() {
        let w = order("[1, [2, 3], 4]");
        assert_eq!(fuse(&w, &w).unwrap(), w);
    }

    #[test]
    fn test_conflicting_tie_structure() {
        let consensus = fuse(&order("[[1, 2], 3]"), &order("[1, [2, 3]]")).unwrap();
        assert_eq!(consensus.to_string(), "[1,2,3]");
    }

    #[test]
    fn test_dimension_mismatch_detected_before_building() {
        let err = fuse(&order("[1, 2, 3, 4]"), &order("[1, 2, 3, 4, 5]")).unwrap_err();
        assert_eq!(err, FusionError::DimensionMismatch { left: 4, right: 5 });
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let a = order("[1, [2, 3], 4, [5, 6, 7], 8, 9, 10]");
        let b = order("[[1, 2], [3, 4, 5], 6, 7, 9, [8, 10]]");
        let sequential = fuse_orders(&a, &b, &FusionOptions::default()).unwrap();
        let parallel = fuse_orders(&a, &b, &FusionOptions::default().with_parallel(true)).unwrap();
        assert_eq!(sequential.consensus, parallel.consensus);
        assert_eq!(sequential.core, parallel.core);
    }

    #[test]
    fn test_report_exposes_tiers_and_core() {
        let report = fuse_orders(
            &order("[1, [2, 3], 4, [5, 6, 7], 8, 9, 10]"),
            &order("[[1, 2], [3, 4, 5], 6, 7, 9, [8, 10]]"),
            &FusionOptions::default(),
        )
        .unwrap();
        assert_eq!(report.core.contradictions(), vec![(8, 9)]);
        assert_eq!(report.tiers.len(), 9);
        assert_eq!(report.tiers[7].members, vec![8, 9]);
        assert_eq!(report.tiers[7].positions(), (7, 8));
    }

    #[test]
    fn test_reversed_orders_tie_everything() {
        let consensus = fuse(&order("[1, 2, 3]"), &order("[3, 2, 1]")).unwrap();
        assert_eq!(consensus.to_string(), "[[1,2,3]]");
    }

    #[test]
    fn test_greedy_and_closure_agree_after_merging() {
        let a = order("[[1, 3], 2]");
        let b = order("[2, [1, 3]]");
        for strategy in [GroupingStrategy::Closure, GroupingStrategy::Greedy] {
            let options = FusionOptions::default().with_grouping(strategy);
            let report = fuse_orders(&a, &b, &options).unwrap();
            assert_eq!(report.consensus.to_string(), "[[1,2,3]]", "{strategy:?}");
        }
    }
}

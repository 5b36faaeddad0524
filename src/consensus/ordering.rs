//! Steps B–D: score groups, lay them out, and check the layout.

use crate::core::{ElementId, FusionError, Result};
use crate::relation::{estimate, DominanceMatrix, RankEstimate};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use tracing::trace;

/// A consensus group with its representative's estimates under both orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredGroup {
    pub members: Vec<ElementId>,
    pub left: RankEstimate,
    pub right: RankEstimate,
}

impl ScoredGroup {
    /// Rank positions under the left and right orders
    pub fn positions(&self) -> (usize, usize) {
        (self.left.position, self.right.position)
    }

    /// Whether either position is strictly ahead of `other`'s
    fn placed_before(&self, other: &ScoredGroup) -> bool {
        self.left.position < other.left.position || self.right.position < other.right.position
    }

    /// Strict Pareto precedence: no worse under both orders, better under one
    fn must_precede(&self, other: &ScoredGroup) -> bool {
        let (l, r) = self.positions();
        let (ol, or) = other.positions();
        l <= ol && r <= or && (l < ol || r < or)
    }
}

/// Step B: score each group through its smallest member.
pub fn score_groups(
    groups: Vec<Vec<ElementId>>,
    left: &DominanceMatrix,
    right: &DominanceMatrix,
) -> Vec<ScoredGroup> {
    groups
        .into_iter()
        .map(|members| {
            let representative = members[0];
            ScoredGroup {
                left: estimate(left, representative),
                right: estimate(right, representative),
                members,
            }
        })
        .collect()
}

/// Step C: stable insertion of groups into tiers.
///
/// Each incoming group is compared with placed tiers front to back. Equal
/// positions merge into that tier; a strictly lower position on either
/// side inserts before it; otherwise the scan continues and the group is
/// appended at the end.
pub fn order_groups(groups: Vec<ScoredGroup>) -> Vec<ScoredGroup> {
    let mut tiers: Vec<ScoredGroup> = Vec::with_capacity(groups.len());

    'incoming: for group in groups {
        for index in 0..tiers.len() {
            let placed = &mut tiers[index];
            if placed.positions() == group.positions() {
                trace!(members = ?group.members, tier = index, "merged into tier");
                placed.members.extend(group.members);
                placed.members.sort_unstable();
                continue 'incoming;
            }
            if group.placed_before(placed) {
                trace!(members = ?group.members, tier = index, "inserted before tier");
                tiers.insert(index, group);
                continue 'incoming;
            }
        }
        trace!(members = ?group.members, "appended");
        tiers.push(group);
    }

    tiers
}

/// Step D: reject layouts where a later tier should precede an earlier one.
///
/// Builds a graph with an edge for each consecutive pair of tiers and an
/// edge for every strict Pareto precedence; any cycle is an inconsistent
/// layout.
pub fn verify_acyclic(tiers: &[ScoredGroup]) -> Result<()> {
    let mut graph = DiGraph::<usize, ()>::new();
    let nodes: Vec<NodeIndex> = (0..tiers.len()).map(|i| graph.add_node(i)).collect();

    for pair in nodes.windows(2) {
        graph.add_edge(pair[0], pair[1], ());
    }
    for (a, first) in tiers.iter().enumerate() {
        for (b, second) in tiers.iter().enumerate() {
            if a != b && first.must_precede(second) {
                graph.add_edge(nodes[a], nodes[b], ());
            }
        }
    }

    if !is_cyclic_directed(&graph) {
        return Ok(());
    }

    let (earlier, later) = (0..tiers.len())
        .flat_map(|a| (a + 1..tiers.len()).map(move |b| (a, b)))
        .find(|&(a, b)| tiers[b].must_precede(&tiers[a]))
        .unwrap_or((0, 0));
    Err(FusionError::invalid(format!(
        "consensus ordering is cyclic: tier {:?} at position {} must precede tier {:?} at position {}",
        tiers[later].members,
        later + 1,
        tiers[earlier].members,
        earlier + 1
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(members: &[ElementId], left: usize, right: usize) -> ScoredGroup {
        ScoredGroup {
            members: members.to_vec(),
            left: RankEstimate {
                score: 0,
                position: left,
            },
            right: RankEstimate {
                score: 0,
                position: right,
            },
        }
    }

    fn members(tiers: &[ScoredGroup]) -> Vec<Vec<ElementId>> {
        tiers.iter().map(|t| t.members.clone()).collect()
    }

    #[test]
    fn test_equal_positions_merge() {
        let tiers = order_groups(vec![
            group(&[1], 0, 0),
            group(&[2], 1, 1),
            group(&[3], 1, 1),
            group(&[4], 3, 3),
        ]);
        assert_eq!(members(&tiers), vec![vec![1], vec![2, 3], vec![4]]);
    }

    #[test]
    fn test_lower_position_inserts_before() {
        let tiers = order_groups(vec![group(&[1], 2, 2), group(&[2], 0, 0), group(&[3], 1, 1)]);
        assert_eq!(members(&tiers), vec![vec![2], vec![3], vec![1]]);
    }

    #[test]
    fn test_either_side_lower_is_enough_to_insert() {
        let tiers = order_groups(vec![group(&[1], 0, 5), group(&[2], 3, 1)]);
        assert_eq!(members(&tiers), vec![vec![2], vec![1]]);
    }

    #[test]
    fn test_ties_in_comparison_keep_discovery_order() {
        let tiers = order_groups(vec![group(&[1], 0, 0), group(&[2], 0, 1), group(&[3], 2, 1)]);
        assert_eq!(members(&tiers), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_consistent_layout_passes() {
        let tiers = vec![group(&[1], 0, 0), group(&[2], 1, 1), group(&[3], 2, 2)];
        assert!(verify_acyclic(&tiers).is_ok());
        assert!(verify_acyclic(&[]).is_ok());
    }

    #[test]
    fn test_incomparable_tiers_pass_in_any_order() {
        let tiers = vec![group(&[1], 0, 5), group(&[2], 3, 1)];
        assert!(verify_acyclic(&tiers).is_ok());
    }

    #[test]
    fn test_backwards_layout_is_cyclic() {
        let tiers = vec![group(&[1], 2, 2), group(&[2], 1, 1)];
        let err = verify_acyclic(&tiers).unwrap_err();
        assert!(
            matches!(err, FusionError::InvalidInput(ref m) if m.contains("cyclic")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_insertion_can_produce_cycle_that_check_catches() {
        // (1,1) lands behind (0,5), then (2,2) jumps ahead of both
        let tiers = order_groups(vec![group(&[1], 1, 1), group(&[2], 0, 5), group(&[3], 2, 2)]);
        assert_eq!(members(&tiers), vec![vec![3], vec![2], vec![1]]);
        assert!(verify_acyclic(&tiers).is_err());
    }
}

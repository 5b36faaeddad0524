//! Step A: partition the universe into consensus groups.
//!
//! Two elements belong together when the fused relation records a
//! contradiction between them: the source orders rank the pair in
//! opposite directions, so the consensus cannot separate them and ties
//! them instead.

use crate::core::ElementId;
use crate::relation::FusedMatrix;
use clap::ValueEnum;
use petgraph::unionfind::UnionFind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GroupingStrategy {
    /// Equivalence closure over contradicted pairs (union-find)
    #[default]
    Closure,
    /// Legacy left-to-right scan: each group only admits elements that
    /// contradict its opening element
    Greedy,
}

/// Group every element of `1..=N`.
///
/// Groups are returned in order of their smallest member, members
/// ascending. Every element lands in exactly one group.
pub fn group_elements(fused: &FusedMatrix, strategy: GroupingStrategy) -> Vec<Vec<ElementId>> {
    match strategy {
        GroupingStrategy::Closure => closure_groups(fused),
        GroupingStrategy::Greedy => greedy_groups(fused),
    }
}

fn closure_groups(fused: &FusedMatrix) -> Vec<Vec<ElementId>> {
    let n = fused.size();
    let mut sets = UnionFind::<usize>::new(n);

    for i in 0..n {
        for j in i + 1..n {
            if fused.is_contradiction(i + 1, j + 1) {
                sets.union(i, j);
            }
        }
    }

    let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
    let mut groups: Vec<Vec<ElementId>> = Vec::new();
    for i in 0..n {
        let root = sets.find(i);
        match slot_of_root[root] {
            Some(slot) => groups[slot].push(i + 1),
            None => {
                slot_of_root[root] = Some(groups.len());
                groups.push(vec![i + 1]);
            }
        }
    }
    groups
}

fn greedy_groups(fused: &FusedMatrix) -> Vec<Vec<ElementId>> {
    let n = fused.size();
    let mut assigned = vec![false; n];
    let mut groups = Vec::new();

    for opener in 1..=n {
        if assigned[opener - 1] {
            continue;
        }
        assigned[opener - 1] = true;
        let mut group = vec![opener];

        for candidate in opener + 1..=n {
            if !assigned[candidate - 1] && fused.is_contradiction(opener, candidate) {
                assigned[candidate - 1] = true;
                group.push(candidate);
            }
        }
        groups.push(group);
    }
    groups
}

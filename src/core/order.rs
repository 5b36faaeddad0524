//! Weak orders: rankings that allow tied groups.
//!
//! The serialized form is a JSON array whose entries are either a bare
//! identifier or a nested array of identifiers forming a tie group:
//!
//! ```rust
//! use rankfuse::WeakOrder;
//!
//! let order: WeakOrder = "[1, [2, 3], 4]".parse().unwrap();
//! assert_eq!(order.len(), 4);
//! assert_eq!(order.group_count(), 3);
//! assert_eq!(order.to_string(), "[1,[2,3],4]");
//! ```

use super::errors::{FusionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 1-based element identifier
pub type ElementId = usize;

/// One entry of a serialized weak order.
///
/// Identifiers are read as signed integers so that zero and negative
/// values surface as validation errors instead of decode failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderEntry {
    Single(i64),
    Group(Vec<i64>),
}

impl OrderEntry {
    fn ids(&self) -> &[i64] {
        match self {
            Self::Single(id) => std::slice::from_ref(id),
            Self::Group(ids) => ids,
        }
    }
}

/// A non-empty set of mutually indifferent elements, kept sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TieGroup {
    members: Vec<ElementId>,
}

impl TieGroup {
    fn from_sorted(members: Vec<ElementId>) -> Self {
        debug_assert!(!members.is_empty());
        debug_assert!(members.windows(2).all(|w| w[0] < w[1]));
        Self { members }
    }

    pub fn members(&self) -> &[ElementId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.members.binary_search(&id).is_ok()
    }

    /// Smallest member, used wherever a group needs a single stand-in
    pub fn representative(&self) -> ElementId {
        self.members[0]
    }

    fn to_entry(&self) -> OrderEntry {
        match self.members.as_slice() {
            [single] => OrderEntry::Single(*single as i64),
            members => OrderEntry::Group(members.iter().map(|&id| id as i64).collect()),
        }
    }
}

/// An ordered partition of `1..=N` into tie groups.
///
/// Earlier groups strictly precede later ones. Construction validates the
/// partition, so every `WeakOrder` in circulation is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<OrderEntry>", into = "Vec<OrderEntry>")]
pub struct WeakOrder {
    groups: Vec<TieGroup>,
    len: usize,
}

impl WeakOrder {
    /// Build from plain groups of identifiers.
    pub fn from_groups<I, G>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = ElementId>,
    {
        let entries = groups
            .into_iter()
            .map(|group| OrderEntry::Group(group.into_iter().map(|id| id as i64).collect()))
            .collect::<Vec<_>>();
        Self::try_from(entries)
    }

    /// Number of elements `N` in the universe
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a validated order; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn groups(&self) -> &[TieGroup] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TieGroup> {
        self.groups.iter()
    }

    /// Group index of every element, indexed by `id - 1`
    pub fn tiers(&self) -> Vec<usize> {
        let mut tiers = vec![0; self.len];
        for (tier, group) in self.groups.iter().enumerate() {
            for &id in group.members() {
                tiers[id - 1] = tier;
            }
        }
        tiers
    }

    /// Serialized entries, with size-one groups emitted as bare identifiers
    pub fn to_entries(&self) -> Vec<OrderEntry> {
        self.groups.iter().map(TieGroup::to_entry).collect()
    }
}

impl TryFrom<Vec<OrderEntry>> for WeakOrder {
    type Error = FusionError;

    fn try_from(entries: Vec<OrderEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(FusionError::EmptyInput);
        }

        if let Some(position) = entries.iter().position(|e| e.ids().is_empty()) {
            return Err(FusionError::invalid(format!(
                "tie group at position {} is empty",
                position + 1
            )));
        }

        let len: usize = entries.iter().map(|e| e.ids().len()).sum();
        let mut seen = vec![false; len];

        let mut groups = Vec::with_capacity(entries.len());
        for entry in &entries {
            let mut members = Vec::with_capacity(entry.ids().len());
            for &raw in entry.ids() {
                if raw < 1 || raw as u64 > len as u64 {
                    return Err(FusionError::invalid(format!(
                        "identifier {raw} is outside 1..={len}"
                    )));
                }
                let id = raw as ElementId;
                if std::mem::replace(&mut seen[id - 1], true) {
                    return Err(FusionError::invalid(format!(
                        "identifier {id} appears more than once"
                    )));
                }
                members.push(id);
            }
            members.sort_unstable();
            groups.push(TieGroup::from_sorted(members));
        }

        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(FusionError::invalid(format!(
                "identifier {} is missing from the partition",
                missing + 1
            )));
        }

        Ok(Self { groups, len })
    }
}

impl From<WeakOrder> for Vec<OrderEntry> {
    fn from(order: WeakOrder) -> Self {
        order.to_entries()
    }
}

impl FromStr for WeakOrder {
    type Err = FusionError;

    fn from_str(s: &str) -> Result<Self> {
        let entries: Vec<OrderEntry> = serde_json::from_str(s)
            .map_err(|e| FusionError::invalid(format!("malformed weak order: {e}")))?;
        Self::try_from(entries)
    }
}

impl fmt::Display for WeakOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match group.members() {
                [single] => write!(f, "{single}")?,
                members => {
                    write!(f, "[")?;
                    for (j, id) in members.iter().enumerate() {
                        if j > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{id}")?;
                    }
                    write!(f, "]")?;
                }
            }
        }
        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a WeakOrder {
    type Item = &'a TieGroup;
    type IntoIter = std::slice::Iter<'a, TieGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_entries() {
        let order: WeakOrder = "[1, [2, 3], 4]".parse().unwrap();
        assert_eq!(order.len(), 4);
        assert_eq!(order.group_count(), 3);
        assert_eq!(order.groups()[1].members(), &[2, 3]);
        assert_eq!(order.tiers(), vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_groups_are_sorted_on_construction() {
        let order: WeakOrder = "[[3, 1], 2]".parse().unwrap();
        assert_eq!(order.groups()[0].members(), &[1, 3]);
        assert_eq!(order.to_string(), "[[1,3],2]");
    }

    #[test]
    fn test_singleton_group_serializes_as_bare_identifier() {
        let order: WeakOrder = "[[2], [1]]".parse().unwrap();
        assert_eq!(order.to_string(), "[2,1]");
        assert_eq!(serde_json::to_string(&order).unwrap(), "[2,1]");
    }

    #[test]
    fn test_display_matches_json_serialization() {
        let order: WeakOrder = "[[1,2],[3,4,5],6,7,9,[8,10]]".parse().unwrap();
        assert_eq!(order.to_string(), serde_json::to_string(&order).unwrap());
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let err = "[1, [2, 2], 3]".parse::<WeakOrder>().unwrap_err();
        assert!(matches!(err, FusionError::InvalidInput(ref m) if m.contains("more than once")));
    }

    #[test]
    fn test_out_of_range_identifier_rejected() {
        let err = "[1, 5]".parse::<WeakOrder>().unwrap_err();
        assert!(matches!(err, FusionError::InvalidInput(ref m) if m.contains("outside 1..=2")));

        let err = "[0, 1]".parse::<WeakOrder>().unwrap_err();
        assert!(matches!(err, FusionError::InvalidInput(_)));

        let err = "[-1, 1]".parse::<WeakOrder>().unwrap_err();
        assert!(matches!(err, FusionError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_order_rejected() {
        assert_eq!("[]".parse::<WeakOrder>().unwrap_err(), FusionError::EmptyInput);
    }

    #[test]
    fn test_empty_group_rejected() {
        let err = "[1, []]".parse::<WeakOrder>().unwrap_err();
        assert!(matches!(err, FusionError::InvalidInput(ref m) if m.contains("empty")));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = "[1, [2,".parse::<WeakOrder>().unwrap_err();
        assert!(matches!(err, FusionError::InvalidInput(ref m) if m.contains("malformed")));

        let err = r#"[1, "two"]"#.parse::<WeakOrder>().unwrap_err();
        assert!(matches!(err, FusionError::InvalidInput(_)));
    }

    #[test]
    fn test_from_groups() {
        let order = WeakOrder::from_groups(vec![vec![1], vec![2, 3], vec![4]]).unwrap();
        assert_eq!(order, "[1,[2,3],4]".parse().unwrap());
    }

    #[test]
    fn test_deserialize_through_serde() {
        let order: WeakOrder = serde_json::from_str("[[1,2],3]").unwrap();
        assert_eq!(order.group_count(), 2);

        let err = serde_json::from_str::<WeakOrder>("[1,1]");
        assert!(err.is_err());
    }

    #[test]
    fn test_tie_group_queries() {
        let order: WeakOrder = "[[4, 2], 1, 3]".parse().unwrap();
        let first = &order.groups()[0];
        assert_eq!(first.representative(), 2);
        assert!(first.contains(4));
        assert!(!first.contains(1));
        assert_eq!(first.len(), 2);
    }
}

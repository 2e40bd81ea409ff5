//! Spiral Index Generator
//!
//! Computes the spiral traversal order over a sequence of length `n` as an
//! ordered list of index groups. Each group holds one or two zero-based
//! positions and carries a 1-based role ordinal.
//!
//! # Algorithm
//!
//! - `n == 0` yields no groups.
//! - Odd `n`: the centre `n / 2` is emitted alone. Then for `step = 1, 2, ..`
//!   while `center - step >= 0 && center + step < n`, an outer pair
//!   `[step - 1, n - step]` followed by an inner pair
//!   `[center - step, center + step]`.
//! - Even `n`: the central pair `[n/2 - 1, n/2]` is emitted first, then the
//!   same outer/inner alternation around `left = n/2 - 1`, `right = n/2`.
//!
//! Every group is either the centre or a symmetric pair `(k, n - 1 - k)`.
//! The outer sweep walks `k` up from 0 while the inner sweep walks it down
//! from the centre, so once the two sweeps cross, the loop guard keeps
//! re-emitting pairs already seen. [`raw_spiral_groups`] returns that literal
//! stream. [`spiral_index_groups`] is the canonical ordering used by the
//! annotator: positions already visited are skipped and groups left empty
//! are dropped before role ordinals are assigned, so each position appears
//! exactly once.
//!
//! ```
//! use spiral_parser::spiral::{raw_spiral_groups, spiral_index_groups};
//!
//! let groups: Vec<Vec<usize>> = spiral_index_groups(5)
//!     .iter()
//!     .map(|g| g.indices().to_vec())
//!     .collect();
//! assert_eq!(groups, vec![vec![2], vec![0, 4], vec![1, 3]]);
//!
//! assert_eq!(raw_spiral_groups(4).len(), 3);
//! assert_eq!(spiral_index_groups(4).len(), 2);
//! ```

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Where in the spiral a group was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Middle element (odd length) or middle pair (even length)
    Center,
    /// `[step - 1, n - step]`, walking in from the ends
    Outer,
    /// Pair symmetric around the centre at distance `step`
    Inner,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Center => "center",
            GroupKind::Outer => "outer",
            GroupKind::Inner => "inner",
        }
    }
}

/// One or two positions into the input sequence sharing a role ordinal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexGroup {
    /// 1-based ordinal, assigned in generation order
    pub role: usize,
    pub kind: GroupKind,
    /// Zero-based positions, in the order they are visited
    pub indices: SmallVec<[usize; 2]>,
}

impl IndexGroup {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Role label used in annotated output (`spiral_<role>`)
    pub fn role_label(&self) -> String {
        role_label(self.role)
    }
}

impl fmt::Display for IndexGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {:?}", self.role_label(), self.kind.as_str(), self.indices())
    }
}

/// Label for a role ordinal
pub fn role_label(role: usize) -> String {
    format!("spiral_{}", role)
}

/// Literal spiral groups for a sequence of length `n`, repeats included.
///
/// Candidate positions outside `0..n` are filtered out; a group whose
/// candidates are all out of range is not emitted.
pub fn raw_spiral_groups(n: usize) -> Vec<IndexGroup> {
    let mut groups = Vec::new();
    if n == 0 {
        return groups;
    }

    let mut push = |kind: GroupKind, candidates: [Option<usize>; 2]| {
        let indices: SmallVec<[usize; 2]> = candidates
            .into_iter()
            .flatten()
            .filter(|&i| i < n)
            .collect();
        if !indices.is_empty() {
            let role = groups.len() + 1;
            groups.push(IndexGroup {
                role,
                kind,
                indices,
            });
        }
    };

    // (left, right) of the central group; equal for odd lengths
    let (left, right) = if n % 2 == 1 {
        (n / 2, n / 2)
    } else {
        (n / 2 - 1, n / 2)
    };

    if left == right {
        push(GroupKind::Center, [Some(left), None]);
    } else {
        push(GroupKind::Center, [Some(left), Some(right)]);
    }

    let mut step = 1;
    while step <= left && right + step < n {
        push(GroupKind::Outer, [Some(step - 1), n.checked_sub(step)]);
        push(
            GroupKind::Inner,
            [left.checked_sub(step), Some(right + step)],
        );
        step += 1;
    }

    groups
}

/// Canonical spiral groups for a sequence of length `n`.
///
/// Every position in `0..n` appears in exactly one group. Roles are
/// numbered 1.. in order with no gaps.
pub fn spiral_index_groups(n: usize) -> Vec<IndexGroup> {
    let mut visited = vec![false; n];
    let mut groups: Vec<IndexGroup> = Vec::new();

    for raw in raw_spiral_groups(n) {
        let indices: SmallVec<[usize; 2]> = raw
            .indices
            .into_iter()
            .filter(|&i| !std::mem::replace(&mut visited[i], true))
            .collect();
        if indices.is_empty() {
            continue;
        }
        groups.push(IndexGroup {
            role: groups.len() + 1,
            kind: raw.kind,
            indices,
        });
    }

    groups
}

/// Flattened canonical visiting order for a sequence of length `n`
pub fn spiral_order(n: usize) -> Vec<usize> {
    spiral_index_groups(n)
        .into_iter()
        .flat_map(|g| g.indices)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn canonical_groups_cover_each_index_once(n in 0usize..512) {
            let mut order = spiral_order(n);
            order.sort_unstable();
            prop_assert_eq!(order, (0..n).collect::<Vec<_>>());
        }

        #[test]
        fn roles_are_contiguous_from_one(n in 0usize..512) {
            for (i, group) in spiral_index_groups(n).iter().enumerate() {
                prop_assert_eq!(group.role, i + 1);
            }
        }

        /// Canonical groups are the raw stream with repeats removed.
        #[test]
        fn canonical_is_deduplicated_raw(n in 0usize..256) {
            let raw: Vec<usize> = raw_spiral_groups(n)
                .into_iter()
                .flat_map(|g| g.indices)
                .collect();
            let mut seen = std::collections::HashSet::new();
            let deduped: Vec<usize> = raw.into_iter().filter(|i| seen.insert(*i)).collect();
            prop_assert_eq!(deduped, spiral_order(n));
        }
    }
}

// ABOUTME: Grid layout planner that turns N hosts into split operations.
// ABOUTME: Columns are split off first, then each column is split into a top/bottom pair.

use std::fmt;

use serde::Serialize;
use tile_core::HostName;

/// 1-based pane number within one tab. Pane 1 is the tab's initial session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PaneId(pub u32);

impl PaneId {
    pub const FIRST: PaneId = PaneId(1);
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Horizontal divider: the new pane goes below its parent
    Horizontal,
    /// Vertical divider: the new pane goes to the right of its parent
    Vertical,
}

/// Split `parent` along `orientation`, creating pane `child`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitOp {
    pub parent: PaneId,
    pub child: PaneId,
    pub orientation: Orientation,
}

impl SplitOp {
    pub fn vertical(parent: u32, child: u32) -> Self {
        Self {
            parent: PaneId(parent),
            child: PaneId(child),
            orientation: Orientation::Vertical,
        }
    }

    pub fn horizontal(parent: u32, child: u32) -> Self {
        Self {
            parent: PaneId(parent),
            child: PaneId(child),
            orientation: Orientation::Horizontal,
        }
    }
}

/// Which host a pane connects to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaneBinding {
    pub pane: PaneId,
    pub host: HostName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("Cannot plan a layout without hosts")]
    NoHosts,
}

/// Ordered splits followed by ordered pane bindings.
/// Splits must be applied in order; bindings only after every split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutPlan {
    splits: Vec<SplitOp>,
    bindings: Vec<PaneBinding>,
}

impl LayoutPlan {
    /// Plan a two-row grid for hosts in selection order.
    ///
    /// First-row panes take the odd ids 1, 3, 5, ... left to right and second-row
    /// panes the even id right after their column's top pane, so pane `i + 1`
    /// is bound to `hosts[i]`.
    pub fn new(hosts: &[HostName]) -> Result<Self, PlanError> {
        if hosts.is_empty() {
            return Err(PlanError::NoHosts);
        }
        let count = hosts.len() as u32;
        let columns = count.div_ceil(2);
        let second_row = count / 2;

        let mut splits = Vec::with_capacity((columns - 1 + second_row) as usize);
        for p in 0..columns - 1 {
            let parent = p * 2 + 1;
            splits.push(SplitOp::vertical(parent, parent + 2));
        }
        for p in 0..second_row {
            let parent = p * 2 + 1;
            splits.push(SplitOp::horizontal(parent, parent + 1));
        }

        let bindings = hosts
            .iter()
            .zip(1..)
            .map(|(host, id)| PaneBinding {
                pane: PaneId(id),
                host: host.clone(),
            })
            .collect();

        tracing::debug!(
            "Planned {} panes in {} columns with {} splits",
            count,
            columns,
            splits.len()
        );
        Ok(Self { splits, bindings })
    }

    pub fn splits(&self) -> &[SplitOp] {
        &self.splits
    }

    pub fn bindings(&self) -> &[PaneBinding] {
        &self.bindings
    }

    pub fn pane_count(&self) -> usize {
        self.bindings.len()
    }

    /// Number of first-row panes
    pub fn columns(&self) -> usize {
        self.bindings.len().div_ceil(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn hosts(names: &[&str]) -> Vec<HostName> {
        names.iter().map(|n| HostName::from(*n)).collect()
    }

    fn binding_pairs(plan: &LayoutPlan) -> Vec<(u32, String)> {
        plan.bindings()
            .iter()
            .map(|b| (b.pane.0, b.host.to_string()))
            .collect()
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert_eq!(LayoutPlan::new(&[]), Err(PlanError::NoHosts));
    }

    #[test]
    fn single_host_needs_no_splits() {
        let plan = LayoutPlan::new(&hosts(&["a"])).unwrap();
        assert!(plan.splits().is_empty());
        assert_eq!(binding_pairs(&plan), [(1, "a".to_string())]);
        assert_eq!(plan.columns(), 1);
    }

    #[test]
    fn two_hosts_stack_in_one_column() {
        let plan = LayoutPlan::new(&hosts(&["a", "b"])).unwrap();
        assert_eq!(plan.splits(), [SplitOp::horizontal(1, 2)]);
    }

    #[test]
    fn four_hosts_fill_two_columns() {
        let plan = LayoutPlan::new(&hosts(&["a", "b", "c", "d"])).unwrap();
        assert_eq!(
            plan.splits(),
            [
                SplitOp::vertical(1, 3),
                SplitOp::horizontal(1, 2),
                SplitOp::horizontal(3, 4),
            ]
        );
        assert_eq!(
            binding_pairs(&plan),
            [
                (1, "a".to_string()),
                (2, "b".to_string()),
                (3, "c".to_string()),
                (4, "d".to_string()),
            ]
        );
    }

    #[test]
    fn five_hosts_leave_last_column_single() {
        let plan = LayoutPlan::new(&hosts(&["a", "b", "c", "d", "e"])).unwrap();
        assert_eq!(
            plan.splits(),
            [
                SplitOp::vertical(1, 3),
                SplitOp::vertical(3, 5),
                SplitOp::horizontal(1, 2),
                SplitOp::horizontal(3, 4),
            ]
        );
        assert!(plan.splits().iter().all(|s| s.parent != PaneId(5)));
        assert_eq!(plan.bindings()[4].pane, PaneId(5));
        assert_eq!(plan.bindings()[4].host.as_str(), "e");
        assert_eq!(plan.columns(), 3);
    }

    #[test]
    fn serializes_to_json() {
        let plan = LayoutPlan::new(&hosts(&["a", "b"])).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "splits": [{"parent": 1, "child": 2, "orientation": "horizontal"}],
                "bindings": [{"pane": 1, "host": "a"}, {"pane": 2, "host": "b"}],
            })
        );
    }

    proptest! {
        #[test]
        fn plan_uses_every_pane_once(count in 1usize..64) {
            let names: Vec<HostName> = (0..count).map(|i| HostName::new(format!("h{i}"))).collect();
            let plan = LayoutPlan::new(&names).unwrap();

            prop_assert_eq!(plan.pane_count(), count);
            prop_assert_eq!(plan.splits().len(), (count.div_ceil(2) - 1) + count / 2);

            let mut seen = BTreeSet::from([1u32]);
            for split in plan.splits() {
                prop_assert!(seen.contains(&split.parent.0));
                prop_assert!(seen.insert(split.child.0));
            }
            let expected: BTreeSet<u32> = (1..=count as u32).collect();
            prop_assert_eq!(&seen, &expected);

            let bound: Vec<u32> = plan.bindings().iter().map(|b| b.pane.0).collect();
            prop_assert_eq!(bound, (1..=count as u32).collect::<Vec<_>>());
        }

        #[test]
        fn plan_is_deterministic(count in 1usize..32) {
            let names: Vec<HostName> = (0..count).map(|i| HostName::new(format!("h{i}"))).collect();
            prop_assert_eq!(LayoutPlan::new(&names), LayoutPlan::new(&names));
        }
    }
}

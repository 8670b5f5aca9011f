// ABOUTME: Pane layout planning for sshtile.
// ABOUTME: Plans a two-row grid of split operations and replays it on a split tree.

mod plan;
mod tree;

pub use plan::{LayoutPlan, Orientation, PaneBinding, PaneId, PlanError, SplitOp};
pub use tree::{LayoutError, LayoutTree, Rect};

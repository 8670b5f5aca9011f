// ABOUTME: Binary split tree that replays a layout plan pane by pane.
// ABOUTME: Catches splits that reference panes before they exist and computes pane rectangles.

use std::collections::{HashMap, HashSet};

use crate::{LayoutPlan, Orientation, PaneId};

#[derive(Debug)]
enum Node {
    Pane(PaneId),
    Split {
        orientation: Orientation,
        ratio: f32,
        first: Box<Node>,
        second: Box<Node>,
    },
}

#[derive(Debug)]
pub struct LayoutTree {
    root: Node,
    live: HashSet<PaneId>,
}

/// Rectangle in normalized coordinates (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn full() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Pane {0} is split before it exists")]
    UnknownPane(PaneId),

    #[error("Pane {0} is created twice")]
    DuplicatePane(PaneId),

    #[error("Pane {0} is bound to a host but never created")]
    UnboundPane(PaneId),
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            root: Node::Pane(PaneId::FIRST),
            live: HashSet::from([PaneId::FIRST]),
        }
    }

    /// Apply every split of a plan in order and check its bindings
    pub fn from_plan(plan: &LayoutPlan) -> Result<Self, LayoutError> {
        let mut tree = Self::new();
        for split in plan.splits() {
            tree.split(split.parent, split.child, split.orientation)?;
        }
        if let Some(binding) = plan.bindings().iter().find(|b| !tree.contains(b.pane)) {
            return Err(LayoutError::UnboundPane(binding.pane));
        }
        Ok(tree)
    }

    /// Split `parent` in half, placing `child` right of or below it
    pub fn split(
        &mut self,
        parent: PaneId,
        child: PaneId,
        orientation: Orientation,
    ) -> Result<(), LayoutError> {
        if self.contains(child) {
            return Err(LayoutError::DuplicatePane(child));
        }
        if !self.contains(parent) {
            return Err(LayoutError::UnknownPane(parent));
        }
        // Recursion depth is the tree height, about half the pane count for a grid plan.
        let found = split_node(&mut self.root, parent, orientation, child);
        debug_assert!(found, "live pane {parent} missing from tree");
        self.live.insert(child);
        Ok(())
    }

    pub fn contains(&self, pane: PaneId) -> bool {
        self.live.contains(&pane)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Get all panes with their layout rectangles
    pub fn pane_rects(&self) -> HashMap<PaneId, Rect> {
        let mut result = HashMap::new();
        collect_rects(&self.root, Rect::full(), &mut result);
        result
    }

    /// Get all pane IDs, left/top first
    pub fn panes(&self) -> Vec<PaneId> {
        let mut result = Vec::new();
        collect_panes(&self.root, &mut result);
        result
    }
}

fn collect_rects(node: &Node, rect: Rect, out: &mut HashMap<PaneId, Rect>) {
    match node {
        Node::Pane(id) => {
            out.insert(*id, rect);
        }
        Node::Split {
            orientation,
            ratio,
            first,
            second,
        } => {
            let (first_rect, second_rect) = match orientation {
                Orientation::Vertical => (
                    Rect {
                        width: rect.width * ratio,
                        ..rect
                    },
                    Rect {
                        x: rect.x + rect.width * ratio,
                        width: rect.width * (1.0 - ratio),
                        ..rect
                    },
                ),
                Orientation::Horizontal => (
                    Rect {
                        height: rect.height * ratio,
                        ..rect
                    },
                    Rect {
                        y: rect.y + rect.height * ratio,
                        height: rect.height * (1.0 - ratio),
                        ..rect
                    },
                ),
            };
            collect_rects(first, first_rect, out);
            collect_rects(second, second_rect, out);
        }
    }
}

fn split_node(node: &mut Node, target: PaneId, orientation: Orientation, new_id: PaneId) -> bool {
    match node {
        Node::Pane(id) if *id == target => {
            *node = Node::Split {
                orientation,
                ratio: 0.5,
                first: Box::new(Node::Pane(target)),
                second: Box::new(Node::Pane(new_id)),
            };
            true
        }
        Node::Pane(_) => false,
        Node::Split { first, second, .. } => {
            split_node(first, target, orientation, new_id)
                || split_node(second, target, orientation, new_id)
        }
    }
}

fn collect_panes(node: &Node, out: &mut Vec<PaneId>) {
    match node {
        Node::Pane(id) => out.push(*id),
        Node::Split { first, second, .. } => {
            collect_panes(first, out);
            collect_panes(second, out);
        }
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

//! Commit graph layout.
//!
//! Lays the commits of a [`RepoState`] out into lanes (one per branch) and
//! rows (one per commit, newest first) and connects every commit to its
//! parent. The layout is read-only: it never changes the state it is given.
//!
//! # Layout rules
//! - **Lanes**: current branch first, then the trunk branch, then the rest
//!   alphabetically. Lane index is the position in that order.
//! - **Ownership**: walking each branch in lane order from its head, the first
//!   branch to reach a commit owns it. Commits no branch reaches belong to the
//!   current branch.
//! - **Rows**: timestamp descending; equal timestamps keep the later-recorded
//!   commit on top.
//! - **Color**: palette entry of the owning branch's lane, wrapping.

use crate::core::state::{Commit, RepoState};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub const LANE_WIDTH: u32 = 24;
pub const ROW_HEIGHT: u32 = 48;
pub const TOP_PADDING: u32 = 20;
pub const LEFT_PADDING: u32 = 20;
/// Room to the right of the lanes for ids and messages.
pub const LABEL_AREA_WIDTH: u32 = 300;
pub const EMPTY_GRAPH_SIZE: (u32, u32) = (200, 100);

pub const BRANCH_COLORS: [&str; 10] = [
    "#f97316", // orange
    "#3b82f6", // blue
    "#10b981", // green
    "#8b5cf6", // purple
    "#ef4444", // red
    "#06b6d4", // cyan
    "#f59e0b", // amber
    "#ec4899", // pink
    "#14b8a6", // teal
    "#6366f1", // indigo
];

pub fn lane_color(lane: usize) -> &'static str {
    BRANCH_COLORS[lane % BRANCH_COLORS.len()]
}

/// Horizontal pixel centre of a lane.
pub fn lane_center(lane: usize) -> u32 {
    LEFT_PADDING + lane as u32 * LANE_WIDTH + LANE_WIDTH / 2
}

/// Vertical pixel centre of a row.
pub fn row_center(row: usize) -> u32 {
    TOP_PADDING + row as u32 * ROW_HEIGHT + ROW_HEIGHT / 2
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub index: usize,
    pub branch: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub branch: String,
    pub lane: usize,
    pub row: usize,
    pub color: &'static str,
    pub is_head: bool,
}

impl GraphNode {
    pub fn x(&self) -> u32 {
        lane_center(self.lane)
    }

    pub fn y(&self) -> u32 {
        row_center(self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeShape {
    Straight,
    Curve,
}

/// Child-to-parent connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub from_lane: usize,
    pub from_row: usize,
    pub to_lane: usize,
    pub to_row: usize,
    pub color: &'static str,
    pub shape: EdgeShape,
}

impl GraphEdge {
    /// SVG path data for the edge.
    pub fn svg_path(&self) -> String {
        let (x1, y1) = (lane_center(self.from_lane), row_center(self.from_row));
        let (x2, y2) = (lane_center(self.to_lane), row_center(self.to_row));
        match self.shape {
            EdgeShape::Straight => format!("M {x1} {y1} L {x2} {y2}"),
            EdgeShape::Curve => {
                let mid_y = (y1 + y2) / 2;
                format!("M {x1} {y1} C {x1} {mid_y}, {x2} {mid_y}, {x2} {y2}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchLabel {
    pub name: String,
    pub color: &'static str,
    pub head_id: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommitGraph {
    pub lanes: Vec<Lane>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Branches whose head commit is in the graph, in repository order.
    pub labels: Vec<BranchLabel>,
    pub width: u32,
    pub height: u32,
}

impl CommitGraph {
    /// Case-insensitive match on message, id or owning branch.
    pub fn filter(&self, query: &str) -> Vec<&GraphNode> {
        if query.is_empty() {
            return self.nodes.iter().collect();
        }
        let query = query.to_lowercase();
        self.nodes
            .iter()
            .filter(|n| {
                n.message.to_lowercase().contains(&query)
                    || n.id.contains(&query)
                    || n.branch.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Labels of every branch whose head is `id`.
    pub fn labels_at(&self, id: &str) -> Vec<&BranchLabel> {
        self.labels.iter().filter(|l| l.head_id == id).collect()
    }
}

/// Branch names in lane order.
///
/// The current branch always takes lane 0, even when no branch record carries
/// its name.
pub fn sorted_branch_names<'a>(state: &'a RepoState, trunk: &str) -> Vec<&'a str> {
    let current = state.current_branch.as_str();
    let rank = |name: &str| if name == trunk { 0 } else { 1 };

    let mut rest: Vec<&str> = state
        .branches
        .iter()
        .map(|b| b.name.as_str())
        .filter(|name| *name != current)
        .collect();
    rest.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));
    rest.dedup();

    let mut names = Vec::with_capacity(rest.len() + 1);
    names.push(current);
    names.extend(rest);
    names
}

pub fn layout_graph(state: &RepoState, trunk: &str) -> CommitGraph {
    let order = sorted_branch_names(state, trunk);
    let lanes: Vec<Lane> = order
        .iter()
        .enumerate()
        .map(|(index, name)| Lane {
            index,
            branch: name.to_string(),
            color: lane_color(index),
        })
        .collect();

    if state.commits.is_empty() {
        return CommitGraph {
            lanes,
            nodes: Vec::new(),
            edges: Vec::new(),
            labels: Vec::new(),
            width: EMPTY_GRAPH_SIZE.0,
            height: EMPTY_GRAPH_SIZE.1,
        };
    }

    let by_id: HashMap<&str, &Commit> = state.commits.iter().map(|c| (c.id.as_str(), c)).collect();
    let owners = assign_owners(state, &order, &by_id);
    let lane_of: HashMap<&str, usize> = lanes.iter().map(|l| (l.branch.as_str(), l.index)).collect();

    let mut rows: Vec<(usize, &Commit)> = state.commits.iter().enumerate().collect();
    rows.sort_by(|(ia, a), (ib, b)| b.timestamp.cmp(&a.timestamp).then_with(|| ib.cmp(ia)));

    let mut nodes = Vec::with_capacity(rows.len());
    let mut position: HashMap<&str, usize> = HashMap::with_capacity(rows.len());
    for (row, (_, commit)) in rows.iter().enumerate() {
        let branch = owners
            .get(commit.id.as_str())
            .copied()
            .unwrap_or(state.current_branch.as_str());
        let lane = lane_of.get(branch).copied().unwrap_or(0);

        position.insert(commit.id.as_str(), nodes.len());
        nodes.push(GraphNode {
            id: commit.id.clone(),
            message: commit.message.clone(),
            timestamp: commit.timestamp,
            branch: branch.to_string(),
            lane,
            row,
            color: lane_color(lane),
            is_head: state.head.as_deref() == Some(commit.id.as_str()),
        });
    }

    let edges = nodes
        .iter()
        .filter_map(|node| {
            let parent_id = by_id.get(node.id.as_str())?.parent.as_deref()?;
            let parent = &nodes[*position.get(parent_id)?];
            Some(GraphEdge {
                from_lane: node.lane,
                from_row: node.row,
                to_lane: parent.lane,
                to_row: parent.row,
                color: node.color,
                shape: if node.lane == parent.lane {
                    EdgeShape::Straight
                } else {
                    EdgeShape::Curve
                },
            })
        })
        .collect();

    let labels = state
        .branches
        .iter()
        .filter_map(|b| {
            let head = b.head_commit_id.as_deref()?;
            let node = &nodes[*position.get(head)?];
            Some(BranchLabel {
                name: b.name.clone(),
                color: node.color,
                head_id: head.to_string(),
                is_current: b.name == state.current_branch,
            })
        })
        .collect();

    let max_lane = nodes.iter().map(|n| n.lane).max().unwrap_or(0);
    let width = LEFT_PADDING * 2 + (max_lane as u32 + 1) * LANE_WIDTH + LABEL_AREA_WIDTH;
    let height = TOP_PADDING * 2 + nodes.len() as u32 * ROW_HEIGHT;

    CommitGraph {
        lanes,
        nodes,
        edges,
        labels,
        width,
        height,
    }
}

/// First branch in lane order to reach a commit owns it.
fn assign_owners<'a>(
    state: &'a RepoState,
    order: &[&'a str],
    by_id: &HashMap<&'a str, &'a Commit>,
) -> HashMap<&'a str, &'a str> {
    let mut owners: HashMap<&str, &str> = HashMap::with_capacity(state.commits.len());

    for &name in order {
        let mut cursor = state
            .branch(name)
            .and_then(|b| b.head_commit_id.as_deref());

        while let Some(id) = cursor {
            let Some(commit) = by_id.get(id) else {
                break;
            };
            // Everything below an owned commit was claimed by the same walk.
            if owners.contains_key(commit.id.as_str()) {
                break;
            }
            owners.insert(commit.id.as_str(), name);
            cursor = commit.parent.as_deref();
        }
    }
    owners
}

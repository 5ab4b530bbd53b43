//! Host document abstraction for the tooltip overlay.
//!
//! The tooltip lives at document-body level, outside any chart's own scene,
//! and is found again by its marker class rather than by a cached handle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type NodeId = u64;

/// Operations the renderer needs from the page hosting the chart.
pub trait TooltipHost {
    /// Append a new hidden node carrying `marker` to the body.
    fn create_node(&mut self, marker: &str) -> NodeId;
    /// Remove every node carrying `marker`; returns how many were removed.
    fn remove_by_marker(&mut self, marker: &str) -> usize;
    fn find_by_marker(&self, marker: &str) -> Option<NodeId>;
    /// Each method below returns false when `node` no longer exists.
    fn set_content(&mut self, node: NodeId, lines: &[String]) -> bool;
    fn set_position(&mut self, node: NodeId, left: f32, top: f32) -> bool;
    fn set_visible(&mut self, node: NodeId, visible: bool) -> bool;
    /// Record one more chart using the node under `marker`; returns the new count.
    fn add_user(&mut self, marker: &str) -> usize;
    /// Drop one user of `marker`; returns how many remain.
    fn remove_user(&mut self, marker: &str) -> usize;
}

/// A node attached to the document body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyNode {
    pub id: NodeId,
    pub marker: String,
    pub visible: bool,
    pub left: f32,
    pub top: f32,
    pub lines: Vec<String>,
}

/// In-memory document used by headless hosts and tests
#[derive(Debug, Default)]
pub struct Document {
    next_id: NodeId,
    body: Vec<BodyNode>,
    users: HashMap<String, usize>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[BodyNode] {
        &self.body
    }

    pub fn node(&self, id: NodeId) -> Option<&BodyNode> {
        self.body.iter().find(|n| n.id == id)
    }

    pub fn count_marker(&self, marker: &str) -> usize {
        self.body.iter().filter(|n| n.marker == marker).count()
    }

    /// Charts currently holding the node under `marker`
    pub fn users(&self, marker: &str) -> usize {
        self.users.get(marker).copied().unwrap_or(0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut BodyNode> {
        self.body.iter_mut().find(|n| n.id == id)
    }
}

impl TooltipHost for Document {
    fn create_node(&mut self, marker: &str) -> NodeId {
        self.next_id += 1;
        let id = self.next_id;
        self.body.push(BodyNode {
            id,
            marker: marker.to_string(),
            visible: false,
            left: 0.0,
            top: 0.0,
            lines: Vec::new(),
        });
        id
    }

    fn remove_by_marker(&mut self, marker: &str) -> usize {
        let before = self.body.len();
        self.body.retain(|n| n.marker != marker);
        before - self.body.len()
    }

    fn find_by_marker(&self, marker: &str) -> Option<NodeId> {
        self.body.iter().find(|n| n.marker == marker).map(|n| n.id)
    }

    fn set_content(&mut self, node: NodeId, lines: &[String]) -> bool {
        match self.node_mut(node) {
            Some(n) => {
                n.lines = lines.to_vec();
                true
            }
            None => false,
        }
    }

    fn set_position(&mut self, node: NodeId, left: f32, top: f32) -> bool {
        match self.node_mut(node) {
            Some(n) => {
                n.left = left;
                n.top = top;
                true
            }
            None => false,
        }
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) -> bool {
        match self.node_mut(node) {
            Some(n) => {
                n.visible = visible;
                true
            }
            None => false,
        }
    }

    fn add_user(&mut self, marker: &str) -> usize {
        let count = self.users.entry(marker.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    fn remove_user(&mut self, marker: &str) -> usize {
        match self.users.get_mut(marker) {
            Some(count) if *count > 1 => {
                *count -= 1;
                *count
            }
            _ => {
                self.users.remove(marker);
                0
            }
        }
    }
}

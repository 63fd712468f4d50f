//! Containment Graph Layout
//!
//! Flattens Task → Instruction → Action containment into positioned nodes
//! and edges for the graph components. Columns are fixed per kind; rows
//! advance in traversal order so siblings never overlap.

use std::collections::HashSet;

use crate::models::{Action, Instruction, Task};

/// Column x-coordinates per entity kind
const TASK_X: f64 = 40.0;
const INSTRUCTION_X: f64 = 300.0;
const ACTION_X: f64 = 600.0;

const ROOT_Y: f64 = 50.0;
/// Gap between the root and the first child row
const FIRST_CHILD_GAP: f64 = 100.0;
const INSTRUCTION_STEP: f64 = 120.0;
const ACTION_STEP: f64 = 100.0;

/// Rendered node box size
pub const NODE_WIDTH: f64 = 200.0;
pub const NODE_HEIGHT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Task,
    Instruction,
    Action,
}

impl NodeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NodeKind::Task => "graph-node task",
            NodeKind::Instruction => "graph-node instruction",
            NodeKind::Action => "graph-node action",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphLayout {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphLayout {
    /// Top of the lowest node
    pub fn height(&self) -> f64 {
        self.nodes.iter().map(|n| n.y).fold(0.0, f64::max)
    }

    /// Right edge of the widest column, for sizing the canvas
    pub fn width(&self) -> f64 {
        self.nodes.iter().map(|n| n.x + NODE_WIDTH).fold(0.0, f64::max)
    }

    /// Elbow connector from the source's bottom centre to the target's left side
    pub fn edge_path(&self, edge: &GraphEdge) -> Option<String> {
        let source = self.node(&edge.source)?;
        let target = self.node(&edge.target)?;
        let x1 = source.x + NODE_WIDTH / 2.0;
        let y1 = source.y + NODE_HEIGHT;
        let y2 = target.y + NODE_HEIGHT / 2.0;
        Some(format!("M {} {} V {} H {}", x1, y1, y2, target.x))
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Incremental builder that rejects duplicate node IDs and keeps edge
/// IDs unique
struct LayoutBuilder {
    layout: GraphLayout,
    seen: HashSet<String>,
    edge_ids: HashSet<String>,
}

impl LayoutBuilder {
    fn new() -> Self {
        Self {
            layout: GraphLayout::default(),
            seen: HashSet::new(),
            edge_ids: HashSet::new(),
        }
    }

    /// Returns false if a node with this ID was already placed
    fn add_node(&mut self, id: String, label: String, kind: NodeKind, x: f64, y: f64) -> bool {
        if !self.seen.insert(id.clone()) {
            log::warn!("[Graph] Skipping duplicate node {}", id);
            return false;
        }
        self.layout.nodes.push(GraphNode { id, label, kind, x, y });
        true
    }

    fn add_edge(&mut self, source: &str, target: &str) {
        // Entity IDs may themselves contain "-action-" and friends
        let base = format!("edge-{}-{}", source, target);
        let mut id = base.clone();
        let mut n = 1;
        while !self.edge_ids.insert(id.clone()) {
            n += 1;
            id = format!("{}-{}", base, n);
        }
        self.layout.edges.push(GraphEdge {
            id,
            source: source.to_string(),
            target: target.to_string(),
        });
    }

    fn finish(self) -> GraphLayout {
        self.layout
    }
}

fn task_node_id(task: &Task) -> String {
    format!("task-{}", task.task_id)
}

fn instruction_node_id(instruction: &Instruction) -> String {
    format!("instr-{}", instruction.instruction_id)
}

fn action_node_id(action: &Action) -> String {
    format!("action-{}", action.action_id)
}

/// Two-level layout: the task, its instructions, and their actions
pub fn task_graph(task: &Task) -> GraphLayout {
    let mut builder = LayoutBuilder::new();
    let root = task_node_id(task);
    builder.add_node(root.clone(), format!("Task: {}", task.task_id), NodeKind::Task, TASK_X, ROOT_Y);

    let mut y = ROOT_Y + FIRST_CHILD_GAP;
    for instruction in &task.instructions {
        let instr_id = instruction_node_id(instruction);
        let label = format!("Instruction: {}", instruction.instruction_id);
        if !builder.add_node(instr_id.clone(), label, NodeKind::Instruction, INSTRUCTION_X, y) {
            continue;
        }
        builder.add_edge(&root, &instr_id);
        y += INSTRUCTION_STEP;

        for action in &instruction.actions {
            let action_id = action_node_id(action);
            let label = format!("Action: {}", action.action_id);
            if builder.add_node(action_id.clone(), label, NodeKind::Action, ACTION_X, y) {
                builder.add_edge(&instr_id, &action_id);
                y += ACTION_STEP;
            }
        }
    }

    builder.finish()
}

/// One-level layout: the instruction and its actions
pub fn instruction_graph(instruction: &Instruction) -> GraphLayout {
    let mut builder = LayoutBuilder::new();
    let root = instruction_node_id(instruction);
    let label = format!("Instruction: {}", instruction.instruction_id);
    builder.add_node(root.clone(), label, NodeKind::Instruction, INSTRUCTION_X, ROOT_Y);

    let mut y = ROOT_Y + FIRST_CHILD_GAP;
    for action in &instruction.actions {
        let action_id = action_node_id(action);
        let label = format!("Action: {}", action.action_id);
        if builder.add_node(action_id.clone(), label, NodeKind::Action, ACTION_X, y) {
            builder.add_edge(&root, &action_id);
            y += ACTION_STEP;
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_task() -> Task {
        serde_json::from_value(json!({
            "task_id": "t1",
            "instructions": [
                { "instruction_id": "i1", "actions": [ { "action_id": "a1" } ] },
                { "instruction_id": "i2", "actions": [ { "action_id": "a2" }, { "action_id": "a3" } ] }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_task_graph_counts() {
        let layout = task_graph(&sample_task());

        let count = |kind| layout.nodes.iter().filter(|n| n.kind == kind).count();
        assert_eq!(count(NodeKind::Task), 1);
        assert_eq!(count(NodeKind::Instruction), 2);
        assert_eq!(count(NodeKind::Action), 3);

        let from_task = layout.edges.iter().filter(|e| e.source == "task-t1").count();
        assert_eq!(from_task, 2);
        assert_eq!(layout.edges.len(), 5);

        let ids: HashSet<_> = layout.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), layout.edges.len());
    }

    #[test]
    fn test_task_graph_edges_follow_containment() {
        let layout = task_graph(&sample_task());
        let pairs: Vec<_> = layout
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("task-t1", "instr-i1"),
                ("instr-i1", "action-a1"),
                ("task-t1", "instr-i2"),
                ("instr-i2", "action-a2"),
                ("instr-i2", "action-a3"),
            ]
        );
    }

    #[test]
    fn test_rows_increase_and_columns_by_kind() {
        let layout = task_graph(&sample_task());
        for pair in layout.nodes.windows(2) {
            assert!(pair[1].y > pair[0].y, "{} should sit below {}", pair[1].id, pair[0].id);
        }
        for node in &layout.nodes {
            let expected = match node.kind {
                NodeKind::Task => TASK_X,
                NodeKind::Instruction => INSTRUCTION_X,
                NodeKind::Action => ACTION_X,
            };
            assert_eq!(node.x, expected);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(task_graph(&sample_task()), task_graph(&sample_task()));
    }

    #[test]
    fn test_duplicate_child_ids_are_skipped() {
        let instruction: Instruction = serde_json::from_value(json!({
            "instruction_id": "i1",
            "actions": [ { "action_id": "a1" }, { "action_id": "a1" }, { "action_id": "a2" } ]
        }))
        .unwrap();
        let layout = instruction_graph(&instruction);
        assert_eq!(layout.nodes.len(), 3);
        assert_eq!(layout.edges.len(), 2);
        assert_eq!(layout.node("action-a2").map(|n| n.y), Some(ROOT_Y + FIRST_CHILD_GAP + ACTION_STEP));
    }

    #[test]
    fn test_edge_ids_unique_when_entity_ids_contain_separators() {
        let task: Task = serde_json::from_value(json!({
            "task_id": "t1",
            "instructions": [
                { "instruction_id": "a", "actions": [ { "action_id": "b-action-c" } ] },
                { "instruction_id": "a-action-b", "actions": [ { "action_id": "c" } ] }
            ]
        }))
        .unwrap();
        let layout = task_graph(&task);

        assert_eq!(layout.edges.len(), 4);
        let ids: HashSet<_> = layout.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(layout.edges[1].id, "edge-instr-a-action-b-action-c");
        assert_eq!(layout.edges[3].id, "edge-instr-a-action-b-action-c-2");
    }

    #[test]
    fn test_edge_path_connects_boxes() {
        let layout = task_graph(&sample_task());
        let edge = &layout.edges[0];
        let path = layout.edge_path(edge).unwrap();
        assert_eq!(path, format!("M {} {} V {} H {}", TASK_X + NODE_WIDTH / 2.0, ROOT_Y + NODE_HEIGHT, ROOT_Y + FIRST_CHILD_GAP + NODE_HEIGHT / 2.0, INSTRUCTION_X));

        let dangling = GraphEdge { id: "e".into(), source: "task-t1".into(), target: "nowhere".into() };
        assert!(layout.edge_path(&dangling).is_none());
    }

    #[test]
    fn test_empty_instruction_graph() {
        let instruction: Instruction = serde_json::from_value(json!({ "instruction_id": "i9" })).unwrap();
        let layout = instruction_graph(&instruction);
        assert_eq!(layout.nodes.len(), 1);
        assert!(layout.edges.is_empty());
        assert_eq!(layout.height(), ROOT_Y);
    }
}

//! Canvas State
//!
//! Widget-local roadmap state and the single reducer that changes it.
//! Every mutation goes through [`CanvasState::apply`], which reports which
//! of the node/edge lists changed so the owner can be told right away.

use leptos_flow::{add_edge, Connection, FlowEdge, FlowNode, HandlePosition, NodeStyle, XYPosition};

use crate::config::UiConfig;
use crate::models::{RoadmapEdge, RoadmapNode};
use crate::roadmap::mapper::{
    from_flow_edges, from_flow_node, from_flow_nodes, from_flow_position, to_flow_edges, to_flow_nodes,
    NodePayload,
};
use crate::roadmap::validate::{summarize, validate};

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasAction {
    /// User drew a connection between two nodes
    Connect(Connection),
    NodeClick(String),
    NodeDragStop { id: String, position: XYPosition },
    /// Edited node coming back from the details panel
    ApplyNodeEdit(RoadmapNode),
    RemoveNode(String),
    RemoveEdge(String),
    ClearSelection,
    ReportError(String),
    /// Latest state of an error owned outside the canvas, e.g. saving.
    /// `None` clears the slot only if it still shows an owner error.
    OwnerError(Option<String>),
    DismissError,
    /// Clear the error and re-run the integrity check
    Retry,
}

/// Which lists an action changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Change {
    pub nodes: bool,
    pub edges: bool,
}

impl Change {
    const NONE: Change = Change { nodes: false, edges: false };
    const NODES: Change = Change { nodes: true, edges: false };
    const EDGES: Change = Change { nodes: false, edges: true };

    pub fn is_empty(&self) -> bool {
        !self.nodes && !self.edges
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasStats {
    pub nodes: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasState {
    nodes: Vec<FlowNode<NodePayload>>,
    edges: Vec<FlowEdge>,
    selected: Option<RoadmapNode>,
    error: Option<String>,
    /// Whether `error` came from the owner rather than the integrity check
    owner_error: bool,
}

impl CanvasState {
    /// Map the owner's lists into widget form and attach presentation
    /// metadata (box style, bottom source handle, top target handle)
    pub fn new(nodes: &[RoadmapNode], edges: &[RoadmapEdge], config: &UiConfig) -> Self {
        let style: NodeStyle = config.node_style();
        let flow_nodes = to_flow_nodes(nodes)
            .into_iter()
            .map(|n| {
                n.with_style(style.clone())
                    .with_handles(HandlePosition::Bottom, HandlePosition::Top)
            })
            .collect();

        let error = summarize(&validate(nodes, edges));
        if let Some(message) = &error {
            tracing::warn!(%message, "roadmap loaded with integrity problems");
        }

        Self {
            nodes: flow_nodes,
            edges: to_flow_edges(edges),
            selected: None,
            error,
            owner_error: false,
        }
    }

    pub fn flow_nodes(&self) -> &[FlowNode<NodePayload>] {
        &self.nodes
    }

    pub fn flow_edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn selected(&self) -> Option<&RoadmapNode> {
        self.selected.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Full domain node list derived from the widget state
    pub fn roadmap_nodes(&self) -> Vec<RoadmapNode> {
        from_flow_nodes(&self.nodes)
    }

    /// Full domain edge list derived from the widget state
    pub fn roadmap_edges(&self) -> Vec<RoadmapEdge> {
        from_flow_edges(&self.edges)
    }

    pub fn stats(&self) -> CanvasStats {
        CanvasStats {
            nodes: self.nodes.len(),
            completed: self.nodes.iter().filter(|n| n.data.completed).count(),
        }
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut FlowNode<NodePayload>> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn apply(&mut self, action: CanvasAction) -> Change {
        match action {
            CanvasAction::Connect(connection) => {
                // Duplicate and cyclic connections are allowed
                add_edge(connection, true, &mut self.edges);
                Change::EDGES
            }
            CanvasAction::NodeClick(id) => {
                // Unknown ids leave the selection alone
                if let Some(node) = self.nodes.iter().find(|n| n.id == id) {
                    self.selected = Some(from_flow_node(node));
                }
                Change::NONE
            }
            CanvasAction::NodeDragStop { id, position } => {
                let Some(node) = self.node_mut(&id) else {
                    return Change::NONE;
                };
                node.position = position;
                if let Some(selected) = self.selected.as_mut().filter(|s| s.id == id) {
                    selected.position = from_flow_position(position);
                }
                Change::NODES
            }
            CanvasAction::ApplyNodeEdit(updated) => {
                let Some(node) = self.node_mut(&updated.id) else {
                    tracing::debug!(node = %updated.id, "edit for unknown node ignored");
                    return Change::NONE;
                };
                node.data = NodePayload::from(&updated);
                // Position stays whatever the canvas has
                let current = from_flow_node(node);
                self.selected = Some(current);
                Change::NODES
            }
            CanvasAction::RemoveNode(id) => {
                let before = self.nodes.len();
                self.nodes.retain(|n| n.id != id);
                if self.nodes.len() == before {
                    return Change::NONE;
                }
                for node in &mut self.nodes {
                    node.data.children.retain(|child| *child != id);
                }
                let edges_before = self.edges.len();
                self.edges.retain(|e| e.source != id && e.target != id);
                if self.selected.as_ref().is_some_and(|s| s.id == id) {
                    self.selected = None;
                }
                Change {
                    nodes: true,
                    edges: self.edges.len() != edges_before,
                }
            }
            CanvasAction::RemoveEdge(id) => {
                let before = self.edges.len();
                self.edges.retain(|e| e.id != id);
                if self.edges.len() == before {
                    Change::NONE
                } else {
                    Change::EDGES
                }
            }
            CanvasAction::ClearSelection => {
                self.selected = None;
                Change::NONE
            }
            CanvasAction::ReportError(message) => {
                self.error = Some(message);
                self.owner_error = false;
                Change::NONE
            }
            CanvasAction::OwnerError(Some(message)) => {
                self.error = Some(message);
                self.owner_error = true;
                Change::NONE
            }
            CanvasAction::OwnerError(None) => {
                if self.owner_error {
                    self.error = None;
                    self.owner_error = false;
                }
                Change::NONE
            }
            CanvasAction::DismissError => {
                self.error = None;
                self.owner_error = false;
                Change::NONE
            }
            CanvasAction::Retry => {
                self.error = summarize(&validate(&self.roadmap_nodes(), &self.roadmap_edges()));
                self.owner_error = false;
                Change::NONE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn node(id: &str, x: f64, y: f64) -> RoadmapNode {
        RoadmapNode {
            id: id.into(),
            title: format!("Step {}", id),
            description: format!("About {}", id),
            completed: false,
            completion_time: None,
            deadline: None,
            time_needed: 2.0,
            time_consumed: 0.0,
            children: vec![],
            position: Position { x, y },
        }
    }

    fn edge(id: &str, source: &str, target: &str) -> RoadmapEdge {
        RoadmapEdge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            edge_type: "default".into(),
            animated: false,
            label: Some("then".into()),
        }
    }

    fn state() -> CanvasState {
        let mut b = node("b", 100.0, 150.0);
        b.children = vec!["c".into()];
        CanvasState::new(
            &[node("a", 0.0, 0.0), b, node("c", 200.0, 300.0)],
            &[edge("e1", "a", "b"), edge("e2", "b", "c")],
            &UiConfig::default(),
        )
    }

    #[test]
    fn test_initialize_adds_presentation_only() {
        let s = state();
        let config = UiConfig::default();
        assert!(s.flow_nodes().iter().all(|n| n.style.width == config.node_width));
        assert!(s.flow_nodes().iter().all(|n| n.source_position == HandlePosition::Bottom));
        assert!(s.flow_nodes().iter().all(|n| n.target_position == HandlePosition::Top));
        assert_eq!(s.roadmap_nodes()[1].title, "Step b");
        assert_eq!(s.roadmap_edges()[0].label.as_deref(), Some("then"));
        assert_eq!(s.error(), None);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_drag_moves_only_that_node() {
        let mut s = state();
        let before = s.roadmap_nodes();

        let change = s.apply(CanvasAction::NodeDragStop {
            id: "b".into(),
            position: XYPosition::new(42.0, -7.0),
        });
        assert_eq!(change, Change { nodes: true, edges: false });

        let after = s.roadmap_nodes();
        assert_eq!(after[1].position, Position { x: 42.0, y: -7.0 });
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        let mut moved = before[1].clone();
        moved.position = Position { x: 42.0, y: -7.0 };
        assert_eq!(after[1], moved);
    }

    #[test]
    fn test_drag_unknown_node_is_noop() {
        let mut s = state();
        let change = s.apply(CanvasAction::NodeDragStop {
            id: "zzz".into(),
            position: XYPosition::new(1.0, 1.0),
        });
        assert!(change.is_empty());
    }

    #[test]
    fn test_click_selects_known_node_only() {
        let mut s = state();
        s.apply(CanvasAction::NodeClick("a".into()));
        assert_eq!(s.selected().map(|n| n.id.as_str()), Some("a"));

        s.apply(CanvasAction::NodeClick("missing".into()));
        assert_eq!(s.selected().map(|n| n.id.as_str()), Some("a"));

        s.apply(CanvasAction::ClearSelection);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_connect_appends_animated_edge_each_time() {
        let mut s = state();
        let conn = Connection { source: "a".into(), target: "c".into() };

        let change = s.apply(CanvasAction::Connect(conn.clone()));
        assert_eq!(change, Change { nodes: false, edges: true });
        s.apply(CanvasAction::Connect(conn));

        let edges = s.roadmap_edges();
        assert_eq!(edges.len(), 4);
        let new: Vec<_> = edges.iter().filter(|e| e.source == "a" && e.target == "c").collect();
        assert_eq!(new.len(), 2);
        assert!(new.iter().all(|e| e.animated));
        assert_ne!(new[0].id, new[1].id);
    }

    #[test]
    fn test_apply_edit_updates_payload_keeps_position() {
        let mut s = state();
        s.apply(CanvasAction::NodeDragStop {
            id: "a".into(),
            position: XYPosition::new(10.0, 20.0),
        });

        // panel still holds the pre-drag position
        let mut edited = node("a", 0.0, 0.0);
        edited.title = "Setup".into();
        edited.completed = true;
        edited.time_consumed = 1.25;

        let before = s.roadmap_nodes();
        let change = s.apply(CanvasAction::ApplyNodeEdit(edited));
        assert_eq!(change, Change { nodes: true, edges: false });

        let after = s.roadmap_nodes();
        assert_eq!(after[0].title, "Setup");
        assert!(after[0].completed);
        assert_eq!(after[0].time_consumed, 1.25);
        assert_eq!(after[0].position, Position { x: 10.0, y: 20.0 });
        assert_eq!(after[1..], before[1..]);

        let selected = s.selected().unwrap();
        assert_eq!(selected.title, "Setup");
        assert_eq!(selected.position, Position { x: 10.0, y: 20.0 });
    }

    #[test]
    fn test_edit_for_unknown_node_is_ignored() {
        let mut s = state();
        let change = s.apply(CanvasAction::ApplyNodeEdit(node("ghost", 0.0, 0.0)));
        assert!(change.is_empty());
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_remove_node_drops_edges_and_child_refs() {
        let mut s = state();
        s.apply(CanvasAction::NodeClick("c".into()));

        let change = s.apply(CanvasAction::RemoveNode("c".into()));
        assert_eq!(change, Change { nodes: true, edges: true });

        let nodes = s.roadmap_nodes();
        assert_eq!(nodes.len(), 2);
        assert!(nodes[1].children.is_empty());
        assert_eq!(s.roadmap_edges().len(), 1);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_remove_edge() {
        let mut s = state();
        assert_eq!(s.apply(CanvasAction::RemoveEdge("e1".into())), Change { nodes: false, edges: true });
        assert!(s.apply(CanvasAction::RemoveEdge("e1".into())).is_empty());
        assert_eq!(s.roadmap_edges().len(), 1);
    }

    #[test]
    fn test_integrity_problem_fills_error_and_retry_rechecks() {
        let mut s = CanvasState::new(
            &[node("a", 0.0, 0.0)],
            &[edge("e1", "a", "gone")],
            &UiConfig::default(),
        );
        assert!(s.error().unwrap().contains("missing node `gone`"));

        s.apply(CanvasAction::Retry);
        assert!(s.error().is_some());

        s.apply(CanvasAction::RemoveEdge("e1".into()));
        s.apply(CanvasAction::Retry);
        assert_eq!(s.error(), None);
    }

    #[test]
    fn test_error_slot() {
        let mut s = state();
        s.apply(CanvasAction::ReportError("save failed".into()));
        assert_eq!(s.error(), Some("save failed"));
        s.apply(CanvasAction::DismissError);
        assert_eq!(s.error(), None);
    }

    #[test]
    fn test_owner_error_clears_when_owner_recovers() {
        let mut s = state();
        s.apply(CanvasAction::OwnerError(Some("Failed to save roadmap".into())));
        assert_eq!(s.error(), Some("Failed to save roadmap"));

        s.apply(CanvasAction::OwnerError(None));
        assert_eq!(s.error(), None);
    }

    #[test]
    fn test_owner_recovery_keeps_integrity_error() {
        let mut s = CanvasState::new(
            &[node("a", 0.0, 0.0)],
            &[edge("e1", "a", "gone")],
            &UiConfig::default(),
        );
        let integrity = s.error().map(str::to_string);
        assert!(integrity.is_some());

        s.apply(CanvasAction::OwnerError(None));
        assert_eq!(s.error().map(str::to_string), integrity);
    }

    #[test]
    fn test_retry_replaces_owner_error_with_integrity_result() {
        let mut s = state();
        s.apply(CanvasAction::OwnerError(Some("Failed to save roadmap".into())));
        s.apply(CanvasAction::Retry);
        assert_eq!(s.error(), None);

        // A later recovery from the owner leaves a fresh integrity error alone
        s.apply(CanvasAction::ReportError("other".into()));
        s.apply(CanvasAction::OwnerError(None));
        assert_eq!(s.error(), Some("other"));
    }

    #[test]
    fn test_stats() {
        let mut s = state();
        let mut done = node("b", 0.0, 0.0);
        done.completed = true;
        s.apply(CanvasAction::ApplyNodeEdit(done));
        assert_eq!(s.stats(), CanvasStats { nodes: 3, completed: 1 });
    }
}

//! Roadmap ⇄ Flow Mapping
//!
//! Domain nodes travel through the flow widget inside `FlowNode::data`.
//! Presentation is drawn from the payload by the node renderer and never
//! written back into it, so every field survives a round trip.

use chrono::{DateTime, Utc};
use leptos_flow::{EdgeLabel, FlowEdge, FlowNode, XYPosition};
use serde::{Deserialize, Serialize};

use crate::models::{Position, RoadmapEdge, RoadmapNode};

/// Domain fields carried in a flow node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePayload {
    /// Node title
    pub label: String,
    pub description: String,
    pub completed: bool,
    pub completion_time: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    pub time_needed: f64,
    pub time_consumed: f64,
    pub children: Vec<String>,
}

impl From<&RoadmapNode> for NodePayload {
    fn from(node: &RoadmapNode) -> Self {
        Self {
            label: node.title.clone(),
            description: node.description.clone(),
            completed: node.completed,
            completion_time: node.completion_time,
            deadline: node.deadline,
            time_needed: node.time_needed,
            time_consumed: node.time_consumed,
            children: node.children.clone(),
        }
    }
}

pub fn to_flow_position(position: Position) -> XYPosition {
    XYPosition::new(position.x, position.y)
}

pub fn from_flow_position(position: XYPosition) -> Position {
    Position {
        x: position.x,
        y: position.y,
    }
}

pub fn to_flow_node(node: &RoadmapNode) -> FlowNode<NodePayload> {
    FlowNode::new(node.id.clone(), to_flow_position(node.position), NodePayload::from(node))
}

pub fn to_flow_nodes(nodes: &[RoadmapNode]) -> Vec<FlowNode<NodePayload>> {
    nodes.iter().map(to_flow_node).collect()
}

pub fn from_flow_node(node: &FlowNode<NodePayload>) -> RoadmapNode {
    let data = &node.data;
    RoadmapNode {
        id: node.id.clone(),
        title: data.label.clone(),
        description: data.description.clone(),
        completed: data.completed,
        completion_time: data.completion_time,
        deadline: data.deadline,
        time_needed: data.time_needed,
        time_consumed: data.time_consumed,
        children: data.children.clone(),
        position: from_flow_position(node.position),
    }
}

pub fn from_flow_nodes(nodes: &[FlowNode<NodePayload>]) -> Vec<RoadmapNode> {
    nodes.iter().map(from_flow_node).collect()
}

pub fn to_flow_edges(edges: &[RoadmapEdge]) -> Vec<FlowEdge> {
    edges
        .iter()
        .map(|edge| FlowEdge {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
            edge_type: edge.edge_type.clone(),
            animated: edge.animated,
            label: edge.label.clone().map(EdgeLabel::Text),
        })
        .collect()
}

/// Inverse of [`to_flow_edges`]. Only text labels are kept; rendered
/// label markup has no domain meaning.
pub fn from_flow_edges(edges: &[FlowEdge]) -> Vec<RoadmapEdge> {
    edges
        .iter()
        .map(|edge| RoadmapEdge {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
            edge_type: edge.edge_type.clone(),
            animated: edge.animated,
            label: edge.label.as_ref().and_then(|l| l.as_text()).map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_nodes() -> Vec<RoadmapNode> {
        vec![
            RoadmapNode {
                id: "intro".into(),
                title: "Introduction".into(),
                description: "Course overview".into(),
                completed: true,
                completion_time: Some(Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap()),
                deadline: Some(Utc.with_ymd_and_hms(2026, 9, 5, 0, 0, 0).unwrap()),
                time_needed: 2.0,
                time_consumed: 1.5,
                children: vec!["ownership".into()],
                position: Position { x: 0.0, y: 0.0 },
            },
            RoadmapNode {
                id: "ownership".into(),
                title: "Ownership".into(),
                description: String::new(),
                completed: false,
                completion_time: None,
                deadline: None,
                time_needed: 6.5,
                time_consumed: 0.0,
                children: vec![],
                position: Position { x: 120.0, y: 200.0 },
            },
        ]
    }

    #[test]
    fn test_node_roundtrip_preserves_fields() {
        let nodes = sample_nodes();
        let flow = to_flow_nodes(&nodes);

        assert_eq!(flow.len(), 2);
        assert_eq!(flow[0].id, "intro");
        assert_eq!(flow[1].position, XYPosition::new(120.0, 200.0));
        assert_eq!(flow[0].data.label, "Introduction");

        assert_eq!(from_flow_nodes(&flow), nodes);
    }

    #[test]
    fn test_presentation_changes_do_not_touch_payload() {
        let nodes = sample_nodes();
        let flow: Vec<_> = to_flow_nodes(&nodes)
            .into_iter()
            .map(|n| n.with_style(leptos_flow::NodeStyle { width: 10.0, height: 10.0, class: Some("x".into()) }))
            .collect();
        assert_eq!(from_flow_nodes(&flow), nodes);
    }

    #[test]
    fn test_edge_roundtrip() {
        let edges = vec![
            RoadmapEdge {
                id: "e1".into(),
                source: "intro".into(),
                target: "ownership".into(),
                edge_type: "default".into(),
                animated: true,
                label: Some("next".into()),
            },
            RoadmapEdge {
                id: "e2".into(),
                source: "ownership".into(),
                target: "intro".into(),
                edge_type: "step".into(),
                animated: false,
                label: None,
            },
        ];
        let flow = to_flow_edges(&edges);
        assert_eq!(flow[0].label, Some(EdgeLabel::Text("next".into())));
        assert_eq!(from_flow_edges(&flow), edges);
    }

    #[test]
    fn test_markup_label_is_dropped() {
        let flow = vec![FlowEdge {
            id: "e1".into(),
            source: "a".into(),
            target: "b".into(),
            edge_type: "default".into(),
            animated: false,
            label: Some(EdgeLabel::Markup("<b>next</b>".into())),
        }];
        let edges = from_flow_edges(&flow);
        assert_eq!(edges[0].label, None);
        assert_eq!(edges[0].source, "a");
    }
}

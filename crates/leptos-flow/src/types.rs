//! Flow Types
//!
//! Widget-side node, edge and connection representation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Edge type used when a connection does not specify one
pub const DEFAULT_EDGE_TYPE: &str = "default";

/// A point in canvas (world) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XYPosition {
    pub x: f64,
    pub y: f64,
}

impl XYPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Side of a node where an edge attaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlePosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl HandlePosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlePosition::Top => "top",
            HandlePosition::Bottom => "bottom",
            HandlePosition::Left => "left",
            HandlePosition::Right => "right",
        }
    }
}

/// Box styling applied to a rendered node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub width: f64,
    pub height: f64,
    /// Extra CSS class added next to `flow-node`
    #[serde(default)]
    pub class: Option<String>,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 40.0,
            class: None,
        }
    }
}

/// A node as the canvas sees it. `data` is the caller's payload and is
/// never touched by the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode<D> {
    pub id: String,
    pub position: XYPosition,
    pub data: D,
    #[serde(default)]
    pub style: NodeStyle,
    #[serde(default)]
    pub source_position: HandlePosition,
    #[serde(default = "default_target_position")]
    pub target_position: HandlePosition,
}

fn default_target_position() -> HandlePosition {
    HandlePosition::Top
}

impl<D> FlowNode<D> {
    pub fn new(id: impl Into<String>, position: XYPosition, data: D) -> Self {
        Self {
            id: id.into(),
            position,
            data,
            style: NodeStyle::default(),
            source_position: HandlePosition::Bottom,
            target_position: HandlePosition::Top,
        }
    }

    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_handles(mut self, source: HandlePosition, target: HandlePosition) -> Self {
        self.source_position = source;
        self.target_position = target;
        self
    }

    /// Attachment point of a handle in world coordinates
    pub fn anchor(&self, handle: HandlePosition) -> XYPosition {
        let XYPosition { x, y } = self.position;
        let (w, h) = (self.style.width, self.style.height);
        match handle {
            HandlePosition::Top => XYPosition::new(x + w / 2.0, y),
            HandlePosition::Bottom => XYPosition::new(x + w / 2.0, y + h),
            HandlePosition::Left => XYPosition::new(x, y + h / 2.0),
            HandlePosition::Right => XYPosition::new(x + w, y + h / 2.0),
        }
    }

    pub fn contains(&self, point: XYPosition) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.style.width
            && point.y >= self.position.y
            && point.y <= self.position.y + self.style.height
    }
}

/// Edge label. Only `Text` is plain data; `Markup` is presentation the
/// canvas renders as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum EdgeLabel {
    Text(String),
    Markup(String),
}

impl EdgeLabel {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EdgeLabel::Text(text) => Some(text),
            EdgeLabel::Markup(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    pub animated: bool,
    #[serde(default)]
    pub label: Option<EdgeLabel>,
}

/// A user-drawn link between two nodes, before it becomes an edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
}

/// Append an edge for `connection`. Existing edges between the same pair
/// are kept; every call yields a new edge with a fresh id.
pub fn add_edge<'a>(connection: Connection, animated: bool, edges: &'a mut Vec<FlowEdge>) -> &'a FlowEdge {
    let id = format!(
        "edge-{}-{}-{}",
        connection.source,
        connection.target,
        Uuid::new_v4().simple()
    );
    edges.push(FlowEdge {
        id,
        source: connection.source,
        target: connection.target,
        edge_type: DEFAULT_EDGE_TYPE.to_string(),
        animated,
        label: None,
    });
    &edges[edges.len() - 1]
}

/// Axis-aligned box around a set of nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: XYPosition,
    pub max: XYPosition,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

pub fn nodes_bounds<D>(nodes: &[FlowNode<D>]) -> Option<Bounds> {
    let first = nodes.first()?;
    let mut bounds = Bounds {
        min: first.position,
        max: XYPosition::new(
            first.position.x + first.style.width,
            first.position.y + first.style.height,
        ),
    };
    for node in &nodes[1..] {
        bounds.min.x = bounds.min.x.min(node.position.x);
        bounds.min.y = bounds.min.y.min(node.position.y);
        bounds.max.x = bounds.max.x.max(node.position.x + node.style.width);
        bounds.max.y = bounds.max.y.max(node.position.y + node.style.height);
    }
    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, x: f64, y: f64) -> FlowNode<()> {
        FlowNode::new(id, XYPosition::new(x, y), ()).with_style(NodeStyle {
            width: 100.0,
            height: 50.0,
            class: None,
        })
    }

    #[test]
    fn test_add_edge_appends_without_dedup() {
        let mut edges = Vec::new();
        let conn = Connection { source: "a".into(), target: "b".into() };
        add_edge(conn.clone(), true, &mut edges);
        add_edge(conn, true, &mut edges);

        assert_eq!(edges.len(), 2);
        assert_ne!(edges[0].id, edges[1].id);
        assert!(edges.iter().all(|e| e.animated && e.source == "a" && e.target == "b"));
        assert_eq!(edges[0].edge_type, DEFAULT_EDGE_TYPE);
    }

    #[test]
    fn test_anchor_positions() {
        let n = node("a", 10.0, 20.0);
        assert_eq!(n.anchor(HandlePosition::Top), XYPosition::new(60.0, 20.0));
        assert_eq!(n.anchor(HandlePosition::Bottom), XYPosition::new(60.0, 70.0));
        assert_eq!(n.anchor(HandlePosition::Left), XYPosition::new(10.0, 45.0));
        assert_eq!(n.anchor(HandlePosition::Right), XYPosition::new(110.0, 45.0));
    }

    #[test]
    fn test_contains() {
        let n = node("a", 0.0, 0.0);
        assert!(n.contains(XYPosition::new(50.0, 25.0)));
        assert!(!n.contains(XYPosition::new(101.0, 25.0)));
    }

    #[test]
    fn test_nodes_bounds() {
        assert!(nodes_bounds::<()>(&[]).is_none());
        let b = nodes_bounds(&[node("a", 0.0, 0.0), node("b", 200.0, -30.0)]).unwrap();
        assert_eq!(b.min, XYPosition::new(0.0, -30.0));
        assert_eq!(b.max, XYPosition::new(300.0, 50.0));
        assert_eq!(b.width(), 300.0);
        assert_eq!(b.height(), 80.0);
    }

    #[test]
    fn test_edge_label_text() {
        assert_eq!(EdgeLabel::Text("x".into()).as_text(), Some("x"));
        assert_eq!(EdgeLabel::Markup("<b>x</b>".into()).as_text(), None);
    }
}

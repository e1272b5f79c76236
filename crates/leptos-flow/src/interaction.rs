//! Pointer Interaction
//!
//! Tracks mouse gestures on the canvas. Uses a movement threshold to tell
//! a click from a drag, the same way for node drags and background pans.

use crate::types::{Connection, XYPosition};

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// What a finished gesture amounts to
#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    /// Pressed and released on a node without moving past the threshold
    NodeClick(String),
    /// A node was dragged and dropped at `position`
    NodeDragStop { id: String, position: XYPosition },
    /// A connection was drawn from one node onto another
    Connect(Connection),
    None,
}

#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Idle,
    /// Mousedown on a node, not yet dragging
    Pending { id: String, origin: XYPosition },
    Dragging { id: String, origin: XYPosition, position: XYPosition },
    Panning { viewport_x: f64, viewport_y: f64 },
    Connecting { source: String },
}

/// Gesture state machine for one canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PointerTracker {
    gesture: Gesture,
    start_x: f64,
    start_y: f64,
    /// Current pointer position in screen coordinates (for the connection line)
    pub cursor: (f64, f64),
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            gesture: Gesture::Idle,
            start_x: 0.0,
            start_y: 0.0,
            cursor: (0.0, 0.0),
        }
    }
}

impl PointerTracker {
    /// Mousedown on a node body
    pub fn press_node(&mut self, id: &str, node_position: XYPosition, client_x: f64, client_y: f64) {
        self.gesture = Gesture::Pending {
            id: id.to_string(),
            origin: node_position,
        };
        self.start_x = client_x;
        self.start_y = client_y;
        self.cursor = (client_x, client_y);
    }

    /// Mousedown on a node's source handle
    pub fn press_handle(&mut self, id: &str, client_x: f64, client_y: f64) {
        self.gesture = Gesture::Connecting { source: id.to_string() };
        self.start_x = client_x;
        self.start_y = client_y;
        self.cursor = (client_x, client_y);
    }

    /// Mousedown on empty canvas
    pub fn press_background(&mut self, viewport_x: f64, viewport_y: f64, client_x: f64, client_y: f64) {
        self.gesture = Gesture::Panning { viewport_x, viewport_y };
        self.start_x = client_x;
        self.start_y = client_y;
        self.cursor = (client_x, client_y);
    }

    /// Pointer moved. Returns the new viewport translation while panning.
    pub fn motion(&mut self, client_x: f64, client_y: f64, zoom: f64) -> Option<(f64, f64)> {
        self.cursor = (client_x, client_y);
        let dx = client_x - self.start_x;
        let dy = client_y - self.start_y;

        match &mut self.gesture {
            Gesture::Pending { id, origin } => {
                if dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX {
                    let position = XYPosition::new(origin.x + dx / zoom, origin.y + dy / zoom);
                    self.gesture = Gesture::Dragging {
                        id: std::mem::take(id),
                        origin: *origin,
                        position,
                    };
                }
                None
            }
            Gesture::Dragging { origin, position, .. } => {
                *position = XYPosition::new(origin.x + dx / zoom, origin.y + dy / zoom);
                None
            }
            Gesture::Panning { viewport_x, viewport_y } => Some((*viewport_x + dx, *viewport_y + dy)),
            Gesture::Connecting { .. } | Gesture::Idle => None,
        }
    }

    /// Position of the node currently being dragged, if any
    pub fn drag_preview(&self) -> Option<(&str, XYPosition)> {
        match &self.gesture {
            Gesture::Dragging { id, position, .. } => Some((id.as_str(), *position)),
            _ => None,
        }
    }

    /// Source node of an in-progress connection
    pub fn connecting_from(&self) -> Option<&str> {
        match &self.gesture {
            Gesture::Connecting { source } => Some(source.as_str()),
            _ => None,
        }
    }

    /// Mouseup. `over_node` is the node under the pointer, if any.
    pub fn release(&mut self, over_node: Option<&str>) -> PointerOutcome {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        match gesture {
            Gesture::Pending { id, .. } => PointerOutcome::NodeClick(id),
            Gesture::Dragging { id, position, .. } => PointerOutcome::NodeDragStop { id, position },
            Gesture::Connecting { source } => match over_node {
                Some(target) if target != source => PointerOutcome::Connect(Connection {
                    source,
                    target: target.to_string(),
                }),
                _ => PointerOutcome::None,
            },
            Gesture::Panning { .. } | Gesture::Idle => PointerOutcome::None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_movement_is_click() {
        let mut t = PointerTracker::default();
        t.press_node("a", XYPosition::new(0.0, 0.0), 100.0, 100.0);
        t.motion(103.0, 102.0, 1.0);
        assert!(t.drag_preview().is_none());
        assert_eq!(t.release(Some("a")), PointerOutcome::NodeClick("a".into()));
        assert!(t.is_idle());
    }

    #[test]
    fn test_drag_scales_with_zoom() {
        let mut t = PointerTracker::default();
        t.press_node("a", XYPosition::new(10.0, 10.0), 0.0, 0.0);
        t.motion(20.0, 40.0, 0.5);
        assert_eq!(t.drag_preview(), Some(("a", XYPosition::new(50.0, 90.0))));
        assert_eq!(
            t.release(None),
            PointerOutcome::NodeDragStop { id: "a".into(), position: XYPosition::new(50.0, 90.0) }
        );
    }

    #[test]
    fn test_connect_onto_other_node() {
        let mut t = PointerTracker::default();
        t.press_handle("a", 0.0, 0.0);
        assert_eq!(t.connecting_from(), Some("a"));
        t.motion(50.0, 50.0, 1.0);
        assert_eq!(
            t.release(Some("b")),
            PointerOutcome::Connect(Connection { source: "a".into(), target: "b".into() })
        );
    }

    #[test]
    fn test_connect_onto_self_or_nothing_is_ignored() {
        let mut t = PointerTracker::default();
        t.press_handle("a", 0.0, 0.0);
        assert_eq!(t.release(Some("a")), PointerOutcome::None);
        t.press_handle("a", 0.0, 0.0);
        assert_eq!(t.release(None), PointerOutcome::None);
    }

    #[test]
    fn test_pan_returns_translation() {
        let mut t = PointerTracker::default();
        t.press_background(10.0, 20.0, 100.0, 100.0);
        assert_eq!(t.motion(130.0, 90.0, 2.0), Some((40.0, 10.0)));
        assert_eq!(t.release(None), PointerOutcome::None);
    }
}

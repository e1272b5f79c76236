//! Edge Geometry
//!
//! Bezier paths between node handles.

use crate::types::{HandlePosition, XYPosition};

/// Minimum control-point offset so short edges still curve
const MIN_CONTROL_OFFSET: f64 = 20.0;

/// Geometry of a rendered edge
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    /// SVG path data
    pub d: String,
    /// Midpoint of the curve, used to place the label
    pub label_at: XYPosition,
}

fn control_point(anchor: XYPosition, handle: HandlePosition, offset: f64) -> XYPosition {
    match handle {
        HandlePosition::Top => XYPosition::new(anchor.x, anchor.y - offset),
        HandlePosition::Bottom => XYPosition::new(anchor.x, anchor.y + offset),
        HandlePosition::Left => XYPosition::new(anchor.x - offset, anchor.y),
        HandlePosition::Right => XYPosition::new(anchor.x + offset, anchor.y),
    }
}

/// Cubic bezier leaving `source` through `source_handle` and entering
/// `target` through `target_handle`. `curvature` scales the control
/// offsets relative to the distance between the anchors.
pub fn bezier_path(
    source: XYPosition,
    source_handle: HandlePosition,
    target: XYPosition,
    target_handle: HandlePosition,
    curvature: f64,
) -> EdgePath {
    let distance = ((target.x - source.x).powi(2) + (target.y - source.y).powi(2)).sqrt();
    let offset = (distance * curvature / 2.0).max(MIN_CONTROL_OFFSET);
    let c1 = control_point(source, source_handle, offset);
    let c2 = control_point(target, target_handle, offset);

    // B(0.5) = (P0 + 3*P1 + 3*P2 + P3) / 8
    let label_at = XYPosition::new(
        (source.x + 3.0 * c1.x + 3.0 * c2.x + target.x) / 8.0,
        (source.y + 3.0 * c1.y + 3.0 * c2.y + target.y) / 8.0,
    );

    EdgePath {
        d: format!(
            "M {},{} C {},{} {},{} {},{}",
            source.x, source.y, c1.x, c1.y, c2.x, c2.y, target.x, target.y
        ),
        label_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_edge() {
        let path = bezier_path(
            XYPosition::new(0.0, 0.0),
            HandlePosition::Bottom,
            XYPosition::new(0.0, 200.0),
            HandlePosition::Top,
            0.5,
        );
        assert_eq!(path.d, "M 0,0 C 0,50 0,150 0,200");
        assert_eq!(path.label_at, XYPosition::new(0.0, 100.0));
    }

    #[test]
    fn test_short_edge_uses_minimum_offset() {
        let path = bezier_path(
            XYPosition::new(0.0, 0.0),
            HandlePosition::Bottom,
            XYPosition::new(0.0, 10.0),
            HandlePosition::Top,
            0.5,
        );
        assert_eq!(path.d, "M 0,0 C 0,20 0,-10 0,10");
    }
}

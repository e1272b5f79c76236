//! Leptos Flow
//!
//! A small node/edge diagram canvas for Leptos: positioned node boxes,
//! bezier edges, drag to move, drag from a handle to connect, wheel zoom
//! and background pan.
//!
//! The canvas holds no copy of the graph. Callers own the node and edge
//! lists and apply the gestures reported through the callbacks.

mod canvas;
mod edge;
mod interaction;
mod types;
mod viewport;

pub use canvas::{FlowCanvas, FlowOptions};
pub use edge::{bezier_path, EdgePath};
pub use interaction::{PointerOutcome, PointerTracker, DRAG_THRESHOLD_PX};
pub use types::{
    add_edge, nodes_bounds, Bounds, Connection, EdgeLabel, FlowEdge, FlowNode, HandlePosition,
    NodeStyle, XYPosition, DEFAULT_EDGE_TYPE,
};
pub use viewport::{Viewport, ZoomLimits};

//! Roadmap
//!
//! Domain side of the roadmap canvas: mapping to and from the flow widget,
//! the canvas state reducer, details-panel edits, integrity checks and
//! pending saves.

pub mod controller;
pub mod edit;
pub mod mapper;
pub mod save;
pub mod validate;

pub use controller::{CanvasAction, CanvasState, CanvasStats, Change};
pub use edit::{apply_edit, format_deadline, parse_deadline, NodeEdit};
pub use mapper::{from_flow_edges, from_flow_nodes, to_flow_edges, to_flow_nodes, NodePayload};
pub use save::{PendingSave, SaveQueue};
pub use validate::{summarize, validate, RoadmapIssue};

//! Roadmap Canvas Component
//!
//! Adapts the owner's roadmap to the flow canvas. Widget-local state lives
//! in one `CanvasState`; every gesture and panel edit is dispatched through
//! its reducer, and changed lists are handed to the owner's callbacks in
//! the same turn.

use leptos::prelude::*;
use leptos_flow::{Connection, FlowCanvas, FlowNode, XYPosition};

use crate::components::{NodeDetailsPanel, RoadmapError};
use crate::context::use_app_context;
use crate::models::{RoadmapEdge, RoadmapNode};
use crate::roadmap::{CanvasAction, CanvasState, Change, NodePayload};

/// Inside of a node box: title plus hours badge, drawn from the payload
fn render_roadmap_node(node: FlowNode<NodePayload>) -> AnyView {
    let class = if node.data.completed { "roadmap-node-body completed" } else { "roadmap-node-body" };
    view! {
        <div class=class>
            <div class="roadmap-node-title">{node.data.label}</div>
            <div class="roadmap-node-hours">{format!("{}h", node.data.time_needed)}</div>
        </div>
    }
    .into_any()
}

#[component]
pub fn RoadmapCanvas(
    /// Read once at mount
    nodes: Vec<RoadmapNode>,
    /// Read once at mount
    edges: Vec<RoadmapEdge>,
    #[prop(into)] on_update_nodes: Callback<Vec<RoadmapNode>>,
    #[prop(into)] on_update_edges: Callback<Vec<RoadmapEdge>>,
    /// Failures from the owner (e.g. saving) shown in the error view.
    /// Going back to `None` clears them.
    #[prop(optional, into)]
    external_error: Option<Signal<Option<String>>>,
    /// Run after Retry so the owner can redo its failed work
    #[prop(optional, into)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let state = RwSignal::new(CanvasState::new(&nodes, &edges, &config));

    let dispatch = move |action: CanvasAction| {
        let mut change = Change::default();
        state.update(|s| change = s.apply(action));
        if change.nodes {
            on_update_nodes.run(state.with_untracked(|s| s.roadmap_nodes()));
        }
        if change.edges {
            on_update_edges.run(state.with_untracked(|s| s.roadmap_edges()));
        }
    };

    if let Some(external_error) = external_error {
        Effect::new(move |_| {
            dispatch(CanvasAction::OwnerError(external_error.get()));
        });
    }

    let flow_nodes = Memo::new(move |_| state.with(|s| s.flow_nodes().to_vec()));
    let flow_edges = Memo::new(move |_| state.with(|s| s.flow_edges().to_vec()));
    let selected = Memo::new(move |_| state.with(|s| s.selected().cloned()));
    // Panel is rebuilt only when a different node gets selected
    let selected_id = Memo::new(move |_| selected.with(|n| n.as_ref().map(|n| n.id.clone())));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));
    let stats = Memo::new(move |_| state.with(|s| s.stats()));

    view! {
        <div class="roadmap-layout" style="display: flex; height: calc(100vh - 4rem);">
            <div class="roadmap-canvas" style="flex: 1; position: relative;">
                <FlowCanvas
                    nodes=flow_nodes
                    edges=flow_edges
                    render_node=Callback::new(render_roadmap_node)
                    on_connect=Callback::new(move |connection: Connection| dispatch(CanvasAction::Connect(connection)))
                    on_node_click=Callback::new(move |id: String| dispatch(CanvasAction::NodeClick(id)))
                    on_node_drag_stop=Callback::new(move |(id, position): (String, XYPosition)| {
                        dispatch(CanvasAction::NodeDragStop { id, position })
                    })
                    on_node_delete=Callback::new(move |id: String| dispatch(CanvasAction::RemoveNode(id)))
                    on_edge_delete=Callback::new(move |id: String| dispatch(CanvasAction::RemoveEdge(id)))
                    options=config.flow_options()
                >
                    <div class="flow-panel top-left">
                        <p>{move || format!("Nodes: {}", stats.get().nodes)}</p>
                        <p>{move || format!("Completed: {}", stats.get().completed)}</p>
                    </div>
                </FlowCanvas>
            </div>

            {move || selected_id.get().map(|_| view! {
                <NodeDetailsPanel
                    node=selected
                    on_close=Callback::new(move |_: ()| dispatch(CanvasAction::ClearSelection))
                    on_update=Callback::new(move |updated: RoadmapNode| dispatch(CanvasAction::ApplyNodeEdit(updated)))
                    is_mobile=ctx.is_mobile
                />
            })}

            {move || error.get().map(|message| view! {
                <RoadmapError
                    error=message
                    on_retry=Callback::new(move |_: ()| {
                        dispatch(CanvasAction::Retry);
                        if let Some(on_retry) = on_retry {
                            on_retry.run(());
                        }
                    })
                    on_dismiss=Callback::new(move |_: ()| dispatch(CanvasAction::DismissError))
                />
            })}
        </div>
    }
}

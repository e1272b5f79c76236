//! Flow Canvas Component
//!
//! Renders nodes as positioned boxes and edges as SVG curves inside a
//! pannable, zoomable pane. The canvas never mutates the nodes or edges it
//! is given; it reports gestures through callbacks and the owner decides
//! what changes.

use leptos::prelude::*;

use crate::edge::bezier_path;
use crate::interaction::{PointerOutcome, PointerTracker};
use crate::types::{nodes_bounds, Connection, FlowEdge, FlowNode, XYPosition};
use crate::viewport::{Viewport, ZoomLimits};

/// Zoom step for the control buttons and the mouse wheel
const ZOOM_STEP: f64 = 1.1;

/// Canvas behaviour options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowOptions {
    pub limits: ZoomLimits,
    /// Bezier curvature for edges
    pub curvature: f64,
    /// Fit all nodes into view once the canvas is mounted
    pub fit_view: bool,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            limits: ZoomLimits::default(),
            curvature: 0.25,
            fit_view: true,
        }
    }
}

fn position_with_preview<D>(node: &FlowNode<D>, tracker: &PointerTracker) -> XYPosition {
    match tracker.drag_preview() {
        Some((id, position)) if id == node.id => position,
        _ => node.position,
    }
}

#[component]
pub fn FlowCanvas<D>(
    #[prop(into)] nodes: Signal<Vec<FlowNode<D>>>,
    #[prop(into)] edges: Signal<Vec<FlowEdge>>,
    /// Draws the inside of a node box from the node and its payload
    render_node: Callback<FlowNode<D>, AnyView>,
    #[prop(into)] on_connect: Callback<Connection>,
    #[prop(into)] on_node_click: Callback<String>,
    #[prop(into)] on_node_drag_stop: Callback<(String, XYPosition)>,
    #[prop(optional, into)] on_node_delete: Option<Callback<String>>,
    #[prop(optional, into)] on_edge_delete: Option<Callback<String>>,
    #[prop(optional)] options: FlowOptions,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView
where
    D: Clone + Send + Sync + 'static,
{
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let viewport = RwSignal::new(Viewport::default());
    let tracker = RwSignal::new(PointerTracker::default());
    let focused_node = RwSignal::new(None::<String>);
    let selected_edge = RwSignal::new(None::<String>);
    let fitted = RwSignal::new(false);

    // Client coordinates relative to the canvas container
    let local_point = move |ev: &web_sys::MouseEvent| -> (f64, f64) {
        match container_ref.get_untracked() {
            Some(el) => {
                let rect = el.get_bounding_client_rect();
                (ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top())
            }
            None => (ev.client_x() as f64, ev.client_y() as f64),
        }
    };

    let fit = move || {
        let Some(el) = container_ref.get_untracked() else { return };
        let rect = el.get_bounding_client_rect();
        if let Some(bounds) = nodes.with_untracked(|ns| nodes_bounds(ns.as_slice())) {
            viewport.set(Viewport::fit(bounds, rect.width(), rect.height(), &options.limits));
        }
    };

    Effect::new(move |_| {
        if options.fit_view && container_ref.get().is_some() && !fitted.get_untracked() {
            fitted.set(true);
            fit();
        }
    });

    let finish = move |over_node: Option<String>| {
        let mut outcome = PointerOutcome::None;
        tracker.update(|t| {
            if !t.is_idle() {
                outcome = t.release(over_node.as_deref());
            }
        });
        match outcome {
            PointerOutcome::NodeClick(id) => {
                tracing::debug!(node = %id, "node click");
                focused_node.set(Some(id.clone()));
                selected_edge.set(None);
                on_node_click.run(id);
            }
            PointerOutcome::NodeDragStop { id, position } => {
                tracing::debug!(node = %id, x = position.x, y = position.y, "node drag stop");
                on_node_drag_stop.run((id, position));
            }
            PointerOutcome::Connect(connection) => {
                tracing::debug!(source = %connection.source, target = %connection.target, "connect");
                on_connect.run(connection);
            }
            PointerOutcome::None => {}
        }
    };

    let on_background_down = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let (x, y) = local_point(&ev);
        let vp = viewport.get_untracked();
        tracker.update(|t| t.press_background(vp.x, vp.y, x, y));
        focused_node.set(None);
        selected_edge.set(None);
    };

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        if tracker.with_untracked(|t| t.is_idle()) {
            return;
        }
        let (x, y) = local_point(&ev);
        let zoom = viewport.get_untracked().zoom;
        let mut pan = None;
        tracker.update(|t| pan = t.motion(x, y, zoom));
        if let Some((px, py)) = pan {
            viewport.update(|vp| {
                vp.x = px;
                vp.y = py;
            });
        }
    };

    let on_wheel = move |ev: web_sys::WheelEvent| {
        ev.prevent_default();
        let (x, y) = local_point(&*ev);
        let factor = if ev.delta_y() < 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
        viewport.update(|vp| vp.zoom_at(factor, x, y, &options.limits));
    };

    let on_key_down = move |ev: web_sys::KeyboardEvent| {
        if !matches!(ev.key().as_str(), "Delete" | "Backspace") {
            return;
        }
        if let Some(edge_id) = selected_edge.get_untracked() {
            if let Some(cb) = on_edge_delete {
                selected_edge.set(None);
                cb.run(edge_id);
            }
        } else if let Some(node_id) = focused_node.get_untracked() {
            if let Some(cb) = on_node_delete {
                focused_node.set(None);
                cb.run(node_id);
            }
        }
    };

    let zoom_center = move |factor: f64| {
        let (w, h) = container_ref
            .get_untracked()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                (rect.width(), rect.height())
            })
            .unwrap_or((0.0, 0.0));
        viewport.update(|vp| vp.zoom_at(factor, w / 2.0, h / 2.0, &options.limits));
    };

    let edge_layer = move || {
        let current_tracker = tracker.get();
        nodes.with(|ns| {
            let find = |id: &str| ns.iter().find(|n| n.id == id);
            edges
                .get()
                .into_iter()
                .filter_map(|edge| {
                    // Dangling endpoints are not drawn
                    let source = find(&edge.source)?;
                    let target = find(&edge.target)?;
                    let mut source = source.clone();
                    let mut target = target.clone();
                    source.position = position_with_preview(&source, &current_tracker);
                    target.position = position_with_preview(&target, &current_tracker);

                    let path = bezier_path(
                        source.anchor(source.source_position),
                        source.source_position,
                        target.anchor(target.target_position),
                        target.target_position,
                        options.curvature,
                    );
                    let id = edge.id.clone();
                    let selected_id = edge.id.clone();
                    let class = move || {
                        let mut class = String::from("flow-edge");
                        if edge.animated {
                            class.push_str(" animated");
                        }
                        if selected_edge.get().as_deref() == Some(selected_id.as_str()) {
                            class.push_str(" selected");
                        }
                        class
                    };
                    let label = edge.label.clone().map(|label| {
                        let text = match label {
                            crate::types::EdgeLabel::Text(text) => text,
                            crate::types::EdgeLabel::Markup(markup) => markup,
                        };
                        view! {
                            <text class="flow-edge-label" x=path.label_at.x.to_string() y=path.label_at.y.to_string() text-anchor="middle">
                                {text}
                            </text>
                        }
                    });
                    Some(view! {
                        <g>
                            <path
                                class=class
                                d=path.d
                                fill="none"
                                on:mousedown=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                                on:click=move |_| {
                                    focused_node.set(None);
                                    selected_edge.set(Some(id.clone()));
                                }
                            />
                            {label}
                        </g>
                    })
                })
                .collect_view()
        })
    };

    // Line following the pointer while a connection is being drawn
    let connection_line = move || {
        let t = tracker.get();
        let source_id = t.connecting_from()?.to_string();
        let source = nodes.with(|ns| ns.iter().find(|n| n.id == source_id).cloned())?;
        let from = source.anchor(source.source_position);
        let to = viewport.get().screen_to_world(t.cursor.0, t.cursor.1);
        Some(view! {
            <path
                class="flow-connection-line"
                fill="none"
                d=format!("M {},{} L {},{}", from.x, from.y, to.x, to.y)
            />
        })
    };

    let node_layer = move || {
        nodes
            .get()
            .into_iter()
            .map(|node| {
                let id = node.id.clone();
                let style_id = node.id.clone();
                let class_id = node.id.clone();
                let down_id = node.id.clone();
                let handle_id = node.id.clone();
                let up_id = node.id.clone();
                let origin = node.position;
                let size = (node.style.width, node.style.height);
                let extra_class = node.style.class.clone().unwrap_or_default();
                let source_handle = node.source_position.as_str();
                let target_handle = node.target_position.as_str();

                let style = move || {
                    let position = tracker.with(|t| match t.drag_preview() {
                        Some((dragged, position)) if dragged == style_id => position,
                        _ => origin,
                    });
                    format!(
                        "position: absolute; left: {}px; top: {}px; width: {}px; min-height: {}px;",
                        position.x, position.y, size.0, size.1
                    )
                };
                let class = move || {
                    let mut class = format!("flow-node {}", extra_class);
                    if focused_node.get().as_deref() == Some(class_id.as_str()) {
                        class.push_str(" selected");
                    }
                    class
                };
                let content = render_node.run(node);

                view! {
                    <div
                        class=class
                        style=style
                        data-id=id
                        on:mousedown=move |ev: web_sys::MouseEvent| {
                            if ev.button() != 0 {
                                return;
                            }
                            ev.stop_propagation();
                            let (x, y) = local_point(&ev);
                            tracker.update(|t| t.press_node(&down_id, origin, x, y));
                        }
                        on:mouseup=move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            finish(Some(up_id.clone()));
                        }
                    >
                        <div class=format!("flow-handle target {}", target_handle)></div>
                        {content}
                        <div
                            class=format!("flow-handle source {}", source_handle)
                            on:mousedown=move |ev: web_sys::MouseEvent| {
                                if ev.button() != 0 {
                                    return;
                                }
                                ev.stop_propagation();
                                let (x, y) = local_point(&ev);
                                tracker.update(|t| t.press_handle(&handle_id, x, y));
                            }
                        ></div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="flow-canvas flow-background"
            node_ref=container_ref
            tabindex="0"
            style="position: relative; width: 100%; height: 100%; overflow: hidden; outline: none;"
            on:mousedown=on_background_down
            on:mousemove=on_mouse_move
            on:mouseup=move |_| finish(None)
            on:mouseleave=move |_| finish(None)
            on:wheel=on_wheel
            on:keydown=on_key_down
        >
            <div class="flow-pane" style=move || viewport.get().transform_css()>
                <svg class="flow-edges" style="position: absolute; overflow: visible; width: 1px; height: 1px;">
                    {edge_layer}
                    {connection_line}
                </svg>
                {node_layer}
            </div>
            <div class="flow-controls">
                <button type="button" title="Zoom in" on:click=move |_| zoom_center(ZOOM_STEP)>"+"</button>
                <button type="button" title="Zoom out" on:click=move |_| zoom_center(1.0 / ZOOM_STEP)>"−"</button>
                <button type="button" title="Fit view" on:click=move |_| fit()>"⤢"</button>
            </div>
            {children.map(|children| children())}
        </div>
    }
}

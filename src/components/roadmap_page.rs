//! Roadmap Page
//!
//! Owns the course's canonical roadmap. Loads it once, mounts the canvas,
//! and saves after the canvas reports changes. A save still pending when
//! the page goes away is written immediately.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::RoadmapCanvas;
use crate::context::use_app_context;
use crate::models::{Roadmap, RoadmapEdge, RoadmapNode};
use crate::roadmap::{PendingSave, SaveQueue};
use crate::store::{store_show_toast, use_app_store, AppStateStoreFields, ToastKind};

/// Write one snapshot. `save_error` may already be disposed when this
/// finishes, so it is only ever touched with `try_set`.
async fn write_roadmap(pending: PendingSave, save_error: RwSignal<Option<String>>) -> bool {
    let PendingSave { course_id, roadmap } = pending;
    match commands::save_roadmap(&course_id, &roadmap).await {
        Ok(()) => {
            tracing::debug!(%course_id, "roadmap saved");
            save_error.try_set(None);
            true
        }
        Err(err) => {
            tracing::warn!(%course_id, %err, "roadmap save failed");
            save_error.try_set(Some(format!("Failed to save roadmap: {err}")));
            false
        }
    }
}

#[component]
pub fn RoadmapPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let debounce = ctx.config().save_debounce_ms;

    let nodes = RwSignal::new(Vec::<RoadmapNode>::new());
    let edges = RwSignal::new(Vec::<RoadmapEdge>::new());
    let (loaded, set_loaded) = signal(false);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let save_error = RwSignal::new(None::<String>);
    // Reference counted so timers can still reach it after unmount
    let queue = ArcRwSignal::new(SaveQueue::default());

    Effect::new(move |_| {
        let Some(course_id) = store.course_id().get() else {
            set_load_error.set(Some("No course selected".to_string()));
            return;
        };
        set_loaded.set(false);
        spawn_local(async move {
            match commands::load_roadmap(&course_id).await {
                Ok(roadmap) => {
                    tracing::debug!(
                        nodes = roadmap.nodes.len(),
                        edges = roadmap.edges.len(),
                        "roadmap loaded"
                    );
                    nodes.set(roadmap.nodes);
                    edges.set(roadmap.edges);
                    set_load_error.set(None);
                    set_loaded.set(true);
                }
                Err(err) => set_load_error.set(Some(err.to_string())),
            }
        });
    });

    let schedule_save = {
        let queue = queue.clone();
        move || {
            let Some(course_id) = store.course_id().get_untracked() else {
                return;
            };
            // Snapshot now, while the page's signals are alive
            let roadmap = Roadmap {
                nodes: nodes.get_untracked(),
                edges: edges.get_untracked(),
            };
            let Some(ticket) = queue.try_update(|q| q.schedule(course_id, roadmap)) else {
                return;
            };
            let queue = queue.clone();
            spawn_local(async move {
                TimeoutFuture::new(debounce).await;
                if let Some(pending) = queue.try_update(|q| q.take_if_current(ticket)).flatten() {
                    write_roadmap(pending, save_error).await;
                }
            });
        }
    };

    on_cleanup({
        let queue = queue.clone();
        move || {
            let Some(pending) = queue.try_update(|q| q.flush()).flatten() else {
                return;
            };
            tracing::debug!(course_id = %pending.course_id, "flushing roadmap save on leave");
            spawn_local(async move {
                if !write_roadmap(pending, save_error).await {
                    store_show_toast(&store, ToastKind::Error, "Failed to save roadmap");
                }
            });
        }
    });

    let on_update_nodes = Callback::new({
        let schedule_save = schedule_save.clone();
        move |updated: Vec<RoadmapNode>| {
            nodes.set(updated);
            schedule_save();
        }
    });
    let on_update_edges = Callback::new({
        let schedule_save = schedule_save.clone();
        move |updated: Vec<RoadmapEdge>| {
            edges.set(updated);
            schedule_save();
        }
    });
    // Retrying a failed save writes the current arrays again
    let on_retry = Callback::new(move |_: ()| {
        if save_error.get_untracked().is_some() {
            schedule_save();
        }
    });
    let save_error_signal: Signal<Option<String>> = save_error.into();

    view! {
        <div class="roadmap-page">
            {move || load_error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <Show
                when=move || loaded.get()
                fallback=move || view! { <p class="loading">"Loading roadmap..."</p> }
            >
                // Canvas reads the arrays once; it reports changes back
                <RoadmapCanvas
                    nodes=nodes.get_untracked()
                    edges=edges.get_untracked()
                    on_update_nodes=on_update_nodes
                    on_update_edges=on_update_edges
                    on_retry=on_retry
                    external_error=save_error_signal
                />
            </Show>
        </div>
    }
}

//! Node Details Panel
//!
//! Shows the selected roadmap node and sends edited copies back to the
//! canvas. Inputs commit on `change` so each edit is one reducer action.

use chrono::Utc;
use leptos::prelude::*;

use crate::models::RoadmapNode;
use crate::roadmap::{apply_edit, format_deadline, NodeEdit};

#[component]
pub fn NodeDetailsPanel(
    #[prop(into)] node: Signal<Option<RoadmapNode>>,
    #[prop(into)] on_update: Callback<RoadmapNode>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] is_mobile: Signal<bool>,
) -> impl IntoView {
    let edit = move |change: NodeEdit| {
        if let Some(current) = node.get_untracked() {
            on_update.run(apply_edit(&current, change, Utc::now()));
        }
    };

    let field = move |read: fn(&RoadmapNode) -> String| {
        move || node.with(|n| n.as_ref().map(read).unwrap_or_default())
    };

    let class = move || {
        if is_mobile.get() {
            "details-panel bottom-sheet"
        } else {
            "details-panel side-column"
        }
    };

    view! {
        <aside class=class>
            <header class="details-header">
                <h3>"Node details"</h3>
                <button class="close-btn" title="Close" on:click=move |_| on_close.run(())>"×"</button>
            </header>

            <label for="node-title">"Title"</label>
            <input
                id="node-title"
                type="text"
                prop:value=field(|n| n.title.clone())
                on:change=move |ev| edit(NodeEdit::Title(event_target_value(&ev)))
            />

            <label for="node-description">"Description"</label>
            <textarea
                id="node-description"
                rows="4"
                prop:value=field(|n| n.description.clone())
                on:change=move |ev| edit(NodeEdit::Description(event_target_value(&ev)))
            />

            <label class="checkbox-row">
                <input
                    type="checkbox"
                    prop:checked=move || node.with(|n| n.as_ref().is_some_and(|n| n.completed))
                    on:change=move |ev| edit(NodeEdit::Completed(event_target_checked(&ev)))
                />
                "Completed"
            </label>
            {move || node.with(|n| {
                n.as_ref().and_then(|n| n.completion_time).map(|at| view! {
                    <p class="completion-time">{format!("Completed at {}", at.format("%Y-%m-%d %H:%M"))}</p>
                })
            })}

            <label for="node-deadline">"Deadline"</label>
            <input
                id="node-deadline"
                type="datetime-local"
                prop:value=field(|n| format_deadline(n.deadline))
                on:change=move |ev| edit(NodeEdit::Deadline(event_target_value(&ev)))
            />

            <label for="node-time-needed">"Time needed (h)"</label>
            <input
                id="node-time-needed"
                type="number"
                min="0"
                step="0.5"
                prop:value=field(|n| n.time_needed.to_string())
                on:change=move |ev| edit(NodeEdit::TimeNeeded(event_target_value(&ev)))
            />

            <label for="node-time-consumed">"Time consumed (h)"</label>
            <input
                id="node-time-consumed"
                type="number"
                min="0"
                step="0.5"
                prop:value=field(|n| n.time_consumed.to_string())
                on:change=move |ev| edit(NodeEdit::TimeConsumed(event_target_value(&ev)))
            />

            <label for="node-children">"Children (comma separated ids)"</label>
            <input
                id="node-children"
                type="text"
                prop:value=field(|n| n.children.join(", "))
                on:change=move |ev| edit(NodeEdit::Children(event_target_value(&ev)))
            />
        </aside>
    }
}

//! Sidebar Component
//!
//! Navigation entries; icons only when compact.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_navigate, store_sign_out, use_app_store, AppStateStoreFields, Page};

/// (page, icon, label)
const NAV_ENTRIES: &[(Page, &str, &str)] = &[
    (Page::Dashboard, "🏠", "Dashboard"),
    (Page::Roadmap, "🗺", "Roadmap"),
    (Page::CourseEditor, "✏️", "Edit course"),
];

#[component]
pub fn Sidebar(
    #[prop(into)] compact: Signal<bool>,
    /// Called after any entry is chosen
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let store = use_app_store();

    let notify = move || {
        if let Some(cb) = on_navigate {
            cb.run(());
        }
    };

    let sign_out = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            if let Err(err) = commands::sign_out().await {
                tracing::warn!(%err, "sign out failed");
            }
            store_sign_out(&store);
        });
        notify();
    };

    view! {
        <nav class=move || if compact.get() { "sidebar compact" } else { "sidebar" }>
            {NAV_ENTRIES.iter().map(|(page, icon, label)| {
                let page = *page;
                let is_active = move || store.page().get() == page;
                // Course pages need a course picked on the dashboard first
                let disabled = move || page != Page::Dashboard && store.course_id().get().is_none();
                view! {
                    <button
                        class=move || if is_active() { "sidebar-item active" } else { "sidebar-item" }
                        title=*label
                        disabled=disabled
                        on:click=move |_| {
                            store_navigate(&store, page);
                            notify();
                        }
                    >
                        <span class="sidebar-icon">{*icon}</span>
                        <Show when=move || !compact.get()>
                            <span class="sidebar-label">{*label}</span>
                        </Show>
                    </button>
                }
            }).collect_view()}

            <button class="sidebar-item sign-out" title="Sign out" on:click=sign_out>
                <span class="sidebar-icon">"⎋"</span>
                <Show when=move || !compact.get()>
                    <span class="sidebar-label">"Sign out"</span>
                </Show>
            </button>
        </nav>
    }
}

//! Toast Host
//!
//! Shows the store's current toast and clears it after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let delay = ctx.config().toast_ms;
    // Bumped per toast so an old timer does not clear a newer one
    let (generation, set_generation) = signal(0u32);

    Effect::new(move |_| {
        if store.toast().get().is_none() {
            return;
        }
        let current = generation.get_untracked() + 1;
        set_generation.set(current);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation.get_untracked() == current {
                store.toast().set(None);
            }
        });
    });

    view! {
        {move || store.toast().get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast success",
                ToastKind::Error => "toast error",
            };
            view! {
                <div class=class role="status" on:click=move |_| store.toast().set(None)>
                    {toast.message}
                </div>
            }
        })}
    }
}

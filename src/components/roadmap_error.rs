//! Roadmap Error View

use leptos::prelude::*;

#[component]
pub fn RoadmapError(
    error: String,
    /// Clears the error and re-checks the roadmap
    #[prop(into)]
    on_retry: Callback<()>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="roadmap-error" role="alert">
            <p>{error}</p>
            <div class="roadmap-error-actions">
                <button on:click=move |_| on_retry.run(())>"Retry"</button>
                <button class="secondary" on:click=move |_| on_dismiss.run(())>"Dismiss"</button>
            </div>
        </div>
    }
}

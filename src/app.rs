//! LMS Frontend App
//!
//! Provides config, viewport and store context, then switches between the
//! auth pages and the dashboard shell.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ClientLayout, CourseEditorPage, Dashboard, LoginForm, Navbar, RegisterForm, RoadmapPage, ToastHost,
};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::hooks::use_media_query;
use crate::store::{AppState, AppStateStoreFields, Page};

/// Page body for a signed-in user
fn private_page(page: Page) -> AnyView {
    match page {
        Page::Roadmap => view! { <RoadmapPage /> }.into_any(),
        Page::CourseEditor => view! { <CourseEditorPage /> }.into_any(),
        _ => view! { <Dashboard /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::load();
    let is_mobile = use_media_query(&config.mobile_query);
    tracing::info!(mobile = is_mobile.get_untracked(), "starting app");

    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(config, is_mobile));

    let page = Memo::new(move |_| store.page().get());

    view! {
        <ToastHost />
        {move || {
            let current = page.get();
            if current.is_private() {
                view! {
                    <ClientLayout navbar=ViewFn::from(|| view! { <Navbar /> })>
                        {private_page(current)}
                    </ClientLayout>
                }
                .into_any()
            } else {
                view! {
                    <div class="auth-shell">
                        <div class="auth-card">
                            {match current {
                                Page::Register => view! { <RegisterForm /> }.into_any(),
                                _ => view! { <LoginForm /> }.into_any(),
                            }}
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

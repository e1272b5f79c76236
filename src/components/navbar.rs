//! Navbar Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, Page};

fn page_title(page: Page) -> &'static str {
    match page {
        Page::Login => "Sign in",
        Page::Register => "Create account",
        Page::Dashboard => "Dashboard",
        Page::Roadmap => "Learning roadmap",
        Page::CourseEditor => "Edit course",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <header class="navbar">
            <h1 class="navbar-title">{move || page_title(store.page().get())}</h1>
            <span class="navbar-user">
                {move || store.user().get().map(|user| user.display_name())}
            </span>
        </header>
    }
}

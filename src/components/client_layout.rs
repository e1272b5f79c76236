//! Client Layout
//!
//! Dashboard shell: optional fixed navbar, a desktop sidebar that is
//! compact until hovered, and a slide-in sheet with the full sidebar on
//! mobile.

use leptos::prelude::*;

use crate::components::Sidebar;

/// Sidebar widths in px (compact / expanded)
const SIDEBAR_COMPACT: u32 = 80;
const SIDEBAR_EXPANDED: u32 = 256;

#[component]
fn MobileMenu(sheet_open: ReadSignal<bool>, set_sheet_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <button
            class="mobile-menu-btn"
            title="Open navigation"
            on:click=move |_| set_sheet_open.set(true)
        >
            "☰"
        </button>
        <Show when=move || sheet_open.get()>
            <div class="sheet-overlay" on:click=move |_| set_sheet_open.set(false)></div>
            <div class="sheet-content left" style=format!("width: {}px;", SIDEBAR_EXPANDED)>
                <div class="sheet-header">
                    <span class="sheet-title">"Navigation Menu"</span>
                    <button class="close-btn" on:click=move |_| set_sheet_open.set(false)>"×"</button>
                </div>
                <Sidebar
                    compact=Signal::stored(false)
                    on_navigate=Callback::new(move |_: ()| set_sheet_open.set(false))
                />
            </div>
        </Show>
    }
}

#[component]
pub fn ClientLayout(
    /// Top bar content; without it the menu button floats top-left
    #[prop(optional, into)]
    navbar: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let (is_hovered, set_is_hovered) = signal(false);
    let (sheet_open, set_sheet_open) = signal(false);
    let has_navbar = navbar.is_some();

    let sidebar_width = move || if is_hovered.get() { SIDEBAR_EXPANDED } else { SIDEBAR_COMPACT };
    let sidebar_style = move || {
        format!(
            "top: {}; width: {}px;",
            if has_navbar { "4rem" } else { "0" },
            sidebar_width()
        )
    };
    let content_style = move || {
        format!(
            "padding-top: {}; --sidebar-width: {}px;",
            if has_navbar { "4rem" } else { "0" },
            sidebar_width()
        )
    };

    view! {
        <div class="client-layout">
            {match navbar {
                Some(navbar) => view! {
                    <div class="top-bar">
                        <div class="mobile-only">
                            <MobileMenu sheet_open=sheet_open set_sheet_open=set_sheet_open />
                        </div>
                        <div class="navbar-slot">{navbar.run()}</div>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="mobile-only floating-menu">
                        <MobileMenu sheet_open=sheet_open set_sheet_open=set_sheet_open />
                    </div>
                }.into_any(),
            }}

            <div
                class="desktop-sidebar"
                style=sidebar_style
                on:mouseenter=move |_| set_is_hovered.set(true)
                on:mouseleave=move |_| set_is_hovered.set(false)
            >
                <Sidebar compact=Signal::derive(move || !is_hovered.get()) />
            </div>

            <div class="layout-content" style=content_style>
                {children()}
            </div>
        </div>
    }
}

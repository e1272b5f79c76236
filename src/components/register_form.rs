//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::RegisterInput;
use crate::commands;
use crate::store::{store_navigate, store_show_toast, use_app_store, Page, ToastKind};

/// (field name, label, input type)
const FIELDS: &[(&str, &str, &str)] = &[
    ("firstname", "First name", "text"),
    ("lastname", "Last name", "text"),
    ("email", "Email", "email"),
    ("password", "Password", "password"),
];

#[component]
pub fn RegisterForm() -> impl IntoView {
    let store = use_app_store();
    let input = RwSignal::new(RegisterInput::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let set_field = move |name: &str, value: String| {
        input.update(|i| match name {
            "firstname" => i.first_name = value,
            "lastname" => i.last_name = value,
            "email" => i.email = value,
            _ => i.password = value,
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let current = input.get_untracked();
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match commands::register(&current).await {
                Ok(()) => {
                    store_show_toast(&store, ToastKind::Success, "Account created, please sign in");
                    store_navigate(&store, Page::Login);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>"Create account"</h2>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            {FIELDS.iter().map(|(name, label, kind)| {
                let name = *name;
                let value = move || input.with(|i| match name {
                    "firstname" => i.first_name.clone(),
                    "lastname" => i.last_name.clone(),
                    "email" => i.email.clone(),
                    _ => i.password.clone(),
                });
                view! {
                    <label for=name>{*label}</label>
                    <input
                        id=name
                        name=name
                        type=*kind
                        prop:value=value
                        on:input=move |ev| set_field(name, event_target_value(&ev))
                    />
                }
            }).collect_view()}
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Creating..." } else { "Register" }}
            </button>
            <p class="auth-switch">
                "Already registered? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    store_navigate(&store, Page::Login);
                }>"Sign in"</a>
            </p>
        </form>
    }
}

//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::LoginInput;
use crate::commands;
use crate::store::{store_navigate, store_sign_in, use_app_store, Page};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let input = LoginInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match commands::login(&input).await {
                Ok(user) => store_sign_in(&store, user),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>"Sign in"</h2>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <label for="email">"Email"</label>
            <input
                id="email"
                name="email"
                type="email"
                required
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <label for="password">"Password"</label>
            <input
                id="password"
                name="password"
                type="password"
                required
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
            <p class="auth-switch">
                "No account yet? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    store_navigate(&store, Page::Register);
                }>"Register"</a>
            </p>
        </form>
    }
}

//! Registration page.
//!
//! A successful registration does not sign the user in; the returned
//! redirect sends them to the login page with a success flash.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use portal_session::{Route, SessionError, SessionState};

use super::form_error;
use crate::state::session::AppCoordinator;
use crate::util::auth::follow_redirect;

pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Registering..." } else { "Submit" }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionState>>();
    let coordinator = expect_context::<AppCoordinator>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);

    let loading = move || session.with(SessionState::is_loading);
    let error = move || session.with(|s| form_error(s, submitted.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let coordinator = coordinator.clone();
        let navigate = navigate.clone();
        let (name_value, email_value, password_value) =
            (name.get_untracked(), email.get_untracked(), password.get_untracked());
        submitted.set(true);
        leptos::task::spawn_local(async move {
            match coordinator.register(&name_value, &email_value, &password_value).await {
                Ok(redirect) => follow_redirect(redirect, &navigate),
                Err(SessionError::Busy) => log::debug!("register: ignored while busy"),
                Err(_) => {}
            }
        });
    };

    view! {
        <Title text="Register"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        class="auth-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=loading>
                        {move || submit_label(loading())}
                    </button>
                </form>
                <Show when=move || error().is_some()>
                    <p class="auth-message auth-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=Route::Login.path()>"Log in"</a>
                </p>
            </div>
        </div>
    }
}

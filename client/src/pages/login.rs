//! Login page with email and password.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the nav, the home page, or a successful registration (which
//! arrives with a `message` flash). A successful login follows the returned
//! redirect home exactly once.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_location, use_navigate};
use portal_session::redirect::flash_from_query;
use portal_session::{Route, SessionError, SessionState};

use super::form_error;
use crate::state::session::AppCoordinator;
use crate::util::auth::follow_redirect;

pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Signing in..." } else { "Sign in" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionState>>();
    let coordinator = expect_context::<AppCoordinator>();
    let location = use_location();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);

    let flash = move || flash_from_query(&location.search.get());
    let loading = move || session.with(SessionState::is_loading);
    let error = move || session.with(|s| form_error(s, submitted.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let coordinator = coordinator.clone();
        let navigate = navigate.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        submitted.set(true);
        leptos::task::spawn_local(async move {
            match coordinator.login(&email_value, &password_value).await {
                Ok(redirect) => follow_redirect(redirect, &navigate),
                Err(SessionError::Busy) => log::debug!("login: ignored while busy"),
                Err(_) => {}
            }
        });
    };

    view! {
        <Title text="Login"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Log in"</h1>
                <Show when=move || flash().is_some()>
                    <p class="auth-message auth-message--success">{move || flash().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
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
                    "No account yet? "
                    <a href=Route::Register.path()>"Register"</a>
                </p>
            </div>
        </div>
    }
}

//! Profile editor for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a session: once the startup probe settles without one, the page
//! redirects to `/login`. Fields are seeded once from the current identity; a
//! blank password keeps the existing one.

#[cfg(test)]
#[path = "edit_profile_test.rs"]
mod edit_profile_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use portal_session::coordinator::messages;
use portal_session::{Route, SessionError, SessionState};

use super::form_error;
use crate::state::session::AppCoordinator;
use crate::util::auth::install_unauth_redirect;

/// Initial `(name, email)` field values, once an identity is known.
pub fn seed_fields(state: &SessionState) -> Option<(String, String)> {
    state.user().map(|user| (user.name.clone(), user.email.clone()))
}

pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Saving..." } else { "Save Changes" }
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionState>>();
    let coordinator = expect_context::<AppCoordinator>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let seeded = RwSignal::new(false);
    let submitted = RwSignal::new(false);
    let success = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if seeded.get_untracked() {
            return;
        }
        if let Some((current_name, current_email)) = session.with(seed_fields) {
            name.set(current_name);
            email.set(current_email);
            seeded.set(true);
        }
    });

    let loading = move || session.with(SessionState::is_loading);
    let error = move || session.with(|s| form_error(s, submitted.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let coordinator = coordinator.clone();
        let (name_value, email_value, password_value) =
            (name.get_untracked(), email.get_untracked(), password.get_untracked());
        submitted.set(true);
        success.set(None);
        leptos::task::spawn_local(async move {
            match coordinator.update_profile(&name_value, &email_value, &password_value).await {
                Ok(()) => {
                    password.set(String::new());
                    success.set(Some(messages::PROFILE_UPDATED));
                }
                Err(SessionError::Busy) => log::debug!("update-profile: ignored while busy"),
                Err(_) => {}
            }
        });
    };

    view! {
        <Title text="Edit Profile"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Edit Profile"</h1>
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
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"New password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Leave blank to keep the current one"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <div class="auth-actions">
                        <button class="auth-button" type="submit" disabled=loading>
                            {move || submit_label(loading())}
                        </button>
                        <a class="auth-button auth-button--secondary" href=Route::Home.path()>"Cancel"</a>
                    </div>
                </form>
                <Show when=move || success.get().is_some()>
                    <p class="auth-message auth-message--success">{move || success.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || error().is_some()>
                    <p class="auth-message auth-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}

//! Home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route for everyone. While the startup probe runs it shows a
//! loading line, then either a guest prompt or a greeting with profile and
//! logout controls. Errors shown here are limited to the startup probe and
//! the page's own logout; failures from other views stay on those views.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::Title;
use leptos_router::hooks::{use_location, use_navigate};
use portal_session::redirect::flash_from_query;
use portal_session::{Route, SessionError, SessionState};

use crate::state::session::{AppCoordinator, StartupError};
use crate::util::auth::follow_redirect;
use crate::util::greeting::current_greeting;

/// What the home page renders for a session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HomeView {
    Loading,
    Guest,
    Member { name: String, logging_out: bool },
}

pub fn home_view(state: &SessionState) -> HomeView {
    if !state.is_resolved() {
        return HomeView::Loading;
    }
    match state.user() {
        Some(user) => HomeView::Member { name: user.name.clone(), logging_out: state.is_loading() },
        None => HomeView::Guest,
    }
}

/// Error to show on the home page: its own logout failure first, then a
/// failed startup probe. Hidden while a request runs or once signed in.
pub fn home_error(state: &SessionState, startup: Option<&str>, logout: Option<&str>) -> Option<String> {
    if state.is_loading() || state.is_authenticated() {
        return None;
    }
    logout.or(startup).map(str::to_owned)
}

pub fn greeting_line(greeting: &str, name: &str) -> String {
    format!("{greeting}, {name}!")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionState>>();
    let StartupError(startup_error) = expect_context::<StartupError>();
    let location = use_location();
    let logout_error = RwSignal::new(None::<String>);

    let flash = move || flash_from_query(&location.search.get());
    let error = move || {
        let startup = startup_error.get();
        let logout = logout_error.get();
        session.with(|s| home_error(s, startup.as_deref(), logout.as_deref()))
    };

    view! {
        <Title text="Homepage"/>
        <div class="home-page">
            <Show when=move || flash().is_some()>
                <p class="home-message home-message--success">{move || flash().unwrap_or_default()}</p>
            </Show>
            {move || match session.with(home_view) {
                HomeView::Loading => view! { <p class="home-loading">"Loading..."</p> }.into_any(),
                HomeView::Guest => view! {
                    <div class="home-guest">
                        <p>"You are not logged in."</p>
                        <a class="home-link" href=Route::Login.path()>"Log in"</a>
                        <a class="home-link" href=Route::Register.path()>"Register"</a>
                    </div>
                }
                .into_any(),
                HomeView::Member { name, logging_out } => view! { <MemberPanel name=name logging_out=logging_out error=logout_error/> }.into_any(),
            }}
            <Show when=move || error().is_some()>
                <p class="home-message home-message--error">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
fn MemberPanel(name: String, logging_out: bool, error: RwSignal<Option<String>>) -> impl IntoView {
    let coordinator = expect_context::<AppCoordinator>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let coordinator = coordinator.clone();
        let navigate = navigate.clone();
        error.set(None);
        leptos::task::spawn_local(async move {
            match coordinator.logout().await {
                Ok(redirect) => follow_redirect(redirect, &navigate),
                Err(SessionError::Busy) => log::debug!("logout: ignored while busy"),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="home-member">
            <h1>{greeting_line(current_greeting(), &name)}</h1>
            <a class="home-link" href=Route::EditProfile.path()>"Edit Profile"</a>
            <button class="home-button" disabled=logging_out on:click=on_logout>
                "Log Out"
            </button>
        </div>
    }
}

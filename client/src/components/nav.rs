//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guests get login and register links. On the profile editor an
//! authenticated user gets a logout control; elsewhere the page itself offers
//! one. Nothing renders until the startup probe settles.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_location, use_navigate};
use portal_session::{Route, SessionError, SessionState};

use crate::state::session::AppCoordinator;
use crate::util::auth::follow_redirect;

/// Which menu the nav bar shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMenu {
    Hidden,
    Guest,
    Logout { pending: bool },
}

/// Menu for `state` while the location is `route`.
pub fn nav_menu(state: &SessionState, route: Option<Route>) -> NavMenu {
    if !state.is_resolved() {
        return NavMenu::Hidden;
    }
    if !state.is_authenticated() {
        return NavMenu::Guest;
    }
    if route == Some(Route::EditProfile) {
        NavMenu::Logout { pending: state.is_loading() }
    } else {
        NavMenu::Hidden
    }
}

pub fn logout_label(pending: bool) -> &'static str {
    if pending { "Logging out..." } else { "Log out" }
}

#[component]
pub fn Nav() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionState>>();
    let location = use_location();
    let logout_error = RwSignal::new(None::<String>);

    let menu = move || session.with(|s| nav_menu(s, Route::from_path(&location.pathname.get())));

    view! {
        <nav class="nav">
            <a class="nav__brand" href=Route::Home.path()>"Home"</a>
            {move || match menu() {
                NavMenu::Hidden => ().into_any(),
                NavMenu::Guest => view! {
                    <div class="nav__links">
                        <a href=Route::Login.path()>"Log in"</a>
                        <a href=Route::Register.path()>"Register"</a>
                    </div>
                }
                .into_any(),
                NavMenu::Logout { pending } => view! { <LogoutButton pending=pending error=logout_error/> }.into_any(),
            }}
            <Show when=move || logout_error.get().is_some()>
                <p class="nav__error">{move || logout_error.get().unwrap_or_default()}</p>
            </Show>
        </nav>
    }
}

/// Logout control. A failure lands in `error`, which outlives the button
/// since the session is cleared either way.
#[component]
fn LogoutButton(pending: bool, error: RwSignal<Option<String>>) -> impl IntoView {
    let coordinator = expect_context::<AppCoordinator>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let coordinator = coordinator.clone();
        let navigate = navigate.clone();
        error.set(None);
        leptos::task::spawn_local(async move {
            match coordinator.logout().await {
                Ok(redirect) => follow_redirect(redirect, &navigate),
                Err(SessionError::Busy) => {}
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <button class="nav__logout" disabled=pending on:click=on_logout>
            {logout_label(pending)}
        </button>
    }
}

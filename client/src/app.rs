//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one session coordinator, provides it and the read-only
//! session signal to every route, and starts the startup probe once.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use portal_session::{SessionCoordinator, SessionError};

use crate::components::nav::Nav;
use crate::config::ApiConfig;
use crate::net::gateway::HttpSessionGateway;
use crate::pages::{edit_profile::EditProfilePage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::session::{AppCoordinator, SignalStore, StartupError};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SignalStore::new();
    let gateway = HttpSessionGateway::new(ApiConfig::from_build_env());
    let coordinator: AppCoordinator = SessionCoordinator::new(gateway, store);

    provide_context(store.reader());
    provide_context(coordinator.clone());

    let startup_error = RwSignal::new(None::<String>);
    provide_context(StartupError(startup_error.read_only()));

    leptos::task::spawn_local(async move {
        match coordinator.initialize().await {
            Ok(()) | Err(SessionError::AlreadyInitialized) => {}
            Err(err) => {
                log::warn!("session: startup probe failed: {err}");
                startup_error.set(Some(err.to_string()));
            }
        }
    });

    view! {
        <Title text="Homepage"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("edit-profile") view=EditProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}

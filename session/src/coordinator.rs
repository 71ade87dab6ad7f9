//! Session coordinator: the only writer of [`SessionState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Views never talk to the backend. They call a coordinator action, the
//! coordinator drives the [`SessionGateway`], and the resulting state is
//! committed to the [`SessionStore`] that every view observes.
//!
//! ORDERING
//! ========
//! All work runs on one cooperative event loop and suspends only at the
//! gateway call. Each action checks `is_loading()` and commits its busy state
//! before its first await, so a second action started while one is in flight
//! is rejected with [`SessionError::Busy`] without touching the state. The
//! startup probe is the only action accepted while the phase is still
//! `Initializing`.
//!
//! ERROR HANDLING
//! ==============
//! Gateway failures are mapped per action onto user-facing messages with
//! exhaustive matches. Every failure path settles with `busy == false`.

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;

use crate::gateway::{GatewayError, SessionGateway};
use crate::redirect::{Redirect, Route};
use crate::state::{SessionPhase, SessionState};
use crate::store::SessionStore;
use crate::validate;

/// User-facing messages produced by the coordinator.
pub mod messages {
    pub const REGISTERED: &str = "Registration successful! Please log in.";
    pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";
    pub const SERVER_ERROR: &str = "Internal server error. Please try again later.";
    pub const NETWORK_ERROR: &str = "Network error. Please check your internet connection.";
    pub const PROBE_FAILED: &str = "Failed to fetch user data.";
    pub const PROBE_UNREACHABLE: &str = "An error occurred while fetching user data.";
    pub const LOGIN_FAILED: &str = "Login failed";
    pub const REGISTER_INVALID: &str = "Registration failed. Please check your input.";
    pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
    pub const LOGOUT_FAILED: &str = "Logout failed. Please try again.";
    pub const UPDATE_INVALID: &str = "Invalid input";
    pub const UPDATE_FAILED: &str = "Failed to update profile. Please try again later.";
    pub const UPDATE_UNREACHABLE: &str = "An error occurred while updating the profile. Please try again.";
}

/// Why a session action did not complete. `Display` is the text shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Another action is in flight; nothing was sent and the state is untouched.
    #[error("Please wait for the current request to finish.")]
    Busy,
    /// The startup probe already ran.
    #[error("The session has already been initialized.")]
    AlreadyInitialized,
    /// Local input check failed; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// The backend rejected the credentials.
    #[error("{0}")]
    Unauthorized(String),
    /// The backend rejected the input.
    #[error("{0}")]
    Client(String),
    /// The backend failed.
    #[error("{0}")]
    Server(String),
    /// The backend could not be reached.
    #[error("{0}")]
    Network(String),
}

/// An intent issued by a view, consumed once by [`SessionCoordinator::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Probe,
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
    Logout,
    UpdateProfile { name: String, email: String, password: Option<String> },
}

impl SessionAction {
    /// Short label for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Probe => "probe",
            Self::Login { .. } => "login",
            Self::Register { .. } => "register",
            Self::Logout => "logout",
            Self::UpdateProfile { .. } => "update-profile",
        }
    }
}

/// Orchestrates gateway calls and owns every write to the session state.
#[derive(Clone, Debug)]
pub struct SessionCoordinator<G, S> {
    gateway: G,
    store: S,
}

impl<G, S> SessionCoordinator<G, S>
where
    G: SessionGateway,
    S: SessionStore,
{
    pub fn new(gateway: G, store: S) -> Self {
        Self { gateway, store }
    }

    /// Current session snapshot.
    pub fn state(&self) -> SessionState {
        self.store.snapshot()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Run any action value. Returns the redirect the caller should follow,
    /// if the action produces one.
    ///
    /// # Errors
    ///
    /// Same as the typed action method for `action`.
    pub async fn dispatch(&self, action: SessionAction) -> Result<Option<Redirect>, SessionError> {
        log::debug!("session: dispatch {}", action.label());
        match action {
            SessionAction::Probe => self.initialize().await.map(|()| None),
            SessionAction::Login { email, password } => self.login(&email, &password).await.map(Some),
            SessionAction::Register { name, email, password } => {
                self.register(&name, &email, &password).await.map(Some)
            }
            SessionAction::Logout => self.logout().await.map(Some),
            SessionAction::UpdateProfile { name, email, password } => self
                .update_profile(&name, &email, password.as_deref().unwrap_or_default())
                .await
                .map(|()| None),
        }
    }

    /// Startup probe. Settles the phase to `Authenticated` or `Anonymous`;
    /// a 401 is the ordinary "not logged in" answer and is not an error.
    ///
    /// # Errors
    ///
    /// [`SessionError::AlreadyInitialized`] after the first run,
    /// [`SessionError::Busy`] while the probe is in flight, and the mapped
    /// failure when the backend could not answer (the phase still settles to
    /// `Anonymous`).
    pub async fn initialize(&self) -> Result<(), SessionError> {
        let state = self.store.snapshot();
        if state.is_resolved() {
            return Err(SessionError::AlreadyInitialized);
        }
        if state.is_busy() {
            return Err(SessionError::Busy);
        }
        self.store.commit(state.begin());

        match self.gateway.probe().await {
            Ok(user) => {
                log::info!("session: restored for {}", user.email);
                self.store.commit(SessionState::with_user(user));
                Ok(())
            }
            Err(GatewayError::Unauthorized) => {
                log::debug!("session: no active session");
                self.store.commit(SessionState::settled(SessionPhase::Anonymous, None));
                Ok(())
            }
            Err(err) => {
                log::warn!("session: probe failed: {err}");
                let failure = probe_failure(&err);
                self.store
                    .commit(SessionState::settled(SessionPhase::Anonymous, Some(failure.to_string())));
                Err(failure)
            }
        }
    }

    /// Log in and, on success, hand back a redirect to the home view.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`] while another action runs,
    /// [`SessionError::Validation`] for bad input (no request sent), and the
    /// mapped backend failure otherwise. The phase is unchanged on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<Redirect, SessionError> {
        let state = self.idle_state()?;
        if let Err(message) = validate::login(email, password) {
            return Err(self.reject(&state, message));
        }
        let pending = self.begin(&state);

        match self.gateway.login(email, password).await {
            Ok(user) => {
                log::info!("session: logged in as {}", user.email);
                self.store.commit(SessionState::with_user(user));
                Ok(Redirect::to(Route::Home))
            }
            Err(err) => {
                log::warn!("session: login failed: {err}");
                Err(self.settle_failure(&pending, login_failure(&err)))
            }
        }
    }

    /// Register a new account. Does not authenticate: on success the caller is
    /// sent to the login view with a one-shot success message.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`], [`SessionError::Validation`], or the mapped
    /// backend failure, with the backend's own message surfaced for 4xx.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Redirect, SessionError> {
        let state = self.idle_state()?;
        if let Err(message) = validate::register(name, email, password) {
            return Err(self.reject(&state, message));
        }
        let pending = self.begin(&state);

        match self.gateway.register(name, email, password).await {
            Ok(()) => {
                log::info!("session: registered {email}");
                self.store.commit(SessionState::settled(pending.phase().clone(), None));
                Ok(Redirect::with_flash(Route::Login, messages::REGISTERED))
            }
            Err(err) => {
                log::warn!("session: registration failed: {err}");
                Err(self.settle_failure(&pending, register_failure(&err)))
            }
        }
    }

    /// Log out. The local session is cleared whatever the backend answers:
    /// showing a stale authenticated view is worse than a false negative.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`] while another action runs, or the mapped
    /// failure when the backend call did not succeed. The phase is
    /// `Anonymous` in both failure cases except `Busy`.
    pub async fn logout(&self) -> Result<Redirect, SessionError> {
        let state = self.idle_state()?;
        self.begin(&state);

        match self.gateway.logout().await {
            Ok(()) => {
                log::info!("session: logged out");
                self.store.commit(SessionState::settled(SessionPhase::Anonymous, None));
                Ok(Redirect::to(Route::Home))
            }
            Err(err) => {
                log::warn!("session: logout failed, clearing local session anyway: {err}");
                let failure = logout_failure(&err);
                self.store
                    .commit(SessionState::settled(SessionPhase::Anonymous, Some(failure.to_string())));
                Err(failure)
            }
        }
    }

    /// Update the profile of the logged-in user. A blank `password` keeps the
    /// current one and is not sent.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`], [`SessionError::Validation`] (including
    /// "No updates detected." for an unchanged submission), or the mapped
    /// backend failure. The identity is unchanged on failure.
    pub async fn update_profile(&self, name: &str, email: &str, password: &str) -> Result<(), SessionError> {
        let state = self.idle_state()?;
        let Some(current) = state.user() else {
            return Err(self.reject(&state, validate::NOT_LOGGED_IN));
        };
        let update = match validate::profile_update(current, name, email, password) {
            Ok(update) => update,
            Err(message) => return Err(self.reject(&state, message)),
        };
        let pending = self.begin(&state);

        match self.gateway.update_profile(&update).await {
            Ok(user) => {
                log::info!("session: profile updated for {}", user.email);
                self.store.commit(SessionState::with_user(user));
                Ok(())
            }
            Err(err) => {
                log::warn!("session: profile update failed: {err}");
                Err(self.settle_failure(&pending, update_failure(&err)))
            }
        }
    }

    /// Snapshot of the state if no action is in flight.
    fn idle_state(&self) -> Result<SessionState, SessionError> {
        let state = self.store.snapshot();
        if state.is_loading() {
            log::debug!("session: action rejected, another is in flight");
            return Err(SessionError::Busy);
        }
        Ok(state)
    }

    /// Commit the busy state for a new action and return it.
    fn begin(&self, state: &SessionState) -> SessionState {
        let pending = state.begin();
        self.store.commit(pending.clone());
        pending
    }

    /// Record a local validation failure without any network call.
    fn reject(&self, state: &SessionState, message: &str) -> SessionError {
        log::debug!("session: validation failed: {message}");
        self.store.commit(state.failed(message));
        SessionError::Validation(message.to_owned())
    }

    fn settle_failure(&self, pending: &SessionState, failure: SessionError) -> SessionError {
        self.store.commit(pending.failed(failure.to_string()));
        failure
    }
}

fn probe_failure(err: &GatewayError) -> SessionError {
    match err {
        GatewayError::Network(_) => SessionError::Network(messages::PROBE_UNREACHABLE.to_owned()),
        GatewayError::Unauthorized | GatewayError::Client { .. } => {
            SessionError::Client(messages::PROBE_FAILED.to_owned())
        }
        GatewayError::Server { .. } => SessionError::Server(messages::PROBE_FAILED.to_owned()),
    }
}

fn login_failure(err: &GatewayError) -> SessionError {
    match err {
        GatewayError::Unauthorized => SessionError::Unauthorized(messages::INVALID_CREDENTIALS.to_owned()),
        GatewayError::Client { message, .. } => {
            SessionError::Client(message.as_deref().unwrap_or(messages::LOGIN_FAILED).to_owned())
        }
        GatewayError::Server { .. } => SessionError::Server(messages::SERVER_ERROR.to_owned()),
        GatewayError::Network(_) => SessionError::Network(messages::NETWORK_ERROR.to_owned()),
    }
}

fn register_failure(err: &GatewayError) -> SessionError {
    match err {
        GatewayError::Client { status: 400, message } => {
            SessionError::Client(message.as_deref().unwrap_or(messages::REGISTER_INVALID).to_owned())
        }
        GatewayError::Client { message, .. } => {
            SessionError::Client(message.as_deref().unwrap_or(messages::REGISTER_FAILED).to_owned())
        }
        GatewayError::Unauthorized => SessionError::Client(messages::REGISTER_FAILED.to_owned()),
        GatewayError::Server { .. } => SessionError::Server(messages::SERVER_ERROR.to_owned()),
        GatewayError::Network(_) => SessionError::Network(messages::NETWORK_ERROR.to_owned()),
    }
}

fn logout_failure(err: &GatewayError) -> SessionError {
    match err {
        GatewayError::Network(_) => SessionError::Network(messages::NETWORK_ERROR.to_owned()),
        GatewayError::Unauthorized | GatewayError::Client { .. } => {
            SessionError::Client(messages::LOGOUT_FAILED.to_owned())
        }
        GatewayError::Server { .. } => SessionError::Server(messages::LOGOUT_FAILED.to_owned()),
    }
}

fn update_failure(err: &GatewayError) -> SessionError {
    match err {
        GatewayError::Client { message, .. } => {
            SessionError::Client(message.as_deref().unwrap_or(messages::UPDATE_INVALID).to_owned())
        }
        GatewayError::Unauthorized => SessionError::Unauthorized(messages::UPDATE_FAILED.to_owned()),
        GatewayError::Server { .. } => SessionError::Server(messages::UPDATE_FAILED.to_owned()),
        GatewayError::Network(_) => SessionError::Network(messages::UPDATE_UNREACHABLE.to_owned()),
    }
}

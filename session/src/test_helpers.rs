//! Scripted gateway and recording store for coordinator tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tokio::sync::Notify;

use crate::coordinator::SessionCoordinator;
use crate::gateway::{GatewayError, SessionGateway};
use crate::state::SessionState;
use crate::store::SessionStore;
use crate::types::{ProfileUpdate, User};

/// One scripted backend answer.
#[derive(Clone, Debug)]
pub(crate) enum Reply {
    /// Success for unit operations (register, logout).
    Ok,
    /// Success carrying an identity (probe, login, update).
    User(User),
    Fail(GatewayError),
}

/// A call the coordinator made against the gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Probe,
    Login { email: String },
    Register { email: String },
    Logout,
    UpdateProfile(ProfileUpdate),
}

/// Gateway answering from a queue of [`Reply`] values.
///
/// An empty queue answers with a network error. When a gate is installed,
/// every call waits for one notification before answering, which keeps a
/// request in flight for as long as the test needs.
#[derive(Default)]
pub(crate) struct FakeGateway {
    replies: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<Call>>,
    gate: Option<Rc<Notify>>,
}

impl FakeGateway {
    pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self { replies: RefCell::new(replies.into_iter().collect()), ..Self::default() }
    }

    pub(crate) fn gated(mut self, gate: Rc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn push(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    async fn answer(&self, call: Call) -> Reply {
        self.calls.borrow_mut().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Reply::Fail(GatewayError::Network("no scripted reply".into())))
    }

    async fn user_reply(&self, call: Call) -> Result<User, GatewayError> {
        match self.answer(call).await {
            Reply::User(user) => Ok(user),
            Reply::Ok => Ok(User::new("Fake", "fake@example.com")),
            Reply::Fail(err) => Err(err),
        }
    }

    async fn unit_reply(&self, call: Call) -> Result<(), GatewayError> {
        match self.answer(call).await {
            Reply::Ok | Reply::User(_) => Ok(()),
            Reply::Fail(err) => Err(err),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl SessionGateway for FakeGateway {
    async fn probe(&self) -> Result<User, GatewayError> {
        self.user_reply(Call::Probe).await
    }

    async fn login(&self, email: &str, _password: &str) -> Result<User, GatewayError> {
        self.user_reply(Call::Login { email: email.to_owned() }).await
    }

    async fn register(&self, _name: &str, email: &str, _password: &str) -> Result<(), GatewayError> {
        self.unit_reply(Call::Register { email: email.to_owned() }).await
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        self.unit_reply(Call::Logout).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, GatewayError> {
        self.user_reply(Call::UpdateProfile(update.clone())).await
    }
}

/// Store that keeps every committed state in order.
#[derive(Default)]
pub(crate) struct RecordingStore {
    current: RefCell<SessionState>,
    history: RefCell<Vec<SessionState>>,
}

impl RecordingStore {
    pub(crate) fn history(&self) -> Vec<SessionState> {
        self.history.borrow().clone()
    }
}

impl SessionStore for RecordingStore {
    fn snapshot(&self) -> SessionState {
        self.current.borrow().clone()
    }

    fn commit(&self, next: SessionState) {
        self.history.borrow_mut().push(next.clone());
        *self.current.borrow_mut() = next;
    }
}

pub(crate) type TestCoordinator = SessionCoordinator<FakeGateway, RecordingStore>;

pub(crate) fn coordinator(replies: impl IntoIterator<Item = Reply>) -> TestCoordinator {
    SessionCoordinator::new(FakeGateway::new(replies), RecordingStore::default())
}

pub(crate) fn ada() -> User {
    User::new("Ada", "ada@example.com")
}

/// Coordinator that has already resolved its probe to `user`.
pub(crate) async fn signed_in(user: User) -> TestCoordinator {
    let c = coordinator([Reply::User(user)]);
    c.initialize().await.unwrap();
    c
}

/// Coordinator that has already resolved its probe to anonymous.
pub(crate) async fn signed_out() -> TestCoordinator {
    let c = coordinator([Reply::Fail(GatewayError::Unauthorized)]);
    c.initialize().await.unwrap();
    c
}

//! Scripted in-memory `AuthApi` for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::api::AuthApi;
use super::types::{Credentials, DeleteAccountRequest, HttpReply, Registration};

type Reply = Result<HttpReply, String>;

/// A request the fake received, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Check,
    Login(Credentials),
    Register(Registration),
    Delete(DeleteAccountRequest),
}

#[derive(Default)]
pub(crate) struct FakeApi {
    check: RefCell<VecDeque<Reply>>,
    login: RefCell<VecDeque<Reply>>,
    register: RefCell<VecDeque<Reply>>,
    delete: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn check_reply(self, reply: Reply) -> Self {
        self.check.borrow_mut().push_back(reply);
        self
    }

    pub(crate) fn login_reply(self, reply: Reply) -> Self {
        self.login.borrow_mut().push_back(reply);
        self
    }

    pub(crate) fn register_reply(self, reply: Reply) -> Self {
        self.register.borrow_mut().push_back(reply);
        self
    }

    pub(crate) fn delete_reply(self, reply: Reply) -> Self {
        self.delete.borrow_mut().push_back(reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next(queue: &RefCell<VecDeque<Reply>>) -> Reply {
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply".to_owned()))
    }
}

impl AuthApi for FakeApi {
    async fn check_session(&self) -> Reply {
        self.calls.borrow_mut().push(Call::Check);
        Self::next(&self.check)
    }

    async fn login(&self, creds: &Credentials) -> Reply {
        self.calls.borrow_mut().push(Call::Login(creds.clone()));
        Self::next(&self.login)
    }

    async fn register(&self, registration: &Registration) -> Reply {
        self.calls.borrow_mut().push(Call::Register(registration.clone()));
        Self::next(&self.register)
    }

    async fn delete_account(&self, request: &DeleteAccountRequest) -> Reply {
        self.calls.borrow_mut().push(Call::Delete(request.clone()));
        Self::next(&self.delete)
    }
}

//! Scripted [`Transport`] for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;

use super::dispatch::Dispatcher;
use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::ApiConfig;

pub(crate) const TEST_BASE_URL: &str = "http://api.test";

type Reply = Result<HttpResponse, TransportError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Replies to requests in FIFO order and records every request it saw.
#[derive(Default)]
pub(crate) struct MockTransport {
    replies: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_raw(status, &body.to_string());
    }

    pub(crate) fn push_raw(&self, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(Scripted::Ready(Ok(HttpResponse { status, body: body.to_owned() })));
    }

    pub(crate) fn push_network_error(&self, cause: &str) {
        self.replies
            .borrow_mut()
            .push_back(Scripted::Ready(Err(TransportError(cause.to_owned()))));
    }

    /// Queue a reply the test completes later through the returned sender.
    pub(crate) fn push_deferred(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Scripted::Deferred(rx));
        tx
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let next = self.replies.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError("deferred reply dropped".to_owned()))),
            None => Err(TransportError("no scripted reply".to_owned())),
        }
    }
}

/// Dispatcher wired to `mock` with [`TEST_BASE_URL`].
pub(crate) fn dispatcher_with(mock: &Rc<MockTransport>) -> Dispatcher {
    Dispatcher::new(&ApiConfig::new(TEST_BASE_URL), mock.clone())
}

/// 200 reply for `GET /user/me` carrying alice's profile.
pub(crate) fn me_ok_body() -> serde_json::Value {
    serde_json::json!({ "message": "ok", "data": { "id": 1, "username": "alice" } })
}

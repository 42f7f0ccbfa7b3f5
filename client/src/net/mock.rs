//! Scripted `HttpClient` for unit tests.
//!
//! Responses are served in the order calls finish; every call is recorded.
//! Each call yields to the executor once before answering so tests can observe
//! the pending window. GETs can be slowed down further with `delay_gets`.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde_json::Value;

use super::http::{HttpClient, HttpResponse, TransportError};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub(crate) struct MockClient {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    calls: RefCell<Vec<RecordedCall>>,
    get_delay: Cell<usize>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: Value) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse { status, body }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
        self
    }

    /// Make every GET yield `polls` extra times before it is answered.
    pub fn delay_gets(self, polls: usize) -> Self {
        self.get_delay.set(polls);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    async fn answer(&self, call: RecordedCall, extra_polls: usize) -> Result<HttpResponse, TransportError> {
        self.calls.borrow_mut().push(call);
        Yield { remaining: 1 + extra_polls }.await;
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}

impl HttpClient for MockClient {
    async fn post(&self, path: &str, body: &Value) -> Result<HttpResponse, TransportError> {
        self.answer(RecordedCall { method: "POST", path: path.to_owned(), body: Some(body.clone()) }, 0)
            .await
    }

    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        self.answer(RecordedCall { method: "GET", path: path.to_owned(), body: None }, self.get_delay.get())
            .await
    }
}

struct Yield {
    remaining: usize,
}

impl Future for Yield {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.remaining == 0 {
            return Poll::Ready(());
        }
        self.remaining -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

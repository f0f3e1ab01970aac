//! # Mock Transport & Testing Guide
//!
//! [`MockTransport`] implements [`Transport`] entirely in memory. Queue the
//! requests you expect, in order, together with what each should return; the
//! typed clients then run against it exactly as they would against a real
//! HTTP transport.
//!
//! ## When to use the mock
//!
//! | Goal | Tool |
//! |------|------|
//! | Check the URL and body a client operation produces | `MockTransport::requests` |
//! | Feed canned documents into a multi-request flow (launch → find) | `expect_get` / `expect_post` |
//! | Simulate a network failure | `return_err` |
//! | Wrap a document without any I/O | [`Record::parse`](super::Record::parse) directly |
//!
//! ## Example
//!
//! ```rust
//! use tower_client::framework::mock::MockTransport;
//! use tower_client::framework::{ClientError, Transport};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("/api/v1/jobs/42/")
//!         .return_ok(r#"{"id": 42, "status": "pending"}"#);
//!     mock.expect_post("/api/v1/job_templates/5/launch/")
//!         .return_err(ClientError::transport("connection reset"));
//!
//!     let response = mock.get("/api/v1/jobs/42/").await.unwrap();
//!     assert_eq!(response.status, 200);
//!
//!     let result = mock.post("/api/v1/job_templates/5/launch/", None).await;
//!     assert!(matches!(result, Err(ClientError::Transport(_))));
//!
//!     mock.verify(); // every expectation was consumed
//! }
//! ```
//!
//! A request that does not match the next queued expectation panics, which
//! fails the test at the offending call.

use super::error::{ClientError, Result};
use super::transport::{Response, Transport};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

/// HTTP method of a recorded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A request the mock received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

struct Expectation {
    method: Method,
    path: String,
    response: Result<Response>,
}

/// In-memory [`Transport`] driven by queued expectations.
///
/// Clones share the same queue and request log, so a test can keep one handle
/// while the clients under test own another.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `GET` of `path`.
    pub fn expect_get(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Get, path.into())
    }

    /// Expects a `POST` to `path`.
    pub fn expect_post(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Post, path.into())
    }

    fn expect(&self, method: Method, path: String) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// Panics if any expectation is still queued.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<String> = exps.iter().map(|e| format!("{} {}", e.method, e.path)).collect();
            panic!(
                "Not all expectations were met. {} remaining: {}",
                exps.len(),
                pending.join(", ")
            );
        }
    }

    fn respond(&self, method: Method, path: &str, body: Option<String>) -> Result<Response> {
        self.requests.lock().unwrap().push(Request {
            method,
            path: path.to_string(),
            body,
        });
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) if exp.method == method && exp.path == path => exp.response,
            Some(exp) => panic!(
                "Unexpected request {} {}, expected {} {}",
                method, path, exp.method, exp.path
            ),
            None => panic!("Unexpected request {} {}, no expectations left", method, path),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<Response> {
        self.respond(Method::Get, path, None)
    }

    async fn post(&self, path: &str, body: Option<String>) -> Result<Response> {
        self.respond(Method::Post, path, body)
    }
}

/// Completes an expectation started by [`MockTransport::expect_get`] or
/// [`MockTransport::expect_post`].
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Responds `200` with `body`.
    pub fn return_ok(self, body: impl Into<String>) {
        self.return_response(Response::ok(body));
    }

    pub fn return_status(self, status: u16, body: impl Into<String>) {
        self.return_response(Response::new(status, body));
    }

    pub fn return_response(self, response: Response) {
        self.push(Ok(response));
    }

    /// Fails the request with `error`.
    pub fn return_err(self, error: ClientError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Response>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}

//! # Transport
//!
//! The typed clients never open connections themselves. They hand a path (and
//! for POST an optional JSON body) to a [`Transport`] and get back the status
//! and body text. Authentication, base URLs, TLS, timeouts and retries are all
//! the transport's business; a failed call is returned to the caller as
//! [`ClientError::Transport`](super::ClientError::Transport) without further
//! interpretation.
//!
//! Status codes are carried through but never inspected by this crate.

use super::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// What a transport hands back for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200` response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The HTTP collaborator consumed by every client.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Response>;

    async fn post(&self, path: &str, body: Option<String>) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, path: &str) -> Result<Response> {
        (**self).get(path).await
    }

    async fn post(&self, path: &str, body: Option<String>) -> Result<Response> {
        (**self).post(path, body).await
    }
}

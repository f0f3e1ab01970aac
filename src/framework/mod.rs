//! Generic building blocks for wrapping API documents and requesting them.
//!
//! # Main Components
//!
//! - [`Record`] / [`Field`] - A JSON object exposed through per-key accessors
//! - [`ExclusionSet`] / [`Schema`] - Field paths kept raw, composed per type
//! - [`Resource`] - A record bound to an endpoint; declared with [`crate::resource!`]
//! - [`Transport`] - The HTTP collaborator
//! - [`ResourceClient`] / [`Collection`] - Shared fetch and list requests
//! - [`ClientError`] - Common error type
//!
//! # Testing
//!
//! See the [`mock`] module for an in-memory transport.

pub mod client;
pub mod config;
pub mod error;
pub mod exclusion;
pub mod mock;
pub mod naming;
pub mod record;
pub mod resource;
pub mod transport;

// Re-export core types for convenience
pub use client::{Collection, ResourceClient};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use exclusion::{ExclusionSet, Schema};
pub use record::{Field, Record};
pub use resource::Resource;
pub use transport::{Response, Transport};

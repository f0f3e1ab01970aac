//! Wiring and process setup.
//!
//! # Main Components
//!
//! - [`Tower`] - One transport and config shared by every typed client
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tower;
pub mod tracing;

pub use self::tower::*;
pub use self::tracing::*;

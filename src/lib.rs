//! # Tower Client
//!
//! > **Native objects for an orchestration service's REST API.**
//!
//! Job templates, inventories, hosts, groups and ad hoc commands come back
//! from the API as JSON. This crate wraps each document into a [`Record`]
//! that exposes every field by key *and* by a snake_case accessor name,
//! recursively, and binds records to typed resources with the calls that make
//! sense for them (launch, relaunch, list children).
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Records, not schemas
//!
//! The API adds fields release by release. Instead of a struct per payload,
//! every resource is a thin wrapper over a [`Record`]: whatever the server
//! sends is reachable, nested objects become child records, and arrays of
//! objects become lists of records.
//!
//! ### Exclusions where structure is not a resource
//!
//! Survey specs, extra vars and host variables are user data, not API
//! objects. Each type declares which field paths stay raw JSON; see
//! [`framework::exclusion`] for the path syntax and how declarations are
//! inherited.
//!
//! ### The transport is someone else's job
//!
//! Requests go through the [`Transport`](framework::Transport) trait. Hosts,
//! credentials, TLS, timeouts and retries live in its implementation; this
//! crate only builds paths and bodies and interprets the returned documents.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Records, exclusions, the transport seam, generic fetch/list.
//! - **Key items**: [`Record`], [`Field`](framework::Field),
//!   [`Resource`](framework::Resource), [`ResourceClient`](framework::ResourceClient).
//!
//! ### 2. The Resources ([`model`])
//! - **Role**: One declaration per endpoint, plus launch variables.
//! - **Key items**: [`JobTemplate`](model::JobTemplate), [`Host`](model::Host),
//!   [`ExtraVars`](model::ExtraVars).
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: Typed clients carrying the resource-specific operations.
//! - **Key items**: [`ApiClient`](clients::ApiClient),
//!   [`JobTemplateClient::launch`](clients::JobTemplateClient::launch).
//!
//! ### 4. The Wiring ([`lifecycle`])
//! - **Role**: Builds every client from one transport; sets up logging.
//! - **Key items**: [`Tower`](lifecycle::Tower), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🧪 Testing
//!
//! [`framework::mock::MockTransport`] replays queued responses and records
//! every request, so client flows can be tested without a server.
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;

pub use framework::{ClientError, Record, Result};

#[doc(hidden)]
pub use paste;

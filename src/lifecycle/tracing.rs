//! # Observability & Tracing
//!
//! The crate logs through `tracing` with structured fields; nothing is printed
//! unless the application installs a subscriber. [`setup_tracing`] installs a
//! compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Requests**: every GET/POST a client issues, with its path (`debug`)
//! - **Operations**: launches and relaunches with the resulting ids (`info`)
//! - **Wrapping**: accessor renames caused by name collisions and
//!   per-type exclusion resolution (`debug`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Operations only
//! RUST_LOG=tower_client=info my-app
//!
//! # Every request path
//! RUST_LOG=tower_client=debug my-app
//! ```
//!
//! With `RUST_LOG=debug` a launch reads:
//!
//! ```text
//! DEBUG launch{template_id=Some(5)}: launch called vars=ExtraVars { .. }
//! DEBUG launch{template_id=Some(5)}:post{path="/api/v1/job_templates/5/launch/" kind="JobTemplate"}: POST has_body=true
//! INFO launch{template_id=Some(5)}: Launched job_id=42
//! DEBUG launch{template_id=Some(5)}:find{id=42}: Sending request
//! ```

/// Installs the global subscriber. Later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Spans already name the operation
        .compact()
        .try_init();
}

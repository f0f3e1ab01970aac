use crate::clients::{
    AdHocCommandClient, GroupClient, HostClient, InventoryClient, JobClient, JobTemplateClient,
};
use crate::framework::{ClientConfig, ResourceClient, Transport};
use std::sync::Arc;
use tracing::info;

/// Entry point: every typed client, wired to one transport and config.
///
/// `Tower` is responsible for:
/// - **Dependency Wiring**: `JobTemplateClient` gets a `JobClient` to resolve
///   launched jobs
/// - **Shared Configuration**: one [`ClientConfig`] behind every URL built
///
/// The clients are cheap to clone and can be moved into tasks independently.
///
/// # Example
///
/// ```rust
/// use tower_client::clients::ApiClient;
/// use tower_client::framework::mock::MockTransport;
/// use tower_client::lifecycle::Tower;
/// use tower_client::model::ExtraVars;
///
/// #[tokio::main]
/// async fn main() {
///     let mock = MockTransport::new();
///     mock.expect_get("/api/v1/job_templates/5/")
///         .return_ok(r#"{"id": 5, "url": "/api/v1/job_templates/5/"}"#);
///     mock.expect_post("/api/v1/job_templates/5/launch/").return_ok(r#"{"job": 42}"#);
///     mock.expect_get("/api/v1/jobs/42/").return_ok(r#"{"id": 42, "status": "pending"}"#);
///
///     let tower = Tower::new(mock.clone());
///     let template = tower.job_templates.find(5).await.unwrap();
///     let job = tower
///         .job_templates
///         .launch(&template, ExtraVars::new().insert("version", "1.2"))
///         .await
///         .unwrap();
///     assert_eq!(job.status(), Some("pending"));
///     mock.verify();
/// }
/// ```
#[derive(Clone)]
pub struct Tower {
    pub job_templates: JobTemplateClient,
    pub jobs: JobClient,
    pub inventories: InventoryClient,
    pub hosts: HostClient,
    pub groups: GroupClient,
    pub ad_hoc_commands: AdHocCommandClient,
    config: Arc<ClientConfig>,
}

impl Tower {
    /// Wires every client with the default configuration.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::with_config(Arc::new(transport), ClientConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        let config = Arc::new(config);
        let base: ResourceClient<crate::model::Job> =
            ResourceClient::new(transport, config.clone());

        let jobs = JobClient::new(base.clone());
        let tower = Self {
            job_templates: JobTemplateClient::new(base.retarget(), jobs.clone()),
            jobs,
            inventories: InventoryClient::new(base.retarget()),
            hosts: HostClient::new(base.retarget()),
            groups: GroupClient::new(base.retarget()),
            ad_hoc_commands: AdHocCommandClient::new(base.retarget()),
            config,
        };
        info!(api_root = %tower.config.api_root, "Clients ready");
        tower
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

use crate::clients::api_client::ApiClient;
use crate::framework::{Resource, ResourceClient, Result};
use crate::model::AdHocCommand;
use tracing::{info, instrument};

/// Client for the `ad_hoc_commands` endpoint.
#[derive(Clone)]
pub struct AdHocCommandClient {
    inner: ResourceClient<AdHocCommand>,
}

impl AdHocCommandClient {
    pub fn new(inner: ResourceClient<AdHocCommand>) -> Self {
        Self { inner }
    }
}

impl ApiClient<AdHocCommand> for AdHocCommandClient {
    fn inner(&self) -> &ResourceClient<AdHocCommand> {
        &self.inner
    }
}

impl AdHocCommandClient {
    /// Runs `command` again; returns the new command the API created.
    #[instrument(skip(self, command), fields(command_id = ?command.id()))]
    pub async fn relaunch(&self, command: &AdHocCommand) -> Result<AdHocCommand> {
        let url = format!("{}relaunch/", self.inner.detail_url(command)?);
        let response = self.inner.post(&url, None).await?;
        let relaunched = AdHocCommand::parse(&response.body)?;
        info!(new_id = ?relaunched.id(), "Relaunched");
        Ok(relaunched)
    }
}

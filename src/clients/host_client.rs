use crate::clients::api_client::ApiClient;
use crate::framework::{ClientError, Collection, Resource, ResourceClient, Result};
use crate::model::Host;
use tracing::instrument;

/// Client for the `hosts` endpoint.
#[derive(Clone)]
pub struct HostClient {
    inner: ResourceClient<Host>,
}

impl HostClient {
    pub fn new(inner: ResourceClient<Host>) -> Self {
        Self { inner }
    }
}

impl ApiClient<Host> for HostClient {
    fn inner(&self) -> &ResourceClient<Host> {
        &self.inner
    }
}

impl HostClient {
    /// The `hosts/{id}/groups/` sub-collection of `host`.
    ///
    /// Entries are wrapped as [`Host`] records, like every collection this
    /// client returns; read group fields through [`Record::attr`](crate::Record::attr).
    #[instrument(skip(self, host), fields(host_id = ?host.id()))]
    pub async fn groups(&self, host: &Host) -> Result<Collection<Host>> {
        let id = host.id().ok_or_else(|| ClientError::missing(Host::KIND, "id"))?;
        let path = self.inner.path(&[&id.to_string(), "groups"]);
        self.inner.list(&path).await
    }
}

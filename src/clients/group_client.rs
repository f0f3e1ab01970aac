use crate::clients::api_client::ApiClient;
use crate::framework::{ClientError, Collection, Resource, ResourceClient, Result};
use crate::model::Group;
use tracing::instrument;

/// Client for the `groups` endpoint.
#[derive(Clone)]
pub struct GroupClient {
    inner: ResourceClient<Group>,
}

impl GroupClient {
    pub fn new(inner: ResourceClient<Group>) -> Self {
        Self { inner }
    }
}

impl ApiClient<Group> for GroupClient {
    fn inner(&self) -> &ResourceClient<Group> {
        &self.inner
    }
}

impl GroupClient {
    /// The groups nested directly under `group`.
    #[instrument(skip(self, group), fields(group_id = ?group.id()))]
    pub async fn children(&self, group: &Group) -> Result<Collection<Group>> {
        let id = group.id().ok_or_else(|| ClientError::missing(Group::KIND, "id"))?;
        let path = self.inner.path(&[&id.to_string(), "children"]);
        self.inner.list(&path).await
    }
}

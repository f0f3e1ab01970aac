use crate::framework::{Resource, ResourceClient, Result};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard lookups.
///
/// Implementors only hand out their inner [`ResourceClient`]; `find` and
/// `all` come for free.
#[async_trait]
pub trait ApiClient<T: Resource + 'static>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch one object by id.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: u64) -> Result<T> {
        tracing::debug!("Sending request");
        self.inner().find(id).await
    }

    /// Fetch every object, following pagination.
    #[tracing::instrument(skip(self))]
    async fn all(&self) -> Result<Vec<T>> {
        tracing::debug!("Sending request");
        self.inner().all().await
    }
}

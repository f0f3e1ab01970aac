use crate::clients::api_client::ApiClient;
use crate::framework::ResourceClient;
use crate::model::Inventory;

/// Client for the `inventories` endpoint.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<Inventory>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<Inventory>) -> Self {
        Self { inner }
    }
}

impl ApiClient<Inventory> for InventoryClient {
    fn inner(&self) -> &ResourceClient<Inventory> {
        &self.inner
    }
}

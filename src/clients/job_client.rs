use crate::clients::api_client::ApiClient;
use crate::framework::ResourceClient;
use crate::model::Job;

/// Client for the `jobs` endpoint.
#[derive(Clone)]
pub struct JobClient {
    inner: ResourceClient<Job>,
}

impl JobClient {
    pub fn new(inner: ResourceClient<Job>) -> Self {
        Self { inner }
    }
}

impl ApiClient<Job> for JobClient {
    fn inner(&self) -> &ResourceClient<Job> {
        &self.inner
    }
}

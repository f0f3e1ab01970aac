//! # Job Template Client
//!
//! Provides a high-level API for the `job_templates` endpoint.
//! Launching needs the [`JobClient`] as well: the launch response only names
//! the new job's id, so the job itself is fetched afterwards.
use crate::clients::api_client::ApiClient;
use crate::clients::job_client::JobClient;
use crate::framework::{ClientError, Resource, ResourceClient, Result};
use crate::model::{ExtraVars, Job, JobTemplate};
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Client for the `job_templates` endpoint.
#[derive(Clone)]
pub struct JobTemplateClient {
    inner: ResourceClient<JobTemplate>,
    jobs: JobClient,
}

impl JobTemplateClient {
    pub fn new(inner: ResourceClient<JobTemplate>, jobs: JobClient) -> Self {
        Self { inner, jobs }
    }
}

impl ApiClient<JobTemplate> for JobTemplateClient {
    fn inner(&self) -> &ResourceClient<JobTemplate> {
        &self.inner
    }
}

impl JobTemplateClient {
    /// Launches `template` and returns the job it started.
    ///
    /// Posts to `{url}launch/`, reads the `job` id from the response and
    /// fetches that job.
    #[instrument(skip(self, template, vars), fields(template_id = ?template.id()))]
    pub async fn launch(&self, template: &JobTemplate, vars: ExtraVars) -> Result<Job> {
        debug!(?vars, "launch called");
        let launch_url = format!("{}launch/", self.inner.detail_url(template)?);
        let response = self.inner.post(&launch_url, vars.to_body()).await?;

        let launched: Value = serde_json::from_str(&response.body)?;
        let job_id = launched
            .get("job")
            .and_then(Value::as_u64)
            .ok_or_else(|| ClientError::missing("launch response", "job"))?;
        info!(job_id, "Launched");

        self.jobs.find(job_id).await
    }

    /// The template's survey spec, or `None` when it has no survey link.
    #[instrument(skip(self, template), fields(template_id = ?template.id()))]
    pub async fn survey_spec(&self, template: &JobTemplate) -> Result<Option<Value>> {
        let Some(link) = template.related("survey_spec") else {
            debug!("No survey_spec link");
            return Ok(None);
        };
        let response = self.inner.get(&link).await?;
        Ok(Some(serde_json::from_str(&response.body)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{Method, MockTransport};
    use crate::framework::{ClientConfig, Transport};
    use std::sync::Arc;

    fn client(mock: &MockTransport) -> JobTemplateClient {
        let transport: Arc<dyn Transport> = Arc::new(mock.clone());
        let config = Arc::new(ClientConfig::default());
        let inner = ResourceClient::new(transport, config);
        JobTemplateClient::new(inner.clone(), JobClient::new(inner.retarget()))
    }

    #[tokio::test]
    async fn test_launch_without_url_uses_detail_path() {
        let mock = MockTransport::new();
        mock.expect_post("/api/v1/job_templates/5/launch/")
            .return_status(201, r#"{"job": 9}"#);
        mock.expect_get("/api/v1/jobs/9/").return_ok(r#"{"id": 9}"#);

        let template = JobTemplate::parse(r#"{"id": 5}"#).unwrap();
        let job = client(&mock).launch(&template, ExtraVars::new()).await.unwrap();

        assert_eq!(job.id(), Some(9));
        let requests = mock.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].body, None);
        mock.verify();
    }

    #[tokio::test]
    async fn test_launch_response_without_job() {
        let mock = MockTransport::new();
        mock.expect_post("/api/v1/job_templates/5/launch/")
            .return_status(400, r#"{"detail": "missing credential"}"#);

        let template = JobTemplate::parse(r#"{"id": 5}"#).unwrap();
        let err = client(&mock).launch(&template, ExtraVars::new()).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingField { ref field, .. } if field == "job"));
    }

    #[tokio::test]
    async fn test_launch_without_url_or_id() {
        let mock = MockTransport::new();
        let template = JobTemplate::parse(r#"{"name": "orphan"}"#).unwrap();
        let err = client(&mock).launch(&template, ExtraVars::new()).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingField { ref field, .. } if field == "id"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_survey_spec_absent() {
        let mock = MockTransport::new();
        let template = JobTemplate::parse(r#"{"id": 5, "related": {}}"#).unwrap();
        let spec = client(&mock).survey_spec(&template).await.unwrap();
        assert_eq!(spec, None);
        assert!(mock.requests().is_empty());
    }
}

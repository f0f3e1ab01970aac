use serde_json::json;
use tower_client::clients::ApiClient;
use tower_client::framework::mock::{Method, MockTransport};
use tower_client::framework::{ClientConfig, Resource};
use tower_client::lifecycle::Tower;
use tower_client::model::{AdHocCommand, ExtraVars, Group, Host, JobTemplate};
use tower_client::ClientError;

const TEMPLATE: &str = r#"{
    "id": 5,
    "url": "/api/v1/job_templates/5/",
    "name": "deploy",
    "related": {"survey_spec": "/api/v1/job_templates/5/survey_spec/"},
    "extra_vars": "version: 1.0"
}"#;

/// End-to-end launch: POST to the launch URL, then resolve the started job.
#[tokio::test]
async fn test_launch_job_template() {
    let mock = MockTransport::new();
    mock.expect_post("/api/v1/job_templates/5/launch/")
        .return_status(201, r#"{"job": 42}"#);
    mock.expect_get("/api/v1/jobs/42/")
        .return_ok(r#"{"id": 42, "status": "pending"}"#);

    let tower = Tower::new(mock.clone());
    let template = JobTemplate::parse(TEMPLATE).unwrap();
    let vars = ExtraVars::new().insert("version", "1.2");

    let job = tower.job_templates.launch(&template, vars).await.unwrap();

    assert_eq!(job.id(), Some(42));
    assert_eq!(job.status(), Some("pending"));
    mock.verify();

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::Post);
    let body: serde_json::Value =
        serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"extra_vars": "{\"version\":\"1.2\"}"}));
}

#[tokio::test]
async fn test_launch_transport_failure_is_surfaced() {
    let mock = MockTransport::new();
    mock.expect_post("/api/v1/job_templates/5/launch/")
        .return_err(ClientError::transport("connection refused"));

    let tower = Tower::new(mock.clone());
    let template = JobTemplate::parse(TEMPLATE).unwrap();
    let err = tower
        .job_templates
        .launch(&template, ExtraVars::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.to_string(), "Transport error: connection refused");
    mock.verify();
}

#[tokio::test]
async fn test_survey_spec_follows_related_link() {
    let mock = MockTransport::new();
    mock.expect_get("/api/v1/job_templates/5/survey_spec/")
        .return_ok(r#"{"name": "", "spec": [{"variable": "version", "required": true}]}"#);

    let tower = Tower::new(mock.clone());
    let template = JobTemplate::parse(TEMPLATE).unwrap();
    let spec = tower.job_templates.survey_spec(&template).await.unwrap().unwrap();

    assert_eq!(spec["spec"][0]["variable"], "version");
    mock.verify();
}

#[tokio::test]
async fn test_survey_spec_absent_is_not_an_error() {
    let mock = MockTransport::new();
    let tower = Tower::new(mock.clone());
    let template = JobTemplate::parse(r#"{"id": 6, "related": {"jobs": "/api/v1/job_templates/6/jobs/"}}"#).unwrap();

    let spec = tower.job_templates.survey_spec(&template).await.unwrap();

    assert!(spec.is_none());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_relaunch_ad_hoc_command() {
    let mock = MockTransport::new();
    mock.expect_post("/api/v1/ad_hoc_commands/3/relaunch/")
        .return_status(201, r#"{"id": 4, "status": "pending", "extra_vars": {"a": {"b": 1}}}"#);

    let tower = Tower::new(mock.clone());
    let command = AdHocCommand::parse(r#"{"id": 3, "url": "/api/v1/ad_hoc_commands/3/"}"#).unwrap();

    let relaunched = tower.ad_hoc_commands.relaunch(&command).await.unwrap();

    assert_eq!(relaunched.id(), Some(4));
    // Inherited exclusion: extra_vars stays raw.
    assert!(relaunched.attr("extra_vars").unwrap().as_record().is_none());
    assert_eq!(mock.requests()[0].body, None);
    mock.verify();
}

#[tokio::test]
async fn test_host_groups() {
    let mock = MockTransport::new();
    mock.expect_get("/api/v1/hosts/7/groups/").return_ok(
        r#"{"count": 2, "next": null, "previous": null,
            "results": [{"id": 1, "name": "web"}, {"id": 2, "name": "db"}]}"#,
    );

    let tower = Tower::new(mock.clone());
    let host = Host::parse(r#"{"id": 7, "name": "web1"}"#).unwrap();

    let groups = tower.hosts.groups(&host).await.unwrap();

    let names: Vec<_> = groups.iter().filter_map(Host::name).collect();
    assert_eq!(names, vec!["web", "db"]);
    assert_eq!(groups.count(), Some(2));
    assert!(groups.iter().all(|g| g.kind() == "Host"));
    mock.verify();
}

#[tokio::test]
async fn test_group_children() {
    let mock = MockTransport::new();
    mock.expect_get("/api/v1/groups/1/children/")
        .return_ok(r#"[{"id": 10, "name": "web-east"}, {"id": 11, "name": "web-west"}]"#);

    let tower = Tower::new(mock.clone());
    let group = Group::parse(r#"{"id": 1, "name": "web"}"#).unwrap();

    let children = tower.groups.children(&group).await.unwrap();

    let ids: Vec<_> = children.into_iter().filter_map(|g| g.id()).collect();
    assert_eq!(ids, vec![10, 11]);
    mock.verify();
}

#[tokio::test]
async fn test_children_requires_id() {
    let mock = MockTransport::new();
    let tower = Tower::new(mock.clone());
    let group = Group::parse(r#"{"name": "unsaved"}"#).unwrap();

    let err = tower.groups.children(&group).await.unwrap_err();

    assert!(matches!(err, ClientError::MissingField { ref kind, .. } if kind == "Group"));
}

#[tokio::test]
async fn test_find_and_all_follow_pages() {
    let mock = MockTransport::new();
    mock.expect_get("/api/v1/inventories/").return_ok(
        r#"{"count": 3, "next": "/api/v1/inventories/?page=2",
            "results": [{"id": 1}, {"id": 2}]}"#,
    );
    mock.expect_get("/api/v1/inventories/?page=2")
        .return_ok(r#"{"count": 3, "next": null, "results": [{"id": 3}]}"#);
    mock.expect_get("/api/v1/inventories/2/")
        .return_ok(r#"{"id": 2, "name": "prod", "variables": {"env": {"tier": 1}}}"#);

    let tower = Tower::new(mock.clone());

    let all = tower.inventories.all().await.unwrap();
    let ids: Vec<_> = all.iter().filter_map(|i| i.id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let inventory = tower.inventories.find(2).await.unwrap();
    assert_eq!(inventory.name(), Some("prod"));
    assert!(inventory.attr("variables").unwrap().as_record().is_none());
    mock.verify();
}

#[tokio::test]
async fn test_all_stops_at_page_limit() {
    let mock = MockTransport::new();
    mock.expect_get("/api/v2/hosts/")
        .return_ok(r#"{"next": "/api/v2/hosts/?page=2", "results": [{"id": 1}]}"#);

    let config = ClientConfig {
        api_root: "/api/v2/".to_string(),
        max_pages: 1,
    };
    let tower = Tower::with_config(std::sync::Arc::new(mock.clone()), config);

    let hosts = tower.hosts.all().await.unwrap();

    assert_eq!(hosts.len(), 1);
    assert_eq!(tower.config().api_root, "/api/v2/");
    mock.verify();
}

#[tokio::test]
async fn test_clients_share_transport_across_clones() {
    let mock = MockTransport::new();
    mock.expect_get("/api/v1/jobs/1/").return_ok(r#"{"id": 1}"#);
    mock.expect_get("/api/v1/jobs/2/").return_ok(r#"{"id": 2}"#);

    let tower = Tower::new(mock.clone());
    let jobs = tower.jobs.clone();

    let first = tokio::spawn(async move { jobs.find(1).await }).await.unwrap().unwrap();
    let second = tower.jobs.find(2).await.unwrap();

    assert_eq!(first.id(), Some(1));
    assert_eq!(second.id(), Some(2));
    mock.verify();
}

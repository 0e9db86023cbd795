//! GraphQL API integration tests
//!
//! Drive the HTTP router end to end against a file-backed SQLite database.

use anyhow::Result;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::Duration;
use periodize::auth::TokenSettings;
use periodize::database::{establish_connection, setup_database};
use periodize_server::server::app::create_app;
use serde_json::{json, Value};
use tempfile::TempDir;

const SECRET: &str = "integration-secret";

struct TestApp {
    server: TestServer,
    // Held so the database file outlives the server.
    _dir: TempDir,
}

impl TestApp {
    async fn new() -> Result<Self> {
        Self::with_ttl(Duration::hours(1)).await
    }

    async fn with_ttl(ttl: Duration) -> Result<Self> {
        let dir = TempDir::new()?;
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let db = establish_connection(&db_url).await?;
        setup_database(&db).await?;

        let app = create_app(db, &TokenSettings::new(SECRET, ttl), Some("*")).await?;
        let server = TestServer::new(app)?;

        Ok(Self { server, _dir: dir })
    }

    async fn graphql(&self, token: Option<&str>, query: &str, variables: Value) -> Value {
        let mut request = self.server.post("/graphql");
        if let Some(token) = token {
            request = request.add_header(
                HeaderName::from_static("authorization"),
                HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
            );
        }

        let response = request
            .json(&json!({ "query": query, "variables": variables }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        response.json()
    }

    async fn signup(&self, email: &str, name: &str) -> String {
        let body = self
            .graphql(
                None,
                "mutation($email: String!, $name: String!) {
                    signup(email: $email, password: \"pw\", name: $name) { token user { id email } }
                }",
                json!({ "email": email, "name": name }),
            )
            .await;
        body["data"]["signup"]["token"]
            .as_str()
            .expect("signup returns a token")
            .to_string()
    }

    async fn create_plan(&self, token: &str, title: &str) -> String {
        let body = self
            .graphql(
                Some(token),
                "mutation($title: String!) { createPlan(title: $title) { id } }",
                json!({ "title": title }),
            )
            .await;
        body["data"]["createPlan"]["id"]
            .as_str()
            .expect("createPlan returns an id")
            .to_string()
    }
}

fn error_code(body: &Value) -> &str {
    body["errors"][0]["extensions"]["code"]
        .as_str()
        .unwrap_or_default()
}

const CREATE_PHASE: &str = "mutation($planId: ID!) {
    createPhase(planId: $planId, title: \"Base\", description: \"Aerobic base\", order: 1) {
        id title description order plan { title } createdBy { email }
    }
}";

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let app = TestApp::new().await?;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "periodize-server");
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_signup_login_and_ownership_flow() -> Result<()> {
    let app = TestApp::new().await?;

    let owner_token = app.signup("a@x.com", "A").await;

    let login = app
        .graphql(
            None,
            "mutation { login(email: \"a@x.com\", password: \"pw\") { token user { email name } } }",
            json!({}),
        )
        .await;
    assert!(login["errors"].is_null());
    assert_eq!(login["data"]["login"]["user"]["name"], "A");
    let login_token = login["data"]["login"]["token"].as_str().unwrap();

    let plan_id = app.create_plan(login_token, "P1").await;

    let phase = app
        .graphql(Some(&owner_token), CREATE_PHASE, json!({ "planId": plan_id }))
        .await;
    assert!(phase["errors"].is_null(), "unexpected errors: {}", phase);
    assert_eq!(phase["data"]["createPhase"]["order"], 1);
    assert_eq!(phase["data"]["createPhase"]["plan"]["title"], "P1");
    assert_eq!(phase["data"]["createPhase"]["createdBy"]["email"], "a@x.com");

    let intruder_token = app.signup("b@x.com", "B").await;
    let rejected = app
        .graphql(Some(&intruder_token), CREATE_PHASE, json!({ "planId": plan_id }))
        .await;
    assert_eq!(error_code(&rejected), "OWNERSHIP_OR_EXISTENCE");
    assert_eq!(
        rejected["errors"][0]["message"],
        format!(
            "The plan does not exist, or the logged in user does not own it (planId: {})",
            plan_id
        )
    );

    let phases = app
        .graphql(None, "{ phases { title } }", json!({}))
        .await;
    assert_eq!(phases["data"]["phases"].as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_missing_parent_matches_foreign_parent() -> Result<()> {
    let app = TestApp::new().await?;
    let token = app.signup("a@x.com", "A").await;

    let body = app
        .graphql(Some(&token), CREATE_PHASE, json!({ "planId": "no-such-plan" }))
        .await;

    assert_eq!(error_code(&body), "OWNERSHIP_OR_EXISTENCE");
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .ends_with("(planId: no-such-plan)"));

    Ok(())
}

#[tokio::test]
async fn test_create_requires_authentication() -> Result<()> {
    let app = TestApp::new().await?;

    let anonymous = app
        .graphql(None, "mutation { createPlan(title: \"P1\") { id } }", json!({}))
        .await;
    assert_eq!(error_code(&anonymous), "UNAUTHENTICATED");
    assert_eq!(anonymous["errors"][0]["message"], "Not authenticated");

    let forged = app
        .graphql(
            Some("not-a-real-token"),
            "mutation { createPlan(title: \"P1\") { id } }",
            json!({}),
        )
        .await;
    assert_eq!(error_code(&forged), "UNAUTHENTICATED");

    let plans = app.graphql(None, "{ plans { id } }", json!({})).await;
    assert_eq!(plans["data"]["plans"], json!([]));

    Ok(())
}

#[tokio::test]
async fn test_expired_token_is_rejected() -> Result<()> {
    let app = TestApp::with_ttl(Duration::seconds(-600)).await?;
    let token = app.signup("a@x.com", "A").await;

    let body = app
        .graphql(Some(&token), "{ me { email } }", json!({}))
        .await;
    assert_eq!(error_code(&body), "UNAUTHENTICATED");
    assert_eq!(body["errors"][0]["message"], "Authentication token has expired");

    Ok(())
}

#[tokio::test]
async fn test_login_errors() -> Result<()> {
    let app = TestApp::new().await?;
    app.signup("a@x.com", "A").await;

    let unknown = app
        .graphql(
            None,
            "mutation { login(email: \"nobody@x.com\", password: \"pw\") { token } }",
            json!({}),
        )
        .await;
    assert_eq!(unknown["errors"][0]["message"], "No such user found");
    assert_eq!(error_code(&unknown), "NOT_FOUND");

    let wrong = app
        .graphql(
            None,
            "mutation { login(email: \"a@x.com\", password: \"nope\") { token } }",
            json!({}),
        )
        .await;
    assert_eq!(wrong["errors"][0]["message"], "Invalid password");
    assert_eq!(error_code(&wrong), "INVALID_CREDENTIAL");

    let duplicate = app
        .graphql(
            None,
            "mutation { signup(email: \"a@x.com\", password: \"pw\", name: \"Again\") { token } }",
            json!({}),
        )
        .await;
    assert_eq!(error_code(&duplicate), "CONFLICT");

    Ok(())
}

#[tokio::test]
async fn test_full_hierarchy_and_nested_fields() -> Result<()> {
    let app = TestApp::new().await?;
    let token = app.signup("coach@x.com", "Coach").await;
    let plan_id = app.create_plan(&token, "Marathon").await;

    let phase = app
        .graphql(Some(&token), CREATE_PHASE, json!({ "planId": plan_id }))
        .await;
    let phase_id = phase["data"]["createPhase"]["id"].as_str().unwrap();

    let week = app
        .graphql(
            Some(&token),
            "mutation($phaseId: ID!) {
                createWeek(phaseId: $phaseId, title: \"Week 1\", order: 1) { id order description }
            }",
            json!({ "phaseId": phase_id }),
        )
        .await;
    assert!(week["errors"].is_null(), "unexpected errors: {}", week);
    assert!(week["data"]["createWeek"]["description"].is_null());
    let week_id = week["data"]["createWeek"]["id"].as_str().unwrap();

    let session = app
        .graphql(
            Some(&token),
            "mutation($weekId: ID!) {
                createSession(weekId: $weekId, title: \"Long run\", purpose: \"Endurance\", order: 6) {
                    id day purpose week { title }
                }
            }",
            json!({ "weekId": week_id }),
        )
        .await;
    assert!(session["errors"].is_null(), "unexpected errors: {}", session);
    assert_eq!(session["data"]["createSession"]["day"], 6);
    assert_eq!(session["data"]["createSession"]["purpose"], "Endurance");
    assert_eq!(session["data"]["createSession"]["week"]["title"], "Week 1");

    let tree = app
        .graphql(
            None,
            "query($planId: ID!) {
                plan(id: $planId) {
                    title
                    createdBy { name }
                    phases { title weeks { title sessions { title day } } }
                }
            }",
            json!({ "planId": plan_id }),
        )
        .await;
    let plan = &tree["data"]["plan"];
    assert_eq!(plan["createdBy"]["name"], "Coach");
    assert_eq!(
        plan["phases"][0]["weeks"][0]["sessions"][0]["title"],
        "Long run"
    );

    let me = app
        .graphql(Some(&token), "{ me { email plans { title } } }", json!({}))
        .await;
    assert_eq!(me["data"]["me"]["email"], "coach@x.com");
    assert_eq!(me["data"]["me"]["plans"][0]["title"], "Marathon");

    let missing = app
        .graphql(None, "{ session(id: \"nope\") { id } }", json!({}))
        .await;
    assert!(missing["errors"].is_null());
    assert!(missing["data"]["session"].is_null());

    Ok(())
}

#[tokio::test]
async fn test_bare_token_is_accepted() -> Result<()> {
    let app = TestApp::new().await?;
    let token = app.signup("a@x.com", "A").await;

    let response = app
        .server
        .post("/graphql")
        .add_header(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&token)?,
        )
        .json(&json!({ "query": "{ me { email } }" }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["data"]["me"]["email"], "a@x.com");

    Ok(())
}

#[tokio::test]
async fn test_blank_bearer_header_counts_as_anonymous() -> Result<()> {
    let app = TestApp::new().await?;

    let response = app
        .server
        .post("/graphql")
        .add_header(
            HeaderName::from_static("authorization"),
            HeaderValue::from_static("Bearer "),
        )
        .json(&json!({ "query": "mutation { createPlan(title: \"P1\") { id } }" }))
        .await;

    let body: Value = response.json();
    assert_eq!(error_code(&body), "UNAUTHENTICATED");
    assert_eq!(body["errors"][0]["message"], "Not authenticated");

    Ok(())
}

async fn build_chain(app: &TestApp, token: &str, label: &str) {
    let plan_id = app.create_plan(token, &format!("{} plan", label)).await;

    let phase = app
        .graphql(Some(token), CREATE_PHASE, json!({ "planId": plan_id }))
        .await;
    let phase_id = phase["data"]["createPhase"]["id"].as_str().unwrap();

    let week = app
        .graphql(
            Some(token),
            "mutation($phaseId: ID!) { createWeek(phaseId: $phaseId, title: \"W\", order: 1) { id } }",
            json!({ "phaseId": phase_id }),
        )
        .await;
    let week_id = week["data"]["createWeek"]["id"].as_str().unwrap();

    let session = app
        .graphql(
            Some(token),
            "mutation($weekId: ID!) { createSession(weekId: $weekId, title: \"S\", order: 2) { id } }",
            json!({ "weekId": week_id }),
        )
        .await;
    assert!(session["errors"].is_null(), "unexpected errors: {}", session);
}

#[tokio::test]
async fn test_lists_return_every_record_for_any_caller() -> Result<()> {
    let app = TestApp::new().await?;
    let first = app.signup("a@x.com", "A").await;
    let second = app.signup("b@x.com", "B").await;
    build_chain(&app, &first, "A").await;
    build_chain(&app, &second, "B").await;

    let outsider = app.signup("c@x.com", "C").await;
    let query = "{
        plans { createdBy { email } }
        phases { id }
        weeks { id }
        sessions { id }
    }";

    for token in [None, Some(outsider.as_str())] {
        let body = app.graphql(token, query, json!({})).await;
        assert!(body["errors"].is_null(), "unexpected errors: {}", body);

        for field in ["plans", "phases", "weeks", "sessions"] {
            assert_eq!(
                body["data"][field].as_array().unwrap().len(),
                2,
                "{} for caller {:?}",
                field,
                token
            );
        }

        let mut owners: Vec<&str> = body["data"]["plans"]
            .as_array()
            .unwrap()
            .iter()
            .map(|plan| plan["createdBy"]["email"].as_str().unwrap())
            .collect();
        owners.sort();
        assert_eq!(owners, vec!["a@x.com", "b@x.com"]);
    }

    Ok(())
}

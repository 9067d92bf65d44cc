use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use sea_orm::{ConnectOptions, Database};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

struct TestApp {
    base_url: String,
}

/// Boot the full router against an in-memory database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    // One pooled connection keeps the in-memory database alive and shared.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;

    let state = ServerState { db };
    let app: Router = routes::build_router(state, CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");

    Ok(())
}

#[tokio::test]
async fn e2e_list_empty() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client().get(format!("{}/api/employees", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!([]));

    Ok(())
}

#[tokio::test]
async fn e2e_create_and_fetch_employee() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/api/employees", app.base_url))
        .json(&json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane.doe@example.com"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["firstName"], "Jane");
    assert_eq!(created["lastName"], "Doe");
    assert_eq!(created["email"], "jane.doe@example.com");
    let id = created["id"].as_i64().expect("assigned id");

    let res = c
        .get(format!("{}/api/employees/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let fetched = res.json::<serde_json::Value>().await?;
    assert_eq!(fetched["firstName"], "Jane");
    assert_eq!(fetched["id"], json!(id));

    let res = c.get(format!("{}/api/employees", app.base_url)).send().await?;
    let all = res.json::<serde_json::Value>().await?;
    assert_eq!(all.as_array().map(|a| a.len()), Some(1));

    Ok(())
}

#[tokio::test]
async fn e2e_fetch_unknown_employee_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = client()
        .get(format!("{}/api/employees/999", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "employee not found");

    Ok(())
}

#[tokio::test]
async fn e2e_delete_employee() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/api/employees", app.base_url))
        .json(&json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@example.com"
        }))
        .send()
        .await?;
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_i64().expect("assigned id");

    let res = c
        .delete(format!("{}/api/employees/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c
        .get(format!("{}/api/employees/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // Deleting the same id again is still a success.
    let res = c
        .delete(format!("{}/api/employees/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
async fn e2e_create_ignores_unknown_and_missing_fields() -> anyhow::Result<()> {
    let app = start_server().await?;

    // Unknown fields are dropped, missing ones default to empty strings.
    let res = client()
        .post(format!("{}/api/employees", app.base_url))
        .json(&json!({
            "firstName": "Solo",
            "department": "not-a-field"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["firstName"], "Solo");
    assert_eq!(created["lastName"], "");
    assert_eq!(created["email"], "");

    Ok(())
}

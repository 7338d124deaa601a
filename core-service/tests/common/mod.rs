#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use late_show_api::db::{self, DbPool};
use late_show_api::{build_router, seed, AppState};
use serde_json::Value;
use tempfile::NamedTempFile;
use tower::ServiceExt;

/// A migrated, seeded SQLite database that lives as long as the value.
pub struct TestDb {
    pub pool: DbPool,
    _file: NamedTempFile,
}

impl TestDb {
    pub fn empty() -> Self {
        let file = tempfile::Builder::new()
            .suffix("-late-show.db")
            .tempfile()
            .unwrap();
        let pool = db::establish_connection_pool(file.path().to_str().unwrap(), 2).unwrap();
        db::run_migrations(&pool).unwrap();
        Self { pool, _file: file }
    }

    pub fn seeded() -> Self {
        let test_db = Self::empty();
        seed::seed_database(&test_db.pool).unwrap();
        test_db
    }

    pub fn app(&self) -> Router {
        build_router(AppState::new(self.pool.clone()))
    }
}

pub async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(app, "GET", uri, None).await;
    (status, serde_json::from_slice(&body).unwrap())
}

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use todo_store::Store;

use crate::middleware::USERNAME_HEADER;
use crate::routes::router;
use crate::users::{AppState, AppStateInner};

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Value,
}

/// In-process app over a fresh store.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppStateInner::new(Store::new());
        let router = router(state.clone());
        Self { state, router }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        username: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let resp = self.request(method, uri, username, body).await;
        (resp.status, resp.body)
    }

    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        username: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let resp = self.request_raw(method, uri, username, body).await;
        (resp.status, resp.body)
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        username: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let body = body.map(|b| b.to_string()).unwrap_or_default();
        self.request_raw(method, uri, username, &body).await
    }

    /// Empty response bodies come back as `Value::Null`.
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        username: Option<&str>,
        body: &str,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(username) = username {
            req = req.header(USERNAME_HEADER, username);
        }
        if !body.is_empty() {
            req = req.header(header::CONTENT_TYPE, "application/json");
        }
        let req = req.body(Body::from(body.to_string())).unwrap();

        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse { status, content_type, body }
    }

    pub async fn register(&self, name: &str, username: &str) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/users",
                None,
                Some(json!({ "name": name, "username": username })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    pub async fn create_todo(&self, username: &str, title: &str, deadline: Value) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/todos",
                Some(username),
                Some(json!({ "title": title, "deadline": deadline })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }
}

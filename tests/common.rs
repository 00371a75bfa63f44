#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use jobs_app::config::{extract_config, ConfigV1};
use jobs_app::routes::create_router;
use jobs_app::state::AppState;

pub const TEST_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "json"
jwt:
  secret: test-secret
bind_address: 127.0.0.1:8081
"#;

pub fn load_test_config() -> ConfigV1 {
    let figment = Figment::new().merge(Yaml::string(TEST_CONFIG));
    extract_config(&figment).expect("Failed to parse test config YAML")
}

pub fn build_app(config: ConfigV1) -> (Router, Arc<ConfigV1>) {
    let config = Arc::new(config);
    let state = AppState {
        config: config.clone(),
    };
    (create_router(state), config)
}

pub fn request(path: &str, host: Option<&str>, method: Method) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(host) = host {
        builder = builder.header("Host", host);
    }
    builder.body(Body::empty()).expect("failed to build request")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not UTF-8")
}

/// Pull the token out of the `Authorization: Bearer ...` line of the page.
pub fn bearer_token(page: &str) -> &str {
    let start = page
        .find("Authorization: Bearer ")
        .expect("Authorization line missing")
        + "Authorization: Bearer ".len();
    page[start..]
        .split_whitespace()
        .next()
        .expect("token missing")
}

// Shared test helpers for mock upstream setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use breach_check::{Config, LookupService};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock upstream serves lookups on.
pub const LOOKUP_PATH: &str = "/api/public";

/// Builds a lookup service pointed at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn service_for(server: &MockServer) -> LookupService {
    let config = Config {
        endpoint: format!("{}{}", server.uri(), LOOKUP_PATH),
        timeout_seconds: 5,
        user_agent: "breach_check_test/1.0".to_string(),
        ..Default::default()
    };
    LookupService::new(&config).expect("Failed to build lookup service")
}

/// Starts a mock upstream that answers every lookup with `response`.
#[allow(dead_code)] // Used by other test files
pub async fn upstream_responding(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for todoboard-adapter tests

use todoboard_adapter::{ClientConfig, TodoClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with a test API key
pub fn client_for(server: &MockServer) -> TodoClient {
    let mut client = TodoClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    client.set_api_key(mock_api_key());
    client
}

/// Opaque API key used by tests
pub fn mock_api_key() -> String {
    "0f1e2d3c-test-api-key".to_string()
}

/// Wire JSON for a list
pub fn list_json(id: &str, title: &str, order: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "addedDate": "2019-07-30T12:24:15.063",
        "order": order
    })
}

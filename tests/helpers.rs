// Shared test helpers for mock DoH servers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use domain_check::DohClient;
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DOH_PATH: &str = "/dns-query";

/// Endpoint URL of the mock DoH server.
#[allow(dead_code)] // Used by other test files
pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), DOH_PATH)
}

/// Creates a `DohClient` pointed at the mock server.
pub fn test_client(server: &MockServer) -> DohClient {
    let endpoint = Url::parse(&endpoint(server)).expect("mock server URL should parse");
    DohClient::new(Arc::new(reqwest::Client::new()), endpoint)
}

/// Builds a DNS JSON body with one answer per `(type, data)` pair.
pub fn answer_body(name: &str, answers: &[(u16, &str)]) -> Value {
    let answer: Vec<Value> = answers
        .iter()
        .map(|(rtype, data)| json!({ "name": name, "type": rtype, "TTL": 300, "data": data }))
        .collect();
    json!({
        "Status": 0,
        "TC": false,
        "RD": true,
        "RA": true,
        "AD": false,
        "CD": false,
        "Question": [{ "name": name, "type": answers.first().map(|a| a.0).unwrap_or(1) }],
        "Answer": answer,
    })
}

/// Mounts a JSON answer for `(name, type)` on the mock server.
pub async fn mount_answer(server: &MockServer, name: &str, rtype: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(DOH_PATH))
        .and(query_param("name", name))
        .and(query_param("type", rtype))
        .and(header("accept", "application/dns-json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// `(type, name)` query parameters of every request the server received, in order.
#[allow(dead_code)] // Used by other test files
pub async fn received_queries(server: &MockServer) -> Vec<(String, String)> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| {
            let mut rtype = String::new();
            let mut name = String::new();
            for (key, value) in request.url.query_pairs() {
                match key.as_ref() {
                    "type" => rtype = value.into_owned(),
                    "name" => name = value.into_owned(),
                    _ => {}
                }
            }
            (rtype, name)
        })
        .collect()
}

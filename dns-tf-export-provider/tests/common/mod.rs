//! Shared test tooling

#![allow(dead_code)]

use std::env;

use dns_tf_export_provider::UltraDnsProvider;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Skip a test when any of the given environment variables is missing
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: environment variable {} is not set", $var);
                return;
            }
        )+
    };
}

/// Token handed out by [`mount_token`].
pub const TEST_TOKEN: &str = "test-access-token";

/// Live test context built from the environment
pub struct TestContext {
    pub provider: UltraDnsProvider,
    pub account: Option<String>,
}

impl TestContext {
    /// `ULTRADNS_USERNAME`, `ULTRADNS_PASSWORD`, optional `ULTRADNS_API_URL` and `ULTRADNS_ACCOUNT`
    pub fn ultradns() -> Option<Self> {
        let username = env::var("ULTRADNS_USERNAME").ok()?;
        let password = env::var("ULTRADNS_PASSWORD").ok()?;
        let mut builder = UltraDnsProvider::builder(username, password);
        if let Ok(url) = env::var("ULTRADNS_API_URL") {
            builder = builder.base_url(&url);
        }
        Some(Self {
            provider: builder.build().ok()?,
            account: env::var("ULTRADNS_ACCOUNT").ok(),
        })
    }
}

/// Provider pointed at a mock server.
pub fn mock_provider(server: &MockServer) -> UltraDnsProvider {
    UltraDnsProvider::builder("alice".to_string(), "s3cret".to_string())
        .base_url(&server.uri())
        .build()
        .expect("failed to build provider")
}

/// Mount a successful password grant, expected exactly once.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v2/authorization/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokenType": "Bearer",
            "accessToken": TEST_TOKEN,
            "refreshToken": "refresh",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// `count` record sets named `r{start}..` in `zone`.
pub fn rrsets(zone: &str, start: usize, count: usize) -> Vec<Value> {
    (start..start + count)
        .map(|i| {
            json!({
                "ownerName": format!("r{i}.{zone}"),
                "rrtype": "A (1)",
                "ttl": 300,
                "rdata": [format!("192.0.2.{}", i % 250)]
            })
        })
        .collect()
}

/// Record-set listing body with consistent `resultInfo`.
pub fn rrset_body(zone: &str, items: Vec<Value>, offset: usize, total: usize) -> Value {
    let returned = items.len();
    json!({
        "zoneName": zone,
        "rrSets": items,
        "queryInfo": {"sort": "OWNER", "reverse": false, "limit": 100},
        "resultInfo": {"totalCount": total, "offset": offset, "returnedCount": returned}
    })
}

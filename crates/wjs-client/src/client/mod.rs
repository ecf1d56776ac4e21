//! Wiki.js GraphQL API client.
//!
//! Sync HTTP client for the Wiki.js GraphQL API, authenticating every
//! request with a Bearer API key.

mod pages;

use std::time::Duration;

use serde_json::json;
use ureq::Agent;

use crate::error::ClientError;
use crate::types::GraphQlResponse;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Wiki.js error code for a missing page.
const PAGE_NOT_FOUND: i64 = 6003;

/// Wiki.js GraphQL API client.
pub struct WikiJsClient {
    agent: Agent,
    endpoint: String,
    api_key: String,
}

impl WikiJsClient {
    /// Create a client for the given GraphQL endpoint and API key.
    #[must_use]
    pub fn new(api_url: &str, api_key: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: api_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    /// POST one GraphQL operation and return its `data` payload.
    fn graphql(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        let payload = serde_json::to_vec(&json!({
            "query": query,
            "variables": variables,
        }))?;

        let response = self
            .agent
            .post(&self.endpoint)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ClientError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let envelope: GraphQlResponse = body_reader.read_json()?;
        unwrap_envelope(envelope)
    }
}

/// Surface GraphQL-level errors and extract the `data` payload.
fn unwrap_envelope(envelope: GraphQlResponse) -> Result<serde_json::Value, ClientError> {
    if let Some(err) = envelope.errors.first() {
        if err.code() == Some(PAGE_NOT_FOUND) {
            return Err(ClientError::NotFound);
        }
        return Err(ClientError::Api {
            code: err.code(),
            message: err.message.clone(),
        });
    }
    envelope.data.ok_or_else(|| ClientError::Api {
        code: None,
        message: "response carried no data".to_owned(),
    })
}

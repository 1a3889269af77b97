//! Coach chat client
//!
//! One POST per user message to the chat backend, `{"message"}` in,
//! `{"reply"}` out. Any failure - timeout, HTTP error, malformed body,
//! missing field - maps to a canned fallback so the conversation never
//! surfaces an error. No retry.

use std::time::Duration;

use serde_json::json;

/// Shown when the backend cannot produce a reply.
pub const FALLBACK_REPLY: &str =
    "Sorry, I can't answer right now. Try again in a little while.";

/// Opening line of the coach.
pub const GREETING: &str = "Hi! I'm your chess coach. Ask me anything about \
                            chess, openings, or strategy!";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the chat backend.
pub struct ChatClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    /// Send one user message and return the coach's reply. Infallible from
    /// the caller's perspective; failures become [`FALLBACK_REPLY`].
    pub fn send(&self, message: &str) -> String {
        let response = match self
            .agent
            .post(&self.endpoint)
            .send_json(json!({ "message": message }))
        {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("chat request failed: {e}");
                return FALLBACK_REPLY.to_string();
            }
        };

        let body: serde_json::Value = match response.into_json() {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!("chat response was not valid JSON: {e}");
                return FALLBACK_REPLY.to_string();
            }
        };

        body.get("reply")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .unwrap_or_else(|| FALLBACK_REPLY.to_string())
    }
}

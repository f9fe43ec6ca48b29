use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::core::{
    errors::{
        classify_response,
        ApiError,
        MSG_VOTE_FAILED,
    },
    models::{
        quotes_from_value,
        Quote,
        VoteReceipt,
    },
};

#[derive(Deserialize)]
struct VoteEnvelope {
    data: VoteBody,
}

#[derive(Deserialize)]
struct VoteBody {
    vote: u32,
}

/// Client for the quote backend. Owns its `reqwest::Client` with the cookie
/// store that carries the session, so no ambient process state is involved;
/// dropping the service drops the session with it.
pub struct QuoteService {
    client: Client,
    base_url: String,
}

impl QuoteService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        let base_url = base_url.into();
        Self { client, base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /auth/login. On success the session cookie lands in the client's
    /// cookie store and every later request is credentialed with it.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "username": username, "password": password });

        let res = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let body = res.json::<Value>().await.unwrap_or(Value::Null);
        Err(classify_response(status, &body))
    }

    /// GET /qoute, optionally constrained by a search term. Blank terms are
    /// not sent. The response body is normalized through `quotes_from_value`,
    /// so a shape mismatch yields an empty list rather than an error.
    pub async fn list_quotes(&self, term: Option<&str>) -> Result<Vec<Quote>, ApiError> {
        let mut request = self.client.get(format!("{}/qoute", self.base_url));

        if let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) {
            request = request.query(&[("search", term)]);
        }

        let res = request.send().await.map_err(transport_failure)?;

        let status = res.status();
        if !status.is_success() {
            let body = res.json::<Value>().await.unwrap_or(Value::Null);
            return Err(classify_response(status, &body));
        }

        let body = res.json::<Value>().await.unwrap_or(Value::Null);
        Ok(quotes_from_value(body))
    }

    /// PATCH /qoute/vote/{id}. Returns only the updated count.
    pub async fn cast_vote(&self, id: &str) -> Result<VoteReceipt, ApiError> {
        let res = self
            .client
            .patch(format!("{}/qoute/vote/{}", self.base_url, id))
            .send()
            .await
            .map_err(transport_failure)?;

        let status = res.status();
        if !status.is_success() {
            let body = res
                .json::<Value>()
                .await
                .unwrap_or_else(|_| serde_json::json!({ "message": MSG_VOTE_FAILED }));
            return Err(classify_response(status, &body));
        }

        let envelope: VoteEnvelope = res
            .json()
            .await
            .map_err(|_| ApiError::Request(MSG_VOTE_FAILED.to_string()))?;

        Ok(VoteReceipt { id: id.to_string(), votes: envelope.data.vote })
    }
}

fn transport_failure(err: reqwest::Error) -> ApiError {
    eprintln!("Transport failure: {err}");
    ApiError::Network
}

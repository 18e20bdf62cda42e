//! Identity verification for incoming connections.
//!
//! Clients present an opaque token (websocket query parameter or HTTP
//! bearer header). The relay never mints or inspects tokens itself; it
//! forwards them to an external identity endpoint and receives back the
//! stable user id the token stands for.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The endpoint rejected the token.
    #[error("token rejected")]
    Invalid,
    /// The endpoint could not be reached or returned garbage.
    #[error("identity endpoint error: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Maps presented tokens to user identities.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Uuid, IdentityError>;
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResponse {
    user_id: Uuid,
}

/// `IdentityVerifier` backed by an HTTP endpoint.
///
/// POSTs `{"token": "..."}` and expects `{"userId": "..."}` on success.
/// Any non-success status is treated as a rejected token.
pub struct HttpIdentityVerifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpIdentityVerifier {
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<Uuid, IdentityError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&VerifyRequest { token })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IdentityError::Invalid);
        }

        let body: VerifyResponse = response.json().await?;
        Ok(body.user_id)
    }
}

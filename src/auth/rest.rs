use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::model::AuthConfig;

use super::provider::{AuthError, IdentityProvider};

/// Identity provider speaking the Identity Toolkit REST dialect.
///
/// The client is built without a timeout on purpose: these calls block the
/// UI until the service answers, and a hung response hangs the sign-in.
/// There is no retry layer above this.
pub struct RestIdentityProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct PasswordSignIn<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Serialize)]
struct IdpSignIn {
    #[serde(rename = "postBody")]
    post_body: String,
    #[serde(rename = "requestUri")]
    request_uri: &'static str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl RestIdentityProvider {
    pub fn new(auth: &AuthConfig) -> Self {
        RestIdentityProvider {
            client: Client::new(),
            endpoint: auth.endpoint.trim_end_matches('/').to_string(),
            api_key: auth.api_key.clone(),
        }
    }

    fn post<B: Serialize>(&self, operation: &str, body: &B) -> Result<(), AuthError> {
        if self.api_key.is_empty() {
            return Err(AuthError::Rejected(
                "identity service is not configured (run `tp init` and set [auth] api_key)"
                    .to_string(),
            ));
        }

        let url = format!(
            "{}/v1/accounts:{}?key={}",
            self.endpoint, operation, self.api_key
        );
        tracing::debug!(operation, "identity service call");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(operation, "sign-in accepted");
            return Ok(());
        }

        // Surface the service's own message verbatim when the body carries
        // one, otherwise fall back to the HTTP status.
        let text = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| format!("identity service returned {}", status));
        tracing::info!(operation, %message, "sign-in rejected");
        Err(AuthError::Rejected(message))
    }
}

impl IdentityProvider for RestIdentityProvider {
    fn sign_in_with_password(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.post(
            "signInWithPassword",
            &PasswordSignIn {
                email,
                password,
                return_secure_token: true,
            },
        )
    }

    fn sign_in_with_id_token(&self, id_token: &str) -> Result<(), AuthError> {
        self.post(
            "signInWithIdp",
            &IdpSignIn {
                post_body: format!("id_token={}&providerId=google.com", id_token),
                request_uri: "http://localhost",
                return_secure_token: true,
            },
        )
    }
}

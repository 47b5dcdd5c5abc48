//! Federated consent flow: open the provider's consent page in the system
//! browser, catch the redirect on a loopback listener, and exchange the
//! authorization code for an id token.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;

use oauth2::basic::{
    BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
    BasicTokenType,
};
use oauth2::{
    AuthUrl, AuthorizationCode, Client, ClientId, ClientSecret, CsrfToken, ExtraTokenFields,
    RedirectUrl, Scope, StandardRevocableToken, StandardTokenResponse, TokenUrl,
};
use serde::{Deserialize, Serialize};

use super::provider::AuthError;

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// The token endpoint returns an `id_token` alongside the standard fields
/// when the `openid` scope was requested; the basic response type drops it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IdTokenFields {
    #[serde(default)]
    id_token: Option<String>,
}

impl ExtraTokenFields for IdTokenFields {}

type IdTokenResponse = StandardTokenResponse<IdTokenFields, BasicTokenType>;
type ConsentClient = Client<
    BasicErrorResponse,
    IdTokenResponse,
    BasicTokenType,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
>;

/// One-shot consent flow for a configured OAuth client
pub struct ConsentFlow {
    client_id: String,
    client_secret: String,
}

impl ConsentFlow {
    pub fn new(client_id: String, client_secret: String) -> Self {
        ConsentFlow {
            client_id,
            client_secret,
        }
    }

    /// Run the flow to completion and return the provider's id token.
    /// Blocks until the browser round-trip finishes; not cancellable.
    pub fn obtain_id_token(&self) -> Result<String, AuthError> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|e| AuthError::Consent(format!("could not open callback listener: {}", e)))?;
        let port = listener
            .local_addr()
            .map_err(|e| AuthError::Consent(e.to_string()))?
            .port();
        let redirect_uri = format!("http://127.0.0.1:{}", port);

        let client = ConsentClient::new(
            ClientId::new(self.client_id.clone()),
            Some(ClientSecret::new(self.client_secret.clone())),
            AuthUrl::new(AUTH_URL.to_string()).map_err(|e| AuthError::Consent(e.to_string()))?,
            Some(
                TokenUrl::new(TOKEN_URL.to_string())
                    .map_err(|e| AuthError::Consent(e.to_string()))?,
            ),
        )
        .set_redirect_uri(
            RedirectUrl::new(redirect_uri).map_err(|e| AuthError::Consent(e.to_string()))?,
        );

        let (auth_url, csrf_token) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url();

        tracing::debug!("opening browser for federated consent");
        if webbrowser::open(auth_url.as_str()).is_err() {
            return Err(AuthError::Consent(format!(
                "could not open a browser; visit {} manually and retry",
                auth_url
            )));
        }

        let (code, received_state) = wait_for_callback(listener)?;
        if received_state != *csrf_token.secret() {
            return Err(AuthError::Consent("state mismatch in consent callback".to_string()));
        }

        let token = client
            .exchange_code(AuthorizationCode::new(code))
            .request(oauth2::reqwest::http_client)
            .map_err(|e| AuthError::Consent(format!("token exchange failed: {}", e)))?;

        token
            .extra_fields()
            .id_token
            .clone()
            .ok_or_else(|| AuthError::Consent("no id token in the provider response".to_string()))
    }
}

/// Wait for the single redirect request on the loopback listener and pull
/// `code` and `state` out of its query string.
fn wait_for_callback(listener: TcpListener) -> Result<(String, String), AuthError> {
    for stream in listener.incoming() {
        let mut stream = stream.map_err(|e| AuthError::Consent(e.to_string()))?;

        let mut reader = BufReader::new(&stream);
        let mut request_line = String::new();
        reader
            .read_line(&mut request_line)
            .map_err(|e| AuthError::Consent(e.to_string()))?;

        let path = request_line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| AuthError::Consent("malformed callback request".to_string()))?;
        let url = url::Url::parse(&format!("http://localhost{}", path))
            .map_err(|e| AuthError::Consent(e.to_string()))?;

        let mut code = None;
        let mut state = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "code" => code = Some(value.into_owned()),
                "state" => state = Some(value.into_owned()),
                _ => {}
            }
        }

        let response = "HTTP/1.1 200 OK\r\n\
            Content-Type: text/html\r\n\
            Connection: close\r\n\r\n\
            <html><body><h1>Signed in</h1>\
            <p>You can close this window and return to taskpad.</p></body></html>";
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();

        let code =
            code.ok_or_else(|| AuthError::Consent("no authorization code received".to_string()))?;
        let state = state.ok_or_else(|| AuthError::Consent("no state received".to_string()))?;
        return Ok((code, state));
    }

    Err(AuthError::Consent("no callback received".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_token_fields_deserialize_from_token_response() {
        let fields: IdTokenFields =
            serde_json::from_str(r#"{"id_token":"abc.def.ghi","scope":"openid"}"#).unwrap();
        assert_eq!(fields.id_token.as_deref(), Some("abc.def.ghi"));

        let empty: IdTokenFields = serde_json::from_str("{}").unwrap();
        assert!(empty.id_token.is_none());
    }
}

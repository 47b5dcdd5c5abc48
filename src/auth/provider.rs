/// Error type for the identity boundary
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The service rejected the attempt. The message is shown verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("could not reach the identity service: {0}")]
    Transport(String),
    /// The federated consent flow failed before a token was issued
    #[error("{0}")]
    Consent(String),
}

/// The identity service boundary. Both operations are opaque blocking
/// calls: no retry, no timeout, and the caller retains nothing from a
/// success beyond the fact of it.
pub trait IdentityProvider {
    /// Direct credential sign-in (email + password)
    fn sign_in_with_password(&self, email: &str, password: &str) -> Result<(), AuthError>;

    /// Federated sign-in: exchange a provider-issued id token for a
    /// session with the identity service
    fn sign_in_with_id_token(&self, id_token: &str) -> Result<(), AuthError>;
}

pub mod token;

/// Verification-side view of the external identity provider's session
/// tokens. The provider issues them; this service only checks the
/// signature with the shared key.
#[derive(Clone)]
pub struct Config {
    pub session_token_key: String,
}

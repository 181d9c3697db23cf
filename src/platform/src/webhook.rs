use std::sync::Arc;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use chrono::Utc;
use hmac::Hmac;
use hmac::Mac;
use metadata::users::CreateUserRequest;
use metadata::users::Users as MDUsers;
use serde::Deserialize;
use sha2::Sha256;

use crate::PlatformError;
use crate::Result;

pub const USER_CREATED: &str = "user.created";

const SECRET_PREFIX: &str = "whsec_";
const SIGNATURE_VERSION: &str = "v1";
const TIMESTAMP_TOLERANCE_SECONDS: i64 = 5 * 60;

/// Verifies inbound notifications the identity provider signs svix-style:
/// HMAC-SHA256 over `{id}.{timestamp}.{payload}`, base64-encoded in a
/// space-delimited `svix-signature` header of `v1,<signature>` entries.
#[derive(Clone)]
pub struct Verifier {
    key: Vec<u8>,
}

impl Verifier {
    pub fn new(secret: &str) -> Result<Self> {
        let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
        let key = BASE64_STANDARD
            .decode(encoded)
            .map_err(|err| PlatformError::Internal(format!("invalid webhook secret: {err}")))?;

        Ok(Self { key })
    }

    pub fn verify(&self, id: &str, timestamp: &str, signatures: &str, payload: &[u8]) -> Result<()> {
        let ts: i64 = timestamp
            .parse()
            .map_err(|_err| PlatformError::InvalidWebhook)?;
        if (Utc::now().timestamp() - ts).abs() > TIMESTAMP_TOLERANCE_SECONDS {
            return Err(PlatformError::InvalidWebhook);
        }

        let mac = self.mac(id, timestamp, payload)?;
        for entry in signatures.split_ascii_whitespace() {
            let Some((version, signature)) = entry.split_once(',') else {
                continue;
            };
            if version != SIGNATURE_VERSION {
                continue;
            }
            let Ok(signature) = BASE64_STANDARD.decode(signature) else {
                continue;
            };
            if mac.clone().verify_slice(&signature).is_ok() {
                return Ok(());
            }
        }

        Err(PlatformError::InvalidWebhook)
    }

    pub fn sign(&self, id: &str, timestamp: i64, payload: &[u8]) -> Result<String> {
        let mac = self.mac(id, &timestamp.to_string(), payload)?;
        let signature = BASE64_STANDARD.encode(mac.finalize().into_bytes());

        Ok(format!("{SIGNATURE_VERSION},{signature}"))
    }

    fn mac(&self, id: &str, timestamp: &str, payload: &[u8]) -> Result<Hmac<Sha256>> {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.key)
            .map_err(|err| PlatformError::Internal(format!("invalid webhook key: {err}")))?;
        mac.update(id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(payload);

        Ok(mac)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct IdentityEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: IdentityEventData,
}

#[derive(Deserialize, Clone, Debug)]
pub struct IdentityEventData {
    pub id: String,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct EmailAddress {
    pub email_address: String,
}

pub struct Webhooks {
    verifier: Verifier,
    users: Arc<MDUsers>,
}

impl Webhooks {
    pub fn new(verifier: Verifier, users: Arc<MDUsers>) -> Self {
        Self { verifier, users }
    }

    /// Handles one signed provisioning notification. Verification or parse
    /// failures reject the request; a failing user create does not, the
    /// provider gets its acknowledgement either way.
    pub async fn handle(
        &self,
        id: &str,
        timestamp: &str,
        signatures: &str,
        payload: &[u8],
    ) -> Result<()> {
        self.verifier.verify(id, timestamp, signatures, payload)?;

        let event: IdentityEvent =
            serde_json::from_slice(payload).map_err(|err| {
                tracing::debug!("webhook payload rejected: {:?}", err);
                PlatformError::InvalidWebhook
            })?;

        if event.kind != USER_CREATED {
            tracing::debug!("ignoring webhook event {:?}", event.kind);
            return Ok(());
        }

        let data = event.data;
        let name = format!(
            "{} {}",
            data.first_name.unwrap_or_default(),
            data.last_name.unwrap_or_default()
        )
        .trim()
        .to_string();
        let email = data
            .email_addresses
            .first()
            .map(|entry| entry.email_address.clone())
            .unwrap_or_default();

        let req = CreateUserRequest {
            identity_id: data.id,
            email,
            username: data.username,
            name,
            avatar_url: data.image_url,
        };
        if let Err(err) = self.users.create(req) {
            tracing::warn!("user provisioning failed: {:?}", err);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use base64::prelude::BASE64_STANDARD;
    use base64::Engine;
    use chrono::Utc;

    use super::Verifier;

    fn secret() -> String {
        format!("whsec_{}", BASE64_STANDARD.encode(b"super-secret-key"))
    }

    #[test]
    fn accepts_a_correctly_signed_payload() {
        let verifier = Verifier::new(&secret()).unwrap();
        let ts = Utc::now().timestamp();
        let payload = br#"{"type":"user.created"}"#;

        let signature = verifier.sign("msg_1", ts, payload).unwrap();
        assert!(verifier
            .verify("msg_1", &ts.to_string(), &signature, payload)
            .is_ok());
    }

    #[test]
    fn accepts_any_matching_entry_in_the_signature_list() {
        let verifier = Verifier::new(&secret()).unwrap();
        let ts = Utc::now().timestamp();
        let payload = b"{}";

        let signature = verifier.sign("msg_1", ts, payload).unwrap();
        let header = format!("v1,bm90LXRoZS1zaWduYXR1cmU= {signature}");
        assert!(verifier
            .verify("msg_1", &ts.to_string(), &header, payload)
            .is_ok());
    }

    #[test]
    fn rejects_a_tampered_payload() {
        let verifier = Verifier::new(&secret()).unwrap();
        let ts = Utc::now().timestamp();

        let signature = verifier.sign("msg_1", ts, b"{}").unwrap();
        assert!(verifier
            .verify("msg_1", &ts.to_string(), &signature, b"{ }")
            .is_err());
    }

    #[test]
    fn rejects_a_wrong_message_id() {
        let verifier = Verifier::new(&secret()).unwrap();
        let ts = Utc::now().timestamp();

        let signature = verifier.sign("msg_1", ts, b"{}").unwrap();
        assert!(verifier
            .verify("msg_2", &ts.to_string(), &signature, b"{}")
            .is_err());
    }

    #[test]
    fn rejects_a_stale_timestamp() {
        let verifier = Verifier::new(&secret()).unwrap();
        let ts = Utc::now().timestamp() - 60 * 60;

        let signature = verifier.sign("msg_1", ts, b"{}").unwrap();
        assert!(verifier
            .verify("msg_1", &ts.to_string(), &signature, b"{}")
            .is_err());
    }

    #[test]
    fn rejects_malformed_headers() {
        let verifier = Verifier::new(&secret()).unwrap();
        let ts = Utc::now().timestamp().to_string();

        assert!(verifier.verify("msg_1", "not-a-number", "v1,x", b"{}").is_err());
        assert!(verifier.verify("msg_1", &ts, "", b"{}").is_err());
        assert!(verifier.verify("msg_1", &ts, "v2,abcd", b"{}").is_err());
    }

    #[test]
    fn rejects_a_garbage_secret() {
        assert!(Verifier::new("whsec_!!!not-base64!!!").is_err());
    }
}

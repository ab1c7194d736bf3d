//! Webhook signatures.
//!
//! Outbound webhooks carry `Paddle-Signature: ts=<unix-seconds>;h1=<hex>`
//! where `h1` is HMAC-SHA256, keyed by the shared signing secret, over
//! `"<ts>:<raw body>"`.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Name of the signature header.
pub const SIGNATURE_HEADER: &str = "Paddle-Signature";

/// Errors raised when checking a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("Malformed signature header: {0}")]
    Malformed(String),

    #[error("Signature does not match payload")]
    Mismatch,
}

/// Parsed components of a `Paddle-Signature` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddleSignature {
    /// Unix seconds at signing time.
    pub timestamp: i64,
    /// Lowercase hex HMAC-SHA256.
    pub h1: String,
}

impl PaddleSignature {
    /// Parses `ts=<timestamp>;h1=<hex>`. Unknown keys are ignored.
    pub fn parse(header: &str) -> Result<Self, SignatureError> {
        let mut timestamp: Option<i64> = None;
        let mut h1: Option<String> = None;

        for part in header.split(';') {
            let (key, value) = part
                .trim()
                .split_once('=')
                .ok_or_else(|| SignatureError::Malformed("invalid header format".to_string()))?;

            match key {
                "ts" => {
                    timestamp = Some(value.parse().map_err(|_| {
                        SignatureError::Malformed("invalid timestamp".to_string())
                    })?);
                }
                "h1" => h1 = Some(value.to_string()),
                _ => {}
            }
        }

        Ok(Self {
            timestamp: timestamp
                .ok_or_else(|| SignatureError::Malformed("missing ts".to_string()))?,
            h1: h1.ok_or_else(|| SignatureError::Malformed("missing h1".to_string()))?,
        })
    }

    /// Renders the header value.
    pub fn header_value(&self) -> String {
        format!("ts={};h1={}", self.timestamp, self.h1)
    }
}

/// Signs and verifies webhook payloads with the shared secret.
#[derive(Clone)]
pub struct WebhookSigner {
    secret: SecretString,
}

impl WebhookSigner {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Signs `payload` as sent at `timestamp`.
    pub fn sign(&self, timestamp: i64, payload: &[u8]) -> PaddleSignature {
        PaddleSignature {
            timestamp,
            h1: hex::encode(self.compute_mac(timestamp, payload)),
        }
    }

    /// Checks a received header against `payload` in constant time.
    pub fn verify(&self, payload: &[u8], header: &str) -> Result<PaddleSignature, SignatureError> {
        let signature = PaddleSignature::parse(header)?;
        let received = hex::decode(&signature.h1)
            .map_err(|_| SignatureError::Malformed("invalid h1 hex".to_string()))?;
        let expected = self.compute_mac(signature.timestamp, payload);

        if received.len() != expected.len() || !bool::from(received.ct_eq(&expected)) {
            return Err(SignatureError::Mismatch);
        }
        Ok(signature)
    }

    fn compute_mac(&self, timestamp: i64, payload: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b":");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for WebhookSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

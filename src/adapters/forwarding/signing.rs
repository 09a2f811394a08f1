//! Outbound signature for forwarded envelopes.

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Scheme prefix of the `X-Webhook-Signature` header value.
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// Computes `sha256=<lowercase hex HMAC-SHA256(secret, body)>`.
pub fn sign_body(secret: &[u8], body: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret).expect("HMAC accepts any key");
    mac.update(body);
    format!("{}{}", SIGNATURE_PREFIX, hex::encode(mac.finalize().into_bytes()))
}

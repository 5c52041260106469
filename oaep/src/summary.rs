use std::fmt::Write;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::max_plaintext_len;
use crate::provider::OaepPublicKey;

pub const ALGORITHM: &str = "RSA-OAEP-256";

/// What a key can do for RSA-OAEP/SHA-256, without any key material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySummary {
    pub algorithm: &'static str,
    pub modulus_bits: usize,
    /// Ciphertext length in bytes.
    pub modulus_len: usize,
    /// Longest UTF-8 plaintext, in bytes, the key accepts.
    pub max_plaintext_len: usize,
    /// SHA-256 over the DER SubjectPublicKeyInfo, lowercase hex.
    pub fingerprint: String,
}

impl KeySummary {
    pub(crate) fn new<K: OaepPublicKey>(key: &K, spki_der: &[u8]) -> Self {
        KeySummary {
            algorithm: ALGORITHM,
            modulus_bits: key.modulus_bits(),
            modulus_len: key.modulus_len(),
            max_plaintext_len: max_plaintext_len(key.modulus_len()),
            fingerprint: hex_digest(spki_der),
        }
    }
}

fn hex_digest(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .fold(String::with_capacity(64), |mut out, b| {
            let _ = write!(out, "{:02x}", b);
            out
        })
}

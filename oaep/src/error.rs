use thiserror::Error;

/// Errors returned while encrypting text under a PEM public key.
///
/// None of these are transient: retrying with the same input fails the
/// same way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The PEM armor around the key is missing or the body is not base64.
    #[error("malformed PEM: {0}")]
    MalformedPem(#[from] pem::error::Error),

    /// The DER bytes are not an RSA SubjectPublicKeyInfo usable for OAEP.
    #[error("key import failed: {0}")]
    KeyImport(#[from] KeyImportError),

    /// The UTF-8 plaintext exceeds `modulus_len - 2 * 32 - 2` bytes.
    #[error("message too long for this key size: {length} bytes, at most {max} allowed")]
    PlaintextTooLarge { length: usize, max: usize },

    /// The provider failed for a reason other than message length.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// The caller's cancellation token fired before a result was ready.
    #[error("encryption cancelled")]
    Cancelled,

    /// The blocking encryption task panicked or was torn down.
    #[error("encryption task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyImportError {
    #[error("empty key data")]
    Empty,

    #[error("not a SubjectPublicKeyInfo: {0}")]
    Der(String),

    #[error("unsupported key algorithm {0}, expected rsaEncryption")]
    UnsupportedAlgorithm(String),

    #[error("malformed RSA public key")]
    InvalidKey,

    #[error("{bits}-bit modulus is too small for RSA-OAEP with SHA-256")]
    ModulusTooSmall { bits: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

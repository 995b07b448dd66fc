//! Crypto façade error types.

/// Errors from the crypto façade.
///
/// Variants fall into two classes: *invalid-argument* errors, detected
/// before any backend call and guaranteed side-effect-free, and *backend
/// failures*, reported by the underlying cryptographic backend and
/// propagated verbatim. [`CryptoError::is_invalid_argument`] distinguishes
/// the two.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid {what} buffer length: expected exactly {expected}, got {actual}")]
    InvalidBufferLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The caller's buffer is too small, detected before the backend is
    /// invoked. Capacity failures the backend itself raises mid-operation
    /// are [`CryptoError::OutputTooSmall`] instead.
    #[error("Buffer for {what} too small: need {needed}, capacity {capacity}")]
    BufferTooSmall {
        what: &'static str,
        needed: usize,
        capacity: usize,
    },

    #[error("{what} length {len} exceeds the limit of {max}")]
    SizeOverflow {
        what: &'static str,
        len: usize,
        max: u64,
    },

    #[error("{what} {value} outside the valid range 1..={max}")]
    OutOfRange {
        what: &'static str,
        value: u64,
        max: u64,
    },

    #[error("Key is not initialized")]
    UninitializedKey,

    #[error("DH context has no generated key pair")]
    MissingKeyPair,

    #[error("Backend output for {what} exceeds capacity: need {needed}, capacity {capacity}")]
    OutputTooSmall {
        what: &'static str,
        needed: usize,
        capacity: usize,
    },

    #[error("Signature verification failed: {0}")]
    VerificationFailed(String),

    #[error("Recovered payload length {actual} does not match the SHA-256 digest size {expected}")]
    RecoveredLengthMismatch { expected: usize, actual: usize },

    #[error("Backend failure: {0}")]
    Backend(String),
}

impl CryptoError {
    /// Whether this error is an invalid-argument rejection (raised before
    /// any backend call, with no side effect) as opposed to a backend
    /// failure.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyLength { .. }
                | Self::InvalidBufferLength { .. }
                | Self::BufferTooSmall { .. }
                | Self::SizeOverflow { .. }
                | Self::OutOfRange { .. }
                | Self::UninitializedKey
                | Self::MissingKeyPair
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_classification() {
        assert!(
            CryptoError::InvalidKeyLength {
                expected: 16,
                actual: 8
            }
            .is_invalid_argument()
        );
        assert!(
            CryptoError::OutOfRange {
                what: "RSA key bit length",
                value: 0,
                max: 42
            }
            .is_invalid_argument()
        );
        assert!(CryptoError::UninitializedKey.is_invalid_argument());

        assert!(
            CryptoError::BufferTooSmall {
                what: "CMAC output",
                needed: 16,
                capacity: 8
            }
            .is_invalid_argument()
        );

        assert!(!CryptoError::Backend("boom".into()).is_invalid_argument());
        assert!(
            !CryptoError::OutputTooSmall {
                what: "RSA modulus",
                needed: 128,
                capacity: 16
            }
            .is_invalid_argument()
        );
        assert!(!CryptoError::VerificationFailed("bad sig".into()).is_invalid_argument());
        assert!(
            !CryptoError::RecoveredLengthMismatch {
                expected: 32,
                actual: 20
            }
            .is_invalid_argument()
        );
    }

    #[test]
    fn messages_name_the_violated_bound() {
        let err = CryptoError::SizeOverflow {
            what: "CMAC input",
            len: 3_000_000_000,
            max: 2_147_483_647,
        };
        let msg = err.to_string();
        assert!(msg.contains("CMAC input"));
        assert!(msg.contains("2147483647"));
    }
}

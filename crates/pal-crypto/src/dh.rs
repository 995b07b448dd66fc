//! Diffie-Hellman exchange context.
//!
//! Each context binds the fixed domain parameters at init, generates an
//! ephemeral private exponent on `create_public`, and derives the shared
//! secret on `calc_secret`. The private exponent never leaves the context
//! and is zeroized on teardown.

use zeroize::Zeroizing;

use crate::backend::{CryptoBackend, NativeBackend};
use crate::error::CryptoError;
use crate::params::{DH_G, DH_P, DH_SIZE};
use crate::width;

/// A DH exchange context bound to the fixed domain parameters.
///
/// Single-owner: no internal locking is performed, and concurrent use of
/// one context is not supported. Distinct contexts are independent.
/// Dropping the context releases the backend key handle and zeroizes the
/// private exponent; [`DhContext::finalize`] makes the teardown explicit.
pub struct DhContext<B: CryptoBackend = NativeBackend> {
    backend: B,
    key: Option<B::DhKey>,
    /// Ephemeral private exponent, empty until `create_public`.
    private: Zeroizing<Vec<u8>>,
}

impl<B: CryptoBackend> std::fmt::Debug for DhContext<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DhContext")
            .field("private", &"[REDACTED]")
            .field("has_key_pair", &!self.private.is_empty())
            .finish_non_exhaustive()
    }
}

impl DhContext<NativeBackend> {
    /// Create a context bound to the fixed domain parameters.
    ///
    /// Fails only if the backend rejects the compiled-in constants, which
    /// indicates a broken backend rather than a caller error.
    pub fn init() -> Result<Self, CryptoError> {
        Self::init_with(NativeBackend)
    }
}

impl<B: CryptoBackend> DhContext<B> {
    /// Create a context over a specific backend.
    pub fn init_with(backend: B) -> Result<Self, CryptoError> {
        let key = backend.dh_set_key(&DH_P, &DH_G)?;
        Ok(Self {
            backend,
            key: Some(key),
            private: Zeroizing::new(Vec::new()),
        })
    }

    /// Generate a fresh key pair, retaining the private exponent and
    /// writing the public value into `public_out`.
    ///
    /// `public_out.len()` must equal [`DH_SIZE`] exactly; any other
    /// capacity is an invalid-argument error with no side effect. Returns
    /// the byte count written.
    pub fn create_public(&mut self, public_out: &mut [u8]) -> Result<usize, CryptoError> {
        if public_out.len() != DH_SIZE {
            return Err(CryptoError::InvalidBufferLength {
                what: "DH public value",
                expected: DH_SIZE,
                actual: public_out.len(),
            });
        }
        let key = self.key.as_ref().ok_or(CryptoError::UninitializedKey)?;
        let (private, written) = self.backend.dh_generate_key_pair(key, public_out)?;
        self.private = private;
        Ok(width::facade_size(written))
    }

    /// Derive the shared secret from the stored private exponent and the
    /// peer's public value, writing it into `secret_out`.
    ///
    /// `peer_public.len()` must not exceed [`DH_SIZE`] and
    /// `secret_out.len()` must equal [`DH_SIZE`] exactly; violations are
    /// invalid-argument errors with no side effect. Requires a prior
    /// successful [`DhContext::create_public`]. Returns the byte count
    /// written.
    pub fn calc_secret(
        &self,
        peer_public: &[u8],
        secret_out: &mut [u8],
    ) -> Result<usize, CryptoError> {
        if peer_public.len() > DH_SIZE {
            return Err(CryptoError::SizeOverflow {
                what: "peer public value",
                len: peer_public.len(),
                max: DH_SIZE as u64,
            });
        }
        if secret_out.len() != DH_SIZE {
            return Err(CryptoError::InvalidBufferLength {
                what: "DH shared secret",
                expected: DH_SIZE,
                actual: secret_out.len(),
            });
        }
        if self.private.is_empty() {
            return Err(CryptoError::MissingKeyPair);
        }
        let key = self.key.as_ref().ok_or(CryptoError::UninitializedKey)?;
        let written = self
            .backend
            .dh_agree(key, &self.private, peer_public, secret_out)?;
        Ok(width::facade_size(written))
    }

    /// Release backend resources and zeroize the private exponent.
    ///
    /// Dropping the context performs the same teardown; `finalize` makes
    /// the point of release explicit at call sites. Consuming `self` makes
    /// use-after-finalize and double-finalize unrepresentable.
    pub fn finalize(self) {
        drop(self);
    }
}

impl<B: CryptoBackend> Drop for DhContext<B> {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            self.backend.dh_free_key(key);
        }
        // `Zeroizing` wipes the private exponent when it drops.
    }
}

/// Run a complete exchange between two fresh contexts, returning both
/// derived secrets.
///
/// Convenience for tests; production callers exchange public values over
/// their own transport.
#[cfg(any(test, feature = "test-utils"))]
pub fn dh_exchange_pair() -> Result<(Vec<u8>, Vec<u8>), CryptoError> {
    let mut a = DhContext::init()?;
    let mut b = DhContext::init()?;

    let mut a_public = vec![0u8; DH_SIZE];
    let mut b_public = vec![0u8; DH_SIZE];
    a.create_public(&mut a_public)?;
    b.create_public(&mut b_public)?;

    let mut a_secret = vec![0u8; DH_SIZE];
    let mut b_secret = vec![0u8; DH_SIZE];
    a.calc_secret(&b_public, &mut a_secret)?;
    b.calc_secret(&a_public, &mut b_secret)?;

    Ok((a_secret, b_secret))
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn shared_secret_is_symmetric() {
        let (a_secret, b_secret) = dh_exchange_pair().unwrap();
        assert_eq!(a_secret, b_secret);
        assert_eq!(a_secret.len(), DH_SIZE);
        assert!(a_secret.iter().any(|b| *b != 0));
    }

    #[test]
    fn independent_exchanges_derive_different_secrets() {
        let (first, _) = dh_exchange_pair().unwrap();
        let (second, _) = dh_exchange_pair().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn create_public_requires_exact_capacity() {
        let mut context = DhContext::init().unwrap();

        for wrong in [0, DH_SIZE - 1, DH_SIZE + 1, 2 * DH_SIZE] {
            let mut out = vec![0u8; wrong];
            let err = context.create_public(&mut out).unwrap_err();
            assert!(matches!(err, CryptoError::InvalidBufferLength { .. }));
            assert!(err.is_invalid_argument());
        }

        // The rejections had no side effect: no key pair was generated.
        let peer = vec![0x02u8; DH_SIZE];
        let mut secret = vec![0u8; DH_SIZE];
        assert!(matches!(
            context.calc_secret(&peer, &mut secret),
            Err(CryptoError::MissingKeyPair)
        ));

        // A subsequent valid call still succeeds.
        let mut out = vec![0u8; DH_SIZE];
        assert_eq!(context.create_public(&mut out).unwrap(), DH_SIZE);
    }

    #[test]
    fn calc_secret_rejects_oversize_peer_value() {
        let mut context = DhContext::init().unwrap();
        let mut public = vec![0u8; DH_SIZE];
        context.create_public(&mut public).unwrap();

        let peer = vec![0x02u8; DH_SIZE + 1];
        let mut secret = vec![0u8; DH_SIZE];
        let err = context.calc_secret(&peer, &mut secret).unwrap_err();
        assert!(matches!(err, CryptoError::SizeOverflow { .. }));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn calc_secret_requires_exact_output_capacity() {
        let mut context = DhContext::init().unwrap();
        let mut public = vec![0u8; DH_SIZE];
        context.create_public(&mut public).unwrap();

        let peer = vec![0x02u8; DH_SIZE];
        let mut secret = vec![0u8; DH_SIZE - 1];
        let err = context.calc_secret(&peer, &mut secret).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidBufferLength { .. }));
    }

    #[test]
    fn calc_secret_before_create_public_is_rejected() {
        let context = DhContext::init().unwrap();
        let peer = vec![0x02u8; DH_SIZE];
        let mut secret = vec![0u8; DH_SIZE];
        let err = context.calc_secret(&peer, &mut secret).unwrap_err();
        assert!(matches!(err, CryptoError::MissingKeyPair));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn peer_shorter_than_modulus_is_accepted() {
        let mut context = DhContext::init().unwrap();
        let mut public = vec![0u8; DH_SIZE];
        context.create_public(&mut public).unwrap();

        // A small but in-range peer value, minimally encoded in one byte.
        let peer = [0x02u8];
        let mut secret = vec![0u8; DH_SIZE];
        assert_eq!(context.calc_secret(&peer, &mut secret).unwrap(), DH_SIZE);
    }

    #[test]
    fn debug_output_redacts_the_private_exponent() {
        let mut context = DhContext::init().unwrap();
        let mut public = vec![0u8; DH_SIZE];
        context.create_public(&mut public).unwrap();

        let rendered = format!("{context:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("private: ["));
    }

    #[test]
    fn finalize_consumes_the_context() {
        let mut context = DhContext::init().unwrap();
        let mut public = vec![0u8; DH_SIZE];
        context.create_public(&mut public).unwrap();
        context.finalize();
        // Ownership makes use-after-finalize a compile error; nothing else
        // to observe here.
    }
}

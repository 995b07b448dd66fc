//! Backend seam for the crypto façade.
//!
//! The façade never performs cryptography itself; it validates argument
//! sizes and forwards to an implementation of [`CryptoBackend`]. The
//! default implementation is [`NativeBackend`]; tests substitute doubles
//! to drive paths the real backend cannot produce.

use zeroize::Zeroizing;

use crate::error::CryptoError;

mod native;

pub use native::{NativeBackend, NativeDhKey, NativeRsaKey};

/// The primitive operations the façade requires from a cryptographic
/// backend.
///
/// Byte counts at this seam are `u32`: the backend's native size domain.
/// The façade is responsible for narrowing caller lengths before a call
/// and widening reported counts after.
///
/// Implementations need not be thread-safe for concurrent use of the
/// *same* key handle; handles are single-owner by construction. Global
/// backend state (e.g. the random number generator) must be usable from
/// multiple threads operating on distinct handles.
pub trait CryptoBackend {
    /// Backend handle for a DH key bound to domain parameters.
    type DhKey;
    /// Backend handle for an RSA key pair or public key.
    type RsaKey;

    /// Bind fixed DH domain parameters (big-endian `p` and `g`).
    fn dh_set_key(&self, p: &[u8], g: &[u8]) -> Result<Self::DhKey, CryptoError>;

    /// Generate a fresh DH key pair under the bound parameters. Writes the
    /// public value into `public_out` (modulus-sized) and returns the
    /// private exponent bytes together with the public byte count written.
    fn dh_generate_key_pair(
        &self,
        key: &Self::DhKey,
        public_out: &mut [u8],
    ) -> Result<(Zeroizing<Vec<u8>>, u32), CryptoError>;

    /// Combine a private exponent with a peer's public value, writing the
    /// shared secret into `secret_out` and returning the byte count.
    fn dh_agree(
        &self,
        key: &Self::DhKey,
        private: &[u8],
        peer_public: &[u8],
        secret_out: &mut [u8],
    ) -> Result<u32, CryptoError>;

    /// Release backend resources held by a DH key handle.
    fn dh_free_key(&self, key: Self::DhKey);

    /// Produce a fresh RSA key pair of `bits` bits with the given public
    /// exponent. Both arguments are pre-validated positive values.
    fn rsa_make_key(&self, bits: i32, exponent: i64) -> Result<Self::RsaKey, CryptoError>;

    /// Write the public exponent and modulus in the backend's native
    /// encoding, returning the byte counts written.
    fn rsa_flatten_public_key(
        &self,
        key: &Self::RsaKey,
        e_out: &mut [u8],
        n_out: &mut [u8],
    ) -> Result<(u32, u32), CryptoError>;

    /// Decode a public-only key handle from raw exponent and modulus bytes.
    fn rsa_decode_public_key(&self, e: &[u8], n: &[u8]) -> Result<Self::RsaKey, CryptoError>;

    /// Verify a signature, recovering the signed payload into
    /// `recovered_out`. Returns the recovered payload length.
    fn rsa_verify(
        &self,
        key: &Self::RsaKey,
        signature: &[u8],
        recovered_out: &mut [u8],
    ) -> Result<u32, CryptoError>;

    /// Release backend resources held by an RSA key handle, reporting any
    /// backend failure.
    fn rsa_free_key(&self, key: Self::RsaKey) -> Result<(), CryptoError>;
}

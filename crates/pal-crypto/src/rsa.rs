//! RSA key management and signature verification.
//!
//! An [`RsaKey`] is an opaque, single-owner handle over the backend's key
//! material: uninitialized after `new`, a full key pair after `generate`,
//! or public-only after `import_public`. Verification accepts only
//! signatures over bare SHA-256 digests: a structurally valid signature
//! whose recovered payload is not exactly 32 bytes is a verification
//! failure.

use crate::backend::{CryptoBackend, NativeBackend};
use crate::error::CryptoError;
use crate::width;

/// SHA-256 digest length in bytes; the only payload size
/// [`RsaKey::verify_sha256`] accepts.
pub const SHA256_DIGEST_SIZE: usize = 32;

/// An RSA key pair or public key backed by the crypto backend.
pub struct RsaKey<B: CryptoBackend = NativeBackend> {
    backend: B,
    inner: Option<B::RsaKey>,
}

impl<B: CryptoBackend> std::fmt::Debug for RsaKey<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaKey")
            .field("initialized", &self.inner.is_some())
            .finish_non_exhaustive()
    }
}

impl RsaKey<NativeBackend> {
    /// Create an uninitialized key handle.
    pub const fn new() -> Self {
        Self::with_backend(NativeBackend)
    }
}

impl Default for RsaKey<NativeBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CryptoBackend> RsaKey<B> {
    /// Create an uninitialized key handle over a specific backend.
    pub const fn with_backend(backend: B) -> Self {
        Self {
            backend,
            inner: None,
        }
    }

    /// Whether the handle currently holds key material.
    pub const fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    /// Generate a fresh key pair of `bits` bits with the given public
    /// exponent.
    ///
    /// `bits` must be in `1..=i32::MAX` and `exponent` in `1..=i64::MAX`;
    /// violations are invalid-argument errors with no side effect.
    pub fn generate(&mut self, bits: u64, exponent: u64) -> Result<(), CryptoError> {
        let bits = width::backend_bits(bits)?;
        let exponent = width::backend_exponent(exponent)?;
        let fresh = self.backend.rsa_make_key(bits, exponent)?;
        self.release_inner()?;
        self.inner = Some(fresh);
        Ok(())
    }

    /// Write the public exponent and modulus into the supplied buffers in
    /// the backend's native big-endian encoding, returning the actual
    /// byte counts `(e, n)`.
    ///
    /// Both capacities must fit the backend's 32-bit size type;
    /// insufficient capacity is reported by the backend.
    pub fn export_public(
        &self,
        e_out: &mut [u8],
        n_out: &mut [u8],
    ) -> Result<(usize, usize), CryptoError> {
        width::backend_size(e_out.len(), "public exponent buffer")?;
        width::backend_size(n_out.len(), "modulus buffer")?;
        let key = self.inner.as_ref().ok_or(CryptoError::UninitializedKey)?;
        let (e_written, n_written) = self.backend.rsa_flatten_public_key(key, e_out, n_out)?;
        Ok((width::facade_size(e_written), width::facade_size(n_written)))
    }

    /// Decode a public-only key from raw big-endian exponent and modulus
    /// bytes, replacing any previously held key material.
    ///
    /// Both sizes must fit the backend's 32-bit size type. No private
    /// material is present after import.
    pub fn import_public(&mut self, e: &[u8], n: &[u8]) -> Result<(), CryptoError> {
        width::backend_size(e.len(), "public exponent")?;
        width::backend_size(n.len(), "modulus")?;
        let fresh = self.backend.rsa_decode_public_key(e, n)?;
        self.release_inner()?;
        self.inner = Some(fresh);
        Ok(())
    }

    /// Verify a signature, recovering the signed payload into
    /// `recovered_out`.
    ///
    /// Both lengths must fit the backend's 32-bit size type. The recovered
    /// payload must be exactly [`SHA256_DIGEST_SIZE`] bytes; any other
    /// length is treated as a verification failure even if the backend
    /// considered the signature structurally valid. Returns the recovered
    /// byte count (always [`SHA256_DIGEST_SIZE`] on success).
    pub fn verify_sha256(
        &self,
        signature: &[u8],
        recovered_out: &mut [u8],
    ) -> Result<usize, CryptoError> {
        width::backend_size(signature.len(), "signature")?;
        width::backend_size(recovered_out.len(), "recovered payload buffer")?;
        let key = self.inner.as_ref().ok_or(CryptoError::UninitializedKey)?;
        let recovered = width::facade_size(self.backend.rsa_verify(key, signature, recovered_out)?);
        if recovered != SHA256_DIGEST_SIZE {
            return Err(CryptoError::RecoveredLengthMismatch {
                expected: SHA256_DIGEST_SIZE,
                actual: recovered,
            });
        }
        Ok(recovered)
    }

    /// Release the backend key material, propagating any backend-reported
    /// failure verbatim.
    ///
    /// Dropping the handle releases silently; `free` exists for callers
    /// that need to observe release errors.
    pub fn free(mut self) -> Result<(), CryptoError> {
        self.release_inner()
    }

    fn release_inner(&mut self) -> Result<(), CryptoError> {
        self.inner
            .take()
            .map_or(Ok(()), |key| self.backend.rsa_free_key(key))
    }
}

impl<B: CryptoBackend> Drop for RsaKey<B> {
    fn drop(&mut self) {
        // Release errors have nowhere to go during drop; `free` exists for
        // callers that need to observe them.
        let _ = self.release_inner();
    }
}

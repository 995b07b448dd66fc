//! Default backend over the RustCrypto stack.
//!
//! DH is plain finite-field exponentiation over the compiled-in group;
//! RSA key handling comes from the `rsa` crate, with signature recovery
//! implemented as the raw public-key operation plus strict
//! EMSA-PKCS1-v1_5 (block type 01) unpadding.

use rand::RngCore;
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use super::CryptoBackend;
use crate::error::CryptoError;
use crate::params;
use crate::width;

/// Backend over the RustCrypto `rsa`/bignum stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

/// A DH key handle: the bound domain parameters.
pub struct NativeDhKey {
    p: BigUint,
    g: BigUint,
    q: BigUint,
}

/// An RSA key handle: a full key pair or a public key only.
pub enum NativeRsaKey {
    Pair(RsaPrivateKey),
    Public(RsaPublicKey),
}

// The pair variant holds private material; Debug names the variant only.
impl std::fmt::Debug for NativeRsaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pair(_) => f.debug_tuple("Pair").field(&"[REDACTED]").finish(),
            Self::Public(_) => f.debug_tuple("Public").field(&"[REDACTED]").finish(),
        }
    }
}

/// Sample a private exponent uniformly from `[1, q)` by rejection.
fn sample_private(q: &BigUint) -> Zeroizing<Vec<u8>> {
    let mut buf = Zeroizing::new(vec![0u8; params::DH_ORDER_SIZE]);
    loop {
        OsRng.fill_bytes(buf.as_mut_slice());
        if buf.iter().any(|b| *b != 0) && BigUint::from_bytes_be(&buf) < *q {
            return buf;
        }
    }
}

/// Write `value` big-endian into `out` at full width, left-padded with
/// zeros, returning the byte count written.
fn write_fixed(value: &BigUint, out: &mut [u8], what: &'static str) -> Result<u32, CryptoError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > out.len() {
        return Err(CryptoError::OutputTooSmall {
            what,
            needed: bytes.len(),
            capacity: out.len(),
        });
    }
    let pad = out.len() - bytes.len();
    out[..pad].fill(0);
    out[pad..].copy_from_slice(&bytes);
    width::backend_size(out.len(), what)
}

/// Write `value` big-endian into the start of `out` in minimal encoding,
/// returning the byte count written.
fn write_minimal(value: &BigUint, out: &mut [u8], what: &'static str) -> Result<u32, CryptoError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > out.len() {
        return Err(CryptoError::OutputTooSmall {
            what,
            needed: bytes.len(),
            capacity: out.len(),
        });
    }
    out[..bytes.len()].copy_from_slice(&bytes);
    width::backend_size(bytes.len(), what)
}

fn rsa_parts(key: &NativeRsaKey) -> (&BigUint, &BigUint, usize) {
    match key {
        NativeRsaKey::Pair(k) => (k.n(), k.e(), k.size()),
        NativeRsaKey::Public(k) => (k.n(), k.e(), k.size()),
    }
}

/// Strict EMSA-PKCS1-v1_5 (block type 01) unpadding.
///
/// `EM = 0x00 || 0x01 || PS || 0x00 || payload`, where PS is at least
/// eight `0xff` bytes.
fn unpad_block_type_1(em: &[u8]) -> Result<&[u8], CryptoError> {
    const MIN_PAD: usize = 8;
    let malformed = || CryptoError::VerificationFailed("malformed PKCS#1 v1.5 block".into());

    if em.len() < MIN_PAD + 3 || em[0] != 0x00 || em[1] != 0x01 {
        return Err(malformed());
    }
    let mut idx = 2;
    while idx < em.len() && em[idx] == 0xff {
        idx += 1;
    }
    if idx < 2 + MIN_PAD || idx == em.len() || em[idx] != 0x00 {
        return Err(malformed());
    }
    Ok(&em[idx + 1..])
}

impl CryptoBackend for NativeBackend {
    type DhKey = NativeDhKey;
    type RsaKey = NativeRsaKey;

    fn dh_set_key(&self, p: &[u8], g: &[u8]) -> Result<NativeDhKey, CryptoError> {
        let p = BigUint::from_bytes_be(p);
        let g = BigUint::from_bytes_be(g);
        if p <= BigUint::from(1u8) || g <= BigUint::from(1u8) || g >= p {
            return Err(CryptoError::Backend(
                "rejected DH domain parameters".into(),
            ));
        }
        // The seam binds (p, g) per handle; the subgroup order is part of
        // the fixed, process-wide domain parameters, not a per-handle input.
        let q = BigUint::from_bytes_be(&params::DH_Q);
        Ok(NativeDhKey { p, g, q })
    }

    fn dh_generate_key_pair(
        &self,
        key: &NativeDhKey,
        public_out: &mut [u8],
    ) -> Result<(Zeroizing<Vec<u8>>, u32), CryptoError> {
        let private = sample_private(&key.q);
        let x = BigUint::from_bytes_be(&private);
        let public = key.g.modpow(&x, &key.p);
        let written = write_fixed(&public, public_out, "DH public value")?;
        Ok((private, written))
    }

    fn dh_agree(
        &self,
        key: &NativeDhKey,
        private: &[u8],
        peer_public: &[u8],
        secret_out: &mut [u8],
    ) -> Result<u32, CryptoError> {
        let y = BigUint::from_bytes_be(peer_public);
        if y <= BigUint::from(1u8) || y >= key.p {
            return Err(CryptoError::Backend(
                "peer public value outside the group".into(),
            ));
        }
        let x = BigUint::from_bytes_be(private);
        let secret = y.modpow(&x, &key.p);
        write_fixed(&secret, secret_out, "DH shared secret")
    }

    fn dh_free_key(&self, key: NativeDhKey) {
        // The handle holds only public domain parameters.
        drop(key);
    }

    fn rsa_make_key(&self, bits: i32, exponent: i64) -> Result<NativeRsaKey, CryptoError> {
        let bits = usize::try_from(bits)
            .map_err(|_| CryptoError::Backend("negative RSA key bit length".into()))?;
        let exponent = u64::try_from(exponent)
            .map_err(|_| CryptoError::Backend("negative RSA public exponent".into()))?;
        let key = RsaPrivateKey::new_with_exp(&mut OsRng, bits, &BigUint::from(exponent))
            .map_err(|e| CryptoError::Backend(e.to_string()))?;
        Ok(NativeRsaKey::Pair(key))
    }

    fn rsa_flatten_public_key(
        &self,
        key: &NativeRsaKey,
        e_out: &mut [u8],
        n_out: &mut [u8],
    ) -> Result<(u32, u32), CryptoError> {
        let (n, e, _) = rsa_parts(key);
        let e_written = write_minimal(e, e_out, "RSA public exponent")?;
        let n_written = write_minimal(n, n_out, "RSA modulus")?;
        Ok((e_written, n_written))
    }

    fn rsa_decode_public_key(&self, e: &[u8], n: &[u8]) -> Result<NativeRsaKey, CryptoError> {
        let n = BigUint::from_bytes_be(n);
        let e = BigUint::from_bytes_be(e);
        RsaPublicKey::new(n, e)
            .map(NativeRsaKey::Public)
            .map_err(|err| CryptoError::Backend(err.to_string()))
    }

    fn rsa_verify(
        &self,
        key: &NativeRsaKey,
        signature: &[u8],
        recovered_out: &mut [u8],
    ) -> Result<u32, CryptoError> {
        let (n, e, size) = rsa_parts(key);
        if signature.len() != size {
            return Err(CryptoError::VerificationFailed(format!(
                "signature length {} does not match the {size}-byte modulus",
                signature.len()
            )));
        }
        let c = BigUint::from_bytes_be(signature);
        if c >= *n {
            return Err(CryptoError::VerificationFailed(
                "signature value out of range".into(),
            ));
        }
        let m = c.modpow(e, n);
        let mut em = vec![0u8; size];
        let bytes = m.to_bytes_be();
        em[size - bytes.len()..].copy_from_slice(&bytes);

        let payload = unpad_block_type_1(&em)?;
        if payload.len() > recovered_out.len() {
            return Err(CryptoError::OutputTooSmall {
                what: "recovered payload",
                needed: payload.len(),
                capacity: recovered_out.len(),
            });
        }
        recovered_out[..payload.len()].copy_from_slice(payload);
        width::backend_size(payload.len(), "recovered payload")
    }

    fn rsa_free_key(&self, key: NativeRsaKey) -> Result<(), CryptoError> {
        // The rsa crate zeroizes private key material on drop.
        drop(key);
        Ok(())
    }
}

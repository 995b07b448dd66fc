//! AES-128-CMAC computation.
//!
//! Only 128-bit keys are supported; the MAC output is always exactly
//! 16 bytes, regardless of the capacity supplied.

use aes::Aes128;
use cmac::{Cmac, Mac};

use crate::error::CryptoError;
use crate::width;

/// Required CMAC key length in bytes (AES-128).
pub const CMAC_KEY_SIZE: usize = 16;

/// CMAC output length in bytes.
pub const CMAC_MAC_SIZE: usize = 16;

/// Compute the AES-128-CMAC of `input` under `key`, writing exactly
/// [`CMAC_MAC_SIZE`] bytes into `mac_out`.
///
/// `key.len()` must equal [`CMAC_KEY_SIZE`], `input.len()` must fit the
/// backend's signed 32-bit length, and `mac_out.len()` must be at least
/// [`CMAC_MAC_SIZE`]; any violation is an invalid-argument error with no
/// computation performed. Returns the byte count written.
pub fn compute_cmac(key: &[u8], input: &[u8], mac_out: &mut [u8]) -> Result<usize, CryptoError> {
    if key.len() != CMAC_KEY_SIZE {
        return Err(CryptoError::InvalidKeyLength {
            expected: CMAC_KEY_SIZE,
            actual: key.len(),
        });
    }
    width::backend_signed_size(input.len(), "CMAC input")?;
    if mac_out.len() < CMAC_MAC_SIZE {
        return Err(CryptoError::BufferTooSmall {
            what: "CMAC output",
            needed: CMAC_MAC_SIZE,
            capacity: mac_out.len(),
        });
    }

    let mut mac =
        Cmac::<Aes128>::new_from_slice(key).map_err(|e| CryptoError::Backend(e.to_string()))?;
    mac.update(input);
    let tag = mac.finalize().into_bytes();
    mac_out[..CMAC_MAC_SIZE].copy_from_slice(&tag);
    Ok(CMAC_MAC_SIZE)
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    /// AES-128 key shared by the RFC 4493 test vectors.
    const RFC4493_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";

    fn mac_of(key_hex: &str, msg_hex: &str) -> [u8; CMAC_MAC_SIZE] {
        let key = hex::decode(key_hex).unwrap();
        let msg = hex::decode(msg_hex).unwrap();
        let mut out = [0u8; CMAC_MAC_SIZE];
        let written = compute_cmac(&key, &msg, &mut out).unwrap();
        assert_eq!(written, CMAC_MAC_SIZE);
        out
    }

    #[test]
    fn rfc4493_empty_message() {
        assert_eq!(
            mac_of(RFC4493_KEY, "").to_vec(),
            hex::decode("bb1d6929e95937287fa37d129b756746").unwrap()
        );
    }

    #[test]
    fn rfc4493_one_block_message() {
        assert_eq!(
            mac_of(RFC4493_KEY, "6bc1bee22e409f96e93d7e117393172a").to_vec(),
            hex::decode("070a16b46b4d4144f79bdd9dd04a287c").unwrap()
        );
    }

    #[test]
    fn rfc4493_forty_byte_message() {
        assert_eq!(
            mac_of(
                RFC4493_KEY,
                "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e5130c81c46a35ce411"
            )
            .to_vec(),
            hex::decode("dfa66747de9ae63030ca32611497c827").unwrap()
        );
    }

    #[test]
    fn rejects_any_key_length_other_than_16() {
        let mut out = [0u8; CMAC_MAC_SIZE];
        for wrong in [0usize, 1, 15, 17, 24, 32] {
            let key = vec![0u8; wrong];
            let err = compute_cmac(&key, b"payload", &mut out).unwrap_err();
            assert!(matches!(
                err,
                CryptoError::InvalidKeyLength {
                    expected: CMAC_KEY_SIZE,
                    ..
                }
            ));
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn rejects_undersized_output_buffer() {
        let key = [0u8; CMAC_KEY_SIZE];
        let mut out = [0u8; CMAC_MAC_SIZE - 1];
        let err = compute_cmac(&key, b"payload", &mut out).unwrap_err();
        assert!(matches!(err, CryptoError::BufferTooSmall { .. }));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn writes_exactly_16_bytes_into_larger_buffers() {
        let key = [0u8; CMAC_KEY_SIZE];
        let mut out = [0xEEu8; 2 * CMAC_MAC_SIZE];
        let written = compute_cmac(&key, &[0x01, 0x02, 0x03], &mut out).unwrap();
        assert_eq!(written, CMAC_MAC_SIZE);
        assert!(
            out[CMAC_MAC_SIZE..].iter().all(|b| *b == 0xEE),
            "bytes past the MAC must be untouched"
        );
    }

    #[test]
    fn is_deterministic() {
        let key = [0u8; CMAC_KEY_SIZE];
        let input = [0x01u8, 0x02, 0x03];
        let mut first = [0u8; CMAC_MAC_SIZE];
        let mut second = [0u8; CMAC_MAC_SIZE];
        compute_cmac(&key, &input, &mut first).unwrap();
        compute_cmac(&key, &input, &mut second).unwrap();
        assert_eq!(first, second);
        assert!(first.iter().any(|b| *b != 0));
    }
}

//! Width validation between the façade's 64-bit boundary and the backend's
//! narrower size types.
//!
//! Every narrowing is a named, checked step returning a typed range error.
//! Nothing is silently truncated.

use crate::error::CryptoError;

/// Validate a caller-declared byte length against the backend's unsigned
/// 32-bit size type.
pub(crate) fn backend_size(len: usize, what: &'static str) -> Result<u32, CryptoError> {
    u32::try_from(len).map_err(|_| CryptoError::SizeOverflow {
        what,
        len,
        max: u64::from(u32::MAX),
    })
}

/// Validate a caller-declared byte length against the backend's signed
/// 32-bit length type.
pub(crate) fn backend_signed_size(len: usize, what: &'static str) -> Result<i32, CryptoError> {
    i32::try_from(len).map_err(|_| CryptoError::SizeOverflow {
        what,
        len,
        max: u64::from(i32::MAX.unsigned_abs()),
    })
}

/// Validate an RSA key bit length against the backend's signed `int` width.
/// Zero is rejected along with oversize values.
pub(crate) fn backend_bits(bits: u64) -> Result<i32, CryptoError> {
    let max = u64::from(i32::MAX.unsigned_abs());
    if bits == 0 {
        return Err(CryptoError::OutOfRange {
            what: "RSA key bit length",
            value: bits,
            max,
        });
    }
    i32::try_from(bits).map_err(|_| CryptoError::OutOfRange {
        what: "RSA key bit length",
        value: bits,
        max,
    })
}

/// Validate an RSA public exponent against the backend's signed 64-bit
/// exponent type. Zero is rejected along with oversize values.
pub(crate) fn backend_exponent(exponent: u64) -> Result<i64, CryptoError> {
    let max = i64::MAX.unsigned_abs();
    if exponent == 0 {
        return Err(CryptoError::OutOfRange {
            what: "RSA public exponent",
            value: exponent,
            max,
        });
    }
    i64::try_from(exponent).map_err(|_| CryptoError::OutOfRange {
        what: "RSA public exponent",
        value: exponent,
        max,
    })
}

/// Widen a backend-reported byte count back to the façade's width.
pub(crate) fn facade_size(len: u32) -> usize {
    // usize is at least 32 bits on every target the backend supports.
    usize::try_from(len).unwrap_or(usize::MAX)
}

//! PAL crypto parameter façade.
//!
//! A narrow, size-checked boundary over a pluggable cryptographic backend,
//! exposing exactly three primitive families to the rest of the platform
//! abstraction layer:
//!
//! - **DH**: fixed-parameter Diffie-Hellman key exchange ([`DhContext`])
//! - **RSA**: key generation, raw public-key import/export, and SHA-256
//!   signature verification with recovery ([`RsaKey`])
//! - **AES-CMAC**: fixed 128-bit-key MAC ([`compute_cmac`])
//!
//! Every caller-supplied length is validated before the backend is
//! touched — malformed sizes are rejected with no side effect — and secret
//! material is zeroized on teardown. The façade adds no retries, no
//! logging, and no locking: every call is a single synchronous attempt
//! whose failure is returned to the immediate caller.

pub mod backend;
pub mod cmac;
pub mod dh;
pub mod error;
pub mod params;
pub mod rsa;

mod width;

pub use backend::{CryptoBackend, NativeBackend};
pub use error::CryptoError;
pub use params::{DH_ORDER_SIZE, DH_SIZE};
pub use self::cmac::{CMAC_KEY_SIZE, CMAC_MAC_SIZE, compute_cmac};
#[cfg(any(test, feature = "test-utils"))]
pub use self::dh::dh_exchange_pair;
pub use self::dh::DhContext;
pub use self::rsa::{RsaKey, SHA256_DIGEST_SIZE};

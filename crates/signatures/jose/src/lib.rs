//! Normalization of hardware-backed ECDSA signatures into the fixed-width
//! `r || s` form used by JOSE (`ES256`, `ES384`, ...).
//!
//! Signing backends return either a bare DER `SEQUENCE { r, s }` or a CMS
//! `SignedData` envelope whose first `SignerInfo` carries one. Both are
//! reduced to [`NormalizedSignature`] by [`to_fixed_width_rs`]:
//!
//! ```
//! use sigenv_jose::{CoordinateWidth, to_fixed_width_rs};
//!
//! // r = 0x80 with its sign guard, s = 7
//! let der = [0x30, 0x07, 0x02, 0x02, 0x00, 0x80, 0x02, 0x01, 0x07];
//! let width = CoordinateWidth::new(4).unwrap();
//! let signature = to_fixed_width_rs(&der, width).unwrap();
//! assert_eq!(signature.as_bytes(), [0, 0, 0, 0x80, 0, 0, 0, 7]);
//! ```
//!
//! All functions are pure and operate on borrowed slices.

mod algorithm;
pub mod envelope;
mod error;
mod format;
mod signature;
mod width;

pub use self::{
    algorithm::*,
    envelope::{EnvelopeKind, classify, unwrap_cms},
    error::*,
    format::*,
    signature::*,
    width::*,
};

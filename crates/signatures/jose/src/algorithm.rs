use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumString, IntoStaticStr};

use crate::CoordinateWidth;

/// Key algorithm identifiers as reported by secure-signature backends
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[strum(ascii_case_insensitive)]
pub enum KeyAlgorithm {
    #[strum(serialize = "eccp256k1")]
    Eccp256k1,
    #[strum(serialize = "eccp256r1")]
    Eccp256r1,
    #[strum(serialize = "eccp384k1")]
    Eccp384k1,
    #[strum(serialize = "eccp384r1")]
    Eccp384r1,
    #[strum(serialize = "rsa2k")]
    Rsa2k,
    #[strum(serialize = "rsa4k")]
    Rsa4k,
    #[strum(serialize = "ecc_ed25519")]
    EccEd25519,
}

impl KeyAlgorithm {
    pub const fn jws_algorithm(self) -> JwsAlgorithm {
        match self {
            Self::Eccp256k1 => JwsAlgorithm::ES256K,
            Self::Eccp256r1 => JwsAlgorithm::ES256,
            Self::Eccp384k1 | Self::Eccp384r1 => JwsAlgorithm::ES384,
            Self::Rsa2k => JwsAlgorithm::RS256,
            Self::Rsa4k => JwsAlgorithm::RS512,
            Self::EccEd25519 => JwsAlgorithm::EdDSA,
        }
    }

    /// `None` for algorithms whose signatures are not DER `r, s` pairs
    #[inline]
    pub const fn coordinate_width(self) -> Option<CoordinateWidth> {
        self.jws_algorithm().coordinate_width()
    }
}

/// `alg` header values, RFC 7518 and RFC 8812
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum JwsAlgorithm {
    ES256,
    ES256K,
    ES384,
    ES512,
    RS256,
    RS384,
    RS512,
    EdDSA,
}

impl JwsAlgorithm {
    pub const fn coordinate_width(self) -> Option<CoordinateWidth> {
        match self {
            Self::ES256 | Self::ES256K => Some(CoordinateWidth::P256),
            Self::ES384 => Some(CoordinateWidth::P384),
            Self::ES512 => Some(CoordinateWidth::P521),
            Self::RS256 | Self::RS384 | Self::RS512 | Self::EdDSA => None,
        }
    }

    #[inline]
    pub const fn is_ecdsa(self) -> bool {
        self.coordinate_width().is_some()
    }
}

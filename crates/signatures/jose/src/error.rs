use sigenv_der::DerError;
use thiserror::Error as ThisError;

use crate::KeyAlgorithm;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SignatureError {
    #[error(transparent)]
    Der(#[from] DerError),

    /// Neither a bare `SEQUENCE { r, s }` nor a CMS `SignedData` carrying one
    #[error("unrecognized signature format")]
    UnrecognizedSignatureFormat,

    #[error("no SignerInfo found in CMS SignedData")]
    NoSignerFound,

    #[error("{0} signatures have no fixed-width r || s form")]
    UnsupportedAlgorithm(KeyAlgorithm),
}

impl SignatureError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Der(DerError::MalformedEncoding { .. }) => ErrorKind::MalformedEncoding,
            Self::Der(DerError::UnexpectedTag { .. }) => ErrorKind::UnexpectedTag,
            Self::UnrecognizedSignatureFormat => ErrorKind::UnrecognizedSignatureFormat,
            Self::NoSignerFound => ErrorKind::NoSignerFound,
            Self::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
        }
    }
}

/// Coarse classification for callers that report errors as codes,
/// e.g. `MALFORMED_ENCODING`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    MalformedEncoding,
    UnexpectedTag,
    UnrecognizedSignatureFormat,
    NoSignerFound,
    UnsupportedAlgorithm,
}

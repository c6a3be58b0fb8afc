//! Detection and unwrapping of the containers a signing backend may put
//! around the DER `SEQUENCE { r, s }`.

mod cms;

use sigenv_der::{SIGNED_DATA_OID, tag};
use tracing::trace;

pub use self::cms::unwrap_cms;
use crate::SignatureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum EnvelopeKind {
    /// DER `SEQUENCE { INTEGER r, INTEGER s }`
    Bare,
    /// CMS `ContentInfo` with `SignedData` content
    CmsWrapped,
}

/// Shortest buffer still considered a bare signature, exclusive
const MIN_BARE_LEN: usize = 8;

/// Byte-pattern test for a bare ECDSA signature: a SEQUENCE whose short
/// form length is followed directly by an INTEGER.
///
/// A bare signature with a long form outer length (`30 81 ..`) does not
/// match. Use [`der_to_rs`](crate::der_to_rs) when the input is known to
/// be bare.
///
/// The pattern alone is ambiguous: a CMS envelope of 516 to 771 octets
/// starts with `30 82 02 ..` and matches too. [`classify`] therefore looks
/// for the `SignedData` content type before falling back to this test.
#[inline]
pub const fn is_bare(buf: &[u8]) -> bool {
    buf.len() > MIN_BARE_LEN && buf[0] == tag::SEQUENCE && buf[2] == tag::INTEGER
}

/// Decides which envelope `buf` is.
///
/// A `ContentInfo` with the `SignedData` content type is
/// [`EnvelopeKind::CmsWrapped`], otherwise [`is_bare`] decides. Anything
/// else is [`SignatureError::UnrecognizedSignatureFormat`].
pub fn classify(buf: &[u8]) -> Result<EnvelopeKind, SignatureError> {
    match cms::content_type(buf) {
        Ok(content_type) if content_type == SIGNED_DATA_OID => {
            return Ok(EnvelopeKind::CmsWrapped);
        }
        Ok(content_type) => trace!(%content_type, "unexpected CMS content type"),
        Err(err) => trace!(%err, "not a CMS ContentInfo"),
    }

    if is_bare(buf) {
        return Ok(EnvelopeKind::Bare);
    }
    Err(SignatureError::UnrecognizedSignatureFormat)
}

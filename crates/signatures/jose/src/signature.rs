use core::fmt::{self, Debug, Display};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Serialize;
use serde_with::{
    base64::{Base64, UrlSafe},
    formats::Unpadded,
    serde_as,
};
use sigenv_der::{extract_integer, read_node, tag};
use tracing::{debug, trace, warn};

use crate::{
    CoordinateWidth, SignatureError,
    envelope::{EnvelopeKind, classify, unwrap_cms},
    normalize_width_into,
};

/// Fixed-width `r || s`, both halves `width` octets, big-endian
#[serde_as]
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedSignature(#[serde_as(as = "Base64<UrlSafe, Unpadded>")] Vec<u8>);

impl NormalizedSignature {
    /// Width of a single coordinate
    #[inline]
    pub fn width(&self) -> usize {
        self.0.len() / 2
    }

    #[inline]
    pub fn r(&self) -> &[u8] {
        &self.0[..self.width()]
    }

    #[inline]
    pub fn s(&self) -> &[u8] {
        &self.0[self.width()..]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Copies into an array of exactly `N` octets, `None` if the length
    /// differs
    #[inline]
    pub fn to_array<const N: usize>(&self) -> Option<[u8; N]> {
        self.0.as_slice().try_into().ok()
    }

    /// JWS signature segment: unpadded base64url
    pub fn to_base64url(&self) -> String {
        URL_SAFE_NO_PAD.encode(&self.0)
    }
}

impl AsRef<[u8]> for NormalizedSignature {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<NormalizedSignature> for Vec<u8> {
    #[inline]
    fn from(signature: NormalizedSignature) -> Self {
        signature.into_bytes()
    }
}

impl Debug for NormalizedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NormalizedSignature(r: {}, s: {})",
            hex::encode(self.r()),
            hex::encode(self.s())
        )
    }
}

impl Display for NormalizedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64url())
    }
}

/// Converts whatever the signing backend returned into `r || s`.
///
/// `raw` is either a bare DER `SEQUENCE { r, s }` or a CMS `SignedData`
/// envelope around one, see [`classify`].
pub fn to_fixed_width_rs(
    raw: &[u8],
    width: CoordinateWidth,
) -> Result<NormalizedSignature, SignatureError> {
    trace!(raw = %hex::encode(raw), "normalizing signature");

    let kind = classify(raw)?;
    debug!(%kind, len = raw.len(), "classified signature envelope");

    let der = match kind {
        EnvelopeKind::Bare => raw,
        EnvelopeKind::CmsWrapped => unwrap_cms(raw)?,
    };
    der_to_rs(der, width)
}

/// Converts a DER `SEQUENCE { INTEGER r, INTEGER s }` into `r || s`
/// without envelope detection.
///
/// Octets following `s` are ignored.
pub fn der_to_rs(der: &[u8], width: CoordinateWidth) -> Result<NormalizedSignature, SignatureError> {
    let (sequence, _) = read_node(der, 0)?;
    let sequence = sequence.expect_tag(tag::SEQUENCE)?;

    let (r, next) = extract_integer(der, sequence.value_range().start)?;
    let (s, _) = extract_integer(der, next)?;

    let width = width.bytes();
    for (name, component) in [("r", r), ("s", s)] {
        if discards_significant_octets(component, width) {
            warn!(
                component = name,
                len = component.len(),
                width,
                "signature component wider than coordinate width, truncating"
            );
        }
    }

    let mut rs = vec![0; 2 * width];
    let (r_out, s_out) = rs.split_at_mut(width);
    normalize_width_into(r, r_out);
    normalize_width_into(s, s_out);

    let signature = NormalizedSignature(rs);
    trace!(rs = %hex::encode(signature.as_bytes()), "normalized signature");
    Ok(signature)
}

/// Whether fitting `component` into `width` octets drops anything but
/// leading zeros
fn discards_significant_octets(component: &[u8], width: usize) -> bool {
    component
        .len()
        .checked_sub(width)
        .is_some_and(|excess| component[..excess].iter().any(|octet| *octet != 0))
}

/// Assembles a compact JWS `<signing_input>.<signature>`, where
/// `signing_input` is `<header>.<payload>` as already encoded
pub fn compact_token(signing_input: &str, signature: &NormalizedSignature) -> String {
    format!("{signing_input}.{}", signature.to_base64url())
}

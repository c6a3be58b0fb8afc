use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumString};

use crate::{KeyAlgorithm, SignatureError, to_fixed_width_rs};

/// Output encoding requested by the caller
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum SignatureFormat {
    /// As returned by the backend, untouched
    Der,
    /// Fixed-width `r || s`
    Rs,
    /// Unpadded base64url of `r || s`, ready for a JWS
    #[default]
    Base64,
}

impl SignatureFormat {
    /// Unknown or missing values fall back to [`SignatureFormat::Base64`]
    pub fn from_str_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    pub algorithm: KeyAlgorithm,
    #[serde(default)]
    pub format: SignatureFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertedSignature {
    Bytes(Vec<u8>),
    Base64Url(String),
}

impl ConversionOptions {
    #[inline]
    pub const fn new(algorithm: KeyAlgorithm, format: SignatureFormat) -> Self {
        Self { algorithm, format }
    }

    /// Converts a backend signature into the requested format.
    ///
    /// Non-ECDSA algorithms have nothing to normalize: [`SignatureFormat::Rs`]
    /// is rejected for them, while [`SignatureFormat::Base64`] encodes `raw`
    /// as is.
    pub fn convert(&self, raw: &[u8]) -> Result<ConvertedSignature, SignatureError> {
        let width = self.algorithm.coordinate_width();
        match (self.format, width) {
            (SignatureFormat::Der, _) => Ok(ConvertedSignature::Bytes(raw.to_vec())),
            (SignatureFormat::Rs, Some(width)) => {
                to_fixed_width_rs(raw, width).map(|rs| ConvertedSignature::Bytes(rs.into_bytes()))
            }
            (SignatureFormat::Rs, None) => {
                Err(SignatureError::UnsupportedAlgorithm(self.algorithm))
            }
            (SignatureFormat::Base64, Some(width)) => to_fixed_width_rs(raw, width)
                .map(|rs| ConvertedSignature::Base64Url(rs.to_base64url())),
            (SignatureFormat::Base64, None) => {
                Ok(ConvertedSignature::Base64Url(URL_SAFE_NO_PAD.encode(raw)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("der"), SignatureFormat::Der)]
    #[case(Some("DER"), SignatureFormat::Der)]
    #[case(Some("Rs"), SignatureFormat::Rs)]
    #[case(Some("base64"), SignatureFormat::Base64)]
    #[case(Some("pem"), SignatureFormat::Base64)]
    #[case(Some(""), SignatureFormat::Base64)]
    #[case(None, SignatureFormat::Base64)]
    fn format_or_default(#[case] value: Option<&str>, #[case] expected: SignatureFormat) {
        assert_eq!(SignatureFormat::from_str_or_default(value), expected);
    }

    #[test]
    fn format_display() {
        assert_eq!(SignatureFormat::Base64.to_string(), "BASE64");
        assert_eq!(SignatureFormat::Rs.to_string(), "RS");
    }

    #[test]
    fn options_serde() {
        let options: ConversionOptions =
            serde_json::from_str(r#"{"algorithm":"eccp256r1"}"#).unwrap();
        assert_eq!(
            options,
            ConversionOptions::new(KeyAlgorithm::Eccp256r1, SignatureFormat::Base64)
        );

        let options: ConversionOptions =
            serde_json::from_str(r#"{"algorithm":"rsa2k","format":"der"}"#).unwrap();
        assert_eq!(options.format, SignatureFormat::Der);

        assert_eq!(
            serde_json::to_value(options).unwrap(),
            serde_json::json!({ "algorithm": "rsa2k", "format": "DER" })
        );
    }

    const DER: [u8; 9] = hex!("30 07 02 02 00 80 02 01 07");

    fn p256_rs(r: u8, s: u8) -> Vec<u8> {
        let mut rs = vec![0; 64];
        rs[31] = r;
        rs[63] = s;
        rs
    }

    #[rstest]
    #[case(SignatureFormat::Der, ConvertedSignature::Bytes(DER.to_vec()))]
    #[case(SignatureFormat::Rs, ConvertedSignature::Bytes(p256_rs(0x80, 0x07)))]
    fn convert_ecdsa(#[case] format: SignatureFormat, #[case] expected: ConvertedSignature) {
        let options = ConversionOptions::new(KeyAlgorithm::Eccp256r1, format);
        assert_eq!(options.convert(&DER), Ok(expected));
    }

    #[test]
    fn convert_ecdsa_base64() {
        let options = ConversionOptions::new(KeyAlgorithm::Eccp384r1, SignatureFormat::Base64);
        let Ok(ConvertedSignature::Base64Url(encoded)) = options.convert(&DER) else {
            panic!("expected base64url output");
        };
        let decoded = URL_SAFE_NO_PAD.decode(encoded).unwrap();
        assert_eq!(decoded.len(), 96);
        assert_eq!(decoded[47], 0x80);
        assert_eq!(decoded[95], 0x07);
    }

    #[test]
    fn convert_non_ecdsa() {
        let raw = hex!("01 02 03");
        assert_eq!(
            ConversionOptions::new(KeyAlgorithm::Rsa2k, SignatureFormat::Rs).convert(&raw),
            Err(SignatureError::UnsupportedAlgorithm(KeyAlgorithm::Rsa2k))
        );
        assert_eq!(
            ConversionOptions::new(KeyAlgorithm::EccEd25519, SignatureFormat::Base64)
                .convert(&raw),
            Ok(ConvertedSignature::Base64Url("AQID".to_owned()))
        );
        assert_eq!(
            ConversionOptions::new(KeyAlgorithm::Rsa4k, SignatureFormat::Der).convert(&raw),
            Ok(ConvertedSignature::Bytes(raw.to_vec()))
        );
    }

    #[test]
    fn convert_propagates_errors() {
        let options = ConversionOptions::new(KeyAlgorithm::Eccp256k1, SignatureFormat::Rs);
        assert_eq!(
            options.convert(&[0xff; 16]),
            Err(SignatureError::UnrecognizedSignatureFormat)
        );
    }
}

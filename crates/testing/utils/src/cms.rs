//! Minimal CMS `ContentInfo { SignedData }` envelopes, shaped the way
//! secure-signature backends return them

use sigenv_der::{SIGNED_DATA_OID, tag};

use crate::der::{encode_tlv, encode_unsigned_integer};

/// `1.2.840.113549.1.7.1`
pub const DATA_OID: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07, 0x01];
/// `2.16.840.1.101.3.4.2.1`
pub const SHA256_OID: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01];
/// `1.2.840.10045.4.3.2`
pub const ECDSA_WITH_SHA256_OID: &[u8] = &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02];

/// Primitive, context-specific `[0]`, as used by `SubjectKeyIdentifier`
const SUBJECT_KEY_IDENTIFIER: u8 = 0x80;

#[derive(Debug, Clone)]
pub struct SignedDataBuilder {
    content_type: Vec<u8>,
    signatures: Vec<Vec<u8>>,
    /// Length of the opaque certificate body, if any
    certificates: Option<usize>,
    signed_attributes: bool,
    subject_key_identifier: bool,
}

impl Default for SignedDataBuilder {
    fn default() -> Self {
        Self {
            content_type: SIGNED_DATA_OID.as_bytes().to_vec(),
            signatures: Vec::new(),
            certificates: None,
            signed_attributes: false,
            subject_key_identifier: false,
        }
    }
}

impl SignedDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the outer content type, `SignedData` by default
    #[must_use]
    pub fn content_type(mut self, oid: &[u8]) -> Self {
        self.content_type = oid.to_vec();
        self
    }

    /// Appends a `SignerInfo` carrying `signature`
    #[must_use]
    pub fn signer(mut self, signature: impl Into<Vec<u8>>) -> Self {
        self.signatures.push(signature.into());
        self
    }

    /// Adds an opaque `certificates [0]` field
    #[must_use]
    pub const fn certificates(self) -> Self {
        self.certificates_len(4)
    }

    /// Adds a `certificates [0]` field whose inner SEQUENCE holds `len`
    /// filler octets, to push the envelope into a given length form
    #[must_use]
    pub const fn certificates_len(mut self, len: usize) -> Self {
        self.certificates = Some(len);
        self
    }

    /// Adds `signedAttrs [0]` to every `SignerInfo`
    #[must_use]
    pub const fn signed_attributes(mut self) -> Self {
        self.signed_attributes = true;
        self
    }

    /// Identifies signers by `subjectKeyIdentifier` instead of
    /// `issuerAndSerialNumber`
    #[must_use]
    pub const fn subject_key_identifier(mut self) -> Self {
        self.subject_key_identifier = true;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let digest_algorithm = algorithm(SHA256_OID);

        let mut signed_data = [
            encode_unsigned_integer(&[1]),
            encode_tlv(tag::SET, &digest_algorithm),
            // detached content
            encode_tlv(tag::SEQUENCE, &encode_tlv(tag::OBJECT_IDENTIFIER, DATA_OID)),
        ]
        .concat();
        if let Some(len) = self.certificates {
            signed_data.extend(encode_tlv(
                tag::CONTEXT_0,
                &encode_tlv(tag::SEQUENCE, &vec![0xde; len]),
            ));
        }
        let signer_infos: Vec<u8> = self
            .signatures
            .iter()
            .flat_map(|signature| self.signer_info(signature))
            .collect();
        signed_data.extend(encode_tlv(tag::SET, &signer_infos));

        encode_tlv(
            tag::SEQUENCE,
            &[
                encode_tlv(tag::OBJECT_IDENTIFIER, &self.content_type),
                encode_tlv(tag::CONTEXT_0, &encode_tlv(tag::SEQUENCE, &signed_data)),
            ]
            .concat(),
        )
    }

    fn signer_info(&self, signature: &[u8]) -> Vec<u8> {
        let (version, sid) = if self.subject_key_identifier {
            (3, encode_tlv(SUBJECT_KEY_IDENTIFIER, &[0x5a; 20]))
        } else {
            let issuer = encode_tlv(tag::SEQUENCE, &[]);
            let serial = encode_unsigned_integer(&[0x01, 0x23, 0x45]);
            (1, encode_tlv(tag::SEQUENCE, &[issuer, serial].concat()))
        };

        let mut info = [
            encode_unsigned_integer(&[version]),
            sid,
            algorithm(SHA256_OID),
        ]
        .concat();
        if self.signed_attributes {
            let content_type_attr = encode_tlv(
                tag::SEQUENCE,
                &[
                    encode_tlv(
                        tag::OBJECT_IDENTIFIER,
                        &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x03],
                    ),
                    encode_tlv(tag::SET, &encode_tlv(tag::OBJECT_IDENTIFIER, DATA_OID)),
                ]
                .concat(),
            );
            info.extend(encode_tlv(tag::CONTEXT_0, &content_type_attr));
        }
        info.extend(algorithm(ECDSA_WITH_SHA256_OID));
        info.extend(encode_tlv(tag::OCTET_STRING, signature));

        encode_tlv(tag::SEQUENCE, &info)
    }
}

fn algorithm(oid: &[u8]) -> Vec<u8> {
    encode_tlv(tag::SEQUENCE, &encode_tlv(tag::OBJECT_IDENTIFIER, oid))
}

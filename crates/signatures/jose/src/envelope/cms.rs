use sigenv_der::{DerError, DerNode, DerReader, ObjectIdentifier, SIGNED_DATA_OID, read_node, tag};
use tracing::debug;

use super::is_bare;
use crate::SignatureError;

/// Reads `ContentInfo.contentType` and returns the remaining fields
fn content_info(buf: &[u8]) -> Result<(ObjectIdentifier<'_>, DerReader<'_>), DerError> {
    let (content_info, _) = read_node(buf, 0)?;
    let mut fields = content_info.expect_tag(tag::SEQUENCE)?.children();
    let content_type = ObjectIdentifier::try_from(fields.read()?)?;
    Ok((content_type, fields))
}

pub(super) fn content_type(buf: &[u8]) -> Result<ObjectIdentifier<'_>, DerError> {
    content_info(buf).map(|(content_type, _)| content_type)
}

/// Extracts the DER signature carried by the first `SignerInfo` of a
/// CMS `SignedData` envelope.
///
/// ```text
/// ContentInfo ::= SEQUENCE {
///   contentType   OBJECT IDENTIFIER,  -- 1.2.840.113549.1.7.2
///   content       [0] EXPLICIT SignedData }
///
/// SignedData ::= SEQUENCE {
///   version           INTEGER,
///   digestAlgorithms  SET,
///   encapContentInfo  SEQUENCE,
///   certificates      [0] IMPLICIT OPTIONAL,
///   crls              [1] IMPLICIT OPTIONAL,
///   signerInfos       SET OF SignerInfo }
/// ```
///
/// Further signers are ignored. The returned slice borrows from `buf`.
pub fn unwrap_cms(buf: &[u8]) -> Result<&[u8], SignatureError> {
    let (content_type, mut fields) = content_info(buf)?;
    if content_type != SIGNED_DATA_OID {
        return Err(SignatureError::UnrecognizedSignatureFormat);
    }

    let explicit = fields.read_expected(tag::CONTEXT_0)?;
    let signed_data = explicit.children().read_expected(tag::SEQUENCE)?;

    let mut fields = signed_data.children();
    // version
    fields.read_expected(tag::INTEGER)?;
    // digestAlgorithms
    fields.read_expected(tag::SET)?;
    // encapContentInfo
    fields.read_expected(tag::SEQUENCE)?;
    // certificates
    fields.skip_if(tag::CONTEXT_0)?;
    // crls
    fields.skip_if(tag::CONTEXT_1)?;

    let signer_infos = fields.read_expected(tag::SET)?;
    let Some(signer_info) = signer_infos.children().next() else {
        return Err(SignatureError::NoSignerFound);
    };

    let signature = signer_signature(signer_info?)?;
    if !is_bare(signature) {
        return Err(SignatureError::UnrecognizedSignatureFormat);
    }

    debug!(len = signature.len(), "unwrapped CMS SignerInfo signature");
    Ok(signature)
}

/// `SignerInfo.signature` OCTET STRING content
fn signer_signature(signer_info: DerNode<'_>) -> Result<&[u8], DerError> {
    let mut fields = signer_info.expect_tag(tag::SEQUENCE)?.children();
    // version
    fields.read_expected(tag::INTEGER)?;
    // sid: issuerAndSerialNumber or [0] subjectKeyIdentifier
    fields.read()?;
    // digestAlgorithm
    fields.read_expected(tag::SEQUENCE)?;
    // signedAttrs
    fields.skip_if(tag::CONTEXT_0)?;
    // signatureAlgorithm
    fields.read_expected(tag::SEQUENCE)?;

    fields
        .read_expected(tag::OCTET_STRING)
        .map(|signature| signature.value())
}

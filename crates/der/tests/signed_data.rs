use hex_literal::hex;
use sigenv_der::{
    DerError, DerReader, MalformedReason, ObjectIdentifier, SIGNED_DATA_OID, extract_integer,
    read_node, tag,
};

/// `ContentInfo { SignedData }` with a single signer and no certificates
const ENVELOPE: [u8; 78] = hex!(
    "30 4c"
    "06 09 2a 86 48 86 f7 0d 01 07 02"
    "a0 3f"
    "30 3d"
    "02 01 01"
    "31 0d 30 0b 06 09 60 86 48 01 65 03 04 02 01"
    "30 0b 06 09 2a 86 48 86 f7 0d 01 07 01"
    "31 1c"
    "30 1a"
    "02 01 01"
    "30 00"
    "30 00"
    "30 00"
    "04 0f 30 0d 02 05 00 80 00 00 01 02 04 7f 00 00 01"
);

#[test]
fn walks_signed_data() {
    let (content_info, next) = read_node(&ENVELOPE, 0).unwrap();
    assert_eq!(next, ENVELOPE.len());

    let mut fields = content_info.children();
    let content_type = ObjectIdentifier::try_from(fields.read().unwrap()).unwrap();
    assert_eq!(content_type, SIGNED_DATA_OID);
    assert_eq!(content_type.to_string(), "1.2.840.113549.1.7.2");

    let signed_data = fields
        .read_expected(tag::CONTEXT_0)
        .unwrap()
        .children()
        .read_expected(tag::SEQUENCE)
        .unwrap();
    assert!(fields.is_empty());

    let tags: Vec<u8> = signed_data
        .children()
        .map(|node| node.map(|node| node.tag()))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        tags,
        [tag::INTEGER, tag::SET, tag::SEQUENCE, tag::SET]
    );

    let signer_infos = signed_data.children().last().unwrap().unwrap();
    let mut signer = signer_infos
        .children()
        .next()
        .unwrap()
        .unwrap()
        .children();
    for _ in 0..4 {
        signer.read().unwrap();
    }
    let signature = signer.read_expected(tag::OCTET_STRING).unwrap().value();

    let (r, next) = extract_integer(signature, 2).unwrap();
    let (s, _) = extract_integer(signature, next).unwrap();
    assert_eq!(r, hex!("00 80 00 00 01"));
    assert_eq!(s, hex!("7f 00 00 01"));
}

#[test]
fn truncation_anywhere_is_detected() {
    for len in 0..ENVELOPE.len() {
        let truncated = &ENVELOPE[..len];
        let err = read_node(truncated, 0).unwrap_err();
        assert!(
            matches!(err, DerError::MalformedEncoding { .. }),
            "length {len}: {err}"
        );
    }
}

#[test]
fn nested_overrun_is_reported_at_child() {
    // SET claims 3 octets but its INTEGER claims 5
    let buf = hex!("31 03 02 05 01");
    let (set, _) = read_node(&buf, 0).unwrap();
    let mut reader: DerReader<'_> = set.children();
    assert_eq!(
        reader.read(),
        Err(DerError::malformed(2, MalformedReason::ValueOverrun))
    );
}

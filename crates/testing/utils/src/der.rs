//! DER encoders used to build signature fixtures

use proptest::{collection::vec, prelude::*};
use sigenv_der::tag;

pub fn encode_length(length: usize) -> Vec<u8> {
    if let Ok(short @ 0..0x80) = u8::try_from(length) {
        return vec![short];
    }
    let octets: Vec<u8> = length
        .to_be_bytes()
        .into_iter()
        .skip_while(|octet| *octet == 0)
        .collect();
    let count = u8::try_from(octets.len()).unwrap();
    [vec![0x80 | count], octets].concat()
}

pub fn encode_tlv(tag: u8, value: &[u8]) -> Vec<u8> {
    [&[tag][..], &encode_length(value.len()), value].concat()
}

/// Minimal INTEGER encoding of an unsigned big-endian magnitude: leading
/// zeros are dropped and a `0x00` sign guard is prepended when the high
/// bit of the first remaining octet is set
pub fn encode_unsigned_integer(magnitude: &[u8]) -> Vec<u8> {
    let trimmed = magnitude
        .iter()
        .position(|octet| *octet != 0)
        .map_or(&[0u8][..], |i| &magnitude[i..]);

    let mut value = Vec::with_capacity(trimmed.len() + 1);
    if trimmed[0] & 0x80 != 0 {
        value.push(0);
    }
    value.extend_from_slice(trimmed);
    encode_tlv(tag::INTEGER, &value)
}

/// `SEQUENCE { INTEGER r, INTEGER s }`
pub fn encode_signature(r: &[u8], s: &[u8]) -> Vec<u8> {
    encode_tlv(
        tag::SEQUENCE,
        &[encode_unsigned_integer(r), encode_unsigned_integer(s)].concat(),
    )
}

/// Left-pads `magnitude` with zeros up to `width` octets
pub fn pad_left(magnitude: &[u8], width: usize) -> Vec<u8> {
    assert!(magnitude.len() <= width, "magnitude is wider than {width}");
    let mut padded = vec![0; width - magnitude.len()];
    padded.extend_from_slice(magnitude);
    padded
}

/// Non-empty big-endian magnitude of at most `width` octets
pub fn magnitude(width: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 1..=width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_forms() {
        assert_eq!(encode_length(0x7f), [0x7f]);
        assert_eq!(encode_length(0x90), [0x81, 0x90]);
        assert_eq!(encode_length(0x0100), [0x82, 0x01, 0x00]);
    }

    #[test]
    fn integer_sign_guard() {
        assert_eq!(encode_unsigned_integer(&[0x05]), [0x02, 0x01, 0x05]);
        assert_eq!(encode_unsigned_integer(&[0x80]), [0x02, 0x02, 0x00, 0x80]);
        assert_eq!(encode_unsigned_integer(&[0x00, 0x00, 0x7f]), [0x02, 0x01, 0x7f]);
        assert_eq!(encode_unsigned_integer(&[0x00, 0x00]), [0x02, 0x01, 0x00]);
    }

    #[test]
    fn signature() {
        assert_eq!(
            encode_signature(&[0x05], &[0x07]),
            [0x30, 0x06, 0x02, 0x01, 0x05, 0x02, 0x01, 0x07]
        );
    }
}

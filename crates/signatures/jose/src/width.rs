/// Byte length of one signature coordinate, determined by the key's curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoordinateWidth(usize);

impl CoordinateWidth {
    /// P-256 and secp256k1
    pub const P256: Self = Self(32);
    pub const P384: Self = Self(48);
    pub const P521: Self = Self(66);

    /// Upper bound accepted by [`CoordinateWidth::new`]
    pub const MAX: Self = Self(512);

    #[inline]
    pub const fn new(bytes: usize) -> Option<Self> {
        if bytes == 0 || bytes > Self::MAX.0 {
            return None;
        }
        Some(Self(bytes))
    }

    #[inline]
    pub const fn bytes(self) -> usize {
        self.0
    }

    /// Length of the concatenated `r || s`
    #[inline]
    pub const fn signature_len(self) -> usize {
        2 * self.0
    }
}

/// Maps a big-endian magnitude onto exactly `out.len()` octets.
///
/// Excess octets are dropped from the front, which also discards a
/// `0x00` sign guard. Shorter values are left-padded with zeros.
pub fn normalize_width_into(magnitude: &[u8], out: &mut [u8]) {
    let width = out.len();
    if let Some(excess) = magnitude.len().checked_sub(width) {
        out.copy_from_slice(&magnitude[excess..]);
    } else {
        let (padding, tail) = out.split_at_mut(width - magnitude.len());
        padding.fill(0);
        tail.copy_from_slice(magnitude);
    }
}

/// Allocating version of [`normalize_width_into`]
pub fn normalize_width(magnitude: &[u8], width: usize) -> Vec<u8> {
    let mut out = vec![0; width];
    normalize_width_into(magnitude, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&hex!("05"), 4, &hex!("00000005"))]
    #[case(&hex!("01020304"), 4, &hex!("01020304"))]
    #[case(&hex!("0080ff01"), 3, &hex!("80ff01"))]
    #[case(&hex!("0000ff"), 2, &hex!("00ff"))]
    // mechanical: the front is dropped regardless of its value
    #[case(&hex!("abcdef"), 2, &hex!("cdef"))]
    #[case(&[], 2, &hex!("0000"))]
    fn normalize(#[case] magnitude: &[u8], #[case] width: usize, #[case] expected: &[u8]) {
        assert_eq!(normalize_width(magnitude, width), expected);
    }

    #[test]
    fn exact_width_is_identity() {
        let value: Vec<u8> = (1..=32).collect();
        assert_eq!(normalize_width(&value, 32), value);
    }

    #[test]
    fn strips_sign_guard() {
        let mut magnitude = vec![0x00];
        magnitude.extend([0x80; 32]);
        assert_eq!(normalize_width(&magnitude, 32), magnitude[1..]);
    }

    #[test]
    fn into_overwrites_previous_content() {
        let mut out = [0xff; 4];
        normalize_width_into(&[0x01], &mut out);
        assert_eq!(out, [0, 0, 0, 1]);
    }

    #[rstest]
    #[case(0, None)]
    #[case(1, Some(1))]
    #[case(32, Some(32))]
    #[case(512, Some(512))]
    #[case(513, None)]
    fn width_bounds(#[case] bytes: usize, #[case] expected: Option<usize>) {
        assert_eq!(CoordinateWidth::new(bytes).map(CoordinateWidth::bytes), expected);
    }

    #[test]
    fn signature_len() {
        assert_eq!(CoordinateWidth::P256.signature_len(), 64);
        assert_eq!(CoordinateWidth::P384.signature_len(), 96);
        assert_eq!(CoordinateWidth::P521.signature_len(), 132);
    }
}

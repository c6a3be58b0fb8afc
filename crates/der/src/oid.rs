use core::fmt::{self, Display};

use crate::{DerNode, Result, tag};

/// Content octets of an OBJECT IDENTIFIER, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectIdentifier<'a>(&'a [u8]);

/// `1.2.840.113549.1.7.2`: CMS `SignedData` content type
pub const SIGNED_DATA_OID: ObjectIdentifier<'static> =
    ObjectIdentifier::new(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07, 0x02]);

impl<'a> ObjectIdentifier<'a> {
    #[inline]
    pub const fn new(encoded: &'a [u8]) -> Self {
        Self(encoded)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Decodes base-128 sub-identifiers, with the first one split into the
    /// two leading arcs. Yields `None` for a truncated or oversized
    /// sub-identifier.
    pub fn arcs(&self) -> impl Iterator<Item = Option<u64>> + use<'a> {
        let mut subidentifiers = SubIdentifiers(self.0);
        let mut pending = None;
        let mut first = true;
        core::iter::from_fn(move || {
            if let Some(arc) = pending.take() {
                return Some(Some(arc));
            }
            let subidentifier = subidentifiers.next()?;
            if !core::mem::take(&mut first) {
                return Some(subidentifier);
            }
            let Some(value) = subidentifier else {
                return Some(None);
            };
            let (head, tail) = match value {
                0..40 => (0, value),
                40..80 => (1, value - 40),
                _ => (2, value - 80),
            };
            pending = Some(tail);
            Some(Some(head))
        })
    }
}

impl<'a> TryFrom<DerNode<'a>> for ObjectIdentifier<'a> {
    type Error = crate::DerError;

    fn try_from(node: DerNode<'a>) -> Result<Self> {
        node.expect_tag(tag::OBJECT_IDENTIFIER)
            .map(|node| Self::new(node.value()))
    }
}

impl Display for ObjectIdentifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.arcs().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match arc {
                Some(arc) => write!(f, "{arc}")?,
                None => f.write_str("?")?,
            }
        }
        Ok(())
    }
}

struct SubIdentifiers<'a>(&'a [u8]);

impl Iterator for SubIdentifiers<'_> {
    type Item = Option<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.0;
        if bytes.is_empty() {
            return None;
        }
        let mut value: u64 = 0;
        for (i, octet) in bytes.iter().enumerate() {
            let Some(shifted) = value.checked_mul(128) else {
                self.0 = &[];
                return Some(None);
            };
            value = shifted | u64::from(octet & 0x7f);
            if octet & 0x80 == 0 {
                self.0 = &bytes[i + 1..];
                return Some(Some(value));
            }
        }
        // last octet still had the continuation bit set
        self.0 = &[];
        Some(None)
    }
}

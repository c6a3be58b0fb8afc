use core::ops::Range;

use crate::{DerError, MalformedReason, Result};

/// Borrowed tag-length-value triple.
///
/// Offsets are absolute positions in the buffer the node was read from,
/// so `value_range().end <= buffer.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerNode<'a> {
    buf: &'a [u8],
    offset: usize,
    tag: u8,
    value_range: Range<usize>,
}

impl<'a> DerNode<'a> {
    #[inline]
    pub const fn tag(&self) -> u8 {
        self.tag
    }

    /// Number of content octets
    #[inline]
    pub const fn length(&self) -> usize {
        self.value_range.end - self.value_range.start
    }

    #[inline]
    pub fn value_range(&self) -> Range<usize> {
        self.value_range.clone()
    }

    #[inline]
    pub fn value(&self) -> &'a [u8] {
        &self.buf[self.value_range()]
    }

    pub const fn expect_tag(self, expected: u8) -> Result<Self> {
        if self.tag != expected {
            return Err(DerError::UnexpectedTag {
                offset: self.offset,
                expected,
                found: self.tag,
            });
        }
        Ok(self)
    }

    /// Reader over the nested nodes of a constructed value
    #[inline]
    pub const fn children(&self) -> DerReader<'a> {
        DerReader {
            buf: self.buf,
            pos: self.value_range.start,
            end: self.value_range.end,
        }
    }
}

/// Reads the node starting at `offset`.
///
/// Returns the node together with the offset of whatever follows it.
pub fn read_node(buf: &[u8], offset: usize) -> Result<(DerNode<'_>, usize)> {
    let tag = *buf
        .get(offset)
        .ok_or(DerError::malformed(offset, MalformedReason::OffsetOutOfBounds))?;

    let (length, length_len) = parse_der_length(buf, offset + 1)?;
    let start = offset + 1 + length_len;
    let end = start
        .checked_add(length)
        .filter(|end| *end <= buf.len())
        .ok_or(DerError::malformed(offset, MalformedReason::ValueOverrun))?;

    Ok((
        DerNode {
            buf,
            offset,
            tag,
            value_range: start..end,
        },
        end,
    ))
}

/// Parses DER length encoding at `offset`.
///
/// - Short form: 0-127 (0x00-0x7F), length in a single octet
/// - Long form: the low 7 bits of the first octet give the number of
///   big-endian length octets that follow
///
/// Non-minimal long forms are accepted, the indefinite form (`0x80`) is not.
///
/// Returns (`length`, `octets_consumed`), the latter including the first
/// length octet.
pub fn parse_der_length(buf: &[u8], offset: usize) -> Result<(usize, usize)> {
    let first = *buf
        .get(offset)
        .ok_or(DerError::malformed(offset, MalformedReason::MissingLength))?;

    if first & 0x80 == 0 {
        return Ok((usize::from(first), 1));
    }

    let count = usize::from(first & 0x7f);
    if count == 0 {
        return Err(DerError::malformed(
            offset,
            MalformedReason::IndefiniteLength,
        ));
    }
    if count > size_of::<usize>() {
        return Err(DerError::malformed(offset, MalformedReason::LengthTooLarge));
    }

    let octets = buf
        .get(offset + 1..offset + 1 + count)
        .ok_or(DerError::malformed(offset, MalformedReason::TruncatedLength))?;
    let length = octets
        .iter()
        .fold(0usize, |length, octet| (length << 8) | usize::from(*octet));

    Ok((length, 1 + count))
}

/// Sequential reader over sibling nodes within `[pos, end)`
#[derive(Debug, Clone)]
pub struct DerReader<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> DerReader<'a> {
    #[inline]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            end: buf.len(),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    pub fn peek_tag(&self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        self.buf.get(self.pos).copied()
    }

    /// Reads the next node, which must end within this reader's bounds
    pub fn read(&mut self) -> Result<DerNode<'a>> {
        let buf: &'a [u8] = self.buf;
        let (node, next) = read_node(&buf[..self.end], self.pos)?;
        self.pos = next;
        Ok(node)
    }

    pub fn read_expected(&mut self, tag: u8) -> Result<DerNode<'a>> {
        match self.peek_tag() {
            Some(found) if found != tag => Err(DerError::UnexpectedTag {
                offset: self.pos,
                expected: tag,
                found,
            }),
            _ => self.read(),
        }
    }

    /// Skips the next node if it carries `tag`
    pub fn skip_if(&mut self, tag: u8) -> Result<bool> {
        if self.peek_tag() != Some(tag) {
            return Ok(false);
        }
        self.read().map(|_| true)
    }
}

impl<'a> Iterator for DerReader<'a> {
    type Item = Result<DerNode<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        let node = self.read();
        if node.is_err() {
            // fuse after the first error
            self.pos = self.end;
        }
        Some(node)
    }
}

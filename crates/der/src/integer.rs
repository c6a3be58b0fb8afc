use crate::{DerError, MalformedReason, Result, read_node, tag};

/// Extracts the content octets of the INTEGER at `offset`.
///
/// The value is returned as is, including a leading `0x00` sign guard if
/// the encoder emitted one. The second element is the offset right after
/// the INTEGER, so that a companion INTEGER can be read next.
pub fn extract_integer(buf: &[u8], offset: usize) -> Result<(&[u8], usize)> {
    match buf.get(offset) {
        Some(&tag::INTEGER) => {}
        Some(&found) => {
            return Err(DerError::UnexpectedTag {
                offset,
                expected: tag::INTEGER,
                found,
            });
        }
        None => {
            return Err(DerError::malformed(
                offset,
                MalformedReason::OffsetOutOfBounds,
            ));
        }
    }

    let (node, next) = read_node(buf, offset)?;
    if node.length() == 0 {
        // zero content octets must never turn into a zero coordinate
        return Err(DerError::malformed(offset, MalformedReason::EmptyInteger));
    }

    Ok((node.value(), next))
}

use thiserror::Error as ThisError;

pub type Result<T, E = DerError> = core::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum DerError {
    /// A length prefix or a value does not fit into the buffer
    #[error("malformed DER at offset {offset}: {reason}")]
    MalformedEncoding {
        offset: usize,
        reason: MalformedReason,
    },

    #[error("unexpected tag 0x{found:02x} at offset {offset}, expected 0x{expected:02x}")]
    UnexpectedTag {
        offset: usize,
        expected: u8,
        found: u8,
    },
}

impl DerError {
    #[inline]
    pub const fn malformed(offset: usize, reason: MalformedReason) -> Self {
        Self::MalformedEncoding { offset, reason }
    }

    #[inline]
    pub const fn offset(&self) -> usize {
        match self {
            Self::MalformedEncoding { offset, .. } | Self::UnexpectedTag { offset, .. } => *offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum MalformedReason {
    #[strum(to_string = "offset is past the end of the buffer")]
    OffsetOutOfBounds,
    #[strum(to_string = "length octet is missing")]
    MissingLength,
    #[strum(to_string = "indefinite length form is not allowed")]
    IndefiniteLength,
    #[strum(to_string = "length prefix does not fit into usize")]
    LengthTooLarge,
    #[strum(to_string = "long-form length prefix is truncated")]
    TruncatedLength,
    #[strum(to_string = "value runs past the end of the enclosing buffer")]
    ValueOverrun,
    #[strum(to_string = "INTEGER has no content octets")]
    EmptyInteger,
}

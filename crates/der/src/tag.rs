//! Single-octet ASN.1 tags used by ECDSA signatures and CMS `SignedData`

pub const INTEGER: u8 = 0x02;
pub const OCTET_STRING: u8 = 0x04;
pub const OBJECT_IDENTIFIER: u8 = 0x06;

/// Constructed `SEQUENCE` / `SEQUENCE OF`
pub const SEQUENCE: u8 = 0x30;
/// Constructed `SET` / `SET OF`
pub const SET: u8 = 0x31;

/// Constructed, context-specific `[0]`
pub const CONTEXT_0: u8 = 0xa0;
/// Constructed, context-specific `[1]`
pub const CONTEXT_1: u8 = 0xa1;

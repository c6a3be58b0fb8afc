//! DER (Distinguished Encoding Rules) reading utilities for ECDSA signatures
//! and the CMS envelopes some signing backends wrap them in.
//!
//! Everything here is a borrowed view over the input buffer: nodes keep
//! absolute offsets into the slice they were read from and never copy
//! signature material.
//!
//! An ECDSA signature has the following structure:
//! ```text
//! 0x30 [total-length] 0x02 [R-length] [R] 0x02 [S-length] [S]
//! ```

mod error;
mod integer;
mod node;
mod oid;
pub mod tag;

pub use self::{error::*, integer::*, node::*, oid::*};

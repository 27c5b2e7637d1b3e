//! Local implementation of the inbox's compact codec and struct hashing.
//!
//! The routines here operate on the raw bytes emitted by the inbox events and
//! accepted by its propose/prove entrypoints, and therefore must stay
//! byte-for-byte compatible with the on-chain encoder libraries. They let
//! consumers avoid an RPC round-trip to the helper contract for pure
//! encode/decode/hash operations.

pub mod events;
pub mod hashing;
pub mod inputs;
mod pack;
#[cfg(test)]
pub(crate) mod test_factory;

use thiserror::Error;

pub use events::{
    decode_proposed_event, decode_proved_event, encode_proposed_event, encode_proved_event,
};
pub use inputs::{
    decode_propose_input, decode_prove_input, encode_propose_input, encode_prove_input,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("insufficient bytes: need {needed} at offset {offset}")]
    InsufficientData { needed: usize, offset: usize },
    #[error("unexpected trailing bytes: {0}")]
    TrailingBytes(usize),
    #[error("array length {0} exceeds uint16 range")]
    LengthExceedsUint16(usize),
    #[error("array length {0} exceeds uint24 range")]
    LengthExceedsUint24(usize),
    #[error("invalid bond type {0}")]
    InvalidBondType(u8),
    #[error("proposal-transition length mismatch: {proposals} != {transitions}")]
    ProposalTransitionLengthMismatch {
        proposals: usize,
        transitions: usize,
    },
    #[error("transition metadata length mismatch: {metadata} != {transitions}")]
    MetadataLengthMismatch { metadata: usize, transitions: usize },
}

pub type Result<T> = core::result::Result<T, CodecError>;

/// Bond instruction kinds accepted by the inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BondType {
    None = 0,
    Provability = 1,
    Liveness = 2,
}

impl BondType {
    /// Highest valid on-chain bond type value.
    pub const MAX: u8 = BondType::Liveness as u8;
}

impl TryFrom<u8> for BondType {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(BondType::None),
            1 => Ok(BondType::Provability),
            2 => Ok(BondType::Liveness),
            other => Err(CodecError::InvalidBondType(other)),
        }
    }
}

impl From<BondType> for u8 {
    fn from(value: BondType) -> Self {
        value as u8
    }
}

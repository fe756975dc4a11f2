use alloy_primitives::{Address, B256 as Hash};
use thiserror::Error;

/// Why a message was rejected.
///
/// The taxonomy is flat and exhaustive: every validation clause and every
/// codec failure maps onto exactly one of these kinds, and the outer
/// validators surface the first one encountered. Rejection is final; nothing
/// is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbftError {
    #[error("malformed frame: {0}")]
    MalformedFrame(String),
    #[error("unknown message type code {0:#04x}")]
    UnknownMessageType(u8),
    #[error("message of {size} bytes exceeds the {limit} byte cap")]
    OversizedMessage { size: usize, limit: usize },
    #[error("signer recovery failed: {0}")]
    InvalidSignature(String),
    #[error("recovered signer {sender} is not in the validator set")]
    UnknownSigner { sender: Address },
    #[error("sender {actual} violates the proposer rule, proposer for the round is {expected}")]
    WrongProposer { expected: Address, actual: Address },
    #[error("sequence number {actual} does not match local chain height {expected}")]
    WrongHeight { expected: u64, actual: u64 },
    #[error("NewRound illegally targets round 0")]
    IllegalRoundZero,
    #[error("embedded payload mismatch: {0}")]
    EmbeddedMismatch(String),
    #[error("certificate carries {got} round change payloads, quorum requires {needed}")]
    InsufficientQuorum { needed: usize, got: usize },
    #[error("inconsistent round change certificate: {0}")]
    InconsistentCertificate(String),
    #[error("invalid prepared certificate: {0}")]
    PreparedCertificateInvalid(String),
    #[error("proposed block {proposed} does not match latest prepared block {latest}")]
    BlockMismatchWithLatestPrepared { latest: Hash, proposed: Hash },
}

impl From<alloy_rlp::Error> for IbftError {
    fn from(err: alloy_rlp::Error) -> Self {
        IbftError::MalformedFrame(err.to_string())
    }
}

impl From<k256::ecdsa::Error> for IbftError {
    fn from(err: k256::ecdsa::Error) -> Self {
        IbftError::InvalidSignature(err.to_string())
    }
}

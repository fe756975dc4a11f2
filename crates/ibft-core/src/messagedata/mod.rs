pub mod ibft_v2;

use alloy_primitives::Bytes;
use alloy_rlp::{Decodable, Encodable};

use crate::error::IbftError;
use crate::payload::{
    CommitPayload, IbftPayload, NewRoundPayload, PreparePayload, ProposalPayload,
    RoundChangePayload,
};
use crate::types::{ConsensusRoundIdentifier, SignedData};

/// Hard cap on a raw frame, enforced before any RLP work. Certificates nest
/// signed payloads two levels deep, so a hostile frame can otherwise buy a
/// lot of decoding for few bytes.
pub const MAX_MESSAGE_SIZE: usize = 1024 * 1024;

/// A decoded IBFT message: one signed payload, discriminated by the wire
/// type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IbftMessage {
    Proposal(SignedData<ProposalPayload>),
    Prepare(SignedData<PreparePayload>),
    Commit(SignedData<CommitPayload>),
    RoundChange(SignedData<RoundChangePayload>),
    NewRound(SignedData<NewRoundPayload>),
}

impl IbftMessage {
    pub fn message_type(&self) -> u8 {
        match self {
            IbftMessage::Proposal(m) => m.payload().message_type(),
            IbftMessage::Prepare(m) => m.payload().message_type(),
            IbftMessage::Commit(m) => m.payload().message_type(),
            IbftMessage::RoundChange(m) => m.payload().message_type(),
            IbftMessage::NewRound(m) => m.payload().message_type(),
        }
    }

    pub fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        match self {
            IbftMessage::Proposal(m) => m.payload().round_identifier(),
            IbftMessage::Prepare(m) => m.payload().round_identifier(),
            IbftMessage::Commit(m) => m.payload().round_identifier(),
            IbftMessage::RoundChange(m) => m.payload().round_identifier(),
            IbftMessage::NewRound(m) => m.payload().round_identifier(),
        }
    }
}

/// Encodes a message for the gossip layer: a one-byte type code followed by
/// the RLP of the signed payload.
pub fn encode_message(message: &IbftMessage) -> Bytes {
    let mut out = vec![message.message_type()];
    match message {
        IbftMessage::Proposal(m) => m.encode(&mut out),
        IbftMessage::Prepare(m) => m.encode(&mut out),
        IbftMessage::Commit(m) => m.encode(&mut out),
        IbftMessage::RoundChange(m) => m.encode(&mut out),
        IbftMessage::NewRound(m) => m.encode(&mut out),
    }
    Bytes::from(out)
}

/// Decodes a raw frame into a typed message.
///
/// Strictness matches the determinism contract: the frame must carry exactly
/// one canonically encoded payload, so `encode_message(decode_message(b)) == b`
/// for every frame this accepts.
pub fn decode_message(data: &[u8]) -> Result<IbftMessage, IbftError> {
    if data.len() > MAX_MESSAGE_SIZE {
        return Err(IbftError::OversizedMessage { size: data.len(), limit: MAX_MESSAGE_SIZE });
    }
    let (code, mut body) = match data.split_first() {
        Some((code, body)) => (*code, body),
        None => return Err(IbftError::MalformedFrame("empty frame".to_string())),
    };

    let message = match code {
        ibft_v2::PROPOSAL => IbftMessage::Proposal(SignedData::decode(&mut body)?),
        ibft_v2::PREPARE => IbftMessage::Prepare(SignedData::decode(&mut body)?),
        ibft_v2::COMMIT => IbftMessage::Commit(SignedData::decode(&mut body)?),
        ibft_v2::ROUND_CHANGE => IbftMessage::RoundChange(SignedData::decode(&mut body)?),
        ibft_v2::NEW_ROUND => IbftMessage::NewRound(SignedData::decode(&mut body)?),
        other => return Err(IbftError::UnknownMessageType(other)),
    };
    if !body.is_empty() {
        return Err(IbftError::MalformedFrame("trailing bytes after payload".to_string()));
    }
    Ok(message)
}

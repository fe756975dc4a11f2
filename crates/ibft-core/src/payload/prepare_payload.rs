use alloy_primitives::B256 as Hash;
use alloy_rlp::{RlpDecodable, RlpEncodable};

use crate::messagedata::ibft_v2;
use crate::payload::ibft_payload::IbftPayload;
use crate::types::ConsensusRoundIdentifier;

/// Payload of a Prepare message: a vote that a well-formed proposal hashing
/// to `digest` has been seen for the round.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct PreparePayload {
    pub round_identifier: ConsensusRoundIdentifier,
    pub digest: Hash,
}

impl PreparePayload {
    pub fn new(round_identifier: ConsensusRoundIdentifier, digest: Hash) -> Self {
        Self { round_identifier, digest }
    }
}

impl IbftPayload for PreparePayload {
    fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_identifier
    }

    fn message_type(&self) -> u8 {
        ibft_v2::PREPARE
    }
}

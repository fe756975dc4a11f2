use alloy_primitives::B256 as Hash;
use alloy_rlp::{RlpDecodable, RlpEncodable};

use crate::messagedata::ibft_v2;
use crate::payload::ibft_payload::IbftPayload;
use crate::types::{ConsensusRoundIdentifier, RlpSignature};

/// Payload of a Commit message: the final vote binding a block to the round.
///
/// The `committed_seal` is the sender's signature over the block's
/// committed-seal hash, collected into the finalized block by the importer.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct CommitPayload {
    pub round_identifier: ConsensusRoundIdentifier,
    pub digest: Hash,
    pub committed_seal: RlpSignature,
}

impl CommitPayload {
    pub fn new(
        round_identifier: ConsensusRoundIdentifier,
        digest: Hash,
        committed_seal: RlpSignature,
    ) -> Self {
        Self { round_identifier, digest, committed_seal }
    }
}

impl IbftPayload for CommitPayload {
    fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_identifier
    }

    fn message_type(&self) -> u8 {
        ibft_v2::COMMIT
    }
}

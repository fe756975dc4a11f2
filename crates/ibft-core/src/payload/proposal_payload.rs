use alloy_rlp::{RlpDecodable, RlpEncodable};

use crate::messagedata::ibft_v2;
use crate::payload::ibft_payload::IbftPayload;
use crate::types::{ConsensusRoundIdentifier, IbftBlock};

/// Payload of a Proposal message: the proposer's candidate block for a round.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct ProposalPayload {
    pub round_identifier: ConsensusRoundIdentifier,
    pub proposed_block: IbftBlock,
}

impl ProposalPayload {
    pub fn new(round_identifier: ConsensusRoundIdentifier, proposed_block: IbftBlock) -> Self {
        Self { round_identifier, proposed_block }
    }
}

impl IbftPayload for ProposalPayload {
    fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_identifier
    }

    fn message_type(&self) -> u8 {
        ibft_v2::PROPOSAL
    }
}

use alloy_rlp::{RlpDecodable, RlpEncodable};

use crate::messagedata::ibft_v2;
use crate::payload::ibft_payload::IbftPayload;
use crate::payload::{ProposalPayload, RoundChangeCertificate};
use crate::types::{ConsensusRoundIdentifier, SignedData};

/// Payload of a NewRound message, sent by the proposer of the round being
/// moved to: the target round, the round-change certificate justifying the
/// move, and the proposer's own proposal for that round.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct NewRoundPayload {
    pub round_change_identifier: ConsensusRoundIdentifier,
    pub round_change_certificate: RoundChangeCertificate,
    pub proposal: SignedData<ProposalPayload>,
}

impl NewRoundPayload {
    pub fn new(
        round_change_identifier: ConsensusRoundIdentifier,
        round_change_certificate: RoundChangeCertificate,
        proposal: SignedData<ProposalPayload>,
    ) -> Self {
        Self { round_change_identifier, round_change_certificate, proposal }
    }
}

impl IbftPayload for NewRoundPayload {
    fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_change_identifier
    }

    fn message_type(&self) -> u8 {
        ibft_v2::NEW_ROUND
    }
}

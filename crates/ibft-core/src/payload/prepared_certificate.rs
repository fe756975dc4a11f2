use alloy_rlp::{RlpDecodable, RlpEncodable};

use crate::payload::{PreparePayload, ProposalPayload};
use crate::types::SignedData;

/// Evidence that a block was prepared at some earlier round: the signed
/// proposal together with the prepare votes that endorsed it.
///
/// The proposer's own prepare is implicit in the proposal, so a valid
/// certificate needs `quorum - 1` explicit prepares.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct PreparedCertificate {
    pub proposal: SignedData<ProposalPayload>,
    pub prepares: Vec<SignedData<PreparePayload>>,
}

impl PreparedCertificate {
    pub fn new(
        proposal: SignedData<ProposalPayload>,
        prepares: Vec<SignedData<PreparePayload>>,
    ) -> Self {
        Self { proposal, prepares }
    }
}

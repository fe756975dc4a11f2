use std::sync::Arc;

use alloy_primitives::{Address, B256 as Hash};

use crate::error::IbftError;
use crate::payload::{
    CommitPayload, NewRoundPayload, PreparePayload, PreparedCertificate, ProposalPayload,
    RoundChangeCertificate, RoundChangePayload,
};
use crate::types::{
    public_key_to_address, ConsensusRoundIdentifier, IbftBlock, NodeKey, RlpSignature, SignedData,
};

/// Signs payloads on behalf of one validator. The round state machine uses
/// this to emit its own messages; tests use it to assemble peers' messages.
pub struct MessageFactory {
    node_key: Arc<NodeKey>,
    local_address: Address,
}

impl MessageFactory {
    pub fn new(node_key: Arc<NodeKey>) -> Self {
        let local_address = public_key_to_address(node_key.verifying_key());
        Self { node_key, local_address }
    }

    pub fn local_address(&self) -> Address {
        self.local_address
    }

    pub fn create_proposal(
        &self,
        round_identifier: ConsensusRoundIdentifier,
        proposed_block: IbftBlock,
    ) -> Result<SignedData<ProposalPayload>, IbftError> {
        SignedData::sign(ProposalPayload::new(round_identifier, proposed_block), &self.node_key)
    }

    pub fn create_prepare(
        &self,
        round_identifier: ConsensusRoundIdentifier,
        digest: Hash,
    ) -> Result<SignedData<PreparePayload>, IbftError> {
        SignedData::sign(PreparePayload::new(round_identifier, digest), &self.node_key)
    }

    pub fn create_commit(
        &self,
        round_identifier: ConsensusRoundIdentifier,
        digest: Hash,
        committed_seal: RlpSignature,
    ) -> Result<SignedData<CommitPayload>, IbftError> {
        SignedData::sign(
            CommitPayload::new(round_identifier, digest, committed_seal),
            &self.node_key,
        )
    }

    /// Signs the block's committed-seal hash, producing the seal carried in a
    /// Commit payload.
    pub fn create_commit_seal(&self, block: &IbftBlock) -> Result<RlpSignature, IbftError> {
        let seal_hash = block.committed_seal_hash();
        let (signature, recovery_id) =
            self.node_key.sign_prehash_recoverable(seal_hash.as_slice())?;
        Ok(RlpSignature::from_recoverable(&signature, recovery_id))
    }

    pub fn create_round_change(
        &self,
        round_change_identifier: ConsensusRoundIdentifier,
        prepared_certificate: Option<PreparedCertificate>,
    ) -> Result<SignedData<RoundChangePayload>, IbftError> {
        SignedData::sign(
            RoundChangePayload::new(round_change_identifier, prepared_certificate),
            &self.node_key,
        )
    }

    pub fn create_new_round(
        &self,
        round_change_identifier: ConsensusRoundIdentifier,
        round_change_certificate: RoundChangeCertificate,
        proposal: SignedData<ProposalPayload>,
    ) -> Result<SignedData<NewRoundPayload>, IbftError> {
        SignedData::sign(
            NewRoundPayload::new(round_change_identifier, round_change_certificate, proposal),
            &self.node_key,
        )
    }
}

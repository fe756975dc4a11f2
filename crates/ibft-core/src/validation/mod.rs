pub mod commit_validator;
pub mod new_round_message_validator;
pub mod prepare_validator;
pub mod proposal_validator;
pub mod round_change_message_validator;

#[cfg(test)]
mod tests;

pub use commit_validator::validate_commit;
pub use new_round_message_validator::validate_new_round;
pub use prepare_validator::validate_prepare;
pub use proposal_validator::validate_proposal;
pub use round_change_message_validator::validate_round_change;

use std::sync::Arc;

use alloy_primitives::Address;

use crate::blockcreation::{ProposerSelector, RoundRobinProposerSelector};
use crate::types::ConsensusRoundIdentifier;

/// Everything the validators read: the ordered validator set for the local
/// chain height, the quorum size, the height itself, and the proposer rule.
///
/// The context is immutable; the surrounding node builds a fresh one at each
/// height boundary and may share it freely across threads.
#[derive(Clone)]
pub struct ValidationContext {
    validators: Vec<Address>,
    quorum_size: usize,
    chain_height: u64,
    proposer_selector: Arc<dyn ProposerSelector>,
}

impl ValidationContext {
    /// Panics if `validators` is empty; see [`RoundRobinProposerSelector`].
    pub fn new(
        validators: Vec<Address>,
        quorum_size: usize,
        chain_height: u64,
        proposer_selector: Arc<dyn ProposerSelector>,
    ) -> Self {
        assert!(!validators.is_empty(), "validator set must not be empty");
        Self { validators, quorum_size, chain_height, proposer_selector }
    }

    /// Context with the canonical round-robin proposer rule over the same
    /// ordered set.
    pub fn with_round_robin(
        validators: Vec<Address>,
        quorum_size: usize,
        chain_height: u64,
    ) -> Self {
        let selector = Arc::new(RoundRobinProposerSelector::new(validators.clone()));
        Self::new(validators, quorum_size, chain_height, selector)
    }

    pub fn validators(&self) -> &[Address] {
        &self.validators
    }

    pub fn is_validator(&self, address: &Address) -> bool {
        self.validators.contains(address)
    }

    pub fn quorum_size(&self) -> usize {
        self.quorum_size
    }

    pub fn chain_height(&self) -> u64 {
        self.chain_height
    }

    pub fn proposer_for(&self, round: &ConsensusRoundIdentifier) -> Address {
        self.proposer_selector.select_proposer_for_round(round)
    }
}

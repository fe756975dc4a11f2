use alloy_primitives::Address;

use crate::types::ConsensusRoundIdentifier;

/// Selects the unique validator entitled to propose for a round. The
/// selection must be a pure function of the round identifier so that every
/// honest node agrees on it.
pub trait ProposerSelector: Send + Sync {
    fn select_proposer_for_round(&self, round: &ConsensusRoundIdentifier) -> Address;
}

/// The canonical IBFT 2.0 rule: index the ordered validator set by
/// `(sequence_number + round_number) mod n`. The set is fixed for a given
/// height; reconfiguration happens only at height boundaries.
#[derive(Debug, Clone)]
pub struct RoundRobinProposerSelector {
    validators: Vec<Address>,
}

impl RoundRobinProposerSelector {
    /// Panics if `validators` is empty; a chain with no validators cannot
    /// reach this layer.
    pub fn new(validators: Vec<Address>) -> Self {
        assert!(!validators.is_empty(), "validator set must not be empty");
        Self { validators }
    }
}

impl ProposerSelector for RoundRobinProposerSelector {
    fn select_proposer_for_round(&self, round: &ConsensusRoundIdentifier) -> Address {
        let index =
            (round.sequence_number + u64::from(round.round_number)) % self.validators.len() as u64;
        self.validators[index as usize]
    }
}

use crate::error::IbftError;
use crate::payload::ProposalPayload;
use crate::types::{ConsensusRoundIdentifier, SignedData};
use crate::validation::ValidationContext;

/// Validates a Proposal against the round it is expected to open.
///
/// Accepts iff the sender is the proposer for `expected_round`, the payload
/// targets exactly that round, and the block is built for its height. Deeper
/// block checks (state transition, parent linkage) belong to the importer.
pub fn validate_proposal(
    message: &SignedData<ProposalPayload>,
    expected_round: &ConsensusRoundIdentifier,
    context: &ValidationContext,
) -> Result<(), IbftError> {
    let author = message.author()?;
    let payload = message.payload();

    if !context.is_validator(&author) {
        log::info!("Invalid Proposal for round {expected_round}: sender {author} is not a validator");
        return Err(IbftError::UnknownSigner { sender: author });
    }

    let expected_proposer = context.proposer_for(expected_round);
    if author != expected_proposer {
        log::info!(
            "Invalid Proposal for round {expected_round}: sent by {author}, proposer is {expected_proposer}"
        );
        return Err(IbftError::WrongProposer { expected: expected_proposer, actual: author });
    }

    if payload.round_identifier != *expected_round {
        log::info!(
            "Invalid Proposal: targets round {}, expected {expected_round}",
            payload.round_identifier
        );
        return Err(IbftError::EmbeddedMismatch(format!(
            "proposal targets round {}, expected {expected_round}",
            payload.round_identifier
        )));
    }

    let block_number = payload.proposed_block.header.number;
    if block_number != expected_round.sequence_number {
        log::info!(
            "Invalid Proposal for round {expected_round}: block is numbered {block_number}"
        );
        return Err(IbftError::WrongHeight {
            expected: expected_round.sequence_number,
            actual: block_number,
        });
    }

    Ok(())
}

use alloy_primitives::B256 as Hash;

use crate::error::IbftError;
use crate::payload::PreparePayload;
use crate::types::{ConsensusRoundIdentifier, SignedData};
use crate::validation::ValidationContext;

/// Validates a Prepare vote against the round and proposal digest it must
/// endorse.
///
/// The round's proposer prepares implicitly by proposing; an explicit
/// Prepare from it is rejected.
pub fn validate_prepare(
    message: &SignedData<PreparePayload>,
    expected_round: &ConsensusRoundIdentifier,
    expected_digest: Hash,
    context: &ValidationContext,
) -> Result<(), IbftError> {
    let author = message.author()?;
    let payload = message.payload();

    if !context.is_validator(&author) {
        log::info!("Invalid Prepare for round {expected_round}: sender {author} is not a validator");
        return Err(IbftError::UnknownSigner { sender: author });
    }

    let proposer = context.proposer_for(expected_round);
    if author == proposer {
        log::info!(
            "Invalid Prepare for round {expected_round}: sent by the round's proposer {author}"
        );
        return Err(IbftError::WrongProposer { expected: proposer, actual: author });
    }

    if payload.round_identifier != *expected_round {
        log::info!(
            "Invalid Prepare: targets round {}, expected {expected_round}",
            payload.round_identifier
        );
        return Err(IbftError::EmbeddedMismatch(format!(
            "prepare targets round {}, expected {expected_round}",
            payload.round_identifier
        )));
    }

    if payload.digest != expected_digest {
        log::info!(
            "Invalid Prepare for round {expected_round} from {author}: digest {} does not match proposal {expected_digest}",
            payload.digest
        );
        return Err(IbftError::EmbeddedMismatch(format!(
            "prepare digest {} does not match proposed block {expected_digest}",
            payload.digest
        )));
    }

    Ok(())
}

use crate::error::IbftError;
use crate::payload::CommitPayload;
use crate::types::{ConsensusRoundIdentifier, IbftBlock, SignedData};
use crate::validation::ValidationContext;

/// Validates a Commit vote against the round and the block being committed.
///
/// Beyond the membership and digest checks, the committed seal must be the
/// sender's own signature over the block's committed-seal hash; that seal is
/// what the importer later embeds in the finalized block.
pub fn validate_commit(
    message: &SignedData<CommitPayload>,
    expected_round: &ConsensusRoundIdentifier,
    expected_block: &IbftBlock,
    context: &ValidationContext,
) -> Result<(), IbftError> {
    let author = message.author()?;
    let payload = message.payload();

    if !context.is_validator(&author) {
        log::info!("Invalid Commit for round {expected_round}: sender {author} is not a validator");
        return Err(IbftError::UnknownSigner { sender: author });
    }

    if payload.round_identifier != *expected_round {
        log::info!(
            "Invalid Commit: targets round {}, expected {expected_round}",
            payload.round_identifier
        );
        return Err(IbftError::EmbeddedMismatch(format!(
            "commit targets round {}, expected {expected_round}",
            payload.round_identifier
        )));
    }

    let expected_digest = expected_block.hash();
    if payload.digest != expected_digest {
        log::info!(
            "Invalid Commit for round {expected_round} from {author}: digest {} does not match proposal {expected_digest}",
            payload.digest
        );
        return Err(IbftError::EmbeddedMismatch(format!(
            "commit digest {} does not match proposed block {expected_digest}",
            payload.digest
        )));
    }

    let seal_hash = expected_block.committed_seal_hash();
    let seal_signer = payload
        .committed_seal
        .recover_address_from_prehash(&seal_hash)
        .map_err(|e| IbftError::InvalidSignature(format!("committed seal unrecoverable: {e}")))?;
    if seal_signer != author {
        log::info!(
            "Invalid Commit for round {expected_round}: seal signed by {seal_signer}, message by {author}"
        );
        return Err(IbftError::InvalidSignature(format!(
            "committed seal signed by {seal_signer}, expected {author}"
        )));
    }

    Ok(())
}

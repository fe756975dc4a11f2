use std::collections::HashSet;

use crate::error::IbftError;
use crate::helpers::prepare_message_count_for_quorum;
use crate::payload::{PreparedCertificate, RoundChangePayload};
use crate::types::{ConsensusRoundIdentifier, SignedData};
use crate::validation::{validate_prepare, validate_proposal, ValidationContext};

/// Validates a RoundChange message against the round it must be requesting.
///
/// A bare round change is accepted once the sender and target round check
/// out. One carrying a prepared certificate must additionally prove that the
/// certified block was prepared at an earlier round of the same height by a
/// quorum of distinct validators.
pub fn validate_round_change(
    message: &SignedData<RoundChangePayload>,
    target_round: &ConsensusRoundIdentifier,
    context: &ValidationContext,
) -> Result<(), IbftError> {
    let author = message.author()?;
    let payload = message.payload();

    if !context.is_validator(&author) {
        log::info!(
            "Invalid RoundChange for round {target_round}: sender {author} is not a validator"
        );
        return Err(IbftError::UnknownSigner { sender: author });
    }

    if payload.round_change_identifier != *target_round {
        log::info!(
            "Invalid RoundChange from {author}: targets round {}, expected {target_round}",
            payload.round_change_identifier
        );
        return Err(IbftError::InconsistentCertificate(format!(
            "round change targets round {}, expected {target_round}",
            payload.round_change_identifier
        )));
    }

    match &payload.prepared_certificate {
        None => Ok(()),
        Some(certificate) => validate_prepared_certificate(certificate, target_round, context),
    }
}

/// Checks that a prepared certificate is evidence of a real preparation:
/// the proposal validates under its own (strictly earlier, same-height)
/// round, and enough distinct non-proposer validators prepared its block.
fn validate_prepared_certificate(
    certificate: &PreparedCertificate,
    target_round: &ConsensusRoundIdentifier,
    context: &ValidationContext,
) -> Result<(), IbftError> {
    let proposal_payload = certificate.proposal.payload();
    let prepared_round = proposal_payload.round_identifier;

    if prepared_round.sequence_number != target_round.sequence_number {
        log::info!(
            "Invalid PreparedCertificate: prepared at height {}, round change targets height {}",
            prepared_round.sequence_number,
            target_round.sequence_number
        );
        return Err(IbftError::PreparedCertificateInvalid(format!(
            "prepared at height {}, target is height {}",
            prepared_round.sequence_number, target_round.sequence_number
        )));
    }

    if prepared_round.round_number >= target_round.round_number {
        log::info!(
            "Invalid PreparedCertificate: prepared round {} is not earlier than target {target_round}",
            prepared_round.round_number
        );
        return Err(IbftError::PreparedCertificateInvalid(format!(
            "prepared round {} is not earlier than target round {}",
            prepared_round.round_number, target_round.round_number
        )));
    }

    validate_proposal(&certificate.proposal, &prepared_round, context).map_err(|e| {
        log::info!("Invalid PreparedCertificate: embedded proposal rejected: {e}");
        IbftError::PreparedCertificateInvalid(format!("embedded proposal rejected: {e}"))
    })?;

    // The proposer endorses its block by proposing, so quorum - 1 prepares.
    let required_prepares = prepare_message_count_for_quorum(context.quorum_size());
    if certificate.prepares.len() < required_prepares {
        log::info!(
            "Invalid PreparedCertificate for round {prepared_round}: {} prepares, {required_prepares} required",
            certificate.prepares.len()
        );
        return Err(IbftError::PreparedCertificateInvalid(format!(
            "{} prepares, {required_prepares} required",
            certificate.prepares.len()
        )));
    }

    let digest = proposal_payload.proposed_block.hash();
    let mut prepare_authors = HashSet::new();
    for prepare in &certificate.prepares {
        // Excludes non-validators and the round's proposer.
        validate_prepare(prepare, &prepared_round, digest, context).map_err(|e| {
            log::info!("Invalid PreparedCertificate: embedded prepare rejected: {e}");
            IbftError::PreparedCertificateInvalid(format!("embedded prepare rejected: {e}"))
        })?;

        let prepare_author = prepare.author()?;
        if !prepare_authors.insert(prepare_author) {
            log::info!(
                "Invalid PreparedCertificate for round {prepared_round}: duplicate prepare sender {prepare_author}"
            );
            return Err(IbftError::PreparedCertificateInvalid(format!(
                "duplicate prepare sender {prepare_author}"
            )));
        }
    }

    Ok(())
}

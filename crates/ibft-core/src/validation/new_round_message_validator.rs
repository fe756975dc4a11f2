use std::collections::HashSet;

use alloy_primitives::Address;

use crate::error::IbftError;
use crate::payload::{NewRoundPayload, PreparedCertificate, RoundChangeCertificate};
use crate::types::{ConsensusRoundIdentifier, SignedData};
use crate::validation::{validate_round_change, ValidationContext};

/// Validates a NewRound message: the composite root of the subsystem.
///
/// Checks run in order and stop at the first failure, each clause mapping to
/// its own error kind: proposer origin, height binding, non-zero target
/// round, embedded-proposal origin and round, the round-change certificate
/// (quorum, consistent target, per-message validity, distinct senders), and
/// finally that the proposed block matches the latest prepared one when any
/// round change carries preparation evidence.
pub fn validate_new_round(
    message: &SignedData<NewRoundPayload>,
    context: &ValidationContext,
) -> Result<(), IbftError> {
    let author = message.author()?;
    let payload = message.payload();
    let target_round = payload.round_change_identifier;

    let expected_proposer = context.proposer_for(&target_round);
    if author != expected_proposer {
        log::info!(
            "Invalid NewRound for round {target_round}: sent by {author}, proposer is {expected_proposer}"
        );
        return Err(IbftError::WrongProposer { expected: expected_proposer, actual: author });
    }

    if target_round.sequence_number != context.chain_height() {
        log::info!(
            "Invalid NewRound: targets height {}, local chain height is {}",
            target_round.sequence_number,
            context.chain_height()
        );
        return Err(IbftError::WrongHeight {
            expected: context.chain_height(),
            actual: target_round.sequence_number,
        });
    }

    // Round 0 is reached by normal progression at a fresh height, never
    // announced via NewRound.
    if target_round.round_number == 0 {
        log::info!("Invalid NewRound from {author}: targets round 0");
        return Err(IbftError::IllegalRoundZero);
    }

    let proposal_author = payload.proposal.author()?;
    if proposal_author != author {
        log::info!(
            "Invalid NewRound for round {target_round}: embedded proposal signed by {proposal_author}, message by {author}"
        );
        return Err(IbftError::EmbeddedMismatch(format!(
            "embedded proposal signed by {proposal_author}, NewRound sent by {author}"
        )));
    }

    let proposal_round = payload.proposal.payload().round_identifier;
    if proposal_round != target_round {
        log::info!(
            "Invalid NewRound for round {target_round}: embedded proposal targets round {proposal_round}"
        );
        return Err(IbftError::EmbeddedMismatch(format!(
            "embedded proposal targets round {proposal_round}, NewRound announces {target_round}"
        )));
    }

    validate_round_change_certificate(
        &payload.round_change_certificate,
        &target_round,
        context,
    )?;

    validate_proposal_matches_latest_prepared_certificate(payload)
}

fn validate_round_change_certificate(
    certificate: &RoundChangeCertificate,
    expected_round: &ConsensusRoundIdentifier,
    context: &ValidationContext,
) -> Result<(), IbftError> {
    let payloads = &certificate.payloads;

    if payloads.len() < context.quorum_size() {
        log::info!(
            "Invalid NewRound for round {expected_round}: certificate carries {} round changes, quorum is {}",
            payloads.len(),
            context.quorum_size()
        );
        return Err(IbftError::InsufficientQuorum {
            needed: context.quorum_size(),
            got: payloads.len(),
        });
    }

    for round_change in payloads {
        let targeted = round_change.payload().round_change_identifier;
        if targeted != *expected_round {
            log::info!(
                "Invalid NewRound for round {expected_round}: embedded round change targets {targeted}"
            );
            return Err(IbftError::InconsistentCertificate(format!(
                "embedded round change targets round {targeted}, expected {expected_round}"
            )));
        }
    }

    for round_change in payloads {
        validate_round_change(round_change, expected_round, context)?;
    }

    let mut senders: HashSet<Address> = HashSet::new();
    for round_change in payloads {
        let sender = round_change.author()?;
        if !senders.insert(sender) {
            log::info!(
                "Invalid NewRound for round {expected_round}: duplicate round change sender {sender}"
            );
            return Err(IbftError::InconsistentCertificate(format!(
                "duplicate round change sender {sender}"
            )));
        }
    }

    Ok(())
}

fn validate_proposal_matches_latest_prepared_certificate(
    payload: &NewRoundPayload,
) -> Result<(), IbftError> {
    let latest = match find_latest_prepared_certificate(&payload.round_change_certificate)? {
        Some(certificate) => certificate,
        None => {
            log::debug!(
                "No round change carries a prepared certificate, any valid block may be proposed"
            );
            return Ok(());
        }
    };

    let latest_hash = latest.proposal.payload().proposed_block.hash();
    let proposed_hash = payload.proposal.payload().proposed_block.hash();
    if latest_hash != proposed_hash {
        log::info!(
            "Invalid NewRound for round {}: proposes block {proposed_hash}, latest prepared block is {latest_hash}",
            payload.round_change_identifier
        );
        return Err(IbftError::BlockMismatchWithLatestPrepared {
            latest: latest_hash,
            proposed: proposed_hash,
        });
    }

    Ok(())
}

/// The prepared certificate with the highest prepared round among the round
/// changes, if any carries one. Ties on the round are broken by the carrying
/// round-change sender's address, ascending, so every node picks the same
/// winner.
fn find_latest_prepared_certificate(
    certificate: &RoundChangeCertificate,
) -> Result<Option<&PreparedCertificate>, IbftError> {
    let mut latest: Option<(u32, Address, &PreparedCertificate)> = None;

    for round_change in &certificate.payloads {
        let prepared = match round_change.payload().prepared_certificate.as_ref() {
            Some(prepared) => prepared,
            None => continue,
        };
        let prepared_round = prepared.proposal.payload().round_identifier.round_number;
        let sender = round_change.author()?;

        let replace = match &latest {
            None => true,
            Some((best_round, best_sender, _)) => {
                prepared_round > *best_round
                    || (prepared_round == *best_round && sender < *best_sender)
            }
        };
        if replace {
            latest = Some((prepared_round, sender, prepared));
        }
    }

    Ok(latest.map(|(_, _, certificate)| certificate))
}

//! End-to-end coverage for NewRound validation: four validators, quorum of
//! three, local chain height ten, round-robin proposers.

use super::common_helpers::*;
use crate::error::IbftError;
use crate::messagedata::{decode_message, encode_message, IbftMessage};
use crate::types::ConsensusRoundIdentifier;
use crate::validation::validate_new_round;

const TARGET: ConsensusRoundIdentifier = ConsensusRoundIdentifier { sequence_number: 10, round_number: 2 };

#[test]
fn accepts_a_new_round_with_no_prepared_certificates() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let block = test_block(10, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, TARGET),
        round_change(&setup, 1, TARGET),
        round_change(&setup, 2, TARGET),
    ];
    let message = new_round_message(&setup, proposer, TARGET, &block, round_changes);

    assert!(validate_new_round(&message, &setup.context).is_ok());
}

#[test]
fn accepts_a_new_round_whose_block_matches_the_latest_prepared() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let block = test_block(10, 0xAA);

    let prepared_round = ConsensusRoundIdentifier::new(10, 1);
    let prepares = setup.non_proposer_indices(&prepared_round, 2);
    let certificate = prepared_certificate(&setup, prepared_round, &block, &prepares);

    let round_changes = vec![
        round_change(&setup, 0, TARGET),
        round_change_with_certificate(&setup, 1, TARGET, certificate),
        round_change(&setup, 2, TARGET),
    ];
    let message = new_round_message(&setup, proposer, TARGET, &block, round_changes);

    assert!(validate_new_round(&message, &setup.context).is_ok());
}

#[test]
fn rejects_a_new_round_proposing_a_block_other_than_the_latest_prepared() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let prepared_block = test_block(10, 0xAA);
    let other_block = test_block(10, 0xBB);

    let prepared_round = ConsensusRoundIdentifier::new(10, 1);
    let prepares = setup.non_proposer_indices(&prepared_round, 2);
    let certificate = prepared_certificate(&setup, prepared_round, &prepared_block, &prepares);

    let round_changes = vec![
        round_change(&setup, 0, TARGET),
        round_change_with_certificate(&setup, 1, TARGET, certificate),
        round_change(&setup, 2, TARGET),
    ];
    let message = new_round_message(&setup, proposer, TARGET, &other_block, round_changes);

    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(
        result,
        Err(IbftError::BlockMismatchWithLatestPrepared { latest, proposed })
            if latest == prepared_block.hash() && proposed == other_block.hash()
    ));
}

#[test]
fn rejects_a_new_round_from_anyone_but_the_rounds_proposer() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let imposter = (proposer + 1) % 4;
    let block = test_block(10, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, TARGET),
        round_change(&setup, 1, TARGET),
        round_change(&setup, 2, TARGET),
    ];
    let message = new_round_message(&setup, imposter, TARGET, &block, round_changes);

    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(
        result,
        Err(IbftError::WrongProposer { expected, actual })
            if expected == setup.addresses[proposer] && actual == setup.addresses[imposter]
    ));
}

#[test]
fn rejects_a_certificate_below_quorum() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let block = test_block(10, 0xAA);

    let round_changes = vec![round_change(&setup, 0, TARGET), round_change(&setup, 1, TARGET)];
    let message = new_round_message(&setup, proposer, TARGET, &block, round_changes);

    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(result, Err(IbftError::InsufficientQuorum { needed: 3, got: 2 })));
}

#[test]
fn accepts_a_certificate_at_exactly_quorum_for_round_one() {
    let setup = four_validator_setup();
    let target = ConsensusRoundIdentifier::new(10, 1);
    let proposer = setup.proposer_index(&target);
    let block = test_block(10, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, target),
        round_change(&setup, 1, target),
        round_change(&setup, 2, target),
    ];
    let message = new_round_message(&setup, proposer, target, &block, round_changes);

    assert!(validate_new_round(&message, &setup.context).is_ok());
}

#[test]
fn rejects_a_certificate_containing_a_future_round_preparation() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let block = test_block(10, 0xAA);

    // One sound certificate at round 1 and one claiming preparation at round
    // 3, which cannot precede a move to round 2.
    let early_round = ConsensusRoundIdentifier::new(10, 1);
    let early_cert =
        prepared_certificate(&setup, early_round, &block, &setup.non_proposer_indices(&early_round, 2));
    let future_round = ConsensusRoundIdentifier::new(10, 3);
    let future_cert =
        prepared_certificate(&setup, future_round, &block, &setup.non_proposer_indices(&future_round, 2));

    let round_changes = vec![
        round_change_with_certificate(&setup, 0, TARGET, early_cert),
        round_change_with_certificate(&setup, 1, TARGET, future_cert),
        round_change(&setup, 2, TARGET),
    ];
    let message = new_round_message(&setup, proposer, TARGET, &block, round_changes);

    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(result, Err(IbftError::PreparedCertificateInvalid(_))));
}

#[test]
fn rejects_a_new_round_for_another_height() {
    let setup = four_validator_setup();
    let target = ConsensusRoundIdentifier::new(11, 1);
    let proposer = setup.proposer_index(&target);
    let block = test_block(11, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, target),
        round_change(&setup, 1, target),
        round_change(&setup, 2, target),
    ];
    let message = new_round_message(&setup, proposer, target, &block, round_changes);

    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(result, Err(IbftError::WrongHeight { expected: 10, actual: 11 })));
}

#[test]
fn rejects_a_new_round_targeting_round_zero() {
    let setup = four_validator_setup();
    let target = ConsensusRoundIdentifier::new(10, 0);
    let proposer = setup.proposer_index(&target);
    let block = test_block(10, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, target),
        round_change(&setup, 1, target),
        round_change(&setup, 2, target),
    ];
    let message = new_round_message(&setup, proposer, target, &block, round_changes);

    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(result, Err(IbftError::IllegalRoundZero)));
}

#[test]
fn rejects_an_embedded_proposal_signed_by_someone_else() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let other = (proposer + 1) % 4;
    let block = test_block(10, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, TARGET),
        round_change(&setup, 1, TARGET),
        round_change(&setup, 2, TARGET),
    ];
    let foreign_proposal = setup.factory(other).create_proposal(TARGET, block).unwrap();
    let message = setup
        .factory(proposer)
        .create_new_round(
            TARGET,
            crate::payload::RoundChangeCertificate::new(round_changes),
            foreign_proposal,
        )
        .unwrap();

    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(result, Err(IbftError::EmbeddedMismatch(_))));
}

#[test]
fn rejects_an_embedded_proposal_for_another_round() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let block = test_block(10, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, TARGET),
        round_change(&setup, 1, TARGET),
        round_change(&setup, 2, TARGET),
    ];
    // Rounds 2 and 6 share a proposer, so only the round field disagrees.
    let stale_proposal = setup
        .factory(proposer)
        .create_proposal(ConsensusRoundIdentifier::new(10, 6), block)
        .unwrap();
    let message = setup
        .factory(proposer)
        .create_new_round(
            TARGET,
            crate::payload::RoundChangeCertificate::new(round_changes),
            stale_proposal,
        )
        .unwrap();

    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(result, Err(IbftError::EmbeddedMismatch(_))));
}

#[test]
fn rejects_a_certificate_whose_round_changes_disagree_on_the_target() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let block = test_block(10, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, TARGET),
        round_change(&setup, 1, TARGET),
        round_change(&setup, 2, ConsensusRoundIdentifier::new(10, 3)),
    ];
    let message = new_round_message(&setup, proposer, TARGET, &block, round_changes);

    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(result, Err(IbftError::InconsistentCertificate(_))));
}

#[test]
fn rejects_a_certificate_with_a_duplicated_sender() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let block = test_block(10, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, TARGET),
        round_change(&setup, 1, TARGET),
        round_change(&setup, 1, TARGET),
        round_change(&setup, 2, TARGET),
    ];
    let message = new_round_message(&setup, proposer, TARGET, &block, round_changes);

    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(result, Err(IbftError::InconsistentCertificate(_))));
}

#[test]
fn equal_prepared_rounds_resolve_by_ascending_carrier_address() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let block_x = test_block(10, 0xAA);
    let block_y = test_block(10, 0xBB);

    // An equivocating proposer prepared two blocks at round 1. Both
    // certificates are internally valid; the carrier with the smaller
    // address decides which block the NewRound must re-propose.
    let prepared_round = ConsensusRoundIdentifier::new(10, 1);
    let prepares = setup.non_proposer_indices(&prepared_round, 2);
    let cert_x = prepared_certificate(&setup, prepared_round, &block_x, &prepares);
    let cert_y = prepared_certificate(&setup, prepared_round, &block_y, &prepares);

    let (low, high) =
        if setup.addresses[1] < setup.addresses[2] { (1, 2) } else { (2, 1) };

    let winner_first = vec![
        round_change(&setup, 0, TARGET),
        round_change_with_certificate(&setup, low, TARGET, cert_x.clone()),
        round_change_with_certificate(&setup, high, TARGET, cert_y.clone()),
    ];
    let message = new_round_message(&setup, proposer, TARGET, &block_x, winner_first);
    assert!(validate_new_round(&message, &setup.context).is_ok());

    // Swap the carriers: the smaller address now vouches for the other
    // block, so proposing `block_x` no longer matches.
    let winner_swapped = vec![
        round_change(&setup, 0, TARGET),
        round_change_with_certificate(&setup, low, TARGET, cert_y),
        round_change_with_certificate(&setup, high, TARGET, cert_x),
    ];
    let message = new_round_message(&setup, proposer, TARGET, &block_x, winner_swapped);
    let result = validate_new_round(&message, &setup.context);
    assert!(matches!(result, Err(IbftError::BlockMismatchWithLatestPrepared { .. })));
}

#[test]
fn a_higher_prepared_round_wins_regardless_of_carrier_order() {
    let setup = four_validator_setup();
    let target = ConsensusRoundIdentifier::new(10, 3);
    let proposer = setup.proposer_index(&target);
    let early_block = test_block(10, 0xAA);
    let late_block = test_block(10, 0xBB);

    let early_round = ConsensusRoundIdentifier::new(10, 1);
    let early_cert = prepared_certificate(
        &setup,
        early_round,
        &early_block,
        &setup.non_proposer_indices(&early_round, 2),
    );
    let late_round = ConsensusRoundIdentifier::new(10, 2);
    let late_cert = prepared_certificate(
        &setup,
        late_round,
        &late_block,
        &setup.non_proposer_indices(&late_round, 2),
    );

    let round_changes = vec![
        round_change_with_certificate(&setup, 0, target, early_cert),
        round_change_with_certificate(&setup, 1, target, late_cert),
        round_change(&setup, 2, target),
    ];
    let message = new_round_message(&setup, proposer, target, &late_block, round_changes);

    assert!(validate_new_round(&message, &setup.context).is_ok());
}

#[test]
fn a_decoded_wire_frame_validates_end_to_end() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let block = test_block(10, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, TARGET),
        round_change(&setup, 1, TARGET),
        round_change(&setup, 2, TARGET),
    ];
    let message = new_round_message(&setup, proposer, TARGET, &block, round_changes);

    let frame = encode_message(&IbftMessage::NewRound(message.clone()));
    let decoded = match decode_message(&frame).unwrap() {
        IbftMessage::NewRound(decoded) => decoded,
        other => panic!("decoded the wrong message type: {other:?}"),
    };
    assert_eq!(decoded, message);
    assert!(validate_new_round(&decoded, &setup.context).is_ok());
}

#[test]
fn validation_is_idempotent() {
    let setup = four_validator_setup();
    let proposer = setup.proposer_index(&TARGET);
    let block = test_block(10, 0xAA);

    let round_changes = vec![
        round_change(&setup, 0, TARGET),
        round_change(&setup, 1, TARGET),
        round_change(&setup, 2, TARGET),
    ];
    let message = new_round_message(&setup, proposer, TARGET, &block, round_changes);

    assert_eq!(
        validate_new_round(&message, &setup.context),
        validate_new_round(&message, &setup.context)
    );
}

//! Quorum arithmetic shared by the validators and their callers.

/// Number of distinct validator messages required for quorum:
/// `ceil(2n / 3)` for `n` validators.
pub fn calculate_required_validator_quorum(validator_count: usize) -> usize {
    (2 * validator_count + 2) / 3
}

/// Prepares required alongside a proposal for a prepared certificate. The
/// proposer endorses its own block by proposing, so one fewer explicit
/// prepare is needed.
pub fn prepare_message_count_for_quorum(quorum: usize) -> usize {
    quorum.saturating_sub(1)
}

use alloy_rlp::{RlpDecodable, RlpEncodable};

/// Identifies one consensus round at one block height.
///
/// Ordering is lexicographic over `(sequence_number, round_number)`, which the
/// derive produces from the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RlpEncodable, RlpDecodable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsensusRoundIdentifier {
    /// The target block height.
    pub sequence_number: u64,
    /// The IBFT round within that height.
    pub round_number: u32,
}

impl ConsensusRoundIdentifier {
    pub fn new(sequence_number: u64, round_number: u32) -> Self {
        Self { sequence_number, round_number }
    }
}

impl std::fmt::Display for ConsensusRoundIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.sequence_number, self.round_number)
    }
}

use alloy_rlp::{Decodable, Encodable};

use crate::types::ConsensusRoundIdentifier;

/// Common surface of every IBFT message payload: the round it binds to and
/// the wire type code it travels under.
pub trait IbftPayload: Encodable + Decodable + Send + Sync + std::fmt::Debug {
    /// The consensus round this payload pertains to. For `RoundChange` and
    /// `NewRound` this is the round being moved *to*.
    fn round_identifier(&self) -> &ConsensusRoundIdentifier;

    /// The wire type code, one of the `messagedata::ibft_v2` constants.
    fn message_type(&self) -> u8;
}

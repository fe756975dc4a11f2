//! Message validation core for an IBFT 2.0 consensus engine.
//!
//! Given a fixed, ordered validator set and a stream of signed protocol
//! messages, this crate decides whether each message is admissible under the
//! IBFT 2.0 rules. The composite root is [`validate_new_round`], which checks
//! a `NewRound` announcement together with its round-change certificate and
//! embedded proposal. Everything here is pure and stateless: the surrounding
//! node supplies an immutable [`ValidationContext`] per chain height and may
//! call the validators from any number of threads.
//!
//! Block import, transaction execution, the round timer, and the gossip
//! transport are external collaborators; the core only inspects headers,
//! hashes, and signatures.

pub mod blockcreation;
pub mod error;
pub mod helpers;
pub mod messagedata;
pub mod payload;
pub mod types;
pub mod validation;

pub use error::IbftError;
pub use messagedata::{decode_message, encode_message, IbftMessage, MAX_MESSAGE_SIZE};
pub use types::{ConsensusRoundIdentifier, IbftBlock, IbftBlockHeader, NodeKey, SignedData};
pub use validation::{
    validate_commit, validate_new_round, validate_prepare, validate_proposal,
    validate_round_change, ValidationContext,
};

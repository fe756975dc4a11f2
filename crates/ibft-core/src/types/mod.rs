pub mod block;
pub mod consensus_round_identifier;
pub mod header;
pub mod rlp_signature;
pub mod signed_data;

/// Key material used to sign payloads. Validators are identified by the
/// Ethereum-style address derived from the corresponding public key.
pub type NodeKey = k256::ecdsa::SigningKey;

pub use block::{IbftBlock, Transaction};
pub use consensus_round_identifier::ConsensusRoundIdentifier;
pub use header::IbftBlockHeader;
pub use rlp_signature::RlpSignature;
pub use signed_data::{public_key_to_address, SignedData};

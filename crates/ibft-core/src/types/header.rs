use alloy_primitives::{keccak256, Address, Bytes, B256 as Hash};
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// The block header fields the consensus core reads and hashes.
///
/// The block identity is `keccak256` over the header RLP. Validation itself
/// only consumes `number` and the derived hash; the remaining fields exist so
/// that distinct blocks produce distinct hashes and survive re-encoding
/// bit-exactly.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct IbftBlockHeader {
    pub parent_hash: Hash,
    pub beneficiary: Address,
    pub state_root: Hash,
    pub transactions_root: Hash,
    pub number: u64,
    pub timestamp: u64,
    pub extra_data: Bytes,
}

impl IbftBlockHeader {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        parent_hash: Hash,
        beneficiary: Address,
        state_root: Hash,
        transactions_root: Hash,
        number: u64,
        timestamp: u64,
        extra_data: Bytes,
    ) -> Self {
        Self { parent_hash, beneficiary, state_root, transactions_root, number, timestamp, extra_data }
    }

    pub fn hash(&self) -> Hash {
        let encoded = alloy_rlp::encode(self);
        keccak256(&encoded)
    }
}

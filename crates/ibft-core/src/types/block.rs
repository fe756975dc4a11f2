use alloy_primitives::{keccak256, Bytes, B256 as Hash};
use alloy_rlp::{RlpDecodable, RlpEncodable};

use crate::messagedata::ibft_v2;
use crate::types::IbftBlockHeader;

/// A transaction carried opaquely through the consensus layer. The core never
/// inspects transaction contents; execution happens in the importer.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Transaction {
    pub rlp: Bytes,
}

/// The candidate block a proposal carries.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct IbftBlock {
    pub header: IbftBlockHeader,
    pub transactions: Vec<Transaction>,
}

impl IbftBlock {
    pub fn new(header: IbftBlockHeader, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions }
    }

    /// The block identity: the header hash.
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// The digest a committed seal signs: `keccak256(block_hash ‖ COMMIT)`.
    ///
    /// Binding the commit message code into the digest keeps a commit seal
    /// from doubling as any other signature over the block hash.
    pub fn committed_seal_hash(&self) -> Hash {
        let mut preimage = [0u8; 33];
        preimage[..32].copy_from_slice(self.hash().as_slice());
        preimage[32] = ibft_v2::COMMIT;
        keccak256(preimage)
    }
}

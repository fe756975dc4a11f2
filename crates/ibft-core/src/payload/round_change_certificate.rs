use alloy_rlp::{RlpDecodable, RlpEncodable};

use crate::payload::RoundChangePayload;
use crate::types::SignedData;

/// The collected RoundChange messages justifying a move to a new round. A
/// NewRound message must carry at least a quorum of them, each from a
/// distinct validator and each targeting the announced round.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct RoundChangeCertificate {
    pub payloads: Vec<SignedData<RoundChangePayload>>,
}

impl RoundChangeCertificate {
    pub fn new(payloads: Vec<SignedData<RoundChangePayload>>) -> Self {
        Self { payloads }
    }
}

use alloy_rlp::{BufMut, Decodable, Encodable, Error as RlpError, Header};

use crate::messagedata::ibft_v2;
use crate::payload::ibft_payload::IbftPayload;
use crate::payload::PreparedCertificate;
use crate::types::ConsensusRoundIdentifier;

/// Payload of a RoundChange message: a request to abandon the current round
/// and adopt `round_change_identifier`, optionally justified by evidence of
/// an earlier preparation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundChangePayload {
    pub round_change_identifier: ConsensusRoundIdentifier,
    pub prepared_certificate: Option<PreparedCertificate>,
}

impl RoundChangePayload {
    pub fn new(
        round_change_identifier: ConsensusRoundIdentifier,
        prepared_certificate: Option<PreparedCertificate>,
    ) -> Self {
        Self { round_change_identifier, prepared_certificate }
    }
}

impl IbftPayload for RoundChangePayload {
    fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_change_identifier
    }

    fn message_type(&self) -> u8 {
        ibft_v2::ROUND_CHANGE
    }
}

// RLP shape: [round_change_identifier] or
// [round_change_identifier, prepared_certificate]. The certificate is a
// trailing optional list element, never a sentinel value.
impl Encodable for RoundChangePayload {
    fn encode(&self, out: &mut dyn BufMut) {
        let payload_length = self.round_change_identifier.length()
            + self.prepared_certificate.as_ref().map_or(0, Encodable::length);
        Header { list: true, payload_length }.encode(out);
        self.round_change_identifier.encode(out);
        if let Some(certificate) = &self.prepared_certificate {
            certificate.encode(out);
        }
    }

    fn length(&self) -> usize {
        let payload_length = self.round_change_identifier.length()
            + self.prepared_certificate.as_ref().map_or(0, Encodable::length);
        Header { list: true, payload_length }.length() + payload_length
    }
}

impl Decodable for RoundChangePayload {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if !header.list {
            return Err(RlpError::Custom("RoundChangePayload must be an RLP list"));
        }
        let before = buf.len();
        let round_change_identifier = ConsensusRoundIdentifier::decode(buf)?;
        let prepared_certificate = if before - buf.len() < header.payload_length {
            Some(PreparedCertificate::decode(buf)?)
        } else {
            None
        };
        if before - buf.len() != header.payload_length {
            return Err(RlpError::UnexpectedLength);
        }
        Ok(Self { round_change_identifier, prepared_certificate })
    }
}

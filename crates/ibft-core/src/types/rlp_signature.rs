use alloy_primitives::{Signature, B256};
use alloy_rlp::{BufMut, Decodable, Encodable, Error as RlpError, Header};
use k256::ecdsa::{RecoveryId as K256RecoveryId, Signature as K256Signature};

/// Length of a signature on the wire: `r (32) ‖ s (32) ‖ v (1)`.
pub const SIGNATURE_LENGTH: usize = 65;

/// A recoverable ECDSA signature with a fixed 65-byte wire form.
///
/// On the wire a signature is a single RLP string of [`SIGNATURE_LENGTH`]
/// bytes. The trailing recovery byte is written as `0` or `1`; the legacy
/// `27`/`28` convention is accepted on decode and normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RlpSignature(pub Signature);

impl RlpSignature {
    pub fn new(signature: Signature) -> Self {
        Self(signature)
    }

    pub fn into_inner(self) -> Signature {
        self.0
    }

    /// The `r ‖ s ‖ v` byte representation used on the wire.
    pub fn as_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..32].copy_from_slice(&self.0.r().to_be_bytes::<32>());
        bytes[32..64].copy_from_slice(&self.0.s().to_be_bytes::<32>());
        bytes[64] = self.0.v() as u8;
        bytes
    }

    /// Converts a k256 recoverable signature into the wire representation.
    pub(crate) fn from_recoverable(signature: &K256Signature, recovery_id: K256RecoveryId) -> Self {
        let r = B256::from_slice(signature.r().to_bytes().as_slice());
        let s = B256::from_slice(signature.s().to_bytes().as_slice());
        Self(Signature::from_scalars_and_parity(r, s, recovery_id.is_y_odd()))
    }
}

impl std::ops::Deref for RlpSignature {
    type Target = Signature;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Signature> for RlpSignature {
    fn from(signature: Signature) -> Self {
        Self(signature)
    }
}

impl Encodable for RlpSignature {
    fn encode(&self, out: &mut dyn BufMut) {
        Header { list: false, payload_length: SIGNATURE_LENGTH }.encode(out);
        out.put_slice(&self.as_bytes());
    }

    fn length(&self) -> usize {
        Header { list: false, payload_length: SIGNATURE_LENGTH }.length() + SIGNATURE_LENGTH
    }
}

impl Decodable for RlpSignature {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if header.list {
            return Err(RlpError::Custom("signature must be an RLP string"));
        }
        if header.payload_length != SIGNATURE_LENGTH {
            return Err(RlpError::Custom("signature must be 65 bytes"));
        }
        if buf.len() < SIGNATURE_LENGTH {
            return Err(RlpError::InputTooShort);
        }
        let (bytes, rest) = buf.split_at(SIGNATURE_LENGTH);
        *buf = rest;

        let parity = match bytes[64] {
            0 | 27 => false,
            1 | 28 => true,
            _ => return Err(RlpError::Custom("invalid recovery byte in signature")),
        };
        let r = B256::from_slice(&bytes[..32]);
        let s = B256::from_slice(&bytes[32..64]);
        Ok(Self(Signature::from_scalars_and_parity(r, s, parity)))
    }
}

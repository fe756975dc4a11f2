use alloy_primitives::{keccak256, Address, B256 as Hash};
use alloy_rlp::{BufMut, Decodable, Encodable, Error as RlpError, Header};
use k256::ecdsa::{
    RecoveryId as K256RecoveryId, Signature as K256Signature, VerifyingKey as K256VerifyingKey,
};

use crate::error::IbftError;
use crate::types::{NodeKey, RlpSignature};

/// Derives the Ethereum-style address for a public key: the last 20 bytes of
/// the keccak256 hash of the uncompressed point, prefix byte excluded.
pub fn public_key_to_address(verifying_key: &K256VerifyingKey) -> Address {
    let encoded_point = verifying_key.to_encoded_point(false);
    let hashed = keccak256(&encoded_point.as_bytes()[1..]);
    Address::from_slice(&hashed[12..])
}

/// A payload together with the signature its author produced over the
/// payload's canonical RLP encoding.
///
/// The author is never stored; [`SignedData::author`] recovers it on demand,
/// and recovery is deterministic for a fixed `(payload, signature)` pair.
/// Equality and hashing cover exactly that pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedData<T: Encodable + Decodable + Clone + std::fmt::Debug + Send + Sync> {
    payload: T,
    signature: RlpSignature,
}

impl<T: Encodable + Decodable + Clone + std::fmt::Debug + Send + Sync> SignedData<T> {
    pub fn new(payload: T, signature: RlpSignature) -> Self {
        Self { payload, signature }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn signature(&self) -> &RlpSignature {
        &self.signature
    }

    fn payload_hash(payload: &T) -> Hash {
        let mut payload_rlp = Vec::new();
        payload.encode(&mut payload_rlp);
        keccak256(&payload_rlp)
    }

    /// Signs the payload's canonical encoding with the given key.
    pub fn sign(payload: T, node_key: &NodeKey) -> Result<Self, IbftError> {
        let payload_hash = Self::payload_hash(&payload);
        let (signature, recovery_id) = node_key.sign_prehash_recoverable(payload_hash.as_slice())?;
        Ok(Self { payload, signature: RlpSignature::from_recoverable(&signature, recovery_id) })
    }

    /// Recovers the address that signed this payload.
    pub fn author(&self) -> Result<Address, IbftError> {
        let payload_hash = Self::payload_hash(&self.payload);

        let recovery_id = K256RecoveryId::try_from(self.signature.v() as u8)
            .map_err(|e| IbftError::InvalidSignature(format!("bad recovery id: {e}")))?;
        let signature = K256Signature::from_scalars(
            self.signature.r().to_be_bytes::<32>(),
            self.signature.s().to_be_bytes::<32>(),
        )
        .map_err(|e| IbftError::InvalidSignature(format!("bad scalars: {e}")))?;

        let verifying_key =
            K256VerifyingKey::recover_from_prehash(payload_hash.as_slice(), &signature, recovery_id)
                .map_err(|e| IbftError::InvalidSignature(e.to_string()))?;

        Ok(public_key_to_address(&verifying_key))
    }
}

// RLP shape: the two-field list [payload, signature].
impl<T: Encodable + Decodable + Clone + std::fmt::Debug + Send + Sync> Encodable for SignedData<T> {
    fn encode(&self, out: &mut dyn BufMut) {
        let payload_length = self.payload.length() + self.signature.length();
        Header { list: true, payload_length }.encode(out);
        self.payload.encode(out);
        self.signature.encode(out);
    }

    fn length(&self) -> usize {
        let payload_length = self.payload.length() + self.signature.length();
        Header { list: true, payload_length }.length() + payload_length
    }
}

impl<T: Encodable + Decodable + Clone + std::fmt::Debug + Send + Sync> Decodable for SignedData<T> {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if !header.list {
            return Err(RlpError::Custom("SignedData must be an RLP list"));
        }
        let before = buf.len();
        let payload = T::decode(buf)?;
        let signature = RlpSignature::decode(buf)?;
        if before - buf.len() != header.payload_length {
            return Err(RlpError::UnexpectedLength);
        }
        Ok(Self { payload, signature })
    }
}

impl<T: Encodable + Decodable + Clone + std::fmt::Debug + Send + Sync> std::hash::Hash
    for SignedData<T>
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let mut payload_rlp = Vec::new();
        self.payload.encode(&mut payload_rlp);
        payload_rlp.hash(state);
        self.signature.as_bytes().hash(state);
    }
}

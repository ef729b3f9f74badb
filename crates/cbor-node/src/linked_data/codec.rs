use serde::de::DeserializeOwned;
use serde::Serialize;

use super::prefix::LD_DAG_CBOR_CODEC;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to encode block: {0}")]
    Encode(String),
    #[error("failed to decode block: {0}")]
    Decode(String),
}

/// A block codec: a multicodec code plus a way to move
///  serde types in and out of bytes.
pub trait BlockCodec {
    const CODE: u64;

    fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError>;
    fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, CodecError>;
}

/// DAG-CBOR, backed by `serde_ipld_dagcbor`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DagCborCodec;

impl BlockCodec for DagCborCodec {
    const CODE: u64 = LD_DAG_CBOR_CODEC;

    fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
        serde_ipld_dagcbor::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, CodecError> {
        tracing::trace!("decoding {} byte dag-cbor block", data.len());
        serde_ipld_dagcbor::from_slice(data).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

/// Types that are stored as blocks under codec `C`.
///  Implementors only need serde; the methods come for free.
pub trait BlockEncoded<C: BlockCodec>: Serialize + DeserializeOwned {
    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        C::encode(self)
    }

    fn decode(data: &[u8]) -> Result<Self, CodecError> {
        C::decode(data)
    }
}

/// Encode any serializable object as DAG-CBOR.
///
/// Links embedded in `obj` (as [`Link`](super::Link) fields) are written
///  in their wire form, `{"/": <cid bytes>}`.
pub fn encode_object<T: Serialize + ?Sized>(obj: &T) -> Result<Vec<u8>, CodecError> {
    DagCborCodec::encode(obj)
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_encode_object_is_deterministic() {
        let mut a = BTreeMap::new();
        a.insert("zeta", 1u64);
        a.insert("alpha", 2u64);

        let first = encode_object(&a).unwrap();
        let second = encode_object(&a).unwrap();
        assert_eq!(first, second);

        let decoded: BTreeMap<String, u64> = DagCborCodec::decode(&first).unwrap();
        assert_eq!(decoded.get("zeta"), Some(&1));
        assert_eq!(decoded.get("alpha"), Some(&2));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result: Result<BTreeMap<String, u64>, _> = DagCborCodec::decode(&[0xff, 0x00, 0x13]);
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }
}

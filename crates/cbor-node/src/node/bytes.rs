//! Serde helper for byte fields of types read back with
//! [`decode_into`](super::decode_into).
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Blob {
//!     #[serde(with = "cbor_node::node::bytes")]
//!     data: Vec<u8>,
//! }
//! ```
//!
//! Binary formats get a real byte string. Human readable ones get the
//!  padded base64 string the JSON projection produces, and both forms
//!  are accepted on the way back in.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserializer, Serializer};

use crate::linked_data::multibase::Base;

pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    if serializer.is_human_readable() {
        serializer.serialize_str(&Base::Base64Pad.encode(bytes))
    } else {
        serializer.serialize_bytes(bytes)
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    deserializer.deserialize_any(BytesVisitor)
}

struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a byte string or a base64 string")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Vec<u8>, E> {
        Ok(v.to_vec())
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Vec<u8>, E> {
        Ok(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Vec<u8>, E> {
        Base::Base64Pad
            .decode(v)
            .map_err(|e| E::custom(format!("invalid base64: {}", e)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Vec<u8>, A::Error> {
        let mut out = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(byte) = access.next_element::<u8>()? {
            out.push(byte);
        }
        Ok(out)
    }
}

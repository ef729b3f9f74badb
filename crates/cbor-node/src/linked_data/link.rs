use std::fmt;

use cid::Cid;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::node::{Map, NodeError, Value};

/// The reserved map key that marks a link
pub const LINK_MARKER: &str = "/";

/// A pointer to another block.
///
/// Links found while resolving a path carry the name of the
///  path segment they were reached through; links built by hand
///  or found by traversal are anonymous.
///
/// Serialization depends on the format:
/// - binary formats (DAG-CBOR) write `{"/": <cid bytes>}`
/// - human readable formats (JSON) write `{"/": "<cid string>"}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    name: Option<String>,
    cid: Cid,
}

impl Link {
    pub fn new(cid: Cid) -> Self {
        Self { name: None, cid }
    }

    pub fn named(name: impl Into<String>, cid: Cid) -> Self {
        Self {
            name: Some(name.into()),
            cid,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn cid(&self) -> &Cid {
        &self.cid
    }
}

impl From<Cid> for Link {
    fn from(cid: Cid) -> Self {
        Link::new(cid)
    }
}

impl From<Link> for Cid {
    fn from(link: Link) -> Self {
        link.cid
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cid)
    }
}

// Byte strings need `serialize_bytes`, a plain `&[u8]` would
//  come out as a CBOR array
struct CidBytes<'a>(&'a [u8]);

impl Serialize for CidBytes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.0)
    }
}

struct CidByteBuf(Vec<u8>);

impl<'de> Deserialize<'de> for CidByteBuf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BytesVisitor;

        impl<'de> Visitor<'de> for BytesVisitor {
            type Value = CidByteBuf;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("cid bytes")
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                Ok(CidByteBuf(v.to_vec()))
            }

            fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
                Ok(CidByteBuf(v))
            }
        }

        deserializer.deserialize_bytes(BytesVisitor)
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let human_readable = serializer.is_human_readable();
        let mut map = serializer.serialize_map(Some(1))?;
        if human_readable {
            map.serialize_entry(LINK_MARKER, &self.cid.to_string())?;
        } else {
            map.serialize_entry(LINK_MARKER, &CidBytes(&self.cid.to_bytes()))?;
        }
        map.end()
    }
}

struct LinkVisitor {
    human_readable: bool,
}

impl<'de> Visitor<'de> for LinkVisitor {
    type Value = Link;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a single entry map keyed by \"{}\"", LINK_MARKER)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let key: String = map
            .next_key()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
        if key != LINK_MARKER {
            return Err(de::Error::unknown_field(&key, &[LINK_MARKER]));
        }

        let cid = if self.human_readable {
            let target: String = map.next_value()?;
            Cid::try_from(target.as_str()).map_err(<A::Error as de::Error>::custom)?
        } else {
            let CidByteBuf(target) = map.next_value()?;
            Cid::try_from(target.as_slice()).map_err(<A::Error as de::Error>::custom)?
        };

        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }

        Ok(Link::new(cid))
    }
}

impl<'de> Deserialize<'de> for Link {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let human_readable = deserializer.is_human_readable();
        deserializer.deserialize_map(LinkVisitor { human_readable })
    }
}

/// If `map` is link shaped (exactly one entry, keyed by [`LINK_MARKER`]),
///  parse its target. `None` means this is an ordinary map.
pub fn link_target(map: &Map) -> Option<Result<Cid, NodeError>> {
    if map.len() != 1 {
        return None;
    }
    let target = map.get(LINK_MARKER)?;
    Some(parse_target(target))
}

/// [`link_target`], lifted to any value. Already decoded
///  links always parse.
pub fn as_link(value: &Value) -> Option<Result<Cid, NodeError>> {
    match value {
        Value::Link(cid) => Some(Ok(*cid)),
        Value::Map(map) => link_target(map),
        _ => None,
    }
}

fn parse_target(target: &Value) -> Result<Cid, NodeError> {
    match target {
        Value::Bytes(bytes) => Cid::try_from(bytes.as_slice())
            .map_err(|e| NodeError::InvalidLinkEncoding(e.to_string())),
        other => Err(NodeError::InvalidLinkEncoding(format!(
            "link value should have been bytes, found {}",
            other.kind()
        ))),
    }
}

#![allow(clippy::doc_lazy_continuation)]

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::linked_data::{
    encode_object, BlockEncoded, Cid, CidPrefix, CodecError, DagCborCodec, Link,
};

use super::value::{Map, Value};
use super::{json, resolve, walk, DagNode, NodeError, Resolved};

/**
 * DAG-CBOR Nodes
 * ==============
 * A node is a map of arbitrary data. Any nested map of the
 *  form `{"/": <cid bytes>}` is a link to another node.
 * Nodes are immutable once built, so they can be shared
 *  across threads freely and their CID never changes.
 * Everything that walks a node recurses once per level of
 *  nesting; there is no depth limit, so services decoding
 *  untrusted blocks should bound block size themselves.
 */
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    map: Map,
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Node::wrap_map)
    }
}

impl BlockEncoded<DagCborCodec> for Node {}

impl From<Map> for Node {
    fn from(map: Map) -> Self {
        Node::wrap_map(map)
    }
}

impl Node {
    /// Wrap an existing map. Keys are not checked here.
    pub fn wrap_map(map: Map) -> Self {
        Self { map }
    }

    /// Build a node out of any serializable object by
    ///  round tripping it through DAG-CBOR.
    pub fn wrap_object<T: Serialize + ?Sized>(obj: &T) -> Result<Self, CodecError> {
        let data = encode_object(obj)?;
        Self::decode(&data)
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// The CID of this node under a non-default prefix
    pub fn cid_with(&self, prefix: &CidPrefix) -> Result<Cid, NodeError> {
        let data = self.raw_data()?;
        prefix
            .to_cid(&data)
            .map_err(|e| NodeError::Multihash(e.to_string()))
    }
}

impl DagNode for Node {
    fn resolve(&self, path: &[&str]) -> Result<(Resolved, Vec<String>), NodeError> {
        resolve::resolve(&self.map, path)
    }

    fn tree(&self) -> Result<Vec<String>, NodeError> {
        walk::tree(&self.map)
    }

    fn links(&self) -> Result<Vec<Link>, NodeError> {
        walk::links(&self.map)
    }

    fn raw_data(&self) -> Result<Vec<u8>, NodeError> {
        Ok(self.encode()?)
    }

    fn cid(&self) -> Result<Cid, NodeError> {
        self.cid_with(&CidPrefix::default())
    }

    fn to_json(&self) -> Result<serde_json::Value, NodeError> {
        json::project(&self.map)
    }

    fn loggable(&self) -> serde_json::Value {
        serde_json::json!({
            "node_type": "cbor",
            "cid": self.cid().ok().map(|cid| cid.to_string()),
        })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cid() {
            Ok(cid) => write!(f, "{}", cid),
            Err(e) => write!(f, "<unencodable node: {}>", e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::linked_data::BlockCodec;
    use crate::node::Key;

    fn sample() -> Node {
        let mut meta = Map::new();
        meta.insert("owner", "alice");
        meta.insert("tags", Value::List(vec!["a".into(), "b".into()]));

        let mut map = Map::new();
        map.insert("name", "photos");
        map.insert("meta", meta);
        map.insert("count", 3);
        Node::wrap_map(map)
    }

    #[test]
    fn test_node_encode_decode() {
        let node = sample();
        let encoded = node.encode().unwrap();
        let decoded = Node::decode(&encoded).unwrap();
        assert_eq!(node, decoded);
        assert_eq!(decoded.raw_data().unwrap(), encoded);
    }

    #[test]
    fn test_decode_requires_map() {
        let encoded = encode_object(&vec![1u64, 2, 3]).unwrap();
        assert!(matches!(Node::decode(&encoded), Err(CodecError::Decode(_))));

        let encoded = encode_object("just a string").unwrap();
        assert!(matches!(Node::decode(&encoded), Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_cid_is_stable() {
        let node = sample();
        let cid = node.cid().unwrap();
        assert_eq!(cid, node.cid().unwrap());
        assert_eq!(cid, sample().cid().unwrap());
        assert_eq!(cid.codec(), DagCborCodec::CODE);
        assert_eq!(node.to_string(), cid.to_string());
    }

    #[test]
    fn test_size_and_loggable() {
        let node = sample();
        assert_eq!(node.size().unwrap(), node.raw_data().unwrap().len() as u64);

        let loggable = node.loggable();
        assert_eq!(loggable["node_type"], "cbor");
        assert_eq!(loggable["cid"], node.cid().unwrap().to_string());
    }

    #[test]
    fn test_unencodable_node() {
        let mut map = Map::new();
        map.insert(Key::Integer(7), "seven");
        let node = Node::wrap_map(map);

        assert!(matches!(node.raw_data(), Err(NodeError::Codec(_))));
        assert!(node.cid().is_err());
        assert!(node.to_string().starts_with("<unencodable node"));
        assert_eq!(node.loggable()["cid"], serde_json::Value::Null);
    }
}

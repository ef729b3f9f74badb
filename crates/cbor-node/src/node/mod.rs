//! Generic DAG-CBOR nodes
//!
//! A [`Node`] is an immutable map of arbitrary data that may point at other
//! nodes through [`Link`]s:
//!
//! ```text
//! {
//!   "name": "photos",
//!   "meta": { "owner": "alice", "tags": ["a", "b"] },
//!   "prev": { "/": h'01711220...' }        <-- link, resolution stops here
//! }
//! ```
//!
//! - **Decoding**: [`decode`] / [`BlockEncoded::decode`](crate::linked_data::BlockEncoded)
//! - **Resolution**: [`DagNode::resolve`] walks a path and stops at the first link,
//!   handing back whatever path is left for the caller to continue on the target
//! - **Traversal**: [`DagNode::tree`] and [`DagNode::links`]
//! - **Identity**: [`DagNode::cid`], a DAG-CBOR + SHA2-256 CIDv1 of the canonical bytes
//! - **Projection**: [`DagNode::to_json`] and the typed bridge [`decode_into`]
//!
//! Keys are only checked for being strings when something needs them to be,
//! so a node with an integer key decodes fine and fails at `tree()`.

pub mod bytes;
mod cbor_node;
mod error;
mod json;
mod resolve;
mod value;
mod walk;

use std::fmt;

use crate::linked_data::{BlockEncoded, Cid, CodecError, DagCborCodec, Link};

pub use cbor_node::Node;
pub use error::NodeError;
pub use json::decode_into;
pub use value::{Key, Map, Value};

/// What a path resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A link, named after the segment it was found under
    Link(Link),
    /// A plain value. DAG-CBOR nodes never produce these,
    ///  resolution has to end on a link.
    Value(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeStat {
    pub cid: Cid,
    pub num_links: usize,
    pub block_size: u64,
}

/// The operations every kind of node supports.
pub trait DagNode: fmt::Display {
    /// Walk `path` through the node. Returns what was found
    ///  and the segments that were not consumed.
    fn resolve(&self, path: &[&str]) -> Result<(Resolved, Vec<String>), NodeError>;

    /// Like [`DagNode::resolve`], but anything other than a link is an error.
    fn resolve_link(&self, path: &[&str]) -> Result<(Link, Vec<String>), NodeError> {
        match self.resolve(path)? {
            (Resolved::Link(link), rest) => Ok((link, rest)),
            (Resolved::Value(_), _) => Err(NodeError::NonLinkAtPath(path.join("/"))),
        }
    }

    /// Every reachable path, `/`-joined. Links are leaves.
    fn tree(&self) -> Result<Vec<String>, NodeError>;

    /// Every link, in the same order as [`DagNode::tree`]
    fn links(&self) -> Result<Vec<Link>, NodeError>;

    /// Canonical encoded bytes
    fn raw_data(&self) -> Result<Vec<u8>, NodeError>;

    fn cid(&self) -> Result<Cid, NodeError>;

    fn size(&self) -> Result<u64, NodeError> {
        Ok(self.raw_data()?.len() as u64)
    }

    fn stat(&self) -> Result<NodeStat, NodeError> {
        Ok(NodeStat {
            cid: self.cid()?,
            num_links: self.links()?.len(),
            block_size: self.size()?,
        })
    }

    fn to_json(&self) -> Result<serde_json::Value, NodeError>;

    /// A small summary for log lines
    fn loggable(&self) -> serde_json::Value;
}

/// Decode a DAG-CBOR block into a [`Node`].
///  Fails if the block is malformed or is not a map.
///
/// Tag 42 CIDs are read as links too, but encoding always
///  writes links back as `{"/": <cid bytes>}`, so such a block
///  does not round trip to the same bytes or CID.
pub fn decode(data: &[u8]) -> Result<Node, CodecError> {
    <Node as BlockEncoded<DagCborCodec>>::decode(data)
}

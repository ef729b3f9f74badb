/**
 * Internal wrapper around the IPLD primitives we lean on:
 *  CIDs, the DAG-CBOR block codec, and the reserved
 *  `{"/": <cid bytes>}` link convention.
 */
pub mod linked_data;
/**
 * Generic DAG-CBOR nodes.
 * Arbitrary nested maps / lists / scalars that
 *  may embed links to other nodes, with path
 *  resolution, traversal and a JSON projection.
 */
pub mod node;

pub mod prelude {
    pub use crate::linked_data::{
        encode_object, multibase, BlockEncoded, Cid, CidError, CidPrefix, CodecError,
        DagCborCodec, HashAlgorithm, Link,
    };
    pub use crate::node::{
        decode, decode_into, DagNode, Key, Map, Node, NodeError, NodeStat, Resolved, Value,
    };
}

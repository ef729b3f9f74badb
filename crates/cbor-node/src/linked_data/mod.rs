//! Linked data primitives
//!
//! Everything that knows about content addressing lives here:
//!
//! - **[`Cid`]**: re-exported from the `cid` crate, the identifier of a block
//! - **[`CidPrefix`]**: which codec and hash function turn bytes into a [`Cid`]
//! - **[`BlockEncoded`]**: encode / decode a type as a DAG-CBOR block
//! - **[`Link`]**: a (optionally named) pointer to another block
//!
//! # Link convention
//!
//! On the wire a link is a map with exactly one entry, keyed by the reserved
//! marker [`LINK_MARKER`] (`"/"`), whose value is the raw CID bytes:
//!
//! ```text
//! { "/": h'01711220...' }
//! ```
//!
//! Human readable renderings (JSON) replace the bytes with the CID string:
//!
//! ```text
//! { "/": "bafyrei..." }
//! ```
//!
//! [`link_target`] and [`as_link`] are the only places that decide whether a
//! map is a link. Decoding, resolution, traversal and projection all go
//! through them.

mod codec;
mod link;
mod prefix;

pub use cid::{multibase, Cid, Error as CidError};

pub use codec::{encode_object, BlockCodec, BlockEncoded, CodecError, DagCborCodec};
pub use link::{as_link, link_target, Link, LINK_MARKER};
pub use prefix::{verify, CidPrefix, HashAlgorithm, LD_DAG_CBOR_CODEC, LD_RAW_CODEC};

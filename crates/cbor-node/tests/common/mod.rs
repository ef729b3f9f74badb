//! Shared fixtures for node integration tests
#![allow(dead_code)]

use std::collections::HashMap;

use cbor_node::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; `RUST_LOG=cbor_node=trace` to see output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A stable CID to point links at
pub fn cid_of(seed: &str) -> Cid {
    CidPrefix::default().to_cid(seed.as_bytes()).unwrap()
}

/// Build a map from `(key, value)` pairs
pub fn map<const N: usize>(entries: [(&str, Value); N]) -> Map {
    entries.into_iter().collect()
}

/// Encode and decode a node, the way it would come back from a store
pub fn roundtrip(node: &Node) -> Node {
    decode(&node.raw_data().unwrap()).unwrap()
}

/// A toy block store keyed by CID
#[derive(Default)]
pub struct Blocks(HashMap<Cid, Vec<u8>>);

impl Blocks {
    pub fn put(&mut self, node: &Node) -> Cid {
        let cid = node.cid().unwrap();
        self.0.insert(cid, node.raw_data().unwrap());
        cid
    }

    pub fn get(&self, cid: &Cid) -> Node {
        decode(self.0.get(cid).expect("block not in store")).unwrap()
    }
}

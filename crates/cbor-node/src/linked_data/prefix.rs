use cid::Cid;
use multihash::Multihash;
use serde::{Deserialize, Serialize};
use sha2::Digest;

/// Multicodec for DAG-CBOR blocks
pub const LD_DAG_CBOR_CODEC: u64 = 0x71;
/// Multicodec for raw, uninterpreted blocks
pub const LD_RAW_CODEC: u64 = 0x55;

const SHA2_256: u64 = 0x12;
const BLAKE3: u64 = 0x1e;

/// Hash functions we know how to derive CIDs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "sha2-256")]
    Sha2_256,
    #[serde(rename = "blake3")]
    Blake3,
}

impl HashAlgorithm {
    /// The multihash code for this algorithm
    pub fn code(&self) -> u64 {
        match self {
            HashAlgorithm::Sha2_256 => SHA2_256,
            HashAlgorithm::Blake3 => BLAKE3,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            SHA2_256 => Some(HashAlgorithm::Sha2_256),
            BLAKE3 => Some(HashAlgorithm::Blake3),
            _ => None,
        }
    }

    /// Hash `data`, returning the raw digest (32 bytes for both algorithms)
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha2_256 => sha2::Sha256::digest(data).to_vec(),
            HashAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
        }
    }
}

/// Everything needed to turn a block's bytes into a CIDv1,
///  short of the bytes themselves.
///
/// The default is what nodes are addressed by: DAG-CBOR + SHA2-256.
/// Host services that want BLAKE3 addressing can carry one of these
///  in their own config; it (de)serializes as
///  `{ codec = 113, hash = "blake3" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CidPrefix {
    pub codec: u64,
    #[serde(default)]
    pub hash: HashAlgorithm,
}

impl Default for CidPrefix {
    fn default() -> Self {
        Self {
            codec: LD_DAG_CBOR_CODEC,
            hash: HashAlgorithm::Sha2_256,
        }
    }
}

impl CidPrefix {
    pub fn new(codec: u64, hash: HashAlgorithm) -> Self {
        Self { codec, hash }
    }

    /// Hash `data` and tag the digest with this prefix's codec
    pub fn to_cid(&self, data: &[u8]) -> Result<Cid, multihash::Error> {
        let digest = self.hash.digest(data);
        let mh = Multihash::<64>::wrap(self.hash.code(), &digest)?;
        Ok(Cid::new_v1(self.codec, mh))
    }

    /// Recover the prefix a CID was built with, if we support its hash
    pub fn of(cid: &Cid) -> Option<Self> {
        let hash = HashAlgorithm::from_code(cid.hash().code())?;
        Some(Self::new(cid.codec(), hash))
    }
}

/// Re-hash `data` and check it against `cid`.
///  CIDs with hash functions we don't support never verify.
pub fn verify(cid: &Cid, data: &[u8]) -> bool {
    match CidPrefix::of(cid) {
        Some(prefix) => prefix
            .to_cid(data)
            .map(|derived| derived == *cid)
            .unwrap_or(false),
        None => false,
    }
}

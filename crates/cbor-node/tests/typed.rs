//! Integration tests for the JSON projection and typed decoding

mod common;

use cbor_node::prelude::*;
use serde::{Deserialize, Serialize};

use common::{cid_of, map};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Entry {
    name: String,
    size: u64,
    target: Link,
    tags: Vec<String>,
    note: Option<String>,
}

fn entry() -> Entry {
    Entry {
        name: "photo.png".to_string(),
        size: 2048,
        target: Link::new(cid_of("photo")),
        tags: vec!["holiday".to_string()],
        note: None,
    }
}

#[test]
fn test_decode_into_struct() {
    common::init_tracing();
    let data = encode_object(&entry()).unwrap();
    let decoded: Entry = decode_into(&data).unwrap();
    assert_eq!(decoded, entry());
}

#[test]
fn test_decode_into_generic_json() {
    let data = encode_object(&entry()).unwrap();
    let json: serde_json::Value = decode_into(&data).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "photo.png",
            "size": 2048,
            "target": { "/": cid_of("photo").to_string() },
            "tags": ["holiday"],
            "note": null,
        })
    );
}

#[test]
fn test_decode_into_wrong_shape() {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Other {
        missing: u64,
    }

    let data = encode_object(&entry()).unwrap();
    assert!(matches!(
        decode_into::<Other>(&data),
        Err(NodeError::TypedDecode(_))
    ));
}

#[test]
fn test_decode_into_bad_bytes() {
    let data = encode_object(&["not", "a", "map"]).unwrap();
    assert!(matches!(
        decode_into::<serde_json::Value>(&data),
        Err(NodeError::Codec(CodecError::Decode(_)))
    ));
}

#[test]
fn test_decode_into_broken_link() {
    // Marker present, but the value is a string rather than CID bytes
    let broken = map([("/", Value::from("bafy-not-bytes"))]);
    let node = Node::wrap_map(map([("target", Value::Map(broken))]));
    let data = node.raw_data().unwrap();

    assert!(matches!(
        decode_into::<serde_json::Value>(&data),
        Err(NodeError::InvalidLinkEncoding(_))
    ));
}

#[test]
fn test_bare_link_projection() {
    let target = cid_of("bare");
    let data = encode_object(&Link::new(target)).unwrap();

    // A node that is nothing but a link still decodes as a map...
    let node = decode(&data).unwrap();
    assert_eq!(node.map().len(), 1);

    // ...and projects to the display form, never raw bytes
    assert_eq!(
        node.to_json().unwrap(),
        serde_json::json!({ "/": target.to_string() })
    );
    let link: Link = decode_into(&data).unwrap();
    assert_eq!(link.cid(), &target);
}

#[test]
fn test_projection_of_bytes() {
    let node = Node::wrap_map(map([("blob", Value::Bytes(b"hi".to_vec()))]));
    assert_eq!(node.to_json().unwrap(), serde_json::json!({ "blob": "aGk=" }));
    assert!(node.links().unwrap().is_empty());
}

#[test]
fn test_decode_into_byte_fields() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Attachment {
        name: String,
        #[serde(with = "cbor_node::node::bytes")]
        data: Vec<u8>,
    }

    #[derive(Debug, Deserialize)]
    struct Encoded {
        data: String,
    }

    let attachment = Attachment {
        name: "greeting".to_string(),
        data: b"hi".to_vec(),
    };
    let data = encode_object(&attachment).unwrap();
    // Stored as a real byte string, not a list or a string
    assert_eq!(
        decode(&data).unwrap().get("data"),
        Some(&Value::Bytes(b"hi".to_vec()))
    );

    let decoded: Attachment = decode_into(&data).unwrap();
    assert_eq!(decoded, attachment);

    let encoded: Encoded = decode_into(&data).unwrap();
    assert_eq!(encoded.data, "aGk=");
}

#[test]
fn test_tagged_cid_fields() {
    // `Cid` fields serialize as CBOR tag 42 rather than the map form
    #[derive(Serialize)]
    struct Commit {
        message: String,
        parent: Cid,
    }

    let parent = cid_of("parent");
    let node = Node::wrap_object(&Commit {
        message: "init".to_string(),
        parent,
    })
    .unwrap();

    assert_eq!(node.get("parent"), Some(&Value::Link(parent)));
    assert_eq!(node.links().unwrap(), vec![Link::new(parent)]);
    let (link, rest) = node.resolve_link(&["parent", "tree"]).unwrap();
    assert_eq!(link.cid(), &parent);
    assert_eq!(rest, vec!["tree".to_string()]);
}

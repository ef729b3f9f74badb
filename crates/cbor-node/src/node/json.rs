use serde::de::DeserializeOwned;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::linked_data::{link_target, multibase::Base, BlockEncoded, Cid, LINK_MARKER};

use super::cbor_node::Node;
use super::value::{Map, Value};
use super::{DagNode, NodeError};

/// Project a map into JSON. Links (including a link-shaped root)
///  become `{"/": "<cid>"}`, bytes become padded base64 strings.
pub(super) fn project(map: &Map) -> Result<JsonValue, NodeError> {
    if let Some(target) = link_target(map) {
        return Ok(link_json(&target?));
    }

    let mut out = JsonMap::new();
    for (key, value) in map.iter() {
        let key = key
            .as_str()
            .ok_or_else(|| NodeError::KeyType(key.to_string()))?;
        out.insert(key.to_string(), project_value(value)?);
    }
    Ok(JsonValue::Object(out))
}

fn project_value(value: &Value) -> Result<JsonValue, NodeError> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Integer(i) => integer_json(*i)?,
        Value::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or_else(|| NodeError::Projection(format!("non-finite float {}", f)))?,
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Bytes(b) => JsonValue::String(Base::Base64Pad.encode(b)),
        Value::List(items) => JsonValue::Array(
            items
                .iter()
                .map(project_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Map(map) => project(map)?,
        Value::Link(cid) => link_json(cid),
    })
}

fn integer_json(i: i128) -> Result<JsonValue, NodeError> {
    if let Ok(v) = i64::try_from(i) {
        Ok(JsonValue::Number(v.into()))
    } else if let Ok(v) = u64::try_from(i) {
        Ok(JsonValue::Number(v.into()))
    } else {
        Err(NodeError::Projection(format!("integer {} out of range", i)))
    }
}

fn link_json(cid: &Cid) -> JsonValue {
    let mut out = JsonMap::with_capacity(1);
    out.insert(LINK_MARKER.to_string(), JsonValue::String(cid.to_string()));
    JsonValue::Object(out)
}

/// Decode a DAG-CBOR block straight into `T`.
///
/// serde can't drive `T`'s own hooks from the generic node
///  representation, so the block goes through its JSON
///  projection first. Any [`Link`](crate::linked_data::Link)
///  fields in `T` see the `{"/": "<cid>"}` form, byte fields
///  see a base64 string (see [`bytes`](super::bytes)).
pub fn decode_into<T: DeserializeOwned>(data: &[u8]) -> Result<T, NodeError> {
    let node = Node::decode(data)?;
    let json = node.to_json()?;
    serde_json::from_value(json).map_err(|e| {
        tracing::debug!("decode_into: block {} did not fit target type: {}", node, e);
        NodeError::TypedDecode(e)
    })
}

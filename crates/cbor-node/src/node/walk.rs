use crate::linked_data::{as_link, link_target, Cid, Link};

use super::value::{Map, Value};
use super::NodeError;

pub(super) fn tree(root: &Map) -> Result<Vec<String>, NodeError> {
    let mut out = Vec::new();
    traverse(root, "", &mut |path, _| out.push(path))?;
    Ok(out)
}

pub(super) fn links(root: &Map) -> Result<Vec<Link>, NodeError> {
    let mut out = Vec::new();
    traverse(root, "", &mut |_, target| {
        if let Some(cid) = target {
            out.push(Link::new(cid));
        }
    })?;
    Ok(out)
}

// Depth first, in key order. `visit` sees every leaf path, along
//  with the link target when the leaf is a link.
fn traverse<F>(map: &Map, current: &str, visit: &mut F) -> Result<(), NodeError>
where
    F: FnMut(String, Option<Cid>),
{
    if let Some(target) = link_target(map) {
        visit(current.to_string(), Some(target?));
        return Ok(());
    }

    for (key, value) in map.iter() {
        let name = key
            .as_str()
            .ok_or_else(|| NodeError::KeyType(key.to_string()))?;
        let child = format!("{}/{}", current, name);

        match as_link(value) {
            Some(target) => visit(child, Some(target?)),
            None => match value {
                Value::Map(inner) => traverse(inner, &child, visit)?,
                _ => visit(child, None),
            },
        }
    }

    Ok(())
}

use crate::linked_data::{as_link, Link};

use super::value::{Map, Value};
use super::{NodeError, Resolved};

/// Walk `path` from `root`, stopping at the first link.
///
/// A path that runs out before reaching a link is an error, even
///  when it ends on a perfectly good scalar: within a node, only
///  links are addressable.
pub(super) fn resolve(root: &Map, path: &[&str]) -> Result<(Resolved, Vec<String>), NodeError> {
    let mut cursor = root;
    for (i, segment) in path.iter().enumerate() {
        let next = cursor
            .get(segment)
            .ok_or_else(|| NodeError::NoSuchLink(segment.to_string()))?;

        if let Some(target) = as_link(next) {
            let cid = target?;
            let rest: Vec<String> = path[i + 1..].iter().map(|s| s.to_string()).collect();
            tracing::trace!("resolve: link {} at '{}', {} segments left", cid, segment, rest.len());
            return Ok((Resolved::Link(Link::named(*segment, cid)), rest));
        }

        cursor = match next {
            Value::Map(map) => map,
            other => {
                return Err(NodeError::NonTraversable {
                    segment: segment.to_string(),
                    kind: other.kind(),
                })
            }
        };
    }

    Err(NodeError::UnresolvedPath(path.join("/")))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::linked_data::{CidPrefix, LINK_MARKER};

    #[test]
    fn test_resolve_through_raw_link_map() {
        // A link built by hand as a map, rather than decoded
        let cid = CidPrefix::default().to_cid(b"target").unwrap();
        let mut link = Map::new();
        link.insert(LINK_MARKER, Value::Bytes(cid.to_bytes()));
        let mut root = Map::new();
        root.insert("child", link);

        let (resolved, rest) = resolve(&root, &["child", "x"]).unwrap();
        assert_eq!(resolved, Resolved::Link(Link::named("child", cid)));
        assert_eq!(rest, vec!["x".to_string()]);
    }

    #[test]
    fn test_resolve_broken_link() {
        let mut link = Map::new();
        link.insert(LINK_MARKER, 12);
        let mut root = Map::new();
        root.insert("child", link);

        assert!(matches!(
            resolve(&root, &["child"]),
            Err(NodeError::InvalidLinkEncoding(_))
        ));
    }

    #[test]
    fn test_resolve_into_list() {
        let mut root = Map::new();
        root.insert("items", Value::List(vec![Value::from(1)]));

        match resolve(&root, &["items", "0"]) {
            Err(NodeError::NonTraversable { segment, kind }) => {
                assert_eq!(segment, "items");
                assert_eq!(kind, "list");
            }
            other => panic!("expected NonTraversable, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_empty_path() {
        let root = Map::new();
        assert!(matches!(
            resolve(&root, &[]),
            Err(NodeError::UnresolvedPath(_))
        ));
    }
}

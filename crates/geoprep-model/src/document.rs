//! Document tree for hierarchical (GeoJSON-style) data.
//!
//! [`Node`] is a tagged sum over every kind of vertex a document may hold,
//! so traversals match exhaustively instead of dispatching on runtime type.
//! Mapping keys keep their input order, which keeps rewritten documents
//! diffable against their source.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One vertex of a document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Sequence(Vec<Node>),
    Mapping(IndexMap<String, Node>),
}

impl Node {
    /// The value substituted for every null: the number `-1`.
    pub fn sentinel() -> Self {
        Node::Number(Number::from(-1))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// True for mapping and sequence nodes.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Sequence(_) | Node::Mapping(_))
    }

    /// Counts nulls anywhere in the tree rooted at this node.
    pub fn null_count(&self) -> usize {
        match self {
            Node::Null => 1,
            Node::Bool(_) | Node::Number(_) | Node::Text(_) => 0,
            Node::Sequence(items) => items.iter().map(Node::null_count).sum(),
            Node::Mapping(entries) => entries.values().map(Node::null_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_each_kind() {
        let node: Node = serde_json::from_str(
            r#"{"name": "Fr", "pct": 70.5, "member": true, "note": null, "years": [2020, null]}"#,
        )
        .unwrap();

        let Node::Mapping(entries) = &node else {
            panic!("expected mapping root");
        };
        assert_eq!(entries["name"], Node::Text("Fr".to_string()));
        assert_eq!(entries["member"], Node::Bool(true));
        assert!(entries["note"].is_null());
        assert!(entries["years"].is_container());
        assert_eq!(node.null_count(), 2);
    }

    #[test]
    fn mapping_preserves_key_order() {
        let node: Node = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let Node::Mapping(entries) = node else {
            panic!("expected mapping root");
        };
        let keys: Vec<_> = entries.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn serializes_null_as_json_null() {
        assert_eq!(serde_json::to_string(&Node::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Node::sentinel()).unwrap(), "-1");
    }
}

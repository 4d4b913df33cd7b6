//! The response envelope that requested nodes are delivered in.

use crate::errors::{Result, SprigError};
use crate::node::DesignNode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Response of the design tool's "get nodes" endpoint.
///
/// Ids that the tool could not resolve come back as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: IndexMap<String, Option<NodeEntry>>,
}

/// One resolved node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub document: DesignNode,
}

impl NodesResponse {
    /// Parse a response from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a response from already-resolved roots, keyed by their ids.
    pub fn from_roots(roots: impl IntoIterator<Item = DesignNode>) -> Self {
        let nodes = roots
            .into_iter()
            .map(|document| (document.id.clone(), Some(NodeEntry { document })))
            .collect();
        Self { name: None, nodes }
    }

    /// Look up the root node for a requested id.
    pub fn node(&self, id: &str) -> Result<&DesignNode> {
        self.nodes
            .get(id)
            .and_then(|entry| entry.as_ref())
            .map(|entry| &entry.document)
            .ok_or_else(|| SprigError::MissingNode { id: id.to_string() })
    }

    /// All ids present in the response, in response order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}

/// Split a comma-separated id list, trimming whitespace and dropping empties.
pub fn parse_node_ids(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    #[test]
    fn test_missing_and_null_nodes() {
        let json = r#"{
            "name": "Design",
            "nodes": {
                "1:2": { "document": { "id": "1:2", "name": "Card", "type": "FRAME" } },
                "3:4": null
            }
        }"#;
        let response = NodesResponse::from_json(json).unwrap();
        assert_eq!(response.node("1:2").unwrap().node_type, NodeType::Frame);
        assert!(matches!(
            response.node("3:4"),
            Err(SprigError::MissingNode { ref id }) if id == "3:4"
        ));
        assert!(response.node("5:6").is_err());
        assert_eq!(response.ids().collect::<Vec<_>>(), vec!["1:2", "3:4"]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            NodesResponse::from_json("{ nodes"),
            Err(SprigError::Json(_))
        ));
    }

    #[test]
    fn test_parse_node_ids() {
        assert_eq!(parse_node_ids(" 1:2, 3:4 ,,"), vec!["1:2", "3:4"]);
        assert!(parse_node_ids("").is_empty());
    }
}

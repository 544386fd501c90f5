use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SelectionError;

/// Opaque handle to a document node, as exposed by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

impl NodeRef {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
        }
    }
}

/// Point-in-time copy of the host's current selection, in host order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSnapshot(Vec<NodeRef>);

impl SelectionSnapshot {
    pub fn new(nodes: Vec<NodeRef>) -> Self {
        Self(nodes)
    }

    pub fn nodes(&self) -> &[NodeRef] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Type discriminator of the first selected node.
    pub fn first_node_type(&self) -> Result<&str, SelectionError> {
        self.0
            .first()
            .map(|node| node.node_type.as_str())
            .ok_or(SelectionError::Empty)
    }
}

impl From<Vec<NodeRef>> for SelectionSnapshot {
    fn from(nodes: Vec<NodeRef>) -> Self {
        Self(nodes)
    }
}

/// Scalar derived from the latest selection; pushed to the UI verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginData(String);

impl PluginData {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_node_type_reads_only_the_head() {
        let snapshot = SelectionSnapshot::new(vec![
            NodeRef::new("1:2", "FRAME"),
            NodeRef::new("1:3", "TEXT"),
        ]);
        assert_eq!(snapshot.first_node_type(), Ok("FRAME"));
    }

    #[test]
    fn first_node_type_fails_on_empty() {
        let snapshot = SelectionSnapshot::default();
        assert_eq!(snapshot.first_node_type(), Err(SelectionError::Empty));
    }

    #[test]
    fn node_ref_uses_type_field_name() {
        let node: NodeRef = serde_json::from_str(r#"{"id":"4:1","type":"RECTANGLE"}"#).unwrap();
        assert_eq!(node, NodeRef::new("4:1", "RECTANGLE"));
    }
}

use std::collections::HashMap;

use crate::domain::model::Knowledge;

/// Read-only access to the inferred knowledge on a node's input ports.
pub trait KnowledgeSource {
    /// Knowledge for input port `port_index`, or `None` if inference has not
    /// produced anything for that port yet.
    fn incoming_knowledge(&self, port_index: usize) -> Option<&Knowledge>;
}

/// Graph node
#[derive(Debug, Clone, Default)]
pub struct GraphNode {
    /// Node ID
    pub id: String,

    /// Operation type of the node
    pub node_type: String,

    /// Node title
    pub title: String,

    /// Inferred knowledge per input port
    incoming: HashMap<usize, Knowledge>,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_incoming_knowledge(&mut self, port_index: usize, knowledge: Knowledge) {
        self.incoming.insert(port_index, knowledge);
    }

    pub fn clear_incoming_knowledge(&mut self, port_index: usize) -> Option<Knowledge> {
        self.incoming.remove(&port_index)
    }
}

impl KnowledgeSource for GraphNode {
    fn incoming_knowledge(&self, port_index: usize) -> Option<&Knowledge> {
        self.incoming.get(&port_index)
    }
}

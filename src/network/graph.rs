//! Node-link serialization of the co-author graph
//!
//! ```json
//! {
//!   "directed": false,
//!   "multigraph": false,
//!   "graph": {},
//!   "nodes": [{"id": "A1", "name": "A. Smith", "profile_link": "..."}],
//!   "links": [{"source": "A1", "target": "B1", "weight": 2}]
//! }
//! ```

use crate::network::{Subject, tally::CollaboratorTally};
use serde::Serialize;
use serde_json::{Map, Value};

/// Collaborators kept in the graph shape
pub const TOP_COLLABORATORS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub profile_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Undirected star graph: the subject in the middle, one weighted edge per
/// collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLinkGraph {
    pub directed: bool,
    pub multigraph: bool,
    pub graph: Map<String, Value>,
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl NodeLinkGraph {
    /// Subject plus its `limit` most frequent collaborators
    pub fn star(subject: &Subject, tally: &CollaboratorTally, limit: usize) -> Self {
        let top = tally.top(limit);
        let mut nodes = Vec::with_capacity(top.len() + 1);
        let mut links = Vec::with_capacity(top.len());

        nodes.push(GraphNode {
            id: subject.id.clone(),
            name: subject.name.clone(),
            profile_link: subject.works_url.clone(),
        });
        for collaborator in top {
            nodes.push(GraphNode {
                id: collaborator.id.clone(),
                name: collaborator.name.clone(),
                profile_link: collaborator.profile_url.clone(),
            });
            links.push(GraphLink {
                source: subject.id.clone(),
                target: collaborator.id.clone(),
                weight: collaborator.count,
            });
        }

        Self {
            directed: false,
            multigraph: false,
            graph: Map::new(),
            nodes,
            links,
        }
    }
}

//! Graph Export - JSON view of the similarity graph for external drawing tools

use serde::Serialize;

use crate::errors::Result;
use crate::features::ranking::RankResult;
use crate::features::similarity_graph::{SimilarityEdge, SimilarityGraph};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportNode {
    pub identifier: String,
    pub cuisines: Vec<String>,
    pub rating: f64,
    pub cost: f64,

    /// Centrality score, when a ranking was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Nodes (insertion order) and weighted edges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<SimilarityEdge>,
}

impl GraphExport {
    pub fn from_graph(graph: &SimilarityGraph, ranking: Option<&RankResult>) -> Self {
        let nodes = graph
            .records()
            .map(|record| ExportNode {
                identifier: record.identifier.clone(),
                cuisines: record.cuisine_tags.iter().cloned().collect(),
                rating: record.rating,
                cost: record.cost,
                score: ranking.and_then(|r| r.score_of(&record.identifier)),
            })
            .collect();

        Self {
            nodes,
            edges: graph.edges(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

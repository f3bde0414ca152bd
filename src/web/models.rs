use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use uuid::Uuid;

use crate::algorithm::dijkstra::SearchStats;
use crate::data_structures::DistanceTable;
use crate::graph::document::GraphDocument;

/// Body of `POST /api/graphs`
#[derive(Debug, Deserialize)]
pub struct CreateGraphRequest {
    pub graph: GraphDocument,
    #[serde(default)]
    pub label: Option<String>,
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub graph_type: String,
    pub node_count: usize,
    #[serde(default = "default_edge_factor")]
    pub edge_factor: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub grid_dimensions: Option<(usize, usize)>,
    #[serde(default = "default_layer_width")]
    pub layer_width: usize,
}

fn default_edge_factor() -> f64 { 3.0 }
fn default_layer_width() -> usize { 4 }
fn default_algorithm() -> String { "dijkstra".to_string() }

/// Body of `POST /api/graphs/:session_id/distances`
#[derive(Debug, Deserialize)]
pub struct DistancesRequest {
    pub start: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

/// Body of the stateless `POST /api/distances`
#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    pub graph: GraphDocument,
    pub start: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

/// Distances computed from one start vertex.
///
/// Every vertex of the graph is listed; unreachable ones map to `null`.
#[derive(Debug, Clone, Serialize)]
pub struct DistancesResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub start: String,
    pub execution_time_ms: f64,
    pub reachable: usize,
    pub unreachable: usize,
    pub distances: BTreeMap<String, Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
}

impl DistancesResponse {
    pub fn from_table(
        algorithm: &str,
        table: &DistanceTable<String, f64>,
        elapsed: Duration,
        stats: Option<SearchStats>,
    ) -> Self {
        let distances: BTreeMap<String, Option<f64>> = table
            .iter()
            .map(|(vertex, d)| (vertex.clone(), Some(d).filter(|d| d.is_finite())))
            .collect();
        let reachable = table.reachable_count();

        Self {
            execution_id: Uuid::new_v4(),
            algorithm: algorithm.to_string(),
            start: table.start().clone(),
            execution_time_ms: elapsed.as_secs_f64() * 1000.0,
            reachable,
            unreachable: table.len() - reachable,
            distances,
            stats,
        }
    }
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing a graph and its latest computation
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub label: Option<String>,
    pub graph: GraphDocument,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub last_result: Option<DistancesResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: GraphDocument, label: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            graph,
            last_result: None,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            label: self.label.clone(),
            vertex_count: self.vertex_count,
            edge_count: self.edge_count,
            created_at: self.created_at,
        }
    }
}

/// Session listing entry, without the graph itself
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub label: Option<String>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

use crate::algorithm::dijkstra::ShortestPathEngine;
use crate::graph::{AdjacencyGraph, MutableGraph};
use crate::Error;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::VertexNotFound(_) => PyKeyError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Shortest distances from `start` over `{vertex: {neighbor: weight}}`.
/// Unreachable vertices map to `inf`
#[pyfunction]
fn shortest_distances(
    graph: HashMap<String, HashMap<String, f64>>,
    start: String,
) -> PyResult<HashMap<String, f64>> {
    let table = ShortestPathEngine::new()
        .compute(&graph, &start)
        .map_err(to_py_err)?;
    Ok(table.into_map())
}

#[pyclass]
pub struct PyGraph {
    graph: AdjacencyGraph<String, f64>,
}

#[pymethods]
impl PyGraph {
    #[new]
    fn new() -> Self {
        PyGraph {
            graph: AdjacencyGraph::new(),
        }
    }

    fn add_vertex(&mut self, vertex: String) -> bool {
        self.graph.add_vertex(vertex)
    }

    fn add_edge(&mut self, from: String, to: String, weight: f64) -> bool {
        self.graph.add_edge(from, to, weight)
    }

    fn shortest_distances(&self, start: String) -> PyResult<HashMap<String, f64>> {
        let table = ShortestPathEngine::new()
            .compute(&self.graph, &start)
            .map_err(to_py_err)?;
        Ok(table.into_map())
    }
}

#[pymodule]
fn lazy_sssp_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(shortest_distances, m)?)?;
    m.add_class::<PyGraph>()?;
    Ok(())
}

use crate::algorithm::dijkstra::ShortestPathEngine;
use crate::graph::{AdjacencyGraph, MutableGraph};
use crate::Error;
use libc::c_int;

pub const LSSSP_OK: c_int = 0;
pub const LSSSP_NULL_POINTER: c_int = 1;
pub const LSSSP_VERTEX_NOT_FOUND: c_int = 2;
pub const LSSSP_MALFORMED_GRAPH: c_int = 3;
pub const LSSSP_INVALID_WEIGHT: c_int = 4;

#[repr(C)]
pub struct FfiGraph {
    graph: AdjacencyGraph<usize, f64>,
}

#[no_mangle]
pub extern "C" fn lsssp_graph_new() -> *mut FfiGraph {
    Box::into_raw(Box::new(FfiGraph {
        graph: AdjacencyGraph::new(),
    }))
}

/// Returns false if the vertex already exists or `g` is null
#[no_mangle]
pub extern "C" fn lsssp_graph_add_vertex(g: *mut FfiGraph, vertex: usize) -> bool {
    match unsafe { g.as_mut() } {
        Some(g) => g.graph.add_vertex(vertex),
        None => false,
    }
}

#[no_mangle]
pub extern "C" fn lsssp_graph_add_edge(
    g: *mut FfiGraph,
    from: usize,
    to: usize,
    weight: f64,
) -> bool {
    match unsafe { g.as_mut() } {
        Some(g) => g.graph.add_edge(from, to, weight),
        None => false,
    }
}

#[no_mangle]
pub extern "C" fn lsssp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Distances sorted by vertex id. Unreachable vertices hold `INFINITY`
#[repr(C)]
pub struct FfiDistances {
    vertices: *mut usize,
    distances: *mut f64,
    len: usize,
}

#[no_mangle]
pub extern "C" fn lsssp_distances_free(res: *mut FfiDistances) {
    if !res.is_null() {
        unsafe {
            let res = Box::from_raw(res);
            if !res.vertices.is_null() {
                drop(Vec::from_raw_parts(res.vertices, res.len, res.len));
            }
            if !res.distances.is_null() {
                drop(Vec::from_raw_parts(res.distances, res.len, res.len));
            }
        }
    }
}

/// Writes a newly allocated result to `out` and returns `LSSSP_OK`, or an error code and
/// leaves `out` untouched. Free the result with `lsssp_distances_free`
#[no_mangle]
pub extern "C" fn lsssp_compute_distances(
    g: *const FfiGraph,
    start: usize,
    out: *mut *mut FfiDistances,
) -> c_int {
    let graph = match unsafe { g.as_ref() } {
        Some(g) => &g.graph,
        None => return LSSSP_NULL_POINTER,
    };
    if out.is_null() {
        return LSSSP_NULL_POINTER;
    }

    let table = match ShortestPathEngine::new().compute(graph, &start) {
        Ok(table) => table,
        Err(Error::VertexNotFound(_)) => return LSSSP_VERTEX_NOT_FOUND,
        Err(Error::MalformedGraph { .. }) => return LSSSP_MALFORMED_GRAPH,
        Err(_) => return LSSSP_INVALID_WEIGHT,
    };

    let mut entries: Vec<(usize, f64)> = table.iter().map(|(v, d)| (*v, d)).collect();
    entries.sort_by_key(|(v, _)| *v);
    let len = entries.len();
    let (vertices, distances): (Vec<usize>, Vec<f64>) = entries.into_iter().unzip();

    // capacity == len, as lsssp_distances_free assumes
    let vertices = Box::into_raw(vertices.into_boxed_slice()) as *mut usize;
    let distances = Box::into_raw(distances.into_boxed_slice()) as *mut f64;

    unsafe {
        *out = Box::into_raw(Box::new(FfiDistances {
            vertices,
            distances,
            len,
        }));
    }
    LSSSP_OK
}

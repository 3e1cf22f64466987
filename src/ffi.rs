//! C ABI over the shortest path engines.
//!
//! Distances of unreachable nodes are reported as `i64::MAX` and unset
//! predecessors as `0`. Arrays have `node_count + 1` entries; index 0 is unused.

use std::slice;

use libc::{c_int, size_t};

use crate::algorithm::Algorithm;
use crate::graph::{AdjacencyList, Arc};

pub struct FfiGraph {
    graph: AdjacencyList<i64>,
}

#[repr(C)]
pub struct FfiResult {
    pub distances: *mut i64,
    pub predecessors: *mut size_t,
    pub len: size_t,
    pub relaxations: u64,
    pub elapsed_nanos: u64,
}

/// Builds a graph from parallel `from`/`to`/`length` arrays.
///
/// Returns null if any pointer is null or an arc endpoint is out of range.
///
/// # Safety
/// Each array must hold at least `arc_count` readable elements.
#[no_mangle]
pub unsafe extern "C" fn sssp_graph_build(
    node_count: size_t,
    from: *const size_t,
    to: *const size_t,
    length: *const i64,
    arc_count: size_t,
) -> *mut FfiGraph {
    if arc_count > 0 && (from.is_null() || to.is_null() || length.is_null()) {
        return std::ptr::null_mut();
    }

    let arcs = if arc_count == 0 {
        Vec::new()
    } else {
        let from = slice::from_raw_parts(from, arc_count);
        let to = slice::from_raw_parts(to, arc_count);
        let length = slice::from_raw_parts(length, arc_count);
        (0..arc_count)
            .map(|i| Arc::new(from[i], to[i], length[i]))
            .collect()
    };

    match AdjacencyList::build(node_count, arcs) {
        Ok(graph) => Box::into_raw(Box::new(FfiGraph { graph })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// # Safety
/// `g` must come from [`sssp_graph_build`] and not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn sssp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        drop(Box::from_raw(g));
    }
}

/// Runs an engine: 0 = Dijkstra, 1 = Dial, 2 = SPFA, 3 = PAPE.
///
/// Returns null on an unknown engine or when the run fails.
///
/// # Safety
/// `g` must be a live graph from [`sssp_graph_build`].
#[no_mangle]
pub unsafe extern "C" fn sssp_run(
    g: *const FfiGraph,
    algorithm: c_int,
    source: size_t,
) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = &(*g).graph;

    let algorithm = match algorithm {
        0 => Algorithm::Dijkstra,
        1 => Algorithm::Dial,
        2 => Algorithm::Spfa,
        3 => Algorithm::Pape,
        _ => return std::ptr::null_mut(),
    };

    match algorithm.run::<i64, _>(graph, source) {
        Ok(result) => {
            let dist_vec: Vec<i64> = result
                .distances()
                .iter()
                .map(|d| d.unwrap_or(i64::MAX))
                .collect();
            let pred_vec: Vec<size_t> = result
                .predecessors()
                .iter()
                .map(|p| p.unwrap_or(0))
                .collect();
            let len = dist_vec.len();
            let distances = Box::into_raw(dist_vec.into_boxed_slice()) as *mut i64;
            let predecessors = Box::into_raw(pred_vec.into_boxed_slice()) as *mut size_t;
            Box::into_raw(Box::new(FfiResult {
                distances,
                predecessors,
                len,
                relaxations: result.relaxation_count(),
                elapsed_nanos: result.elapsed().as_nanos() as u64,
            }))
        }
        Err(_) => std::ptr::null_mut(),
    }
}

/// # Safety
/// `res` must come from [`sssp_run`] and not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn sssp_result_free(res: *mut FfiResult) {
    if res.is_null() {
        return;
    }
    let res = Box::from_raw(res);
    if !res.distances.is_null() {
        drop(Box::from_raw(slice::from_raw_parts_mut(res.distances, res.len)));
    }
    if !res.predecessors.is_null() {
        drop(Box::from_raw(slice::from_raw_parts_mut(res.predecessors, res.len)));
    }
}

use crate::algorithm::Algorithm;
use crate::graph::{AdjacencyList, Arc, Graph};
use pyo3::prelude::*;

#[pyclass]
pub struct PyGraph {
    graph: AdjacencyList<i64>,
}

#[pymethods]
impl PyGraph {
    #[new]
    fn new(node_count: usize, arcs: Vec<(usize, usize, i64)>) -> PyResult<Self> {
        let arcs = arcs.into_iter().map(Arc::from).collect();
        let graph = AdjacencyList::build(node_count, arcs)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        Ok(PyGraph { graph })
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn arc_count(&self) -> usize {
        self.graph.arc_count()
    }

    /// Returns `(distances, predecessors, relaxations, elapsed_secs)`
    fn run(
        &self,
        algorithm: &str,
        source: usize,
    ) -> PyResult<(Vec<Option<i64>>, Vec<Option<usize>>, u64, f64)> {
        let algorithm: Algorithm = algorithm
            .parse()
            .map_err(|e: crate::Error| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        let result = algorithm
            .run::<i64, _>(&self.graph, source)
            .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))?;
        Ok((
            result.distances().to_vec(),
            result.predecessors().to_vec(),
            result.relaxation_count(),
            result.elapsed().as_secs_f64(),
        ))
    }
}

#[pymodule]
fn sssp_suite_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyGraph>()?;
    Ok(())
}

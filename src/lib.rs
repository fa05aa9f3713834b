
// Declare the library modules
pub mod common_types;
pub mod dataset;
pub mod error;
pub mod pairs;

pub use common_types::{IndexedPoint, PairCandidate, Point};
pub use error::{PairQueryError, Result};
pub use pairs::{
    BruteForceSelector, DivideAndConquerEngine, QueryConfig, ResultSet, SearchStrategy,
    TopKAccumulator, closest_k_pairs, closest_k_pairs_with_config,
};

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;

    use crate::common_types::Point;
    use crate::pairs::{self, SearchStrategy as RustSearchStrategy};

    /// Python-friendly representation of SearchStrategy
    #[pyclass(name = "SearchStrategy")]
    #[derive(Clone, Debug)]
    enum PySearchStrategy {
        BruteForce,
        DivideAndConquer,
    }

    impl From<PySearchStrategy> for RustSearchStrategy {
        fn from(val: PySearchStrategy) -> Self {
            match val {
                PySearchStrategy::BruteForce => RustSearchStrategy::BruteForce,
                PySearchStrategy::DivideAndConquer => RustSearchStrategy::DivideAndConquer,
            }
        }
    }

    /// Returns the `k` closest pairs as `((x1, y1), (x2, y2), distance)` tuples.
    #[pyfunction]
    #[pyo3(signature = (points, k, strategy = PySearchStrategy::DivideAndConquer))]
    fn closest_k_pairs(
        points: Vec<(i32, i32)>,
        k: usize,
        strategy: PySearchStrategy,
    ) -> PyResult<Vec<((i32, i32), (i32, i32), f64)>> {
        let points: Vec<Point> = points.into_iter().map(Point::from).collect();
        let result = pairs::closest_k_pairs(&points, k, strategy.into())
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(result.to_tuples())
    }

    /// A Python module implemented in Rust. The name of this function must match
    /// the `lib.name` in `Cargo.toml`.
    #[pymodule]
    fn closest_pairs(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(closest_k_pairs, m)?)?;
        m.add_class::<PySearchStrategy>()?;
        Ok(())
    }
}

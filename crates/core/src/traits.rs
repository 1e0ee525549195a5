use super::graph::GraphCsr;
use common::{
    error::Error,
    types::{DistanceReport, Route},
};

/// Trait for solvers computing single-source shortest distances with
/// negative-cycle detection.
pub trait DistanceSolver {
    /// Computes shortest distances from `source` to every node.
    ///
    /// Returns `Ok(report)` with the distance table and the negative-cycle
    /// flag, or `Err(e)` if the query is structurally invalid.
    fn shortest_distances(
        &self,
        graph: &GraphCsr,
        source: usize,
    ) -> Result<DistanceReport, Error>;
}

/// Trait for solvers computing a single source-to-target shortest path.
pub trait RouteSolver {
    /// Computes the shortest route from `source` to `target`.
    ///
    /// Returns `Ok(Some(route))` if the target is reachable,
    /// `Ok(None)` if it is not, or `Err(e)` on failure.
    fn shortest_route(
        &self,
        graph: &GraphCsr,
        source: usize,
        target: usize,
    ) -> Result<Option<Route>, Error>;
}

use super::graph::GraphCsr;
use super::traits::DistanceSolver;
use common::{error::Error, types::DistanceReport};

/// Solver implementing the Bellman-Ford algorithm for single-source shortest
/// distances and negative cycle detection.
pub struct BellmanFordSolver;

impl DistanceSolver for BellmanFordSolver {
    /// Computes shortest distances from `source` and reports whether a
    /// negative-weight cycle reachable from it exists.
    ///
    /// Runs exactly `num_nodes - 1` relaxation passes over the flat CSR edge
    /// arrays, every pass visiting every edge in the graph's fixed order.
    /// There is no early exit on a pass with no updates; the pass count is
    /// part of the contract, so two runs on the same graph always perform
    /// identical work. A final scan over all edges decides the cycle flag:
    /// an edge that can still be relaxed after `num_nodes - 1` passes proves
    /// a reachable negative cycle.
    ///
    /// Unreached nodes carry `None` rather than a large finite value, so a
    /// relaxation through an unreached node can never happen by accident.
    ///
    /// # Parameters
    /// - `graph`: The CSR data structure for fast edge traversal.
    /// - `source`: Starting node ID.
    ///
    /// # Returns
    /// - `Ok(report)` → distance table plus negative-cycle flag.
    /// - `Err(e)` → `source` is not a valid node index.
    fn shortest_distances(
        &self,
        graph: &GraphCsr,
        source: usize,
    ) -> Result<DistanceReport, Error> {
        if source >= graph.num_nodes {
            return Err(Error::NodeIndexOutOfBounds(source));
        }

        let num_nodes = graph.num_nodes;
        let num_edges = graph.num_edges();

        let mut distances: Vec<Option<i64>> = vec![None; num_nodes];
        distances[source] = Some(0);

        for _pass in 1..num_nodes {
            for i in 0..num_edges {
                let u = graph.edge_sources[i];
                let v = graph.edge_targets[i];
                let weight = graph.edge_weights[i];

                if let Some(dist_u) = distances[u] {
                    let candidate = dist_u + weight;
                    if distances[v].is_none_or(|dist_v| candidate < dist_v) {
                        distances[v] = Some(candidate);
                    }
                }
            }
        }

        // One more scan: any edge still relaxable proves a reachable
        // negative cycle.
        let mut has_negative_cycle = false;
        for i in 0..num_edges {
            let u = graph.edge_sources[i];
            let v = graph.edge_targets[i];
            let weight = graph.edge_weights[i];

            if let Some(dist_u) = distances[u] {
                if distances[v].is_none_or(|dist_v| dist_u + weight < dist_v) {
                    has_negative_cycle = true;
                    break;
                }
            }
        }

        Ok(DistanceReport {
            distances,
            has_negative_cycle,
        })
    }
}

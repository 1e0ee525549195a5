use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::graph::GraphCsr;
use super::traits::RouteSolver;
use common::{
    error::Error,
    types::Route,
};

/// Solver implementing Dijkstra's algorithm with a lazy-deletion binary heap
/// for single-source, single-target shortest paths over non-negative weights.
pub struct DijkstraSolver;

impl DijkstraSolver {
    /// Reconstructs the route after the distance table has been finalized.
    ///
    /// Relaxations record, per node, the CSR index of the predecessor edge.
    /// The route is recovered by walking those edges backwards from `target`
    /// until `source` appears, then reversing into source→target order.
    ///
    /// The walk is capped at `num_nodes` hops. A longer chain means the
    /// predecessor state is corrupt (a finalized route visits each node at
    /// most once), and the walk fails rather than looping.
    ///
    /// # Errors
    /// Returns `Error::PathReconstructionFailed` if a predecessor link is
    /// missing or the walk cannot terminate at `source`.
    fn reconstruct_route(
        &self,
        source: usize,
        target: usize,
        total_weight: i64,
        pred_edge_idx: &[Option<usize>],
        graph: &GraphCsr,
    ) -> Result<Route, Error> {
        let mut nodes = vec![target];
        let mut current = target;
        let mut hops = 0;

        while current != source {
            let edge_idx = pred_edge_idx[current].ok_or(Error::PathReconstructionFailed)?;
            current = graph.edge_source(edge_idx)?;
            nodes.push(current);

            hops += 1;
            if hops > graph.num_nodes {
                return Err(Error::PathReconstructionFailed);
            }
        }

        nodes.reverse();

        Ok(Route {
            nodes,
            total_weight,
        })
    }
}

impl RouteSolver for DijkstraSolver {
    /// Finds the shortest route from `source` to `target`.
    ///
    /// Classic lazy-deletion Dijkstra: the heap may hold several entries per
    /// node, and an entry whose distance exceeds the best known one at pop
    /// time is stale and skipped. Correctness rests on non-negative weights,
    /// which are validated up front — a negative weight fed to Dijkstra
    /// silently produces wrong distances, so the solver refuses it instead.
    ///
    /// The queue is drained fully; every reachable node is finalized whether
    /// or not it lies on the returned route.
    ///
    /// # Parameters
    /// - `graph`: The CSR data structure for fast edge traversal.
    /// - `source`: Starting node ID.
    /// - `target`: Goal node ID.
    ///
    /// # Returns
    /// - `Ok(Some(route))` → target reachable, shortest route returned.
    /// - `Ok(None)` → no path from `source` to `target`.
    /// - `Err(e)` → invalid node index or negative edge weight.
    fn shortest_route(
        &self,
        graph: &GraphCsr,
        source: usize,
        target: usize,
    ) -> Result<Option<Route>, Error> {
        let num_nodes = graph.num_nodes;
        if source >= num_nodes {
            return Err(Error::NodeIndexOutOfBounds(source));
        }
        if target >= num_nodes {
            return Err(Error::NodeIndexOutOfBounds(target));
        }

        for i in 0..graph.num_edges() {
            let weight = graph.edge_weights[i];
            if weight < 0 {
                return Err(Error::NegativeEdgeWeight {
                    source: graph.edge_sources[i],
                    target: graph.edge_targets[i],
                    weight,
                });
            }
        }

        let mut distances: Vec<Option<i64>> = vec![None; num_nodes];
        let mut pred_edge_idx: Vec<Option<usize>> = vec![None; num_nodes];

        distances[source] = Some(0);

        // Min-heap of (tentative distance, node).
        let mut queue = BinaryHeap::new();
        queue.push(Reverse((0i64, source)));

        while let Some(Reverse((dist_u, u))) = queue.pop() {
            let Some(best) = distances[u] else {
                continue;
            };
            if dist_u > best {
                continue; // Stale entry, a better one was already processed.
            }

            let start = graph.node_pointers[u];
            let end = graph.node_pointers[u + 1];

            // Traverse edges u -> v
            // 'i' is the CSR index of the edge (u,v)
            for i in start..end {
                let v = graph.edge_targets[i];
                let weight = graph.edge_weights[i];
                let candidate = dist_u + weight;

                if distances[v].is_none_or(|dist_v| candidate < dist_v) {
                    distances[v] = Some(candidate);
                    pred_edge_idx[v] = Some(i);
                    queue.push(Reverse((candidate, v)));
                }
            }
        }

        match distances[target] {
            None => Ok(None),
            Some(total_weight) => {
                let route =
                    self.reconstruct_route(source, target, total_weight, &pred_edge_idx, graph)?;
                Ok(Some(route))
            }
        }
    }
}

#[cfg(test)]
mod dijkstra_tests {
    use super::*;
    use common::types::Edge;

    fn build_graph(edges: &mut [Edge], num_nodes: usize) -> GraphCsr {
        GraphCsr::from_edges(num_nodes, edges).unwrap()
    }

    /// Inserts one edge per direction, the way the loader represents an
    /// undirected input edge.
    fn both_ways(edges: &[(usize, usize, i64)]) -> Vec<Edge> {
        edges
            .iter()
            .flat_map(|&(u, v, w)| [(u, v, w), (v, u, w)])
            .collect()
    }

    /// Re-sums the route by looking up the cheapest edge between each pair
    /// of consecutive nodes.
    fn resum_route(graph: &GraphCsr, route: &Route) -> i64 {
        route
            .nodes
            .windows(2)
            .map(|pair| {
                (0..graph.num_edges())
                    .filter(|&i| {
                        graph.edge_sources[i] == pair[0] && graph.edge_targets[i] == pair[1]
                    })
                    .map(|i| graph.edge_weights[i])
                    .min()
                    .expect("route uses an edge that exists")
            })
            .sum()
    }

    #[test]
    fn two_hop_route_on_undirected_chain() {
        // I-H and H-G at weight 1 each, nodes A..J otherwise isolated.
        // I = 8, H = 7, G = 6.
        let mut edges = both_ways(&[(8, 7, 1), (7, 6, 1)]);
        let graph = build_graph(&mut edges, 10);

        let route = DijkstraSolver
            .shortest_route(&graph, 8, 6)
            .unwrap()
            .expect("G is reachable from I");

        assert_eq!(route.total_weight, 2);
        assert_eq!(route.nodes, vec![8, 7, 6]);
        assert_eq!(route.hop_count(), 2);
    }

    #[test]
    fn unreachable_target_returns_none() {
        let mut edges = vec![(0, 1, 1)];
        let graph = build_graph(&mut edges, 3);

        let result = DijkstraSolver.shortest_route(&graph, 0, 2).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn cheaper_detour_beats_direct_edge() {
        // Direct 0 -> 1 costs 10; going through 2 costs 3.
        let mut edges = vec![(0, 1, 10), (0, 2, 1), (2, 1, 2)];
        let graph = build_graph(&mut edges, 3);

        let route = DijkstraSolver.shortest_route(&graph, 0, 1).unwrap().unwrap();

        assert_eq!(route.total_weight, 3);
        assert_eq!(route.nodes, vec![0, 2, 1]);
    }

    #[test]
    fn uniform_weights_reduce_to_hop_count() {
        // A 5-node path with every edge at weight 3.
        let mut edges = both_ways(&[(0, 1, 3), (1, 2, 3), (2, 3, 3), (3, 4, 3)]);
        let graph = build_graph(&mut edges, 5);

        let route = DijkstraSolver.shortest_route(&graph, 0, 4).unwrap().unwrap();

        assert_eq!(route.hop_count(), 4);
        assert_eq!(route.total_weight, 4 * 3);
    }

    #[test]
    fn route_weights_resum_to_reported_distance() {
        let mut edges = both_ways(&[
            (0, 1, 4),
            (0, 2, 1),
            (2, 1, 2),
            (1, 3, 5),
            (2, 3, 8),
            (3, 4, 3),
        ]);
        let graph = build_graph(&mut edges, 5);

        let route = DijkstraSolver.shortest_route(&graph, 0, 4).unwrap().unwrap();

        assert_eq!(resum_route(&graph, &route), route.total_weight);
    }

    #[test]
    fn source_equals_target_yields_empty_route() {
        let mut edges = vec![(0, 1, 1)];
        let graph = build_graph(&mut edges, 2);

        let route = DijkstraSolver.shortest_route(&graph, 0, 0).unwrap().unwrap();

        assert_eq!(route.total_weight, 0);
        assert_eq!(route.nodes, vec![0]);
        assert_eq!(route.hop_count(), 0);
    }

    #[test]
    fn negative_weight_is_rejected_up_front() {
        let mut edges = vec![(0, 1, 2), (1, 2, -3)];
        let graph = build_graph(&mut edges, 3);

        let result = DijkstraSolver.shortest_route(&graph, 0, 2);

        assert_eq!(
            result.unwrap_err(),
            Error::NegativeEdgeWeight {
                source: 1,
                target: 2,
                weight: -3
            }
        );
    }

    #[test]
    fn invalid_indices_are_rejected() {
        let mut edges = vec![(0, 1, 1)];
        let graph = build_graph(&mut edges, 2);

        assert_eq!(
            DijkstraSolver.shortest_route(&graph, 2, 0).unwrap_err(),
            Error::NodeIndexOutOfBounds(2)
        );
        assert_eq!(
            DijkstraSolver.shortest_route(&graph, 0, 9).unwrap_err(),
            Error::NodeIndexOutOfBounds(9)
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut edges = both_ways(&[(0, 1, 2), (1, 2, 2), (0, 2, 5), (2, 3, 1)]);
        let graph = build_graph(&mut edges, 4);

        let first = DijkstraSolver.shortest_route(&graph, 0, 3).unwrap();
        let second = DijkstraSolver.shortest_route(&graph, 0, 3).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn parallel_edges_use_the_cheaper_one() {
        let mut edges = vec![(0, 1, 9), (0, 1, 4)];
        let graph = build_graph(&mut edges, 2);

        let route = DijkstraSolver.shortest_route(&graph, 0, 1).unwrap().unwrap();

        assert_eq!(route.total_weight, 4);
    }

    #[test]
    fn large_grid_like_graph_finds_shortest() {
        // Two parallel corridors with a cheap crossover near the end.
        let n = 200;
        let mut edges: Vec<Edge> = Vec::new();
        for i in 0..n / 2 - 1 {
            edges.push((i, i + 1, 2)); // cheap corridor
            edges.push((n / 2 + i, n / 2 + i + 1, 1)); // cheaper corridor
        }
        edges.push((0, n / 2, 1)); // entry to the cheap corridor
        edges.push((n - 1, n / 2 - 1, 1)); // crossover back

        let graph = build_graph(&mut edges, n);
        let route = DijkstraSolver
            .shortest_route(&graph, 0, n / 2 - 1)
            .unwrap()
            .unwrap();

        // 1 (entry) + 99 hops at weight 1 + 1 (crossover) beats 99 hops at 2.
        assert_eq!(route.total_weight, 1 + (n as i64 / 2 - 1) + 1);
    }
}

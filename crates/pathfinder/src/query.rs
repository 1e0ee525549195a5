use pathfind_core::GraphCsr;
use pathfind_core::traits::{DistanceSolver, RouteSolver};

use super::error::Error;
use super::labels::LabelTable;

/// Runs a negative-cycle scan from a labeled start node and renders the
/// verdict plus the per-node distance table as printable lines.
pub struct CycleScan<S> {
    solver: S,
}

impl<S> CycleScan<S>
where
    S: DistanceSolver,
{
    pub fn new(solver: S) -> Self {
        CycleScan { solver }
    }

    pub fn run(
        &self,
        graph: &GraphCsr,
        labels: &LabelTable,
        start: &str,
    ) -> Result<Vec<String>, Error> {
        let source = labels.index(start)?;
        let report = self.solver.shortest_distances(graph, source)?;

        let mut lines = Vec::with_capacity(graph.num_nodes + 1);

        if report.has_negative_cycle {
            lines.push("Contains a negative cycle".to_string());
        } else {
            lines.push("Doesn't contain a negative cycle".to_string());
        }

        for node in 0..graph.num_nodes {
            let label = display_label(labels, node);
            let entry = match report.distance(node) {
                Some(d) => d.to_string(),
                None => "unreached".to_string(),
            };
            lines.push(format!("dist({}) = {}", label, entry));
        }

        Ok(lines)
    }
}

/// Resolves the start and goal labels, runs the route solver, and renders
/// the result lines in source→target order.
pub struct RouteSearch<S> {
    solver: S,
}

impl<S> RouteSearch<S>
where
    S: RouteSolver,
{
    pub fn new(solver: S) -> Self {
        RouteSearch { solver }
    }

    pub fn run(
        &self,
        graph: &GraphCsr,
        labels: &LabelTable,
        start: &str,
        goal: &str,
    ) -> Result<Vec<String>, Error> {
        let source = labels.index(start)?;
        let target = labels.index(goal)?;

        match self.solver.shortest_route(graph, source, target)? {
            Some(route) => {
                let path: Vec<String> = route
                    .nodes
                    .iter()
                    .map(|&node| display_label(labels, node))
                    .collect();

                Ok(vec![
                    format!(
                        "Minimum cost from {} to {} = {}",
                        start, goal, route.total_weight
                    ),
                    format!("Path: {}", path.join(" -> ")),
                ])
            }
            None => Ok(vec![format!("No path found from {} to {}", start, goal)]),
        }
    }
}

/// Falls back to the bare index for nodes beyond the label table, which can
/// only happen when the input header declares more nodes than labels exist.
fn display_label(labels: &LabelTable, node: usize) -> String {
    labels
        .label(node)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", node))
}

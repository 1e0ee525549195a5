use common::error::Error;
use common::types::Edge;

/// Graph in Compressed Sparse Row (CSR) format for fast graph traversal.
///
/// CSR format stores outgoing edges of each node contiguously in memory:
/// - `node_pointers[u]..node_pointers[u+1]` → edges from node `u`
/// - `edge_targets[i]` -> target node of edge `i`
/// - `edge_weights[i]` -> weight of edge `i`
/// - `edge_sources[i]` -> source node of edge `i`
///
/// The flat edge arrays double as the fixed-order edge list consumed by the
/// relaxation-pass solver, while `node_pointers` gives the adjacency view
/// consumed by the priority-queue solver. The structure is immutable once
/// built; solvers never modify it, so one graph can serve any number of
/// queries.
#[derive(Debug, Clone)]
pub struct GraphCsr {
    pub num_nodes: usize,
    pub node_pointers: Vec<usize>,
    pub edge_targets: Vec<usize>,
    pub edge_weights: Vec<i64>,
    pub edge_sources: Vec<usize>,
}

impl GraphCsr {
    /// Creates a new CSR graph from a list of edges `(src, dst, weight)`.
    ///
    /// Edges are stored sorted by source node to ensure contiguous blocks
    /// for each node and fast traversal. The relative order of edges within
    /// one source block follows the input order, so the flat edge order is
    /// fully determined by the input.
    ///
    /// # Arguments
    /// - `num_nodes`: total number of nodes (graph indices: 0..num_nodes-1)
    /// - `edges`: slice of `(src, dst, weight)` tuples
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` if any edge endpoint is not a
    /// valid node index.
    pub fn from_edges(num_nodes: usize, edges: &mut [Edge]) -> Result<Self, Error> {
        for &(u, v, _) in edges.iter() {
            if u >= num_nodes {
                return Err(Error::NodeIndexOutOfBounds(u));
            }
            if v >= num_nodes {
                return Err(Error::NodeIndexOutOfBounds(v));
            }
        }

        edges.sort_by_key(|(src, _, _)| *src);

        let (node_pointers, edge_targets, edge_weights, edge_sources) =
            Self::build_csr_from_edges(num_nodes, edges);

        Ok(Self {
            num_nodes,
            node_pointers,
            edge_targets,
            edge_weights,
            edge_sources,
        })
    }

    /// Internal helper to construct all necessary arrays for the Compressed Sparse Row (CSR) format.
    ///
    /// Uses the two-pass counting technique: one pass to count the out-degree
    /// of each node, a prefix sum to turn counts into offsets, and a final
    /// pass that scatters each edge into its block.
    ///
    /// # Returns
    /// A tuple containing the four core arrays:
    /// 1. `node_pointers`: Stores the starting index of each node’s outgoing edges
    ///    in the flattened edge arrays (size |V| + 1).
    /// 2. `edge_targets`: Stores the destination node `v` for each edge.
    /// 3. `edge_weights`: Stores the weight of each edge, exactly as given.
    /// 4. `edge_sources`: Maps each edge index back to its source node `u`,
    ///    enabling O(1) reverse lookups during route reconstruction without a
    ///    binary search over `node_pointers`.
    fn build_csr_from_edges(
        num_nodes: usize,
        edges: &[Edge],
    ) -> (Vec<usize>, Vec<usize>, Vec<i64>, Vec<usize>) {
        let m = edges.len();
        let mut node_pointers = vec![0; num_nodes + 1];

        for &(u, _, _) in edges {
            node_pointers[u + 1] += 1;
        }

        for i in 1..=num_nodes {
            node_pointers[i] += node_pointers[i - 1];
        }

        let mut edge_targets = vec![0; m];
        let mut edge_weights = vec![0i64; m];
        let mut edge_sources = vec![0; m];

        let mut cursor = node_pointers.clone();

        for &(u, v, weight) in edges {
            let pos = cursor[u]; // Get the next available position for node 'u'
            edge_weights[pos] = weight;
            edge_targets[pos] = v;
            edge_sources[pos] = u;

            // Advance the cursor for node 'u' to point to the next free slot.
            cursor[u] += 1;
        }

        (node_pointers, edge_targets, edge_weights, edge_sources)
    }

    /// Number of directed edges stored in the graph.
    pub fn num_edges(&self) -> usize {
        self.edge_targets.len()
    }

    /// O(1) lookup for the source node of a given edge index.
    ///
    /// # Errors
    /// Returns `Error::PathReconstructionFailed` if `edge_idx` is out of bounds.
    pub fn edge_source(&self, edge_idx: usize) -> Result<usize, Error> {
        self.edge_sources
            .get(edge_idx)
            .copied()
            .ok_or(Error::PathReconstructionFailed)
    }
}

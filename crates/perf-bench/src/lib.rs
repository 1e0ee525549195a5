// ----------------------------
// Benchmark Layouts
// ----------------------------

/// Array of Structs (AoS) - Individual edge data is contiguous.
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

pub type EdgeAOS = Vec<Edge>;

/// Struct of Arrays (SoA) - All fields of the same type are contiguous.
pub struct EdgeSOA {
    pub from: Vec<usize>,
    pub to: Vec<usize>,
    pub weight: Vec<i64>,
}

impl From<EdgeAOS> for EdgeSOA {
    fn from(aos: EdgeAOS) -> Self {
        let mut from = Vec::with_capacity(aos.len());
        let mut to = Vec::with_capacity(aos.len());
        let mut weight = Vec::with_capacity(aos.len());
        for edge in aos {
            from.push(edge.from);
            to.push(edge.to);
            weight.push(edge.weight);
        }
        EdgeSOA { from, to, weight }
    }
}

impl From<EdgeSOA> for EdgeAOS {
    fn from(soa: EdgeSOA) -> Self {
        soa.from
            .into_iter()
            .zip(soa.to)
            .zip(soa.weight)
            .map(|((from, to), weight)| Edge { from, to, weight })
            .collect()
    }
}

pub const NUM_EDGES: usize = 100_000;

/// Tentative distance at the tail of every candidate edge, standing in for
/// the `dist[u]` read of a real relaxation pass.
pub const TAIL_DISTANCE: i64 = 1_000_000;

/// Generates a vector of edges in the Array of Structs (AoS) format.
///
/// The weight is varied by index to ensure the compiler cannot optimize
/// away the scan during benchmarking
pub fn generate_benchmark_edges_aos() -> EdgeAOS {
    (0..NUM_EDGES)
        .map(|i| Edge {
            from: i,
            to: i + 1,
            // Weight cycles through a small prime-sized range for variety
            weight: 1 + (i as i64 % 97),
        })
        .collect()
}

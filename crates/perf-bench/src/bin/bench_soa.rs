use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;

fn main() {
    let soa_data: EdgeSOA = generate_benchmark_edges_aos().into();

    let start_time = Instant::now();
    let mut checksum: i64 = 0;

    // This loop only accesses the contiguous 'weight' vector, maximizing cache efficiency.
    for w in soa_data.weight {
        let candidate = TAIL_DISTANCE + w;
        checksum += candidate;
    }

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!("--- SoA Benchmark Results ({} Edges) ---", NUM_EDGES);
    println!("Checksum: {}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}

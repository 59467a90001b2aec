//! Kitbag demo & micro-benchmark
//!
//! Konfigurasi lewat env (`KITBAG_*`) atau argumen CLI:
//!   cargo run --release -- --iterations=1000000 --capacity=4096 --verbose

use kitbag::core::{BoundedQueue, RingBuffer};
use kitbag::{logging, LTree, ProcessVars};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Demo configuration
struct DemoConfig {
    iterations: usize,
    capacity: usize,
    batch: usize,
    verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            capacity: 65536,
            batch: 16,
            verbose: false,
        }
    }
}

impl DemoConfig {
    fn from_process() -> Self {
        let vars = ProcessVars::from_process("KITBAG");
        let defaults = Self::default();

        Self {
            iterations: vars.get("iterations", defaults.iterations).max(1),
            capacity: vars.get("capacity", defaults.capacity),
            batch: vars.get("batch", defaults.batch).max(1),
            verbose: vars.get("verbose", defaults.verbose),
        }
    }
}

fn main() {
    let config = DemoConfig::from_process();
    logging::init(config.verbose);

    println!("🧰 Kitbag Utility Toolkit");
    println!("=========================\n");
    info!(
        iterations = config.iterations,
        capacity = config.capacity,
        batch = config.batch,
        "starting benchmarks"
    );

    benchmark_ring_buffer(&config);
    benchmark_bounded_queue(&config);
    demo_ltree();

    println!("\n✅ All benchmarks complete!");
}

fn per_op_ns(duration: Duration, ops: usize) -> f64 {
    duration.as_nanos() as f64 / ops as f64
}

fn benchmark_ring_buffer(config: &DemoConfig) {
    println!("📊 Ring Buffer Benchmark (overwrite-oldest)");
    println!("-------------------------------------------");

    let mut rb: RingBuffer<u64> = RingBuffer::new(config.capacity);

    // Warm up
    rb.push(0..1000);
    rb.reset();

    let start = Instant::now();
    for i in 0..config.iterations {
        rb.push_one(i as u64);
    }
    let push_duration = start.elapsed();
    debug!(len = rb.len(), oldest = ?rb.oldest(), youngest = ?rb.youngest(), "ring after push");

    let batch: Vec<u64> = (0..config.batch as u64).collect();
    let rounds = (config.iterations / config.batch).max(1);
    let start = Instant::now();
    for _ in 0..rounds {
        rb.extend_from_slice(&batch);
    }
    let batch_duration = start.elapsed();

    let push_ns = per_op_ns(push_duration, config.iterations);
    let batch_ns = per_op_ns(batch_duration, rounds * config.batch);

    println!("  Capacity:       {}", rb.capacity());
    println!("  Operations:     {}", config.iterations);
    println!(
        "  Push latency:   {:.2} ns/op ({:.3} μs/op)",
        push_ns,
        push_ns / 1000.0
    );
    println!(
        "  Batch latency:  {:.2} ns/item (batch of {})",
        batch_ns, config.batch
    );
    println!(
        "  Throughput:     {:.2} M ops/sec\n",
        config.iterations as f64 / push_duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_bounded_queue(config: &DemoConfig) {
    println!("📊 Bounded Queue Benchmark (mutex-guarded FIFO)");
    println!("-----------------------------------------------");

    let queue: BoundedQueue<u64> = BoundedQueue::new(config.capacity);
    let rounds = (config.iterations / config.batch).max(1);

    let mut displaced = 0usize;
    let start = Instant::now();
    for round in 0..rounds {
        let base = (round * config.batch) as u64;
        displaced += queue.push(base..base + config.batch as u64);
    }
    let push_duration = start.elapsed();

    let mut popped = 0usize;
    let start = Instant::now();
    while !queue.is_empty() {
        popped += queue.pop(config.batch).len();
    }
    let pop_duration = start.elapsed();

    let push_ns = per_op_ns(push_duration, rounds * config.batch);
    let pop_ns = per_op_ns(pop_duration, popped.max(1));

    println!("  Capacity:       {}", queue.capacity());
    println!("  Pushed:         {} (displaced {})", rounds * config.batch, displaced);
    println!("  Push latency:   {:.2} ns/item", push_ns);
    println!("  Pop latency:    {:.2} ns/item ({} items)\n", pop_ns, popped);
}

fn demo_ltree() {
    println!("🌲 L-Tree Matching");
    println!("------------------");

    let tree = LTree::new(["Org", "Platform", "Queue"]);
    for query in ["org.*", "org.platform.queue", "org.*.ring", "*"] {
        println!("  {:<20} matches {:<22} -> {}", query, tree.as_str(), tree.matches(query));
    }
}

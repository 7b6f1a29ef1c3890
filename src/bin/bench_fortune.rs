//! Benchmark r2-voronoi on random site sets.
//!
//! Run with: cargo run --release --features bench --bin bench_fortune
//!
//! Usage:
//!   bench_fortune                Run default size (10k)
//!   bench_fortune 1k 10k 50k     Run multiple sizes
//!   bench_fortune --grid         Use jittered grid sites
//!   bench_fortune -n 10          Run 10 iterations (for profiling)
//!   bench_fortune 20 --print     Dump edges, vertices and largest circles
//!
//! For phase timing, add the `timing` feature and set `RUST_LOG=info`.

use clap::Parser;
use r2_voronoi::validation::validate;
use r2_voronoi::{Point2, VoronoiConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::time::Instant;

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('m') {
        (stripped, 1_000_000)
    } else if let Some(stripped) = s.strip_suffix('k') {
        (stripped, 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

#[derive(Parser)]
#[command(name = "bench_fortune")]
#[command(about = "Benchmark r2-voronoi at various scales")]
struct Args {
    /// Site counts to benchmark (e.g., 500, 10k, 0.1m)
    #[arg(value_parser = parse_count)]
    sizes: Vec<usize>,

    /// Random seed
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Use jittered grid sites instead of uniform random sites
    #[arg(long)]
    grid: bool,

    /// Side length of the square the sites are drawn from
    #[arg(long, default_value_t = 1000.0)]
    extent: f64,

    /// Validate each diagram (vertex bound and empty-circle property)
    #[arg(long)]
    validate: bool,

    /// Print edges, vertices and largest circles (intended for small inputs)
    #[arg(long)]
    print: bool,

    /// Number of iterations to run (useful for profiling)
    #[arg(short = 'n', long, default_value_t = 1)]
    repeat: usize,
}

fn generate_sites(n: usize, seed: u64, extent: f64, grid: bool) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    if !grid {
        return (0..n)
            .map(|_| Point2::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)))
            .collect();
    }

    let side = (n as f64).sqrt().ceil().max(1.0) as usize;
    let spacing = extent / side as f64;
    let jitter = spacing * 0.25;
    (0..n)
        .map(|i| {
            let (gx, gy) = ((i % side) as f64, (i / side) as f64);
            Point2::new(
                (gx + 0.5) * spacing + rng.gen_range(-jitter..jitter),
                (gy + 0.5) * spacing + rng.gen_range(-jitter..jitter),
            )
        })
        .collect()
}

fn format_rate(count: usize, ms: f64) -> String {
    if ms <= 0.0 {
        return "N/A".to_string();
    }
    let per_sec = count as f64 / (ms / 1000.0);
    if per_sec >= 1_000_000.0 {
        format!("{:.2}M/s", per_sec / 1_000_000.0)
    } else if per_sec >= 1_000.0 {
        format!("{:.1}k/s", per_sec / 1000.0)
    } else {
        format!("{:.0}/s", per_sec)
    }
}

fn format_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}k", n / 1_000)
    } else {
        format!("{}", n)
    }
}

struct BenchResult {
    n: usize,
    time_ms: f64,
    num_vertices: usize,
    num_edges: usize,
}

fn run_benchmark(sites: &[Point2], args: &Args) -> BenchResult {
    let n = sites.len();

    let t0 = Instant::now();
    let output = r2_voronoi::compute_with(sites, VoronoiConfig::default())
        .expect("r2-voronoi should succeed");
    let time_ms = t0.elapsed().as_secs_f64() * 1000.0;

    if args.validate {
        let report = validate(&output.diagram);
        if report.is_valid() {
            println!("  Validation:    {}", report.summary());
        } else {
            log::warn!("validation failed for n={}: {}", n, report);
        }
    }
    if !output.diagnostics.is_clean() {
        println!("  Diagnostics:   {:?}", output.diagnostics);
    }

    if args.print {
        println!("Edges:");
        for (x1, y1, x2, y2) in output.diagram.edge_tuples() {
            println!("  {} {} {} {}", x1, y1, x2, y2);
        }
        println!("Vertices: {:?}", output.diagram.vertex_pairs());
        let circles: Vec<_> = output
            .largest_circles()
            .into_iter()
            .map(|c| c.to_tuple())
            .collect();
        println!("Largest circles: {:?}", circles);
    }

    BenchResult {
        n,
        time_ms,
        num_vertices: output.diagram.num_vertices(),
        num_edges: output.diagram.num_edges(),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("r2-voronoi Benchmark");
    println!("====================\n");

    let sizes: Vec<usize> = if args.sizes.is_empty() {
        vec![10_000]
    } else {
        args.sizes.clone()
    };

    println!("Configuration:");
    println!("  seed = {}", args.seed);
    println!(
        "  site type = {}",
        if args.grid { "jittered grid" } else { "uniform" }
    );
    println!(
        "  sizes = {:?}",
        sizes.iter().map(|&n| format_num(n)).collect::<Vec<_>>()
    );
    if args.repeat > 1 {
        println!("  repeat = {}", args.repeat);
    }

    let mut results: Vec<BenchResult> = Vec::new();

    for &n in &sizes {
        println!("\n{}", "=".repeat(60));
        println!("Benchmarking n = {}", format_num(n));
        println!("{}", "=".repeat(60));

        let sites = generate_sites(n, args.seed, args.extent, args.grid);

        let mut times: Vec<f64> = Vec::with_capacity(args.repeat);
        let mut last_result: Option<BenchResult> = None;

        for iter in 0..args.repeat.max(1) {
            if args.repeat > 1 {
                print!("  Iteration {}/{}... ", iter + 1, args.repeat);
                let _ = io::stdout().flush();
            }

            let result = run_benchmark(&sites, &args);
            times.push(result.time_ms);

            if args.repeat > 1 {
                println!("{:.1}ms", result.time_ms);
            }
            last_result = Some(result);
        }

        let Some(result) = last_result else {
            continue;
        };

        println!("\nResults:");
        if args.repeat > 1 {
            let min = times.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = times.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let avg = times.iter().sum::<f64>() / times.len() as f64;
            println!("  Min time:      {:>8.1}ms", min);
            println!("  Max time:      {:>8.1}ms", max);
            println!("  Avg time:      {:>8.1}ms", avg);
            println!("  Throughput:    {:>8} (avg)", format_rate(result.n, avg));
        } else {
            println!("  Total time:    {:>8.1}ms", result.time_ms);
            println!(
                "  Throughput:    {:>8}",
                format_rate(result.n, result.time_ms)
            );
        }
        println!("  Vertices:      {:>8}", format_num(result.num_vertices));
        println!("  Edges:         {:>8}", format_num(result.num_edges));

        results.push(result);
    }

    if results.len() > 1 {
        println!("\n\n{}", "=".repeat(60));
        println!("SUMMARY");
        println!("{}", "=".repeat(60));
        println!(
            "{:>10} | {:>10} | {:>12} | {:>10}",
            "n", "time", "throughput", "verts"
        );
        println!("{:-<10}-+-{:-<10}-+-{:-<12}-+-{:-<10}", "", "", "", "");

        for r in &results {
            println!(
                "{:>10} | {:>9.1}ms | {:>12} | {:>10}",
                format_num(r.n),
                r.time_ms,
                format_rate(r.n, r.time_ms),
                format_num(r.num_vertices)
            );
        }
    }

    println!("\nBenchmark complete.");
}

use std::fs;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rayon::prelude::*;

use connectivity::Algorithm;
use connectivity_bench::catalog::{self, Category};
use connectivity_bench::metrics;
use connectivity_bench::report::{self, FullReport, WorkloadReport};
use connectivity_bench::workload::{self, Shape, Workload};

#[derive(Parser)]
#[command(name = "connectivity-bench", about = "Union-find workload harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run workloads and output results.
    Run {
        /// Filter by category name.
        #[arg(long)]
        category: Option<String>,
        /// Filter by workload name pattern (substring match).
        #[arg(long)]
        workload: Option<String>,
        /// Run only this algorithm (default: all three).
        #[arg(long)]
        algorithm: Option<String>,
        /// Extra workloads from a TOML file of [[workload]] tables.
        #[arg(long)]
        workloads: Option<String>,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
        /// Only show failures.
        #[arg(long)]
        quiet: bool,
    },
    /// List available workloads.
    List {
        /// Filter by category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Run all workloads and exit with code 1 on any failure.
    Regression {
        /// Filter by category.
        #[arg(long)]
        category: Option<String>,
        /// Extra workloads from a TOML file of [[workload]] tables.
        #[arg(long)]
        workloads: Option<String>,
    },
    /// Run a single generated workload with custom parameters.
    Explore {
        /// Number of elements.
        #[arg(long, default_value_t = 1024)]
        size: usize,
        /// Pair shape: random, chain, star, halving, redundant.
        #[arg(long, default_value = "random")]
        shape: String,
        /// Number of random pairs (random shape only).
        #[arg(long, default_value_t = 1024)]
        unions: usize,
        /// Random seed (random shape only).
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            category,
            workload,
            algorithm,
            workloads,
            format,
            quiet,
        } => cmd_run(category, workload, algorithm, workloads, &format, quiet),
        Command::List { category } => cmd_list(category),
        Command::Regression {
            category,
            workloads,
        } => cmd_regression(category, workloads),
        Command::Explore {
            size,
            shape,
            unions,
            seed,
            format,
        } => cmd_explore(size, &shape, unions, seed, &format),
    }
}

fn filter_workloads(
    category: Option<String>,
    pattern: Option<String>,
    extra: Option<String>,
) -> Result<Vec<Workload>> {
    let mut workloads = catalog::all_workloads();

    if let Some(path) = &extra {
        let text =
            fs::read_to_string(path).with_context(|| format!("failed to read workloads: {path}"))?;
        let custom = workload::parse_workloads(&text)
            .with_context(|| format!("failed to parse workloads: {path}"))?;
        info!("loaded {} workloads from {path}", custom.len());
        workloads.extend(custom);
    }

    if let Some(cat_name) = &category {
        let cat = Category::from_name(cat_name)
            .with_context(|| format!("unknown category: {cat_name}"))?;
        workloads.retain(|w| Category::of(w) == cat);
    }

    if let Some(pattern) = &pattern {
        workloads.retain(|w| w.name.contains(pattern.as_str()));
    }

    Ok(workloads)
}

/// Evaluate workloads in parallel; each run owns its own structure.
fn run_workloads(workloads: &[Workload], algorithms: &[Algorithm]) -> Vec<WorkloadReport> {
    workloads
        .par_iter()
        .map(|w| {
            debug!("running {} ({} elements)", w.name, w.len);
            report::workload_report(w, metrics::evaluate(w, algorithms))
        })
        .collect()
}

fn cmd_run(
    category: Option<String>,
    pattern: Option<String>,
    algorithm: Option<String>,
    extra: Option<String>,
    format: &str,
    quiet: bool,
) -> Result<()> {
    let workloads = filter_workloads(category, pattern, extra)?;
    let algorithms = match &algorithm {
        Some(name) => vec![name.parse::<Algorithm>()?],
        None => Algorithm::all().to_vec(),
    };

    let mut reports = run_workloads(&workloads, &algorithms);
    if quiet {
        reports.retain(|r| !r.passed);
    }

    let full = FullReport::from_workloads(reports);
    match format {
        "json" => println!("{}", report::to_json(&full)),
        _ => report::print_terminal(&full),
    }
    Ok(())
}

fn cmd_list(category: Option<String>) -> Result<()> {
    let workloads = filter_workloads(category, None, None)?;
    println!("{:<24} {:<10} {:>6} Description", "Name", "Category", "Size");
    println!("{}", "-".repeat(80));
    for w in &workloads {
        println!(
            "{:<24} {:<10} {:>6} {}",
            w.name,
            w.shape.kind(),
            w.len,
            w.description
        );
    }
    println!("\nTotal: {} workloads", workloads.len());
    Ok(())
}

fn cmd_regression(category: Option<String>, extra: Option<String>) -> Result<()> {
    let workloads = filter_workloads(category, None, extra)?;
    let full = FullReport::from_workloads(run_workloads(&workloads, Algorithm::all()));
    report::print_terminal(&full);

    if !full.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_explore(size: usize, shape_name: &str, unions: usize, seed: u64, format: &str) -> Result<()> {
    if size == 0 {
        bail!("--size must be at least 1");
    }
    let shape = match shape_name {
        "random" => Shape::Random { unions, seed },
        "chain" => Shape::Chain,
        "star" => Shape::Star,
        "halving" => Shape::Halving,
        "redundant" => Shape::Redundant,
        other => bail!("unknown shape: {other}"),
    };
    let w = Workload::new("explore", "", size, shape);
    let r = report::workload_report(&w, metrics::evaluate(&w, Algorithm::all()));

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&r)?),
        _ => {
            println!(
                "Workload: {} pairs over {} elements ({})",
                r.unions, size, shape_name
            );
            println!("Weighted height bound: {}", metrics::ceil_log2(size));
            println!();
            for run in &r.runs {
                println!(
                    "  {:<21} components={} merges={} height={} mean_depth={:.2} find_hops={} time={:.1} ms",
                    run.algorithm.name(),
                    run.components,
                    run.merges,
                    run.height,
                    run.mean_depth,
                    run.find_hops,
                    run.union_time_us as f64 / 1000.0
                );
            }
            for failure in &r.failures {
                println!("  ! {failure}");
            }
        }
    }
    Ok(())
}

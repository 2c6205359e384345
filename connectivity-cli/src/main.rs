use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use connectivity::{Algorithm, Applied, DynamicConnectivity, PairStream};

/// Apply `N` + `p q` pair streams with a union-find and report connectivity
#[derive(Parser)]
#[command(name = "connectivity", version)]
struct Args {
    /// Input files in pair-stream format ("-" or none reads stdin)
    inputs: Vec<String>,

    /// Union-find algorithm: quick-find (qf), quick-union (qu),
    /// weighted-quick-union (wqu)
    #[arg(short, long, default_value = "weighted-quick-union")]
    algorithm: String,

    /// Output format: terminal, json
    #[arg(long, default_value = "terminal")]
    format: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Serialize)]
struct OutputResult {
    file: String,
    algorithm: Algorithm,
    len: usize,
    unions: usize,
    new_connections: Vec<[usize; 2]>,
    components: usize,
    height: usize,
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read input: {path}"))
    }
}

fn summarize(file: &str, stream: &PairStream, applied: &Applied) -> OutputResult {
    OutputResult {
        file: file.to_string(),
        algorithm: applied.sequence.algorithm(),
        len: stream.len,
        unions: stream.pairs.len(),
        new_connections: applied
            .new_connections
            .iter()
            .map(|&(p, q)| [p, q])
            .collect(),
        components: applied.sequence.component_count(),
        height: applied.sequence.height(),
    }
}

fn print_terminal(result: &OutputResult) {
    for [p, q] in &result.new_connections {
        println!("{p} {q}");
    }
    println!("{} components", result.components);
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let algorithm: Algorithm = args.algorithm.parse()?;
    let inputs = if args.inputs.is_empty() {
        vec!["-".to_string()]
    } else {
        args.inputs.clone()
    };

    for path in &inputs {
        let text = read_input(path)?;
        let stream =
            PairStream::parse(&text).with_context(|| format!("invalid pair stream: {path}"))?;

        if !args.quiet {
            eprintln!(
                "applying {} pairs over {} elements from {path} ({algorithm})",
                stream.pairs.len(),
                stream.len
            );
        }

        let applied = stream
            .apply(algorithm)
            .with_context(|| format!("failed to apply pair stream: {path}"))?;
        debug!("{path}: {} new connections", applied.new_connections.len());

        let result = summarize(path, &stream, &applied);
        match args.format.as_str() {
            "json" => {
                let json = if args.pretty {
                    serde_json::to_string_pretty(&result)?
                } else {
                    serde_json::to_string(&result)?
                };
                println!("{json}");
            }
            _ => print_terminal(&result),
        }
        info!("{path}: {} components, height {}", result.components, result.height);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_counts() {
        let stream = PairStream::parse("4\n0 1\n1 0\n2 3\n").unwrap();
        let applied = stream.apply(Algorithm::QuickFind).unwrap();
        let result = summarize("x", &stream, &applied);
        assert_eq!(result.unions, 3);
        assert_eq!(result.new_connections, vec![[0, 1], [2, 3]]);
        assert_eq!(result.components, 2);
        assert_eq!(result.height, 1);
    }

    #[test]
    fn json_names_algorithm() {
        let stream = PairStream::parse("2\n0 1\n").unwrap();
        let applied = stream.apply(Algorithm::QuickUnion).unwrap();
        let json = serde_json::to_value(summarize("x", &stream, &applied)).unwrap();
        assert_eq!(json["algorithm"], "quick-union");
        assert_eq!(json["components"], 1);
    }

    #[test]
    fn args_parse_defaults() {
        let args = Args::parse_from(["connectivity"]);
        assert!(args.inputs.is_empty());
        assert_eq!(args.algorithm, "weighted-quick-union");
        assert_eq!(args.format, "terminal");
    }
}

/// Structural and cost metrics for one algorithm over one workload.
use std::time::Instant;

use connectivity::{Algorithm, DynamicConnectivity, Sequence};
use serde::{Deserialize, Serialize};

use crate::workload::Workload;

/// Result of running a single algorithm over a workload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub algorithm: Algorithm,
    /// Pairs that joined two different components.
    pub merges: usize,
    pub components: usize,
    /// Largest element-to-root distance in the final forest.
    pub height: usize,
    /// Mean element-to-root distance in the final forest.
    pub mean_depth: f64,
    /// Parent hops taken by the root lookups of every union.
    pub find_hops: u64,
    /// Wall time of the union loop in microseconds.
    pub union_time_us: u64,
    /// Final partition in canonical form, used for cross-variant checks.
    #[serde(skip)]
    pub partition: Vec<Vec<usize>>,
}

/// Apply `pairs` to a fresh structure, timing the union loop alone.
pub fn run(algorithm: Algorithm, len: usize, pairs: &[(usize, usize)]) -> RunResult {
    let mut seq = Sequence::new(algorithm, len);
    let mut merges = 0;
    let start = Instant::now();
    for &(p, q) in pairs {
        if seq.merge(p, q) {
            merges += 1;
        }
    }
    let union_time_us = start.elapsed().as_micros() as u64;

    let find_hops = count_find_hops(algorithm, len, pairs);
    let depths: Vec<usize> = (0..len).map(|e| seq.depth(e)).collect();
    let height = depths.iter().copied().max().unwrap_or(0);
    let mean_depth = if len == 0 {
        0.0
    } else {
        depths.iter().sum::<usize>() as f64 / len as f64
    };

    RunResult {
        algorithm,
        merges,
        components: seq.component_count(),
        height,
        mean_depth,
        find_hops,
        union_time_us,
        partition: seq.components(),
    }
}

/// Replay `pairs`, summing the depth of both ids before each union.
///
/// Kept out of the timed loop so that measuring does not skew the timing.
fn count_find_hops(algorithm: Algorithm, len: usize, pairs: &[(usize, usize)]) -> u64 {
    let mut seq = Sequence::new(algorithm, len);
    let mut hops = 0u64;
    for &(p, q) in pairs {
        hops += (seq.depth(p) + seq.depth(q)) as u64;
        seq.merge(p, q);
    }
    hops
}

/// Run every algorithm over the workload.
pub fn evaluate(workload: &Workload, algorithms: &[Algorithm]) -> Vec<RunResult> {
    let pairs = workload.pairs();
    algorithms
        .iter()
        .map(|&alg| run(alg, workload.len, &pairs))
        .collect()
}

/// Smallest `h` with `2^h >= n`, the weighted quick-union height bound.
pub fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

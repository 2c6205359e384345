/// Report generation: checks, terminal and JSON output for workload runs.
use connectivity::Algorithm;

use crate::metrics::{ceil_log2, RunResult};
use crate::workload::Workload;

/// Summary of one workload across the algorithms that ran it.
#[derive(Debug, serde::Serialize)]
pub struct WorkloadReport {
    pub name: String,
    pub category: String,
    pub len: usize,
    pub unions: usize,
    pub passed: bool,
    /// Human-readable reasons for failure, empty when passed.
    pub failures: Vec<String>,
    pub runs: Vec<RunResult>,
}

/// Full report across all workloads.
#[derive(Debug, serde::Serialize)]
pub struct FullReport {
    pub workloads: Vec<WorkloadReport>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl FullReport {
    pub fn from_workloads(workloads: Vec<WorkloadReport>) -> Self {
        let total = workloads.len();
        let passed = workloads.iter().filter(|w| w.passed).count();
        let failed = total - passed;
        Self {
            workloads,
            total,
            passed,
            failed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Check the runs of one workload and build its report.
///
/// A workload passes when all runs produce the same partition, the weighted
/// variant stays within its height bound, and the component count matches the
/// workload's expectation if it has one.
pub fn workload_report(workload: &Workload, runs: Vec<RunResult>) -> WorkloadReport {
    let mut failures = Vec::new();

    if let Some((first, rest)) = runs.split_first() {
        for other in rest {
            if other.partition != first.partition {
                failures.push(format!(
                    "{} and {} disagree on the partition",
                    first.algorithm, other.algorithm
                ));
            }
        }
    }

    let bound = ceil_log2(workload.len);
    for r in runs.iter().filter(|r| r.algorithm == Algorithm::QuickUnionW) {
        if r.height > bound {
            failures.push(format!("{} height {} exceeds {bound}", r.algorithm, r.height));
        }
    }

    if let Some(expected) = workload.expected_components() {
        for r in runs.iter().filter(|r| r.components != expected) {
            failures.push(format!(
                "{} ended with {} components, expected {expected}",
                r.algorithm, r.components
            ));
        }
    }

    WorkloadReport {
        name: workload.name.clone(),
        category: workload.shape.kind().to_string(),
        len: workload.len,
        unions: workload.pairs().len(),
        passed: failures.is_empty(),
        failures,
        runs,
    }
}

/// Print a terminal table summarizing results, one row per run.
pub fn print_terminal(report: &FullReport) {
    println!(
        "{:<24} {:<21} {:>7} {:>6} {:>8} {:>11} {:>10} {:>6}",
        "Workload", "Algorithm", "Comps", "Height", "AvgDepth", "FindHops", "Time(us)", "Status"
    );
    println!("{}", "-".repeat(100));

    for w in &report.workloads {
        let status = if w.passed { "PASS" } else { "FAIL" };
        for r in &w.runs {
            println!(
                "{:<24} {:<21} {:>7} {:>6} {:>8.2} {:>11} {:>10} {:>6}",
                truncate(&w.name, 24),
                r.algorithm.name(),
                r.components,
                r.height,
                r.mean_depth,
                r.find_hops,
                r.union_time_us,
                status,
            );
        }
        for failure in &w.failures {
            println!("  ! {failure}");
        }
    }

    println!("{}", "-".repeat(100));
    println!(
        "Total: {} | Passed: {} | Failed: {}",
        report.total, report.passed, report.failed
    );
}

/// Render report as JSON.
pub fn to_json(report: &FullReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{evaluate, run};
    use crate::workload::Shape;

    #[test]
    fn full_report_counts() {
        let chain = Workload::new("chain", "", 8, Shape::Chain);
        let good = workload_report(&chain, evaluate(&chain, Algorithm::all()));

        let mut bad_runs = evaluate(&chain, Algorithm::all());
        bad_runs[1].partition = vec![vec![0], vec![1, 2, 3, 4, 5, 6, 7]];
        let bad = workload_report(&chain, bad_runs);

        let full = FullReport::from_workloads(vec![good, bad]);
        assert_eq!(full.total, 2);
        assert_eq!(full.passed, 1);
        assert_eq!(full.failed, 1);
        assert!(!full.all_passed());
    }

    #[test]
    fn disagreement_is_reported() {
        let w = Workload::new("pair", "", 2, Shape::Chain);
        let runs = vec![
            run(Algorithm::QuickFind, 2, &[(0, 1)]),
            run(Algorithm::QuickUnion, 2, &[]),
        ];
        let report = workload_report(&w, runs);
        assert!(!report.passed);
        assert!(report
            .failures
            .iter()
            .any(|f| f.contains("disagree on the partition")));
        assert!(report
            .failures
            .iter()
            .any(|f| f.contains("quick-union ended with 2 components, expected 1")));
    }

    #[test]
    fn quick_union_depth_is_not_a_failure() {
        let w = Workload::new("chain", "", 64, Shape::Chain);
        let report = workload_report(&w, evaluate(&w, Algorithm::all()));
        assert!(report.passed, "{:?}", report.failures);
        assert_eq!(report.runs[1].height, 63);
    }

    #[test]
    fn json_output_parses() {
        let full = FullReport::from_workloads(vec![]);
        let json = to_json(&full);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["total"], 0);
        assert_eq!(parsed["passed"], 0);
    }

    #[test]
    fn json_omits_partition() {
        let w = Workload::new("star", "", 4, Shape::Star);
        let full = FullReport::from_workloads(vec![workload_report(
            &w,
            evaluate(&w, &[Algorithm::QuickUnionW]),
        )]);
        let parsed: serde_json::Value = serde_json::from_str(&to_json(&full)).unwrap();
        let run = &parsed["workloads"][0]["runs"][0];
        assert_eq!(run["algorithm"], "weighted-quick-union");
        assert!(run.get("partition").is_none());
    }

    #[test]
    fn truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_long_string() {
        let result = truncate("this-is-a-very-long-workload-name", 20);
        assert_eq!(result.chars().count(), 20);
        assert!(result.ends_with('…'));
    }
}

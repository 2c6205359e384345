/// End-to-end tests: catalog workloads → run every algorithm → check reports.
use connectivity::Algorithm;
use connectivity_bench::catalog::{self, Category};
use connectivity_bench::metrics;
use connectivity_bench::report::{self, FullReport};
use connectivity_bench::workload::{self, Shape, Workload};

#[test]
fn small_catalog_workloads_pass() {
    let reports: Vec<_> = catalog::all_workloads()
        .iter()
        .filter(|w| w.len <= 256)
        .map(|w| report::workload_report(w, metrics::evaluate(w, Algorithm::all())))
        .collect();
    let full = FullReport::from_workloads(reports);
    for w in &full.workloads {
        assert!(w.passed, "{}: {:?}", w.name, w.failures);
    }
    assert!(full.all_passed());
}

#[test]
fn halving_height_bound_on_eight() {
    let w = Workload::new("halving-8", "", 8, Shape::Halving);
    let runs = metrics::evaluate(&w, &[Algorithm::QuickUnionW]);
    assert_eq!(runs[0].components, 1);
    assert!(runs[0].height <= 3, "height {}", runs[0].height);
}

#[test]
fn chain_separates_weighted_from_unweighted() {
    for w in catalog::workloads_for_category(Category::Chain) {
        let runs = metrics::evaluate(&w, Algorithm::all());
        let by_alg = |alg: Algorithm| runs.iter().find(|r| r.algorithm == alg).unwrap();
        assert_eq!(by_alg(Algorithm::QuickUnion).height, w.len - 1, "{}", w.name);
        assert!(by_alg(Algorithm::QuickUnionW).height <= metrics::ceil_log2(w.len));
        assert!(by_alg(Algorithm::QuickFind).height <= 1);
    }
}

#[test]
fn redundant_pairs_do_not_merge() {
    let w = Workload::new("redundant-32", "", 32, Shape::Redundant);
    for r in metrics::evaluate(&w, Algorithm::all()) {
        assert_eq!(r.merges, 31, "{}", r.algorithm);
        assert_eq!(r.components, 1);
    }
}

#[test]
fn random_workloads_agree_across_algorithms() {
    for seed in 0..5 {
        let w = Workload::new(
            format!("random-{seed}"),
            "",
            300,
            Shape::Random { unions: 200, seed },
        );
        let report = report::workload_report(&w, metrics::evaluate(&w, Algorithm::all()));
        assert!(report.passed, "seed {seed}: {:?}", report.failures);
        let merges: Vec<_> = report.runs.iter().map(|r| r.merges).collect();
        assert!(merges.windows(2).all(|m| m[0] == m[1]), "{merges:?}");
    }
}

#[test]
fn custom_workload_file_expectation_is_checked() {
    let workloads = workload::parse_workloads(
        r#"
[[workload]]
name = "wrong-expectation"
len = 10
shape = { type = "star" }
expected_components = 3
"#,
    )
    .unwrap();
    let report = report::workload_report(
        &workloads[0],
        metrics::evaluate(&workloads[0], Algorithm::all()),
    );
    assert!(!report.passed);
    assert_eq!(report.failures.len(), 3);
}

#[test]
fn run_result_json_round_trip() {
    let w = Workload::new("star-16", "", 16, Shape::Star);
    let result = metrics::run(Algorithm::QuickUnion, w.len, &w.pairs());

    let json = serde_json::to_string_pretty(&result).unwrap();
    let deserialized: metrics::RunResult = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.algorithm, Algorithm::QuickUnion);
    assert_eq!(deserialized.height, result.height);
    assert_eq!(deserialized.find_hops, result.find_hops);
    assert!(deserialized.partition.is_empty());
}

#[test]
fn demo_workload_file_parses() {
    let text = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/demos/workloads.toml"
    ))
    .unwrap();
    let workloads = workload::parse_workloads(&text).unwrap();
    assert_eq!(workloads.len(), 3);

    let singletons = workloads
        .iter()
        .find(|w| w.name == "pinned-components")
        .unwrap();
    let report = report::workload_report(singletons, metrics::evaluate(singletons, Algorithm::all()));
    assert!(report.passed, "{:?}", report.failures);
}

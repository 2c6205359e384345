/// Pre-defined workloads for comparing the union-find variants.
use crate::workload::{Shape, Workload};

/// A category of workloads, one per pair-sequence shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Random,
    Chain,
    Star,
    Halving,
    Redundant,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Random,
            Category::Chain,
            Category::Star,
            Category::Halving,
            Category::Redundant,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Random => "random",
            Category::Chain => "chain",
            Category::Star => "star",
            Category::Halving => "halving",
            Category::Redundant => "redundant",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::all().iter().find(|c| c.name() == name).copied()
    }

    pub fn of(workload: &Workload) -> Category {
        match workload.shape {
            Shape::Random { .. } => Category::Random,
            Shape::Chain => Category::Chain,
            Shape::Star => Category::Star,
            Shape::Halving => Category::Halving,
            Shape::Redundant => Category::Redundant,
        }
    }
}

const SIZES: [usize; 3] = [16, 256, 2048];

/// Build the full catalog of workloads.
pub fn all_workloads() -> Vec<Workload> {
    let mut workloads = Vec::new();
    workloads.extend(random_workloads());
    workloads.extend(SIZES.iter().map(|&n| {
        Workload::new(
            format!("chain-{n}"),
            format!("{} consecutive pairs over {n} elements", n - 1),
            n,
            Shape::Chain,
        )
    }));
    workloads.extend(SIZES.iter().map(|&n| {
        Workload::new(
            format!("star-{n}"),
            format!("Element 0 joined with each of the other {} elements", n - 1),
            n,
            Shape::Star,
        )
    }));
    workloads.extend(SIZES.iter().map(|&n| {
        Workload::new(
            format!("halving-{n}"),
            format!("Balanced pairwise merges over {n} elements"),
            n,
            Shape::Halving,
        )
    }));
    workloads.push(Workload::new(
        "halving-1000",
        "Balanced pairwise merges over a non-power-of-two universe",
        1000,
        Shape::Halving,
    ));
    workloads.extend(SIZES.iter().map(|&n| {
        Workload::new(
            format!("redundant-{n}"),
            format!("Chain over {n} elements, then every pair repeated reversed"),
            n,
            Shape::Redundant,
        )
    }));
    workloads
}

fn random_workloads() -> Vec<Workload> {
    let mut workloads = Vec::new();
    for &n in &SIZES {
        // Sparse: about half the pairs needed to connect everything.
        workloads.push(Workload::new(
            format!("random-sparse-{n}"),
            format!("{} random pairs over {n} elements", n / 2),
            n,
            Shape::Random {
                unions: n / 2,
                seed: 42,
            },
        ));
        // Dense: well past the connectivity threshold of about n ln n / 2.
        workloads.push(Workload::new(
            format!("random-dense-{n}"),
            format!("{} random pairs over {n} elements", n * 8),
            n,
            Shape::Random {
                unions: n * 8,
                seed: 7,
            },
        ));
    }
    workloads
}

/// Filter workloads by category.
pub fn workloads_for_category(category: Category) -> Vec<Workload> {
    all_workloads()
        .into_iter()
        .filter(|w| Category::of(w) == category)
        .collect()
}

/// Union workloads: a universe size plus a generator for the pair sequence.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use thiserror::Error;

/// How the pair sequence of a workload is generated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// `unions` uniformly random pairs.
    Random { unions: usize, seed: u64 },
    /// `(i, i + 1)` for every i: the worst case for unbalanced quick-union.
    Chain,
    /// `(0, i)` for every i.
    Star,
    /// Pairwise merges of equal-sized blocks, doubling the block size each round.
    Halving,
    /// A chain, then every pair again reversed.
    Redundant,
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Random { .. } => "random",
            Shape::Chain => "chain",
            Shape::Star => "star",
            Shape::Halving => "halving",
            Shape::Redundant => "redundant",
        }
    }

    /// Generate the pairs for a universe of `len` elements.
    pub fn pairs(&self, len: usize) -> Vec<(usize, usize)> {
        match self {
            Shape::Random { unions, seed } => {
                if len == 0 {
                    return Vec::new();
                }
                let mut rng = StdRng::seed_from_u64(*seed);
                (0..*unions)
                    .map(|_| (rng.gen_range(0..len), rng.gen_range(0..len)))
                    .collect()
            }
            Shape::Chain => (1..len).map(|i| (i - 1, i)).collect(),
            Shape::Star => (1..len).map(|i| (0, i)).collect(),
            Shape::Halving => {
                let mut pairs = Vec::new();
                let mut step = 1;
                while step < len {
                    for start in (0..len - step).step_by(2 * step) {
                        pairs.push((start, start + step));
                    }
                    step *= 2;
                }
                pairs
            }
            Shape::Redundant => {
                let chain = Shape::Chain.pairs(len);
                let reversed = chain.iter().map(|&(p, q)| (q, p));
                chain.iter().copied().chain(reversed).collect()
            }
        }
    }

    /// Component count every correct union-find must reach, when the shape
    /// determines it.
    pub fn expected_components(&self, len: usize) -> Option<usize> {
        match self {
            Shape::Random { .. } => None,
            _ => Some(len.min(1)),
        }
    }
}

/// A named workload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Workload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub len: usize,
    pub shape: Shape,
    /// Overrides the component count implied by the shape.
    #[serde(default)]
    pub expected_components: Option<usize>,
}

impl Workload {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        len: usize,
        shape: Shape,
    ) -> Self {
        Workload {
            name: name.into(),
            description: description.into(),
            len,
            shape,
            expected_components: None,
        }
    }

    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.shape.pairs(self.len)
    }

    pub fn expected_components(&self) -> Option<usize> {
        self.expected_components
            .or_else(|| self.shape.expected_components(self.len))
    }
}

#[derive(Debug, Error)]
pub enum WorkloadFileError {
    #[error("invalid workload file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("workload '{0}' has zero elements")]
    Empty(String),
}

#[derive(Debug, Deserialize)]
struct WorkloadFile {
    #[serde(default)]
    workload: Vec<Workload>,
}

/// Parse user-defined workloads from TOML (`[[workload]]` tables).
pub fn parse_workloads(toml_str: &str) -> Result<Vec<Workload>, WorkloadFileError> {
    let file: WorkloadFile = toml::from_str(toml_str)?;
    if let Some(w) = file.workload.iter().find(|w| w.len == 0) {
        return Err(WorkloadFileError::Empty(w.name.clone()));
    }
    Ok(file.workload)
}

use std::fmt;
use std::str::FromStr;

use crate::error::{ConnectivityError, UnknownAlgorithm};
use crate::quick_find::QuickFind;
use crate::quick_union::QuickUnion;
use crate::sequence::DynamicConnectivity;
use crate::weighted::QuickUnionW;

/// Selects one of the union-find variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[cfg_attr(feature = "serde", serde(rename = "quick-find"))]
    QuickFind,
    #[cfg_attr(feature = "serde", serde(rename = "quick-union"))]
    QuickUnion,
    #[cfg_attr(feature = "serde", serde(rename = "weighted-quick-union"))]
    QuickUnionW,
}

impl Algorithm {
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::QuickFind,
            Algorithm::QuickUnion,
            Algorithm::QuickUnionW,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::QuickFind => "quick-find",
            Algorithm::QuickUnion => "quick-union",
            Algorithm::QuickUnionW => "weighted-quick-union",
        }
    }

    fn short_name(&self) -> &'static str {
        match self {
            Algorithm::QuickFind => "qf",
            Algorithm::QuickUnion => "qu",
            Algorithm::QuickUnionW => "wqu",
        }
    }

    /// Look up an algorithm by its full or short name.
    pub fn from_name(name: &str) -> Option<Algorithm> {
        Algorithm::all()
            .iter()
            .find(|a| a.name() == name || a.short_name() == name)
            .copied()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s).ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// One union-find structure of any variant, dispatched by `match`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "algorithm", rename_all = "kebab-case"))]
pub enum Sequence {
    QuickFind(QuickFind),
    QuickUnion(QuickUnion),
    #[cfg_attr(feature = "serde", serde(rename = "weighted-quick-union"))]
    QuickUnionW(QuickUnionW),
}

impl Sequence {
    /// Create `n` singleton components using the given algorithm.
    pub fn new(algorithm: Algorithm, n: usize) -> Self {
        match algorithm {
            Algorithm::QuickFind => Sequence::QuickFind(QuickFind::new(n)),
            Algorithm::QuickUnion => Sequence::QuickUnion(QuickUnion::new(n)),
            Algorithm::QuickUnionW => Sequence::QuickUnionW(QuickUnionW::new(n)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Sequence::QuickFind(_) => Algorithm::QuickFind,
            Sequence::QuickUnion(_) => Algorithm::QuickUnion,
            Sequence::QuickUnionW(_) => Algorithm::QuickUnionW,
        }
    }
}

impl From<QuickFind> for Sequence {
    fn from(qf: QuickFind) -> Self {
        Sequence::QuickFind(qf)
    }
}

impl From<QuickUnion> for Sequence {
    fn from(qu: QuickUnion) -> Self {
        Sequence::QuickUnion(qu)
    }
}

impl From<QuickUnionW> for Sequence {
    fn from(w: QuickUnionW) -> Self {
        Sequence::QuickUnionW(w)
    }
}

impl DynamicConnectivity for Sequence {
    fn as_slice(&self) -> &[usize] {
        match self {
            Sequence::QuickFind(s) => s.as_slice(),
            Sequence::QuickUnion(s) => s.as_slice(),
            Sequence::QuickUnionW(s) => s.as_slice(),
        }
    }

    fn try_find(&self, e: usize) -> Result<usize, ConnectivityError> {
        match self {
            Sequence::QuickFind(s) => s.try_find(e),
            Sequence::QuickUnion(s) => s.try_find(e),
            Sequence::QuickUnionW(s) => s.try_find(e),
        }
    }

    fn try_merge(&mut self, p: usize, q: usize) -> Result<bool, ConnectivityError> {
        match self {
            Sequence::QuickFind(s) => s.try_merge(p, q),
            Sequence::QuickUnion(s) => s.try_merge(p, q),
            Sequence::QuickUnionW(s) => s.try_merge(p, q),
        }
    }
}

use log::{debug, trace};

use crate::error::ConnectivityError;
use crate::sequence::DynamicConnectivity;

/// Weighted quick-union (union by size), without path compression.
///
/// The smaller tree always goes under the root of the larger one, so no tree
/// is ever deeper than log2 of its size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuickUnionW {
    elems: Vec<usize>,
    /// Subtree size, only meaningful at root indices.
    weights: Vec<usize>,
}

impl QuickUnionW {
    /// Create a structure of `n` singleton components of weight 1.
    pub fn new(n: usize) -> Self {
        debug!("weighted quick-union: {n} singleton components");
        Self {
            elems: (0..n).collect(),
            weights: vec![1; n],
        }
    }

    /// Number of elements in the component containing `e`.
    pub fn size_of(&self, e: usize) -> usize {
        self.weights[self.find(e)]
    }

    pub fn weights(&self) -> &[usize] {
        &self.weights
    }
}

impl DynamicConnectivity for QuickUnionW {
    fn as_slice(&self) -> &[usize] {
        &self.elems
    }

    /// Link the lighter root under the heavier one. On equal weights the root
    /// of `q` survives.
    fn try_merge(&mut self, p: usize, q: usize) -> Result<bool, ConnectivityError> {
        let root_p = self.try_find(p)?;
        let root_q = self.try_find(q)?;
        if root_p == root_q {
            return Ok(false);
        }
        let weight_p = self.weights[root_p];
        let weight_q = self.weights[root_q];
        if weight_p > weight_q {
            trace!("link {root_q} (weight {weight_q}) under {root_p} (weight {weight_p})");
            self.elems[root_q] = root_p;
            self.weights[root_p] += weight_q;
        } else {
            trace!("link {root_p} (weight {weight_p}) under {root_q} (weight {weight_q})");
            self.elems[root_p] = root_q;
            self.weights[root_q] += weight_p;
        }
        Ok(true)
    }
}

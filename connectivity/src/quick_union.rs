use log::debug;

use crate::error::ConnectivityError;
use crate::sequence::DynamicConnectivity;

/// Lazy union-find: every element stores its parent, roots point at
/// themselves.
///
/// `union` links one root under the other without any balancing, so a
/// sequence of unions can build a chain of depth O(n).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuickUnion {
    elems: Vec<usize>,
}

impl QuickUnion {
    /// Create a structure of `n` singleton components.
    pub fn new(n: usize) -> Self {
        debug!("quick-union: {n} singleton components");
        Self {
            elems: (0..n).collect(),
        }
    }
}

impl DynamicConnectivity for QuickUnion {
    fn as_slice(&self) -> &[usize] {
        &self.elems
    }

    /// Link the root of `p` under the root of `q`.
    ///
    /// There is no early return when both already share a root: the write
    /// then re-points the root at itself and changes nothing.
    fn try_merge(&mut self, p: usize, q: usize) -> Result<bool, ConnectivityError> {
        let root_p = self.try_find(p)?;
        let root_q = self.try_find(q)?;
        self.elems[root_p] = root_q;
        Ok(root_p != root_q)
    }
}

use log::debug;

use crate::error::ConnectivityError;
use crate::sequence::{check_id, DynamicConnectivity};

/// Eager union-find: every element stores its root directly.
///
/// `find` is a single lookup; `union` rewrites every element of one component.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuickFind {
    elems: Vec<usize>,
}

impl QuickFind {
    /// Create a structure of `n` singleton components.
    pub fn new(n: usize) -> Self {
        debug!("quick-find: {n} singleton components");
        Self {
            elems: (0..n).collect(),
        }
    }
}

impl DynamicConnectivity for QuickFind {
    fn as_slice(&self) -> &[usize] {
        &self.elems
    }

    fn try_find(&self, e: usize) -> Result<usize, ConnectivityError> {
        check_id(e, self.elems.len()).map(|e| self.elems[e])
    }

    fn try_merge(&mut self, p: usize, q: usize) -> Result<bool, ConnectivityError> {
        let old_root = self.try_find(p)?;
        let new_root = self.try_find(q)?;
        if old_root == new_root {
            return Ok(false);
        }
        for root in self.elems.iter_mut().filter(|root| **root == old_root) {
            *root = new_root;
        }
        Ok(true)
    }
}

use crate::error::ConnectivityError;

/// The capability set shared by every union-find variant.
///
/// Implementors store one `usize` per element: either the root of the element
/// (quick-find) or its parent (quick-union and weighted quick-union). In both
/// shapes a root points at itself, so root-finding is the same loop for all
/// variants and lives here as default methods.
///
/// Ids are dense in `0..len()`. The unchecked methods panic on an out-of-range
/// id; the `try_` forms return [`ConnectivityError::OutOfRange`] instead and
/// leave the structure untouched.
pub trait DynamicConnectivity: Sized {
    /// The backing array, `elems[e]` being the root or parent of `e`.
    fn as_slice(&self) -> &[usize];

    /// Merge the components of `p` and `q` in place.
    ///
    /// Returns whether two distinct components were merged. Both ids are
    /// validated before anything is written.
    fn try_merge(&mut self, p: usize, q: usize) -> Result<bool, ConnectivityError>;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn try_find(&self, e: usize) -> Result<usize, ConnectivityError> {
        find_root(self.as_slice(), e)
    }

    fn try_connected(&self, p: usize, q: usize) -> Result<bool, ConnectivityError> {
        Ok(self.try_find(p)? == self.try_find(q)?)
    }

    /// Root of the component containing `e`.
    fn find(&self, e: usize) -> usize {
        self.try_find(e).unwrap_or_else(|err| panic!("find: {err}"))
    }

    fn connected(&self, p: usize, q: usize) -> bool {
        self.try_connected(p, q).unwrap_or_else(|err| panic!("connected: {err}"))
    }

    fn merge(&mut self, p: usize, q: usize) -> bool {
        self.try_merge(p, q).unwrap_or_else(|err| panic!("union: {err}"))
    }

    /// Consume this generation and return the next one, with the components
    /// of `p` and `q` merged. Clone first to keep the prior generation.
    fn union(mut self, p: usize, q: usize) -> Self {
        self.merge(p, q);
        self
    }

    /// Number of parent hops from `e` up to its root.
    fn depth(&self, e: usize) -> usize {
        let elems = self.as_slice();
        let mut e = check_id(e, elems.len()).unwrap_or_else(|err| panic!("depth: {err}"));
        let mut hops = 0;
        while elems[e] != e {
            e = elems[e];
            hops += 1;
        }
        hops
    }

    /// Largest depth over all elements, 0 for an empty structure.
    fn height(&self) -> usize {
        (0..self.len()).map(|e| self.depth(e)).max().unwrap_or(0)
    }

    /// Ids that are their own root, in ascending order.
    fn roots(&self) -> Vec<usize> {
        self.as_slice()
            .iter()
            .enumerate()
            .filter(|&(e, &parent)| e == parent)
            .map(|(e, _)| e)
            .collect()
    }

    fn component_count(&self) -> usize {
        self.roots().len()
    }

    /// The partition in canonical form: each class sorted, classes ordered by
    /// their smallest element. Independent of which ids ended up as roots.
    fn components(&self) -> Vec<Vec<usize>> {
        let n = self.len();
        // Class index per root, assigned in order of first appearance.
        let mut class_of_root = vec![usize::MAX; n];
        let mut classes: Vec<Vec<usize>> = Vec::new();
        for e in 0..n {
            let root = self.find(e);
            if class_of_root[root] == usize::MAX {
                class_of_root[root] = classes.len();
                classes.push(Vec::new());
            }
            classes[class_of_root[root]].push(e);
        }
        classes
    }
}

/// Follow parent pointers from `e` until reaching a self-loop.
///
/// Iterative so that a degenerate quick-union chain of depth O(n) cannot
/// exhaust the stack.
pub(crate) fn find_root(elems: &[usize], mut e: usize) -> Result<usize, ConnectivityError> {
    let mut root = *elems.get(e).ok_or(ConnectivityError::OutOfRange {
        id: e,
        len: elems.len(),
    })?;
    while root != e {
        e = root;
        root = elems[e];
    }
    Ok(root)
}

/// Check that `e` is a valid id for a structure of `len` elements.
pub(crate) fn check_id(e: usize, len: usize) -> Result<usize, ConnectivityError> {
    if e < len {
        Ok(e)
    } else {
        Err(ConnectivityError::OutOfRange { id: e, len })
    }
}

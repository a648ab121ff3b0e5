//! Weighted index choice and weighted shuffle.
//!
//! Weights are plain `f64`s and need not sum to one. Entries that are zero,
//! negative or NaN carry no mass: they are left out of the total and are
//! never selected.
//!
//! Sums use ordinary double-precision accumulation. Weights spanning many
//! orders of magnitude (say `1e-6` next to `1e30`) can starve the small
//! entries entirely; that is expected, not a bug.

use fairdraw_core::{EntropySource, SampleError, SampleResult};

use crate::sampler::Sampler;

/// Total mass of the strictly positive weights.
fn positive_mass(weights: &[f64]) -> SampleResult<f64> {
    let sum: f64 = weights.iter().copied().filter(|&w| w > 0.0).sum();
    if sum <= 0.0 {
        return Err(SampleError::invalid_weights(format!(
            "no strictly positive weight among {} entries",
            weights.len()
        )));
    }
    if !sum.is_finite() {
        return Err(SampleError::invalid_weights("weight sum is not finite"));
    }
    Ok(sum)
}

impl<E: EntropySource> Sampler<E> {
    /// Choose an index with probability proportional to its weight.
    ///
    /// Draws `r` from `[0, 1)`, scales it by the positive mass, then walks
    /// the weights subtracting each positive one; the first index that
    /// drives the target below zero wins. If rounding lets the walk finish
    /// without a winner, the last positive-weight index is returned.
    ///
    /// # Errors
    ///
    /// - [`SampleError::InvalidWeights`] if no weight is strictly positive
    ///   (including an empty slice) or the positive weights overflow
    /// - [`SampleError::EntropySourceFailure`] if the source fails
    ///
    /// # Example
    ///
    /// ```rust
    /// use fairdraw::Sampler;
    ///
    /// let mut sampler = Sampler::seeded(3);
    /// let index = sampler.weighted_choice(&[0.0, 2.0, 1.0]).expect("seeded");
    /// assert!(index == 1 || index == 2);
    /// ```
    pub fn weighted_choice(&mut self, weights: &[f64]) -> SampleResult<usize> {
        let sum = positive_mass(weights)?;
        let mut target = self.uniform_f64()? * sum;

        let mut last_positive = 0;
        for (index, &weight) in weights.iter().enumerate() {
            if weight > 0.0 {
                target -= weight;
                if target < 0.0 {
                    return Ok(index);
                }
                last_positive = index;
            }
        }
        Ok(last_positive)
    }

    /// Visit every positive-weight index once, in weighted random order.
    ///
    /// Each draw picks among the indices not yet visited with probability
    /// proportional to their weight, as if [`weighted_choice`] were called
    /// repeatedly with the chosen index removed. Non-positive weights are
    /// never visited. Each draw costs `O(log n)` through a tree of subtree masses.
    ///
    /// The first error returned by `visit` stops the traversal and is
    /// returned as is; indices visited before it stay visited.
    ///
    /// # Errors
    ///
    /// - [`SampleError::InvalidWeights`] (converted into `Err`) before any
    ///   visit if no weight is strictly positive
    /// - [`SampleError::EntropySourceFailure`] if the source fails mid-way
    /// - whatever `visit` returns
    ///
    /// [`weighted_choice`]: Sampler::weighted_choice
    pub fn weighted_shuffle<F, Error>(
        &mut self,
        weights: &[f64],
        mut visit: F,
    ) -> Result<(), Error>
    where
        F: FnMut(usize) -> Result<(), Error>,
        Error: From<SampleError>,
    {
        positive_mass(weights)?;

        let (indices, masses): (Vec<usize>, Vec<f64>) = weights
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, w)| w > 0.0)
            .unzip();
        tracing::debug!(
            entries = weights.len(),
            candidates = indices.len(),
            "weighted shuffle"
        );

        let mut tree = MassTree::new(&masses);
        for remaining in (1..=indices.len()).rev() {
            // The last candidate is the only leaf with mass left
            let target = if remaining == 1 {
                0.0
            } else {
                self.uniform_f64()? * tree.mass()
            };
            let leaf = tree
                .search(target)
                .ok_or_else(|| SampleError::invalid_weights("no mass left to draw from"))?;
            tree.remove(leaf);
            visit(indices[leaf])?;
        }
        Ok(())
    }

    /// Collect the order [`weighted_shuffle`](Sampler::weighted_shuffle) visits.
    pub fn weighted_order(&mut self, weights: &[f64]) -> SampleResult<Vec<usize>> {
        let mut order = Vec::new();
        self.weighted_shuffle(weights, |index| {
            order.push(index);
            Ok::<(), SampleError>(())
        })?;
        Ok(order)
    }
}

// Each internal node has FANOUT children with indices
//     (index << BIT_SHIFT) + 1 ..= (index << BIT_SHIFT) + FANOUT
// Conversely the parent of a node is (index - 1) >> BIT_SHIFT, and the mass
// of the node's subtree is stored at offset (index - 1) & BIT_MASK of its
// parent. Leaf k is node num_nodes + k; its entry is the candidate's weight.
const BIT_SHIFT: usize = 4;
const FANOUT: usize = 1 << BIT_SHIFT;
const BIT_MASK: usize = FANOUT - 1;

/// Fanout tree of subtree masses over the candidate weights.
///
/// Removing a leaf recomputes each ancestor's entry from its children
/// rather than subtracting, so an emptied subtree holds exactly `0.0` and
/// rounding error never builds up across draws.
struct MassTree {
    // Internal nodes, allocated or not.
    num_nodes: usize,
    // tree[i][j] is the mass of the j'th subtree of node i. Internal nodes
    // without leaves below them are never allocated.
    tree: Vec<[f64; FANOUT]>,
}

impl MassTree {
    /// Build over strictly positive `weights`.
    fn new(weights: &[f64]) -> Self {
        let (num_nodes, size) = node_counts(weights.len());
        let mut tree = vec![[0.0; FANOUT]; size];
        for (k, &weight) in weights.iter().enumerate() {
            let leaf = num_nodes + k;
            tree[(leaf - 1) >> BIT_SHIFT][(leaf - 1) & BIT_MASK] = weight;
        }
        // Children sit at higher indices than their parent
        for index in (1..size).rev() {
            let mass = tree[index].iter().sum();
            tree[(index - 1) >> BIT_SHIFT][(index - 1) & BIT_MASK] = mass;
        }
        Self { num_nodes, tree }
    }

    /// Mass of the leaves not yet removed.
    fn mass(&self) -> f64 {
        self.tree.first().map_or(0.0, |root| root.iter().sum())
    }

    /// Leaf whose slice of the cumulative mass contains `target`.
    ///
    /// Zero-mass subtrees are skipped. If rounding carries `target` past
    /// the last positive subtree of a node, that subtree is taken. `None`
    /// only when no mass is left.
    fn search(&self, mut target: f64) -> Option<usize> {
        let mut index = 0;
        loop {
            let mut chosen = None;
            for (offset, &mass) in self.tree.get(index)?.iter().enumerate() {
                if mass <= 0.0 {
                    continue;
                }
                chosen = Some(offset);
                if target < mass {
                    break;
                }
                target -= mass;
            }
            index = (index << BIT_SHIFT) + chosen? + 1;
            if index >= self.tree.len() {
                return Some(index - self.num_nodes);
            }
        }
    }

    /// Zero leaf `k` and refresh the masses on its path to the root.
    fn remove(&mut self, k: usize) {
        let mut index = self.num_nodes + k;
        let mut mass = 0.0;
        while index != 0 {
            let parent = (index - 1) >> BIT_SHIFT;
            self.tree[parent][(index - 1) & BIT_MASK] = mass;
            mass = self.tree[parent].iter().sum();
            index = parent;
        }
    }
}

/// Internal node count and allocated tree size for `count` leaves.
fn node_counts(count: usize) -> (usize, usize) {
    let mut size = 0;
    let mut nodes = 1;
    while nodes * FANOUT < count {
        size += nodes;
        nodes *= FANOUT;
    }
    (size + nodes, size + count.div_ceil(FANOUT))
}

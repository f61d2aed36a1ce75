use super::WeightIndex;

/// Binary indexed tree over the weights. Picking and reducing are both O(log n).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fenwick {
    // 1-based; tree[0] is unused
    tree: Vec<u64>,
    total: u64,
}

fn lowest_bit(i: usize) -> usize {
    i & i.wrapping_neg()
}

impl Fenwick {
    fn prefix(&self, count: usize) -> u64 {
        let mut sum = 0;
        let mut i = count;
        while i > 0 {
            sum += self.tree[i];
            i -= lowest_bit(i);
        }
        sum
    }
}

impl WeightIndex for Fenwick {
    fn from_weights(weights: &[u64]) -> Self {
        let n = weights.len();
        let mut tree = vec![0; n + 1];
        tree[1..].copy_from_slice(weights);
        for i in 1..=n {
            let parent = i + lowest_bit(i);
            if parent <= n {
                tree[parent] += tree[i];
            }
        }
        Self {
            tree,
            total: weights.iter().sum(),
        }
    }

    fn len(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }

    fn total(&self) -> u64 {
        self.total
    }

    fn cumulative(&self, index: usize) -> u64 {
        assert!(index < self.len(), "weight index {index} out of range");
        self.prefix(index + 1)
    }

    fn lower_bound(&self, draw: u64) -> usize {
        let n = self.len();
        let mut position = 0;
        let mut remaining = draw;
        let mut step = if n == 0 { 0 } else { 1 << n.ilog2() };
        while step > 0 {
            let next = position + step;
            if next <= n && self.tree[next] < remaining {
                position = next;
                remaining -= self.tree[next];
            }
            step >>= 1;
        }
        position
    }

    fn reduce(&mut self, index: usize, amount: u64) {
        let n = self.len();
        assert!(index < n, "weight index {index} out of range");
        let mut i = index + 1;
        while i <= n {
            self.tree[i] -= amount;
            i += lowest_bit(i);
        }
        self.total -= amount;
    }
}

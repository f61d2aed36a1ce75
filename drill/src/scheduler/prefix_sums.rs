use super::WeightIndex;

/// Plain cumulative weight array: `cum[i]` is the sum of the weights at `0..=i`.
/// Picking is a binary search; reducing a weight walks the suffix after it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixSums {
    cum: Vec<u64>,
}

impl WeightIndex for PrefixSums {
    fn from_weights(weights: &[u64]) -> Self {
        let mut running = 0;
        let cum = weights
            .iter()
            .map(|weight| {
                running += weight;
                running
            })
            .collect();
        Self { cum }
    }

    fn len(&self) -> usize {
        self.cum.len()
    }

    fn total(&self) -> u64 {
        self.cum.last().copied().unwrap_or(0)
    }

    fn cumulative(&self, index: usize) -> u64 {
        self.cum[index]
    }

    fn lower_bound(&self, draw: u64) -> usize {
        self.cum.partition_point(|&sum| sum < draw)
    }

    fn reduce(&mut self, index: usize, amount: u64) {
        for sum in &mut self.cum[index..] {
            *sum -= amount;
        }
    }
}

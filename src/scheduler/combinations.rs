//! Lexicographic k-combinations of `0..n`.
//!
//! Stepping rule: advance the rightmost index that still has room, then
//! reset every index to its right to consecutive following values. The
//! iterator is finite and restartable by constructing a new one.
//!
//! # Reference
//! Knuth (2011), "The Art of Computer Programming", Vol. 4A, 7.2.1.3

/// Iterator over all `k`-sized index combinations of `0..n` in
/// lexicographic order.
///
/// # Example
/// ```
/// use u_inspect::scheduler::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1]);
/// assert_eq!(all[5], vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    current: Option<Vec<usize>>,
}

impl Combinations {
    /// Creates the iterator. Yields nothing when `k > n`, and a single
    /// empty combination when `k == 0`.
    pub fn new(n: usize, k: usize) -> Self {
        let current = (k <= n).then(|| (0..k).collect());
        Self { n, current }
    }

    fn advance(&self, indices: &[usize]) -> Option<Vec<usize>> {
        let k = indices.len();
        let pivot = (0..k).rev().find(|&i| indices[i] < self.n - k + i)?;
        let mut next = indices.to_vec();
        next[pivot] += 1;
        for j in pivot + 1..k {
            next[j] = next[j - 1] + 1;
        }
        Some(next)
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        self.current = self.advance(&current);
        Some(current)
    }
}

impl std::iter::FusedIterator for Combinations {}

/// Binomial coefficient `C(n, k)`, saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step.
        acc = match acc.checked_mul(n - i) {
            Some(v) => v / (i + 1),
            None => return u64::MAX,
        };
        if acc > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Largest supported square order.
///
/// Symbols are stored as `u8` and the permutation table holds `n!` entries,
/// so the ceiling is set where that table is still small.
pub const MAX_ORDER: usize = 8;

/// A permutation of the symbols `{0..n-1}`, read as a row of a square.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permutation(Vec<u8>);

impl Permutation {
    /// The identity permutation `(0, 1, ..., n-1)`.
    pub fn identity(n: usize) -> Self {
        Self((0..n as u8).collect())
    }

    /// Creates a permutation from its symbols.
    ///
    /// # Panics
    /// Panics if `symbols` is not a permutation of `{0..symbols.len()-1}`.
    pub fn from_symbols(symbols: Vec<u8>) -> Self {
        let n = symbols.len();
        let mut seen = vec![false; n];
        for &s in &symbols {
            let s = s as usize;
            assert!(s < n && !seen[s], "not a permutation: {:?}", symbols);
            seen[s] = true;
        }
        Self(symbols)
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty permutation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns true if both permutations hold the same symbol at some position.
    #[inline]
    pub fn clashes_with(&self, other: &Permutation) -> bool {
        self.0.iter().zip(&other.0).any(|(u, v)| u == v)
    }

    /// Steps to the next permutation in lexicographic order.
    ///
    /// Returns false, leaving `self` untouched, if this is the last one.
    fn advance(&mut self) -> bool {
        let a = &mut self.0;
        let Some(j) = (1..a.len()).rev().find(|&i| a[i - 1] < a[i]).map(|i| i - 1) else {
            return false;
        };
        // a[j+1..] is decreasing; swap a[j] with the rightmost larger entry.
        let l = (j + 1..a.len()).rev().find(|&l| a[j] < a[l]).unwrap_or(j + 1);
        a.swap(j, l);
        a[j + 1..].reverse();
        true
    }
}

/// Returns all `n!` permutations of `{0..n-1}` in lexicographic order.
///
/// # Panics
/// Panics if `n == 0` or `n > MAX_ORDER`.
pub fn all_permutations(n: usize) -> Vec<Permutation> {
    assert!(
        (1..=MAX_ORDER).contains(&n),
        "n must be in range 1..={}",
        MAX_ORDER
    );
    let mut current = Permutation::identity(n);
    let mut perms = vec![current.clone()];
    while current.advance() {
        perms.push(current.clone());
    }
    perms
}

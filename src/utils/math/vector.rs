use std::{cmp::Ordering, ops::AddAssign};

use num::{Float, Num};

/// Sparse vector keeping only non-zero elements.
/// `indices` is strictly ascending, `values` is parallel to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVec<N>
where
    N: Num + Copy,
{
    indices: Vec<usize>,
    values: Vec<N>,
    len: usize,
}

impl<N> SparseVec<N>
where
    N: Num + Copy,
{
    /// All-zero vector of dimension `len`
    #[inline]
    pub fn zeros(len: usize) -> Self {
        SparseVec {
            indices: Vec::new(),
            values: Vec::new(),
            len,
        }
    }

    #[inline]
    pub fn with_capacity(len: usize, nnz: usize) -> Self {
        SparseVec {
            indices: Vec::with_capacity(nnz),
            values: Vec::with_capacity(nnz),
            len,
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Zero values are dropped, duplicate indices are summed,
    /// indices at or past `len` are ignored.
    pub fn from_pairs<I>(len: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, N)>,
    {
        let mut pairs: Vec<(usize, N)> = pairs.into_iter().filter(|(i, _)| *i < len).collect();
        pairs.sort_by_key(|(i, _)| *i);
        let mut vec = Self::with_capacity(len, pairs.len());
        for (idx, val) in pairs {
            match vec.indices.last() {
                Some(&last) if last == idx => {
                    if let Some(v) = vec.values.last_mut() {
                        *v = *v + val;
                    }
                }
                _ => {
                    vec.indices.push(idx);
                    vec.values.push(val);
                }
            }
        }
        vec.drop_zeros();
        vec
    }

    fn drop_zeros(&mut self) {
        let mut keep = 0;
        for i in 0..self.values.len() {
            if self.values[i] != N::zero() {
                self.indices[keep] = self.indices[i];
                self.values[keep] = self.values[i];
                keep += 1;
            }
        }
        self.indices.truncate(keep);
        self.values.truncate(keep);
    }

    /// dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// number of stored (non-zero) elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    /// Element at `index`; zero for unstored positions, `None` past the end
    pub fn get(&self, index: usize) -> Option<N> {
        if index >= self.len {
            return None;
        }
        match self.indices.binary_search(&index) {
            Ok(pos) => Some(self.values[pos]),
            Err(_) => Some(N::zero()),
        }
    }

    /// Iterate `(index, value)` over stored elements in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.indices.iter().copied().zip(self.values.iter())
    }

    /// Dot product by merging the two index lists
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len, other.len,
            "Vectors must be of the same length to compute dot product."
        );
        let mut result = R::zero();
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Equal => {
                    result += self.values[i].into() * other.values[j].into();
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }
}

impl<N> SparseVec<N>
where
    N: Float,
{
    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> N {
        self.values
            .iter()
            .fold(N::zero(), |acc, &v| acc + v * v)
            .sqrt()
    }

    /// Scale to unit length in place; the zero vector stays zero
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > N::zero() {
            for v in &mut self.values {
                *v = *v / norm;
            }
        }
    }

}

impl<N> SparseVec<N>
where
    N: Float + AddAssign,
{
    /// cos(θ) = a·b / (|a||b|), zero when either side is the zero vector
    pub fn cosine_similarity(&self, other: &Self) -> N {
        let (na, nb) = (self.norm(), other.norm());
        if na == N::zero() || nb == N::zero() {
            return N::zero();
        }
        self.dot::<N>(other) / (na * nb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn from_pairs_sorts_merges_and_drops_zeros() {
        let v = SparseVec::from_pairs(6, vec![(4, 1.0), (1, 2.0), (4, 0.5), (2, 0.0), (9, 3.0)]);
        assert_eq!(v.len(), 6);
        assert_eq!(v.nnz(), 2);
        let stored: Vec<(usize, f64)> = v.raw_iter().map(|(i, v)| (i, *v)).collect();
        assert_eq!(stored, vec![(1, 2.0), (4, 1.5)]);
        assert_eq!(v.get(2), Some(0.0));
        assert_eq!(v.get(6), None);
    }

    #[test]
    fn dot_only_counts_shared_indices() {
        let a = SparseVec::from_pairs(5, vec![(0, 1.0), (2, 2.0), (4, 3.0)]);
        let b = SparseVec::from_pairs(5, vec![(1, 7.0), (2, 4.0), (4, 1.0)]);
        let d: f64 = a.dot(&b);
        assert!(approx(d, 11.0));
    }

    #[test]
    fn integer_vectors_accumulate_into_wider_type() {
        let a: SparseVec<u32> = SparseVec::from_pairs(3, vec![(0, 2), (1, 3)]);
        let d: u64 = a.dot(&a);
        assert_eq!(d, 13);
    }

    #[test]
    fn normalize_gives_unit_length() {
        let mut a = SparseVec::from_pairs(3, vec![(0, 3.0), (2, 4.0)]);
        a.l2_normalize();
        assert!(approx(a.norm(), 1.0));
        assert!(approx(a.get(0).unwrap(), 0.6));
    }

    #[test]
    fn zero_vector_stays_zero_and_has_zero_cosine() {
        let mut z: SparseVec<f64> = SparseVec::zeros(4);
        z.l2_normalize();
        assert!(z.is_zero());
        let a = SparseVec::from_pairs(4, vec![(1, 1.0)]);
        assert_eq!(z.cosine_similarity(&a), 0.0);
        assert_eq!(z.cosine_similarity(&z), 0.0);
    }

    #[test]
    fn cosine_matches_dot_over_norms() {
        let a = SparseVec::from_pairs(4, vec![(0, 1.0), (2, 2.0)]);
        let b = SparseVec::from_pairs(4, vec![(2, 3.0), (3, 4.0)]);
        let expected = 6.0 / (5f64.sqrt() * 5.0);
        assert!(approx(a.cosine_similarity(&b), expected));
        assert!(approx(b.cosine_similarity(&a), expected));
    }

    #[test]
    fn cosine_ignores_magnitude() {
        let a = SparseVec::from_pairs(3, vec![(0, 1.0), (1, 1.0)]);
        let b = SparseVec::from_pairs(3, vec![(0, 5.0), (1, 5.0)]);
        assert!(approx(a.cosine_similarity(&b), 1.0));
    }
}

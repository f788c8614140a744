use rayon::prelude::*;
use tracing::debug;

use crate::{store::RowIndex, vectorizer::TermWeightMatrix};

/// Dense, symmetric all-pairs cosine similarity.
/// Row-major, `len * len` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    len: usize,
    cells: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute every pair of `weights`.
    ///
    /// Only the upper triangle is computed and then mirrored.
    /// A zero row scores 0 against everything, itself included.
    pub fn build(weights: &TermWeightMatrix<f64>) -> Self {
        let rows = weights.rows();
        let len = rows.len();

        // upper[i] holds (i, j) for j in i..len
        let upper: Vec<Vec<f64>> = (0..len)
            .into_par_iter()
            .map(|i| {
                let a = &rows[i];
                (i..len)
                    .map(|j| {
                        if a.is_zero() || rows[j].is_zero() {
                            0.0
                        } else if i == j {
                            1.0
                        } else {
                            a.cosine_similarity(&rows[j]).clamp(0.0, 1.0)
                        }
                    })
                    .collect()
            })
            .collect();

        let mut cells = vec![0.0; len * len];
        for (i, tail) in upper.into_iter().enumerate() {
            for (offset, score) in tail.into_iter().enumerate() {
                let j = i + offset;
                cells[i * len + j] = score;
                cells[j * len + i] = score;
            }
        }
        debug!(items = len, "similarity matrix built");
        Self { len, cells }
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Scores of `row` against every item, in row order
    #[inline]
    pub fn row(&self, row: RowIndex) -> Option<&[f64]> {
        let i = row.get();
        if i >= self.len {
            return None;
        }
        Some(&self.cells[i * self.len..(i + 1) * self.len])
    }

    #[inline]
    pub fn get(&self, a: RowIndex, b: RowIndex) -> Option<f64> {
        if b.get() >= self.len {
            return None;
        }
        self.row(a).map(|r| r[b.get()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::{stop_words::StopWords, TFIDFVectorizer};

    fn matrix(docs: &[&str]) -> SimilarityMatrix {
        let (_, weights) = TFIDFVectorizer::<f64>::fit_transform(docs, StopWords::english());
        SimilarityMatrix::build(&weights)
    }

    const DOCS: [&str; 5] = [
        "France Luc Besson Jean Reno",
        "France Luc Besson Natalie Portman",
        "United States Unknown Natalie Portman",
        "the of and",
        "Japan Unknown Unknown",
    ];

    #[test]
    fn dimensions_match_input() {
        let m = matrix(&DOCS);
        assert_eq!(m.len(), 5);
        for i in 0..5 {
            assert_eq!(m.row(RowIndex(i)).unwrap().len(), 5);
        }
        assert!(m.row(RowIndex(5)).is_none());
        assert!(m.get(RowIndex(0), RowIndex(5)).is_none());
    }

    #[test]
    fn diagonal_is_one_for_non_zero_rows() {
        let m = matrix(&DOCS);
        for i in [0, 1, 2, 4] {
            assert_eq!(m.get(RowIndex(i), RowIndex(i)), Some(1.0));
        }
        // all stop words
        assert_eq!(m.get(RowIndex(3), RowIndex(3)), Some(0.0));
    }

    #[test]
    fn matrix_is_symmetric() {
        let m = matrix(&DOCS);
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(m.get(RowIndex(i), RowIndex(j)), m.get(RowIndex(j), RowIndex(i)));
            }
        }
    }

    #[test]
    fn scores_are_cosines_in_unit_range() {
        let m = matrix(&DOCS);
        let row = m.row(RowIndex(0)).unwrap();
        assert!(row.iter().all(|s| (0.0..=1.0).contains(s)));
        // shares "france luc besson" with row 1, nothing with row 4
        assert!(row[1] > 0.0);
        assert_eq!(row[4], 0.0);
        assert!(row[1] > row[2]);
    }

    #[test]
    fn zero_row_scores_zero_everywhere() {
        let m = matrix(&DOCS);
        assert!(m.row(RowIndex(3)).unwrap().iter().all(|s| *s == 0.0));
    }

    #[test]
    fn identical_documents_score_like_self() {
        let m = matrix(&["Spain Pedro Almodovar", "Spain Pedro Almodovar", "Spain Unknown"]);
        let s = m.get(RowIndex(0), RowIndex(1)).unwrap();
        assert!((s - 1.0).abs() < 1e-12);
        assert!(m.get(RowIndex(0), RowIndex(2)).unwrap() < s);
    }
}

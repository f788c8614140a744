use std::fmt::Debug;

use crate::store::RowIndex;

/// Candidate rows with their scores
pub struct Hits {
    /// (row, score)
    pub list: Vec<(RowIndex, f64)>,
}

impl Hits {
    pub fn new(list: Vec<(RowIndex, f64)>) -> Self {
        Hits { list }
    }

    /// Pair every column of a similarity row with its score, leaving out `exclude`
    pub fn from_scores(scores: &[f64], exclude: RowIndex) -> Self {
        let list = scores
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != exclude.get())
            .map(|(i, s)| (RowIndex(i), *s))
            .collect();
        Hits { list }
    }

    /// Sort by score descending, then by row ascending.
    /// NaN scores are removed.
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.list.retain(|(_, s)| !s.is_nan());
        self.list
            .sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        self
    }

    /// Keep the first `n` entries
    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowIndex> + '_ {
        self.list.iter().map(|(row, _)| *row)
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for (row, score) in &self.list {
                writeln!(f, "    {}: {:.6}", row, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

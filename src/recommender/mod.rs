pub mod hits;

use std::path::Path;

use tracing::{info, warn};

use crate::{
    config::Config,
    error::{RecommenderError, Result},
    similarity::SimilarityMatrix,
    store::{Item, RecordStore, RowIndex},
    title_index::TitleIndex,
    vectorizer::{stop_words::StopWords, TFIDFVectorizer, TermWeightMatrix},
};
use self::hits::Hits;

/// Number of recommendations when the caller does not choose
pub const DEFAULT_TOP_N: usize = 10;

/// Content based recommender over a fixed catalog.
///
/// Everything is computed in the constructor; after that the engine is
/// read-only and can be shared across threads by reference.
#[derive(Debug, Clone)]
pub struct Recommender {
    store: RecordStore,
    vectorizer: TFIDFVectorizer<f64>,
    weights: TermWeightMatrix<f64>,
    similarity: SimilarityMatrix,
    titles: TitleIndex,
    default_n: usize,
}

impl Recommender {
    /// Vectorize the store and precompute all similarities
    pub fn build(store: RecordStore) -> Self {
        let (vectorizer, weights) =
            TFIDFVectorizer::<f64>::fit_transform(&store.soups(), StopWords::english());
        let similarity = SimilarityMatrix::build(&weights);
        let titles = TitleIndex::build(store.items());
        info!(
            items = store.len(),
            vocab = vectorizer.vocab_size(),
            titles = titles.len(),
            "recommender ready"
        );
        Self {
            store,
            vectorizer,
            weights,
            similarity,
            titles,
            default_n: DEFAULT_TOP_N,
        }
    }

    /// Load a CSV catalog and build the engine
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::build(RecordStore::load(path)?))
    }

    /// Load the catalog named by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::from_path(&config.data_path)?.with_default_n(config.top_n))
    }

    /// Count used by `recommend`
    pub fn with_default_n(mut self, n: usize) -> Self {
        self.default_n = n;
        self
    }

    /// Up to `n` titles most similar to `title`, best first.
    ///
    /// Blank or unknown titles give an empty list, and so does any
    /// internal failure. The queried row itself is never returned.
    ///
    /// Exclusion is by row, not by title: when several rows share a title,
    /// `title` resolves to the first of them and the others remain ordinary
    /// candidates, so the same title string can appear in the result.
    pub fn get_recommendations(&self, title: &str, n: usize) -> Vec<String> {
        match self.try_recommendations(title, n) {
            Ok(titles) => titles,
            Err(e) => {
                warn!(title, error = %e, "recommendation lookup failed");
                Vec::new()
            }
        }
    }

    /// `get_recommendations` with the default count
    pub fn recommend(&self, title: &str) -> Vec<String> {
        self.get_recommendations(title, self.default_n)
    }

    /// Fallible form of `get_recommendations`
    pub fn try_recommendations(&self, title: &str, n: usize) -> Result<Vec<String>> {
        Ok(self
            .try_scored(title, n)?
            .into_iter()
            .map(|(title, _)| title)
            .collect())
    }

    /// Like `get_recommendations`, with each title's similarity score
    pub fn scored_recommendations(&self, title: &str, n: usize) -> Vec<(String, f64)> {
        self.try_scored(title, n).unwrap_or_else(|e| {
            warn!(title, error = %e, "recommendation lookup failed");
            Vec::new()
        })
    }

    fn try_scored(&self, title: &str, n: usize) -> Result<Vec<(String, f64)>> {
        let Some(row) = self.titles.lookup(title) else {
            return Ok(Vec::new());
        };
        let scores = self.similarity.row(row).ok_or(RecommenderError::RowOutOfBounds {
            row,
            len: self.similarity.len(),
        })?;

        let mut hits = Hits::from_scores(scores, row);
        hits.sort_by_score().truncate(n);

        hits.list
            .iter()
            .map(|(hit, score)| {
                self.store
                    .get(*hit)
                    .map(|item| (item.title.clone(), *score))
                    .ok_or(RecommenderError::RowOutOfBounds {
                        row: *hit,
                        len: self.store.len(),
                    })
            })
            .collect()
    }

    /// Similarity of two titles, `None` if either is unknown
    pub fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.titles.lookup(a)?;
        let b = self.titles.lookup(b)?;
        self.similarity.get(a, b)
    }

    /// Row of `title` in the catalog
    #[inline]
    pub fn row_of(&self, title: &str) -> Option<RowIndex> {
        self.titles.lookup(title)
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vectorizer.vocab_size()
    }

    #[inline]
    pub fn weights(&self) -> &TermWeightMatrix<f64> {
        &self.weights
    }

    #[inline]
    pub fn similarity_matrix(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    #[inline]
    pub fn default_n(&self) -> usize {
        self.default_n
    }
}

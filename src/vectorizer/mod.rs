pub mod corpus;
pub mod stop_words;
pub mod tfidf;
pub mod token;

use indexmap::IndexSet;
use num::Float;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    store::RowIndex,
    utils::math::vector::SparseVec,
    vectorizer::{corpus::Corpus, stop_words::StopWords, tfidf::{DefaultTFIDFEngine, TFIDFEngine}, token::TokenFrequency},
};

/// One L2-normalized TF-IDF row per document
#[derive(Debug, Clone)]
pub struct TermWeightMatrix<N = f64>
where
    N: Float,
{
    rows: Vec<SparseVec<N>>,
    /// vocabulary size
    cols: usize,
}

impl<N> TermWeightMatrix<N>
where
    N: Float,
{
    /// number of documents
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// number of columns
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn row(&self, row: RowIndex) -> Option<&SparseVec<N>> {
        self.rows.get(row.get())
    }

    #[inline]
    pub fn rows(&self) -> &[SparseVec<N>] {
        &self.rows
    }
}

/// TF-IDF vectorizer fitted on a fixed collection.
///
/// The vocabulary and the IDF weights are computed once by `fit_transform`
/// and never change afterwards.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    /// document frequencies
    pub corpus: Corpus,
    /// sorted vocabulary, position = column
    pub token_dim_sample: IndexSet<Box<str>>,
    /// IDF weight per column
    pub idf_vec: Vec<N>,
    stop_words: StopWords,
    _marker: std::marker::PhantomData<fn() -> E>,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Fit on `docs` and return the vectorizer with the weight matrix, rows in input order
    pub fn fit_transform<S>(docs: &[S], stop_words: StopWords) -> (Self, TermWeightMatrix<N>)
    where
        S: AsRef<str> + Sync,
    {
        let freqs: Vec<TokenFrequency> = docs
            .par_iter()
            .map(|doc| TokenFrequency::from_text(doc.as_ref(), &stop_words))
            .collect();

        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_set(&freq.token_set_ref_str());
        }
        let token_dim_sample = corpus.sorted_vocab();
        let idf_vec = E::idf_vec(&corpus, &token_dim_sample);
        debug!(docs = docs.len(), vocab = token_dim_sample.len(), "vocabulary fitted");

        let vectorizer = Self {
            corpus,
            token_dim_sample,
            idf_vec,
            stop_words,
            _marker: std::marker::PhantomData,
        };
        let rows = freqs
            .par_iter()
            .map(|freq| vectorizer.weigh(freq))
            .collect();
        let matrix = TermWeightMatrix {
            rows,
            cols: vectorizer.vocab_size(),
        };
        (vectorizer, matrix)
    }

    /// Weight a document against the frozen vocabulary
    pub fn transform(&self, doc: &str) -> SparseVec<N> {
        self.weigh(&TokenFrequency::from_text(doc, &self.stop_words))
    }

    fn weigh(&self, freq: &TokenFrequency) -> SparseVec<N> {
        let tf = E::tf_vec(freq, &self.token_dim_sample);
        let mut row = SparseVec::from_pairs(
            self.vocab_size(),
            tf.raw_iter().map(|(idx, &v)| (idx, v * self.idf_vec[idx])),
        );
        row.l2_normalize();
        row
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.token_dim_sample.len()
    }

    /// Column of `term`, if it is in the vocabulary
    #[inline]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.token_dim_sample.get_index_of(term)
    }

    /// IDF weight of `term`, if it is in the vocabulary
    #[inline]
    pub fn idf(&self, term: &str) -> Option<N> {
        self.term_index(term).map(|idx| self.idf_vec[idx])
    }

    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.corpus.get_doc_num()
    }
}

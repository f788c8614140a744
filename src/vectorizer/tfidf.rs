use indexmap::IndexSet;

use crate::{utils::math::vector::SparseVec, vectorizer::{corpus::Corpus, token::TokenFrequency}};

pub trait TFIDFEngine<N>
where
    N: num::Float,
{
    /// Build the IDF vector, one weight per entry of `token_dim_sample`
    /// # Arguments
    /// * `corpus` - document frequencies of the whole collection
    /// * `token_dim_sample` - vocabulary, position = column
    fn idf_vec(corpus: &Corpus, token_dim_sample: &IndexSet<Box<str>>) -> Vec<N>;
    /// Build the TF vector of one document over `token_dim_sample`.
    /// Tokens outside the vocabulary are ignored.
    fn tf_vec(freq: &TokenFrequency, token_dim_sample: &IndexSet<Box<str>>) -> SparseVec<N>;
}

/// Default TF-IDF engine
/// tf = raw count, idf = ln((1 + n) / (1 + df)) + 1
/// implemented for `f32` and `f64`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// smoothed idf
    #[inline]
    pub fn smooth_idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    fn idf_vec(corpus: &Corpus, token_dim_sample: &IndexSet<Box<str>>) -> Vec<f64> {
        let doc_num = corpus.get_doc_num();
        token_dim_sample
            .iter()
            .map(|token| Self::smooth_idf(doc_num, corpus.get_token_count(token)))
            .collect()
    }

    fn tf_vec(freq: &TokenFrequency, token_dim_sample: &IndexSet<Box<str>>) -> SparseVec<f64> {
        SparseVec::from_pairs(
            token_dim_sample.len(),
            freq.iter()
                .filter_map(|(token, count)| token_dim_sample.get_index_of(token).map(|idx| (idx, count as f64))),
        )
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    fn idf_vec(corpus: &Corpus, token_dim_sample: &IndexSet<Box<str>>) -> Vec<f32> {
        let doc_num = corpus.get_doc_num();
        token_dim_sample
            .iter()
            .map(|token| Self::smooth_idf(doc_num, corpus.get_token_count(token)) as f32)
            .collect()
    }

    fn tf_vec(freq: &TokenFrequency, token_dim_sample: &IndexSet<Box<str>>) -> SparseVec<f32> {
        SparseVec::from_pairs(
            token_dim_sample.len(),
            freq.iter()
                .filter_map(|(token, count)| token_dim_sample.get_index_of(token).map(|idx| (idx, count as f32))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::stop_words::StopWords;

    fn corpus_of(docs: &[&[&str]]) -> Corpus {
        let mut corpus = Corpus::new();
        for doc in docs {
            corpus.add_set(doc);
        }
        corpus
    }

    #[test]
    fn smooth_idf_matches_formula() {
        // token in every document
        assert!((DefaultTFIDFEngine::smooth_idf(3, 3) - 1.0).abs() < 1e-12);
        // token in one of three documents: ln(4/2) + 1
        assert!((DefaultTFIDFEngine::smooth_idf(3, 1) - (2f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn rarer_tokens_weigh_more() {
        let corpus = corpus_of(&[&["common", "rare"], &["common"], &["common"]]);
        let vocab = corpus.sorted_vocab();
        let idf: Vec<f64> = DefaultTFIDFEngine::idf_vec(&corpus, &vocab);
        let common = idf[vocab.get_index_of("common").unwrap()];
        let rare = idf[vocab.get_index_of("rare").unwrap()];
        assert!(rare > common);
        assert!((common - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tf_uses_raw_counts_and_skips_unknown_tokens() {
        let vocab: IndexSet<Box<str>> = ["alpha", "beta"].into_iter().map(Box::from).collect();
        let freq = TokenFrequency::from_text("beta beta gamma", &StopWords::none());
        let tf: SparseVec<f64> = DefaultTFIDFEngine::tf_vec(&freq, &vocab);
        assert_eq!(tf.len(), 2);
        assert_eq!(tf.get(0), Some(0.0));
        assert_eq!(tf.get(1), Some(2.0));
        assert_eq!(tf.nnz(), 1);
    }
}

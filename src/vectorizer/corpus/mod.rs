use indexmap::{IndexMap, IndexSet};

/// keep document count and per-token document frequency
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// number of documents each token appears in
    pub token_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            token_counts: IndexMap::new(),
        }
    }

    /// Add one document's distinct tokens.
    /// Each token is counted once per call, repeats in `tokens` are ignored.
    pub fn add_set<T>(&mut self, tokens: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        let mut seen: IndexSet<&str> = IndexSet::with_capacity(tokens.len());
        for token in tokens {
            let token = token.as_ref();
            if !seen.insert(token) {
                continue;
            }
            match self.token_counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    self.token_counts.insert(token.into(), 1);
                }
            }
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `token`
    #[inline]
    pub fn get_token_count(&self, token: &str) -> u64 {
        self.token_counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.token_counts.len()
    }

    /// All tokens, sorted lexicographically.
    /// The position in this set is the token's column.
    pub fn sorted_vocab(&self) -> IndexSet<Box<str>> {
        let mut tokens: Vec<Box<str>> = self.token_counts.keys().cloned().collect();
        tokens.sort_unstable();
        tokens.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_documents_not_occurrences() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["unknown", "unknown", "france"]);
        corpus.add_set(&["unknown"]);
        corpus.add_set::<&str>(&[]);
        assert_eq!(corpus.get_doc_num(), 3);
        assert_eq!(corpus.get_token_count("unknown"), 2);
        assert_eq!(corpus.get_token_count("france"), 1);
        assert_eq!(corpus.get_token_count("spain"), 0);
        assert_eq!(corpus.vocab_size(), 2);
    }

    #[test]
    fn vocab_is_sorted() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["zeta", "alpha"]);
        corpus.add_set(&["mid"]);
        let vocab_set = corpus.sorted_vocab();
        let vocab: Vec<&str> = vocab_set.iter().map(|t| &**t).collect();
        assert_eq!(vocab, vec!["alpha", "mid", "zeta"]);
    }
}

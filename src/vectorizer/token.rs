use indexmap::IndexMap;

use super::stop_words::StopWords;

/// Split text into lowercase word tokens.
///
/// A token is a maximal run of alphanumeric characters or `_`, and must be
/// at least two characters long. Punctuation and whitespace separate tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|tok| tok.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// Token occurrence counts for one document, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Tokenize `text`, drop stop words and count what remains
    pub fn from_text(text: &str, stop_words: &StopWords) -> Self {
        let mut freq = Self::new();
        for token in tokenize(text) {
            if !stop_words.contains(&token) {
                freq.add_token(&token);
            }
        }
        freq
    }

    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        match self.token_count.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.token_count.insert(token.to_string(), 1);
            }
        }
        self.total_token_count += 1;
        self
    }

    /// Count of `token`, 0 if absent
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// Total number of tokens counted, repeats included
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.token_count.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Distinct tokens in first-seen order
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(String::as_str).collect()
    }
}

//! Content based title recommender.
//! Items are described by their production country, director and cast,
//! vectorized with TF-IDF and compared with cosine similarity.

pub mod config;
pub mod error;
pub mod recommender;
pub mod similarity;
pub mod store;
pub mod title_index;
pub mod utils;
pub mod vectorizer;

/// Recommendation engine
/// The top-level struct of this crate. Built once from a catalog, it holds:
/// - The normalized catalog items
/// - The fitted TF-IDF vectorizer and the per-item weight rows
/// - The all-pairs similarity matrix
/// - The title lookup index
///
/// After construction nothing is mutated, so a `&Recommender` (or an
/// `Arc<Recommender>`) can be handed to any number of threads.
///
/// Queries never fail: blank titles, unknown titles and internal errors
/// all come back as an empty list.
pub use recommender::Recommender;

/// Catalog loading
/// `RecordStore` reads the CSV catalog, fills missing country, director and
/// cast cells with `"Unknown"` and builds each item's feature soup.
pub use store::{Item, Record, RecordStore, RowIndex};

/// TF-IDF Vectorizer
/// Fits a frozen vocabulary and smoothed IDF weights over every feature soup
/// and produces one L2-normalized sparse row per item.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine type (e.g., `DefaultTFIDFEngine`)
pub use vectorizer::{TFIDFVectorizer, TermWeightMatrix};

/// TF IDF Calculation Engine Trait
/// By implementing this trait, you can plug different weighting strategies
/// into `TFIDFVectorizer<N, E>`.
/// `DefaultTFIDFEngine` uses raw counts and smoothed IDF.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Dense all-pairs cosine similarity
pub use similarity::SimilarityMatrix;

/// Trimmed title to row lookup, first row wins on duplicates
pub use title_index::TitleIndex;

pub use config::Config;
pub use error::{RecommenderError, Result};

//! Query engine
//!
//! Filter and sort pipeline over the book catalog. Given a free-text
//! query and a [`QueryConfig`], produces the matching, ordered subset
//! of the corpus.
//!
//! All filter stages are independent predicates ANDed together; the
//! sort is applied last, after the full filtered set is known. Text,
//! category, and language matching are all case-insensitive (one
//! policy everywhere). Filtering never fails: the config is fully
//! enumerated, so there is no unknown value to mishandle.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::data::Book;

// =============================================================================
// Configuration
// =============================================================================

/// Filter on a single string field (category or language)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldFilter {
    /// No filtering on this dimension
    #[default]
    All,
    /// Case-insensitive exact match against the field value
    #[serde(untagged)]
    Only(String),
}

impl FieldFilter {
    /// Convenience constructor for the `Only` variant
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    fn passes(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted.eq_ignore_ascii_case(value),
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Best text match first; catalog order when the query is empty
    #[default]
    Relevance,
    /// Highest rated first
    Rating,
    /// Most downloaded first
    Downloads,
    /// Most recently published first
    Newest,
    /// Title A-Z
    Title,
}

/// Filter and sort configuration for one search
///
/// Transient: recomputed per interaction, never persisted.
/// `Default` means "no filtering, relevance order".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryConfig {
    /// Category selector
    #[serde(default)]
    pub category: FieldFilter,
    /// Minimum rating threshold; 0.0 disables the filter
    #[serde(default)]
    pub min_rating: f64,
    /// Language selector
    #[serde(default)]
    pub language: FieldFilter,
    /// Result ordering
    #[serde(default)]
    pub sort: SortOrder,
}

// =============================================================================
// Search
// =============================================================================

/// Search the corpus
///
/// # Arguments
/// * `books` - Corpus to search, in catalog order
/// * `query` - Free-text query; empty or whitespace passes everything
/// * `config` - Filter and sort configuration
///
/// # Returns
/// Matching books, ordered per `config.sort`. Ties preserve catalog
/// order (all sorts are stable).
pub fn search<'a>(books: &'a [Book], query: &str, config: &QueryConfig) -> Vec<&'a Book> {
    let query = query.trim().to_lowercase();

    let mut matches: Vec<&Book> = books
        .iter()
        .filter(|book| matches_text(book, &query))
        .filter(|book| config.category.passes(&book.category))
        .filter(|book| book.rating >= config.min_rating)
        .filter(|book| config.language.passes(&book.language))
        .collect();

    sort(&mut matches, &query, config.sort);
    matches
}

/// Case-insensitive substring match against title, author, or any tag
///
/// An empty query is the identity on the input set.
fn matches_text(book: &Book, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    book.title.to_lowercase().contains(query)
        || book.author.to_lowercase().contains(query)
        || book
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

fn sort(books: &mut [&Book], query: &str, order: SortOrder) {
    match order {
        SortOrder::Relevance => {
            // No query means no scoring signal; keep catalog order.
            if !query.is_empty() {
                books.sort_by_key(|book| std::cmp::Reverse(relevance(book, query)));
            }
        }
        SortOrder::Rating => {
            books.sort_by(|a, b| compare_f64_desc(a.rating, b.rating));
        }
        SortOrder::Downloads => {
            books.sort_by(|a, b| b.downloads.cmp(&a.downloads));
        }
        SortOrder::Newest => {
            books.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        }
        SortOrder::Title => {
            books.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
    }
}

/// Relevance score for one book against a non-empty lowercased query
///
/// Field weights: title matches outrank author matches, which outrank
/// tag matches. A match at the start of the field earns a bonus so
/// prefix hits surface first. Tag hits accumulate per matching tag.
fn relevance(book: &Book, query: &str) -> u32 {
    let mut score = 0;

    let title = book.title.to_lowercase();
    if title.contains(query) {
        score += 100;
        if title.starts_with(query) {
            score += 40;
        }
    }

    let author = book.author.to_lowercase();
    if author.contains(query) {
        score += 50;
        if author.starts_with(query) {
            score += 20;
        }
    }

    for tag in &book.tags {
        if tag.to_lowercase().contains(query) {
            score += 25;
        }
    }

    score
}

/// Descending comparison for ratings
///
/// Ratings are seeded constants in 0.0..=5.0, never NaN; incomparable
/// pairs fall back to equal rather than panicking.
fn compare_f64_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

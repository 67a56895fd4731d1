//! Keyword scoring module
//!
//! Scores a search keyword on:
//! - Search volume (100-100000): estimated monthly searches
//! - Difficulty (1-100): ranking competitiveness, higher is harder
//! - Estimated earnings: projected monthly revenue in USD
//! plus up to 10 related-keyword suggestions.

pub mod analyzer;

pub use analyzer::{KeywordAnalyzer, KeywordReport};

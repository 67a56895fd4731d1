//! Keyword Analyzer
//!
//! Scores a normalized keyword with deterministic heuristics to help
//! sellers judge demand and competition:
//! - Search volume (100-100000): estimated monthly searches
//! - Difficulty (1-100): ranking competitiveness, higher is harder
//! - Estimated earnings: projected monthly revenue at an assumed price
//! - Related keywords: up to 10 suggested variations

use serde::Serialize;

use crate::error::AnalyzeError;

/// Marketplace categories that carry extra search demand
const CATEGORIES: [&str; 16] = [
    "handmade",
    "vintage",
    "craft",
    "custom",
    "personalized",
    "gift",
    "jewelry",
    "art",
    "home",
    "decor",
    "wedding",
    "christmas",
    "birthday",
    "unique",
    "rustic",
    "boho",
];

/// Modifiers that signal a niche listing with lower competition
const NICHE_MODIFIERS: [&str; 4] = ["personalized", "custom", "handmade", "vintage"];

/// Prefix modifiers for related-keyword suggestions
const SUGGESTION_MODIFIERS: [&str; 5] =
    ["handmade", "custom", "personalized", "unique", "vintage"];

/// Occasion terms for related-keyword suggestions
const OCCASIONS: [&str; 4] = ["wedding", "christmas", "birthday", "gift"];

/// Style prefixes, applied to short keywords only
const STYLES: [&str; 4] = ["rustic", "modern", "boho", "minimalist"];

/// Assumed average listing price in USD
const AVG_PRICE_USD: f64 = 25.0;

/// Maximum number of related-keyword suggestions
const MAX_RELATED: usize = 10;

/// Scored result for a single keyword
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordReport {
    /// Normalized (lower-cased, trimmed) keyword
    pub keyword: String,
    /// Estimated monthly search volume (100-100000)
    pub search_volume: u32,
    /// Ranking difficulty (1-100), higher is harder
    pub difficulty: u8,
    /// Estimated monthly earnings in USD, rounded to cents
    pub estimated_earnings: f64,
    /// Up to 10 suggested keyword variations
    pub related_keywords: Vec<String>,
}

/// Keyword analyzer
pub struct KeywordAnalyzer;

impl KeywordAnalyzer {
    /// Analyze a raw keyword and return the full report
    ///
    /// The input is lower-cased and trimmed before scoring; input that
    /// normalizes to the empty string is rejected.
    pub fn analyze(raw: &str) -> Result<KeywordReport, AnalyzeError> {
        let keyword = raw.trim().to_lowercase();

        if keyword.is_empty() {
            return Err(AnalyzeError::EmptyKeyword);
        }

        let search_volume = Self::estimate_search_volume(&keyword);
        let difficulty = Self::calculate_difficulty(&keyword);
        let estimated_earnings = Self::estimate_earnings(search_volume, difficulty);
        let related_keywords = Self::generate_related_keywords(&keyword);

        Ok(KeywordReport {
            keyword,
            search_volume,
            difficulty,
            estimated_earnings,
            related_keywords,
        })
    }

    /// Count category terms occurring as substrings of the keyword
    fn category_count(keyword: &str) -> usize {
        CATEGORIES.iter().filter(|cat| keyword.contains(*cat)).count()
    }

    /// Estimate monthly search volume
    ///
    /// Shorter keywords start higher, category terms boost demand, 5+
    /// word phrases are halved, and a character-code sum adds 0-29%
    /// deterministic variation. Clamped to 100-100000.
    fn estimate_search_volume(keyword: &str) -> u32 {
        let word_count = keyword.split_whitespace().count();

        let mut base_volume: f64 = match word_count {
            1 => 10_000.0,
            2 => 5_000.0,
            _ => 2_000.0,
        };

        let category_boost = Self::category_count(keyword);
        base_volume *= 1.0 + category_boost as f64 * 0.5;

        // Long-tail phrases see far fewer searches
        if word_count > 4 {
            base_volume *= 0.5;
        }

        // Deterministic per-keyword variation from the code-point sum
        let keyword_hash: u64 = keyword.chars().map(|c| c as u64).sum();
        let variation = (keyword_hash % 30) as f64 / 100.0;

        let volume = (base_volume * (1.0 + variation)) as i64;

        volume.clamp(100, 100_000) as u32
    }

    /// Calculate ranking difficulty (1-100 scale)
    ///
    /// Shorter keywords are more competitive, category terms add
    /// competition, long-tail phrases and niche modifiers reduce it.
    fn calculate_difficulty(keyword: &str) -> u8 {
        let word_count = keyword.split_whitespace().count();

        let mut difficulty: i32 = match word_count {
            1 => 80,
            2 => 60,
            _ => 40,
        };

        difficulty += Self::category_count(keyword) as i32 * 10;

        // Long-tail cutoff is 4+ words here, unlike the 5+ word volume
        // penalty above
        if word_count >= 4 {
            difficulty -= 20;
        }

        if NICHE_MODIFIERS.iter().any(|m| keyword.contains(m)) {
            difficulty -= 5;
        }

        difficulty.clamp(1, 100) as u8
    }

    /// Estimate monthly earnings in USD from volume and difficulty
    ///
    /// Rounded to cents, half away from zero.
    fn estimate_earnings(search_volume: u32, difficulty: u8) -> f64 {
        // Easier keywords convert better (0-2%)
        let conversion_rate = 0.02 * (100 - i32::from(difficulty)) as f64 / 100.0;

        // Click-through rate from search results
        let ctr = if difficulty < 50 { 0.1 } else { 0.05 };

        let potential_clicks = f64::from(search_volume) * ctr;
        let potential_sales = potential_clicks * conversion_rate;
        let revenue = potential_sales * AVG_PRICE_USD;

        (revenue * 100.0).round() / 100.0
    }

    /// Generate up to 10 related keyword suggestions
    ///
    /// Builds prefix/suffix variations from the fixed modifier, occasion
    /// and style lists, skipping terms the keyword already contains, then
    /// deduplicates preserving first occurrence.
    fn generate_related_keywords(keyword: &str) -> Vec<String> {
        let word_count = keyword.split_whitespace().count();
        let mut related: Vec<String> = Vec::new();

        for modifier in SUGGESTION_MODIFIERS {
            if !keyword.contains(modifier) {
                related.push(format!("{modifier} {keyword}"));
            }
        }

        for occasion in OCCASIONS {
            if !keyword.contains(occasion) {
                related.push(format!("{keyword} {occasion}"));
                related.push(format!("{occasion} {keyword}"));
            }
        }

        // Style prefixes only apply to short keywords
        if word_count <= 2 {
            for style in STYLES {
                if !keyword.contains(style) {
                    related.push(format!("{style} {keyword}"));
                }
            }
        }

        let mut unique: Vec<String> = Vec::new();
        for suggestion in related {
            if !unique.contains(&suggestion) {
                unique.push(suggestion);
            }
        }
        unique.truncate(MAX_RELATED);

        unique
    }
}

//! Affiliation classification and paper filtering
//!
//! The core decision logic of the crate: deciding whether an affiliation
//! string denotes a for-profit pharmaceutical/biotech entity rather than an
//! academic, government, or clinical institution, filtering papers down to
//! those with at least one industry author, and aggregating the results.

pub mod filter;
pub mod reference;
pub mod summary;

pub use filter::PaperFilter;
pub use summary::summarize;

use reference::{ACADEMIC_KEYWORDS, BIOTECH_COMPANIES, INDUSTRY_KEYWORDS, PHARMA_COMPANIES};

/// Label returned by [`AffiliationClassifier::extract_company_name`] for
/// empty input
pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Classifies affiliation strings as academic vs. industry
///
/// Classification is a pure function of the input string and the static
/// reference lists: deterministic, order-independent, and safe to share
/// across threads. Matching is case-insensitive substring containment with
/// no word-boundary enforcement; a term inside an unrelated longer word can
/// therefore false-positive. That matching behavior is kept deliberately
/// for compatibility with the established report output.
///
/// # Example
///
/// ```
/// use pharma_papers_rs::AffiliationClassifier;
///
/// let classifier = AffiliationClassifier::new();
/// assert!(classifier.is_industry_affiliation("Genentech, Inc., South San Francisco, CA"));
/// assert!(!classifier.is_industry_affiliation("Department of Medicine, Harvard University"));
/// ```
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    pharma_companies: &'static [&'static str],
    biotech_companies: &'static [&'static str],
    academic_keywords: &'static [&'static str],
    industry_keywords: &'static [&'static str],
}

impl AffiliationClassifier {
    /// Create a classifier over the built-in reference lists
    pub fn new() -> Self {
        Self {
            pharma_companies: PHARMA_COMPANIES,
            biotech_companies: BIOTECH_COMPANIES,
            academic_keywords: ACADEMIC_KEYWORDS,
            industry_keywords: INDUSTRY_KEYWORDS,
        }
    }

    /// Decide whether an affiliation denotes a pharma/biotech company
    ///
    /// Order of checks:
    /// 1. empty input is not industry;
    /// 2. any academic keyword hit short-circuits to `false` (academic
    ///    signal takes precedence over company names appearing later in
    ///    the string);
    /// 3. any known company name hit is `true`;
    /// 4. any generic industry keyword hit is `true`;
    /// 5. otherwise `false`.
    pub fn is_industry_affiliation(&self, affiliation: &str) -> bool {
        if affiliation.is_empty() {
            return false;
        }

        let lower = affiliation.to_lowercase();

        if self.is_academic(&lower) {
            return false;
        }

        if self.company_names().any(|company| lower.contains(company)) {
            return true;
        }

        self.industry_keywords.iter().any(|kw| lower.contains(kw))
    }

    /// Extract a best-effort company label from an affiliation string
    ///
    /// A known company name match returns that name title-cased. When
    /// several company entries match, the longest entry wins, ties broken
    /// lexicographically, so the result never depends on list order.
    /// Without a company match, the first comma-separated segment is used
    /// if it is longer than 3 characters; failing that, the affiliation is
    /// returned unchanged. This is best-effort labeling, not
    /// canonicalization.
    pub fn extract_company_name(&self, affiliation: &str) -> String {
        if affiliation.is_empty() {
            return UNKNOWN_COMPANY.to_string();
        }

        let lower = affiliation.to_lowercase();

        let best_match = self
            .company_names()
            .filter(|company| lower.contains(*company))
            .min_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        if let Some(company) = best_match {
            return title_case(company);
        }

        if let Some(segment) = affiliation.split(',').next() {
            let candidate = segment.trim();
            if candidate.len() > 3 {
                return candidate.to_string();
            }
        }

        affiliation.to_string()
    }

    fn is_academic(&self, lower: &str) -> bool {
        self.academic_keywords.iter().any(|kw| lower.contains(kw))
    }

    fn company_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pharma_companies
            .iter()
            .chain(self.biotech_companies.iter())
            .copied()
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Capitalize the first letter of every alphabetic run, lowercasing the
/// rest ("bristol-myers squibb" -> "Bristol-Myers Squibb")
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }
    result
}

use serde::{Deserialize, Serialize};

/// Sentinel used when an article carries no title
pub const NO_TITLE: &str = "No title available";

/// Sentinel used when no publication date can be extracted
pub const UNKNOWN_DATE: &str = "Unknown";

/// Sentinel used when no corresponding author email is found
pub const NO_EMAIL: &str = "No email found";

/// A PubMed author with verbatim affiliation strings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// Display name: "fore last", falling back to "initials last", then
    /// the last name alone. Authors without a last name are dropped by
    /// the parser.
    pub name: String,
    /// Affiliation strings as they appear in the XML (may be empty)
    pub affiliations: Vec<String>,
}

/// A PubMed article as extracted from an EFetch response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// PubMed ID
    pub pmid: String,
    /// Article title (`NO_TITLE` if absent)
    pub title: String,
    /// Publication date normalized to `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`
    /// (`UNKNOWN_DATE` if absent)
    pub pub_date: String,
    /// Authors in document order
    pub authors: Vec<Author>,
    /// Corresponding author email (`NO_EMAIL` if none found)
    pub corresponding_author_email: String,
    /// Abstract text, kept because the email scan covers it
    pub abstract_text: Option<String>,
}

/// A paper that passed the industry-author filter, paired with the
/// collections derived during filtering
///
/// This is a fresh value rather than mutated input: the original `Paper`
/// stays untouched and the derived sets are populated exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredPaper {
    /// The paper as fetched
    pub paper: Paper,
    /// Names of authors with at least one industry affiliation, deduplicated,
    /// in first-seen order
    pub non_academic_authors: Vec<String>,
    /// Company labels extracted from industry affiliations, deduplicated,
    /// in first-seen order
    pub company_affiliations: Vec<String>,
}

/// Aggregate statistics over a filtered paper set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    /// Number of papers in the filtered set
    pub total_papers: usize,
    /// Number of distinct company labels across all papers
    pub total_companies: usize,
    /// Number of distinct non-academic author names across all papers
    pub total_non_academic_authors: usize,
    /// Distinct company labels, lexicographically sorted
    pub companies: Vec<String>,
}

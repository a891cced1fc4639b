use std::collections::BTreeSet;

use crate::pubmed::models::{FilterSummary, FilteredPaper};

/// Aggregate filtered papers into distinct-company and distinct-author
/// counts
///
/// Companies and author names are unioned across papers by exact string
/// identity, so an author appearing on several papers counts once. The
/// company list comes back lexicographically sorted. Empty input yields an
/// all-zero summary.
///
/// # Example
///
/// ```
/// use pharma_papers_rs::classify::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.total_papers, 0);
/// assert!(summary.companies.is_empty());
/// ```
pub fn summarize(papers: &[FilteredPaper]) -> FilterSummary {
    let mut companies: BTreeSet<&str> = BTreeSet::new();
    let mut authors: BTreeSet<&str> = BTreeSet::new();

    for paper in papers {
        companies.extend(paper.company_affiliations.iter().map(String::as_str));
        authors.extend(paper.non_academic_authors.iter().map(String::as_str));
    }

    FilterSummary {
        total_papers: papers.len(),
        total_companies: companies.len(),
        total_non_academic_authors: authors.len(),
        companies: companies.into_iter().map(str::to_string).collect(),
    }
}

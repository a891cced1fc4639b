use tracing::{debug, info, instrument};

use crate::classify::AffiliationClassifier;
use crate::pubmed::models::{FilteredPaper, Paper};

/// Filters papers down to those with at least one pharma/biotech author
///
/// Applies the [`AffiliationClassifier`] to every affiliation of every
/// author and builds the per-paper derived collections. The input papers
/// are consumed; each emitted [`FilteredPaper`] pairs the original paper
/// with its derived sets.
#[derive(Debug, Clone, Default)]
pub struct PaperFilter {
    classifier: AffiliationClassifier,
}

impl PaperFilter {
    /// Create a filter over the built-in reference lists
    pub fn new() -> Self {
        Self {
            classifier: AffiliationClassifier::new(),
        }
    }

    /// Create a filter around an existing classifier
    pub fn with_classifier(classifier: AffiliationClassifier) -> Self {
        Self { classifier }
    }

    /// Filter papers, preserving input order
    ///
    /// A paper is kept iff at least one of its authors has an industry
    /// affiliation. Author names and company labels are deduplicated
    /// exactly (case-sensitive) within each paper, in first-seen order.
    #[instrument(skip(self, papers), fields(total = papers.len()))]
    pub fn filter(&self, papers: Vec<Paper>) -> Vec<FilteredPaper> {
        let total = papers.len();
        let filtered: Vec<FilteredPaper> = papers
            .into_iter()
            .filter_map(|paper| self.filter_paper(paper))
            .collect();

        info!(
            kept = filtered.len(),
            total, "filtered papers with pharma/biotech authors"
        );
        filtered
    }

    fn filter_paper(&self, paper: Paper) -> Option<FilteredPaper> {
        let mut non_academic_authors: Vec<String> = Vec::new();
        let mut company_affiliations: Vec<String> = Vec::new();

        for author in &paper.authors {
            for affiliation in &author.affiliations {
                if !self.classifier.is_industry_affiliation(affiliation) {
                    continue;
                }
                if !non_academic_authors.contains(&author.name) {
                    non_academic_authors.push(author.name.clone());
                }
                let company = self.classifier.extract_company_name(affiliation);
                if !company_affiliations.contains(&company) {
                    company_affiliations.push(company);
                }
            }
        }

        if non_academic_authors.is_empty() {
            debug!(pmid = %paper.pmid, "no industry authors, dropping paper");
            return None;
        }

        Some(FilteredPaper {
            paper,
            non_academic_authors,
            company_affiliations,
        })
    }
}

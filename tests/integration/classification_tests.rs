//! Black-box tests for the classification and filtering engine
//!
//! Covers the documented decision properties through the public API only.

use pharma_papers_rs::classify::summarize;
use pharma_papers_rs::{AffiliationClassifier, Author, Paper, PaperFilter};
use rstest::rstest;

fn paper_with_authors(pmid: &str, authors: Vec<Author>) -> Paper {
    Paper {
        pmid: pmid.to_string(),
        title: "No title available".to_string(),
        pub_date: "Unknown".to_string(),
        authors,
        corresponding_author_email: "No email found".to_string(),
        abstract_text: None,
    }
}

fn author(name: &str, affiliations: &[&str]) -> Author {
    Author {
        name: name.to_string(),
        affiliations: affiliations.iter().map(|s| s.to_string()).collect(),
    }
}

#[rstest]
// Academic keyword anywhere wins, even alongside a company name
#[case("Pfizer Chair, Department of Medicine, Harvard University", false)]
#[case("Novartis Institutes for BioMedical Research", false)]
// Known company and no academic keyword
#[case("Genentech, Inc., South San Francisco, CA", true)]
#[case("AstraZeneca, Gaithersburg, MD, USA", true)]
// Generic industry keyword without a listed company
#[case("XYZ Therapeutics, Boston", true)]
#[case("Frontier Life Sciences GmbH, Munich, Germany", true)]
// Neither signal
#[case("Smithsonian Archives, Washington DC", false)]
fn classifier_decision_table(#[case] affiliation: &str, #[case] expected: bool) {
    let classifier = AffiliationClassifier::new();
    assert_eq!(
        classifier.is_industry_affiliation(affiliation),
        expected,
        "affiliation: {affiliation}"
    );
}

#[test]
fn extract_company_name_is_idempotent_for_recognized_labels() {
    let classifier = AffiliationClassifier::new();
    for raw in [
        "Genentech, Inc., South San Francisco, CA",
        "Pfizer Global Research, Groton, CT",
        "Moderna, Cambridge, MA",
    ] {
        let label = classifier.extract_company_name(raw);
        assert_eq!(classifier.extract_company_name(&label), label);
    }
}

#[test]
fn mixed_record_keeps_only_industry_author() {
    let papers = vec![paper_with_authors(
        "1",
        vec![author("A", &["MIT"]), author("B", &["Moderna"])],
    )];

    let filtered = PaperFilter::new().filter(papers);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].non_academic_authors, vec!["B"]);
    assert_eq!(filtered[0].company_affiliations, vec!["Moderna"]);
}

#[test]
fn fully_academic_record_is_excluded() {
    let papers = vec![paper_with_authors(
        "1",
        vec![author("A", &["Stanford University"])],
    )];

    assert!(PaperFilter::new().filter(papers).is_empty());
}

#[test]
fn summarize_empty_input() {
    let summary = summarize(&[]);
    assert_eq!(summary.total_papers, 0);
    assert_eq!(summary.total_companies, 0);
    assert_eq!(summary.total_non_academic_authors, 0);
    assert!(summary.companies.is_empty());
}

#[test]
fn same_company_on_two_records_counts_once() {
    let papers = vec![
        paper_with_authors("1", vec![author("A", &["Pfizer, New York"])]),
        paper_with_authors("2", vec![author("B", &["Pfizer, Groton"])]),
    ];

    let filtered = PaperFilter::new().filter(papers);
    let summary = summarize(&filtered);
    assert_eq!(summary.total_papers, 2);
    assert_eq!(summary.total_companies, 1);
    assert_eq!(summary.companies, vec!["Pfizer"]);
}

#[test]
fn summary_company_list_is_sorted() {
    let papers = vec![
        paper_with_authors("1", vec![author("A", &["Vertex, Boston"])]),
        paper_with_authors("2", vec![author("B", &["Amgen, Thousand Oaks"])]),
        paper_with_authors("3", vec![author("C", &["Moderna, Cambridge"])]),
    ];

    let filtered = PaperFilter::new().filter(papers);
    let summary = summarize(&filtered);
    assert_eq!(summary.companies, vec!["Amgen", "Moderna", "Vertex"]);
}

#[test]
fn classification_does_not_mutate_input_paper() {
    let original = paper_with_authors("7", vec![author("A", &["Moderna"])]);
    let title = original.title.clone();

    let filtered = PaperFilter::new().filter(vec![original]);
    assert_eq!(filtered[0].paper.title, title);
    assert_eq!(filtered[0].paper.authors.len(), 1);
    assert_eq!(filtered[0].paper.authors[0].affiliations, vec!["Moderna"]);
}

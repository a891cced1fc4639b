//! CSV report writing and console summary output

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use tracing::{info, instrument};

use crate::classify::summarize;
use crate::error::Result;
use crate::pubmed::models::FilteredPaper;

/// Report columns, in output order
const COLUMNS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Delimiter between list entries within a single CSV cell
const LIST_SEPARATOR: &str = "; ";

/// Write filtered papers as CSV to a file
#[instrument(skip_all, fields(papers = papers.len(), path = %path.as_ref().display()))]
pub fn write_csv_file(papers: &[FilteredPaper], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(papers, file)?;
    info!("report written");
    Ok(())
}

/// Write filtered papers as CSV to stdout
pub fn write_csv_stdout(papers: &[FilteredPaper]) -> Result<()> {
    write_csv(papers, io::stdout().lock())
}

/// Write filtered papers as CSV to any writer
///
/// All fields are quoted. Empty author/company lists are rendered as the
/// literal `None` rather than an empty cell.
pub fn write_csv<W: Write>(papers: &[FilteredPaper], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(COLUMNS)?;
    for entry in papers {
        let authors = join_or_none(&entry.non_academic_authors);
        let companies = join_or_none(&entry.company_affiliations);
        csv_writer.write_record([
            entry.paper.pmid.as_str(),
            entry.paper.title.as_str(),
            entry.paper.pub_date.as_str(),
            authors.as_str(),
            companies.as_str(),
            entry.paper.corresponding_author_email.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(LIST_SEPARATOR)
    }
}

/// Print aggregate statistics for the filtered set to stdout
pub fn print_summary(papers: &[FilteredPaper]) {
    let summary = summarize(papers);

    println!("\n=== SUMMARY STATISTICS ===");
    println!("Total papers found: {}", summary.total_papers);
    println!("Total companies: {}", summary.total_companies);
    println!(
        "Total non-academic authors: {}",
        summary.total_non_academic_authors
    );

    if !summary.companies.is_empty() {
        println!("\nCompanies found:");
        for company in &summary.companies {
            println!("  - {company}");
        }
    }

    println!("{}", "=".repeat(26));
}

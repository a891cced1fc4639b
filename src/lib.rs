//! # pharma-papers-rs
//!
//! Fetch biomedical research papers from PubMed and identify those with
//! authors affiliated to pharmaceutical or biotech companies.
//!
//! The crate has three layers:
//!
//! - **Transport** ([`pubmed`]): rate-limited access to the NCBI
//!   E-utilities APIs (ESearch + EFetch) and a quick-xml parser turning
//!   EFetch responses into [`Paper`] values.
//! - **Classification core** ([`classify`]): the [`AffiliationClassifier`]
//!   decides per affiliation string whether it denotes a for-profit
//!   pharma/biotech entity, the [`PaperFilter`] applies it across all
//!   authors of each paper, and [`classify::summarize`] aggregates the
//!   filtered set.
//! - **Reporting** ([`report`]): CSV output (file or stdout) and a console
//!   summary.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pharma_papers_rs::{PaperFilter, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new();
//!     let papers = client
//!         .search_and_fetch("cancer AND drug development", 50)
//!         .await?;
//!
//!     let filter = PaperFilter::new();
//!     let filtered = filter.filter(papers);
//!
//!     for entry in &filtered {
//!         println!(
//!             "{}: {} [{}]",
//!             entry.paper.pmid,
//!             entry.paper.title,
//!             entry.company_affiliations.join(", ")
//!         );
//!     }
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod pubmed;
pub mod rate_limit;
pub mod report;
mod retry;

pub use classify::{AffiliationClassifier, PaperFilter};
pub use config::ClientConfig;
pub use error::{PaperFetchError, Result};
pub use pubmed::{Author, FilterSummary, FilteredPaper, Paper, PubMedClient};
pub use retry::RetryConfig;

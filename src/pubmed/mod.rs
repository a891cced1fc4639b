//! PubMed transport: searching, fetching, and parsing article metadata
//!
//! This module talks to the NCBI E-utilities APIs (ESearch and EFetch) and
//! turns the XML responses into [`Paper`] values for the classification
//! core.

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

pub use client::PubMedClient;
pub use models::{Author, FilterSummary, FilteredPaper, Paper};
pub use parser::parse_papers_from_xml;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pharma_papers_rs::{report, ClientConfig, PaperFilter, PubMedClient};

/// Fetch PubMed papers with pharmaceutical/biotech company authors
#[derive(Parser, Debug)]
#[command(
    name = "get-papers-list",
    about = "Fetch PubMed papers with pharmaceutical/biotech company authors",
    long_about = "Searches PubMed with the full query syntax (AND/OR/NOT, [Field] tags, \
                  quoted phrases), classifies author affiliations, and writes a CSV report \
                  of papers with at least one pharma/biotech author."
)]
struct Cli {
    /// PubMed search query (supports full PubMed syntax)
    query: String,

    /// Output filename for CSV results (stdout if not specified)
    #[arg(short, long)]
    file: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of results to fetch
    #[arg(long, default_value_t = 100)]
    max_results: usize,

    /// Your email address (recommended by NCBI for API usage tracking)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// API key for NCBI E-utilities (raises the rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Skip printing summary statistics
    #[arg(long)]
    no_stats: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::new().with_tool("get-papers-list");
    if let Some(email) = &cli.email {
        config = config.with_email(email);
    }
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key);
    }

    let client = PubMedClient::with_config(config);

    tracing::info!(query = %cli.query, "searching PubMed");
    let pmids = client.search_papers(&cli.query, cli.max_results).await?;
    if pmids.is_empty() {
        println!("No papers found for the given query.");
        return Ok(());
    }
    tracing::info!(count = pmids.len(), "fetching paper details");

    let pmid_refs: Vec<&str> = pmids.iter().map(String::as_str).collect();
    let papers = client.fetch_papers(&pmid_refs).await?;
    if papers.is_empty() {
        println!("No paper details could be fetched.");
        return Ok(());
    }

    let filtered = PaperFilter::new().filter(papers);
    if filtered.is_empty() {
        println!("No papers found with pharmaceutical/biotech company authors.");
        return Ok(());
    }

    match &cli.file {
        Some(path) => {
            report::write_csv_file(&filtered, path)?;
            println!("Results written to {path}");
        }
        None => report::write_csv_stdout(&filtered)?,
    }

    if !cli.no_stats {
        report::print_summary(&filtered);
    }

    Ok(())
}

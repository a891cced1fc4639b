use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{PaperFetchError, Result};
use crate::pubmed::models::Paper;
use crate::pubmed::parser::parse_papers_from_xml;
use crate::pubmed::responses::ESearchResult;
use crate::rate_limit::RateLimiter;
use crate::retry::with_retry;

/// NCBI recommends at most 200 IDs per EFetch request
const FETCH_BATCH_SIZE: usize = 200;

/// Client for the PubMed E-utilities API
///
/// Handles rate limiting, API identification parameters, and retry of
/// transient failures. Searching returns PMIDs; fetching returns parsed
/// [`Paper`] values.
///
/// # Example
///
/// ```no_run
/// use pharma_papers_rs::PubMedClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PubMedClient::new();
///     let papers = client.search_and_fetch("cancer AND drug development", 20).await?;
///     for paper in &papers {
///         println!("{}: {}", paper.pmid, paper.title);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a client with default NCBI configuration (3 requests/second,
    /// no API key)
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client from an explicit configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers_rs::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key")
    ///     .with_email("researcher@example.com");
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let rate_limiter = config.create_rate_limiter();
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            rate_limiter,
            config,
        }
    }

    /// Search PubMed and return matching PMIDs
    ///
    /// Supports the full PubMed query syntax (boolean operators, `[Field]`
    /// tags, quoted phrases). An empty query or an empty result set yields
    /// an empty vector, not an error.
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn search_papers(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("empty query, returning no results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        let response = self.make_request(&url).await?;
        let search_result: ESearchResult = response.json().await?;
        let pmids = search_result.esearchresult.idlist;

        info!(results_found = pmids.len(), "search completed");
        Ok(pmids)
    }

    /// Fetch paper details for a batch of PMIDs
    ///
    /// IDs are validated up front and requested in batches of 200 to stay
    /// under NCBI URL limits. Empty input makes no HTTP request.
    ///
    /// # Errors
    ///
    /// * [`PaperFetchError::InvalidPmid`] if any ID is not all digits
    /// * [`PaperFetchError::ApiError`] on non-success HTTP status
    #[instrument(skip(self, pmids), fields(pmid_count = pmids.len()))]
    pub async fn fetch_papers(&self, pmids: &[&str]) -> Result<Vec<Paper>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        for pmid in pmids {
            if pmid.trim().is_empty() || !pmid.chars().all(|c| c.is_ascii_digit()) {
                warn!(pmid = %pmid, "invalid PMID format");
                return Err(PaperFetchError::InvalidPmid {
                    pmid: (*pmid).to_string(),
                });
            }
        }

        let mut papers = Vec::with_capacity(pmids.len());
        for chunk in pmids.chunks(FETCH_BATCH_SIZE) {
            let id_list = chunk.join(",");
            let url = format!(
                "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml&rettype=abstract",
                self.base_url, id_list
            );

            debug!(batch_size = chunk.len(), "making EFetch request");
            let response = self.make_request(&url).await?;
            let xml_text = response.text().await?;
            if xml_text.trim().is_empty() {
                continue;
            }

            let batch = parse_papers_from_xml(&xml_text)?;
            info!(
                requested = chunk.len(),
                parsed = batch.len(),
                "batch fetch completed"
            );
            papers.extend(batch);
        }

        Ok(papers)
    }

    /// Search and fetch in one call
    pub async fn search_and_fetch(&self, query: &str, max_results: usize) -> Result<Vec<Paper>> {
        let pmids = self.search_papers(query, max_results).await?;
        let pmid_refs: Vec<&str> = pmids.iter().map(String::as_str).collect();
        self.fetch_papers(&pmid_refs).await
    }

    /// Make a rate-limited GET request with API parameters and retry on
    /// transient failures
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        for (key, value) in self.config.build_api_params() {
            final_url.push('&');
            final_url.push_str(&key);
            final_url.push('=');
            final_url.push_str(&urlencoding::encode(&value));
        }

        let response = with_retry(
            || async {
                self.rate_limiter.acquire().await?;
                debug!(url = %final_url, "making API request");
                let response = self
                    .client
                    .get(&final_url)
                    .send()
                    .await
                    .map_err(PaperFetchError::from)?;

                // Map throttling and server errors so the retry policy
                // can see them
                if response.status().is_server_error() || response.status().as_u16() == 429 {
                    return Err(PaperFetchError::ApiError {
                        status: response.status().as_u16(),
                        message: response
                            .status()
                            .canonical_reason()
                            .unwrap_or("Unknown error")
                            .to_string(),
                    });
                }

                Ok(response)
            },
            &self.config.retry_config,
            "NCBI API request",
        )
        .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "API request failed");
            return Err(PaperFetchError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}

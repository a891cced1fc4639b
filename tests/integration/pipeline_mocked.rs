//! End-to-end pipeline tests against a mocked NCBI server
//!
//! Exercises search -> fetch -> filter -> summary -> CSV without touching
//! the real API.

use pharma_papers_rs::classify::summarize;
use pharma_papers_rs::{report, ClientConfig, PaperFilter, PubMedClient};
use tracing_test::traced_test;
use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ESEARCH_RESPONSE: &str = r#"{
    "esearchresult": {
        "count": "3",
        "idlist": ["31978945", "33515491", "25760099"]
    }
}"#;

const EFETCH_RESPONSE: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">31978945</PMID>
            <Article>
                <ArticleTitle>Efficacy of a novel antibody therapy</ArticleTitle>
                <AuthorList>
                    <Author>
                        <LastName>Doe</LastName>
                        <ForeName>Jane</ForeName>
                        <AffiliationInfo>
                            <Affiliation>Genentech, Inc., South San Francisco, CA, USA. jane.doe@gene.com</Affiliation>
                        </AffiliationInfo>
                    </Author>
                    <Author>
                        <LastName>Smith</LastName>
                        <ForeName>John</ForeName>
                        <AffiliationInfo>
                            <Affiliation>Department of Medicine, Harvard University, Boston, MA, USA.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                </AuthorList>
                <Journal>
                    <JournalIssue>
                        <PubDate>
                            <Year>2020</Year>
                            <Month>Jan</Month>
                            <Day>24</Day>
                        </PubDate>
                    </JournalIssue>
                </Journal>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">33515491</PMID>
            <Article>
                <ArticleTitle>Vaccine platform comparison</ArticleTitle>
                <AuthorList>
                    <Author>
                        <LastName>Roe</LastName>
                        <ForeName>Richard</ForeName>
                        <AffiliationInfo>
                            <Affiliation>Moderna, Cambridge, MA, USA.</Affiliation>
                        </AffiliationInfo>
                        <AffiliationInfo>
                            <Affiliation>Genentech, Inc., South San Francisco, CA, USA.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                </AuthorList>
                <Journal>
                    <JournalIssue>
                        <PubDate>
                            <Year>2021</Year>
                        </PubDate>
                    </JournalIssue>
                </Journal>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">25760099</PMID>
            <Article>
                <ArticleTitle>Purely academic work</ArticleTitle>
                <AuthorList>
                    <Author>
                        <LastName>Poe</LastName>
                        <ForeName>Alice</ForeName>
                        <AffiliationInfo>
                            <Affiliation>Stanford University, Stanford, CA, USA.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
</PubmedArticleSet>"#;

async fn setup_mock_server() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi.*"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(ESEARCH_RESPONSE)
                .insert_header("content-type", "application/json"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"/efetch\.fcgi.*"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(EFETCH_RESPONSE)
                .insert_header("content-type", "application/xml"),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_rate_limit(100.0);
    PubMedClient::with_config(config)
}

#[tokio::test]
#[traced_test]
async fn test_search_and_fetch_through_mock() {
    let mock_server = setup_mock_server().await;
    let client = create_mock_client(&mock_server);

    let papers = client.search_and_fetch("antibody therapy", 10).await.unwrap();
    assert_eq!(papers.len(), 3);

    let first = papers.iter().find(|p| p.pmid == "31978945").unwrap();
    assert_eq!(first.title, "Efficacy of a novel antibody therapy");
    assert_eq!(first.pub_date, "2020-01-24");
    assert_eq!(first.authors.len(), 2);
    assert_eq!(first.corresponding_author_email, "jane.doe@gene.com");

    let third = papers.iter().find(|p| p.pmid == "25760099").unwrap();
    assert_eq!(third.pub_date, "Unknown");
    assert_eq!(third.corresponding_author_email, "No email found");
}

#[tokio::test]
#[traced_test]
async fn test_full_pipeline_filter_and_summary() {
    let mock_server = setup_mock_server().await;
    let client = create_mock_client(&mock_server);

    let papers = client.search_and_fetch("antibody therapy", 10).await.unwrap();
    let filtered = PaperFilter::new().filter(papers);

    // The purely academic paper is dropped; order of the rest preserved
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].paper.pmid, "31978945");
    assert_eq!(filtered[1].paper.pmid, "33515491");

    // Mixed paper: only the industry author makes the set
    assert_eq!(filtered[0].non_academic_authors, vec!["Jane Doe"]);
    assert_eq!(filtered[0].company_affiliations, vec!["Genentech"]);

    // Two affiliations for one author: both companies, one author entry
    assert_eq!(filtered[1].non_academic_authors, vec!["Richard Roe"]);
    assert_eq!(
        filtered[1].company_affiliations,
        vec!["Moderna", "Genentech"]
    );

    // Genentech appears on both papers but counts once in the summary
    let summary = summarize(&filtered);
    assert_eq!(summary.total_papers, 2);
    assert_eq!(summary.total_companies, 2);
    assert_eq!(summary.total_non_academic_authors, 2);
    assert_eq!(summary.companies, vec!["Genentech", "Moderna"]);
}

#[tokio::test]
#[traced_test]
async fn test_pipeline_csv_output() {
    let mock_server = setup_mock_server().await;
    let client = create_mock_client(&mock_server);

    let papers = client.search_and_fetch("antibody therapy", 10).await.unwrap();
    let filtered = PaperFilter::new().filter(papers);

    let mut buf = Vec::new();
    report::write_csv(&filtered, &mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();

    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("\"PubmedID\",\"Title\""));
    let first_row = lines.next().unwrap();
    assert!(first_row.contains("\"31978945\""));
    assert!(first_row.contains("\"Jane Doe\""));
    assert!(first_row.contains("\"jane.doe@gene.com\""));
    assert_eq!(lines.count(), 1);
}

#[tokio::test]
#[traced_test]
async fn test_search_sends_query_and_identification_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi.*"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "covid-19 vaccine"))
        .and(query_param("retmax", "5"))
        .and(query_param("tool", "test-tool"))
        .and(query_param("email", "tester@example.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"esearchresult": {"idlist": []}}"#)
                .insert_header("content-type", "application/json"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_rate_limit(100.0)
        .with_tool("test-tool")
        .with_email("tester@example.com");
    let client = PubMedClient::with_config(config);

    let pmids = client.search_papers("covid-19 vaccine", 5).await.unwrap();
    assert!(pmids.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_server_error_is_retried_then_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi.*"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_rate_limit(100.0);
    let client = PubMedClient::with_config(config);

    let result = client.search_papers("anything", 5).await;
    assert!(result.is_err());

    // Initial attempt plus retries
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.len() > 1, "expected retries, got {}", requests.len());
}

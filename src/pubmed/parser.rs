use std::io::BufReader;
use std::sync::OnceLock;

use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use tracing::{debug, instrument};

use crate::error::{PaperFetchError, Result};
use crate::pubmed::models::{Author, Paper, NO_EMAIL, NO_TITLE, UNKNOWN_DATE};

/// Date containers checked for a publication date, in order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateSlot {
    PubDate = 0,
    ArticleDate = 1,
    DateCompleted = 2,
    DateRevised = 3,
}

#[derive(Debug, Default, Clone)]
struct DateParts {
    year: String,
    month: String,
    day: String,
}

/// Accumulated state for the article currently being parsed
#[derive(Debug, Default)]
struct ArticleState {
    pmid: String,
    title: String,
    abstract_text: String,
    authors: Vec<Author>,
    dates: [Option<DateParts>; 4],
}

#[derive(Debug, Default)]
struct AuthorState {
    last_name: String,
    fore_name: String,
    initials: String,
    affiliations: Vec<String>,
}

impl ArticleState {
    fn into_paper(self) -> Paper {
        let title = if self.title.trim().is_empty() {
            NO_TITLE.to_string()
        } else {
            self.title.trim().to_string()
        };

        let pub_date = self
            .dates
            .iter()
            .flatten()
            .find_map(format_date)
            .unwrap_or_else(|| UNKNOWN_DATE.to_string());

        let abstract_text = if self.abstract_text.is_empty() {
            None
        } else {
            Some(self.abstract_text)
        };

        let email = find_corresponding_email(&self.authors, abstract_text.as_deref(), &title)
            .unwrap_or_else(|| NO_EMAIL.to_string());

        Paper {
            pmid: self.pmid,
            title,
            pub_date,
            authors: self.authors,
            corresponding_author_email: email,
            abstract_text,
        }
    }
}

impl AuthorState {
    /// Build the display name, or `None` when the last name is missing
    /// (such entries are skipped, matching the record model)
    fn display_name(&self) -> Option<String> {
        if self.last_name.is_empty() {
            return None;
        }
        if !self.fore_name.is_empty() {
            Some(format!("{} {}", self.fore_name, self.last_name))
        } else if !self.initials.is_empty() {
            Some(format!("{} {}", self.initials, self.last_name))
        } else {
            Some(self.last_name.clone())
        }
    }
}

/// Parse all `PubmedArticle` entries from an EFetch XML response
///
/// Extraction is best-effort per field: a missing title, date, or email
/// yields the documented sentinel rather than an error. Authors without a
/// last name are dropped.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_papers_from_xml(xml: &str) -> Result<Vec<Paper>> {
    let mut reader = Reader::from_reader(BufReader::new(xml.as_bytes()));
    reader.config_mut().trim_text(true);

    let mut papers = Vec::new();
    let mut article: Option<ArticleState> = None;
    let mut author: Option<AuthorState> = None;

    let mut in_article_title = false;
    let mut in_abstract_text = false;
    let mut in_pmid = false;
    let mut in_last_name = false;
    let mut in_fore_name = false;
    let mut in_initials = false;
    let mut in_affiliation = false;
    let mut in_year = false;
    let mut in_month = false;
    let mut in_day = false;
    let mut date_slot: Option<DateSlot> = None;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"PubmedArticle" => article = Some(ArticleState::default()),
                b"ArticleTitle" if article.is_some() => in_article_title = true,
                b"AbstractText" if article.is_some() => in_abstract_text = true,
                // Only the citation PMID counts; reference sections may
                // carry their own PMID elements later in the document.
                b"PMID" => {
                    if let Some(a) = &article {
                        in_pmid = a.pmid.is_empty();
                    }
                }
                b"Author" if article.is_some() => author = Some(AuthorState::default()),
                b"LastName" if author.is_some() => in_last_name = true,
                b"ForeName" if author.is_some() => in_fore_name = true,
                b"Initials" if author.is_some() => in_initials = true,
                b"Affiliation" if author.is_some() => in_affiliation = true,
                b"PubDate" => date_slot = Some(DateSlot::PubDate),
                b"ArticleDate" => date_slot = Some(DateSlot::ArticleDate),
                b"DateCompleted" => date_slot = Some(DateSlot::DateCompleted),
                b"DateRevised" => date_slot = Some(DateSlot::DateRevised),
                b"Year" if date_slot.is_some() => in_year = true,
                b"Month" if date_slot.is_some() => in_month = true,
                b"Day" if date_slot.is_some() => in_day = true,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"PubmedArticle" => {
                    if let Some(state) = article.take() {
                        if !state.pmid.is_empty() {
                            papers.push(state.into_paper());
                        } else {
                            debug!("skipping article without PMID");
                        }
                    }
                }
                b"ArticleTitle" => in_article_title = false,
                b"AbstractText" => in_abstract_text = false,
                b"PMID" => in_pmid = false,
                b"Author" => {
                    if let (Some(state), Some(a)) = (author.take(), article.as_mut()) {
                        match state.display_name() {
                            Some(name) => a.authors.push(Author {
                                name,
                                affiliations: state.affiliations,
                            }),
                            // No last name: skip silently
                            None => debug!("skipping author without last name"),
                        }
                    }
                }
                b"LastName" => in_last_name = false,
                b"ForeName" => in_fore_name = false,
                b"Initials" => in_initials = false,
                b"Affiliation" => in_affiliation = false,
                b"PubDate" | b"ArticleDate" | b"DateCompleted" | b"DateRevised" => {
                    date_slot = None;
                }
                b"Year" => in_year = false,
                b"Month" => in_month = false,
                b"Day" => in_day = false,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| PaperFetchError::XmlParseError {
                        message: format!("failed to decode XML text: {e}"),
                    })?
                    .into_owned();

                if let Some(a) = article.as_mut() {
                    if in_article_title {
                        // Titles can contain markup; flatten the pieces
                        a.title.push_str(&text);
                    } else if in_abstract_text {
                        if !a.abstract_text.is_empty() {
                            a.abstract_text.push(' ');
                        }
                        a.abstract_text.push_str(&text);
                    } else if in_pmid {
                        a.pmid = text;
                    } else if in_affiliation {
                        if let Some(au) = author.as_mut() {
                            au.affiliations.push(text);
                        }
                    } else if in_last_name {
                        if let Some(au) = author.as_mut() {
                            au.last_name = text;
                        }
                    } else if in_fore_name {
                        if let Some(au) = author.as_mut() {
                            au.fore_name = text;
                        }
                    } else if in_initials {
                        if let Some(au) = author.as_mut() {
                            au.initials = text;
                        }
                    } else if let Some(slot) = date_slot {
                        if in_year || in_month || in_day {
                            let parts = a.dates[slot as usize].get_or_insert_with(DateParts::default);
                            if in_year {
                                parts.year = text;
                            } else if in_month {
                                parts.month = text;
                            } else {
                                parts.day = text;
                            }
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(PaperFetchError::XmlParseError {
                    message: format!("XML parsing error: {e}"),
                });
            }
            _ => {}
        }
        buf.clear();
    }

    debug!(papers_parsed = papers.len(), "completed EFetch XML parsing");
    Ok(papers)
}

/// Normalize captured date parts to `YYYY[-MM[-DD]]`
///
/// Returns `None` when no year was captured so the next date slot can be
/// tried. Month names are mapped to two-digit numbers.
fn format_date(parts: &DateParts) -> Option<String> {
    if parts.year.is_empty() {
        return None;
    }
    let mut date = parts.year.clone();
    if !parts.month.is_empty() {
        date.push('-');
        date.push_str(&normalize_month(&parts.month));
        if !parts.day.is_empty() {
            date.push('-');
            date.push_str(&pad_two(&parts.day));
        }
    }
    Some(date)
}

fn normalize_month(month: &str) -> String {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    let lower = month.to_lowercase();
    for (i, name) in MONTHS.iter().enumerate() {
        if lower.starts_with(name) {
            return format!("{:02}", i + 1);
        }
    }
    pad_two(month)
}

fn pad_two(value: &str) -> String {
    if value.len() == 1 {
        format!("0{value}")
    } else {
        value.to_string()
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("email regex is valid")
    })
}

/// Scan affiliations, then the abstract, then the title for the first
/// email-shaped token
fn find_corresponding_email(
    authors: &[Author],
    abstract_text: Option<&str>,
    title: &str,
) -> Option<String> {
    let re = email_regex();

    for author in authors {
        for affiliation in &author.affiliations {
            if let Some(m) = re.find(affiliation) {
                return Some(m.as_str().to_string());
            }
        }
    }
    if let Some(text) = abstract_text {
        if let Some(m) = re.find(text) {
            return Some(m.as_str().to_string());
        }
    }
    re.find(title).map(|m| m.as_str().to_string())
}

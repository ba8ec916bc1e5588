use std::time::Duration;

use finder_core::{CandidateMovie, UNKNOWN};
use finder_logging::{finder_debug, finder_info, finder_warn};
use futures_util::{stream, StreamExt};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::SearchError;

pub const NO_SYNOPSIS: &str = "No synopsis available";
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone)]
pub struct TmdbSettings {
    pub base_url: String,
    pub api_key: String,
    /// Locale for titles and synopses in the result list.
    pub search_language: String,
    /// Locale for the detail lookup; English keeps crew names romanized.
    pub detail_language: String,
    pub connect_timeout: Duration,
    pub search_timeout: Duration,
    pub detail_timeout: Duration,
    /// How many detail lookups may be in flight at once. 1 means sequential.
    pub detail_concurrency: usize,
    /// Maximum synopsis length in characters before truncation.
    pub synopsis_limit: usize,
}

impl Default for TmdbSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: String::new(),
            search_language: "it-IT".to_string(),
            detail_language: "en-US".to_string(),
            connect_timeout: Duration::from_secs(5),
            search_timeout: Duration::from_secs(10),
            detail_timeout: Duration::from_secs(5),
            detail_concurrency: 1,
            synopsis_limit: 150,
        }
    }
}

#[async_trait::async_trait]
pub trait MovieSearch: Send + Sync {
    /// Searches the catalog and enriches every hit with its director.
    ///
    /// Only a failure of the primary search call is an error; a failed detail
    /// lookup degrades that single entry.
    async fn try_search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<CandidateMovie>, SearchError>;

    /// Like [`MovieSearch::try_search`], with any failure reported as no results.
    async fn search(&self, query: &str, max_results: usize) -> Vec<CandidateMovie> {
        match self.try_search(query, max_results).await {
            Ok(movies) => movies,
            Err(err) => {
                finder_warn!("Search for {:?} failed: {}", query, err);
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    settings: TmdbSettings,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(settings: TmdbSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, SearchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        Url::parse_with_params(&format!("{base}{path}"), params)
            .map_err(|err| SearchError::InvalidUrl(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        timeout: Duration,
    ) -> Result<T, SearchError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn details(&self, id: u64) -> Result<MovieDetails, SearchError> {
        let url = self.endpoint(
            &format!("/movie/{id}"),
            &[
                ("api_key", self.settings.api_key.as_str()),
                ("language", self.settings.detail_language.as_str()),
                ("append_to_response", "credits"),
            ],
        )?;
        let raw: DetailResponse = self.get_json(url, self.settings.detail_timeout).await?;
        Ok(MovieDetails::from(raw))
    }

    async fn enrich(&self, item: SearchItem) -> CandidateMovie {
        let details = match self.details(item.id).await {
            Ok(details) => details,
            Err(err) => {
                finder_warn!("Detail lookup for movie {} failed: {}", item.id, err);
                MovieDetails::default()
            }
        };
        candidate_from(item, details, self.settings.synopsis_limit)
    }
}

#[async_trait::async_trait]
impl MovieSearch for TmdbClient {
    async fn try_search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<CandidateMovie>, SearchError> {
        let url = self.endpoint(
            "/search/movie",
            &[
                ("api_key", self.settings.api_key.as_str()),
                ("query", query),
                ("language", self.settings.search_language.as_str()),
                ("include_adult", "false"),
                ("page", "1"),
            ],
        )?;
        let response: SearchResponse = self.get_json(url, self.settings.search_timeout).await?;
        let items: Vec<SearchItem> = response.results.into_iter().take(max_results).collect();
        finder_info!("Search {:?} returned {} candidates", query, items.len());

        // `buffered` yields in input order, so relevance order survives any
        // concurrency setting.
        let movies = stream::iter(items)
            .map(|item| self.enrich(item))
            .buffered(self.settings.detail_concurrency.max(1))
            .collect::<Vec<_>>()
            .await;
        Ok(movies)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: u64,
    title: Option<String>,
    original_title: Option<String>,
    release_date: Option<String>,
    overview: Option<String>,
    vote_average: Option<f64>,
    poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    runtime: Option<u32>,
    #[serde(default)]
    genres: Vec<Genre>,
    credits: Option<Credits>,
}

#[derive(Debug, Deserialize)]
struct Genre {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Credits {
    #[serde(default)]
    crew: Vec<CrewMember>,
}

#[derive(Debug, Deserialize)]
struct CrewMember {
    job: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Default)]
struct MovieDetails {
    director: Option<String>,
    runtime_minutes: Option<u32>,
    genres: Vec<String>,
}

impl From<DetailResponse> for MovieDetails {
    fn from(raw: DetailResponse) -> Self {
        let director = raw.credits.and_then(|credits| {
            credits
                .crew
                .into_iter()
                .find(|member| member.job.as_deref() == Some("Director"))
                .and_then(|member| member.name)
        });
        finder_debug!("Resolved director {:?}", director);
        Self {
            director,
            runtime_minutes: raw.runtime.filter(|minutes| *minutes > 0),
            genres: raw.genres.into_iter().map(|genre| genre.name).collect(),
        }
    }
}

fn candidate_from(item: SearchItem, details: MovieDetails, synopsis_limit: usize) -> CandidateMovie {
    let title = non_empty(item.title).unwrap_or_else(|| UNKNOWN.to_string());
    let original_title = non_empty(item.original_title).unwrap_or_else(|| title.clone());
    CandidateMovie {
        id: item.id,
        release_year: release_year(item.release_date.as_deref()),
        director: details.director.unwrap_or_else(|| UNKNOWN.to_string()),
        runtime_minutes: details.runtime_minutes,
        genres: details.genres,
        synopsis: bounded_synopsis(item.overview.as_deref(), synopsis_limit),
        rating: item.vote_average.unwrap_or(0.0).clamp(0.0, 10.0),
        poster_reference: item.poster_path.unwrap_or_default(),
        title,
        original_title,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn release_year(release_date: Option<&str>) -> String {
    release_date
        .and_then(|date| date.get(..4))
        .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_owned)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn bounded_synopsis(overview: Option<&str>, limit: usize) -> String {
    let text = overview.unwrap_or_default().trim();
    if text.is_empty() {
        return NO_SYNOPSIS.to_string();
    }
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

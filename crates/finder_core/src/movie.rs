use std::fmt;
use std::slice;

/// Placeholder used for any metadata field the provider could not resolve.
pub const UNKNOWN: &str = "unknown";

/// One search result, enriched with credits from the detail lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMovie {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    /// Four-digit year, or [`UNKNOWN`].
    pub release_year: String,
    /// First credited director, or [`UNKNOWN`].
    pub director: String,
    pub runtime_minutes: Option<u32>,
    pub genres: Vec<String>,
    pub synopsis: String,
    /// Average vote on a 0-10 scale.
    pub rating: f64,
    /// Provider poster path; empty when the provider has none.
    pub poster_reference: String,
}

impl CandidateMovie {
    /// True when the original title is usable as a second lookup key.
    pub fn has_alternate_title(&self) -> bool {
        !self.original_title.is_empty() && self.original_title != self.title
    }
}

/// Ordered, read-only list of search results.
///
/// Order is the provider's relevance order. There is no way to mutate a
/// result set once built; a new search produces a new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    movies: Vec<CandidateMovie>,
}

impl ResultSet {
    pub fn new(movies: Vec<CandidateMovie>) -> Self {
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CandidateMovie> {
        self.movies.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, CandidateMovie> {
        self.movies.iter()
    }

    pub fn as_slice(&self) -> &[CandidateMovie] {
        &self.movies
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a CandidateMovie;
    type IntoIter = slice::Iter<'a, CandidateMovie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

/// Metadata reported by the executor after a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedReview {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub content_length: u64,
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStatus {
    Error,
    Timeout,
    ParseError,
}

impl FailureStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureStatus::Error => "error",
            FailureStatus::Timeout => "timeout",
            FailureStatus::ParseError => "parse_error",
        }
    }
}

impl fmt::Display for FailureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Success(ExtractedReview),
    Failure {
        status: FailureStatus,
        message: String,
    },
}

impl ExtractionResult {
    pub fn failure(status: FailureStatus, message: impl Into<String>) -> Self {
        ExtractionResult::Failure {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            ExtractionResult::Success(_) => "success",
            ExtractionResult::Failure { status, .. } => status.as_str(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success(_))
    }
}

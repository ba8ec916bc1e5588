use crate::{CandidateMovie, SessionState, WorkingTitle};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub rows: Vec<MovieRowView>,
    pub working: Option<WorkingTitle>,
    pub prompt: Option<Prompt>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieRowView {
    /// 1-based position as shown to the user.
    pub position: usize,
    pub title: String,
    /// Only set when it differs from `title`.
    pub original_title: Option<String>,
    pub year: String,
    pub director: String,
    pub rating: f64,
    pub synopsis: String,
}

impl MovieRowView {
    pub(crate) fn from_movie(position: usize, movie: &CandidateMovie) -> Self {
        Self {
            position,
            title: movie.title.clone(),
            original_title: movie
                .has_alternate_title()
                .then(|| movie.original_title.clone()),
            year: movie.release_year.clone(),
            director: movie.director.clone(),
            rating: movie.rating,
            synopsis: movie.synopsis.clone(),
        }
    }
}

/// Menus the session can wait on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    SearchQuery,
    ChooseMovie { count: usize },
    ConfirmExtraction { title: String, year: String },
    PostExtraction,
}

use crate::view_model::{AppViewModel, MovieRowView, Prompt};
use crate::{CandidateMovie, ResultSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for a search query; no active result list.
    #[default]
    NoResults,
    /// A search effect is in flight.
    Searching,
    ListingResults,
    /// An existence check effect is in flight.
    Verifying(VerifyStage),
    ConfirmingExtraction,
    Extracting,
    PostExtractionMenu,
    Terminated,
}

/// Which title the in-flight existence check uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStage {
    Primary,
    OriginalTitle,
}

/// Title/year pair currently being verified or extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingTitle {
    pub title: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionContext {
    results: ResultSet,
    selected: Option<usize>,
    working: Option<WorkingTitle>,
}

impl SessionContext {
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_movie(&self) -> Option<&CandidateMovie> {
        self.selected.and_then(|index| self.results.get(index))
    }

    pub fn working(&self) -> Option<&WorkingTitle> {
        self.working.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    session: SessionState,
    context: SessionContext,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn is_terminated(&self) -> bool {
        self.session == SessionState::Terminated
    }

    pub fn view(&self) -> AppViewModel {
        let rows = self
            .context
            .results
            .iter()
            .enumerate()
            .map(|(index, movie)| MovieRowView::from_movie(index + 1, movie))
            .collect();
        AppViewModel {
            session: self.session,
            rows,
            working: self.context.working.clone(),
            prompt: self.prompt(),
            dirty: self.dirty,
        }
    }

    /// The menu the user is expected to answer, if the session is idle.
    pub fn prompt(&self) -> Option<Prompt> {
        match self.session {
            SessionState::NoResults => Some(Prompt::SearchQuery),
            SessionState::ListingResults => Some(Prompt::ChooseMovie {
                count: self.context.results.len(),
            }),
            SessionState::ConfirmingExtraction => {
                self.context
                    .working
                    .as_ref()
                    .map(|working| Prompt::ConfirmExtraction {
                        title: working.title.clone(),
                        year: working.year.clone(),
                    })
            }
            SessionState::PostExtractionMenu => Some(Prompt::PostExtraction),
            SessionState::Searching
            | SessionState::Verifying(_)
            | SessionState::Extracting
            | SessionState::Terminated => None,
        }
    }

    /// Returns whether the view changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn transition(&mut self, next: SessionState) {
        if self.session != next {
            finder_logging::finder_debug!("session {:?} -> {:?}", self.session, next);
            self.session = next;
            self.dirty = true;
        }
    }

    pub(crate) fn replace_results(&mut self, results: ResultSet) {
        self.context = SessionContext {
            results,
            selected: None,
            working: None,
        };
        self.dirty = true;
    }

    pub(crate) fn clear_results(&mut self) {
        self.replace_results(ResultSet::default());
    }

    pub(crate) fn select(&mut self, index: usize) -> Option<WorkingTitle> {
        let movie = self.context.results.get(index)?;
        let working = WorkingTitle {
            title: movie.title.clone(),
            year: movie.release_year.clone(),
        };
        self.context.selected = Some(index);
        self.context.working = Some(working.clone());
        Some(working)
    }

    pub(crate) fn set_working_title(&mut self, title: String) {
        if let Some(working) = self.context.working.as_mut() {
            working.title = title;
        }
    }

    pub(crate) fn clear_working(&mut self) {
        self.context.working = None;
    }
}

use crate::{CandidateMovie, ExtractionResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User submitted a non-empty search query.
    SearchSubmitted(String),
    /// Search orchestration finished; empty means no matches.
    SearchCompleted(Vec<CandidateMovie>),
    /// User picked a result by 0-based index.
    MovieSelected(usize),
    /// User asked to drop the list and search again.
    RepeatSearch,
    /// Existence check for the working title finished.
    ExistenceChecked { found: bool },
    ConfirmExtract,
    BackToSearch,
    BackToList,
    ExtractionFinished(ExtractionResult),
    ViewReview,
    ChooseAnother,
    NewSearch,
    Quit,
    /// Ctrl-C or end of input.
    Interrupted,
}

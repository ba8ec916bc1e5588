//! Review finder core: pure session state machine and view-model helpers.
mod effect;
mod input;
mod movie;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Notice};
pub use input::{parse_input, InputError};
pub use movie::{
    CandidateMovie, ExtractedReview, ExtractionResult, FailureStatus, ResultSet, UNKNOWN,
};
pub use msg::Msg;
pub use state::{AppState, SessionContext, SessionState, VerifyStage, WorkingTitle};
pub use update::update;
pub use view_model::{AppViewModel, MovieRowView, Prompt};

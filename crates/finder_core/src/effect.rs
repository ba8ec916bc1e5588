use crate::ExtractedReview;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search { query: String },
    CheckExists { title: String, year: String },
    Extract { title: String, year: String },
    /// Read the saved review for this title/year and display it.
    ShowReview { title: String, year: String },
    Notify(Notice),
}

/// User-facing status messages emitted by transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Searching { query: String },
    NoMatches,
    Selected {
        title: String,
        year: String,
        director: String,
    },
    CheckingAvailability { title: String, year: String },
    Available,
    NotAvailable { title: String, year: String },
    TryingOriginalTitle { original_title: String },
    AvailableUnderOriginalTitle,
    NotAvailableUnderOriginalTitle,
    ExtractionStarted { title: String, year: String },
    ExtractionSucceeded {
        review: ExtractedReview,
        title: String,
        year: String,
    },
    ExtractionFailed { message: String },
    Goodbye,
}

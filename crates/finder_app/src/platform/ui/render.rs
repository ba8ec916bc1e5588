use std::fmt::Write;
use std::path::Path;

use finder_core::{AppViewModel, InputError, MovieRowView, Notice, Prompt, SessionState};
use finder_engine::StoreError;

use super::constants::*;

fn rule(width: usize) -> String {
    RULE_CHAR.to_string().repeat(width)
}

pub fn render_banner() -> String {
    format!("{APP_TITLE}\n{}\n", rule(BANNER_RULE_WIDTH))
}

/// Full-screen part of the view; only the result list has one.
pub fn render_view(view: &AppViewModel) -> String {
    match view.session {
        SessionState::ListingResults => render_results(&view.rows),
        _ => String::new(),
    }
}

pub fn render_results(rows: &[MovieRowView]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule(RULE_WIDTH));
    let _ = writeln!(out, "SEARCH RESULTS");
    let _ = writeln!(out, "{}", rule(RULE_WIDTH));
    for row in rows {
        let _ = writeln!(out, "\n{}. {} ({})", row.position, row.title, row.year);
        if let Some(original_title) = &row.original_title {
            let _ = writeln!(out, "   Original title: {original_title}");
        }
        let _ = writeln!(out, "   Director: {}", row.director);
        let _ = writeln!(out, "   Rating: {:.1}/10", row.rating);
        let _ = writeln!(out, "   {}", row.synopsis);
    }
    let _ = writeln!(out, "\n{}", rule(RULE_WIDTH));
    out
}

pub fn render_prompt(prompt: &Prompt) -> String {
    match prompt {
        Prompt::SearchQuery => "\nSearch for a movie (or 'quit' to exit): ".to_string(),
        Prompt::ChooseMovie { count } => format!(
            "\nChoose a movie (1-{count}), 'r' to repeat the search, or 'q' to quit: "
        ),
        Prompt::ConfirmExtraction { title, year } => format!(
            "\nExtract the review of '{title} ({year})'?\n\
             \x20 y) Yes, extract the review\n\
             \x20 n) No, back to search\n\
             \x20 b) Back to the movie list\n\
             \nChoice (y/n/b): "
        ),
        Prompt::PostExtraction => "\nWhat next?\n\
             \x20 v) View the extracted review\n\
             \x20 u) Choose another movie from the list\n\
             \x20 r) New search\n\
             \x20 q) Quit\n\
             \nChoice (v/u/r/q): "
            .to_string(),
    }
}

pub fn render_input_error(err: &InputError) -> String {
    format!("ERROR: {err}\n")
}

pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::Searching { query } => format!("\nSearching '{query}' on TMDB...\n"),
        Notice::NoMatches => "ERROR: No movies found. Try another title.\n".to_string(),
        Notice::Selected {
            title,
            year,
            director,
        } => format!("\nYou chose: {title} ({year})\n   Director: {director}\n"),
        Notice::CheckingAvailability { .. } => {
            "\nChecking availability on the review site...\n".to_string()
        }
        Notice::Available => "Movie found on the review site!\n".to_string(),
        Notice::NotAvailable { title, year } => {
            format!("ERROR: '{title} ({year})' not found on the review site\n")
        }
        Notice::TryingOriginalTitle { original_title } => {
            format!("Trying the original title: {original_title}\n")
        }
        Notice::AvailableUnderOriginalTitle => "Found under the original title!\n".to_string(),
        Notice::NotAvailableUnderOriginalTitle => {
            "ERROR: Not found under the original title either\n".to_string()
        }
        Notice::ExtractionStarted { title, year } => format!(
            "\nExtracting the review of '{title} ({year})'...\nThis may take 30-60 seconds...\n"
        ),
        Notice::ExtractionSucceeded {
            review,
            title,
            year,
        } => {
            let mut out = String::new();
            let _ = writeln!(out, "\nEXTRACTION COMPLETE!");
            let _ = writeln!(
                out,
                "Movie: {} ({year})",
                review.title.as_deref().unwrap_or(title)
            );
            let _ = writeln!(
                out,
                "Author: {}",
                review.author.as_deref().unwrap_or(UNKNOWN_LABEL)
            );
            let _ = writeln!(
                out,
                "Date: {}",
                review.date.as_deref().unwrap_or(UNKNOWN_LABEL)
            );
            let _ = writeln!(out, "Length: {} characters", review.content_length);
            if let Some(name) = review
                .file_path
                .as_deref()
                .and_then(|path| Path::new(path).file_name())
            {
                let _ = writeln!(out, "Saved to: {}", name.to_string_lossy());
            }
            let _ = writeln!(out, "\nReview extracted successfully!");
            out
        }
        Notice::ExtractionFailed { message } => format!("\nERROR during extraction: {message}\n"),
        Notice::Goodbye => "Goodbye!\n".to_string(),
    }
}

/// Header followed by the file content exactly as stored.
pub fn render_review(title: &str, year: &str, content: &str) -> String {
    format!(
        "\nREVIEW: {title} ({year})\n{}\n{content}\n",
        rule(RULE_WIDTH)
    )
}

pub fn render_review_missing(filename: &str) -> String {
    format!("ERROR: Review file not found: {filename}\n")
}

pub fn render_review_error(err: &StoreError) -> String {
    format!("ERROR: Could not read the review file: {err}\n")
}

use thiserror::Error;

use crate::{Msg, Prompt};

/// Rejected menu input. The session stays where it was and re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("enter a title to search for")]
    EmptyQuery,
    #[error("enter a number between 1 and {count}")]
    OutOfRange { count: usize },
    #[error("enter a valid number, 'r' to repeat the search, or 'q' to quit")]
    Invalid,
    #[error("valid options: {expected}")]
    UnknownOption { expected: &'static str },
}

/// Maps one line of user input to a message for the given menu.
pub fn parse_input(prompt: &Prompt, raw: &str) -> Result<Msg, InputError> {
    let trimmed = raw.trim();
    let choice = trimmed.to_lowercase();

    match prompt {
        Prompt::SearchQuery => match choice.as_str() {
            "q" | "quit" | "exit" => Ok(Msg::Quit),
            "" => Err(InputError::EmptyQuery),
            _ => Ok(Msg::SearchSubmitted(trimmed.to_string())),
        },
        Prompt::ChooseMovie { count } => match choice.as_str() {
            "q" | "quit" => Ok(Msg::Quit),
            "r" | "repeat" => Ok(Msg::RepeatSearch),
            other => {
                let out_of_range = InputError::OutOfRange { count: *count };
                match other.parse::<usize>() {
                    Ok(number) if (1..=*count).contains(&number) => {
                        Ok(Msg::MovieSelected(number - 1))
                    }
                    Ok(_) => Err(out_of_range),
                    // All digits but wider than usize.
                    Err(_) if !other.is_empty() && other.bytes().all(|b| b.is_ascii_digit()) => {
                        Err(out_of_range)
                    }
                    Err(_) => Err(InputError::Invalid),
                }
            }
        },
        Prompt::ConfirmExtraction { .. } => match choice.as_str() {
            "y" | "yes" | "s" | "si" => Ok(Msg::ConfirmExtract),
            "n" | "no" => Ok(Msg::BackToSearch),
            "b" | "back" | "u" | "up" => Ok(Msg::BackToList),
            "q" | "quit" => Ok(Msg::Quit),
            _ => Err(InputError::UnknownOption {
                expected: "y (extract), n (new search), b (back to list), q (quit)",
            }),
        },
        Prompt::PostExtraction => match choice.as_str() {
            "v" | "view" => Ok(Msg::ViewReview),
            "u" | "up" | "another" => Ok(Msg::ChooseAnother),
            "r" | "repeat" | "new" => Ok(Msg::NewSearch),
            "q" | "quit" => Ok(Msg::Quit),
            _ => Err(InputError::UnknownOption {
                expected: "v (view), u (another movie), r (new search), q (quit)",
            }),
        },
    }
}

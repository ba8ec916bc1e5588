use crate::{
    AppState, Effect, ExtractionResult, Msg, Notice, ResultSet, SessionState, VerifyStage,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages that make no sense in the current state are dropped without
/// touching the state.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.is_terminated() {
        return (state, Vec::new());
    }

    let effects = match (state.session(), msg) {
        (_, Msg::Quit | Msg::Interrupted) => {
            state.transition(SessionState::Terminated);
            vec![Effect::Notify(Notice::Goodbye)]
        }

        (SessionState::NoResults, Msg::SearchSubmitted(query)) => {
            state.transition(SessionState::Searching);
            vec![
                Effect::Notify(Notice::Searching {
                    query: query.clone(),
                }),
                Effect::Search { query },
            ]
        }
        (SessionState::Searching, Msg::SearchCompleted(movies)) => {
            if movies.is_empty() {
                state.transition(SessionState::NoResults);
                vec![Effect::Notify(Notice::NoMatches)]
            } else {
                state.replace_results(ResultSet::new(movies));
                state.transition(SessionState::ListingResults);
                Vec::new()
            }
        }

        (SessionState::ListingResults, Msg::MovieSelected(index)) => select_movie(&mut state, index),
        (SessionState::ListingResults, Msg::RepeatSearch) => {
            state.clear_results();
            state.transition(SessionState::NoResults);
            Vec::new()
        }

        (SessionState::Verifying(stage), Msg::ExistenceChecked { found }) => {
            existence_checked(&mut state, stage, found)
        }

        (SessionState::ConfirmingExtraction, Msg::ConfirmExtract) => {
            match state.context().working().cloned() {
                Some(working) => {
                    state.transition(SessionState::Extracting);
                    vec![
                        Effect::Notify(Notice::ExtractionStarted {
                            title: working.title.clone(),
                            year: working.year.clone(),
                        }),
                        Effect::Extract {
                            title: working.title,
                            year: working.year,
                        },
                    ]
                }
                None => Vec::new(),
            }
        }
        (SessionState::ConfirmingExtraction, Msg::BackToSearch) => {
            state.clear_results();
            state.transition(SessionState::NoResults);
            Vec::new()
        }
        (SessionState::ConfirmingExtraction, Msg::BackToList) => {
            state.transition(SessionState::ListingResults);
            Vec::new()
        }

        (SessionState::Extracting, Msg::ExtractionFinished(result)) => {
            extraction_finished(&mut state, result)
        }

        (SessionState::PostExtractionMenu, Msg::ViewReview) => match state.context().working() {
            Some(working) => vec![Effect::ShowReview {
                title: working.title.clone(),
                year: working.year.clone(),
            }],
            None => Vec::new(),
        },
        (SessionState::PostExtractionMenu, Msg::ChooseAnother) => {
            state.transition(SessionState::ListingResults);
            Vec::new()
        }
        (SessionState::PostExtractionMenu, Msg::NewSearch) => {
            state.clear_results();
            state.transition(SessionState::NoResults);
            Vec::new()
        }

        (session, msg) => {
            finder_logging::finder_trace!("ignoring {:?} in {:?}", msg, session);
            Vec::new()
        }
    };

    (state, effects)
}

fn select_movie(state: &mut AppState, index: usize) -> Vec<Effect> {
    let Some(working) = state.select(index) else {
        return Vec::new();
    };
    let director = state
        .context()
        .selected_movie()
        .map(|movie| movie.director.clone())
        .unwrap_or_default();
    state.transition(SessionState::Verifying(VerifyStage::Primary));
    vec![
        Effect::Notify(Notice::Selected {
            title: working.title.clone(),
            year: working.year.clone(),
            director,
        }),
        Effect::Notify(Notice::CheckingAvailability {
            title: working.title.clone(),
            year: working.year.clone(),
        }),
        Effect::CheckExists {
            title: working.title,
            year: working.year,
        },
    ]
}

fn existence_checked(state: &mut AppState, stage: VerifyStage, found: bool) -> Vec<Effect> {
    match (stage, found) {
        (VerifyStage::Primary, true) => {
            state.transition(SessionState::ConfirmingExtraction);
            vec![Effect::Notify(Notice::Available)]
        }
        (VerifyStage::Primary, false) => {
            let Some(working) = state.context().working().cloned() else {
                state.transition(SessionState::ListingResults);
                return Vec::new();
            };
            let mut effects = vec![Effect::Notify(Notice::NotAvailable {
                title: working.title.clone(),
                year: working.year.clone(),
            })];
            let alternate = state
                .context()
                .selected_movie()
                .filter(|movie| movie.has_alternate_title())
                .map(|movie| movie.original_title.clone());
            match alternate {
                Some(original_title) => {
                    state.transition(SessionState::Verifying(VerifyStage::OriginalTitle));
                    effects.push(Effect::Notify(Notice::TryingOriginalTitle {
                        original_title: original_title.clone(),
                    }));
                    effects.push(Effect::CheckExists {
                        title: original_title,
                        year: working.year,
                    });
                }
                None => {
                    state.clear_working();
                    state.transition(SessionState::ListingResults);
                }
            }
            effects
        }
        (VerifyStage::OriginalTitle, true) => {
            if let Some(original_title) = state
                .context()
                .selected_movie()
                .map(|movie| movie.original_title.clone())
            {
                state.set_working_title(original_title);
            }
            state.transition(SessionState::ConfirmingExtraction);
            vec![Effect::Notify(Notice::AvailableUnderOriginalTitle)]
        }
        (VerifyStage::OriginalTitle, false) => {
            state.clear_working();
            state.transition(SessionState::ListingResults);
            vec![Effect::Notify(Notice::NotAvailableUnderOriginalTitle)]
        }
    }
}

fn extraction_finished(state: &mut AppState, result: ExtractionResult) -> Vec<Effect> {
    match result {
        ExtractionResult::Success(review) => {
            let (title, year) = state
                .context()
                .working()
                .map(|working| (working.title.clone(), working.year.clone()))
                .unwrap_or_default();
            state.transition(SessionState::PostExtractionMenu);
            vec![Effect::Notify(Notice::ExtractionSucceeded {
                review,
                title,
                year,
            })]
        }
        ExtractionResult::Failure { status, message } => {
            finder_logging::finder_warn!("extraction failed ({status}): {message}");
            state.transition(SessionState::ListingResults);
            vec![Effect::Notify(Notice::ExtractionFailed { message })]
        }
    }
}

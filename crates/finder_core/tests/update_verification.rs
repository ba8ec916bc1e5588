use finder_core::{
    update, AppState, CandidateMovie, Effect, Msg, Notice, Prompt, SessionState, VerifyStage,
    WorkingTitle,
};
use pretty_assertions::assert_eq;

fn movie(title: &str, original_title: &str, year: &str) -> CandidateMovie {
    CandidateMovie {
        id: 1,
        title: title.to_string(),
        original_title: original_title.to_string(),
        release_year: year.to_string(),
        director: "Hayao Miyazaki".to_string(),
        runtime_minutes: None,
        genres: Vec::new(),
        synopsis: "No synopsis available".to_string(),
        rating: 8.5,
        poster_reference: String::new(),
    }
}

fn verifying(movie: CandidateMovie) -> (AppState, Vec<Effect>) {
    let (state, _) = update(AppState::new(), Msg::SearchSubmitted("query".to_string()));
    let (state, _) = update(state, Msg::SearchCompleted(vec![movie]));
    update(state, Msg::MovieSelected(0))
}

fn check_effects(effects: &[Effect]) -> Vec<&Effect> {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::CheckExists { .. }))
        .collect()
}

#[test]
fn found_on_primary_title_skips_fallback() {
    let (state, effects) = verifying(movie("Dune", "Dune", "2021"));
    assert_eq!(check_effects(&effects).len(), 1);

    let (state, effects) = update(state, Msg::ExistenceChecked { found: true });
    assert_eq!(state.session(), SessionState::ConfirmingExtraction);
    assert!(check_effects(&effects).is_empty());
    assert_eq!(effects, vec![Effect::Notify(Notice::Available)]);
    assert_eq!(
        state.prompt(),
        Some(Prompt::ConfirmExtraction {
            title: "Dune".to_string(),
            year: "2021".to_string(),
        })
    );
}

#[test]
fn not_found_with_distinct_original_title_attempts_one_fallback() {
    let (state, _) = verifying(movie("La città incantata", "千と千尋の神隠し", "2001"));
    let (state, effects) = update(state, Msg::ExistenceChecked { found: false });

    assert_eq!(
        state.session(),
        SessionState::Verifying(VerifyStage::OriginalTitle)
    );
    assert_eq!(
        check_effects(&effects),
        vec![&Effect::CheckExists {
            title: "千と千尋の神隠し".to_string(),
            year: "2001".to_string(),
        }]
    );
    // The working title only switches once the fallback succeeds.
    assert_eq!(
        state.context().working().map(|w| w.title.as_str()),
        Some("La città incantata")
    );
}

#[test]
fn fallback_success_swaps_working_title() {
    let (state, _) = verifying(movie("La città incantata", "Sen to Chihiro", "2001"));
    let (state, _) = update(state, Msg::ExistenceChecked { found: false });
    let (state, effects) = update(state, Msg::ExistenceChecked { found: true });

    assert_eq!(state.session(), SessionState::ConfirmingExtraction);
    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::AvailableUnderOriginalTitle)]
    );
    assert_eq!(
        state.context().working(),
        Some(&WorkingTitle {
            title: "Sen to Chihiro".to_string(),
            year: "2001".to_string(),
        })
    );

    let (_, effects) = update(state, Msg::ConfirmExtract);
    assert_eq!(
        effects.last(),
        Some(&Effect::Extract {
            title: "Sen to Chihiro".to_string(),
            year: "2001".to_string(),
        })
    );
}

#[test]
fn fallback_failure_returns_to_list_without_further_checks() {
    let (state, _) = verifying(movie("La città incantata", "Sen to Chihiro", "2001"));
    let results = state.context().results().clone();
    let (state, _) = update(state, Msg::ExistenceChecked { found: false });
    let (state, effects) = update(state, Msg::ExistenceChecked { found: false });

    assert_eq!(state.session(), SessionState::ListingResults);
    assert!(check_effects(&effects).is_empty());
    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::NotAvailableUnderOriginalTitle)]
    );
    assert_eq!(state.context().results(), &results);
    assert_eq!(state.context().working(), None);
}

#[test]
fn not_found_with_identical_original_title_returns_to_list() {
    let (state, _) = verifying(movie("Dune", "Dune", "2021"));
    let results = state.context().results().clone();
    let (state, effects) = update(state, Msg::ExistenceChecked { found: false });

    assert_eq!(state.session(), SessionState::ListingResults);
    assert!(check_effects(&effects).is_empty());
    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::NotAvailable {
            title: "Dune".to_string(),
            year: "2021".to_string(),
        })]
    );
    assert_eq!(state.context().results(), &results);
}

#[test]
fn empty_original_title_is_not_an_alternate() {
    let (state, _) = verifying(movie("Dune", "", "2021"));
    let (state, effects) = update(state, Msg::ExistenceChecked { found: false });

    assert_eq!(state.session(), SessionState::ListingResults);
    assert!(check_effects(&effects).is_empty());
}

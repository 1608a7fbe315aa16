use shelf_core::{update, AppState, BookSummary, Effect, Msg, SearchError, SearchState};

fn search(state: AppState, term: &str) -> (AppState, u64) {
    let (state, _) = update(state, Msg::QueryChanged(term.to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    match effects.as_slice() {
        [Effect::QueryCatalog { request_id, .. }] => (state, *request_id),
        other => panic!("expected a catalog query, got {other:?}"),
    }
}

fn results_for(term: &str) -> Vec<BookSummary> {
    vec![BookSummary {
        id: format!("{term}-1"),
        title: Some(format!("About {term}")),
        ..BookSummary::default()
    }]
}

fn complete(state: AppState, request_id: u64, term: &str) -> AppState {
    update(
        state,
        Msg::SearchCompleted {
            request_id,
            outcome: Ok(results_for(term)),
        },
    )
    .0
}

#[test]
fn newest_search_wins_when_responses_arrive_in_order() {
    let (state, a) = search(AppState::new(), "a");
    let (state, b) = search(state, "b");

    let state = complete(state, a, "a");
    assert_eq!(state.search_state(), &SearchState::Loading);
    let state = complete(state, b, "b");

    assert_eq!(state.search_state(), &SearchState::Success(results_for("b")));
}

#[test]
fn newest_search_wins_when_responses_arrive_reversed() {
    let (state, a) = search(AppState::new(), "a");
    let (state, b) = search(state, "b");

    let state = complete(state, b, "b");
    let state = complete(state, a, "a");

    assert_eq!(state.search_state(), &SearchState::Success(results_for("b")));
}

#[test]
fn stale_failure_cannot_overwrite_newer_success() {
    let (state, a) = search(AppState::new(), "a");
    let (state, b) = search(state, "b");
    let state = complete(state, b, "b");

    let (mut state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: a,
            outcome: Err(SearchError::Catalog),
        },
    );

    assert_eq!(state.search_state(), &SearchState::Success(results_for("b")));
    state.consume_dirty();
    let (mut state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: a,
            outcome: Ok(results_for("a")),
        },
    );
    assert!(!state.consume_dirty());
}

#[test]
fn response_after_blank_submit_is_ignored() {
    let (state, a) = search(AppState::new(), "a");
    let (state, _) = update(state, Msg::QueryChanged("  ".into()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    assert!(effects.is_empty());

    let state = complete(state, a, "a");
    assert_eq!(
        state.search_state(),
        &SearchState::Error("Enter a search term to begin.".to_string())
    );
}

use shelf_logging::shelf_debug;

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SearchSubmitted => search(&mut state, None),
        Msg::QuickPickChosen(pick) => {
            state.set_query(pick.clone());
            search(&mut state, Some(&pick))
        }
        Msg::SearchCompleted {
            request_id,
            outcome,
        } => {
            if !state.complete_search(request_id, outcome) {
                shelf_debug!(
                    "Dropping stale completion request_id={} in_flight={:?}",
                    request_id,
                    state.session().in_flight()
                );
            }
            Vec::new()
        }
        Msg::FocusMoved(delta) => {
            state.move_focus(delta);
            Vec::new()
        }
        Msg::FocusedActivated => {
            if let Some(book) = state.focused_book().cloned() {
                state.select(book);
            }
            Vec::new()
        }
        Msg::BookSelected(book) => {
            state.select(book);
            Vec::new()
        }
        Msg::SelectionDismissed => {
            state.clear_selection();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn search(state: &mut AppState, raw: Option<&str>) -> Vec<Effect> {
    match state.start_search(raw) {
        Some(request) => vec![Effect::from(request)],
        None => Vec::new(),
    }
}

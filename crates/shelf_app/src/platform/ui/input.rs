use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shelf_core::{AppViewModel, Msg};

use super::constants::GALLERY_COLUMNS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

/// Maps a key press to a message, given what is currently on screen.
pub fn map_key(key: KeyEvent, view: &AppViewModel) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return KeyAction::Quit;
    }

    // The overlay is modal: only dismiss keys get through.
    if view.detail.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                KeyAction::Dispatch(Msg::SelectionDismissed)
            }
            _ => KeyAction::Ignore,
        };
    }

    let columns = GALLERY_COLUMNS as isize;
    let msg = match key.code {
        KeyCode::Enter => Msg::SearchSubmitted,
        KeyCode::Tab => Msg::FocusedActivated,
        KeyCode::Left => Msg::FocusMoved(-1),
        KeyCode::Right => Msg::FocusMoved(1),
        KeyCode::Up => Msg::FocusMoved(-columns),
        KeyCode::Down => Msg::FocusMoved(columns),
        KeyCode::F(n) => {
            match n
                .checked_sub(1)
                .and_then(|index| view.quick_picks.get(usize::from(index)))
            {
                Some(pick) => Msg::QuickPickChosen(pick.to_string()),
                None => return KeyAction::Ignore,
            }
        }
        KeyCode::Backspace => {
            let mut query = view.query.clone();
            if query.pop().is_none() {
                return KeyAction::Ignore;
            }
            Msg::QueryChanged(query)
        }
        KeyCode::Char('u') if ctrl => Msg::QueryChanged(String::new()),
        KeyCode::Char(c) if !ctrl => Msg::QueryChanged(format!("{}{c}", view.query)),
        _ => return KeyAction::Ignore,
    };
    KeyAction::Dispatch(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{AppState, BookSummary};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn view_with_query(query: &str) -> AppViewModel {
        AppViewModel {
            query: query.to_string(),
            ..AppState::new().view()
        }
    }

    #[test]
    fn typing_extends_and_trims_query() {
        let view = view_with_query("dun");
        assert_eq!(
            map_key(press(KeyCode::Char('e')), &view),
            KeyAction::Dispatch(Msg::QueryChanged("dune".into()))
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), &view),
            KeyAction::Dispatch(Msg::QueryChanged("du".into()))
        );
        assert_eq!(
            map_key(ctrl('u'), &view),
            KeyAction::Dispatch(Msg::QueryChanged(String::new()))
        );
        assert_eq!(map_key(press(KeyCode::Backspace), &view_with_query("")), KeyAction::Ignore);
    }

    #[test]
    fn enter_submits_and_arrows_move_focus() {
        let view = view_with_query("dune");
        assert_eq!(
            map_key(press(KeyCode::Enter), &view),
            KeyAction::Dispatch(Msg::SearchSubmitted)
        );
        assert_eq!(
            map_key(press(KeyCode::Down), &view),
            KeyAction::Dispatch(Msg::FocusMoved(GALLERY_COLUMNS as isize))
        );
        assert_eq!(
            map_key(press(KeyCode::Left), &view),
            KeyAction::Dispatch(Msg::FocusMoved(-1))
        );
        assert_eq!(
            map_key(press(KeyCode::Tab), &view),
            KeyAction::Dispatch(Msg::FocusedActivated)
        );
    }

    #[test]
    fn function_keys_pick_canned_queries() {
        let view = view_with_query("");
        assert_eq!(
            map_key(press(KeyCode::F(1)), &view),
            KeyAction::Dispatch(Msg::QuickPickChosen("Desert memoir".into()))
        );
        assert_eq!(
            map_key(press(KeyCode::F(5)), &view),
            KeyAction::Dispatch(Msg::QuickPickChosen("Afrofuturism".into()))
        );
        assert_eq!(map_key(press(KeyCode::F(6)), &view), KeyAction::Ignore);
        assert_eq!(map_key(press(KeyCode::F(0)), &view), KeyAction::Ignore);
    }

    #[test]
    fn overlay_only_accepts_dismiss_keys() {
        let (state, _) = shelf_core::update(
            AppState::new(),
            Msg::BookSelected(BookSummary {
                id: "x".into(),
                ..BookSummary::default()
            }),
        );
        let view = state.view();

        assert_eq!(
            map_key(press(KeyCode::Esc), &view),
            KeyAction::Dispatch(Msg::SelectionDismissed)
        );
        assert_eq!(map_key(press(KeyCode::Char('a')), &view), KeyAction::Ignore);
        assert_eq!(map_key(ctrl('c'), &view), KeyAction::Quit);
    }
}

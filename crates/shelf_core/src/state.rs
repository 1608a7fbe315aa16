use crate::view_model::{self, AppViewModel};
use crate::{
    BookSummary, RequestId, SearchError, SearchRequest, SearchSession, SearchState, Selection,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    session: SearchSession,
    selection: Selection,
    focus: Option<usize>,
    missing_api_key: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a front end that knows whether a catalog key was configured.
    pub fn with_credentials(has_api_key: bool) -> Self {
        Self {
            missing_api_key: !has_api_key,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn search_state(&self) -> &SearchState {
        self.session.current_state()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn missing_api_key(&self) -> bool {
        self.missing_api_key
    }

    /// Returns and resets the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_query(&mut self, text: String) {
        if self.session.query() != text {
            self.session.set_query(text);
            self.mark_dirty();
        }
    }

    pub(crate) fn start_search(&mut self, raw: Option<&str>) -> Option<SearchRequest> {
        let request = self.session.search(raw);
        self.focus = None;
        self.mark_dirty();
        request
    }

    pub(crate) fn complete_search(
        &mut self,
        request_id: RequestId,
        outcome: Result<Vec<BookSummary>, SearchError>,
    ) -> bool {
        if !self.session.complete(request_id, outcome) {
            return false;
        }
        self.focus = if self.search_state().books().is_empty() {
            None
        } else {
            Some(0)
        };
        self.mark_dirty();
        true
    }

    pub(crate) fn move_focus(&mut self, delta: isize) {
        let count = self.search_state().books().len();
        let Some(current) = self.focus else {
            return;
        };
        if count == 0 {
            return;
        }
        let next = current.saturating_add_signed(delta).min(count - 1);
        if next != current {
            self.focus = Some(next);
            self.mark_dirty();
        }
    }

    pub(crate) fn focused_book(&self) -> Option<&BookSummary> {
        self.focus
            .and_then(|index| self.search_state().books().get(index))
    }

    pub(crate) fn select(&mut self, book: BookSummary) {
        self.selection.select(book);
        self.mark_dirty();
    }

    pub(crate) fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.mark_dirty();
        }
    }
}

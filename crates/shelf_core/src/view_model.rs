use crate::{AppState, BookSummary, SearchState};

/// Canned queries offered next to the search box.
pub const QUICK_PICKS: [&str; 5] = [
    "Desert memoir",
    "Cozy mystery",
    "Modern mythology",
    "Japanese design",
    "Afrofuturism",
];

/// Placeholder cards shown while a search is loading.
pub const SKELETON_CARDS: usize = 6;

pub const LABEL_SEARCHING: &str = "Searching the stacks...";
pub const LABEL_START: &str = "Start with a title, author, or topic.";
pub const LABEL_NO_BOOKS: &str = "No books found yet.";
pub const API_KEY_HINT: &str =
    "Add your Google Books API key in the config file to fetch results.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub query_caption: String,
    pub results_label: String,
    pub search_button: &'static str,
    pub search_enabled: bool,
    pub error: Option<String>,
    pub cards: Vec<BookCardView>,
    pub skeletons: usize,
    pub focused: Option<usize>,
    pub detail: Option<BookDetailView>,
    pub api_key_hint: Option<&'static str>,
    pub quick_picks: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCardView {
    pub id: String,
    pub category: String,
    pub title: String,
    pub authors: String,
    pub published: String,
    pub pages: String,
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetailView {
    pub title: String,
    pub authors: String,
    pub cover_url: Option<String>,
    pub description: String,
    pub published: String,
    pub length: String,
    pub preview_link: Option<String>,
}

/// Status line under the results heading.
pub fn results_label(state: &SearchState, _query: &str) -> String {
    match state {
        SearchState::Loading => LABEL_SEARCHING.to_string(),
        SearchState::Idle => LABEL_START.to_string(),
        SearchState::Success(books) if books.is_empty() => LABEL_NO_BOOKS.to_string(),
        SearchState::Success(books) => format!("{} titles", books.len()),
        SearchState::Error(_) => LABEL_NO_BOOKS.to_string(),
    }
}

pub fn query_caption(query: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        LABEL_START.to_string()
    } else {
        format!("Showing results for \"{trimmed}\"")
    }
}

impl From<&BookSummary> for BookCardView {
    fn from(book: &BookSummary) -> Self {
        Self {
            id: book.id.clone(),
            category: book.display_category().to_string(),
            title: book.display_title().to_string(),
            authors: book.display_authors(),
            published: book.card_published().to_string(),
            pages: book.card_pages(),
            cover_url: book.cover().map(ToOwned::to_owned),
        }
    }
}

impl From<&BookSummary> for BookDetailView {
    fn from(book: &BookSummary) -> Self {
        Self {
            title: book.display_title().to_string(),
            authors: book.display_authors(),
            cover_url: book.cover().map(ToOwned::to_owned),
            description: book.display_description().to_string(),
            published: book.detail_published().to_string(),
            length: book.detail_length(),
            preview_link: book.preview().map(ToOwned::to_owned),
        }
    }
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    let search = state.search_state();
    let query = state.session().query();
    let loading = search.is_loading();

    AppViewModel {
        query: query.to_string(),
        query_caption: query_caption(query),
        results_label: results_label(search, query),
        search_button: if loading { "Searching..." } else { "Search" },
        search_enabled: !loading,
        error: search.error().map(ToOwned::to_owned),
        cards: search.books().iter().map(BookCardView::from).collect(),
        skeletons: if loading { SKELETON_CARDS } else { 0 },
        focused: state.focus(),
        detail: state.selection().current().map(BookDetailView::from),
        api_key_hint: state.missing_api_key().then_some(API_KEY_HINT),
        quick_picks: QUICK_PICKS.to_vec(),
    }
}

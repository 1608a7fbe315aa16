use crate::BookSummary;

pub type RequestId = u64;

/// Number of results requested per search.
pub const MAX_RESULTS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Whitespace-only input, caught before any request goes out.
    #[error("Enter a search term to begin.")]
    EmptyQuery,
    /// Any catalog failure. The cause is deliberately not carried.
    #[error("Something went wrong. Try again in a moment.")]
    Catalog,
}

/// A trimmed, non-empty query term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<BookSummary>),
    Error(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn books(&self) -> &[BookSummary] {
        match self {
            SearchState::Success(books) => books,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Error(message) => Some(message),
            _ => None,
        }
    }

    fn failed(err: SearchError) -> Self {
        SearchState::Error(err.to_string())
    }
}

/// An outbound catalog query produced by a valid search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub request_id: RequestId,
    pub term: String,
    pub max_results: u32,
}

/// Owns the query text, the search state and the request sequence.
///
/// Only the most recently issued request may resolve the session. Issuing a
/// new search, or failing validation, abandons whatever was in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchSession {
    query: String,
    state: SearchState,
    last_issued: RequestId,
    in_flight: Option<RequestId>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn current_state(&self) -> &SearchState {
        &self.state
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Starts a search with `raw` or, when absent, the stored query text.
    pub fn search(&mut self, raw: Option<&str>) -> Option<SearchRequest> {
        let raw = raw.unwrap_or(&self.query);
        match SearchQuery::parse(raw) {
            Ok(query) => {
                self.last_issued += 1;
                self.in_flight = Some(self.last_issued);
                self.state = SearchState::Loading;
                Some(SearchRequest {
                    request_id: self.last_issued,
                    term: query.into_inner(),
                    max_results: MAX_RESULTS,
                })
            }
            Err(err) => {
                self.in_flight = None;
                self.state = SearchState::failed(err);
                None
            }
        }
    }

    /// Applies a catalog outcome. Returns false when the request is stale.
    pub fn complete(
        &mut self,
        request_id: RequestId,
        outcome: Result<Vec<BookSummary>, SearchError>,
    ) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.state = match outcome {
            Ok(books) => SearchState::Success(books),
            Err(_) => SearchState::failed(SearchError::Catalog),
        };
        true
    }
}

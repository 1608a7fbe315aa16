//! Shelf core: pure search-session state machine and view-model helpers.
mod book;
mod effect;
mod msg;
mod selection;
mod session;
mod state;
mod update;
mod view_model;

pub use book::BookSummary;
pub use effect::Effect;
pub use msg::Msg;
pub use selection::Selection;
pub use session::{
    RequestId, SearchError, SearchQuery, SearchRequest, SearchSession, SearchState, MAX_RESULTS,
};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    query_caption, results_label, AppViewModel, BookCardView, BookDetailView, QUICK_PICKS,
    SKELETON_CARDS,
};

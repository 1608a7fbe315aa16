#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input.
    QueryChanged(String),
    /// User submitted the current query text.
    SearchSubmitted,
    /// User picked one of the canned queries.
    QuickPickChosen(String),
    /// Catalog finished a request.
    SearchCompleted {
        request_id: crate::RequestId,
        outcome: Result<Vec<crate::BookSummary>, crate::SearchError>,
    },
    /// Move the gallery focus by a signed number of cards.
    FocusMoved(isize),
    /// Open the detail overlay for the focused card.
    FocusedActivated,
    /// Open the detail overlay for a specific book.
    BookSelected(crate::BookSummary),
    /// Close button, Escape or backdrop.
    SelectionDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

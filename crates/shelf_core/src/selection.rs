use crate::BookSummary;

/// The book shown in the detail overlay, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    current: Option<BookSummary>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, book: BookSummary) {
        self.current = Some(book);
    }

    /// Returns true if something was actually cleared.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<&BookSummary> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

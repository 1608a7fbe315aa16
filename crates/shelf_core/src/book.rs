/// Normalized record for one catalog result.
///
/// Every optional field keeps the catalog's absence explicit; the display
/// helpers below turn absence into the fixed fallback strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookSummary {
    pub id: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
    pub category: Option<String>,
    /// Cover thumbnail, already upgraded to `https:`.
    pub cover_url: Option<String>,
    pub description: Option<String>,
    pub preview_link: Option<String>,
}

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const FEATURED_READ: &str = "Featured read";
pub const UNKNOWN_YEAR: &str = "Unknown year";
pub const UNKNOWN_DATE: &str = "Unknown date";
pub const PAGE_COUNT_NA: &str = "Page count N/A";
pub const UNKNOWN_LENGTH: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available.";

impl BookSummary {
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(UNTITLED)
    }

    pub fn display_authors(&self) -> String {
        let joined = self.authors.join(", ");
        if joined.trim().is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            joined
        }
    }

    pub fn display_category(&self) -> &str {
        non_empty(self.category.as_deref()).unwrap_or(FEATURED_READ)
    }

    /// Published date as shown on a gallery card.
    pub fn card_published(&self) -> &str {
        non_empty(self.published_date.as_deref()).unwrap_or(UNKNOWN_YEAR)
    }

    /// Published date as shown in the detail overlay.
    pub fn detail_published(&self) -> &str {
        non_empty(self.published_date.as_deref()).unwrap_or(UNKNOWN_DATE)
    }

    pub fn card_pages(&self) -> String {
        self.pages_label().unwrap_or_else(|| PAGE_COUNT_NA.to_string())
    }

    pub fn detail_length(&self) -> String {
        self.pages_label()
            .unwrap_or_else(|| UNKNOWN_LENGTH.to_string())
    }

    pub fn display_description(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
    }

    pub fn cover(&self) -> Option<&str> {
        non_empty(self.cover_url.as_deref())
    }

    pub fn preview(&self) -> Option<&str> {
        non_empty(self.preview_link.as_deref())
    }

    // A zero page count is treated the same as a missing one.
    fn pages_label(&self) -> Option<String> {
        self.page_count
            .filter(|count| *count > 0)
            .map(|count| format!("{count} pages"))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

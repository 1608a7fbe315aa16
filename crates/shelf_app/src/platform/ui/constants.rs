use std::time::Duration;

/// Cards per gallery row.
pub const GALLERY_COLUMNS: usize = 3;
/// Rows of a single gallery card, borders included.
pub const CARD_HEIGHT: u16 = 7;
/// Detail overlay size as a percentage of the screen.
pub const OVERLAY_WIDTH_PCT: u16 = 80;
pub const OVERLAY_HEIGHT_PCT: u16 = 75;
/// Input poll interval; also paces engine polling.
pub const TICK: Duration = Duration::from_millis(75);

pub const TITLE: &str = "Book Discovery";
pub const TAGLINE: &str = "Search the Google Books catalog and surface the editions that feel right for your next deep dive.";
pub const KEY_HINTS: &str =
    "Enter search | Arrows browse | Tab details | Esc close | F1-F5 quick picks | Ctrl+C quit";

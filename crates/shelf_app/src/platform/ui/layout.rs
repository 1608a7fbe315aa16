use ratatui::layout::{Constraint, Flex, Layout, Rect};

use super::constants::{CARD_HEIGHT, GALLERY_COLUMNS};

pub struct ScreenAreas {
    pub header: Rect,
    pub search: Rect,
    pub picks: Rect,
    pub status: Rect,
    pub gallery: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect) -> ScreenAreas {
    let [header, search, picks, status, gallery, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        search,
        picks,
        status,
        gallery,
        footer,
    }
}

/// A rectangle of the given percentages, centered in `area`.
pub fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Card slots that fit in `area`, scrolled so the focused card stays visible.
pub fn gallery_slots(area: Rect, count: usize, focused: Option<usize>) -> Vec<(usize, Rect)> {
    if count == 0 || area.height < CARD_HEIGHT || area.width == 0 {
        return Vec::new();
    }

    let columns = GALLERY_COLUMNS;
    let visible_rows = usize::from(area.height / CARD_HEIGHT);
    let focused_row = focused.unwrap_or(0) / columns;
    let first_row = (focused_row + 1).saturating_sub(visible_rows);
    let col_width = area.width / columns as u16;

    let mut slots = Vec::new();
    for index in first_row * columns..count {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = index % columns;
        let x = area.x + col as u16 * col_width;
        // Last column absorbs the rounding remainder.
        let width = if col == columns - 1 {
            area.width - col as u16 * col_width
        } else {
            col_width
        };
        let y = area.y + row as u16 * CARD_HEIGHT;
        slots.push((index, Rect::new(x, y, width, CARD_HEIGHT)));
    }
    slots
}

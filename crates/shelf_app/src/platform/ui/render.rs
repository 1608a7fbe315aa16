use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;
use shelf_core::{AppViewModel, BookCardView, BookDetailView};

use super::constants::*;
use super::layout;

const ACCENT: Color = Color::Rgb(176, 123, 66);
const MUTED: Color = Color::Rgb(124, 106, 92);
const WARN: Color = Color::Rgb(122, 77, 31);

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let areas = layout::split(frame.area());

    render_header(frame, areas.header);
    render_search(frame, areas.search, view);
    render_picks(frame, areas.picks, view);
    render_status(frame, areas.status, view);
    render_gallery(frame, areas.gallery, view);
    frame.render_widget(Paragraph::new(KEY_HINTS).fg(MUTED), areas.footer);

    if let Some(detail) = &view.detail {
        render_detail(frame, detail);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(TITLE.bold()),
        Line::from(Span::styled(TAGLINE, Style::new().fg(MUTED))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_search(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let button_style = if view.search_enabled {
        Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(MUTED).add_modifier(Modifier::DIM)
    };
    let line = Line::from(vec![
        Span::raw(view.query.as_str()),
        Span::styled("_", Style::new().fg(ACCENT)),
        Span::raw("  "),
        Span::styled(format!("[{}]", view.search_button), button_style),
    ]);
    let block = Block::bordered().title(" Search the stacks ");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_picks(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let mut spans = Vec::with_capacity(view.quick_picks.len() * 2);
    for (index, pick) in view.quick_picks.iter().enumerate() {
        spans.push(Span::styled(format!("F{} ", index + 1), Style::new().fg(MUTED)));
        spans.push(Span::styled(format!("{pick}  "), Style::new().fg(WARN)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let mut lines = vec![
        Line::from(view.query_caption.as_str().fg(MUTED)),
        Line::from(view.results_label.as_str().fg(MUTED)),
    ];
    if let Some(hint) = view.api_key_hint {
        lines.push(Line::from(hint.fg(WARN)));
    }
    if let Some(error) = &view.error {
        lines.push(Line::from(error.as_str().fg(WARN).bold()));
    }
    let block = Block::new().title(" Browse results ".bold());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_gallery(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    if view.skeletons > 0 {
        for (_, slot) in layout::gallery_slots(area, view.skeletons, None) {
            let placeholder = Paragraph::new(vec![
                Line::from("░".repeat(usize::from(slot.width.saturating_sub(8)))),
                Line::from("░".repeat(usize::from(slot.width / 2))),
            ])
            .fg(MUTED)
            .block(Block::bordered().border_style(Style::new().fg(MUTED)));
            frame.render_widget(placeholder, slot);
        }
        return;
    }

    for (index, slot) in layout::gallery_slots(area, view.cards.len(), view.focused) {
        let focused = view.focused == Some(index);
        render_card(frame, slot, &view.cards[index], focused);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &BookCardView, focused: bool) {
    let border = if focused {
        Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(MUTED)
    };
    let cover = if card.cover_url.is_some() {
        "cover"
    } else {
        "no cover"
    };
    let lines = vec![
        Line::from(Span::styled(
            card.category.to_uppercase(),
            Style::new().fg(ACCENT),
        )),
        Line::from(card.title.as_str().bold()),
        Line::from(card.authors.as_str()),
        Line::from(vec![
            Span::styled(card.published.as_str(), Style::new().fg(MUTED)),
            Span::raw(" · "),
            Span::styled(card.pages.as_str(), Style::new().fg(MUTED)),
            Span::raw(" · "),
            Span::styled(cover, Style::new().fg(MUTED)),
        ]),
    ];
    let block = Block::bordered().border_style(border);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_detail(frame: &mut Frame, detail: &BookDetailView) {
    let area = layout::centered(frame.area(), OVERLAY_WIDTH_PCT, OVERLAY_HEIGHT_PCT);
    let mut lines = vec![
        Line::from("SELECTED".fg(ACCENT)),
        Line::from(detail.title.as_str().bold()),
        Line::from(detail.authors.as_str().fg(MUTED)),
        Line::default(),
        Line::from(vec![
            Span::styled("Published ", Style::new().fg(ACCENT)),
            Span::raw(detail.published.as_str()),
            Span::styled("   Length ", Style::new().fg(ACCENT)),
            Span::raw(detail.length.as_str()),
        ]),
    ];
    if let Some(cover) = &detail.cover_url {
        lines.push(Line::from(vec![
            Span::styled("Cover ", Style::new().fg(ACCENT)),
            Span::raw(cover.as_str()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(detail.description.as_str()));
    if let Some(link) = &detail.preview_link {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Preview on Google Books: {link}"),
            Style::new().fg(WARN).add_modifier(Modifier::UNDERLINED),
        )));
    }

    let block = Block::bordered()
        .title(" Details ")
        .title_bottom(" Esc to close ");
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use shelf_core::{update, AppState, BookSummary, Effect, Msg};

    fn draw(view: &AppViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, view)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn searched(term: &str) -> (AppState, u64) {
        let (state, effects) = update(AppState::new(), Msg::QuickPickChosen(term.into()));
        match effects.as_slice() {
            [Effect::QueryCatalog { request_id, .. }] => (state, *request_id),
            other => panic!("expected a catalog query, got {other:?}"),
        }
    }

    #[test]
    fn idle_screen_shows_prompt_and_picks() {
        let text = draw(&AppState::with_credentials(false).view());

        assert!(text.contains("Book Discovery"));
        assert!(text.contains("Start with a title, author, or topic."));
        assert!(text.contains("F1 Desert memoir"));
        assert!(text.contains("Add your Google Books API key"));
        assert!(text.contains("[Search]"));
    }

    #[test]
    fn loading_screen_shows_searching_label() {
        let (state, _) = searched("Cozy mystery");
        let text = draw(&state.view());

        assert!(text.contains("Searching the stacks..."));
        assert!(text.contains("[Searching...]"));
        assert!(text.contains("Showing results for \"Cozy mystery\""));
    }

    #[test]
    fn results_render_cards_with_fallbacks() {
        let (state, request_id) = searched("mythology");
        let books = vec![
            BookSummary {
                id: "1".into(),
                title: Some("Circe".into()),
                authors: vec!["Madeline Miller".into()],
                page_count: Some(393),
                ..BookSummary::default()
            },
            BookSummary {
                id: "2".into(),
                ..BookSummary::default()
            },
        ];
        let (state, _) = update(
            state,
            Msg::SearchCompleted {
                request_id,
                outcome: Ok(books),
            },
        );
        let text = draw(&state.view());

        assert!(text.contains("2 titles"));
        assert!(text.contains("Circe"));
        assert!(text.contains("Madeline Miller"));
        assert!(text.contains("393 pages"));
        assert!(text.contains("Untitled"));
        assert!(text.contains("Unknown Author"));
        assert!(text.contains("FEATURED READ"));
        assert!(text.contains("Page count N/A"));
    }

    #[test]
    fn error_message_is_shown() {
        let (state, _) = update(AppState::new(), Msg::SearchSubmitted);
        let text = draw(&state.view());

        assert!(text.contains("Enter a search term to begin."));
    }

    #[test]
    fn detail_overlay_shows_selection() {
        let book = BookSummary {
            id: "1".into(),
            title: Some("Pachinko".into()),
            cover_url: Some("https://example.com/x.png".into()),
            preview_link: Some("https://books.example.com/p".into()),
            ..BookSummary::default()
        };
        let (state, _) = update(AppState::new(), Msg::BookSelected(book));
        let text = draw(&state.view());

        assert!(text.contains("Pachinko"));
        assert!(text.contains("Unknown date"));
        assert!(text.contains("No description available."));
        assert!(text.contains("https://example.com/x.png"));
        assert!(text.contains("Preview on Google Books: https://books.example.com/p"));
    }
}

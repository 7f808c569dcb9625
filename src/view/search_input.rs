//! Search input widget for rendering the search bar.

use crate::state::SearchState;
use crate::view::styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar. Always visible; shows a placeholder when inactive.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState) -> Self {
        Self { search_state }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line, border) = match self.search_state {
            SearchState::Typing { query, cursor } => {
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
                let rest: String = after.collect();

                let spans = vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default()
                            .bg(Color::White)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(rest),
                ];
                (Line::from(spans), styles::SELECTED_CARD_BORDER)
            }
            SearchState::Applied { query } => {
                (Line::from(query.as_str()), styles::CARD_BORDER)
            }
            SearchState::Inactive => (
                Line::from(Span::styled("Press / to search titles", styles::MUTED_TEXT)),
                styles::CARD_BORDER,
            ),
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(" Search posts "),
            )
            .render(area, buf);
    }
}

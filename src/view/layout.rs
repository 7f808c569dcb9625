//! Screen layout and top-level rendering.
//!
//! Layout is computed once per frame into a [`ScreenLayout`] so the event
//! loop can hit-test mouse clicks against exactly what was drawn.

use crate::state::AppState;
use crate::view::cards::{layout_cards, PostCard};
use crate::view::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::detail_dialog::{dialog_area, render_detail_dialog};
use crate::view::help::render_help_overlay;
use crate::view::pagination::{layout_footer, FooterItem, PaginationBar};
use crate::view::search_input::SearchInput;
use crate::view::styles;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Calculate a rect centered in `area` covering the given percentages.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let scale = |length: u16, percent: u16| {
        u16::try_from(u32::from(length) * u32::from(percent) / 100).unwrap_or(u16::MAX)
    };
    let popup_width = scale(area.width, percent_x);
    let popup_height = scale(area.height, percent_y);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Positions of everything on screen for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub header: Rect,
    /// Bordered search bar.
    pub search: Rect,
    /// Region the cards are stacked in.
    pub cards_area: Rect,
    /// Visible cards paired with the index of the post each shows.
    pub cards: Vec<(usize, Rect)>,
    /// Pagination footer including its border.
    pub footer: Rect,
    /// Clickable footer controls.
    pub footer_items: Vec<(FooterItem, Rect)>,
    /// Key hint line.
    pub status: Rect,
    /// Where the detail dialog is drawn when open.
    pub dialog: Rect,
}

impl ScreenLayout {
    /// Compute the layout of `area` for the current state.
    pub fn compute(area: Rect, state: &AppState) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(SEARCH_INPUT_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        let cards_area = chunks[2];
        let footer = chunks[3];
        // One row below the top border.
        let footer_inner = Rect::new(
            footer.x,
            footer.y.saturating_add(1),
            footer.width,
            footer.height.saturating_sub(1).min(1),
        );

        Self {
            header: chunks[0],
            search: chunks[1],
            cards_area,
            cards: layout_cards(
                cards_area,
                state.posts().len(),
                state.selected_index().unwrap_or(0),
            ),
            footer,
            footer_items: if footer_inner.height == 0 {
                Vec::new()
            } else {
                layout_footer(footer_inner, state)
            },
            status: chunks[4],
            dialog: dialog_area(area),
        }
    }

    /// Index of the post whose card contains the given cell.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cards
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(index, _)| *index)
    }

    /// Footer control under the given cell.
    pub fn footer_item_at(&self, column: u16, row: u16) -> Option<FooterItem> {
        self.footer_items
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(item, _)| *item)
    }

    /// Whether the cell lies inside the dialog.
    pub fn in_dialog(&self, column: u16, row: u16) -> bool {
        contains(self.dialog, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Render the whole screen from a precomputed layout.
pub fn render_layout(frame: &mut Frame, state: &AppState, layout: &ScreenLayout) {
    render_header(frame, layout.header, state);
    frame.render_widget(SearchInput::new(state.search()), layout.search);

    if state.posts().is_empty() {
        let message = if state.is_loading() {
            "Loading posts…"
        } else {
            "No posts to show"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, styles::MUTED_TEXT)).alignment(Alignment::Center),
            layout.cards_area,
        );
    } else {
        let cursor = state.selected_index();
        for (index, rect) in &layout.cards {
            if let Some(post) = state.posts().get(*index) {
                frame.render_widget(PostCard::new(post, cursor == Some(*index)), *rect);
            }
        }
    }

    frame.render_widget(PaginationBar::new(state, &layout.footer_items), layout.footer);
    render_status_bar(frame, layout.status, state);

    render_detail_dialog(frame, state.dialog());

    if state.help_visible {
        render_help_overlay(frame, state.help_scroll_offset);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let total = state
        .page_state()
        .total_count()
        .map_or_else(|| "?".to_string(), |count| count.to_string());

    let mut spans = vec![
        Span::styled(" Blog ", styles::APP_TITLE),
        Span::styled(
            format!(
                " Page {}/{} · {} per page · {} posts",
                state.page(),
                state.total_pages(),
                state.page_size(),
                total
            ),
            styles::MUTED_TEXT,
        ),
    ];
    if state.is_loading() {
        spans.push(Span::styled("  loading…", styles::LOADING));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn build_keyboard_hints(state: &AppState) -> &'static str {
    if state.dialog().is_open() {
        " Esc: close · j/k: scroll · q: close"
    } else if state.search().is_typing() {
        " Enter: keep filter · Esc: clear · ←/→: move cursor"
    } else {
        " j/k: select · Enter: open · n/p: page · 1/2/3: size · /: search · ?: help · q: quit"
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(
        Paragraph::new(Span::styled(build_keyboard_hints(state), styles::MUTED_TEXT)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PostsPage;
    use crate::model::{PageNumber, PageSize, Post, PostId};
    use crate::state::{ControllerOptions, FetchCommand, FetchEvent};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn loaded_state(count: u64, total: u64) -> AppState {
        let mut state = AppState::new(PageNumber::FIRST, PageSize::Ten, ControllerOptions::default());
        let FetchCommand::ListPosts { seq, page_size, .. } = state.initial_fetch() else {
            panic!("initial fetch lists posts");
        };
        let posts = (1..=count)
            .map(|id| Post::new(PostId::new(id), format!("title {id}"), format!("body {id}")))
            .collect();
        state.apply_fetch_event(FetchEvent::ListLoaded {
            seq,
            page_size,
            page: PostsPage {
                posts,
                total_count: total,
            },
        });
        state
    }

    fn buffer_to_string(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(state: &AppState, width: u16, height: u16) -> (String, ScreenLayout) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let layout = ScreenLayout::compute(Rect::new(0, 0, width, height), state);
        terminal
            .draw(|frame| render_layout(frame, state, &layout))
            .unwrap();
        (buffer_to_string(&terminal), layout)
    }

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(60, 80, area), Rect::new(20, 5, 60, 40));
    }

    #[test]
    fn centered_rect_handles_very_wide_terminals() {
        // Struct literals: `Rect::new` would clamp an area this large.
        let area = Rect {
            x: 0,
            y: 0,
            width: 1000,
            height: 900,
        };
        let popup = centered_rect(80, 80, area);
        assert_eq!((popup.x, popup.y), (100, 90));
        assert_eq!((popup.width, popup.height), (800, 720));
    }

    #[test]
    fn header_shows_page_summary() {
        let state = loaded_state(10, 100);
        let (text, _) = render(&state, 100, 30);
        assert!(text.contains("Blog"));
        assert!(text.contains("Page 1/10"));
        assert!(text.contains("100 posts"));
    }

    #[test]
    fn loading_before_first_response() {
        let mut state = AppState::new(PageNumber::FIRST, PageSize::Ten, ControllerOptions::default());
        let _ = state.initial_fetch();
        let (text, _) = render(&state, 100, 30);
        assert!(text.contains("Loading posts"));
        assert!(text.contains("loading…"));
    }

    #[test]
    fn cards_fill_available_height() {
        let state = loaded_state(10, 100);
        let (text, layout) = render(&state, 100, 30);
        // 30 rows minus header, search, footer and status leaves 22 rows.
        assert_eq!(layout.cards.len(), 5);
        assert!(text.contains("title 1"));
        assert!(text.contains("title 5"));
        assert!(!text.contains("title 6"));
    }

    #[test]
    fn card_hit_test_maps_to_post_index() {
        let state = loaded_state(10, 100);
        let (_, layout) = render(&state, 100, 30);
        let (index, rect) = layout.cards[2];
        assert_eq!(layout.card_at(rect.x + 1, rect.y + 1), Some(index));
        assert_eq!(layout.card_at(0, 0), None);
    }

    #[test]
    fn footer_items_are_hit_testable() {
        let state = loaded_state(10, 100);
        let (text, layout) = render(&state, 100, 30);
        assert!(text.contains("[20]"));
        let (item, rect) = layout.footer_items[0];
        assert_eq!(layout.footer_item_at(rect.x, rect.y), Some(item));
    }

    #[test]
    fn status_hints_follow_mode() {
        let mut state = loaded_state(3, 3);
        assert!(build_keyboard_hints(&state).contains("/: search"));
        state.start_search();
        assert!(build_keyboard_hints(&state).contains("keep filter"));
    }
}

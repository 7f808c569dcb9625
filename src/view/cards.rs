//! Post cards.
//!
//! Each post is a bordered card: title on the first line, a one-line body
//! excerpt below. Cards stack vertically and the window follows the cursor.

use super::constants::CARD_HEIGHT;
use crate::model::Post;
use crate::view::styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `max_width` display columns, ending in `…` when
/// anything was dropped. Line breaks are flattened to spaces.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let flat: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    let mut out = String::new();
    let mut used = 0;
    let mut chars = flat.chars().peekable();
    while let Some(c) = chars.next() {
        let w = c.width().unwrap_or(0);
        let room = if chars.peek().is_some() {
            max_width - 1
        } else {
            max_width
        };
        if used + w > room {
            out.push('…');
            return out;
        }
        out.push(c);
        used += w;
    }
    out
}

/// Range of card indices to draw so the cursor stays visible.
///
/// `capacity` is how many cards fit. The window only moves once the
/// cursor would leave it from the bottom.
pub fn visible_window(len: usize, cursor: usize, capacity: usize) -> Range<usize> {
    if len == 0 || capacity == 0 {
        return 0..0;
    }
    let capacity = capacity.min(len);
    let start = (cursor + 1).saturating_sub(capacity).min(len - capacity);
    start..start + capacity
}

/// Screen rectangles of the visible cards inside `area`, paired with the
/// index of the post each shows.
pub fn layout_cards(area: Rect, len: usize, cursor: usize) -> Vec<(usize, Rect)> {
    let capacity = usize::from(area.height / CARD_HEIGHT);
    visible_window(len, cursor, capacity)
        .enumerate()
        .map(|(slot, index)| {
            let y = area.y + CARD_HEIGHT * u16::try_from(slot).unwrap_or(u16::MAX);
            (index, Rect::new(area.x, y, area.width, CARD_HEIGHT))
        })
        .collect()
}

/// A single post card.
pub struct PostCard<'a> {
    post: &'a Post,
    selected: bool,
}

impl<'a> PostCard<'a> {
    /// Card for `post`; `selected` highlights the border.
    pub fn new(post: &'a Post, selected: bool) -> Self {
        Self { post, selected }
    }
}

impl Widget for PostCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.selected {
            styles::SELECTED_CARD_BORDER
        } else {
            styles::CARD_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(format!(" #{} ", self.post.id()), styles::MUTED_TEXT));

        let inner_width = usize::from(area.width.saturating_sub(2));
        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(self.post.title(), inner_width),
                styles::CARD_TITLE,
            )),
            Line::from(truncate_to_width(self.post.body(), inner_width)),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostId;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcde", 5), "abcde");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn newlines_are_flattened() {
        assert_eq!(truncate_to_width("a\nb", 10), "a b");
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn zero_width_gives_empty() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn window_starts_at_top() {
        assert_eq!(visible_window(10, 0, 4), 0..4);
        assert_eq!(visible_window(10, 3, 4), 0..4);
    }

    #[test]
    fn window_follows_cursor_down() {
        assert_eq!(visible_window(10, 4, 4), 1..5);
        assert_eq!(visible_window(10, 9, 4), 6..10);
    }

    #[test]
    fn window_with_room_for_everything() {
        assert_eq!(visible_window(3, 2, 10), 0..3);
    }

    #[test]
    fn empty_window() {
        assert_eq!(visible_window(0, 0, 4), 0..0);
        assert_eq!(visible_window(5, 0, 0), 0..0);
    }

    #[test]
    fn card_rects_stack() {
        let rects = layout_cards(Rect::new(0, 5, 40, 13), 10, 0);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], (0, Rect::new(0, 5, 40, CARD_HEIGHT)));
        assert_eq!(rects[2], (2, Rect::new(0, 5 + 2 * CARD_HEIGHT, 40, CARD_HEIGHT)));
    }

    #[test]
    fn card_renders_title_and_body() {
        let mut terminal = Terminal::new(TestBackend::new(30, CARD_HEIGHT)).unwrap();
        let post = Post::new(PostId::new(5), "nesciunt quas odio", "repudiandae veniam");

        terminal
            .draw(|frame| {
                frame.render_widget(PostCard::new(&post, true), frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..30).map(|x| buffer[(x, y)].symbol().to_string()).collect()
        };
        assert!(row(0).contains("#5"));
        assert!(row(1).contains("nesciunt quas odio"));
        assert!(row(2).contains("repudiandae veniam"));
    }
}

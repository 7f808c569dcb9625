//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::layout::centered_rect;
use crate::view::styles;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Posts",
        &[
            ("j/↓", "Next card"),
            ("k/↑", "Previous card"),
            ("g/Home", "First card"),
            ("G/End", "Last card"),
            ("Enter/Space", "Open post detail"),
            ("o", "Reopen last detail"),
            ("click", "Open post detail"),
        ],
    ),
    (
        "Pages",
        &[
            ("n/l/→", "Next page"),
            ("p/h/←", "Previous page"),
            ("[", "First page"),
            ("]", "Last page"),
            ("1/2/3", "10/20/50 posts per page"),
            ("r", "Reload page"),
        ],
    ),
    (
        "Search",
        &[
            ("//Ctrl+f", "Search titles (case-sensitive)"),
            ("Enter", "Keep filter, leave search bar"),
            ("Esc", "Clear search and reload"),
        ],
    ),
    (
        "Dialog",
        &[("Esc/q/Enter", "Close"), ("j/k", "Scroll body")],
    ),
    ("Application", &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")]),
];

/// Number of lines the help content occupies.
pub fn help_line_count() -> u16 {
    let lines: usize = SECTIONS.iter().map(|(_, keys)| keys.len() + 2).sum();
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// Build the help content lines grouped by category.
fn build_help_content() -> Vec<Line<'static>> {
    let category_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = Vec::new();
    for (category, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (key, desc) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<13}"), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::default());
    }
    lines
}

/// Render the help overlay centered on the screen.
///
/// `scroll_offset` is the first content line shown.
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles::MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn help_content_lists_every_section() {
        let content = build_help_content();
        let text: Vec<String> = content.iter().map(|line| line.to_string()).collect();
        for (category, _) in SECTIONS {
            assert!(text.iter().any(|line| line == category), "missing {category}");
        }
        assert_eq!(content.len(), usize::from(help_line_count()));
    }

    #[test]
    fn help_overlay_renders_title() {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| render_help_overlay(frame, 0))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..40 {
            for x in 0..80 {
                text.push_str(buffer[(x, y)].symbol());
            }
        }
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Next page"));
    }
}

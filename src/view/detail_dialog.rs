//! Post detail dialog rendering.

use super::constants::{DIALOG_HEIGHT_PERCENT, DIALOG_WIDTH_PERCENT};
use super::layout::centered_rect;
use crate::state::DetailDialog;
use crate::view::styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Area the dialog occupies inside `area`.
pub fn dialog_area(area: Rect) -> Rect {
    centered_rect(DIALOG_WIDTH_PERCENT, DIALOG_HEIGHT_PERCENT, area)
}

/// Render the detail dialog overlay when it is open.
///
/// The title goes in the first lines, the body below it, wrapped to the
/// dialog width. With no selected post both are blank.
pub fn render_detail_dialog(frame: &mut Frame, dialog: &DetailDialog) {
    if !dialog.is_open() {
        return;
    }

    let popup = dialog_area(frame.area());
    frame.render_widget(Clear, popup);

    let (title, body) = dialog
        .selected()
        .map_or(("", ""), |post| (post.title(), post.body()));

    let mut lines = vec![
        Line::from(Span::styled(title.to_string(), styles::CARD_TITLE)),
        Line::default(),
    ];
    lines.extend(body.lines().map(|line| Line::from(line.to_string())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::SELECTED_CARD_BORDER)
        .title(
            Line::from(Span::styled(
                dialog
                    .selected()
                    .map(|post| format!(" Post #{} ", post.id()))
                    .unwrap_or_default(),
                styles::APP_TITLE,
            ))
            .alignment(Alignment::Center),
        )
        .title_bottom(
            Line::from(Span::styled(" Esc: close  j/k: scroll ", styles::MUTED_TEXT))
                .alignment(Alignment::Center),
        );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((dialog.scroll(), 0));

    frame.render_widget(paragraph, popup);
}

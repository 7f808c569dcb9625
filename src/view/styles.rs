//! Shared styles.

use ratatui::style::{Color, Modifier, Style};

/// Application title in the header.
pub const APP_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Secondary text: hints, placeholders, counters.
pub const MUTED_TEXT: Style = Style::new().fg(Color::Gray);

/// Card title line.
pub const CARD_TITLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Border of an unselected card.
pub const CARD_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Border of the card under the cursor.
pub const SELECTED_CARD_BORDER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// The current page in the pagination control, and the active page size.
pub const ACTIVE_CONTROL: Style = Style::new()
    .bg(Color::Cyan)
    .fg(Color::Black)
    .add_modifier(Modifier::BOLD);

/// Clickable pagination and page-size controls.
pub const CONTROL: Style = Style::new().fg(Color::White);

/// Controls that cannot be used right now (e.g. "previous" on page 1).
pub const DISABLED_CONTROL: Style = Style::new().fg(Color::DarkGray);

/// Loading marker in the header.
pub const LOADING: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::ITALIC);

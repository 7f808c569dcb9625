//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header line (title, page counter, loading marker).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the pagination footer in lines (border + controls).
pub const FOOTER_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of one post card: border, title, body excerpt, border.
pub const CARD_HEIGHT: u16 = 4;

/// Width percentage for the post detail dialog.
pub const DIALOG_WIDTH_PERCENT: u16 = 70;

/// Height percentage for the post detail dialog.
pub const DIALOG_HEIGHT_PERCENT: u16 = 60;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Lines scrolled per key press in the dialog and help overlay.
pub const SCROLL_STEP: u16 = 1;

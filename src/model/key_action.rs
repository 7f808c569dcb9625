//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Card cursor
    /// Move the card cursor down. Default: j/↓
    NextCard,
    /// Move the card cursor up. Default: k/↑
    PrevCard,
    /// Jump to the first card. Default: g/Home
    FirstCard,
    /// Jump to the last card. Default: G/End
    LastCard,
    /// Fetch the detail of the card under the cursor and open the dialog. Default: Enter
    OpenDetail,
    /// Show the last fetched detail again without a new fetch. Default: o
    ReopenDetail,

    // Pagination
    /// Next page. Default: n/l/→
    NextPage,
    /// Previous page. Default: p/h/←
    PrevPage,
    /// First page. Default: [
    FirstPage,
    /// Last page. Default: ]
    LastPage,
    /// Select a page size (10, 20 or 50). Default: 1/2/3
    SetPageSize(crate::model::PageSize),
    /// Re-fetch the current page. Default: r
    Reload,

    // Search
    /// Focus the search input. Default: / or Ctrl+f
    StartSearch,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Quit. Default: q
    Quit,
}

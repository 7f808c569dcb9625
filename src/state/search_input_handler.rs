//! Search input handling (pure state transitions).
//!
//! These functions only edit the [`SearchState`]; deciding whether the text
//! change filters or re-fetches is up to `AppState`.

use crate::state::SearchState;

/// Byte offset of the `cursor`-th char of `s`.
fn byte_offset(s: &str, cursor: usize) -> usize {
    s.char_indices()
        .nth(cursor)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}

/// Focus the search bar, keeping any existing text.
/// The cursor goes to the end of the text.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: String::new(),
            cursor: 0,
        },
        SearchState::Applied { query } => {
            let cursor = query.chars().count();
            SearchState::Typing { query, cursor }
        }
        typing @ SearchState::Typing { .. } => typing,
    }
}

/// Insert a char at the cursor and advance the cursor.
///
/// No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            let at = byte_offset(&query, cursor);
            query.insert(at, ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the char before the cursor.
///
/// No-op if not in Typing state or the cursor is at the start.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            let at = byte_offset(&query, cursor - 1);
            query.remove(at);
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move cursor left by one char, saturating at 0.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one char, saturating at the text length.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Finish editing. Non-empty text stays applied, empty text deactivates.
pub fn submit_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, .. } if query.is_empty() => SearchState::Inactive,
        SearchState::Typing { query, .. } => SearchState::Applied { query },
        other => other,
    }
}

/// Clear the search text entirely.
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;

//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal
//! or a network.

pub mod app_state;
pub mod dialog;
pub mod fetch;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, ControllerOptions};
pub use dialog::DetailDialog;
pub use fetch::{FetchCommand, FetchEvent, FetchKind, RequestSeq};
pub use search::{filter_by_title, SearchState};

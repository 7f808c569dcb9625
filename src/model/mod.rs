//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod key_action;
pub mod page;
pub mod post;

// Re-export for convenience
pub use error::{AppError, FetchError};
pub use key_action::KeyAction;
pub use page::{total_pages, InvalidPageSize, PageNumber, PageSize, PageState};
pub use post::{Post, PostId};

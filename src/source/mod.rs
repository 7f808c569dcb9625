//! Background execution of fetch commands.
//!
//! The UI loop hands every [`FetchCommand`] to a [`FetchDispatch`] and
//! drains completions with [`FetchDispatch::poll`] on each tick:
//! - [`RemoteSource`] runs requests on a tokio runtime against the API
//! - tests substitute a scripted implementation

pub mod remote;

pub use remote::RemoteSource;

use crate::state::{FetchCommand, FetchEvent};

/// Seam between the event loop and whatever answers fetch commands.
pub trait FetchDispatch {
    /// Start executing `command`. Must not block.
    fn dispatch(&mut self, command: FetchCommand);

    /// Completions that arrived since the last call. Must not block.
    fn poll(&mut self) -> Vec<FetchEvent>;
}

//! blogview
//!
//! Terminal browser for a paginated post-listing REST API.
//!
//! Follows a Pure Core / Impure Shell split: [`state`] holds every
//! transition as plain data and returns fetch commands instead of doing
//! I/O; [`source`] and [`view`] run those commands and drive the terminal.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

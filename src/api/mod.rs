//! Post API access.
//!
//! Two read operations against a JSONPlaceholder-style endpoint:
//! a paginated listing and a single-post lookup.

pub mod client;

pub use client::{BlogClient, TOTAL_COUNT_HEADER};

use crate::model::Post;

/// One page of posts together with the server-reported total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsPage {
    /// Posts on the requested page, in server order.
    pub posts: Vec<Post>,
    /// Total number of posts across all pages.
    pub total_count: u64,
}

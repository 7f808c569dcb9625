//! Post record as served by the upstream API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Wrap a raw identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value, as used in `/posts/{id}`.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single blog article.
///
/// Immutable once fetched. Fields the upstream adds beyond these
/// (such as `userId`) are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    title: String,
    body: String,
}

impl Post {
    /// Build a post from its parts.
    pub fn new(id: PostId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Post identifier.
    pub fn id(&self) -> PostId {
        self.id
    }

    /// Post title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Full post body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Case-sensitive substring test against the title.
    ///
    /// No trimming or normalization is applied to either side.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.contains(needle)
    }
}

//! Fetch commands and their completions.
//!
//! The state layer never performs I/O. Transitions that need the network
//! return a [`FetchCommand`]; the shell runs it and feeds the outcome
//! back as a [`FetchEvent`].

use crate::api::PostsPage;
use crate::model::{FetchError, PageNumber, PageSize, Post, PostId};
use std::fmt;

/// Monotonically increasing stamp on every issued command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Wrap a raw sequence number.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which of the two API reads a command or event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Paginated listing.
    List,
    /// Single-post detail.
    Detail,
}

/// A request the shell must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCommand {
    /// `GET /posts?_page=..&_limit=..`
    ListPosts {
        /// Command stamp.
        seq: RequestSeq,
        /// Requested page.
        page: PageNumber,
        /// Requested size.
        page_size: PageSize,
    },
    /// `GET /posts/{id}`
    GetPost {
        /// Command stamp.
        seq: RequestSeq,
        /// Requested post.
        id: PostId,
    },
}

impl FetchCommand {
    /// Stamp of this command.
    pub fn seq(&self) -> RequestSeq {
        match self {
            FetchCommand::ListPosts { seq, .. } | FetchCommand::GetPost { seq, .. } => *seq,
        }
    }

    /// Kind of read.
    pub fn kind(&self) -> FetchKind {
        match self {
            FetchCommand::ListPosts { .. } => FetchKind::List,
            FetchCommand::GetPost { .. } => FetchKind::Detail,
        }
    }
}

/// Outcome of a [`FetchCommand`].
#[derive(Debug)]
pub enum FetchEvent {
    /// A listing completed.
    ListLoaded {
        /// Stamp of the originating command.
        seq: RequestSeq,
        /// Size the listing was requested with.
        page_size: PageSize,
        /// Posts and total.
        page: PostsPage,
    },
    /// A detail lookup completed.
    PostLoaded {
        /// Stamp of the originating command.
        seq: RequestSeq,
        /// The post as returned by the detail endpoint.
        post: Post,
    },
    /// A request failed.
    Failed {
        /// Stamp of the originating command.
        seq: RequestSeq,
        /// Which read failed.
        kind: FetchKind,
        /// Cause.
        error: FetchError,
    },
}

impl FetchEvent {
    /// Stamp of the originating command.
    pub fn seq(&self) -> RequestSeq {
        match self {
            FetchEvent::ListLoaded { seq, .. }
            | FetchEvent::PostLoaded { seq, .. }
            | FetchEvent::Failed { seq, .. } => *seq,
        }
    }

    /// Kind of read this event completes.
    pub fn kind(&self) -> FetchKind {
        match self {
            FetchEvent::ListLoaded { .. } => FetchKind::List,
            FetchEvent::PostLoaded { .. } => FetchKind::Detail,
            FetchEvent::Failed { kind, .. } => *kind,
        }
    }
}

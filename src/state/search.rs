//! Search state machine and title filter.
//!
//! SearchState is a sum type representing the three possible search states:
//! - Inactive: no search text
//! - Typing: the search bar has focus and the user is editing
//! - Applied: editing finished, the filter text stays on screen

use crate::model::Post;

// ===== SearchState =====

/// Search state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No search text.
    #[default]
    Inactive,
    /// User is editing the query. `cursor` counts chars, not bytes.
    Typing {
        /// Current text.
        query: String,
        /// Cursor position in chars.
        cursor: usize,
    },
    /// Query left on screen after editing ended. Never empty.
    Applied {
        /// Current text.
        query: String,
    },
}

impl SearchState {
    /// Current text, empty when inactive.
    pub fn text(&self) -> &str {
        match self {
            SearchState::Inactive => "",
            SearchState::Typing { query, .. } | SearchState::Applied { query } => query,
        }
    }

    /// True while the search bar captures keystrokes.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }
}

// ===== Filtering =====

/// Keep only the posts whose title contains `needle` verbatim.
///
/// Case-sensitive, no trimming. Order is preserved.
pub fn filter_by_title(posts: Vec<Post>, needle: &str) -> Vec<Post> {
    posts
        .into_iter()
        .filter(|post| post.title_contains(needle))
        .collect()
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostId;
    use proptest::prelude::*;

    fn post(id: u64, title: &str) -> Post {
        Post::new(PostId::new(id), title, "body")
    }

    #[test]
    fn lorem_matches_verbatim_only() {
        let posts = vec![
            post(1, "Lorem ipsum"),
            post(2, "lorem ipsum"),
            post(3, "dolor Lorem sit"),
            post(4, "LOREM"),
        ];

        let filtered = filter_by_title(posts, "Lorem");
        let ids: Vec<u64> = filtered.iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn whitespace_in_needle_is_significant() {
        let posts = vec![post(1, "qui est"), post(2, "quiest")];
        let filtered = filter_by_title(posts, "qui ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id().get(), 1);
    }

    #[test]
    fn text_of_each_state() {
        assert_eq!(SearchState::Inactive.text(), "");
        let typing = SearchState::Typing {
            query: "ab".to_string(),
            cursor: 1,
        };
        assert_eq!(typing.text(), "ab");
        assert!(typing.is_typing());
        let applied = SearchState::Applied {
            query: "cd".to_string(),
        };
        assert_eq!(applied.text(), "cd");
        assert!(!applied.is_typing());
    }

    proptest! {
        #[test]
        fn filter_yields_exactly_matching_subset(
            titles in proptest::collection::vec("[a-cA-C ]{0,8}", 0..30),
            needle in "[a-cA-C ]{1,3}",
        ) {
            let posts: Vec<Post> = titles
                .iter()
                .enumerate()
                .map(|(i, t)| post(i as u64, t))
                .collect();
            let expected: Vec<Post> = posts
                .iter()
                .filter(|p| p.title().contains(needle.as_str()))
                .cloned()
                .collect();

            let filtered = filter_by_title(posts, &needle);
            prop_assert_eq!(filtered, expected);
        }
    }
}

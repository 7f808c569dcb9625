//! Pagination types.
//!
//! Pages are 1-based. The page count is always derived from the total
//! reported by the server, never guessed from the size of a response.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

/// Number of posts requested per page.
///
/// Only these three sizes are offered by the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    /// 10 posts per page.
    #[default]
    Ten,
    /// 20 posts per page.
    Twenty,
    /// 50 posts per page.
    Fifty,
}

/// Rejected page size value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid page size {0} (expected 10, 20 or 50)")]
pub struct InvalidPageSize(pub String);

impl PageSize {
    /// All selectable sizes, in selector order.
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::Fifty];

    /// Value sent as `_limit`.
    pub fn get(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(PageSize::Ten),
            20 => Ok(PageSize::Twenty),
            50 => Ok(PageSize::Fifty),
            other => Err(InvalidPageSize(other.to_string())),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.parse().map_err(|_| InvalidPageSize(s.to_string()))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// 1-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// First page.
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    /// Smart constructor: `None` for zero.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Build a page number, mapping zero to the first page.
    pub fn saturating(raw: u32) -> Self {
        Self::new(raw).unwrap_or(Self::FIRST)
    }

    /// Raw 1-based value, as sent in `_page`.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of pages needed to show `total_count` items at `page_size`.
///
/// Ceiling division; zero items yield zero pages.
pub fn total_pages(total_count: u64, page_size: PageSize) -> u32 {
    let size = u64::from(page_size.get());
    let pages = total_count.div_ceil(size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Pagination state of the post list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    page: PageNumber,
    page_size: PageSize,
    total_count: Option<u64>,
    total_pages: u32,
}

impl PageState {
    /// Create state for the given page and size. Totals are unknown until
    /// the first list response arrives.
    pub fn new(page: PageNumber, page_size: PageSize) -> Self {
        Self {
            page,
            page_size,
            total_count: None,
            total_pages: 0,
        }
    }

    /// Current page.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Current page size.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Total item count from the most recently applied list response.
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Page count from the most recently applied list response.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Highest page the pagination control offers (at least 1).
    pub fn max_page(&self) -> PageNumber {
        PageNumber::saturating(self.total_pages)
    }

    /// Clamp a requested page into `1..=max_page`.
    pub fn clamp(&self, raw: u32) -> PageNumber {
        PageNumber::saturating(raw.min(self.max_page().get()))
    }

    /// Set the page. Returns true if the value changed.
    pub fn set_page(&mut self, page: PageNumber) -> bool {
        let changed = self.page != page;
        self.page = page;
        changed
    }

    /// Set the page size. Returns true if the value changed.
    ///
    /// With `clamp_page` the current page is pulled back into the range
    /// implied by the last known total under the new size.
    pub fn set_page_size(&mut self, page_size: PageSize, clamp_page: bool) -> bool {
        if self.page_size == page_size {
            return false;
        }
        self.page_size = page_size;
        if clamp_page {
            if let Some(total) = self.total_count {
                let max = PageNumber::saturating(total_pages(total, page_size));
                self.page = self.page.min(max);
            }
        }
        true
    }

    /// Record the total reported by a list response that was requested
    /// with `requested_size`.
    pub fn record_total(&mut self, total_count: u64, requested_size: PageSize) {
        self.total_count = Some(total_count);
        self.total_pages = total_pages(total_count, requested_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hundred_posts_at_ten_per_page_is_ten_pages() {
        assert_eq!(total_pages(100, PageSize::Ten), 10);
    }

    #[test]
    fn ninety_five_posts_at_twenty_per_page_is_five_pages() {
        assert_eq!(total_pages(95, PageSize::Twenty), 5);
    }

    #[test]
    fn zero_posts_is_zero_pages() {
        for size in PageSize::ALL {
            assert_eq!(total_pages(0, size), 0);
        }
    }

    #[test]
    fn page_size_parses_only_selector_values() {
        assert_eq!("10".parse::<PageSize>(), Ok(PageSize::Ten));
        assert_eq!("20".parse::<PageSize>(), Ok(PageSize::Twenty));
        assert_eq!("50".parse::<PageSize>(), Ok(PageSize::Fifty));
        assert!("15".parse::<PageSize>().is_err());
        assert!("ten".parse::<PageSize>().is_err());
    }

    #[test]
    fn page_size_deserializes_from_integer() {
        #[derive(Deserialize)]
        struct Wrapper {
            size: PageSize,
        }
        let w: Wrapper = toml::from_str("size = 20").unwrap();
        assert_eq!(w.size, PageSize::Twenty);
        assert!(toml::from_str::<Wrapper>("size = 25").is_err());
    }

    #[test]
    fn page_number_rejects_zero() {
        assert!(PageNumber::new(0).is_none());
        assert_eq!(PageNumber::saturating(0), PageNumber::FIRST);
        assert_eq!(PageNumber::new(3).map(PageNumber::get), Some(3));
    }

    #[test]
    fn max_page_is_one_before_totals_are_known() {
        let state = PageState::new(PageNumber::FIRST, PageSize::Ten);
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.max_page(), PageNumber::FIRST);
        assert_eq!(state.clamp(7), PageNumber::FIRST);
    }

    #[test]
    fn clamp_bounds_to_known_total() {
        let mut state = PageState::new(PageNumber::FIRST, PageSize::Ten);
        state.record_total(100, PageSize::Ten);
        assert_eq!(state.clamp(0).get(), 1);
        assert_eq!(state.clamp(4).get(), 4);
        assert_eq!(state.clamp(11).get(), 10);
    }

    #[test]
    fn size_change_clamps_page_when_requested() {
        let mut state = PageState::new(PageNumber::saturating(9), PageSize::Ten);
        state.record_total(100, PageSize::Ten);
        assert!(state.set_page_size(PageSize::Fifty, true));
        assert_eq!(state.page().get(), 2);
    }

    #[test]
    fn size_change_keeps_page_when_not_clamping() {
        let mut state = PageState::new(PageNumber::saturating(9), PageSize::Ten);
        state.record_total(100, PageSize::Ten);
        assert!(state.set_page_size(PageSize::Fifty, false));
        assert_eq!(state.page().get(), 9);
    }

    #[test]
    fn same_size_is_not_a_change() {
        let mut state = PageState::new(PageNumber::FIRST, PageSize::Twenty);
        assert!(!state.set_page_size(PageSize::Twenty, true));
    }

    #[test]
    fn record_total_uses_requested_size() {
        let mut state = PageState::new(PageNumber::FIRST, PageSize::Fifty);
        state.record_total(95, PageSize::Twenty);
        assert_eq!(state.total_pages(), 5);
        assert_eq!(state.total_count(), Some(95));
    }

    fn any_page_size() -> impl Strategy<Value = PageSize> {
        prop_oneof![
            Just(PageSize::Ten),
            Just(PageSize::Twenty),
            Just(PageSize::Fifty)
        ]
    }

    proptest! {
        #[test]
        fn total_pages_is_ceiling_division(total in 0u64..1_000_000, size in any_page_size()) {
            let pages = u64::from(total_pages(total, size));
            let limit = u64::from(size.get());
            prop_assert!(pages * limit >= total);
            if total > 0 {
                prop_assert!((pages - 1) * limit < total);
            } else {
                prop_assert_eq!(pages, 0);
            }
        }

        #[test]
        fn clamp_always_lands_in_range(total in 0u64..10_000, size in any_page_size(), raw in 0u32..2_000) {
            let mut state = PageState::new(PageNumber::FIRST, size);
            state.record_total(total, size);
            let page = state.clamp(raw).get();
            prop_assert!(page >= 1);
            prop_assert!(page <= state.total_pages().max(1));
        }
    }
}

//! Pagination control and page-size selector.
//!
//! The page list mirrors the familiar web pagination widget: one boundary
//! page at each end, one sibling on each side of the current page, and an
//! ellipsis wherever pages are skipped.

use crate::model::PageSize;
use crate::state::AppState;
use crate::view::styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

const BOUNDARY_COUNT: i64 = 1;
const SIBLING_COUNT: i64 = 1;
const ITEM_GAP: u16 = 1;
const GROUP_GAP: u16 = 3;

/// One entry of the page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A selectable page.
    Page(u32),
    /// Skipped pages.
    Ellipsis,
}

fn inclusive(start: i64, end: i64) -> impl Iterator<Item = i64> {
    start..=end
}

/// Page list for `page` out of `count` pages. Empty when `count` is zero.
pub fn pagination_items(page: u32, count: u32) -> Vec<PageItem> {
    let (page, count) = (i64::from(page), i64::from(count));
    if count == 0 {
        return Vec::new();
    }

    let start_pages: Vec<i64> = inclusive(1, BOUNDARY_COUNT.min(count)).collect();
    let end_pages: Vec<i64> =
        inclusive((count - BOUNDARY_COUNT + 1).max(BOUNDARY_COUNT + 1), count).collect();

    let siblings_start = (page - SIBLING_COUNT)
        .min(count - BOUNDARY_COUNT - SIBLING_COUNT * 2 - 1)
        .max(BOUNDARY_COUNT + 2);
    let siblings_end = (page + SIBLING_COUNT)
        .max(BOUNDARY_COUNT + SIBLING_COUNT * 2 + 2)
        .min(end_pages.first().map_or(count - 1, |first| first - 2));

    fn push_page(items: &mut Vec<PageItem>, p: i64) {
        items.push(PageItem::Page(u32::try_from(p).unwrap_or(u32::MAX)));
    }

    let mut items: Vec<PageItem> = Vec::new();

    for p in &start_pages {
        push_page(&mut items, *p);
    }

    if siblings_start > BOUNDARY_COUNT + 2 {
        items.push(PageItem::Ellipsis);
    } else if BOUNDARY_COUNT + 1 < count - BOUNDARY_COUNT {
        push_page(&mut items, BOUNDARY_COUNT + 1);
    }

    for p in inclusive(siblings_start, siblings_end) {
        push_page(&mut items, p);
    }

    if siblings_end < count - BOUNDARY_COUNT - 1 {
        items.push(PageItem::Ellipsis);
    } else if count - BOUNDARY_COUNT > BOUNDARY_COUNT {
        push_page(&mut items, count - BOUNDARY_COUNT);
    }

    for p in &end_pages {
        push_page(&mut items, *p);
    }

    items
}

/// A clickable (or inert) element of the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterItem {
    /// Previous page arrow.
    Prev,
    /// Page list entry.
    Page(PageItem),
    /// Next page arrow.
    Next,
    /// Page-size button.
    Size(PageSize),
}

impl FooterItem {
    /// Text drawn for this item.
    pub fn label(self) -> String {
        match self {
            FooterItem::Prev => "‹".to_string(),
            FooterItem::Next => "›".to_string(),
            FooterItem::Page(PageItem::Page(p)) => p.to_string(),
            FooterItem::Page(PageItem::Ellipsis) => "…".to_string(),
            FooterItem::Size(size) => format!("[{size}]"),
        }
    }

    fn style(self, state: &AppState) -> Style {
        let page = state.page().get();
        let total = state.total_pages();
        match self {
            FooterItem::Prev if page <= 1 => styles::DISABLED_CONTROL,
            FooterItem::Next if page >= total => styles::DISABLED_CONTROL,
            FooterItem::Page(PageItem::Page(p)) if p == page => styles::ACTIVE_CONTROL,
            FooterItem::Page(PageItem::Ellipsis) => styles::MUTED_TEXT,
            FooterItem::Size(size) if size == state.page_size() => styles::ACTIVE_CONTROL,
            _ => styles::CONTROL,
        }
    }
}

/// Footer items with their screen positions inside `inner` (the area
/// inside the footer border). Items that do not fit are dropped.
pub fn layout_footer(inner: Rect, state: &AppState) -> Vec<(FooterItem, Rect)> {
    let mut items = vec![FooterItem::Prev];
    items.extend(
        pagination_items(state.page().get(), state.total_pages())
            .into_iter()
            .map(FooterItem::Page),
    );
    items.push(FooterItem::Next);
    let page_group_len = items.len();
    items.extend(PageSize::ALL.into_iter().map(FooterItem::Size));

    let widths: Vec<u16> = items
        .iter()
        .map(|item| u16::try_from(item.label().width()).unwrap_or(u16::MAX))
        .collect();
    let gaps = |count: usize| u16::try_from(count.saturating_sub(1)).unwrap_or(u16::MAX) * ITEM_GAP;
    let total_width: u16 = widths.iter().sum::<u16>()
        + gaps(page_group_len)
        + gaps(items.len() - page_group_len)
        + GROUP_GAP;

    // Right-aligned, page list first.
    let mut x = inner.x + inner.width.saturating_sub(total_width);
    let right_edge = inner.x + inner.width;
    let mut placed = Vec::with_capacity(items.len());

    for (i, (item, width)) in items.into_iter().zip(widths).enumerate() {
        if x + width > right_edge {
            break;
        }
        placed.push((item, Rect::new(x, inner.y, width, 1)));
        x += width;
        x += if i + 1 == page_group_len {
            GROUP_GAP
        } else {
            ITEM_GAP
        };
    }

    placed
}

/// Footer widget: bordered bar holding the page list and size buttons.
pub struct PaginationBar<'a> {
    state: &'a AppState,
    items: &'a [(FooterItem, Rect)],
}

impl<'a> PaginationBar<'a> {
    /// Create the widget from precomputed item positions.
    pub fn new(state: &'a AppState, items: &'a [(FooterItem, Rect)]) -> Self {
        Self { state, items }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::TOP)
            .border_style(styles::CARD_BORDER)
            .render(area, buf);

        for (item, rect) in self.items {
            buf.set_string(rect.x, rect.y, item.label(), item.style(self.state));
        }
    }
}

//! Application state and its transitions.
//!
//! Every transition is a plain method on [`AppState`]. Transitions that
//! need data from the API return a [`FetchCommand`] instead of performing
//! the request, and completions come back through
//! [`AppState::apply_fetch_event`].

use crate::model::{PageNumber, PageSize, PageState, Post};
use crate::state::fetch::{FetchCommand, FetchEvent, FetchKind, RequestSeq};
use crate::state::search::{filter_by_title, SearchState};
use crate::state::search_input_handler;
use crate::state::DetailDialog;
use tracing::{debug, info, warn};

/// Behavior switches resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Pull the page back into range when the page size changes.
    pub clamp_page_on_resize: bool,
    /// Drop completions older than the latest request of the same kind.
    pub discard_stale_responses: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            clamp_page_on_resize: true,
            discard_stale_responses: true,
        }
    }
}

/// Complete UI state.
#[derive(Debug, Clone)]
pub struct AppState {
    page: PageState,
    posts: Vec<Post>,
    cursor: usize,
    dialog: DetailDialog,
    search: SearchState,
    options: ControllerOptions,

    next_seq: u64,
    latest_list: Option<RequestSeq>,
    latest_detail: Option<RequestSeq>,
    pending_list: Option<RequestSeq>,

    /// Whether the help overlay is shown.
    pub help_visible: bool,
    /// Scroll offset of the help overlay.
    pub help_scroll_offset: u16,
}

impl AppState {
    /// Create state for the given starting page and size. Nothing is
    /// loaded until the command from [`initial_fetch`](Self::initial_fetch)
    /// completes.
    pub fn new(page: PageNumber, page_size: PageSize, options: ControllerOptions) -> Self {
        Self {
            page: PageState::new(page, page_size),
            posts: Vec::new(),
            cursor: 0,
            dialog: DetailDialog::new(),
            search: SearchState::Inactive,
            options,
            next_seq: 0,
            latest_list: None,
            latest_detail: None,
            pending_list: None,
            help_visible: false,
            help_scroll_offset: 0,
        }
    }

    // ===== Accessors =====

    /// Pagination state.
    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    /// Current page.
    pub fn page(&self) -> PageNumber {
        self.page.page()
    }

    /// Current page size.
    pub fn page_size(&self) -> PageSize {
        self.page.page_size()
    }

    /// Page count from the last applied listing.
    pub fn total_pages(&self) -> u32 {
        self.page.total_pages()
    }

    /// Displayed posts (after any search filter).
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Index of the card under the cursor.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.posts.is_empty()).then_some(self.cursor)
    }

    /// Post under the cursor.
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.cursor)
    }

    /// Detail dialog state.
    pub fn dialog(&self) -> &DetailDialog {
        &self.dialog
    }

    /// Search input state.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// True while a listing issued by this state has not completed.
    pub fn is_loading(&self) -> bool {
        self.pending_list.is_some()
    }

    // ===== Command construction =====

    fn bump_seq(&mut self) -> RequestSeq {
        self.next_seq += 1;
        RequestSeq::new(self.next_seq)
    }

    fn list_command(&mut self) -> FetchCommand {
        let seq = self.bump_seq();
        self.latest_list = Some(seq);
        self.pending_list = Some(seq);
        FetchCommand::ListPosts {
            seq,
            page: self.page.page(),
            page_size: self.page.page_size(),
        }
    }

    /// Listing issued on mount.
    pub fn initial_fetch(&mut self) -> FetchCommand {
        self.list_command()
    }

    /// Re-fetch the current page.
    pub fn reload(&mut self) -> FetchCommand {
        self.list_command()
    }

    // ===== Pagination =====

    /// Select a 1-based page, clamped to the range the control offers.
    ///
    /// Returns a listing command only when the page actually changes.
    pub fn set_page(&mut self, raw: u32) -> Option<FetchCommand> {
        let page = self.page.clamp(raw);
        if !self.page.set_page(page) {
            return None;
        }
        info!(page = page.get(), "Page changed");
        self.search = SearchState::Inactive;
        Some(self.list_command())
    }

    /// Go to the next page.
    pub fn next_page(&mut self) -> Option<FetchCommand> {
        self.set_page(self.page().get().saturating_add(1))
    }

    /// Go to the previous page.
    pub fn prev_page(&mut self) -> Option<FetchCommand> {
        self.set_page(self.page().get().saturating_sub(1))
    }

    /// Go to page 1.
    pub fn first_page(&mut self) -> Option<FetchCommand> {
        self.set_page(1)
    }

    /// Go to the last known page.
    pub fn last_page(&mut self) -> Option<FetchCommand> {
        self.set_page(self.page.max_page().get())
    }

    /// Select a page size. Returns a listing command only when the size
    /// actually changes.
    pub fn set_page_size(&mut self, page_size: PageSize) -> Option<FetchCommand> {
        let before = self.page();
        if !self
            .page
            .set_page_size(page_size, self.options.clamp_page_on_resize)
        {
            return None;
        }
        info!(
            page_size = page_size.get(),
            page_before = before.get(),
            page_after = self.page().get(),
            "Page size changed"
        );
        self.search = SearchState::Inactive;
        Some(self.list_command())
    }

    // ===== Card cursor =====

    /// Move the cursor down, stopping at the last card.
    pub fn select_next(&mut self) {
        if !self.posts.is_empty() {
            self.cursor = (self.cursor + 1).min(self.posts.len() - 1);
        }
    }

    /// Move the cursor up, stopping at the first card.
    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Cursor to the first card.
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// Cursor to the last card.
    pub fn select_last(&mut self) {
        self.cursor = self.posts.len().saturating_sub(1);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.posts.len().saturating_sub(1));
    }

    // ===== Detail dialog =====

    /// Activate the card at `index`: move the cursor there and request the
    /// post's detail. `None` if there is no such card.
    pub fn activate_post(&mut self, index: usize) -> Option<FetchCommand> {
        let id = self.posts.get(index)?.id();
        self.cursor = index;
        let seq = self.bump_seq();
        self.latest_detail = Some(seq);
        debug!(%id, %seq, "Post activated");
        Some(FetchCommand::GetPost { seq, id })
    }

    /// Activate the card under the cursor.
    pub fn activate_selected(&mut self) -> Option<FetchCommand> {
        self.activate_post(self.cursor)
    }

    /// Hide the dialog. The selected post is kept.
    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    /// Show the last selected post again without fetching.
    pub fn reopen_dialog(&mut self) -> bool {
        self.dialog.reopen()
    }

    /// Scroll the dialog body down.
    pub fn scroll_dialog_down(&mut self, lines: u16) {
        self.dialog.scroll_down(lines);
    }

    /// Scroll the dialog body up.
    pub fn scroll_dialog_up(&mut self, lines: u16) {
        self.dialog.scroll_up(lines);
    }

    // ===== Search =====

    /// React to a change of the search text.
    ///
    /// Empty text re-fetches the current page. Any other text narrows the
    /// displayed collection to titles containing it. The filter runs over
    /// what is displayed now, so it never widens until the text is cleared.
    pub fn set_search_text(&mut self, text: &str) -> Option<FetchCommand> {
        if text.is_empty() {
            debug!("Search cleared, re-fetching current page");
            return Some(self.list_command());
        }
        let posts = std::mem::take(&mut self.posts);
        self.posts = filter_by_title(posts, text);
        self.clamp_cursor();
        debug!(query = text, matches = self.posts.len(), "Search applied");
        None
    }

    fn update_search(&mut self, next: SearchState) -> Option<FetchCommand> {
        let changed = next.text() != self.search.text();
        self.search = next;
        if changed {
            let text = self.search.text().to_string();
            self.set_search_text(&text)
        } else {
            None
        }
    }

    /// Focus the search bar.
    pub fn start_search(&mut self) {
        self.search = search_input_handler::activate_search_input(self.search.clone());
    }

    /// Type a char into the search bar.
    pub fn search_input_char(&mut self, ch: char) -> Option<FetchCommand> {
        let next = search_input_handler::handle_char_input(self.search.clone(), ch);
        self.update_search(next)
    }

    /// Delete the char before the search cursor.
    pub fn search_backspace(&mut self) -> Option<FetchCommand> {
        let next = search_input_handler::handle_backspace(self.search.clone());
        self.update_search(next)
    }

    /// Move the search cursor left.
    pub fn search_cursor_left(&mut self) {
        self.search = search_input_handler::handle_cursor_left(self.search.clone());
    }

    /// Move the search cursor right.
    pub fn search_cursor_right(&mut self) {
        self.search = search_input_handler::handle_cursor_right(self.search.clone());
    }

    /// Leave the search bar, keeping the text.
    pub fn submit_search(&mut self) {
        self.search = search_input_handler::submit_search(self.search.clone());
    }

    /// Clear the search text; re-fetches if there was any.
    pub fn cancel_search(&mut self) -> Option<FetchCommand> {
        let next = search_input_handler::cancel_search(self.search.clone());
        self.update_search(next)
    }

    // ===== Completions =====

    fn is_stale(&self, kind: FetchKind, seq: RequestSeq) -> bool {
        if !self.options.discard_stale_responses {
            return false;
        }
        let latest = match kind {
            FetchKind::List => self.latest_list,
            FetchKind::Detail => self.latest_detail,
        };
        latest.is_some_and(|latest| seq < latest)
    }

    /// Apply a completed request. Returns true if anything visible changed.
    pub fn apply_fetch_event(&mut self, event: FetchEvent) -> bool {
        let (seq, kind) = (event.seq(), event.kind());

        if kind == FetchKind::List && self.pending_list == Some(seq) {
            self.pending_list = None;
        }

        // Failures are logged whether or not a newer request overtook them.
        if let FetchEvent::Failed { error, .. } = &event {
            warn!(%seq, ?kind, error = %error, "Fetch failed");
        }

        if self.is_stale(kind, seq) {
            debug!(%seq, ?kind, "Discarding stale response");
            return false;
        }

        match event {
            FetchEvent::ListLoaded {
                page_size, page, ..
            } => {
                self.page.record_total(page.total_count, page_size);
                self.posts = page.posts;
                self.clamp_cursor();
                debug!(
                    %seq,
                    count = self.posts.len(),
                    total_pages = self.page.total_pages(),
                    "Post list applied"
                );
                true
            }
            FetchEvent::PostLoaded { post, .. } => {
                debug!(%seq, id = %post.id(), "Post detail applied");
                self.dialog.show(post);
                true
            }
            FetchEvent::Failed { .. } => kind == FetchKind::List,
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;

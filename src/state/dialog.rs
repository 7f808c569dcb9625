//! State for the post detail dialog.

use crate::model::Post;

/// Detail dialog: the selected post and whether it is shown.
///
/// Closing only hides the dialog. The post stays selected, so reopening
/// without a new fetch shows the previous content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailDialog {
    selected: Option<Post>,
    open: bool,
    scroll: u16,
}

impl DetailDialog {
    /// Create a closed dialog with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `post` and open the dialog.
    pub fn show(&mut self, post: Post) {
        self.selected = Some(post);
        self.open = true;
        self.scroll = 0;
    }

    /// Hide the dialog, keeping the selection.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Show the retained post again. Returns false if nothing was ever selected.
    pub fn reopen(&mut self) -> bool {
        if self.selected.is_some() {
            self.open = true;
            self.scroll = 0;
        }
        self.open
    }

    /// Whether the dialog is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Selected post, if any.
    pub fn selected(&self) -> Option<&Post> {
        self.selected.as_ref()
    }

    /// Vertical scroll of the body, in lines.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scroll the body down by `lines`.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Scroll the body up by `lines`.
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostId;

    fn sample() -> Post {
        Post::new(PostId::new(3), "ea molestias", "et iusto sed")
    }

    #[test]
    fn new_dialog_is_closed_and_empty() {
        let dialog = DetailDialog::new();
        assert!(!dialog.is_open());
        assert!(dialog.selected().is_none());
    }

    #[test]
    fn show_selects_and_opens() {
        let mut dialog = DetailDialog::new();
        dialog.show(sample());
        assert!(dialog.is_open());
        assert_eq!(dialog.selected(), Some(&sample()));
    }

    #[test]
    fn close_keeps_selected_post() {
        let mut dialog = DetailDialog::new();
        dialog.show(sample());
        dialog.close();
        assert!(!dialog.is_open());
        assert_eq!(dialog.selected(), Some(&sample()));
    }

    #[test]
    fn reopen_shows_stale_content() {
        let mut dialog = DetailDialog::new();
        dialog.show(sample());
        dialog.close();
        assert!(dialog.reopen());
        assert_eq!(dialog.selected().map(Post::title), Some("ea molestias"));
    }

    #[test]
    fn reopen_without_selection_stays_closed() {
        let mut dialog = DetailDialog::new();
        assert!(!dialog.reopen());
        assert!(!dialog.is_open());
    }

    #[test]
    fn show_resets_scroll() {
        let mut dialog = DetailDialog::new();
        dialog.show(sample());
        dialog.scroll_down(4);
        assert_eq!(dialog.scroll(), 4);
        dialog.scroll_up(10);
        assert_eq!(dialog.scroll(), 0);
        dialog.scroll_down(2);
        dialog.show(sample());
        assert_eq!(dialog.scroll(), 0);
    }
}

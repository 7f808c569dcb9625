//! TUI rendering and terminal management (impure shell)

pub mod cards;
pub mod constants;
pub mod detail_dialog;
mod help;
pub mod layout;
pub mod pagination;
mod search_input;
mod styles;

pub use help::render_help_overlay;
pub use layout::{render_layout, ScreenLayout};
pub use search_input::SearchInput;

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::source::FetchDispatch;
use crate::state::{AppState, FetchCommand};
use crate::view::constants::SCROLL_STEP;
use crate::view::pagination::{FooterItem, PageItem};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The background fetch runtime could not be started
    #[error("Failed to start fetch runtime: {0}")]
    Runtime(#[source] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// dispatcher so tests can answer fetches without a network.
pub struct TuiApp<B, D>
where
    B: Backend,
    D: FetchDispatch,
{
    terminal: Terminal<B>,
    app_state: AppState,
    dispatcher: D,
    key_bindings: KeyBindings,
    /// Layout of the last drawn frame (for mouse hit-testing)
    last_layout: Option<ScreenLayout>,
}

impl<D: FetchDispatch> TuiApp<CrosstermBackend<Stdout>, D> {
    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Fetch completions are drained
    /// on every tick; the screen is redrawn only when something changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK_INTERVAL: Duration = Duration::from_millis(50);

        self.start();
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            dirty |= self.tick();

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B, D> TuiApp<B, D>
where
    B: Backend,
    D: FetchDispatch,
{
    /// Assemble an app from its parts. Does not touch the terminal mode.
    pub fn with_terminal(terminal: Terminal<B>, app_state: AppState, dispatcher: D) -> Self {
        Self {
            terminal,
            app_state,
            dispatcher,
            key_bindings: KeyBindings::default(),
            last_layout: None,
        }
    }

    /// Issue the on-mount listing.
    pub fn start(&mut self) {
        let command = self.app_state.initial_fetch();
        self.dispatcher.dispatch(command);
    }

    /// Current state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The fetch dispatcher.
    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    fn send(&mut self, command: Option<FetchCommand>) {
        if let Some(command) = command {
            debug!(seq = %command.seq(), kind = ?command.kind(), "Dispatching fetch");
            self.dispatcher.dispatch(command);
        }
    }

    /// Apply every fetch completion that has arrived.
    ///
    /// Returns true if the screen needs a redraw.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for event in self.dispatcher.poll() {
            changed |= self.app_state.apply_fetch_event(event);
        }
        changed
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("Quit requested");
            return true;
        }

        if self.app_state.dialog().is_open() {
            self.handle_dialog_key(key);
            return false;
        }

        if self.app_state.help_visible {
            self.handle_help_key(key);
            return false;
        }

        if self.app_state.search().is_typing() {
            self.handle_search_key(key);
            return false;
        }

        // Esc outside the search bar drops an applied filter
        if key.code == KeyCode::Esc {
            if !self.app_state.search().text().is_empty() {
                let command = self.app_state.cancel_search();
                self.send(command);
            }
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::NextCard => self.app_state.select_next(),
            KeyAction::PrevCard => self.app_state.select_prev(),
            KeyAction::FirstCard => self.app_state.select_first(),
            KeyAction::LastCard => self.app_state.select_last(),
            KeyAction::OpenDetail => {
                let command = self.app_state.activate_selected();
                self.send(command);
            }
            KeyAction::ReopenDetail => {
                self.app_state.reopen_dialog();
            }
            KeyAction::NextPage => {
                let command = self.app_state.next_page();
                self.send(command);
            }
            KeyAction::PrevPage => {
                let command = self.app_state.prev_page();
                self.send(command);
            }
            KeyAction::FirstPage => {
                let command = self.app_state.first_page();
                self.send(command);
            }
            KeyAction::LastPage => {
                let command = self.app_state.last_page();
                self.send(command);
            }
            KeyAction::SetPageSize(size) => {
                let command = self.app_state.set_page_size(size);
                self.send(command);
            }
            KeyAction::Reload => {
                let command = self.app_state.reload();
                self.send(Some(command));
            }
            KeyAction::StartSearch => self.app_state.start_search(),
            KeyAction::Help => {
                self.app_state.help_visible = true;
                self.app_state.help_scroll_offset = 0;
            }
            KeyAction::Quit => {
                info!("Quit requested");
                return true;
            }
        }

        false
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => self.app_state.close_dialog(),
            KeyCode::Char('j') | KeyCode::Down => self.app_state.scroll_dialog_down(SCROLL_STEP),
            KeyCode::Char('k') | KeyCode::Up => self.app_state.scroll_dialog_up(SCROLL_STEP),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.app_state.help_visible = false;
                self.app_state.help_scroll_offset = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let max = help::help_line_count().saturating_sub(1);
                self.app_state.help_scroll_offset =
                    (self.app_state.help_scroll_offset + SCROLL_STEP).min(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.app_state.help_scroll_offset =
                    self.app_state.help_scroll_offset.saturating_sub(SCROLL_STEP);
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let command = match key.code {
            KeyCode::Esc => self.app_state.cancel_search(),
            KeyCode::Enter => {
                self.app_state.submit_search();
                None
            }
            KeyCode::Backspace => self.app_state.search_backspace(),
            KeyCode::Left => {
                self.app_state.search_cursor_left();
                None
            }
            KeyCode::Right => {
                self.app_state.search_cursor_right();
                None
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.app_state.search_input_char(ch)
            }
            _ => None,
        };
        self.send(command);
    }

    /// Handle a single mouse event
    ///
    /// Left-click activates cards and footer controls, or closes an open
    /// overlay when it lands outside it. The wheel scrolls whatever is on top.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.handle_wheel(true),
            MouseEventKind::ScrollUp => self.handle_wheel(false),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn handle_wheel(&mut self, down: bool) {
        if self.app_state.help_visible {
            self.handle_help_key(KeyEvent::from(if down { KeyCode::Down } else { KeyCode::Up }));
        } else if self.app_state.dialog().is_open() {
            if down {
                self.app_state.scroll_dialog_down(SCROLL_STEP);
            } else {
                self.app_state.scroll_dialog_up(SCROLL_STEP);
            }
        } else if down {
            self.app_state.select_next();
        } else {
            self.app_state.select_prev();
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.app_state.help_visible {
            self.app_state.help_visible = false;
            self.app_state.help_scroll_offset = 0;
            return;
        }

        let Some(layout) = self.last_layout.take() else {
            return;
        };

        if self.app_state.dialog().is_open() {
            if !layout.in_dialog(column, row) {
                self.app_state.close_dialog();
            }
        } else if let Some(index) = layout.card_at(column, row) {
            let command = self.app_state.activate_post(index);
            self.send(command);
        } else if let Some(item) = layout.footer_item_at(column, row) {
            let command = match item {
                FooterItem::Prev => self.app_state.prev_page(),
                FooterItem::Next => self.app_state.next_page(),
                FooterItem::Page(PageItem::Page(page)) => self.app_state.set_page(page),
                FooterItem::Page(PageItem::Ellipsis) => None,
                FooterItem::Size(size) => self.app_state.set_page_size(size),
            };
            self.send(command);
        } else if contains_row(layout.search, row) && !self.app_state.search().is_typing() {
            self.app_state.start_search();
        }

        self.last_layout = Some(layout);
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = ScreenLayout::compute(area, &self.app_state);

        self.terminal.draw(|frame| {
            render_layout(frame, &self.app_state, &layout);
        })?;

        self.last_layout = Some(layout);
        Ok(())
    }
}

fn contains_row(rect: Rect, row: u16) -> bool {
    row >= rect.y && row < rect.y.saturating_add(rect.height)
}

/// Initialize and run the TUI application
///
/// Sets the terminal up (raw mode, alternate screen, mouse capture), runs
/// the event loop and restores the terminal even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_dispatcher<D: FetchDispatch>(
    app_state: AppState,
    dispatcher: D,
) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let result = setup_and_run(app_state, dispatcher);

    // Always restore terminal state
    restore_terminal()?;

    result
}

fn setup_and_run<D: FetchDispatch>(app_state: AppState, dispatcher: D) -> Result<(), TuiError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = TuiApp::with_terminal(terminal, app_state, dispatcher);
    app.run()
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;

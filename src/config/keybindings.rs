//! Keyboard bindings configuration.

use crate::model::{KeyAction, PageSize};
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides vim-style defaults alongside arrow and paging keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Card cursor
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::NextCard);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::NextCard);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::PrevCard);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::PrevCard);
        bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::FirstCard);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::FirstCard);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastCard);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::LastCard);

        // Detail dialog
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::OpenDetail);
        bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::OpenDetail);
        bind(KeyCode::Char('o'), KeyModifiers::NONE, KeyAction::ReopenDetail);

        // Pagination
        bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::FirstPage);
        bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::LastPage);
        bind(
            KeyCode::Char('1'),
            KeyModifiers::NONE,
            KeyAction::SetPageSize(PageSize::Ten),
        );
        bind(
            KeyCode::Char('2'),
            KeyModifiers::NONE,
            KeyAction::SetPageSize(PageSize::Twenty),
        );
        bind(
            KeyCode::Char('3'),
            KeyModifiers::NONE,
            KeyAction::SetPageSize(PageSize::Fifty),
        );
        bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::Reload);

        // Search
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);

        // Application controls
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);

        Self { bindings }
    }
}

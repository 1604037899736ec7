use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::{App, Focus};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Prev,
    Next,
    First,
    Last,
    GoTo(usize),
    PrevButton,
    NextButton,
    ToggleFocus,
    None,
}

/// Handle a key event and return the corresponding action
///
/// Slide navigation only applies while the carousel has focus; quitting and
/// moving focus always work.
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    let action = lookup(key, keymap);
    match action {
        Action::Quit | Action::ToggleFocus | Action::None => action,
        _ if app.focus == Focus::Carousel => action,
        _ => Action::None,
    }
}

fn lookup(key: KeyEvent, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Terminals disagree on whether Shift is reported with uppercase chars
    if let KeyCode::Char(c) = key.code {
        if c.is_ascii_uppercase() {
            let alt = if key.modifiers.contains(KeyModifiers::SHIFT) {
                KeyBinding::simple(key.code)
            } else {
                KeyBinding::shift(key.code)
            };
            if let Some(action) = keymap.get(&alt) {
                return *action;
            }
        }
    }

    Action::None
}

/// Handle a mouse event: left clicks on the prev/next buttons
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Action::None;
    }

    let position = Position::new(mouse.column, mouse.row);
    let hit = |rect: Rect| rect.contains(position);

    if hit(app.layout.prev_button) {
        Action::PrevButton
    } else if hit(app.layout.next_button) {
        Action::NextButton
    } else if hit(app.layout.track) {
        Action::ToggleFocus.only_if(app.focus != Focus::Carousel)
    } else {
        Action::None
    }
}

impl Action {
    fn only_if(self, condition: bool) -> Self {
        if condition {
            self
        } else {
            Action::None
        }
    }
}

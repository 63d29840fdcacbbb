//! Keyboard input dispatch — overlay first, then global keys, then the
//! current view's cursor keys.
//!
//! Every out-of-range request is a silent no-op; there is no failure path
//! anywhere in input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use ragdeck_core::navigator::NavAction;

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.dispatch(NavAction::PrevSlide);
            return;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.dispatch(NavAction::NextSlide);
            return;
        }
        KeyCode::Home => {
            app.dispatch(NavAction::GoToSlide(0));
            return;
        }
        KeyCode::End => {
            app.dispatch(NavAction::GoToSlide(app.deck.len().saturating_sub(1)));
            return;
        }
        // 1-9 jump to slides 1-9, 0 to slide 10.
        KeyCode::Char(c @ '1'..='9') => {
            app.dispatch(NavAction::GoToSlide(c as usize - '1' as usize));
            return;
        }
        KeyCode::Char('0') => {
            app.dispatch(NavAction::GoToSlide(9));
            return;
        }
        KeyCode::Tab => {
            app.dispatch(NavAction::NextStep);
            return;
        }
        KeyCode::BackTab => {
            app.dispatch(NavAction::PrevStep);
            return;
        }
        _ => {}
    }

    // 3. View-local keys: cursor over cards or queries.
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Esc => app.dispatch(NavAction::ClearQuery),
        _ => {}
    }
}

/// Key bindings shown in the help overlay.
pub fn key_bindings() -> Vec<(&'static str, &'static str)> {
    vec![
        ("←/h, →/l", "Previous / next slide"),
        ("1-9, 0", "Jump to slide"),
        ("Home / End", "First / last slide"),
        ("Tab / Shift+Tab", "Next / previous step (walkthrough)"),
        ("↑/k, ↓/j", "Move cursor over cards or queries"),
        ("Space / Enter", "Flip card / select query"),
        ("Esc", "Clear the selected query"),
        ("?", "This help"),
        ("q / Ctrl+C", "Quit"),
    ]
}

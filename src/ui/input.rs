use crate::ui::app::App;
use crate::ui::navigation::{Navigator, Route};
use crate::ui::pages::InjectedFault;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.toggle_reduced_motion();
        return;
    }
    if is_ctrl_char(key, 'g') {
        app.navigate(Route::Home);
        return;
    }
    if is_ctrl_char(key, 'f') {
        app.inject_fault(InjectedFault::Returned);
        return;
    }
    if is_ctrl_char(key, 'p') {
        app.inject_fault(InjectedFault::Panic);
        return;
    }

    // A recovery view on screen owns the remaining keys.
    if app.handle_recovery_key(key) {
        return;
    }

    if key.code == KeyCode::Enter && app.route() == Route::Home {
        app.navigate(Route::Conversation);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

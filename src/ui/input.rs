use crate::deck::SwipeDirection;
use crate::ui::app::{App, Focus};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Topic => handle_topic_key(app, key),
        Focus::Stack => handle_stack_key(app, key),
    }
}

fn handle_topic_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.submit_topic();
        return;
    }

    // Field is disabled while a deck is loading.
    let Some(topic) = app.topic_mut() else {
        return;
    };

    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => topic.insert(ch),
        KeyCode::Backspace => topic.backspace(),
        KeyCode::Delete => topic.delete(),
        KeyCode::Left => topic.move_left(),
        KeyCode::Right => topic.move_right(),
        KeyCode::Home => topic.home(),
        KeyCode::End => topic.end(),
        _ => {}
    }
}

fn handle_stack_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.dismiss_top(SwipeDirection::Left),
        KeyCode::Right => app.dismiss_top(SwipeDirection::Right),
        KeyCode::Char(' ') | KeyCode::Enter => app.flip(),
        KeyCode::Backspace | KeyCode::Char('b') => app.show_question(),
        KeyCode::Char('r') => {
            app.reset_deck();
        }
        KeyCode::Char('/') | KeyCode::Char('i') => app.set_focus(Focus::Topic),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_pointer_down(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.on_pointer_drag(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.on_pointer_up(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

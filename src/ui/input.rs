use crate::ui::app::UserCommand;
use crate::workflow::Phase;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a command for the displayed phase.
pub fn command_for_key(key: KeyEvent, phase: Option<Phase>) -> Option<UserCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'q') {
        return Some(UserCommand::Quit);
    }
    if is_ctrl_char(key, 't') {
        return Some(UserCommand::ToggleTheme);
    }
    if is_ctrl_char(key, 's') {
        return Some(UserCommand::Submit);
    }
    if is_ctrl_char(key, 'r') {
        return Some(UserCommand::StartOver);
    }
    if is_ctrl_char(key, 'y') {
        return Some(UserCommand::Copy);
    }

    match key.code {
        KeyCode::Esc => Some(UserCommand::Back),
        KeyCode::Tab | KeyCode::Down => Some(UserCommand::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(UserCommand::FocusPrev),
        KeyCode::Enter => Some(UserCommand::Newline),
        KeyCode::Backspace => Some(UserCommand::Backspace),
        // Nothing is editable on the result page, so plain keys are free.
        KeyCode::Char('c') if phase == Some(Phase::Result) => Some(UserCommand::Copy),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UserCommand::Type {
                text: ch.to_string(),
            })
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

//! Intents for the refinement widget.

use crate::host::HostContext;
use crate::ui::mvi::Intent;

/// A single change to an edit buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    /// Bracketed paste or scripted input.
    InsertStr(String),
    Backspace,
}

impl TextEdit {
    pub fn apply(self, buffer: &mut String) {
        match self {
            TextEdit::Insert(ch) => buffer.push(ch),
            TextEdit::InsertStr(text) => buffer.push_str(&text),
            TextEdit::Backspace => {
                buffer.pop();
            }
        }
    }
}

/// Intents that can be dispatched to the widget.
#[derive(Debug, Clone)]
pub enum WidgetIntent {
    /// The host pushed a new context.
    HostUpdate(HostContext),

    /// Edit the prompt draft. Ignored outside the Input phase.
    EditPrompt(TextEdit),

    /// Edit the draft answer for `question`. Ignored outside the
    /// Questions phase or for questions not currently rendered.
    EditAnswer { question: String, edit: TextEdit },

    FocusNext,
    FocusPrev,

    /// Flip light/dark locally until the host sends a theme.
    ToggleTheme,

    /// Clear prompt and answers ahead of a reset round-trip.
    ClearDraft,
}

impl Intent for WidgetIntent {}

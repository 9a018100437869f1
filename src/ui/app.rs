use serde::Deserialize;

use crate::action::ActionKind;
use crate::clipboard::ClipboardWriter;
use crate::host::{HostBridge, HostContext, Theme};
use crate::ui::mvi::Reducer;
use crate::ui::refiner::{TextEdit, WidgetIntent, WidgetReducer, WidgetState};
use crate::ui::render::frame_height;
use crate::workflow::Phase;

/// A user interaction, already decoded from a key press or script line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum UserCommand {
    /// Typed or pasted text for the active field.
    Type { text: String },
    Backspace,
    Newline,
    FocusNext,
    FocusPrev,
    /// Analyze in the Input phase, Refine in the Questions phase.
    Submit,
    Back,
    StartOver,
    Copy,
    ToggleTheme,
    Quit,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The widget instance: owns its state and talks to one host.
pub struct Widget<B: HostBridge> {
    state: WidgetState,
    bridge: B,
    clipboard: Option<Box<dyn ClipboardWriter>>,
    width: u16,
    should_quit: bool,
    /// Last request and the phase it was made from, until the host moves.
    pending: Option<(Phase, ActionKind)>,
}

impl<B: HostBridge> Widget<B> {
    pub fn new(bridge: B, theme: Theme, width: u16) -> Self {
        Self {
            state: WidgetState::with_theme(theme),
            bridge,
            clipboard: None,
            width,
            should_quit: false,
            pending: None,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardWriter>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn frame_height(&self) -> u16 {
        frame_height(&self.state, self.width)
    }

    /// Apply a host refresh. The displayed phase follows the host.
    pub fn on_host_context(&mut self, context: HostContext) {
        let previous = self.state.phase();
        let next = context.phase();
        if previous != next {
            tracing::info!(from = ?previous, to = ?next, "Host changed phase");
            if let Some(next) = next {
                if !is_expected_transition(self.pending.take(), next) {
                    tracing::warn!(to = ?next, "Host moved to a phase no pending request leads to");
                }
            }
        }
        self.dispatch(WidgetIntent::HostUpdate(context));
    }

    pub fn on_resize(&mut self, width: u16) {
        if width != self.width {
            self.width = width;
            self.report_frame_height();
        }
    }

    pub fn on_command(&mut self, command: UserCommand) {
        let phase = self.state.phase();
        match command {
            UserCommand::Type { text } => self.edit_active_field(TextEdit::InsertStr(text)),
            UserCommand::Backspace => self.edit_active_field(TextEdit::Backspace),
            UserCommand::Newline => match phase {
                Some(Phase::Input) => self.edit_active_field(TextEdit::Insert('\n')),
                Some(Phase::Questions) => self.dispatch(WidgetIntent::FocusNext),
                _ => {}
            },
            UserCommand::FocusNext => self.dispatch(WidgetIntent::FocusNext),
            UserCommand::FocusPrev => self.dispatch(WidgetIntent::FocusPrev),
            UserCommand::Submit => match phase {
                Some(Phase::Input) => self.request(ActionKind::Analyze),
                Some(Phase::Questions) => self.request(ActionKind::Refine),
                _ => {}
            },
            UserCommand::Back => self.request(ActionKind::BackToInput),
            UserCommand::StartOver => self.request(ActionKind::Reset),
            UserCommand::Copy => self.copy_result(),
            UserCommand::ToggleTheme => self.dispatch(WidgetIntent::ToggleTheme),
            UserCommand::Quit => self.request_quit(),
        }
    }

    fn edit_active_field(&mut self, edit: TextEdit) {
        match self.state.phase() {
            Some(Phase::Input) => self.dispatch(WidgetIntent::EditPrompt(edit)),
            Some(Phase::Questions) => {
                if let Some(question) = self.state.focused_question() {
                    let question = question.to_string();
                    self.dispatch(WidgetIntent::EditAnswer { question, edit });
                }
            }
            _ => {}
        }
    }

    /// Emit the action for `kind` if the displayed phase offers it.
    ///
    /// The phase is left alone: the host answers with a new context.
    /// Reset is the exception that also clears drafts right away.
    fn request(&mut self, kind: ActionKind) {
        let Some(action) = self.state.action_for(kind) else {
            tracing::debug!(?kind, phase = ?self.state.phase(), "Action not offered in this phase");
            return;
        };
        self.bridge.set_component_value(&action);
        self.pending = self.state.phase().map(|phase| (phase, kind));
        if kind == ActionKind::Reset {
            self.dispatch(WidgetIntent::ClearDraft);
        }
    }

    fn copy_result(&mut self) {
        let Some(refined) = self.state.refined() else {
            return;
        };
        let Some(clipboard) = self.clipboard.as_mut() else {
            tracing::debug!("No clipboard available; copy ignored");
            return;
        };
        if let Err(err) = clipboard.set_text(refined) {
            tracing::debug!(error = %err, "Clipboard write failed");
        }
    }

    fn dispatch(&mut self, intent: WidgetIntent) {
        let before = self.state.clone();
        dispatch_mvi!(self, state, WidgetReducer, intent);
        if self.state != before {
            self.report_frame_height();
        }
    }

    fn report_frame_height(&mut self) {
        let height = self.frame_height();
        self.bridge.set_frame_height(height);
    }
}

/// Whether a phase change to `next` fits the transition table for the
/// pending request. Host-initiated moves with nothing pending are fine.
fn is_expected_transition(pending: Option<(Phase, ActionKind)>, next: Phase) -> bool {
    match pending {
        Some((from, kind)) => from.possible_outcomes(kind).contains(&next),
        None => true,
    }
}

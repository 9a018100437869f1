//! State for the refinement widget.

use crate::action::{Action, ActionKind};
use crate::host::{HostContext, Theme};
use crate::sync::DraftState;
use crate::ui::mvi::UiState;
use crate::workflow::Phase;

/// Everything the widget renders from.
///
/// `host` is the last context received and is only ever replaced, never
/// edited. `draft`, `theme` and `focused` are local.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetState {
    pub host: HostContext,
    pub draft: DraftState,
    pub theme: Theme,
    /// Index of the question input receiving keystrokes.
    pub focused: usize,
}

impl UiState for WidgetState {}

impl WidgetState {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Phase declared by the host. `None` before the first context or
    /// when the last one was malformed.
    pub fn phase(&self) -> Option<Phase> {
        self.host.phase()
    }

    pub fn questions(&self) -> &[String] {
        self.host.questions()
    }

    pub fn focused_question(&self) -> Option<&str> {
        self.questions().get(self.focused).map(String::as_str)
    }

    pub fn refined(&self) -> Option<&str> {
        self.host.workflow.as_ref().and_then(|w| w.refined())
    }

    /// Action for `kind` built from the current drafts, or `None` when
    /// the displayed phase does not offer it.
    pub fn action_for(&self, kind: ActionKind) -> Option<Action> {
        if !self.phase()?.accepts(kind) {
            return None;
        }
        let action = match kind {
            ActionKind::Analyze => Action::analyze(&self.draft),
            ActionKind::Refine => Action::refine(self.questions(), &self.draft),
            ActionKind::BackToInput => Action::BackToInput,
            ActionKind::Reset => Action::Reset,
        };
        Some(action)
    }
}

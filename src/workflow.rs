//! Three-phase refinement workflow.
//!
//! ```text
//! Input ──Analyze──→ Questions ──Refine──→ Result
//!   ↑                   │                    │
//!   └───BackToInput─────┘                    │
//!   └──────────────────Reset─────────────────┘
//! ```
//!
//! Every transition is decided by the host. The widget only asks for one
//! by emitting an [`Action`](crate::action::Action) and then renders
//! whatever phase the next host context declares.

use serde::{Deserialize, Serialize};

use crate::action::ActionKind;

/// One of the three mutually exclusive workflow phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Input,
    Questions,
    Result,
}

impl Phase {
    /// Phases in workflow order.
    pub const ALL: [Phase; 3] = [Phase::Input, Phase::Questions, Phase::Result];

    /// Wire name used in the host's `step` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Input => "input",
            Phase::Questions => "questions",
            Phase::Result => "result",
        }
    }

    /// Parse the host's `step` field. Unknown values yield `None`.
    pub fn parse(step: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.as_str() == step)
    }

    /// Label shown in the step indicator.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Input => "Write",
            Phase::Questions => "Clarify",
            Phase::Result => "Result",
        }
    }

    /// Zero-based position in the workflow.
    pub fn index(self) -> usize {
        match self {
            Phase::Input => 0,
            Phase::Questions => 1,
            Phase::Result => 2,
        }
    }

    /// Actions the user may request while this phase is displayed.
    pub fn accepted_actions(self) -> &'static [ActionKind] {
        match self {
            Phase::Input => &[ActionKind::Analyze],
            Phase::Questions => &[ActionKind::BackToInput, ActionKind::Refine],
            Phase::Result => &[ActionKind::Reset],
        }
    }

    pub fn accepts(self, kind: ActionKind) -> bool {
        self.accepted_actions().contains(&kind)
    }

    /// Phases the host may answer with after `kind` was requested from
    /// this phase. Empty when the action is not valid here.
    pub fn possible_outcomes(self, kind: ActionKind) -> &'static [Phase] {
        match (self, kind) {
            // Host-side validation may bounce the prompt back.
            (Phase::Input, ActionKind::Analyze) => &[Phase::Questions, Phase::Input],
            (Phase::Questions, ActionKind::BackToInput) => &[Phase::Input],
            (Phase::Questions, ActionKind::Refine) => &[Phase::Result],
            (Phase::Result, ActionKind::Reset) => &[Phase::Input],
            _ => &[],
        }
    }

    pub fn prompt_editable(self) -> bool {
        self == Phase::Input
    }

    pub fn answers_editable(self) -> bool {
        self == Phase::Questions
    }

    pub fn can_copy(self) -> bool {
        self == Phase::Result
    }
}

/// Host-declared workflow state with its phase-specific payload.
///
/// A `Result` without refined text cannot be built, so a malformed host
/// context never reaches this type (see [`crate::host::HostContext`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Input,
    Questions {
        questions: Vec<String>,
    },
    Result {
        refined: String,
    },
}

impl WorkflowState {
    pub fn phase(&self) -> Phase {
        match self {
            WorkflowState::Input => Phase::Input,
            WorkflowState::Questions { .. } => Phase::Questions,
            WorkflowState::Result { .. } => Phase::Result,
        }
    }

    /// Questions currently rendered. Empty outside the Questions phase.
    pub fn questions(&self) -> &[String] {
        match self {
            WorkflowState::Questions { questions } => questions,
            _ => &[],
        }
    }

    pub fn refined(&self) -> Option<&str> {
        match self {
            WorkflowState::Result { refined } => Some(refined),
            _ => None,
        }
    }

    pub fn accepts(&self, kind: ActionKind) -> bool {
        self.phase().accepts(kind)
    }
}

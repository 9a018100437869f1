//! Outbound user intents.
//!
//! An [`Action`] is the only way the widget asks the host to change
//! anything. Exactly one is emitted per submit or navigation event and
//! nothing is awaited in return: the next host context is the only
//! completion signal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sync::DraftState;

/// Discriminant of [`Action`], used for phase gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Analyze,
    Refine,
    BackToInput,
    Reset,
}

/// Structured message sent from the widget to the host.
///
/// Serializes as `{"action": "<snake_case name>", ...payload}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Submit the draft prompt for analysis. May be empty.
    Analyze { prompt: String },
    /// Submit answers for every rendered question.
    Refine { answers: BTreeMap<String, String> },
    BackToInput,
    Reset,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Analyze { .. } => ActionKind::Analyze,
            Action::Refine { .. } => ActionKind::Refine,
            Action::BackToInput => ActionKind::BackToInput,
            Action::Reset => ActionKind::Reset,
        }
    }

    pub fn analyze(draft: &DraftState) -> Self {
        Action::Analyze {
            prompt: draft.prompt().to_string(),
        }
    }

    /// Build a `Refine` carrying the full answer map for `questions`.
    ///
    /// The key set is exactly the rendered question list: unanswered
    /// questions map to `""` and draft answers for questions no longer
    /// shown are left out.
    pub fn refine(questions: &[String], draft: &DraftState) -> Self {
        let answers = questions
            .iter()
            .map(|question| (question.clone(), draft.answer(question).to_string()))
            .collect();
        Action::Refine { answers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn analyze_serializes_with_prompt() {
        let action = Action::Analyze {
            prompt: "summarize this doc".into(),
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"action": "analyze", "prompt": "summarize this doc"})
        );
    }

    #[test]
    fn unit_actions_carry_no_payload() {
        assert_eq!(
            serde_json::to_value(Action::BackToInput).unwrap(),
            json!({"action": "back_to_input"})
        );
        assert_eq!(
            serde_json::to_value(Action::Reset).unwrap(),
            json!({"action": "reset"})
        );
    }

    #[test]
    fn refine_serializes_answer_map() {
        let mut answers = BTreeMap::new();
        answers.insert("What tone?".to_string(), "formal".to_string());
        assert_eq!(
            serde_json::to_value(Action::Refine { answers }).unwrap(),
            json!({"action": "refine", "answers": {"What tone?": "formal"}})
        );
    }

    #[test]
    fn refine_keys_match_rendered_questions() {
        let mut draft = DraftState::default();
        draft.set_answer("What length?", "short");
        draft.set_answer("Stale question?", "ignored");

        let questions = vec!["What length?".to_string(), "What tone?".to_string()];
        let Action::Refine { answers } = Action::refine(&questions, &draft) else {
            panic!("Expected Refine");
        };

        let keys: Vec<&str> = answers.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["What length?", "What tone?"]);
        assert_eq!(answers["What length?"], "short");
        assert_eq!(answers["What tone?"], "");
    }

    #[test]
    fn refine_with_no_questions_is_empty_map() {
        let action = Action::refine(&[], &DraftState::default());
        assert_eq!(action, Action::Refine { answers: BTreeMap::new() });
        assert_eq!(action.kind(), ActionKind::Refine);
    }

    #[test]
    fn analyze_allows_empty_prompt() {
        let action = Action::analyze(&DraftState::default());
        assert_eq!(action, Action::Analyze { prompt: String::new() });
    }
}

//! Reducer for the refinement widget.

use crate::sync::reconcile;
use crate::ui::mvi::Reducer;

use super::intent::WidgetIntent;
use super::state::WidgetState;

/// Reducer for widget state transitions.
///
/// Never changes the displayed phase on its own: only `HostUpdate`
/// replaces the host context.
pub struct WidgetReducer;

impl Reducer for WidgetReducer {
    type State = WidgetState;
    type Intent = WidgetIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WidgetIntent::HostUpdate(context) => {
                state.draft = reconcile(state.draft, &context);
                if let Some(theme) = context.theme {
                    state.theme = theme;
                }
                if context.questions() != state.questions() {
                    state.focused = 0;
                }
                state.host = context;
                state
            }

            WidgetIntent::EditPrompt(edit) => {
                if state.phase().is_some_and(|p| p.prompt_editable()) {
                    edit.apply(state.draft.prompt_mut());
                }
                state
            }

            WidgetIntent::EditAnswer { question, edit } => {
                let editable = state.phase().is_some_and(|p| p.answers_editable())
                    && state.questions().contains(&question);
                if editable {
                    edit.apply(state.draft.answer_mut(&question));
                }
                state
            }

            WidgetIntent::FocusNext => {
                let count = state.questions().len();
                if count > 0 {
                    state.focused = (state.focused + 1) % count;
                }
                state
            }

            WidgetIntent::FocusPrev => {
                let count = state.questions().len();
                if count > 0 {
                    state.focused = if state.focused == 0 {
                        count - 1
                    } else {
                        state.focused - 1
                    };
                }
                state
            }

            WidgetIntent::ToggleTheme => {
                state.theme = state.theme.toggled();
                state
            }

            WidgetIntent::ClearDraft => {
                state.draft.clear();
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostContext, Theme};
    use crate::ui::refiner::intent::TextEdit;
    use crate::workflow::{Phase, WorkflowState};
    use std::collections::BTreeMap;

    fn input(prompt: &str) -> HostContext {
        HostContext {
            workflow: Some(WorkflowState::Input),
            raw_prompt: prompt.to_string(),
            ..HostContext::default()
        }
    }

    fn questions(prompt: &str, list: &[&str]) -> HostContext {
        HostContext {
            workflow: Some(WorkflowState::Questions {
                questions: list.iter().map(|q| q.to_string()).collect(),
            }),
            raw_prompt: prompt.to_string(),
            ..HostContext::default()
        }
    }

    fn type_prompt(state: WidgetState, text: &str) -> WidgetState {
        text.chars().fold(state, |state, ch| {
            WidgetReducer::reduce(state, WidgetIntent::EditPrompt(TextEdit::Insert(ch)))
        })
    }

    #[test]
    fn host_update_sets_phase() {
        let state = WidgetReducer::reduce(
            WidgetState::default(),
            WidgetIntent::HostUpdate(input("")),
        );
        assert_eq!(state.phase(), Some(Phase::Input));
    }

    #[test]
    fn prompt_edits_only_in_input_phase() {
        let state = WidgetReducer::reduce(
            WidgetState::default(),
            WidgetIntent::HostUpdate(input("")),
        );
        let state = type_prompt(state, "hi");
        assert_eq!(state.draft.prompt(), "hi");

        let state = WidgetReducer::reduce(
            state,
            WidgetIntent::HostUpdate(questions("hi", &["Q?"])),
        );
        let state = type_prompt(state, "!!");
        assert_eq!(state.draft.prompt(), "hi");
    }

    #[test]
    fn edits_before_first_context_are_ignored() {
        let state = type_prompt(WidgetState::default(), "lost");
        assert_eq!(state.draft.prompt(), "");
    }

    #[test]
    fn answer_edits_require_rendered_question() {
        let state = WidgetReducer::reduce(
            WidgetState::default(),
            WidgetIntent::HostUpdate(questions("p", &["What tone?"])),
        );
        let state = WidgetReducer::reduce(
            state,
            WidgetIntent::EditAnswer {
                question: "What tone?".into(),
                edit: TextEdit::InsertStr("formal".into()),
            },
        );
        let state = WidgetReducer::reduce(
            state,
            WidgetIntent::EditAnswer {
                question: "Unknown?".into(),
                edit: TextEdit::InsertStr("x".into()),
            },
        );
        assert_eq!(state.draft.answer("What tone?"), "formal");
        assert!(!state.draft.answers().contains_key("Unknown?"));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let state = WidgetReducer::reduce(
            WidgetState::default(),
            WidgetIntent::HostUpdate(questions("p", &["A?", "B?", "C?"])),
        );
        let state = WidgetReducer::reduce(state, WidgetIntent::FocusPrev);
        assert_eq!(state.focused, 2);
        let state = WidgetReducer::reduce(state, WidgetIntent::FocusNext);
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn focus_is_noop_without_questions() {
        let state = WidgetReducer::reduce(
            WidgetState::default(),
            WidgetIntent::HostUpdate(questions("p", &[])),
        );
        let state = WidgetReducer::reduce(state, WidgetIntent::FocusNext);
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn new_question_list_resets_focus() {
        let state = WidgetReducer::reduce(
            WidgetState::default(),
            WidgetIntent::HostUpdate(questions("p", &["A?", "B?"])),
        );
        let state = WidgetReducer::reduce(state, WidgetIntent::FocusNext);
        assert_eq!(state.focused, 1);

        let same = WidgetReducer::reduce(
            state.clone(),
            WidgetIntent::HostUpdate(questions("p", &["A?", "B?"])),
        );
        assert_eq!(same.focused, 1);

        let changed = WidgetReducer::reduce(
            state,
            WidgetIntent::HostUpdate(questions("p", &["C?"])),
        );
        assert_eq!(changed.focused, 0);
    }

    #[test]
    fn host_theme_overrides_local_toggle() {
        let state = WidgetReducer::reduce(WidgetState::default(), WidgetIntent::ToggleTheme);
        assert_eq!(state.theme, Theme::Dark);

        // No theme in context: keep the local choice.
        let state = WidgetReducer::reduce(state, WidgetIntent::HostUpdate(input("")));
        assert_eq!(state.theme, Theme::Dark);

        let mut context = input("");
        context.theme = Some(Theme::Light);
        let state = WidgetReducer::reduce(state, WidgetIntent::HostUpdate(context));
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn clear_draft_keeps_phase() {
        let mut context = HostContext {
            workflow: Some(WorkflowState::Result {
                refined: "done".into(),
            }),
            raw_prompt: "p".into(),
            ..HostContext::default()
        };
        context.answers = Some(BTreeMap::from([("A?".to_string(), "a".to_string())]));
        let state = WidgetReducer::reduce(WidgetState::default(), WidgetIntent::HostUpdate(context));

        let state = WidgetReducer::reduce(state, WidgetIntent::ClearDraft);
        assert!(state.draft.is_empty());
        assert_eq!(state.phase(), Some(Phase::Result));
    }

    #[test]
    fn same_context_twice_is_noop() {
        let context = questions("p", &["A?"]);
        let state = WidgetReducer::reduce(
            WidgetState::default(),
            WidgetIntent::HostUpdate(context.clone()),
        );
        let state = WidgetReducer::reduce(
            state,
            WidgetIntent::EditAnswer {
                question: "A?".into(),
                edit: TextEdit::InsertStr("typed".into()),
            },
        );
        let again = WidgetReducer::reduce(state.clone(), WidgetIntent::HostUpdate(context));
        assert_eq!(again, state);
    }
}

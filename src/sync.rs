//! Reconciliation of host-pushed values with local drafts.
//!
//! The host re-sends its full context on every refresh, usually with the
//! same values. Overwriting the draft each time would erase keystrokes
//! the host has not seen yet, so a field is only reseeded when the host
//! value differs from the last value the host sent for it.

use std::collections::BTreeMap;

use crate::host::HostContext;

/// Local, not-yet-submitted edit buffers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftState {
    prompt: String,
    answers: BTreeMap<String, String>,
    /// Last prompt value received from the host. `None` until mounted.
    host_prompt: Option<String>,
    /// Answers of the previous host context, empty when it had none.
    host_answers: BTreeMap<String, String>,
}

impl DraftState {
    /// Draft for a freshly mounted widget.
    pub fn seeded(context: &HostContext) -> Self {
        reconcile(Self::default(), context)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut String {
        &mut self.prompt
    }

    pub fn answers(&self) -> &BTreeMap<String, String> {
        &self.answers
    }

    /// Draft answer for `question`, `""` when nothing was typed.
    pub fn answer(&self, question: &str) -> &str {
        self.answers.get(question).map(String::as_str).unwrap_or("")
    }

    pub fn answer_mut(&mut self, question: &str) -> &mut String {
        self.answers.entry(question.to_string()).or_default()
    }

    pub fn set_answer(&mut self, question: &str, text: &str) {
        *self.answer_mut(question) = text.to_string();
    }

    /// Drop prompt and answers ahead of the host confirming a reset.
    ///
    /// Host markers are kept: if the host re-sends the old values before
    /// processing the reset, they compare equal and stay cleared. Once the
    /// host sends a context without them, the markers follow.
    pub fn clear(&mut self) {
        self.prompt.clear();
        self.answers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.prompt.is_empty() && self.answers.is_empty()
    }
}

/// Produce the next draft from the previous one and a new host context.
///
/// Idempotent: reconciling the same context twice leaves the draft as
/// the first call left it.
pub fn reconcile(mut draft: DraftState, context: &HostContext) -> DraftState {
    if draft.host_prompt.as_deref() != Some(context.raw_prompt.as_str()) {
        draft.prompt = context.raw_prompt.clone();
        draft.host_prompt = Some(context.raw_prompt.clone());
    }

    // Markers mirror the previous context's answers, so a key the host
    // dropped and later sends again is treated as a new value.
    match &context.answers {
        Some(answers) => {
            for (question, answer) in answers {
                if draft.host_answers.get(question) != Some(answer) {
                    draft.answers.insert(question.clone(), answer.clone());
                }
            }
            draft.host_answers = answers.clone();
        }
        None => draft.host_answers.clear(),
    }

    draft
}

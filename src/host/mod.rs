//! Host-facing side of the widget.
//!
//! - `HostProps`: raw props object as the host sends it
//! - `HostContext`: validated, read-only snapshot for one render cycle
//! - `bridge`: outbound calls (component value, frame height)
//! - `process`: host program spawned as a child speaking JSON lines

pub mod bridge;
pub mod process;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::workflow::{Phase, WorkflowState};

pub use bridge::{HostBridge, JsonLineBridge, OutboundMessage, RecordingBridge};
pub use process::HostProcess;

/// Errors on the host transport.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Failed to decode host message: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to spawn host '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Host process has no {stream} pipe")]
    MissingPipe { stream: &'static str },

    #[error("Host I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

/// Signed-in user and remaining quota, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub remaining: i64,
}

impl UserSummary {
    pub fn display_name(&self) -> &str {
        if self.is_anonymous {
            "Guest"
        } else if self.name.is_empty() {
            "User"
        } else {
            &self.name
        }
    }
}

/// One props field as received.
///
/// A field of the wrong type does not fail the whole object: it decodes
/// as `Invalid` so the context can be judged field by field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Missing or `null`.
    Absent,
    Invalid,
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    /// The value, with a warning if it had the wrong type.
    fn lenient(self, name: &'static str) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent => None,
            Field::Invalid => {
                tracing::warn!(field = name, "Ignoring host field of unexpected type");
                None
            }
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Field::Absent);
        }
        Ok(serde_json::from_value(value).map_or(Field::Invalid, Field::Present))
    }
}

/// Props object as sent by the host.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HostProps {
    #[serde(default)]
    pub step: Field<String>,
    #[serde(default)]
    pub raw_prompt: Field<String>,
    #[serde(default)]
    pub questions: Field<Vec<String>>,
    #[serde(default)]
    pub answers: Field<BTreeMap<String, String>>,
    #[serde(default)]
    pub refined_prompt: Field<String>,
    #[serde(default)]
    pub theme: Field<Theme>,
    #[serde(default)]
    pub user: Field<UserSummary>,
}

/// Read-only host snapshot for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostContext {
    /// `None` when the host sent a missing/unknown step or a payload that
    /// does not match it. The phase body then renders nothing.
    pub workflow: Option<WorkflowState>,
    pub raw_prompt: String,
    pub answers: Option<BTreeMap<String, String>>,
    pub theme: Option<Theme>,
    pub user: Option<UserSummary>,
}

impl HostContext {
    /// Decode one props line. Only text that is not JSON is an error.
    pub fn from_json(json: &str) -> Result<Self, HostError> {
        let value: Value =
            serde_json::from_str(json).map_err(|source| HostError::Decode { source })?;
        Ok(Self::from_value(value))
    }

    /// Any JSON value is accepted; anything but an object is malformed.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<HostProps>(value) {
            Ok(props) => Self::from(props),
            Err(err) => {
                tracing::warn!(error = %err, "Host props are not an object; rendering empty body");
                Self::default()
            }
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        self.workflow.as_ref().map(WorkflowState::phase)
    }

    pub fn questions(&self) -> &[String] {
        self.workflow
            .as_ref()
            .map(WorkflowState::questions)
            .unwrap_or(&[])
    }
}

impl From<HostProps> for HostContext {
    fn from(props: HostProps) -> Self {
        let workflow = workflow_from_props(&props);
        Self {
            workflow,
            raw_prompt: props.raw_prompt.lenient("raw_prompt").unwrap_or_default(),
            answers: props.answers.lenient("answers"),
            theme: props.theme.lenient("theme"),
            user: props.user.lenient("user"),
        }
    }
}

fn workflow_from_props(props: &HostProps) -> Option<WorkflowState> {
    let step = match &props.step {
        Field::Present(step) => step.as_str(),
        Field::Absent => {
            tracing::warn!("Host context has no step; rendering empty body");
            return None;
        }
        Field::Invalid => {
            tracing::warn!("Host context step is not a string; rendering empty body");
            return None;
        }
    };
    let Some(phase) = Phase::parse(step) else {
        tracing::warn!(step, "Host context has unknown step; rendering empty body");
        return None;
    };
    if props.raw_prompt == Field::Invalid {
        tracing::warn!(step, "Host context raw_prompt is not a string; rendering empty body");
        return None;
    }

    match phase {
        Phase::Input => Some(WorkflowState::Input),
        // A missing question list is an empty one; the host decides
        // whether refining with no questions makes sense.
        Phase::Questions => match (&props.questions, &props.answers) {
            (Field::Invalid, _) | (_, Field::Invalid) => {
                tracing::warn!("Host questions payload has unexpected type; rendering empty body");
                None
            }
            (questions, _) => Some(WorkflowState::Questions {
                questions: match questions {
                    Field::Present(list) => list.clone(),
                    _ => Vec::new(),
                },
            }),
        },
        Phase::Result => match &props.refined_prompt {
            Field::Present(refined) => Some(WorkflowState::Result {
                refined: refined.clone(),
            }),
            Field::Absent => {
                tracing::warn!("Host declared result step without refined_prompt");
                None
            }
            Field::Invalid => {
                tracing::warn!("Host refined_prompt is not a string; rendering empty body");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_props() {
        let context = HostContext::from_json(
            r#"{
                "step": "questions",
                "raw_prompt": "summarize this doc",
                "questions": ["What length?", "What tone?"],
                "answers": {"What length?": "short"},
                "refined_prompt": "",
                "theme": "dark",
                "user": {"name": "Sam", "email": "sam@example.com", "is_anonymous": false, "remaining": 4}
            }"#,
        )
        .unwrap();

        assert_eq!(context.phase(), Some(Phase::Questions));
        assert_eq!(context.raw_prompt, "summarize this doc");
        assert_eq!(context.questions().len(), 2);
        assert_eq!(context.theme, Some(Theme::Dark));
        assert_eq!(context.user.as_ref().map(|u| u.remaining), Some(4));
        assert_eq!(
            context.answers.as_ref().and_then(|a| a.get("What length?")),
            Some(&"short".to_string())
        );
    }

    #[test]
    fn nulls_are_treated_as_absent() {
        let context = HostContext::from_json(
            r#"{"step": "input", "raw_prompt": "", "questions": null, "answers": null, "user": null}"#,
        )
        .unwrap();
        assert_eq!(context.workflow, Some(WorkflowState::Input));
        assert!(context.answers.is_none());
        assert!(context.user.is_none());
        assert!(context.theme.is_none());
    }

    #[test]
    fn missing_step_is_malformed_not_an_error() {
        let context = HostContext::from_json(r#"{"raw_prompt": "x"}"#).unwrap();
        assert!(context.workflow.is_none());
        assert_eq!(context.raw_prompt, "x");
    }

    #[test]
    fn unknown_step_is_malformed() {
        let context = HostContext::from_json(r#"{"step": "loading"}"#).unwrap();
        assert!(context.workflow.is_none());
    }

    #[test]
    fn result_without_text_is_malformed() {
        let context = HostContext::from_json(r#"{"step": "result", "raw_prompt": ""}"#).unwrap();
        assert!(context.workflow.is_none());

        let context =
            HostContext::from_json(r#"{"step": "result", "refined_prompt": "Done"}"#).unwrap();
        assert_eq!(context.workflow.as_ref().and_then(|w| w.refined()), Some("Done"));
    }

    #[test]
    fn questions_step_without_list_has_no_questions() {
        let context = HostContext::from_json(r#"{"step": "questions"}"#).unwrap();
        assert_eq!(context.phase(), Some(Phase::Questions));
        assert!(context.questions().is_empty());
    }

    #[test]
    fn wrong_typed_result_text_is_malformed() {
        let context =
            HostContext::from_json(r#"{"step": "result", "raw_prompt": "p", "refined_prompt": 42}"#)
                .unwrap();
        assert!(context.workflow.is_none());
        assert_eq!(context.raw_prompt, "p");
    }

    #[test]
    fn wrong_typed_questions_payload_is_malformed() {
        let context =
            HostContext::from_json(r#"{"step": "questions", "questions": "x"}"#).unwrap();
        assert!(context.workflow.is_none());

        let context = HostContext::from_json(
            r#"{"step": "questions", "questions": ["A?"], "answers": ["a"]}"#,
        )
        .unwrap();
        assert!(context.workflow.is_none());
        assert!(context.answers.is_none());
    }

    #[test]
    fn wrong_typed_step_or_prompt_is_malformed() {
        let context = HostContext::from_json(r#"{"step": 3}"#).unwrap();
        assert!(context.workflow.is_none());

        let context = HostContext::from_json(r#"{"step": "input", "raw_prompt": []}"#).unwrap();
        assert!(context.workflow.is_none());
        assert_eq!(context.raw_prompt, "");
    }

    #[test]
    fn unknown_theme_and_bad_user_are_absent() {
        let context = HostContext::from_json(
            r#"{"step": "input", "raw_prompt": "", "theme": "blue", "user": "sam"}"#,
        )
        .unwrap();
        assert_eq!(context.workflow, Some(WorkflowState::Input));
        assert!(context.theme.is_none());
        assert!(context.user.is_none());
    }

    #[test]
    fn json_that_is_not_an_object_is_malformed() {
        let context = HostContext::from_json("[1, 2]").unwrap();
        assert_eq!(context, HostContext::default());
    }

    #[test]
    fn non_json_is_decode_error() {
        let err = HostContext::from_json("not json").unwrap_err();
        assert!(matches!(err, HostError::Decode { .. }));
    }

    #[test]
    fn display_name_prefers_guest_for_anonymous() {
        let guest = UserSummary {
            name: "ignored".into(),
            is_anonymous: true,
            ..UserSummary::default()
        };
        assert_eq!(guest.display_name(), "Guest");

        let named = UserSummary {
            name: "Sam".into(),
            ..UserSummary::default()
        };
        assert_eq!(named.display_name(), "Sam");
        assert_eq!(UserSummary::default().display_name(), "User");
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert!(Theme::Light.toggled().is_dark());
        assert_eq!(Theme::default(), Theme::Light);
    }
}

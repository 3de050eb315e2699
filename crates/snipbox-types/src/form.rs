//! View-model of the add/edit snippet form.
//!
//! The whole form state lives in [`FormState`] and only changes through [`reduce`],
//! so clients never keep loose mutable flags around.

use crate::{language::DEFAULT_LANGUAGE, snippet::SnippetPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Code,
    Language,
    Tags,
}

/// Raw form inputs, tags are kept as the comma separated text the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub code: String,
    pub language: String,
    pub tags: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            code: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            tags: String::new(),
        }
    }
}

impl FormFields {
    /// Fields prefilled from a stored snippet, tags are joined back with `", "`.
    pub fn from_existing(
        title: &str,
        description: &str,
        code: &str,
        language: &str,
        tags: &[String],
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            code: code.to_string(),
            language: language.to_string(),
            tags: tags.join(", "),
        }
    }

    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Code => &mut self.code,
            Field::Language => &mut self.language,
            Field::Tags => &mut self.tags,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub visible: bool,
    /// Id of snippet being edited, `None` when creating a new one
    pub editing_id: Option<String>,
    pub fields: FormFields,
    pub saving: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Open,
    Edit { id: String, fields: FormFields },
    SetField(Field, String),
    Submit,
    SubmitFailed(String),
    Saved,
    Cancel,
}

pub fn reduce(state: FormState, action: FormAction) -> FormState {
    match action {
        FormAction::Open => FormState {
            visible: true,
            ..state
        },
        FormAction::Edit { id, fields } => FormState {
            visible: true,
            editing_id: Some(id),
            fields,
            saving: false,
            error: None,
        },
        FormAction::SetField(field, value) => {
            let mut state = state;
            state.fields.set(field, value);
            state
        }
        FormAction::Submit => FormState {
            saving: true,
            error: None,
            ..state
        },
        FormAction::SubmitFailed(error) => FormState {
            saving: false,
            error: Some(error),
            ..state
        },
        FormAction::Saved | FormAction::Cancel => FormState::default(),
    }
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Payload to submit, tags are sent raw and canonicalized by the validation contract.
    pub fn payload(&self) -> SnippetPayload {
        SnippetPayload {
            title: self.fields.title.clone(),
            description: self.fields.description.clone(),
            code: self.fields.code.clone(),
            language: self.fields.language.clone(),
            tags: Some(self.fields.tags.as_str().into()),
        }
    }
}

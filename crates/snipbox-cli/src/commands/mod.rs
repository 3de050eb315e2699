pub mod add;
pub mod delete;
pub mod edit;
pub mod languages;
pub mod list;
pub mod show;

use std::path::PathBuf;

use anyhow::{anyhow, Context as _};
use clap::Args;
use garde::Validate as _;
use snipbox_dal::snippet::Snippet;
use snipbox_types::{
    form::{reduce, Field, FormAction, FormFields, FormState},
    language::is_known,
};
use tracing::{debug, warn};

use crate::client::ApiClient;

#[allow(async_fn_in_trait)]
pub trait Executor {
    async fn run(self, client: &ApiClient) -> anyhow::Result<()>;
}

#[derive(Args, Debug, Default)]
pub struct SnippetFields {
    #[arg(long, help = "Title, up to 100 characters")]
    title: Option<String>,

    #[arg(long, help = "Description, up to 500 characters")]
    description: Option<String>,

    #[arg(long, conflicts_with = "code_file", help = "Code of the snippet")]
    code: Option<String>,

    #[arg(long, help = "Read code of the snippet from file")]
    code_file: Option<PathBuf>,

    #[arg(long, help = "Language, e.g. rust, python, javascript")]
    language: Option<String>,

    #[arg(long, help = "Tags separated by comma, empty string clears tags")]
    tags: Option<String>,
}

impl SnippetFields {
    /// Form actions for fields given on command line
    pub async fn into_actions(self) -> anyhow::Result<Vec<FormAction>> {
        let code = match self.code_file {
            Some(path) => Some(
                tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Cannot read code from {}", path.display()))?,
            ),
            None => self.code,
        };
        let actions = [
            (Field::Title, self.title),
            (Field::Description, self.description),
            (Field::Code, code),
            (Field::Language, self.language),
            (Field::Tags, self.tags),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| FormAction::SetField(field, v)))
        .collect();
        Ok(actions)
    }
}

/// Form fields prefilled from stored snippet
pub fn form_fields(snippet: &Snippet) -> FormFields {
    FormFields::from_existing(
        &snippet.title,
        &snippet.description,
        &snippet.code,
        &snippet.language,
        &snippet.tags,
    )
}

/// Validates form locally and sends it as create or update, depending on form state.
pub async fn submit(client: &ApiClient, state: FormState) -> anyhow::Result<Snippet> {
    let payload = state.payload();
    if let Err(report) = payload.validate() {
        let state = reduce(state, FormAction::SubmitFailed(report.to_string()));
        return Err(anyhow!(
            "Invalid snippet: {}",
            state.error.unwrap_or_default()
        ));
    }

    if !is_known(&payload.language) {
        warn!("Language {} is not among languages suggested by server", payload.language);
    }

    let state = reduce(state, FormAction::Submit);
    debug!(editing = state.is_editing(), "Submitting snippet form");
    let result = match state.editing_id.as_deref() {
        Some(id) => client.update(id, &payload).await,
        None => client.create(&payload).await,
    };
    match result {
        Ok(snippet) => {
            let state = reduce(state, FormAction::Saved);
            debug!("Form after save: {state:?}");
            Ok(snippet)
        }
        Err(e) => {
            let state = reduce(state, FormAction::SubmitFailed(e.to_string()));
            Err(anyhow!(state
                .error
                .unwrap_or_else(|| "Failed to save snippet".to_string())))
        }
    }
}

pub fn print_snippet_line(snippet: &Snippet) {
    let tags = snippet
        .tags
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "{}  [{}]  {}  {}",
        snippet.id, snippet.language, snippet.title, tags
    );
}

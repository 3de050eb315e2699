use clap::Parser;
use snipbox_types::form::{reduce, FormAction, FormState};

use crate::{
    client::ApiClient,
    commands::{form_fields, submit, Executor, SnippetFields},
};

#[derive(Parser, Debug)]
pub struct EditCmd {
    #[arg(help = "Snippet id")]
    id: String,

    #[command(flatten)]
    fields: SnippetFields,
}

impl Executor for EditCmd {
    async fn run(self, client: &ApiClient) -> anyhow::Result<()> {
        let existing = client.get(&self.id).await?;
        let state = reduce(
            FormState::default(),
            FormAction::Edit {
                id: existing.id.clone(),
                fields: form_fields(&existing),
            },
        );
        let state = self.fields.into_actions().await?.into_iter().fold(state, reduce);

        let snippet = submit(client, state).await?;
        println!("Updated snippet {}", snippet.id);
        Ok(())
    }
}

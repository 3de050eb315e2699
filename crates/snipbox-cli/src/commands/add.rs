use clap::Parser;
use snipbox_types::form::{reduce, FormAction, FormState};

use crate::{
    client::ApiClient,
    commands::{submit, Executor, SnippetFields},
};

#[derive(Parser, Debug)]
pub struct AddCmd {
    #[command(flatten)]
    fields: SnippetFields,
}

impl Executor for AddCmd {
    async fn run(self, client: &ApiClient) -> anyhow::Result<()> {
        let state = reduce(FormState::default(), FormAction::Open);
        let state = self.fields.into_actions().await?.into_iter().fold(state, reduce);

        let snippet = submit(client, state).await?;
        println!("Created snippet {}", snippet.id);
        Ok(())
    }
}

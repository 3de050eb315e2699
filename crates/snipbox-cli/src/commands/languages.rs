use clap::Parser;

use crate::{client::ApiClient, commands::Executor};

#[derive(Parser, Debug)]
pub struct LanguagesCmd {}

impl Executor for LanguagesCmd {
    async fn run(self, client: &ApiClient) -> anyhow::Result<()> {
        for language in client.languages().await? {
            println!("{language}");
        }
        Ok(())
    }
}

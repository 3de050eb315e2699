use clap::Parser;

use crate::{client::ApiClient, commands::Executor};

#[derive(Parser, Debug)]
pub struct DeleteCmd {
    #[arg(help = "Snippet id")]
    id: String,
}

impl Executor for DeleteCmd {
    async fn run(self, client: &ApiClient) -> anyhow::Result<()> {
        client.delete(&self.id).await?;
        println!("Deleted snippet {}", self.id);
        Ok(())
    }
}

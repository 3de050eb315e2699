use clap::Parser;
use snipbox_types::language::display_name;

use crate::{client::ApiClient, commands::Executor};

#[derive(Parser, Debug)]
pub struct ShowCmd {
    #[arg(help = "Snippet id")]
    id: String,

    #[arg(long, help = "Print as JSON")]
    json: bool,
}

impl Executor for ShowCmd {
    async fn run(self, client: &ApiClient) -> anyhow::Result<()> {
        let snippet = client.get(&self.id).await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&snippet)?);
            return Ok(());
        }

        println!("{}", snippet.title);
        println!("Language: {}", display_name(&snippet.language));
        if !snippet.tags.is_empty() {
            println!("Tags: {}", snippet.tags.join(", "));
        }
        println!("Created: {}, updated: {}", snippet.created_at, snippet.updated_at);
        println!();
        println!("{}", snippet.description);
        println!();
        println!("{}", snippet.code);
        Ok(())
    }
}

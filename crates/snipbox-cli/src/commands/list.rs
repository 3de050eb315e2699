use clap::Parser;

use crate::{
    client::ApiClient,
    commands::{print_snippet_line, Executor},
};

#[derive(Parser, Debug)]
pub struct ListCmd {
    #[arg(long, help = "Print as JSON")]
    json: bool,

    #[arg(long, help = "Show only snippets with this tag")]
    tag: Option<String>,
}

impl Executor for ListCmd {
    async fn run(self, client: &ApiClient) -> anyhow::Result<()> {
        let mut snippets = client.list().await?;
        if let Some(tag) = self.tag {
            snippets.retain(|s| s.tags.contains(&tag));
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&snippets)?);
        } else if snippets.is_empty() {
            println!("No snippets");
        } else {
            snippets.iter().for_each(print_snippet_line);
        }
        Ok(())
    }
}

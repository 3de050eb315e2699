use clap::{Parser, Subcommand};
use url::Url;

use crate::commands::{
    add::AddCmd, delete::DeleteCmd, edit::EditCmd, languages::LanguagesCmd, list::ListCmd,
    show::ShowCmd,
};

#[derive(Parser)]
#[command(
    version,
    about,
    long_about = "CLI for snipbox - lists and manages code snippets stored on snipbox server."
)]
pub struct CliConfig {
    #[arg(
        long,
        env = "SNIPBOX_SERVER_URL",
        default_value = "http://localhost:3000/",
        help = "Base URL of snipbox server"
    )]
    pub server_url: Url,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all snippets, newest first
    List(ListCmd),
    /// Show one snippet including its code
    Show(ShowCmd),
    /// Add new snippet
    Add(AddCmd),
    /// Change fields of existing snippet
    Edit(EditCmd),
    /// Delete snippet
    Delete(DeleteCmd),
    /// Languages suggested by server
    Languages(LanguagesCmd),
}

impl crate::commands::Executor for Command {
    async fn run(self, client: &crate::client::ApiClient) -> anyhow::Result<()> {
        match self {
            Command::List(cmd) => cmd.run(client).await,
            Command::Show(cmd) => cmd.run(client).await,
            Command::Add(cmd) => cmd.run(client).await,
            Command::Edit(cmd) => cmd.run(client).await,
            Command::Delete(cmd) => cmd.run(client).await,
            Command::Languages(cmd) => cmd.run(client).await,
        }
    }
}

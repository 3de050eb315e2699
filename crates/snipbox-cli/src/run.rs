use crate::{client::ApiClient, commands::Executor as _, config::CliConfig};
use anyhow::Result;

pub async fn run(config: CliConfig) -> Result<()> {
    let client = ApiClient::new(config.server_url);
    config.command.run(&client).await
}

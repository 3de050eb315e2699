use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
pub struct BackendConfig {
    #[arg(
        long,
        env = "SNIPBOX_DATABASE_URL",
        help = "Database URL e.g. sqlite://file.db or sqlite::memory:, default is sqlite://[data-dir]/snipbox.db, where data-dir is set by --data-dir"
    )]
    database_url: Option<String>,

    #[arg(
        long,
        env = "SNIPBOX_DATA_DIR",
        help = "Data directory (database etc.), default is system default like ~/.local/share/snipbox",
        default_value_t = default_data_dir()
    )]
    data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("snipbox"))
        .unwrap_or_else(|| PathBuf::from("snipbox"))
        .to_string_lossy()
        .to_string()
}

impl BackendConfig {
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn database_url(&self) -> String {
        self.database_url
            .clone()
            .unwrap_or_else(|| format!("sqlite://{}/snipbox.db", self.data_dir))
    }
}

//! Where the static tables come from: a local directory or a deployed site.

use clap::Args;
use std::path::PathBuf;

/// File names of the three published tables, relative to the data root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    BeachDetails,
    MarineObservations,
    TideExtrema,
}

impl Table {
    pub fn file_name(&self) -> &'static str {
        match self {
            Table::BeachDetails => "main_beach_details.csv",
            Table::MarineObservations => "main_storm_glass_details.csv",
            Table::TideExtrema => "main_tide_details.csv",
        }
    }
}

/// Table source selection shared by every subcommand.
#[derive(Args)]
pub struct SourceArgs {
    /// Local directory holding the three CSV tables
    #[arg(long, default_value = "data/beach", conflicts_with = "base_url")]
    pub data_dir: PathBuf,

    /// Base URL of a deployed site to fetch the tables from instead
    /// (e.g. https://surfcast.example.com)
    #[arg(long)]
    pub base_url: Option<String>,
}

impl SourceArgs {
    /// Read one table as text.
    pub async fn load(&self, table: Table) -> anyhow::Result<String> {
        match &self.base_url {
            Some(base) => {
                let url = format!(
                    "{}/data/beach/{}",
                    base.trim_end_matches('/'),
                    table.file_name()
                );
                log::info!("fetching {url}");
                let response = reqwest::get(&url).await?.error_for_status()?;
                Ok(response.text().await?)
            }
            None => {
                let path = self.data_dir.join(table.file_name());
                log::info!("reading {}", path.display());
                Ok(tokio::fs::read_to_string(&path).await.map_err(|e| {
                    anyhow::anyhow!("failed to read {}: {e}", path.display())
                })?)
            }
        }
    }
}

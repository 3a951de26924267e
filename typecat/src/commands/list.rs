use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use typecat_catalog::{CatalogToml, MANIFEST_FILE};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to typecat.toml (defaults to ./typecat.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Only list this catalog
    #[arg(long)]
    pub catalog: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let catalog_toml = CatalogToml::open(&self.config).unwrap_or_exit();
        let report = ops::list(catalog_toml.manifest(), self.catalog.as_deref()).unwrap_or_exit();

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode JSON")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typecat_catalog::{CatalogToml, MANIFEST_FILE};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to typecat.toml (defaults to ./typecat.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let catalog_toml = CatalogToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(catalog_toml.manifest(), &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use typecat_catalog::{CatalogToml, GenerateConfig, Language, MANIFEST_FILE};

use super::UnwrapOrExit;
use crate::{
    language::generator,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to typecat.toml (defaults to ./typecat.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Catalog to generate accessors for (overrides typecat.toml)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Output directory (overrides typecat.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target language (overrides typecat.toml)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Package of the generated Kotlin file (overrides typecat.toml)
    #[arg(long)]
    pub package: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let catalog_toml = CatalogToml::open(&self.config).unwrap_or_exit();
        let manifest = catalog_toml.manifest();
        let settings = &manifest.generate;

        let language = self.language.unwrap_or(settings.language);
        let catalog = self.catalog.as_deref().unwrap_or(&settings.catalog);
        let package = self.package.as_deref().unwrap_or(&settings.package);
        let output_dir = self.output_dir(settings);

        tracing::debug!(
            catalog,
            language = %language,
            output = %output_dir.display(),
            "resolved generate settings"
        );

        let codegen = generator(language, package).unwrap_or_exit();
        let opts = GenerateOptions {
            catalog,
            output_dir: &output_dir,
            dry_run: self.dry_run,
        };

        let result = ops::generate(manifest, codegen.as_ref(), opts).unwrap_or_exit();
        result.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// `--output` is taken as given; the manifest's output is relative to
    /// the manifest's directory.
    fn output_dir(&self, settings: &GenerateConfig) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => manifest_dir(&self.config).join(&settings.output),
        }
    }
}

fn manifest_dir(config: &Path) -> &Path {
    match config.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_dir() {
        assert_eq!(manifest_dir(Path::new("typecat.toml")), Path::new("."));
        assert_eq!(
            manifest_dir(Path::new("app/typecat.toml")),
            Path::new("app")
        );
    }

    #[test]
    fn test_output_dir_resolution() {
        let mut cmd = GenerateCommand {
            config: PathBuf::from("app/typecat.toml"),
            catalog: None,
            output: None,
            language: None,
            package: None,
            dry_run: false,
        };
        let settings = GenerateConfig::default();

        assert_eq!(
            cmd.output_dir(&settings),
            PathBuf::from("app/build/generated/sources/versionCatalog")
        );

        cmd.output = Some(PathBuf::from("out"));
        assert_eq!(cmd.output_dir(&settings), PathBuf::from("out"));
    }
}

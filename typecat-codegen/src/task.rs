//! Generation orchestration.

use std::path::{Path, PathBuf};

use typecat_catalog::{Category, CatalogRegistry};
use typecat_core::{File, WriteResult};

use crate::{GenerateError, GeneratedModule, LanguageCodegen, PreviewFile};

/// Generates the accessor file for one catalog.
///
/// The task is told which catalog to read and where to write; the catalogs
/// themselves come from the [`CatalogRegistry`] passed to [`run`](Self::run).
///
/// # Example
///
/// ```ignore
/// let registry = manifest.registry();
/// let report = GenerateTask::new("libs", "build/generated")
///     .run(&registry, &typecat_codegen_kotlin::Generator::default())?;
/// println!("{}", report.path.display());
/// ```
#[derive(Debug, Clone)]
pub struct GenerateTask {
    catalog: String,
    output_dir: PathBuf,
}

/// Outcome of a [`GenerateTask::run`].
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Catalog the accessors were generated for
    pub catalog: String,
    /// Target language identifier
    pub language: &'static str,
    /// Path of the written file
    pub path: PathBuf,
    /// What happened to the file
    pub result: WriteResult,
    /// Size of the written file in bytes
    pub bytes: usize,
    /// Number of accessors per category, in category order
    pub aliases: Vec<(Category, usize)>,
}

impl GenerateReport {
    /// Total number of accessors written.
    pub fn total(&self) -> usize {
        self.aliases.iter().map(|(_, count)| count).sum()
    }
}

impl GenerateTask {
    pub fn new(catalog: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog: catalog.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Name of the catalog this task reads.
    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    /// Directory the generated file is written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path of the file `codegen` would produce.
    pub fn output_path(&self, codegen: &dyn LanguageCodegen) -> PathBuf {
        self.output_dir.join(codegen.file_name())
    }

    /// Look up the catalog and build its code model.
    pub fn module(&self, registry: &CatalogRegistry) -> Result<GeneratedModule, GenerateError> {
        let source = registry.named(&self.catalog)?;
        GeneratedModule::build(&self.catalog, source)
    }

    /// Render an already built `module` without writing it.
    pub fn render(&self, module: &GeneratedModule, codegen: &dyn LanguageCodegen) -> PreviewFile {
        PreviewFile {
            path: self.output_path(codegen),
            content: codegen.render(module),
        }
    }

    /// Look up the catalog and render the file without writing it.
    pub fn preview(
        &self,
        registry: &CatalogRegistry,
        codegen: &dyn LanguageCodegen,
    ) -> Result<PreviewFile, GenerateError> {
        let module = self.module(registry)?;
        Ok(self.render(&module, codegen))
    }

    /// Render the file and write it, replacing any previous content.
    pub fn run(
        &self,
        registry: &CatalogRegistry,
        codegen: &dyn LanguageCodegen,
    ) -> Result<GenerateReport, GenerateError> {
        let module = self.module(registry)?;
        let rendered = self.render(&module, codegen);
        let file = File::new(rendered.path, rendered.content);

        let result = file.write().map_err(|source| GenerateError::Io {
            path: file.path().to_path_buf(),
            source,
        })?;

        tracing::info!(
            catalog = %self.catalog,
            language = codegen.language(),
            path = %file.path().display(),
            bytes = file.content().len(),
            result = result.as_str(),
            "generated catalog accessors"
        );

        Ok(GenerateReport {
            catalog: self.catalog.clone(),
            language: codegen.language(),
            path: file.path().to_path_buf(),
            result,
            bytes: file.content().len(),
            aliases: module
                .accessors()
                .iter()
                .map(|accessor| (accessor.category(), accessor.len()))
                .collect(),
        })
    }
}

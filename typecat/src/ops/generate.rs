//! Generate operation - accessor generation from a manifest.

use std::path::Path;

use typecat_catalog::Manifest;
use typecat_codegen::{GenerateError, GenerateTask, LanguageCodegen};

use crate::reports::GenerationResult;

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Catalog to generate accessors for.
    pub catalog: &'a str,
    /// Directory the generated file is written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    manifest: &Manifest,
    codegen: &dyn LanguageCodegen,
    opts: GenerateOptions,
) -> Result<GenerationResult, GenerateError> {
    let registry = manifest.registry();
    let task = GenerateTask::new(opts.catalog, opts.output_dir);

    if opts.dry_run {
        let module = task.module(&registry)?;
        let file = task.render(&module, codegen);
        return Ok(GenerationResult::Preview {
            file,
            accessors: module.property_count(),
        });
    }

    task.run(&registry, codegen).map(GenerationResult::Written)
}

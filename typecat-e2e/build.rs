//! Generates accessors for the fixture catalog into `OUT_DIR`.

use std::{env, path::PathBuf};

use eyre::{Result, WrapErr};
use typecat_catalog::Manifest;
use typecat_codegen::GenerateTask;
use typecat_codegen_rust::Generator;

const FIXTURE: &str = "fixtures/typecat.toml";

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed={}", FIXTURE);

    let manifest = Manifest::from_file(FIXTURE).wrap_err("failed to load fixture catalog")?;
    let out_dir = PathBuf::from(env::var("OUT_DIR").wrap_err("OUT_DIR is not set")?);

    GenerateTask::new(&manifest.generate.catalog, out_dir)
        .run(&manifest.registry(), &Generator::default())
        .wrap_err("failed to generate fixture accessors")?;

    Ok(())
}

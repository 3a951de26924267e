//! Log output for the `typecat` binary.
//!
//! Events go to stderr so stdout stays clean for generated code and JSON.

use tracing_subscriber::EnvFilter;

const CRATES: &[&str] = &[
    "typecat",
    "typecat_catalog",
    "typecat_codegen",
    "typecat_codegen_kotlin",
    "typecat_codegen_rust",
];

/// Filter directives used when `RUST_LOG` is not set.
fn default_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => return "warn".to_string(),
        1 => "debug",
        _ => "trace",
    };

    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|krate| format!("{}={}", krate, level)));
    directives.join(",")
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

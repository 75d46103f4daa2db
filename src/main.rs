//! Build pipeline step that re-exports compiled contract artifacts as Rust
//! constants.
//!
//! Reads the artifacts produced by `forge build` from the project's `out`
//! directory and writes `generated/exports.rs`, fully overwriting any prior
//! output. Takes no arguments; exits non-zero if any artifact is absent,
//! malformed, or missing an expected field.

use anyhow::{Context as _, Result};
use forge_exports::{Export, ExportsBuilder, ForgeLoader};
use std::fs;
use std::path::Path;

/// The artifacts to export and the constants generated for them, in output
/// order. Only the sponsor contract is deployed by consumers, so it is the
/// only artifact whose bytecode is exported.
const EXPORTS: &[(&str, &str, Option<&str>)] = &[
    ("Master", "MASTER_ABI", None),
    ("Sponsor", "SPONSOR_ABI", Some("SPONSOR_BYTECODE")),
    ("IERC20", "ERC20_ABI", None),
];

fn main() -> Result<()> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let loader = ForgeLoader::new(root.join("out"));

    let mut exports = Vec::with_capacity(EXPORTS.len());
    for (artifact, constant, bytecode) in EXPORTS {
        let contract = loader.load_contract(artifact).with_context(|| {
            format!(
                "failed to load artifact {}",
                loader.contract_path(artifact).display(),
            )
        })?;

        let mut export = Export::abi(*constant, contract);
        if let Some(constant) = bytecode {
            export = export.with_bytecode(*constant);
        }
        exports.push(export);
    }

    let generated = root.join("generated");
    fs::create_dir_all(&generated)
        .with_context(|| format!("failed to create output directory {}", generated.display()))?;

    ExportsBuilder::new()
        .generate(&exports)?
        .write_to_file(generated.join("exports.rs"))
        .context("failed to write generated exports")?;

    Ok(())
}

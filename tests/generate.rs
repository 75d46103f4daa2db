//! End-to-end test of the artifact-to-exports pipeline over an on-disk
//! forge output layout.

use forge_exports::{Export, ExportsBuilder, ForgeLoader};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use syn::{Expr, Item, Lit};
use tempfile::TempDir;

const ARTIFACTS: &[(&str, &str)] = &[
    ("Master", r#"{"abi":[{"type":"function","name":"foo"}]}"#),
    ("Sponsor", r#"{"abi":[],"bytecode":{"object":"6001600101"}}"#),
    ("IERC20", r#"{"abi":[{"type":"event","name":"Transfer"}]}"#),
];

/// Lays out `<root>/out/<Name>.sol/<Name>.json` for each artifact.
fn write_artifacts(root: &Path) {
    for (name, json) in ARTIFACTS {
        let dir = root.join("out").join(format!("{}.sol", name));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{}.json", name)), json).unwrap();
    }
}

fn generate(root: &Path) -> Vec<u8> {
    let loader = ForgeLoader::new(root.join("out"));
    let exports = vec![
        Export::abi("MASTER_ABI", loader.load_contract("Master").unwrap()),
        Export::abi("SPONSOR_ABI", loader.load_contract("Sponsor").unwrap())
            .with_bytecode("SPONSOR_BYTECODE"),
        Export::abi("ERC20_ABI", loader.load_contract("IERC20").unwrap()),
    ];

    let destination = root.join("generated");
    fs::create_dir_all(&destination).unwrap();
    let destination = destination.join("exports.rs");

    ExportsBuilder::new()
        .rustfmt(false)
        .generate(&exports)
        .unwrap()
        .write_to_file(&destination)
        .unwrap();

    fs::read(destination).unwrap()
}

fn string_constant(file: &syn::File, index: usize) -> (String, String) {
    match &file.items[index] {
        Item::Const(item) => match &*item.expr {
            Expr::Lit(lit) => match &lit.lit {
                Lit::Str(lit) => (item.ident.to_string(), lit.value()),
                _ => panic!("constant is not a string literal"),
            },
            _ => panic!("constant is not a literal"),
        },
        _ => panic!("unexpected item in generated file"),
    }
}

#[test]
fn generates_exports_from_artifacts_on_disk() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());

    let output = generate(dir.path());
    let file = syn::parse_file(&String::from_utf8(output).unwrap()).unwrap();

    assert_eq!(file.items.len(), 4);

    let (name, value) = string_constant(&file, 0);
    assert_eq!(name, "MASTER_ABI");
    let abi: Value = serde_json::from_str(&value).unwrap();
    assert_eq!(abi, json!([{"type": "function", "name": "foo"}]));

    let (name, value) = string_constant(&file, 1);
    assert_eq!(name, "SPONSOR_ABI");
    let abi: Value = serde_json::from_str(&value).unwrap();
    assert_eq!(abi, json!([]));

    let (name, value) = string_constant(&file, 2);
    assert_eq!(name, "ERC20_ABI");
    let abi: Value = serde_json::from_str(&value).unwrap();
    assert_eq!(abi, json!([{"type": "event", "name": "Transfer"}]));

    let (name, value) = string_constant(&file, 3);
    assert_eq!(name, "SPONSOR_BYTECODE");
    assert_eq!(value, "6001600101");
}

#[test]
fn regeneration_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());

    let first = generate(dir.path());
    let second = generate(dir.path());
    assert_eq!(first, second);
}

#[test]
fn regeneration_replaces_prior_output() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());

    let generated = dir.path().join("generated");
    fs::create_dir_all(&generated).unwrap();
    fs::write(generated.join("exports.rs"), "stale content").unwrap();

    let output = generate(dir.path());
    assert!(syn::parse_file(&String::from_utf8(output).unwrap()).is_ok());
}

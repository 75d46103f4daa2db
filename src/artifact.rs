//! Module for reading and examining artifacts produced by `forge build`.
//!
//! Each artifact is a JSON file describing a single compiled contract,
//! placed at `<root>/<Name>.sol/<Name>.json`. We parse the following
//! fields:
//!
//! - `abi`: the contract's interface, kept as an opaque JSON value and
//!   passed through structurally unchanged;
//! - `bytecode`: the contract's compiled deployment bytecode (optional;
//!   interface-only artifacts such as `IERC20` don't have a usable one).

use crate::errors::ArtifactError;
use serde::Deserialize;
use serde_json::{from_reader, from_str, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Represents a single compiled contract.
#[derive(Clone, Debug, Deserialize)]
pub struct Contract {
    /// The name of the artifact this contract was loaded from.
    #[serde(skip)]
    pub name: String,

    /// The contract ABI.
    pub abi: Option<Value>,

    /// The contract deployment bytecode.
    pub bytecode: Option<Bytecode>,
}

impl Contract {
    /// Returns the contract's ABI, or an error naming the artifact if the
    /// field is absent.
    pub fn require_abi(&self) -> Result<&Value, ArtifactError> {
        self.abi
            .as_ref()
            .ok_or_else(|| ArtifactError::MissingAbi(self.name.clone()))
    }

    /// Returns the contract's bytecode payload, or an error naming the
    /// artifact if the field is absent.
    pub fn require_bytecode(&self) -> Result<&str, ArtifactError> {
        self.bytecode
            .as_ref()
            .map(|bytecode| bytecode.object.as_str())
            .ok_or_else(|| ArtifactError::MissingBytecode(self.name.clone()))
    }
}

/// A contract's compiled bytecode as emitted by the compiler.
#[derive(Clone, Debug, Deserialize)]
pub struct Bytecode {
    /// The hex payload, exactly as it appears in the artifact. No `0x`
    /// prefix is stripped or added.
    pub object: String,
}

/// Loads forge artifacts from a compilation output directory.
pub struct ForgeLoader {
    /// The artifacts root, usually the `out` directory of a forge project.
    root: PathBuf,
}

impl ForgeLoader {
    /// Creates a loader rooted at the given artifacts directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ForgeLoader { root: root.into() }
    }

    /// Returns the path at which the named contract's artifact resides.
    pub fn contract_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.sol", name))
            .join(format!("{}.json", name))
    }

    /// Loads the named contract's artifact from disk.
    pub fn load_contract(&self, name: &str) -> Result<Contract, ArtifactError> {
        let file = File::open(self.contract_path(name))?;
        let reader = BufReader::new(file);
        self.parse_contract(name, reader, from_reader)
    }

    /// Loads a contract from a string of artifact JSON.
    pub fn load_contract_from_str(&self, name: &str, json: &str) -> Result<Contract, ArtifactError> {
        self.parse_contract(name, json, from_str)
    }

    /// Returns the artifacts root this loader reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn parse_contract<T>(
        &self,
        name: &str,
        source: T,
        parser: impl FnOnce(T) -> serde_json::Result<Contract>,
    ) -> Result<Contract, ArtifactError> {
        let mut contract = parser(source)?;
        contract.name = name.to_string();
        Ok(contract)
    }
}

//! Code generation for the exports module.
//!
//! The module is rendered from an ordered list of [`Export`]s. Each export
//! contributes one ABI string constant; deployable exports additionally
//! contribute a bytecode string constant, emitted after all ABI constants.

use crate::artifact::Contract;
use crate::{rustfmt, util};
use anyhow::Result;
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A single contract export: a parsed artifact together with the names of
/// the constants generated for it.
pub struct Export {
    /// The name of the generated ABI constant, e.g. `MASTER_ABI`. Must be a
    /// valid Rust identifier.
    pub constant: String,

    /// The name of an additional deployment bytecode constant, for
    /// deployable contracts only.
    pub bytecode_constant: Option<String>,

    /// The parsed contract artifact.
    pub contract: Contract,
}

impl Export {
    /// Creates an export of a contract's ABI under the given constant name.
    pub fn abi(constant: impl Into<String>, contract: Contract) -> Self {
        Export {
            constant: constant.into(),
            bytecode_constant: None,
            contract,
        }
    }

    /// Additionally exports the contract's deployment bytecode under the
    /// given constant name.
    pub fn with_bytecode(mut self, constant: impl Into<String>) -> Self {
        self.bytecode_constant = Some(constant.into());
        self
    }
}

/// Builder for generating the exports module. Note that no code is
/// generated until the builder is finalized with `generate`.
pub struct ExportsBuilder {
    /// Format generated code using locally installed copy of `rustfmt`.
    pub rustfmt: bool,
}

impl ExportsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        ExportsBuilder { rustfmt: true }
    }

    /// Specifies whether or not to format the code using a locally
    /// installed copy of `rustfmt`.
    ///
    /// Note that in case `rustfmt` does not exist or produces an error, the
    /// unformatted code will be used.
    pub fn rustfmt(mut self, rustfmt: bool) -> Self {
        self.rustfmt = rustfmt;
        self
    }

    /// Generates the exports module for the given contracts. Constants
    /// appear in the order of the given exports.
    pub fn generate(self, exports: &[Export]) -> Result<ExportsBindings> {
        let rustfmt = self.rustfmt;
        Ok(ExportsBindings {
            tokens: expand_exports(exports)?,
            rustfmt,
        })
    }
}

impl Default for ExportsBuilder {
    fn default() -> Self {
        ExportsBuilder::new()
    }
}

fn expand_exports(exports: &[Export]) -> Result<TokenStream> {
    let mut abis = Vec::with_capacity(exports.len());
    let mut bytecodes = Vec::new();

    for export in exports {
        let name = util::ident(&export.constant);
        let abi = serde_json::to_string(export.contract.require_abi()?)?;
        let value = Literal::string(&abi);
        abis.push(quote! {
            pub const #name: &str = #value;
        });

        if let Some(constant) = &export.bytecode_constant {
            let name = util::ident(constant);
            let value = Literal::string(export.contract.require_bytecode()?);
            bytecodes.push(quote! {
                pub const #name: &str = #value;
            });
        }
    }

    Ok(quote! {
        #(#abis)*
        #(#bytecodes)*
    })
}

/// Exports module generated by an [`ExportsBuilder`]. This type can be
/// written to a file or converted into a token stream.
#[derive(Debug)]
pub struct ExportsBindings {
    /// The TokenStream representing the generated constants.
    pub tokens: TokenStream,

    /// Format generated code using locally installed copy of `rustfmt`.
    pub rustfmt: bool,
}

impl ExportsBindings {
    /// Specifies whether or not to format the code using a locally
    /// installed copy of `rustfmt`.
    ///
    /// Note that in case `rustfmt` does not exist or produces an error, the
    /// unformatted code will be used.
    pub fn rustfmt(mut self, rustfmt: bool) -> Self {
        self.rustfmt = rustfmt;
        self
    }

    /// Writes the generated module to a given `Write`.
    pub fn write(&self, mut w: impl Write) -> Result<()> {
        let source = {
            let raw = self.tokens.to_string();

            if self.rustfmt {
                rustfmt::format(&raw).unwrap_or(raw)
            } else {
                raw
            }
        };

        w.write_all(source.as_bytes())?;
        Ok(())
    }

    /// Writes the generated module to the specified file, creating it or
    /// fully overwriting any prior content.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write(writer)
    }

    /// Converts the bindings into the underlying token stream.
    pub fn into_tokens(self) -> TokenStream {
        self.tokens
    }
}

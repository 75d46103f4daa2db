#![deny(missing_docs, unsafe_code)]

//! Crate for generating a Rust module that re-exports compiled smart
//! contract artifacts as constants. This crate is intended to be run as a
//! build pipeline step immediately after `forge build`, reading the
//! artifacts it produced and writing a single source file for downstream
//! crates to include.

pub mod artifact;
pub mod errors;

mod generate;
mod rustfmt;
mod util;

pub use crate::artifact::{Bytecode, Contract, ForgeLoader};
pub use crate::errors::ArtifactError;
pub use crate::generate::{Export, ExportsBindings, ExportsBuilder};

use proc_macro2::{Ident, Span};

/// Expands an identifier string into a token.
///
/// # Panics
///
/// Panics if the string is not a valid Rust identifier.
pub fn ident(name: &str) -> Ident {
    Ident::new(name, Span::call_site())
}

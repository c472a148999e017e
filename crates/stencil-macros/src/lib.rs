extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `stencil::Model` from a struct's named fields.
///
/// Field attributes: `#[key]`, `#[deletion_flag]`, `#[skip]` and
/// `#[column("name")]`. The struct may carry `#[table = "name"]`; otherwise
/// the table is the pluralized snake_case type name.
///
/// The generated `Model::statements()` resolves the model with
/// `Config::default()`, whose key fallback only matches a field named
/// exactly `Id`. A Rust-style `id: u64` field therefore fails with a
/// missing primary key error unless it is annotated with `#[key]`, or the
/// model is registered in a `Registry` built with `Config::snake_case()`.
///
/// ```ignore
/// #[derive(stencil::Model)]
/// struct Device {
///     #[key]
///     id: u64,
///     name: String,
/// }
/// ```
#[proc_macro_derive(Model, attributes(key, deletion_flag, skip, column, table))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match stencil_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

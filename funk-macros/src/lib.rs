#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions)]

use proc_macro::TokenStream;

mod misc;
mod with_mocks;

/// Provide a fresh `funk::Mocks` registry to a test and verify it once the
/// test body finished successfully.
///
/// The wrapped function takes exactly one parameter, a reference to the
/// registry. Place the attribute above `#[test]`.
///
/// ```ignore
/// #[funk::with_mocks]
/// #[test]
/// fn saves_data(mocks: &funk::Mocks) {
///     let database = mocks.mock_named("database");
///     database.expects("save").unwrap();
///
///     database.invoke("save", funk::args!()).unwrap();
/// }
/// ```
#[proc_macro_attribute]
pub fn with_mocks(attr: TokenStream, item: TokenStream) -> TokenStream {
    with_mocks::exec(attr.into(), item.into()).into()
}

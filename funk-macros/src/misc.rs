use proc_macro2::Ident;
use quote::format_ident;

#[cfg(feature = "force-name")]
pub(crate) fn ident_funk() -> Ident {
    format_ident!("funk")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_funk() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("funk") {
        Ok(FoundCrate::Itself) => format_ident!("crate"),
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Err(_) => format_ident!("funk"),
    }
}

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse2, punctuated::Punctuated, spanned::Spanned, Error, FnArg, ItemFn, PatType,
    Result as ParseResult, ReturnType, Signature,
};

use crate::misc::ident_funk;

pub fn exec(attr: TokenStream, item: TokenStream) -> TokenStream {
    let tokens = match expand(attr, item) {
        Ok(tokens) => tokens,
        Err(err) => return err.to_compile_error(),
    };

    #[cfg(feature = "debug")]
    println!("\nwith_mocks:\n{tokens:#}\n");

    tokens
}

fn expand(attr: TokenStream, item: TokenStream) -> ParseResult<TokenStream> {
    if !attr.is_empty() {
        return Err(Error::new(attr.span(), "with_mocks does not take any arguments"));
    }

    let ItemFn {
        attrs,
        vis,
        mut sig,
        block,
    } = parse2(item)?;

    if let Some(asyncness) = &sig.asyncness {
        return Err(Error::new(
            asyncness.span(),
            "with_mocks does not support async functions",
        ));
    }

    let PatType { pat, ty, .. } = registry_param(&sig)?;

    let output = match &sig.output {
        ReturnType::Default => quote!(()),
        ReturnType::Type(_, ty) => quote!(#ty),
    };

    sig.inputs = Punctuated::new();

    let funk = ident_funk();

    Ok(quote! {
        #( #attrs )*
        #vis #sig {
            let __funk_mocks = #funk::Mocks::new();
            let outcome = (|#pat: #ty| -> #output #block)(&__funk_mocks);

            if #funk::misc::Outcome::is_success(&outcome) {
                if let Err(err) = __funk_mocks.verify() {
                    panic!("{}", err);
                }
            }

            outcome
        }
    })
}

fn registry_param(sig: &Signature) -> ParseResult<PatType> {
    let mut iter = sig.inputs.iter();

    match (iter.next(), iter.next()) {
        (None, _) => Err(Error::new(sig.ident.span(), "mocks have already been set")),
        (Some(FnArg::Typed(param)), None) => Ok(param.clone()),
        (Some(FnArg::Receiver(receiver)), _) => Err(Error::new(
            receiver.span(),
            "with_mocks can not be used on methods",
        )),
        (Some(_), Some(extra)) => Err(Error::new(
            extra.span(),
            "with_mocks expects exactly one parameter: the mock registry",
        )),
    }
}

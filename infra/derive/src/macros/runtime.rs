use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

/// Expands `#[hhub_runtime::main(profile)]`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    main_tokens(args, input).unwrap_or_else(Error::into_compile_error)
}

fn main_tokens(args: TokenStream, input: ItemFn) -> syn::Result<TokenStream> {
    if input.sig.asyncness.is_none() {
        return Err(Error::new_spanned(
            &input.sig.fn_token,
            "#[hhub_runtime::main] can only be applied to `async fn`",
        ));
    }
    if !returns_result(&input.sig.output) {
        return Err(Error::new_spanned(
            &input.sig.ident,
            "#[hhub_runtime::main] requires the function to return a `Result`",
        ));
    }

    let profile = profile_constructor(args)?;
    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    Ok(quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #profile;
            let runtime = ::hhub_runtime::build_runtime_with_config(&config)?;
            runtime.block_on(async move #block)
        }
    })
}

fn profile_constructor(args: TokenStream) -> syn::Result<TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::hhub_runtime::RuntimeConfig::default() });
    }

    let profile: Ident = syn::parse2(args)?;
    match profile.to_string().as_str() {
        "default" => Ok(quote! { ::hhub_runtime::RuntimeConfig::default() }),
        "high_performance" => Ok(quote! { ::hhub_runtime::RuntimeConfig::high_performance() }),
        "memory_efficient" => Ok(quote! { ::hhub_runtime::RuntimeConfig::memory_efficient() }),
        _ => Err(Error::new_spanned(
            profile,
            "unknown runtime profile; expected high_performance, memory_efficient or default",
        )),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    matches!(
        &**ty,
        Type::Path(path) if path.path.segments.last().is_some_and(|s| s.ident == "Result")
    )
}

use proc_macro::TokenStream;
use quote::quote;
use syn::Error;
use syn::spanned::Spanned;

/// This will start a preconfigured runtime for your App. Make sure you have a Default implementation
/// and an `AppState` implementation for the annotated type.
#[proc_macro_derive(OrreryApp)]
pub fn orrery_app(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    if !input.generics.params.is_empty() {
        return Error::new(
            input.generics.span(),
            "OrreryApp can only be derived for types without generic parameters",
        )
        .to_compile_error()
        .into();
    }

    let logger = cfg!(feature = "derive_env_logger").then(|| {
        quote!(
            ::orrery::env_logger::builder()
                .filter_level(::orrery::log::LevelFilter::Info)
                .parse_default_env()
                .init();
        )
    });

    let app_name = &input.ident;

    quote! {
        fn main() {
            let app = ::orrery::AppRuntime::default_config(#app_name::default())
                .with_title(stringify!(#app_name));

            #logger

            if let Err(e) = ::orrery::AppSettings::run(app) {
                ::orrery::log::error!("{e}");
            }
        }
    }
    .into()
}

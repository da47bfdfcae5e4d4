use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
    Token,
};

/// One `name = <expr>` argument inside the `error` attribute.
struct ReportArg {
    name: Ident,
    value: Expr,
}

impl Parse for ReportArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse()?;
        Ok(Self { name, value })
    }
}

/// The full contents of the `error` attribute.
struct ReportSpec {
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ReportSpec {
    fn parse(input: ParseStream) -> Result<Self> {
        let span = input.span();
        let mut message = None;
        let mut labels = None;
        let mut help = None;

        for arg in Punctuated::<ReportArg, Token![,]>::parse_terminated(input)? {
            let slot = match arg.name.to_string().as_str() {
                "message" => &mut message,
                "labels" => &mut labels,
                "help" => &mut help,
                other => {
                    return Err(syn::Error::new(
                        arg.name.span(),
                        format!("unknown tag `{}`", other),
                    ));
                },
            };
            if slot.replace(arg.value).is_some() {
                return Err(syn::Error::new(arg.name.span(), "duplicate tag"));
            }
        }

        let message = message
            .ok_or_else(|| syn::Error::new(span, "the `message` tag is required"))?;
        Ok(Self { message, labels, help })
    }
}

/// Creates a `let` binding that destructures `self` into its named fields, so the expressions in
/// the `error` attribute can refer to them directly.
fn destructure_fields(name: &Ident, fields: &Fields) -> Result<TokenStream2> {
    match fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| field.ident.as_ref());
            Ok(quote! { let #name { #(#names),* } = self; })
        },
        Fields::Unit => Ok(quote! {}),
        Fields::Unnamed(_) => Err(syn::Error::new_spanned(
            fields,
            "`ErrorKind` cannot be derived for tuple structs",
        )),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream2> {
    let name = &input.ident;
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "`ErrorKind` can only be derived for structs",
        ));
    };

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("error"))
        .ok_or_else(|| syn::Error::new_spanned(name, "missing `#[error(...)]` attribute"))?;
    let spec: ReportSpec = attr.parse_args()?;

    let destructure = destructure_fields(name, &data.fields)?;
    let message = &spec.message;
    let labels = spec.labels.as_ref().map_or(quote! { [""] }, |labels| quote! { #labels });
    let help = spec.help.as_ref().map(|help| quote! { builder.set_help(#help); });

    Ok(quote! {
        impl ErrorKind for #name {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #destructure

                // the builder is only mutated when the error kind declares help text
                #[allow(unused_mut)]
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, spans[0].start)
                    .with_message(#message)
                    .with_labels(
                        #labels
                            .into_iter()
                            .zip(spans.iter().cloned())
                            .map(|(label_str, span)| {
                                let label = ariadne::Label::new((src_id, span))
                                    .with_color(fx_error::EXPR);

                                if label_str.is_empty() {
                                    label
                                } else {
                                    label.with_message(label_str)
                                }
                            })
                            .collect::<Vec<_>>()
                    );

                #help
                builder.finish()
            }
        }
    })
}

/// Derives the `ErrorKind` trait for the given struct.
///
/// The report built for the error is described by the `error` attribute:
/// ```
/// use fx_attrs::ErrorKind;
/// use fx_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of file", labels = ["add something here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                  |
/// | --------- | ---------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the error when it is displayed.          |
/// | `labels`  | An iterable of label texts, paired with the error's spans in order.          |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression; for structs with named fields, the fields are in scope in the
/// expression (tuple structs are not supported). An empty label text leaves its span highlighted
/// but unlabeled.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

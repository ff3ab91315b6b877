//! Derive macros for cairn descriptors.
//!
//! - `Descriptor`: implements the descriptor trait for a struct of `Attribute` fields and adds one typed,
//!   memoizing method per field.
//!
//! Generated code names items through `::cairn::__private`, so a crate that depends on `cairn` alone can use the
//! derive. `#[descriptor(crate = "...")]` points it at a renamed `cairn` dependency.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, LitStr, Path, parse_macro_input};

/// Implements the `cairn` descriptor trait for a struct whose named fields are attribute slots.
///
/// The descriptor kind comes from a required container attribute: `#[descriptor(kind = "item")]` or
/// `#[descriptor(kind = "collection")]`. Every named field becomes an attribute, in declaration order, and gets a
/// typed method of the same name.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Default, Descriptor)]
/// #[descriptor(kind = "item")]
/// pub struct ItemDescriptor {
///     href: Attribute,
/// }
///
/// // Generates:
/// impl ::cairn::__private::Descriptor for ItemDescriptor {
///     const KIND: DescriptorKind = DescriptorKind::Item;
///     fn attribute_names() -> &'static [&'static str] { &["href"] }
///     fn slot(&self, name: &str) -> Option<&Attribute> { /* match on name */ }
/// }
/// impl ItemDescriptor {
///     pub fn href<A: Args>(&self, args: A) -> &[Value] { ::cairn::__private::call_typed(&self.href, "href", args) }
/// }
/// ```
#[proc_macro_derive(Descriptor, attributes(descriptor))]
pub fn derive_descriptor(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_descriptor(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Container options read from `#[descriptor(...)]`.
struct DescriptorOptions {
    kind: syn::Ident,
    krate: Path,
}

fn expand_descriptor(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let DescriptorOptions { kind, krate } = descriptor_options(input)?;
    let private = quote!(#krate::__private);

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Descriptor can only be derived for structs with named attribute fields",
                ));
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "Descriptor can only be derived for structs")),
    };

    let idents: Vec<_> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();
    let names: Vec<String> = idents.iter().map(|i| i.to_string()).collect();
    let docs: Vec<String> = names
        .iter()
        .map(|n| format!("Call the memoizing `{n}` attribute; the first call fixes its value."))
        .collect();

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #private::Descriptor for #name #ty_generics #where_clause {
            const KIND: #private::DescriptorKind = #private::DescriptorKind::#kind;

            fn attribute_names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn slot(&self, name: &str) -> ::core::option::Option<&#private::Attribute> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            #(
                #[doc = #docs]
                pub fn #idents<A: #private::Args>(&self, args: A) -> &[#private::Value] {
                    #private::call_typed(&self.#idents, #names, args)
                }
            )*
        }
    })
}

/// Read `#[descriptor(kind = "...", crate = "...")]`.
fn descriptor_options(input: &DeriveInput) -> syn::Result<DescriptorOptions> {
    let mut kind = None;
    let mut krate: Path = syn::parse_quote!(::cairn);
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("descriptor")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("kind") {
                let lit: LitStr = meta.value()?.parse()?;
                let variant = match lit.value().as_str() {
                    "item" => "Item",
                    "collection" => "Collection",
                    other => {
                        return Err(syn::Error::new_spanned(
                            &lit,
                            format!("unknown descriptor kind `{other}` (expected \"item\" or \"collection\")"),
                        ));
                    }
                };
                kind = Some(format_ident!("{}", variant, span = lit.span()));
                Ok(())
            } else if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                krate = lit.parse()?;
                Ok(())
            } else {
                Err(meta.error("unsupported descriptor option (expected `kind` or `crate`)"))
            }
        })?;
    }
    let kind = kind.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "missing #[descriptor(kind = \"item\" | \"collection\")] attribute",
        )
    })?;
    Ok(DescriptorOptions { kind, krate })
}

//! The two built-in descriptor variants.
//!
//! They are structurally identical today (both expose `href`) but are separate types so their attribute sets can
//! diverge, and so a block written for one kind cannot be evaluated against the other. The struct fields are the
//! only record of which attributes a kind exposes; [`attribute_names`] reads them back for tooling.

use cairn_core::{Args, Attribute, Descriptor, DescriptorKind, Value};
use cairn_derive::Descriptor;

/// Descriptor stored by `define_item` and read through `item()`.
#[derive(Debug, Default, Descriptor)]
#[descriptor(kind = "item")]
pub struct ItemDescriptor {
    href: Attribute,
}

/// Descriptor stored by `define_collection` and read through `collection()`.
#[derive(Debug, Default, Descriptor)]
#[descriptor(kind = "collection")]
pub struct CollectionDescriptor {
    href: Attribute,
}

/// Attribute names exposed by the built-in descriptor of `kind`, in declaration order.
pub fn attribute_names(kind: DescriptorKind) -> &'static [&'static str] {
    match kind {
        DescriptorKind::Item => ItemDescriptor::attribute_names(),
        DescriptorKind::Collection => CollectionDescriptor::attribute_names(),
    }
}

/// Body of the typed attribute methods generated by `#[derive(Descriptor)]`.
#[doc(hidden)]
pub fn call_typed<'a, A: Args>(attribute: &'a Attribute, name: &str, args: A) -> &'a [Value] {
    let args = args.into_values();
    if !args.is_empty() && attribute.is_set() {
        tracing::trace!(attribute = name, ignored = args.len(), "attribute already fixed");
    }
    attribute.set_if_unset(args)
}

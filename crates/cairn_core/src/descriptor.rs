//! The descriptor contract.
//!
//! A descriptor is a fixed set of named [`Attribute`] slots. Each variant (item, collection) is its own type so
//! the attribute sets can diverge without sharing state; both currently expose `href`.
//!
//! Implementations are normally generated with `#[derive(Descriptor)]` from `cairn_derive`, which also adds one
//! typed method per attribute field.

use std::fmt;

use crate::attribute::Attribute;
use crate::errors::DslError;
use crate::value::Value;

/// Which class-scoped slot a descriptor lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DescriptorKind {
    Item,
    Collection,
}

impl DescriptorKind {
    pub const ALL: [DescriptorKind; 2] = [DescriptorKind::Item, DescriptorKind::Collection];

    /// Return the lowercase name used by the DSL (`"item"`, `"collection"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            DescriptorKind::Item => "item",
            DescriptorKind::Collection => "collection",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An object exposing named, memoizing attribute operations.
///
/// ## Notes
/// - `Default` must produce a descriptor with every slot unset.
/// - Name lookup is exact and case-sensitive.
///
/// ## Examples
/// ```rust
/// use cairn_core::{Attribute, Descriptor, DescriptorKind, DslError};
///
/// #[derive(Debug, Default)]
/// struct Link {
///     href: Attribute,
/// }
///
/// impl Descriptor for Link {
///     const KIND: DescriptorKind = DescriptorKind::Item;
///
///     fn attribute_names() -> &'static [&'static str] {
///         &["href"]
///     }
///
///     fn slot(&self, name: &str) -> Option<&Attribute> {
///         match name {
///             "href" => Some(&self.href),
///             _ => None,
///         }
///     }
/// }
///
/// let link = Link::default();
/// assert_eq!(link.call("href", vec!["a".into()]).unwrap(), ["a"]);
/// assert!(matches!(link.call("rel", vec![]), Err(DslError::UnknownAttribute { .. })));
/// ```
pub trait Descriptor: Default + fmt::Debug + Send + Sync + 'static {
    /// The class-scoped slot this descriptor type is stored in.
    const KIND: DescriptorKind;

    /// Attribute names this variant recognizes, in declaration order.
    fn attribute_names() -> &'static [&'static str];

    /// Look up the slot backing `name`.
    fn slot(&self, name: &str) -> Option<&Attribute>;

    /// Call attribute `name` with `args`, memoizing on first call.
    ///
    /// ## Errors
    /// - [`DslError::UnknownAttribute`] if this variant has no attribute called `name`. No slot is touched.
    fn call(&self, name: &str, args: Vec<Value>) -> Result<&[Value], DslError> {
        let slot = self.slot(name).ok_or_else(|| unknown_attribute::<Self>(name))?;
        Ok(slot.set_if_unset(args))
    }

    /// Read attribute `name` without fixing it.
    ///
    /// ## Returns
    /// - `Ok(None)` if the attribute exists but was never called.
    ///
    /// ## Errors
    /// - [`DslError::UnknownAttribute`] if this variant has no attribute called `name`.
    fn get(&self, name: &str) -> Result<Option<&[Value]>, DslError> {
        let slot = self.slot(name).ok_or_else(|| unknown_attribute::<Self>(name))?;
        Ok(slot.get())
    }

    /// Return every attribute with its current value, in declaration order.
    fn attributes(&self) -> Vec<(&'static str, Option<&[Value]>)> {
        Self::attribute_names()
            .iter()
            .map(|&name| (name, self.slot(name).and_then(Attribute::get)))
            .collect()
    }
}

fn unknown_attribute<D: Descriptor>(name: &str) -> DslError {
    DslError::UnknownAttribute {
        kind: D::KIND,
        attribute: name.to_string(),
        expected: D::attribute_names().join(", "),
    }
}

//! Class-scoped descriptor storage and the host-facing `Builder` trait.
//!
//! Every host type that implements [`Builder`] gets its own pair of slots (`item`, `collection`) in a
//! process-wide registry keyed by the host's `TypeId`. Entry points evaluate a block and replace the slot;
//! accessors hand out the stored `Arc`, so all instances of a host observe the same descriptor.
//!
//! ## Notes
//! - A slot moves `Empty → Defined` only through its `define_*` entry point and never back.
//! - Redefining replaces the stored descriptor wholesale. `Arc`s handed out earlier keep pointing at the old one.
//! - The registry lock is never held while a block runs.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use cairn_core::{Descriptor, DescriptorKind, DslError};
use parking_lot::RwLock;

use crate::descriptors::{CollectionDescriptor, ItemDescriptor};
use crate::evaluator::{Scope, evaluate};

static REGISTRY: LazyLock<RwLock<HashMap<TypeId, ClassDefinitions>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// The descriptors stored for one host type.
#[derive(Debug, Clone, Default)]
pub struct ClassDefinitions {
    pub item: Option<Arc<ItemDescriptor>>,
    pub collection: Option<Arc<CollectionDescriptor>>,
}

impl ClassDefinitions {
    /// State of the slot for `kind`.
    pub fn state(&self, kind: DescriptorKind) -> SlotState {
        let defined = match kind {
            DescriptorKind::Item => self.item.is_some(),
            DescriptorKind::Collection => self.collection.is_some(),
        };
        if defined { SlotState::Defined } else { SlotState::Empty }
    }
}

/// Lifecycle of a class-scoped descriptor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// No `define_*` call has succeeded for this host and kind.
    Empty,
    /// A descriptor is stored.
    Defined,
}

/// Maps a descriptor type to its field in [`ClassDefinitions`].
trait ClassSlot: Descriptor {
    fn entry(defs: &ClassDefinitions) -> &Option<Arc<Self>>;
    fn entry_mut(defs: &mut ClassDefinitions) -> &mut Option<Arc<Self>>;
}

impl ClassSlot for ItemDescriptor {
    fn entry(defs: &ClassDefinitions) -> &Option<Arc<Self>> {
        &defs.item
    }

    fn entry_mut(defs: &mut ClassDefinitions) -> &mut Option<Arc<Self>> {
        &mut defs.item
    }
}

impl ClassSlot for CollectionDescriptor {
    fn entry(defs: &ClassDefinitions) -> &Option<Arc<Self>> {
        &defs.collection
    }

    fn entry_mut(defs: &mut ClassDefinitions) -> &mut Option<Arc<Self>> {
        &mut defs.collection
    }
}

/// A host type with class-scoped `item` and `collection` descriptors.
///
/// Implement it with an empty `impl` block; every method has a default.
///
/// ## Examples
/// ```rust
/// use cairn::{Builder, define_item};
///
/// struct Widgets;
/// impl Builder for Widgets {}
///
/// define_item!(Widgets {
///     href("item-href")
/// })
/// .unwrap();
///
/// assert_eq!(Widgets.item().unwrap().href(()), ["item-href"]);
/// assert!(Widgets.collection().is_none());
/// ```
pub trait Builder: 'static {
    /// Name used in diagnostics. Defaults to the unqualified type name.
    fn class_name() -> &'static str {
        let full = type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Evaluate `block` against a fresh item descriptor and store it for this host.
    ///
    /// ## Errors
    /// - [`DslError::MissingBlock`] if `block` is `None`.
    /// - Any error from the block; the stored descriptor is left unchanged.
    fn define_item<F>(block: Option<F>) -> Result<(), DslError>
    where
        F: FnOnce(&Scope<ItemDescriptor>) -> Result<(), DslError>,
    {
        define::<Self, ItemDescriptor, F>(block)
    }

    /// Evaluate `block` against a fresh collection descriptor and store it for this host.
    ///
    /// ## Errors
    /// - [`DslError::MissingBlock`] if `block` is `None`.
    /// - Any error from the block; the stored descriptor is left unchanged.
    fn define_collection<F>(block: Option<F>) -> Result<(), DslError>
    where
        F: FnOnce(&Scope<CollectionDescriptor>) -> Result<(), DslError>,
    {
        define::<Self, CollectionDescriptor, F>(block)
    }

    /// The host's item descriptor, or `None` before `define_item` ran.
    fn item(&self) -> Option<Arc<ItemDescriptor>> {
        lookup::<Self, ItemDescriptor>()
    }

    /// The host's collection descriptor, or `None` before `define_collection` ran.
    fn collection(&self) -> Option<Arc<CollectionDescriptor>> {
        lookup::<Self, CollectionDescriptor>()
    }

    /// The host's item descriptor.
    ///
    /// ## Errors
    /// - [`DslError::NullDereference`] if `define_item` never ran for this host.
    fn require_item(&self) -> Result<Arc<ItemDescriptor>, DslError> {
        require::<Self, ItemDescriptor>()
    }

    /// The host's collection descriptor.
    ///
    /// ## Errors
    /// - [`DslError::NullDereference`] if `define_collection` never ran for this host.
    fn require_collection(&self) -> Result<Arc<CollectionDescriptor>, DslError> {
        require::<Self, CollectionDescriptor>()
    }

    /// Snapshot of this host's stored descriptors.
    fn definitions() -> ClassDefinitions {
        REGISTRY.read().get(&TypeId::of::<Self>()).cloned().unwrap_or_default()
    }

    /// State of this host's slot for `kind`.
    fn slot_state(kind: DescriptorKind) -> SlotState {
        REGISTRY
            .read()
            .get(&TypeId::of::<Self>())
            .map_or(SlotState::Empty, |defs| defs.state(kind))
    }
}

fn define<H, D, F>(block: Option<F>) -> Result<(), DslError>
where
    H: Builder + ?Sized,
    D: ClassSlot,
    F: FnOnce(&Scope<D>) -> Result<(), DslError>,
{
    let class = H::class_name();
    let block = block.ok_or(DslError::MissingBlock { class, kind: D::KIND })?;
    let descriptor = evaluate(D::default(), block)?;

    let replaced = {
        let mut registry = REGISTRY.write();
        let defs = registry.entry(TypeId::of::<H>()).or_default();
        D::entry_mut(defs).replace(Arc::new(descriptor)).is_some()
    };
    tracing::debug!(class, kind = %D::KIND, replaced, "descriptor defined");
    Ok(())
}

fn lookup<H, D>() -> Option<Arc<D>>
where
    H: Builder + ?Sized,
    D: ClassSlot,
{
    REGISTRY.read().get(&TypeId::of::<H>()).and_then(|defs| D::entry(defs).clone())
}

fn require<H, D>() -> Result<Arc<D>, DslError>
where
    H: Builder + ?Sized,
    D: ClassSlot,
{
    lookup::<H, D>().ok_or(DslError::NullDereference {
        class: H::class_name(),
        kind: D::KIND,
    })
}

//! Scoped block evaluation.
//!
//! A configuration block is a closure taking `&Scope<D>`. For the duration of the block the scope owns the
//! descriptor, so every call the block makes, by name through [`Scope::call`] or typed through `Deref`, lands on
//! that descriptor. When the block returns the scope is unwrapped and the populated descriptor handed back.
//!
//! ## Notes
//! - Blocks run synchronously, exactly once, to completion.
//! - Evaluation is not reentrant on a thread: starting another evaluation from inside a block fails with
//!   [`DslError::NestedEvaluation`].

use std::cell::Cell;
use std::ops::Deref;

use cairn_core::{Args, Descriptor, DescriptorKind, DslError, Value};

thread_local! {
    static EVALUATING: Cell<bool> = const { Cell::new(false) };
}

/// The receiver a configuration block runs against.
#[derive(Debug)]
pub struct Scope<D> {
    target: D,
}

/// The block type used when no block is supplied (`define_item!(Host)`).
pub type NoBlock<D> = fn(&Scope<D>) -> Result<(), DslError>;

impl<D: Descriptor> Scope<D> {
    /// Call attribute `name` on the scoped descriptor.
    ///
    /// ## Errors
    /// - [`DslError::UnknownAttribute`] if `name` is not an attribute of `D`.
    pub fn call<A: Args>(&self, name: &str, args: A) -> Result<&[Value], DslError> {
        let args = args.into_values();
        if !args.is_empty() && self.target.get(name)?.is_some() {
            tracing::trace!(attribute = name, ignored = args.len(), "attribute already fixed");
        }
        self.target.call(name, args)
    }

    /// Read attribute `name` without fixing it.
    pub fn get(&self, name: &str) -> Result<Option<&[Value]>, DslError> {
        self.target.get(name)
    }
}

impl<D> Deref for Scope<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.target
    }
}

/// Resets the thread's evaluation flag, including when a block panics.
struct EvaluationGuard;

impl EvaluationGuard {
    fn enter(kind: DescriptorKind) -> Result<Self, DslError> {
        if EVALUATING.with(|flag| flag.replace(true)) {
            return Err(DslError::NestedEvaluation { kind });
        }
        Ok(EvaluationGuard)
    }
}

impl Drop for EvaluationGuard {
    fn drop(&mut self) {
        EVALUATING.with(|flag| flag.set(false));
    }
}

/// Run `block` against `descriptor` and return the populated descriptor.
///
/// ## Errors
/// - [`DslError::NestedEvaluation`] if called from inside a running block.
/// - Any error the block returns, typically [`DslError::UnknownAttribute`]. The descriptor is dropped.
#[tracing::instrument(skip_all, fields(kind = %D::KIND))]
pub fn evaluate<D, F>(descriptor: D, block: F) -> Result<D, DslError>
where
    D: Descriptor,
    F: FnOnce(&Scope<D>) -> Result<(), DslError>,
{
    let _guard = EvaluationGuard::enter(D::KIND)?;
    let scope = Scope { target: descriptor };
    block(&scope)?;
    tracing::trace!(attributes = ?scope.target.attributes(), "block evaluated");
    Ok(scope.target)
}

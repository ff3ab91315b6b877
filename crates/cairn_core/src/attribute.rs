//! The memoizing attribute slot.
//!
//! An [`Attribute`] is a single value holder with first-write-wins semantics: the first call fixes the stored
//! sequence, and every later call returns that sequence regardless of the arguments it was given.
//!
//! ## Notes
//! - A slot that was never called reads as absent ([`Attribute::get`] returns `None`).
//! - A slot whose first call had no arguments is permanently fixed to the empty sequence. This is distinct from
//!   “never called”.
//! - Slots are `Sync`; the fixed value is published once and can be read from any thread afterwards.

use std::fmt;
use std::sync::OnceLock;

use crate::value::{Args, Value};

/// A memoizing attribute slot.
///
/// ## Examples
/// ```rust
/// use cairn_core::Attribute;
///
/// let href = Attribute::new();
/// assert_eq!(href.get(), None);
/// assert_eq!(href.call(("x", "y")), ["x", "y"]);
/// assert_eq!(href.call(()), ["x", "y"]);
/// ```
#[derive(Default)]
pub struct Attribute {
    value: OnceLock<Vec<Value>>,
}

impl Attribute {
    /// Create an unset slot.
    pub const fn new() -> Self {
        Self { value: OnceLock::new() }
    }

    /// Call the slot: fix `args` if unset, then return the fixed sequence.
    ///
    /// ## Parameters
    /// - `args`: positional values for this call. Ignored if the slot is already set.
    ///
    /// ## Returns
    /// - The sequence fixed by the first call on this slot.
    pub fn call<A: Args>(&self, args: A) -> &[Value] {
        match self.value.get() {
            Some(fixed) => fixed,
            None => self.set_if_unset(args.into_values()),
        }
    }

    /// Store `values` unless a value is already fixed; return the fixed sequence either way.
    pub fn set_if_unset(&self, values: Vec<Value>) -> &[Value] {
        self.value.get_or_init(|| values)
    }

    /// Read the fixed sequence without fixing anything.
    pub fn get(&self) -> Option<&[Value]> {
        self.value.get().map(Vec::as_slice)
    }

    /// Return true once the slot holds a fixed value (including the empty sequence).
    pub fn is_set(&self) -> bool {
        self.value.get().is_some()
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(values) => f.debug_tuple("Attribute").field(&values).finish(),
            None => f.write_str("Attribute(<unset>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // First-write-wins
    // ========================================

    #[test]
    fn first_call_fixes_value() {
        let slot = Attribute::new();
        assert_eq!(slot.call("item-href"), ["item-href"]);
        assert_eq!(slot.get(), Some(&[Value::from("item-href")][..]));
    }

    #[test]
    fn later_arguments_are_ignored() {
        let slot = Attribute::new();
        slot.call("a");
        assert_eq!(slot.call("b"), ["a"]);
        assert_eq!(slot.call(("c", "d")), ["a"]);
        assert_eq!(slot.call(()), ["a"]);
    }

    #[test]
    fn set_if_unset_does_not_overwrite() {
        let slot = Attribute::new();
        assert_eq!(slot.set_if_unset(vec![Value::from(1)]), [1]);
        assert_eq!(slot.set_if_unset(vec![Value::from(2)]), [1]);
    }

    // ========================================
    // Absent vs. empty
    // ========================================

    #[test]
    fn never_called_reads_as_absent() {
        let slot = Attribute::new();
        assert_eq!(slot.get(), None);
        assert!(!slot.is_set());
    }

    #[test]
    fn empty_first_call_fixes_empty_sequence() {
        let slot = Attribute::new();
        assert!(slot.call(()).is_empty());
        assert!(slot.is_set());
        assert_eq!(slot.get(), Some(&[][..]));
        // Already fixed to `[]`, so real arguments no longer land.
        assert!(slot.call("late").is_empty());
    }

    #[test]
    fn debug_shows_unset_and_fixed() {
        let slot = Attribute::new();
        assert_eq!(format!("{slot:?}"), "Attribute(<unset>)");
        slot.call("a");
        assert_eq!(format!("{slot:?}"), r#"Attribute([String("a")])"#);
    }
}

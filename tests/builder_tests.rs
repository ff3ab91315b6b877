//! End-to-end tests for host definitions and instance accessors.
//!
//! The registry is process-wide and tests run in parallel, so every test declares its own host types.

use std::sync::Arc;

use cairn::{
    Builder, Descriptor, DescriptorKind, DslError, ItemDescriptor, Scope, SlotState, Value, define_collection,
    define_item,
};

macro_rules! host {
    ($($name:ident),+ $(,)?) => {
        $(
            #[derive(Default)]
            struct $name;
            impl Builder for $name {}
        )+
    };
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn item_href_is_readable_from_an_instance() {
    host!(Widgets);
    define_item!(Widgets {
        href("item-href")
    })
    .unwrap();

    assert_eq!(Widgets.item().unwrap().href(()), ["item-href"]);
}

#[test]
fn collection_href_is_readable_from_an_instance() {
    host!(Widgets);
    define_collection!(Widgets {
        href("collection-href")
    })
    .unwrap();

    assert_eq!(Widgets.collection().unwrap().href(()), ["collection-href"]);
}

#[test]
fn definition_wins_over_later_call_site_arguments() {
    host!(Widgets);
    define_item!(Widgets { href("a") }).unwrap();

    let item = Widgets.item().unwrap();
    assert_eq!(item.href("b"), ["a"]);
    assert_eq!(item.href(()), ["a"]);
}

#[test]
fn undefined_collection_is_absent_and_dereference_fails() {
    host!(Widgets);
    let widgets = Widgets;

    assert!(widgets.collection().is_none());
    assert_eq!(Widgets::slot_state(DescriptorKind::Collection), SlotState::Empty);

    let err = widgets.require_collection().unwrap_err();
    assert_eq!(
        err,
        DslError::NullDereference {
            class: "Widgets",
            kind: DescriptorKind::Collection
        }
    );
}

#[test]
#[should_panic(expected = "NullDereference: Widgets has no collection descriptor")]
fn undefined_collection_fails_loudly_when_raised() {
    host!(Widgets);
    let href = Widgets
        .require_collection()
        .map(|collection| collection.href(()).to_vec())
        .unwrap_or_else(|err| cairn_core::errors::raise(err));
    unreachable!("got {href:?}");
}

#[test]
fn variadic_capture_is_ordered() {
    host!(Widgets);
    define_item!(Widgets { href("x", "y") }).unwrap();

    assert_eq!(Widgets.item().unwrap().href(()), ["x", "y"]);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn defining_item_leaves_collection_untouched() {
    host!(Widgets);
    define_collection!(Widgets { href("c") }).unwrap();
    let before = Widgets.collection().unwrap();

    define_item!(Widgets { href("i") }).unwrap();

    assert!(Arc::ptr_eq(&before, &Widgets.collection().unwrap()));
    assert_eq!(Widgets.collection().unwrap().href(()), ["c"]);
}

#[test]
fn defining_collection_leaves_item_empty() {
    host!(Widgets);
    define_collection!(Widgets { href("c") }).unwrap();

    assert!(Widgets.item().is_none());
    assert_eq!(Widgets::slot_state(DescriptorKind::Item), SlotState::Empty);
    assert_eq!(Widgets::slot_state(DescriptorKind::Collection), SlotState::Defined);
}

#[test]
fn redefinition_replaces_without_merging() {
    host!(Widgets);
    define_item!(Widgets { href("first") }).unwrap();
    let first = Widgets.item().unwrap();

    define_item!(Widgets {}).unwrap();
    let second = Widgets.item().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(second.get("href").unwrap(), None);
    // Earlier handles keep the old descriptor.
    assert_eq!(first.href(()), ["first"]);
}

#[test]
fn instances_share_one_descriptor() {
    host!(Widgets);
    define_item!(Widgets {}).unwrap();

    let a = Widgets;
    let b = Widgets;
    assert!(Arc::ptr_eq(&a.item().unwrap(), &b.item().unwrap()));

    // The slot was left unset by the block, so the first reader fixes it for everyone.
    assert_eq!(a.item().unwrap().href("z"), ["z"]);
    assert_eq!(b.item().unwrap().href(()), ["z"]);
}

#[test]
fn hosts_do_not_share_registry_entries() {
    host!(Widgets, Gadgets);
    define_item!(Widgets { href("w") }).unwrap();

    assert!(Gadgets.item().is_none());
    define_item!(Gadgets { href("g") }).unwrap();
    assert_eq!(Widgets.item().unwrap().href(()), ["w"]);
    assert_eq!(Gadgets.item().unwrap().href(()), ["g"]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unknown_attribute_fails_and_keeps_previous_definition() {
    host!(Widgets);
    define_item!(Widgets { href("kept") }).unwrap();
    let before = Widgets.item().unwrap();

    let err = define_item!(Widgets {
        href("discarded")
        title("Widgets")
    })
    .unwrap_err();

    assert_eq!(
        err,
        DslError::UnknownAttribute {
            kind: DescriptorKind::Item,
            attribute: "title".to_string(),
            expected: "href".to_string(),
        }
    );
    assert!(Arc::ptr_eq(&before, &Widgets.item().unwrap()));
    assert_eq!(Widgets.item().unwrap().href(()), ["kept"]);
}

#[test]
fn unknown_attribute_on_first_definition_leaves_slot_empty() {
    host!(Widgets);
    assert!(define_collection!(Widgets { rel("self") }).is_err());
    assert_eq!(Widgets::slot_state(DescriptorKind::Collection), SlotState::Empty);
}

#[test]
fn missing_block_is_an_error() {
    host!(Widgets);
    assert_eq!(
        define_item!(Widgets).unwrap_err(),
        DslError::MissingBlock {
            class: "Widgets",
            kind: DescriptorKind::Item
        }
    );
    assert_eq!(
        define_collection!(Widgets,).unwrap_err(),
        DslError::MissingBlock {
            class: "Widgets",
            kind: DescriptorKind::Collection
        }
    );
    assert!(Widgets::definitions().item.is_none());
}

#[test]
fn nested_definition_is_rejected() {
    host!(Outer, Inner);
    let mut inner_result = None;
    define_item!(Outer {
        href({
            inner_result = Some(define_collection!(Inner { href("inner") }));
            "outer"
        })
    })
    .unwrap();

    assert_eq!(
        inner_result.unwrap().unwrap_err(),
        DslError::NestedEvaluation {
            kind: DescriptorKind::Collection
        }
    );
    assert!(Inner.collection().is_none());
    assert_eq!(Outer.item().unwrap().href(()), ["outer"]);
}

#[test]
fn panicking_block_leaves_slot_empty_and_definitions_usable() {
    fn failing_href() -> &'static str {
        panic!("block failed")
    }

    host!(Widgets);
    let result = std::panic::catch_unwind(|| define_item!(Widgets { href(failing_href()) }));
    assert!(result.is_err());
    assert_eq!(Widgets::slot_state(DescriptorKind::Item), SlotState::Empty);

    define_item!(Widgets { href("recovered") }).unwrap();
    assert_eq!(Widgets.item().unwrap().href(()), ["recovered"]);
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn empty_first_call_fixes_empty_sequence() {
    host!(Widgets);
    define_item!(Widgets { href() }).unwrap();

    let item = Widgets.item().unwrap();
    assert_eq!(item.get("href").unwrap(), Some(&[][..]));
    assert!(item.href("late").is_empty());
}

#[test]
fn never_called_attribute_reads_as_absent() {
    host!(Widgets);
    define_item!(Widgets {}).unwrap();

    assert_eq!(Widgets.item().unwrap().get("href").unwrap(), None);
}

#[test]
fn block_calls_may_be_semicolon_separated_and_mixed_types() {
    host!(Widgets);
    let base = String::from("/widgets");
    define_collection!(Widgets {
        href(base.clone(), 2, true);
        href("ignored");
    })
    .unwrap();

    assert_eq!(
        Widgets.collection().unwrap().href(()),
        [Value::from("/widgets"), Value::from(2), Value::Bool(true)]
    );
}

#[test]
fn explicit_closure_blocks_work_without_macros() {
    host!(Widgets);
    Widgets::define_item(Some(|scope: &Scope<ItemDescriptor>| {
        scope.href("typed");
        Ok(())
    }))
    .unwrap();

    assert_eq!(Widgets.require_item().unwrap().href(()), ["typed"]);
    assert_eq!(Widgets::definitions().item.unwrap().attributes(), vec![("href", Some(&[Value::from("typed")][..]))]);
}

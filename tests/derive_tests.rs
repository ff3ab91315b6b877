//! Tests for `#[derive(Descriptor)]` on user-defined descriptor types.
//!
//! Everything is imported through `cairn`; the derive must not need `cairn_core` in scope.

use cairn::{Attribute, Descriptor, DescriptorKind, DslError, Value, evaluate};

#[derive(Debug, Default, Descriptor)]
#[descriptor(kind = "collection")]
struct PagedCollection {
    href: Attribute,
    next: Attribute,
    prev: Attribute,
}

#[test]
fn kind_comes_from_container_attribute() {
    assert_eq!(PagedCollection::KIND, DescriptorKind::Collection);
}

#[test]
fn attribute_names_follow_field_order() {
    assert_eq!(PagedCollection::attribute_names(), ["href", "next", "prev"]);
}

#[test]
fn slot_lookup_is_exact() {
    let page = PagedCollection::default();
    assert!(page.slot("next").is_some());
    assert!(page.slot("Next").is_none());
    assert!(page.slot("").is_none());
}

#[test]
fn typed_methods_memoize_independently() {
    let page = PagedCollection::default();
    assert_eq!(page.next("/page/2"), ["/page/2"]);
    assert_eq!(page.next("/page/3"), ["/page/2"]);
    assert_eq!(page.prev(()), Vec::<Value>::new());
    assert_eq!(page.get("href").unwrap(), None);
}

#[test]
fn derived_descriptors_evaluate_blocks() {
    let page = evaluate(PagedCollection::default(), |scope| {
        scope.call("href", "/items")?;
        scope.next(("/items", 2));
        Ok(())
    })
    .unwrap();

    assert_eq!(
        page.attributes(),
        vec![
            ("href", Some(&[Value::from("/items")][..])),
            ("next", Some(&[Value::from("/items"), Value::from(2)][..])),
            ("prev", None),
        ]
    );
}

#[test]
fn unknown_attribute_lists_derived_names() {
    let page = PagedCollection::default();
    let err = page.call("first", vec![Value::from("/page/1")]).unwrap_err();
    assert_eq!(
        err,
        DslError::UnknownAttribute {
            kind: DescriptorKind::Collection,
            attribute: "first".to_string(),
            expected: "href, next, prev".to_string(),
        }
    );
}

mod facade {
    pub use cairn::__private;
}

#[derive(Debug, Default, Descriptor)]
#[descriptor(kind = "item", crate = "crate::facade")]
struct Bookmark {
    href: Attribute,
    title: Attribute,
}

#[test]
fn crate_option_resolves_through_a_reexport() {
    let bookmark = Bookmark::default();
    assert_eq!(Bookmark::KIND, DescriptorKind::Item);
    assert_eq!(bookmark.title("Home"), ["Home"]);
    assert_eq!(bookmark.title("Away"), ["Home"]);
    assert_eq!(bookmark.attributes()[0], ("href", None));
}

//! DSL macros.
//!
//! `define_item!` and `define_collection!` give configuration blocks their unqualified-call surface: each
//! `name(args...)` statement inside the braces is dispatched by name against the scoped descriptor, so an
//! attribute the variant lacks fails at evaluation time with `UnknownAttribute`.
//!
//! ```ignore
//! define_item!(Widgets {
//!     href("item-href")
//! })?;
//!
//! define_collection!(Widgets {
//!     href("collection-href");
//! })?;
//!
//! define_item!(Widgets)?; // MissingBlock
//! ```
//!
//! Statements may be separated by `;` or just by newlines. Arguments are any expressions convertible into
//! `Value`. Each macro evaluates to `Result<(), DslError>`.

/// Evaluate a block against a fresh item descriptor and store it for a host type.
///
/// ## Examples
/// ```rust
/// use cairn::{Builder, define_item};
///
/// struct Orders;
/// impl Builder for Orders {}
///
/// define_item!(Orders { href("/orders/1", "self") }).unwrap();
/// assert_eq!(Orders.item().unwrap().href(()), ["/orders/1", "self"]);
/// ```
#[macro_export]
macro_rules! define_item {
    ($($input:tt)*) => {
        $crate::__define!(define_item, ItemDescriptor; $($input)*)
    };
}

/// Evaluate a block against a fresh collection descriptor and store it for a host type.
///
/// ## Examples
/// ```rust
/// use cairn::{Builder, define_collection};
///
/// struct Orders;
/// impl Builder for Orders {}
///
/// define_collection!(Orders { href("/orders") }).unwrap();
/// assert_eq!(Orders.collection().unwrap().href(()), ["/orders"]);
/// ```
#[macro_export]
macro_rules! define_collection {
    ($($input:tt)*) => {
        $crate::__define!(define_collection, CollectionDescriptor; $($input)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __define {
    ($entry:ident, $descriptor:ident; $host:ty { $($body:tt)* }) => {
        <$host as $crate::Builder>::$entry(::core::option::Option::Some(
            |scope: &$crate::evaluator::Scope<$crate::$descriptor>| -> ::core::result::Result<(), $crate::DslError> {
                $crate::__block_calls!(scope; $($body)*);
                ::core::result::Result::Ok(())
            },
        ))
    };
    ($entry:ident, $descriptor:ident; $host:ty $(,)?) => {
        <$host as $crate::Builder>::$entry(
            ::core::option::Option::None::<$crate::evaluator::NoBlock<$crate::$descriptor>>,
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __block_calls {
    ($scope:ident;) => {};
    ($scope:ident; $attr:ident ( $($arg:expr),* $(,)? ) ; $($rest:tt)*) => {
        $scope.call(
            ::core::stringify!($attr),
            <::std::vec::Vec<$crate::Value>>::from([$($crate::Value::from($arg)),*]),
        )?;
        $crate::__block_calls!($scope; $($rest)*);
    };
    ($scope:ident; $attr:ident ( $($arg:expr),* $(,)? ) $($rest:tt)*) => {
        $scope.call(
            ::core::stringify!($attr),
            <::std::vec::Vec<$crate::Value>>::from([$($crate::Value::from($arg)),*]),
        )?;
        $crate::__block_calls!($scope; $($rest)*);
    };
}

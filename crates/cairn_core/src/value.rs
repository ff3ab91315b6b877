//! Positional argument values for attribute calls.
//!
//! Attribute slots store an ordered sequence of [`Value`]s. Any JSON-like value is accepted; there is no type
//! validation at this layer.
//!
//! [`Args`] converts the argument shapes callers naturally write into that sequence:
//!
//! | Call                      | Stored sequence  |
//! |---------------------------|------------------|
//! | `href(())`                | `[]`             |
//! | `href("a")`               | `["a"]`          |
//! | `href(("x", 2))`          | `["x", 2]`       |
//! | `href(["x", "y"])`        | `["x", "y"]`     |
//! | `href(vec![1, 2, 3])`     | `[1, 2, 3]`      |

/// The dynamically typed value carried by attribute slots.
pub use serde_json::Value;

/// Convert a positional argument list into an ordered value sequence.
///
/// ## Notes
/// - `()` means “no arguments”; it is not the JSON `null` value.
/// - Tuples keep their element order.
///
/// ## Examples
/// ```rust
/// use cairn_core::{Args, Value};
///
/// assert!(().into_values().is_empty());
/// assert_eq!(("x", "y").into_values(), vec![Value::from("x"), Value::from("y")]);
/// ```
pub trait Args {
    /// Consume the arguments and return them in call order.
    fn into_values(self) -> Vec<Value>;
}

impl Args for () {
    fn into_values(self) -> Vec<Value> {
        Vec::new()
    }
}

impl Args for Vec<Value> {
    fn into_values(self) -> Vec<Value> {
        self
    }
}

impl<T: Into<Value>, const N: usize> Args for [T; N] {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

macro_rules! single_value_args {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Args for $ty {
                fn into_values(self) -> Vec<Value> {
                    vec![Value::from(self)]
                }
            }
        )*
    };
}

single_value_args!(Value, &str, String, bool, i32, i64, u32, u64, f64);

macro_rules! tuple_args {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: Into<Value>),+> Args for ($($name,)+) {
                #[allow(non_snake_case)]
                fn into_values(self) -> Vec<Value> {
                    let ($($name,)+) = self;
                    vec![$($name.into()),+]
                }
            }
        )*
    };
}

tuple_args!((A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, F));

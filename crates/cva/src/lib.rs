//! Class name joining and class variance resolution.
//!
//! `cva` computes a single space-separated class string from heterogeneous,
//! possibly nested inputs. It has two layers:
//!
//! - [`join`] (and the variadic [`cx!`] macro) flattens [`ClassValue`]s:
//!   strings, numbers, booleans, nested lists, and keyed maps whose keys are
//!   included when their value holds.
//! - [`cva`] builds a [`Resolver`] from a base class and a [`VariantConfig`]
//!   (variants, default variants, compound variants). Resolving a set of
//!   [`Props`] yields the classes for that combination.
//!
//! Both layers are permissive: unknown variant names, undeclared keys, and
//! values with no class meaning contribute nothing instead of failing.
//!
//! # Example
//!
//! ```rust
//! use cva::{cva, CompoundRule, Props, Variant, VariantConfig};
//!
//! let button = cva(
//!     "btn",
//!     VariantConfig::new()
//!         .variant(
//!             "intent",
//!             Variant::new()
//!                 .option("primary", "btn--primary")
//!                 .option("secondary", ["btn--secondary", "bg-white"]),
//!         )
//!         .variant(
//!             "size",
//!             Variant::new()
//!                 .option("small", "btn--small")
//!                 .option("large", "btn--large"),
//!         )
//!         .default_variant("size", "small")
//!         .compound(
//!             CompoundRule::new()
//!                 .when("intent", "primary")
//!                 .when("size", "large")
//!                 .class("uppercase"),
//!         ),
//! );
//!
//! assert_eq!(button.resolve(&Props::new()), "btn btn--small");
//! assert_eq!(
//!     button.resolve(&Props::new().set("intent", "primary").set("size", "large")),
//!     "btn btn--primary btn--large uppercase",
//! );
//! assert_eq!(
//!     button.resolve(&Props::new().set("intent", "secondary").class("mt-2")),
//!     "btn btn--secondary bg-white btn--small mt-2",
//! );
//! ```
//!
//! Configurations can also be loaded from JSON or YAML, see
//! [`VariantConfig::from_yaml`].

mod error;
mod join;
mod value;
pub mod variant;

pub use error::ConfigError;
pub use join::{join, tokens, MAX_DEPTH};
pub use value::ClassValue;
pub use variant::{
    compose, cva, ClassResolver, Composed, CompoundRule, Constraint, Props, Resolver, Variant,
    VariantConfig,
};

pub use indexmap;

/// Joins any number of values convertible into [`ClassValue`].
///
/// ```rust
/// use cva::cx;
///
/// assert_eq!(cx!("a", "b"), "a b");
/// assert_eq!(cx!("btn", 0, None::<&str>, ["x", "y"]), "btn x y");
/// assert_eq!(cx!(), "");
/// ```
#[macro_export]
macro_rules! cx {
    ($($value:expr),* $(,)?) => {
        $crate::join(&[$($crate::ClassValue::from($value)),*] as &[$crate::ClassValue])
    };
}

/// Builds a [`ClassValue::List`] from values of mixed types.
///
/// ```rust
/// use cva::{class_list, cx};
///
/// assert_eq!(cx!(class_list!["a", class_list!["b", 0, "c"]]), "a b c");
/// ```
#[macro_export]
macro_rules! class_list {
    ($($value:expr),* $(,)?) => {
        $crate::ClassValue::List(::std::vec![$($crate::ClassValue::from($value)),*])
    };
}

/// Builds a [`ClassValue::Map`], preserving entry order.
///
/// ```rust
/// use cva::{class_map, cx};
///
/// assert_eq!(cx!(class_map! { "a" => true, "b" => false, "c" => 1 }), "a c");
/// ```
#[macro_export]
macro_rules! class_map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut entries = $crate::indexmap::IndexMap::new();
        $(
            entries.insert(
                ::std::string::String::from($key),
                $crate::ClassValue::from($value),
            );
        )*
        $crate::ClassValue::Map(entries)
    }};
}

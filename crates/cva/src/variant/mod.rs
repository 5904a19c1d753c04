//! Class variance resolution.
//!
//! This module provides:
//!
//! - [`VariantConfig`]: variants, default variants and compound rules
//! - [`Variant`]: the option table of one variant axis
//! - [`CompoundRule`] and [`Constraint`]: classes applied to combinations
//! - [`Props`]: the caller's choices for one resolution
//! - [`Resolver`] (built by [`cva`]): turns props into a class string
//! - [`ClassResolver`] and [`compose`]: combining several resolvers
//!
//! Output order is always: base classes, variant classes in the order the
//! variants were declared, compound classes in rule order, then the caller's
//! ad-hoc `class` and `className` props.

mod compose;
mod config;
mod load;
mod props;
mod resolver;

pub use compose::{compose, ClassResolver, Composed};
pub use config::{CompoundRule, Constraint, Variant, VariantConfig};
pub use props::Props;
pub use resolver::{cva, Resolver};

/// Prop and compound-rule key for ad-hoc classes.
pub(crate) const CLASS: &str = "class";

/// Prop and compound-rule key for ad-hoc classes, React spelling.
pub(crate) const CLASS_NAME: &str = "className";

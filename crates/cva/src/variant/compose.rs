//! Combining resolvers.

use std::fmt;

use super::props::Props;
use super::resolver::Resolver;
use crate::join::join;
use crate::value::ClassValue;

/// Anything that turns props into a class string.
///
/// Implemented by [`Resolver`], [`Composed`], and any `Fn(&Props) -> String`.
pub trait ClassResolver {
    /// Computes the class string for `props`.
    fn resolve(&self, props: &Props) -> String;
}

impl ClassResolver for Resolver {
    fn resolve(&self, props: &Props) -> String {
        Resolver::resolve(self, props)
    }
}

impl<F> ClassResolver for F
where
    F: Fn(&Props) -> String,
{
    fn resolve(&self, props: &Props) -> String {
        self(props)
    }
}

/// Several resolvers applied to the same props, outputs joined in order.
///
/// Build one with [`compose`].
#[derive(Default)]
pub struct Composed {
    parts: Vec<Box<dyn ClassResolver + Send + Sync>>,
}

/// Starts an empty composition.
///
/// # Example
///
/// ```rust
/// use cva::{compose, cva, ClassResolver, Props, Variant, VariantConfig};
///
/// let spacing = cva(
///     "box",
///     VariantConfig::new().variant("margin", Variant::new().option(0, "m-0").option(4, "m-4")),
/// );
/// let card = cva(
///     "card",
///     VariantConfig::new().variant("shadow", Variant::new().option("md", "drop-shadow-md")),
/// );
///
/// let styled = compose().with(spacing).with(card);
/// let props = Props::new().set("margin", 4).set("shadow", "md");
/// assert_eq!(styled.resolve(&props), "box m-4 card drop-shadow-md");
/// ```
pub fn compose() -> Composed {
    Composed::default()
}

impl Composed {
    /// Appends a resolver, returning the updated composition for chaining.
    pub fn with<R>(mut self, resolver: R) -> Self
    where
        R: ClassResolver + Send + Sync + 'static,
    {
        self.parts.push(Box::new(resolver));
        self
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl ClassResolver for Composed {
    fn resolve(&self, props: &Props) -> String {
        let outputs: Vec<ClassValue> = self
            .parts
            .iter()
            .map(|part| ClassValue::Str(part.resolve(props)))
            .collect();
        join(&outputs)
    }
}

impl fmt::Debug for Composed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composed")
            .field("parts", &self.parts.len())
            .finish()
    }
}

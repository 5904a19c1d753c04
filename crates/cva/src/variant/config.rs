//! Variant configuration types.

use indexmap::IndexMap;
use serde::Deserialize;

use super::{CLASS, CLASS_NAME};
use crate::value::{ClassValue, Key};

/// The options of one variant axis, keyed by canonical option key.
///
/// Keys are stored as strings; numeric keys use their canonical form so a
/// prop of `4` or `"4"` selects the option declared as `4`.
///
/// # Example
///
/// ```rust
/// use cva::Variant;
///
/// let margin = Variant::new().option(0, "m-0").option(4, "m-4");
/// assert!(margin.get("4").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "IndexMap<Key, ClassValue>")]
pub struct Variant {
    options: IndexMap<String, ClassValue>,
}

impl Variant {
    /// Creates a variant with no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, returning the updated variant for chaining.
    ///
    /// The key is stored in its [`variant_key`](ClassValue::variant_key)
    /// form, the same form props are looked up by. Keys with no such form
    /// (null, NaN, containers) can never be selected and are ignored.
    pub fn option<K: Into<ClassValue>, V: Into<ClassValue>>(mut self, key: K, classes: V) -> Self {
        match key.into().variant_key() {
            Some(key) => {
                self.options.insert(key, classes.into());
            }
            None => tracing::debug!("ignoring variant option without a usable key"),
        }
        self
    }

    /// Returns the classes declared for `key`.
    pub fn get(&self, key: &str) -> Option<&ClassValue> {
        self.options.get(key)
    }

    /// Iterates over option keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl From<IndexMap<Key, ClassValue>> for Variant {
    fn from(options: IndexMap<Key, ClassValue>) -> Self {
        Self {
            options: options.into_iter().map(|(k, v)| (k.0, v)).collect(),
        }
    }
}

/// What a compound rule expects of one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// The resolved value must equal this one.
    Is(ClassValue),
    /// The resolved value must equal one of these.
    AnyOf(Vec<ClassValue>),
}

impl Constraint {
    /// Checks the resolved value of a variant, `None` meaning unset.
    ///
    /// Comparison is structural with no coercion: `Int(4)` does not match
    /// `Str("4")`. An unset value matches an expected `Null`.
    pub fn matches(&self, actual: Option<&ClassValue>) -> bool {
        let same = |expected: &ClassValue| match actual {
            Some(actual) => actual == expected,
            None => expected.is_null(),
        };
        match self {
            Constraint::Is(expected) => same(expected),
            Constraint::AnyOf(accepted) => accepted.iter().any(same),
        }
    }
}

impl From<ClassValue> for Constraint {
    fn from(value: ClassValue) -> Self {
        match value {
            ClassValue::List(accepted) => Constraint::AnyOf(accepted),
            other => Constraint::Is(other),
        }
    }
}

/// Classes added when several variants hold at once.
///
/// In documents a rule is a flat map: `class` and `className` are the
/// payload, every other key is a constraint. A sequence value accepts any of
/// its members.
///
/// ```yaml
/// - intent: [primary, secondary]
///   size: large
///   class: uppercase
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "IndexMap<String, ClassValue>")]
pub struct CompoundRule {
    pub(crate) constraints: IndexMap<String, Constraint>,
    pub(crate) class: ClassValue,
    pub(crate) class_name: ClassValue,
}

impl CompoundRule {
    /// Creates a rule with no constraints; it matches every resolution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `variant` to resolve to `value`, or to any member of it
    /// when `value` is a sequence.
    pub fn when<V: Into<ClassValue>>(mut self, variant: &str, value: V) -> Self {
        self.constraints
            .insert(variant.to_string(), Constraint::from(value.into()));
        self
    }

    /// Requires `variant` to resolve to any of `values`.
    pub fn when_any<I, V>(mut self, variant: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ClassValue>,
    {
        let accepted = values.into_iter().map(Into::into).collect();
        self.constraints
            .insert(variant.to_string(), Constraint::AnyOf(accepted));
        self
    }

    /// Sets the `class` payload.
    pub fn class<V: Into<ClassValue>>(mut self, classes: V) -> Self {
        self.class = classes.into();
        self
    }

    /// Sets the `className` payload, emitted after `class`.
    pub fn class_name<V: Into<ClassValue>>(mut self, classes: V) -> Self {
        self.class_name = classes.into();
        self
    }

    pub fn constraints(&self) -> &IndexMap<String, Constraint> {
        &self.constraints
    }

    /// Returns `true` when every constraint holds for `lookup`.
    pub(crate) fn matches<'v>(&self, lookup: impl Fn(&str) -> Option<&'v ClassValue>) -> bool {
        self.constraints
            .iter()
            .all(|(variant, constraint)| constraint.matches(lookup(variant)))
    }

    /// The truthy payloads, `class` first.
    pub(crate) fn payload(&self) -> impl Iterator<Item = &ClassValue> {
        [&self.class, &self.class_name]
            .into_iter()
            .filter(|classes| classes.is_truthy())
    }
}

impl From<IndexMap<String, ClassValue>> for CompoundRule {
    fn from(mut entries: IndexMap<String, ClassValue>) -> Self {
        let class = entries.shift_remove(CLASS).unwrap_or_default();
        let class_name = entries.shift_remove(CLASS_NAME).unwrap_or_default();
        Self {
            constraints: entries
                .into_iter()
                .map(|(variant, value)| (variant, Constraint::from(value)))
                .collect(),
            class,
            class_name,
        }
    }
}

/// Variants, default variants and compound rules for one component.
///
/// All parts are optional. Variant declaration order decides the order of
/// variant classes in the output.
///
/// # Example
///
/// ```rust
/// use cva::{CompoundRule, Variant, VariantConfig};
///
/// let config = VariantConfig::new()
///     .variant("shadow", Variant::new().option("md", "drop-shadow-md"))
///     .default_variant("shadow", "md")
///     .compound(CompoundRule::new().when("shadow", "md").class("card-md"));
///
/// assert!(config.has_variants());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariantConfig {
    pub(crate) variants: IndexMap<String, Variant>,
    pub(crate) default_variants: IndexMap<String, ClassValue>,
    pub(crate) compound_variants: Vec<CompoundRule>,
}

impl VariantConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variant axis, returning the updated config for chaining.
    ///
    /// Declaring the same name twice replaces the options but keeps the
    /// original position.
    pub fn variant(mut self, name: &str, variant: Variant) -> Self {
        self.variants.insert(name.to_string(), variant);
        self
    }

    /// Sets the option used for `name` when props leave it unset.
    pub fn default_variant<V: Into<ClassValue>>(mut self, name: &str, key: V) -> Self {
        self.default_variants.insert(name.to_string(), key.into());
        self
    }

    /// Appends a compound rule.
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.compound_variants.push(rule);
        self
    }

    pub fn variants(&self) -> &IndexMap<String, Variant> {
        &self.variants
    }

    pub fn default_variants(&self) -> &IndexMap<String, ClassValue> {
        &self.default_variants
    }

    pub fn compound_variants(&self) -> &[CompoundRule] {
        &self.compound_variants
    }

    /// Returns `true` when at least one variant axis is declared.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

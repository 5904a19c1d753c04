//! Resolving props against a variant configuration.

use std::sync::Arc;

use indexmap::IndexMap;

use super::config::VariantConfig;
use super::props::Props;
use super::{CLASS, CLASS_NAME};
use crate::join::join;
use crate::value::ClassValue;

/// Builds a [`Resolver`] for `base` classes and a variant `config`.
///
/// # Example
///
/// ```rust
/// use cva::{cva, Props, Variant, VariantConfig};
///
/// let size = cva(
///     ["text", "leading-none"],
///     VariantConfig::new()
///         .variant("size", Variant::new().option("small", "S").option("large", "L"))
///         .default_variant("size", "small"),
/// );
///
/// assert_eq!(size.resolve(&Props::new()), "text leading-none S");
/// assert_eq!(size.resolve(&Props::new().set("size", "large")), "text leading-none L");
/// ```
pub fn cva<B: Into<ClassValue>>(base: B, config: VariantConfig) -> Resolver {
    Resolver::new(base, config)
}

/// A base class and a captured [`VariantConfig`].
///
/// Resolvers are cheap to clone and can be shared between threads; the
/// configuration is never modified after construction.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    base: ClassValue,
    config: Arc<VariantConfig>,
}

/// Props after defaults are applied, borrowing from both sources.
type Merged<'a> = IndexMap<&'a str, &'a ClassValue>;

impl Resolver {
    /// Creates a resolver. Same as [`cva`].
    pub fn new<B: Into<ClassValue>>(base: B, config: VariantConfig) -> Self {
        Self {
            base: base.into(),
            config: Arc::new(config),
        }
    }

    pub fn base(&self) -> &ClassValue {
        &self.base
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Computes the class string for `props`.
    ///
    /// Output order is base, variant classes in declaration order, matching
    /// compound rules in rule order, then the `class` and `className` props.
    /// A prop that is `Null` or `""` defers to the variant's default, and
    /// selects no option when there is none.
    /// Unknown variants and undeclared keys contribute nothing.
    pub fn resolve(&self, props: &Props) -> String {
        let merged = self.merge(props);
        let class = merged.get(CLASS).copied();
        let class_name = merged.get(CLASS_NAME).copied();

        if !self.config.has_variants() {
            return join(std::iter::once(&self.base).chain(class).chain(class_name));
        }

        let variant_classes = self.variant_classes(&merged);
        let compound_classes = self.compound_classes(&merged);

        join(
            std::iter::once(&self.base)
                .chain(variant_classes)
                .chain(compound_classes)
                .chain(class)
                .chain(class_name),
        )
    }

    /// Turns the resolver into a plain closure.
    pub fn into_fn(self) -> impl Fn(&Props) -> String + Clone + Send + Sync + 'static {
        move |props: &Props| self.resolve(props)
    }

    /// Default variants overlaid with props. Blank props keep the default.
    fn merge<'a>(&'a self, props: &'a Props) -> Merged<'a> {
        let mut merged: Merged<'a> = self
            .config
            .default_variants
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();

        for (name, value) in props.iter() {
            if value.is_blank() && merged.contains_key(name) {
                continue;
            }
            merged.insert(name, value);
        }
        merged
    }

    fn variant_classes<'a>(&'a self, merged: &Merged<'a>) -> Vec<&'a ClassValue> {
        self.config
            .variants
            .iter()
            .filter_map(|(name, variant)| {
                let value = merged.get(name.as_str())?;
                if value.is_blank() {
                    return None;
                }
                let key = value.variant_key()?;
                let classes = variant.get(&key);
                if classes.is_none() {
                    tracing::trace!(variant = %name, key = %key, "no classes declared for variant key");
                }
                classes
            })
            .collect()
    }

    fn compound_classes<'a>(&'a self, merged: &Merged<'a>) -> Vec<&'a ClassValue> {
        let defined: Merged<'a> = merged
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(name, value)| (*name, *value))
            .collect();
        let defaults = &self.config.default_variants;

        self.config
            .compound_variants
            .iter()
            .enumerate()
            .filter(|(index, rule)| {
                let matched = rule.matches(|name| {
                    defined
                        .get(name)
                        .copied()
                        .or_else(|| defaults.get(name))
                });
                if matched {
                    tracing::trace!(rule = *index, "compound variant matched");
                }
                matched
            })
            .flat_map(|(_, rule)| rule.payload())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{CompoundRule, Variant};

    fn button() -> Resolver {
        cva(
            ClassValue::Null,
            VariantConfig::new()
                .variant(
                    "intent",
                    Variant::new()
                        .option("primary", "button--primary")
                        .option("secondary", "button--secondary"),
                )
                .variant(
                    "size",
                    Variant::new()
                        .option("small", "button--small")
                        .option("large", "button--large"),
                )
                .compound(
                    CompoundRule::new()
                        .when("intent", "primary")
                        .when("size", "large")
                        .class("button--primary-large"),
                )
                .compound(
                    CompoundRule::new()
                        .when("intent", "secondary")
                        .when("size", "small")
                        .class("button--secondary-small"),
                ),
        )
    }

    #[test]
    fn test_no_config_reduces_to_adhoc_classes() {
        let example = cva(ClassValue::Null, VariantConfig::new());
        assert_eq!(example.resolve(&Props::new()), "");
        assert_eq!(
            example.resolve(&Props::new().set("aCheekyInvalidProp", "lol")),
            ""
        );
        assert_eq!(example.resolve(&Props::new().class("adhoc-class")), "adhoc-class");
        assert_eq!(
            example.resolve(&Props::new().class_name("adhoc-className")),
            "adhoc-className"
        );
        assert_eq!(
            example.resolve(&Props::new().class("adhoc-class").class_name("adhoc-className")),
            "adhoc-class adhoc-className"
        );
    }

    #[test]
    fn test_no_variants_ignores_defaults_and_compounds() {
        let example = cva(
            "base",
            VariantConfig::new()
                .default_variant("size", "small")
                .compound(CompoundRule::new().class("never")),
        );
        assert_eq!(example.resolve(&Props::new().class("x")), "base x");
    }

    #[test]
    fn test_variants_string_values() {
        let button = button();
        assert_eq!(button.resolve(&Props::new()), "");
        assert_eq!(
            button.resolve(&Props::new().set("intent", "primary")),
            "button--primary"
        );
        assert_eq!(
            button.resolve(&Props::new().set("intent", "primary").set("size", "small")),
            "button--primary button--small"
        );
    }

    #[test]
    fn test_variant_classes_follow_declaration_order() {
        let props = Props::new().set("size", "small").set("intent", "secondary");
        assert_eq!(
            button().resolve(&props),
            "button--secondary button--small button--secondary-small"
        );
    }

    #[test]
    fn test_compound_variants() {
        let button = button();
        assert_eq!(
            button.resolve(&Props::new().set("intent", "primary").set("size", "large")),
            "button--primary button--large button--primary-large"
        );
        assert_eq!(
            button.resolve(&Props::new().set("intent", "primary").set("size", "small")),
            "button--primary button--small"
        );
    }

    #[test]
    fn test_precedence_of_compound_and_adhoc_classes() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new()
                .variant("intent", Variant::new().option("primary", "P"))
                .compound(CompoundRule::new().when("intent", "primary").class("Q")),
        );
        let props = Props::new().set("intent", "primary").class("R");
        assert_eq!(resolver.resolve(&props), "P Q R");

        let props = Props::new().class_name("S").class("R").set("intent", "primary");
        assert_eq!(resolver.resolve(&props), "P Q R S");
    }

    #[test]
    fn test_default_variant_fallback() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new()
                .variant("size", Variant::new().option("small", "S").option("large", "L"))
                .default_variant("size", "small"),
        );
        assert_eq!(resolver.resolve(&Props::new()), "S");
        assert_eq!(resolver.resolve(&Props::new().set("size", "large")), "L");
    }

    #[test]
    fn test_blank_prop_defers_to_default() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new()
                .variant("size", Variant::new().option("small", "S").option("large", "L"))
                .default_variant("size", "large"),
        );
        assert_eq!(resolver.resolve(&Props::new().set("size", ClassValue::Null)), "L");
        assert_eq!(resolver.resolve(&Props::new().set("size", "")), "L");
    }

    #[test]
    fn test_blank_prop_without_default_contributes_nothing() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new()
                .variant("size", Variant::new().option("small", "S"))
                .compound(CompoundRule::new().when("size", ClassValue::Null).class("unsized")),
        );
        assert_eq!(resolver.resolve(&Props::new().set("size", ClassValue::Null)), "unsized");
        assert_eq!(resolver.resolve(&Props::new()), "unsized");
        assert_eq!(resolver.resolve(&Props::new().set("size", "small")), "S");
    }

    #[test]
    fn test_empty_string_prop_never_selects_an_option() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new().variant("size", Variant::new().option("", "EMPTY").option("sm", "S")),
        );
        assert_eq!(resolver.resolve(&Props::new().set("size", "")), "");
        assert_eq!(resolver.resolve(&Props::new().set("size", "sm")), "S");
    }

    #[test]
    fn test_compound_when_with_sequence() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new()
                .variant("intent", Variant::new().option("primary", "P").option("secondary", "S"))
                .compound(
                    CompoundRule::new()
                        .when("intent", ["primary", "secondary"])
                        .class("X"),
                ),
        );
        assert_eq!(resolver.resolve(&Props::new().set("intent", "primary")), "P X");
        assert_eq!(resolver.resolve(&Props::new().set("intent", "secondary")), "S X");
        assert_eq!(resolver.resolve(&Props::new().set("intent", "other")), "");
    }

    #[test]
    fn test_unusual_numeric_option_keys() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new().variant(
                "level",
                Variant::new()
                    .option(-0.0, "zero")
                    .option(f64::INFINITY, "inf")
                    .option(0.1f32, "tenth"),
            ),
        );
        let out: Vec<_> = [ClassValue::from(-0.0), f64::INFINITY.into(), 0.1f32.into()]
            .into_iter()
            .map(|level| resolver.resolve(&Props::new().set("level", level)))
            .collect();
        assert_eq!(out, vec!["zero", "inf", "tenth"]);
    }

    #[test]
    fn test_explicit_null_does_not_satisfy_specific_key() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new()
                .variant("intent", Variant::new().option("primary", "P"))
                .compound(CompoundRule::new().when("intent", "primary").class("Q")),
        );
        assert_eq!(resolver.resolve(&Props::new().set("intent", ClassValue::Null)), "");
    }

    #[test]
    fn test_compound_set_constraint() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new()
                .variant(
                    "intent",
                    Variant::new()
                        .option("primary", "P")
                        .option("secondary", "S")
                        .option("danger", "D"),
                )
                .compound(
                    CompoundRule::new()
                        .when_any("intent", ["primary", "secondary"])
                        .class("X"),
                ),
        );
        assert_eq!(resolver.resolve(&Props::new().set("intent", "primary")), "P X");
        assert_eq!(resolver.resolve(&Props::new().set("intent", "secondary")), "S X");
        assert_eq!(resolver.resolve(&Props::new().set("intent", "danger")), "D");
        assert_eq!(resolver.resolve(&Props::new()), "");
    }

    #[test]
    fn test_compound_matches_against_defaults() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new()
                .variant("shadow", Variant::new().option("md", "drop-shadow-md"))
                .default_variant("shadow", "md")
                .compound(CompoundRule::new().when("shadow", "md").class("card-md")),
        );
        assert_eq!(resolver.resolve(&Props::new()), "drop-shadow-md card-md");
    }

    #[test]
    fn test_compound_class_then_class_name() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new()
                .variant("intent", Variant::new().option("primary", "P"))
                .compound(
                    CompoundRule::new()
                        .when("intent", "primary")
                        .class_name(["upper", "wide"])
                        .class("first"),
                ),
        );
        assert_eq!(
            resolver.resolve(&Props::new().set("intent", "primary")),
            "P first upper wide"
        );
    }

    #[test]
    fn test_unknown_variant_key_is_ignored() {
        let button = button();
        assert_eq!(button.resolve(&Props::new().set("intent", "nonexistent")), "");
        assert_eq!(
            button.resolve(&Props::new().set("intent", "nonexistent").set("size", "large")),
            "button--large"
        );
    }

    #[test]
    fn test_numeric_keys_match_numeric_props() {
        let box_ = cva(
            ["box", "box-border"],
            VariantConfig::new().variant(
                "margin",
                Variant::new().option(0, "m-0").option(2, "m-2").option(4, "m-4"),
            ),
        );
        assert_eq!(box_.resolve(&Props::new().set("margin", 4)), "box box-border m-4");
        assert_eq!(box_.resolve(&Props::new().set("margin", "2")), "box box-border m-2");
        assert_eq!(box_.resolve(&Props::new().set("margin", 0)), "box box-border m-0");
    }

    #[test]
    fn test_boolean_props_select_boolean_keys() {
        let resolver = cva(
            ClassValue::Null,
            VariantConfig::new().variant(
                "disabled",
                Variant::new().option(true, "opacity-50").option(false, "opacity-100"),
            ),
        );
        assert_eq!(resolver.resolve(&Props::new().set("disabled", true)), "opacity-50");
        assert_eq!(resolver.resolve(&Props::new().set("disabled", false)), "opacity-100");
    }

    #[test]
    fn test_resolution_does_not_mutate_props() {
        let props = Props::new().set("intent", "primary").set("size", ClassValue::Null);
        let before = props.clone();
        button().resolve(&props);
        assert_eq!(props, before);
    }

    #[test]
    fn test_into_fn() {
        let resolve = button().into_fn();
        assert_eq!(resolve(&Props::new().set("intent", "secondary")), "button--secondary");
    }

    #[test]
    fn test_resolver_is_shareable_across_threads() {
        let button = button();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let button = button.clone();
                std::thread::spawn(move || {
                    button.resolve(&Props::new().set("intent", "primary").set("size", "large"))
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                "button--primary button--large button--primary-large"
            );
        }
    }
}

//! Flattening class values into a class string.

use crate::value::{canonical_float, ClassValue};

/// Maximum nesting depth followed while flattening.
///
/// Lists nested deeper than this contribute nothing.
pub const MAX_DEPTH: usize = 64;

/// Joins class values into a single space-separated class string.
///
/// Values are visited left to right, depth first:
///
/// | Value | Contributes |
/// |-------|-------------|
/// | `Str` | itself, unless empty |
/// | `Bool` | nothing |
/// | `Int` / `Float` | its canonical form, unless `0`, `-0.0` or NaN |
/// | `List` | each element, flattened in order |
/// | `Map` | each key whose value is a list or map, or is truthy |
/// | `Function` | `function` |
/// | `Opaque` | `emptyObject` |
/// | `Null` | nothing |
///
/// Map entries holding a list or map always keep their key, even when the
/// container is empty. The result never has leading or trailing whitespace.
/// Joining never fails: shapes that carry no class degrade to nothing.
///
/// # Example
///
/// ```rust
/// use cva::{class_list, class_map, join, ClassValue};
///
/// let out = join(&[
///     ClassValue::from("btn"),
///     class_list!["a", class_list!["b", 0, false]],
///     class_map! { "active" => true, "disabled" => false },
/// ]);
/// assert_eq!(out, "btn a b active");
/// ```
pub fn join<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a ClassValue>,
{
    values
        .into_iter()
        .flat_map(tokens)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Returns the tokens a single value contributes, in order.
pub fn tokens(value: &ClassValue) -> Vec<String> {
    collect(value, 0)
}

fn collect(value: &ClassValue, depth: usize) -> Vec<String> {
    match value {
        ClassValue::Null | ClassValue::Bool(_) => Vec::new(),
        ClassValue::Str(s) if s.is_empty() => Vec::new(),
        ClassValue::Str(s) => vec![s.clone()],
        ClassValue::Int(0) => Vec::new(),
        ClassValue::Int(i) => vec![i.to_string()],
        ClassValue::Float(f) if *f == 0.0 || f.is_nan() => Vec::new(),
        ClassValue::Float(f) => vec![canonical_float(*f)],
        ClassValue::List(items) => {
            if depth >= MAX_DEPTH {
                tracing::warn!(
                    max_depth = MAX_DEPTH,
                    "class list nested too deeply, dropping its contents"
                );
                return Vec::new();
            }
            items
                .iter()
                .flat_map(|item| collect(item, depth + 1))
                .collect()
        }
        ClassValue::Map(entries) => entries
            .iter()
            .filter(|(key, value)| !key.is_empty() && (value.is_container() || value.is_truthy()))
            .map(|(key, _)| key.clone())
            .collect(),
        ClassValue::Function => vec!["function".to_string()],
        ClassValue::Opaque => vec!["emptyObject".to_string()],
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn class_value() -> impl Strategy<Value = ClassValue> {
        let leaf = prop_oneof![
            Just(ClassValue::Null),
            any::<bool>().prop_map(ClassValue::Bool),
            (-5i64..5).prop_map(ClassValue::Int),
            prop_oneof![Just(0.0), Just(-0.0), Just(1.0), Just(f64::NAN), Just(2.5)]
                .prop_map(ClassValue::Float),
            "[a-z-]{0,6}".prop_map(ClassValue::Str),
        ];
        leaf.prop_recursive(4, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(ClassValue::List),
                prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                    .prop_map(|entries| entries.into_iter().collect::<ClassValue>()),
            ]
        })
    }

    proptest! {
        #[test]
        fn joined_output_has_no_stray_whitespace(values in prop::collection::vec(class_value(), 0..5)) {
            let out = join(&values);
            prop_assert_eq!(out.trim(), out.as_str());
            prop_assert!(!out.contains("  "), "double space in {:?}", out);
        }

        #[test]
        fn join_is_idempotent(values in prop::collection::vec(class_value(), 0..5)) {
            let once = join(&values);
            let twice = join(&[ClassValue::Str(once.clone())]);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn join_equals_concatenated_tokens(values in prop::collection::vec(class_value(), 0..5)) {
            let expected: Vec<String> = values.iter().flat_map(tokens).collect();
            prop_assert_eq!(join(&values), expected.join(" "));
        }
    }
}

//! MiniJinja template functions for [`cva`].
//!
//! This crate exposes class joining and variant resolution inside
//! templates:
//!
//! - [`register_cx`] adds a `cx(...)` function and a `cx` filter
//! - [`register_resolver`] adds a named resolver, callable with keyword
//!   arguments or as a filter over a map of props
//! - [`to_class_value`] converts template values into [`ClassValue`]s
//!
//! # Example
//!
//! ```rust
//! use cva::{cva, Variant, VariantConfig};
//! use minijinja::{context, Environment};
//!
//! let mut env = Environment::new();
//! cva_minijinja::register_cx(&mut env);
//! cva_minijinja::register_resolver(
//!     &mut env,
//!     "button",
//!     cva(
//!         "btn",
//!         VariantConfig::new()
//!             .variant("intent", Variant::new().option("primary", "btn--primary")),
//!     ),
//! );
//!
//! let out = env
//!     .render_str(
//!         r#"<a class="{{ button(intent="primary") }}"></a><b class="{{ cx("x", {"on": active}) }}"></b>"#,
//!         context! { active => true },
//!     )
//!     .unwrap();
//! assert_eq!(out, r#"<a class="btn btn--primary"></a><b class="x on"></b>"#);
//! ```

use cva::{join, ClassValue, Props, Resolver, MAX_DEPTH};
use minijinja::value::{Kwargs, Rest, Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};

/// Converts a template value into a [`ClassValue`].
///
/// | Template value | Class value |
/// |----------------|-------------|
/// | undefined, `none` | `Null` |
/// | boolean | `Bool` |
/// | integer | `Int` |
/// | float | `Float` |
/// | string | `Str` |
/// | sequence, iterable | `List` |
/// | map | `Map`, keys stringified |
/// | anything else | `Opaque` |
///
/// Template macros are map objects exposing `name` and `arguments`, so they
/// convert like any other map rather than to [`ClassValue::Function`].
///
/// Containers nested deeper than [`MAX_DEPTH`] become `Null`.
pub fn to_class_value(value: &Value) -> ClassValue {
    convert(value, 0)
}

fn convert(value: &Value, depth: usize) -> ClassValue {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => ClassValue::Null,
        ValueKind::Bool => ClassValue::Bool(value.is_true()),
        ValueKind::Number => match i64::try_from(value.clone()) {
            Ok(i) => ClassValue::Int(i),
            Err(_) => f64::try_from(value.clone())
                .map(ClassValue::Float)
                .unwrap_or(ClassValue::Null),
        },
        ValueKind::String => ClassValue::Str(value.as_str().unwrap_or_default().to_string()),
        ValueKind::Seq | ValueKind::Iterable | ValueKind::Map if depth >= MAX_DEPTH => {
            tracing::warn!(
                max_depth = MAX_DEPTH,
                "template value nested too deeply, treating it as empty"
            );
            ClassValue::Null
        }
        ValueKind::Seq | ValueKind::Iterable => match value.try_iter() {
            Ok(items) => ClassValue::List(items.map(|item| convert(&item, depth + 1)).collect()),
            Err(_) => ClassValue::Opaque,
        },
        ValueKind::Map => match value.try_iter() {
            Ok(keys) => keys
                .map(|key| {
                    let entry = value.get_item(&key).unwrap_or_default();
                    (map_key(&key), convert(&entry, depth + 1))
                })
                .collect(),
            Err(_) => ClassValue::Opaque,
        },
        _ => ClassValue::Opaque,
    }
}

fn map_key(key: &Value) -> String {
    match key.as_str() {
        Some(s) => s.to_string(),
        None => convert(key, MAX_DEPTH)
            .variant_key()
            .unwrap_or_else(|| key.to_string()),
    }
}

/// Registers the `cx` function and filter.
///
/// ```jinja
/// {{ cx("btn", {"active": is_active}, extra_classes) }}
/// {{ base_classes | cx("mt-2") }}
/// ```
pub fn register_cx(env: &mut Environment<'_>) {
    env.add_function("cx", |args: Rest<Value>| -> String { join_values(&args.0) });
    env.add_filter("cx", |value: Value, args: Rest<Value>| -> String {
        let mut values = Vec::with_capacity(args.0.len() + 1);
        values.push(value);
        values.extend(args.0);
        join_values(&values)
    });
}

fn join_values(values: &[Value]) -> String {
    let converted: Vec<ClassValue> = values.iter().map(to_class_value).collect();
    join(&converted)
}

/// Registers `resolver` as a function and a filter named `name`.
///
/// The function takes props as keyword arguments, the filter takes a map:
///
/// ```jinja
/// {{ button(intent="primary", size="large", class="mt-2") }}
/// {{ item.style | button }}
/// ```
///
/// Piping anything other than a map or `none` into the filter is an error.
pub fn register_resolver(env: &mut Environment<'_>, name: &str, resolver: Resolver) {
    let filter_resolver = resolver.clone();

    env.add_function(
        name.to_string(),
        move |kwargs: Kwargs| -> Result<String, Error> {
            let mut props = Props::new();
            for key in kwargs.args() {
                let value: Value = kwargs.get(key)?;
                props.insert(key, to_class_value(&value));
            }
            Ok(resolver.resolve(&props))
        },
    );

    env.add_filter(
        name.to_string(),
        move |value: Value| -> Result<String, Error> {
            let props = match to_class_value(&value) {
                ClassValue::Null => Props::new(),
                ClassValue::Map(entries) => Props::from(entries),
                _ => {
                    return Err(Error::new(
                        ErrorKind::InvalidOperation,
                        "class resolver filter expects a map of props",
                    ))
                }
            };
            Ok(filter_resolver.resolve(&props))
        },
    );
}

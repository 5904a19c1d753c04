use cva::{cva, ClassValue, CompoundRule, Variant, VariantConfig};
use cva_minijinja::{register_cx, register_resolver};
use minijinja::{context, Environment};

fn env() -> Environment<'static> {
    let mut env = Environment::new();
    register_cx(&mut env);
    register_resolver(
        &mut env,
        "button",
        cva(
            "btn",
            VariantConfig::new()
                .variant(
                    "intent",
                    Variant::new()
                        .option("primary", "btn--primary")
                        .option("secondary", "btn--secondary"),
                )
                .variant(
                    "size",
                    Variant::new()
                        .option("small", "btn--small")
                        .option("large", "btn--large"),
                )
                .default_variant("size", "small")
                .compound(
                    CompoundRule::new()
                        .when("intent", "primary")
                        .when("size", "large")
                        .class("shadow"),
                ),
        ),
    );
    register_resolver(
        &mut env,
        "spacing",
        cva(
            ClassValue::Null,
            VariantConfig::new().variant("margin", Variant::new().option(0, "m-0").option(4, "m-4")),
        ),
    );
    env
}

#[test]
fn test_cx_function() {
    let out = env()
        .render_str(
            r#"{{ cx("a", 0, none, ["b", ["c"]], {"d": true, "e": false}) }}"#,
            context! {},
        )
        .unwrap();
    assert_eq!(out, "a b c d");
}

#[test]
fn test_cx_function_with_context_values() {
    let out = env()
        .render_str(
            r#"{{ cx("item", {"item--active": active, "item--empty": not items}, extra) }}"#,
            context! { active => true, items => Vec::<i32>::new(), extra => vec!["mt-2"] },
        )
        .unwrap();
    assert_eq!(out, "item item--active item--empty mt-2");
}

#[test]
fn test_cx_filter() {
    let out = env()
        .render_str(r#"{{ ["a", "b"] | cx("c", undefined_value) }}"#, context! {})
        .unwrap();
    assert_eq!(out, "a b c");
}

#[test]
fn test_cx_over_macro_uses_its_attributes() {
    let out = env()
        .render_str(r#"{% macro m() %}x{% endmacro %}{{ cx(m) }}"#, context! {})
        .unwrap();
    assert_eq!(out, "name arguments");
}

#[test]
fn test_resolver_function_with_kwargs() {
    let env = env();
    assert_eq!(env.render_str("{{ button() }}", context! {}).unwrap(), "btn btn--small");
    assert_eq!(
        env.render_str(
            r#"{{ button(intent="primary", size="large", class="mt-2") }}"#,
            context! {}
        )
        .unwrap(),
        "btn btn--primary btn--large shadow mt-2"
    );
    assert_eq!(
        env.render_str(r#"{{ button(intent="nope") }}"#, context! {}).unwrap(),
        "btn btn--small"
    );
}

#[test]
fn test_resolver_numeric_kwargs() {
    let out = env()
        .render_str("{{ spacing(margin=4) }}|{{ spacing(margin=0) }}", context! {})
        .unwrap();
    assert_eq!(out, "m-4|m-0");
}

#[test]
fn test_resolver_filter_over_props_map() {
    let out = env()
        .render_str(
            "{% for item in items %}[{{ item.style | button }}]{% endfor %}",
            context! {
                items => serde_json::json!([
                    {"style": {"intent": "secondary"}},
                    {"style": {"intent": "primary", "size": "large"}},
                    {"style": null},
                ]),
            },
        )
        .unwrap();
    assert_eq!(
        out,
        "[btn btn--secondary btn--small][btn btn--primary btn--large shadow][btn btn--small]"
    );
}

#[test]
fn test_resolver_filter_rejects_non_map() {
    let err = env()
        .render_str(r#"{{ "primary" | button }}"#, context! {})
        .unwrap_err();
    assert!(err.to_string().contains("map of props"));
}

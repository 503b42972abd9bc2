use retween_core::property::bag;
use retween_core::{PluginRegistry, Tween, Value};
use retween_style::{Config, StyleOptions, StylePlugin};
use retween_test_fixtures::{FakeElement, PlainTarget};

fn registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    StylePlugin::install(&mut registry, Config::default());
    registry
}

/// it should tween a numeric style property using its discovered unit
#[test]
fn scalar_property_end_to_end() {
    let el = FakeElement::new().with_inline("top", "10px");
    let mut tween = Tween::new(Box::new(el.clone()), &registry());
    let step = tween.to(bag([("top", 20.0)]));

    tween.apply(step, 0.5).unwrap();
    assert_eq!(el.style("top").as_deref(), Some("15px"));

    tween.apply(step, 0.0).unwrap();
    assert_eq!(el.style("top").as_deref(), Some("10px"));

    tween.apply(step, 1.0).unwrap();
    assert_eq!(el.style("top").as_deref(), Some("20px"));
}

/// it should keep the unit derived at init across steps
#[test]
fn scalar_unit_is_fixed_at_first_parse() {
    let el = FakeElement::new().with_inline("left", "1.5em");
    let mut tween = Tween::new(Box::new(el.clone()), &registry());
    let first = tween.to(bag([("left", 3.0)]));
    let second = tween.to(bag([("left", 6.0)]));

    tween.apply(first, 0.5).unwrap();
    assert_eq!(el.style("left").as_deref(), Some("2.25em"));

    // the committed "2.25em" does not re-derive the unit on later steps
    tween.apply(second, 0.5).unwrap();
    assert_eq!(el.style("left").as_deref(), Some("4.5em"));
}

/// it should blend matching transforms and resolve wildcards end-to-end
#[test]
fn transform_wildcard_end_to_end() {
    let el = FakeElement::new().with_inline("transform", "translate(0px,0px) rotate(0deg)");
    let mut tween = Tween::new(Box::new(el.clone()), &registry());
    let step = tween.to(bag([("transform", "translate(50px,50px) *")]));

    tween.apply(step, 0.5).unwrap();
    assert_eq!(
        el.style("transform").as_deref(),
        Some("translate(25px, 25px) rotate(0deg)")
    );

    // ratio 0 reproduces the original source string literally
    tween.apply(step, 0.0).unwrap();
    assert_eq!(
        el.style("transform").as_deref(),
        Some("translate(0px,0px) rotate(0deg)")
    );

    // ratio 1 reproduces the authored target string literally
    tween.apply(step, 1.0).unwrap();
    assert_eq!(el.style("transform").as_deref(), Some("translate(50px,50px) *"));
}

/// it should chain wildcard steps against the previous structured value
#[test]
fn transform_chained_steps() {
    let el = FakeElement::new().with_inline("transform", "translate(0px, 0px) rotate(0deg)");
    let mut tween = Tween::new(Box::new(el.clone()), &registry());
    let first = tween.to(bag([("transform", "translate(50px, 50px) *")]));
    let second = tween.to(bag([("transform", "* rotate(90deg)")]));

    tween.apply(first, 0.5).unwrap();
    assert_eq!(
        el.style("transform").as_deref(),
        Some("translate(25px, 25px) rotate(0deg)")
    );

    // the second step's wildcard copies the translate from step one
    tween.apply(second, 0.5).unwrap();
    assert_eq!(
        el.style("transform").as_deref(),
        Some("translate(50px, 50px) rotate(45deg)")
    );
}

/// it should fall back to a discrete switch when shapes don't match
#[test]
fn transform_mismatch_switches_discretely() {
    let el = FakeElement::new().with_inline("transform", "translate(10px, 20px)");
    let mut tween = Tween::new(Box::new(el.clone()), &registry());
    let step = tween.to(bag([("transform", "scale(2)")]));

    // no blend at any mid-range ratio
    for ratio in [0.1, 0.4, 0.9] {
        tween.apply(step, ratio).unwrap();
        assert_eq!(el.style("transform").as_deref(), Some("translate(10px, 20px)"));
    }
    tween.apply(step, 1.0).unwrap();
    assert_eq!(el.style("transform").as_deref(), Some("scale(2)"));
}

/// it should switch discretely on unit mismatches too
#[test]
fn transform_unit_mismatch_switches_discretely() {
    let el = FakeElement::new().with_inline("transform", "translate(20px, 30px)");
    let mut tween = Tween::new(Box::new(el.clone()), &registry());
    let step = tween.to(bag([("transform", "translate(5em, 300px)")]));

    tween.apply(step, 0.5).unwrap();
    assert_eq!(el.style("transform").as_deref(), Some("translate(20px, 30px)"));
}

/// it should pass opaque values through verbatim, switching at the end
#[test]
fn opaque_property_passes_through() {
    let el = FakeElement::new().with_inline("color", "red");
    let mut tween = Tween::new(Box::new(el.clone()), &registry());
    let step = tween.to(bag([("color", "blue")]));

    tween.apply(step, 0.5).unwrap();
    assert_eq!(el.style("color").as_deref(), Some("red"));

    tween.apply(step, 1.0).unwrap();
    assert_eq!(el.style("color").as_deref(), Some("blue"));
}

/// it should tween scalar and transform properties on the same tween
#[test]
fn mixed_properties_on_one_tween() {
    let el = FakeElement::new()
        .with_inline("top", "0px")
        .with_inline("transform", "rotate(0deg)");
    let mut tween = Tween::new(Box::new(el.clone()), &registry());
    let step = tween.to(bag([
        ("top", Value::Number(100.0)),
        ("transform", Value::Text("rotate(180deg)".into())),
    ]));

    tween.apply(step, 0.25).unwrap();
    assert_eq!(el.style("top").as_deref(), Some("25px"));
    assert_eq!(el.style("transform").as_deref(), Some("rotate(45deg)"));
}

/// it should leave non-stylable targets to the default write path
#[test]
fn non_stylable_target_uses_default_path() {
    let target = PlainTarget::new().with_value("x", 0.0);
    let mut tween = Tween::new(Box::new(target.clone()), &registry());
    let step = tween.to(bag([("x", 10.0)]));
    tween.apply(step, 0.5).unwrap();
    // the plugin declined; the value stays a plain number, no unit suffix
    assert_eq!(target.value("x"), Some(Value::Number(5.0)));
}

/// it should skip properties with no readable initial style
#[test]
fn missing_initial_style_drops_property() {
    let el = FakeElement::new().with_inline("top", "10px");
    let mut tween = Tween::new(Box::new(el.clone()), &registry());
    let step = tween.to(bag([("top", 20.0), ("width", 100.0)]));
    tween.apply(step, 1.0).unwrap();
    assert_eq!(el.style("top").as_deref(), Some("20px"));
    assert_eq!(el.style("width"), None);
}

/// it should read computed styles when the per-tween override asks for it
#[test]
fn compute_override_enables_computed_reads() {
    let el = FakeElement::new().with_computed("width", "50px");

    // default config: inline read finds nothing, property is dropped
    let mut tween = Tween::new(Box::new(el.clone()), &registry());
    let step = tween.to(bag([("width", 100.0)]));
    tween.apply(step, 0.5).unwrap();
    assert_eq!(el.style("width"), None);

    // per-tween override: computed read seeds 50px
    let plugin = StylePlugin::with_options(
        Config::default(),
        StyleOptions {
            compute: Some(true),
            ..Default::default()
        },
    );
    let mut tween = Tween::with_plugins(Box::new(el.clone()), vec![Box::new(plugin)]);
    let step = tween.to(bag([("width", 100.0)]));
    tween.apply(step, 0.5).unwrap();
    assert_eq!(el.style("width").as_deref(), Some("75px"));
}

/// it should do nothing for a tween with the plugin disabled
#[test]
fn disabled_plugin_leaves_default_handling() {
    let el = FakeElement::new().with_inline("top", "10px");
    let plugin = StylePlugin::with_options(
        Config::default(),
        StyleOptions {
            disabled: true,
            ..Default::default()
        },
    );
    let mut tween = Tween::with_plugins(Box::new(el.clone()), vec![Box::new(plugin)]);
    let step = tween.to(bag([("top", 20.0)]));
    // FakeElement exposes no generic values, so the property is dropped
    tween.apply(step, 0.5).unwrap();
    assert_eq!(el.style("top").as_deref(), Some("10px"));
}

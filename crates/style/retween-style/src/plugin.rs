//! The style plugin adapter: retween lifecycle hooks over the parser,
//! matcher, and writer.

use hashbrown::HashMap;

use retween_core::{
    ChangeDecision, InitDecision, PluginRegistry, Stylable, TweenPlugin, TweenStep, TweenTarget,
    Value,
};

use crate::config::{Config, StyleOptions};
use crate::parse::{parse_scalar, parse_transform};
use crate::transform::TransformValue;
use crate::value::{PropertyUnit, StyleValue};
use crate::write::{write_scalar, write_transform};

/// The one property with composite handling.
pub const TRANSFORM: &str = "transform";

/// Per-tween style plugin instance.
///
/// Owns the property-to-unit table (populated lazily, one entry per
/// distinct property ever initialized on the tween) and the structured
/// transform value at each step boundary. Nothing here is shared across
/// tweens.
pub struct StylePlugin {
    config: Config,
    options: StyleOptions,
    units: HashMap<String, PropertyUnit>,
    /// Structured transform at the tween's start.
    seed_transform: Option<TransformValue>,
    /// Structured transform at the end of each step, by step index.
    step_transforms: HashMap<usize, TransformValue>,
}

impl StylePlugin {
    pub const ID: &'static str = "style";
    /// High priority: reads before other plugins on init and, with the
    /// host's single-sort-key ordering, writes after them on change.
    pub const PRIORITY: i32 = 100;

    pub fn new(config: Config) -> Self {
        Self::with_options(config, StyleOptions::default())
    }

    /// Construct with per-tween overrides (used with
    /// `Tween::with_plugins`).
    pub fn with_options(config: Config, options: StyleOptions) -> Self {
        Self {
            config,
            options,
            units: HashMap::new(),
            seed_transform: None,
            step_transforms: HashMap::new(),
        }
    }

    /// Install this plugin into a registry with the given global config.
    pub fn install(registry: &mut PluginRegistry, config: Config) {
        registry.install(move || Box::new(StylePlugin::new(config)));
    }

    fn read_style(&self, style: &dyn Stylable, prop: &str) -> Option<String> {
        if self.options.compute.unwrap_or(self.config.compute) {
            style.computed_style(prop)
        } else {
            style.inline_style(prop)
        }
    }

    /// Structured values bounding the given step: start of the step and
    /// its target.
    fn transform_pair(&self, step_index: usize) -> Option<(&TransformValue, &TransformValue)> {
        let from = if step_index == 0 {
            self.seed_transform.as_ref()
        } else {
            self.step_transforms
                .get(&(step_index - 1))
                .or(self.seed_transform.as_ref())
        }?;
        let to = self.step_transforms.get(&step_index)?;
        Some((from, to))
    }
}

impl TweenPlugin for StylePlugin {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn init(
        &mut self,
        target: &mut dyn TweenTarget,
        prop: &str,
        current: Option<&Value>,
    ) -> InitDecision {
        if self.options.disabled {
            return InitDecision::Decline;
        }
        let Some(style) = target.as_stylable() else {
            return InitDecision::Decline;
        };

        let raw = match current {
            Some(value) => value.to_raw(),
            None => match self.read_style(style, prop) {
                Some(raw) => raw,
                None => return InitDecision::Decline,
            },
        };

        if prop == TRANSFORM {
            self.units.insert(prop.to_string(), PropertyUnit::Composite);
            self.seed_transform = Some(parse_transform(&raw, None));
            return InitDecision::Seed(Value::Text(raw));
        }

        match parse_scalar(&raw) {
            StyleValue::Scalar { number, unit } => {
                self.units.insert(prop.to_string(), PropertyUnit::Scalar(unit));
                InitDecision::Seed(Value::Number(number))
            }
            _ => {
                self.units.insert(prop.to_string(), PropertyUnit::Opaque);
                InitDecision::Seed(Value::Text(raw))
            }
        }
    }

    fn step(&mut self, step: &TweenStep) {
        if !matches!(self.units.get(TRANSFORM), Some(PropertyUnit::Composite)) {
            return;
        }
        let Some(Value::Text(raw)) = step.props.get(TRANSFORM) else {
            return;
        };
        let compare = if step.index == 0 {
            self.seed_transform.clone()
        } else {
            self.step_transforms
                .get(&(step.index - 1))
                .cloned()
                .or_else(|| self.seed_transform.clone())
        };
        let parsed = parse_transform(raw, compare.as_ref());
        self.step_transforms.insert(step.index, parsed);
    }

    fn change(
        &mut self,
        target: &mut dyn TweenTarget,
        step: &TweenStep,
        prop: &str,
        value: &Value,
        ratio: f64,
        _end: bool,
    ) -> ChangeDecision {
        // Unknown to this plugin: fall through to default handling.
        let Some(unit) = self.units.get(prop) else {
            return ChangeDecision::Pass;
        };

        let out = match unit {
            PropertyUnit::Composite => match self.transform_pair(step.index) {
                Some((from, to)) => write_transform(from, to, ratio),
                None => value.to_raw(),
            },
            PropertyUnit::Scalar(suffix) => match value {
                Value::Number(n) => write_scalar(*n, suffix),
                Value::Text(s) => s.clone(),
            },
            // Opaque values ride the default hold-then-switch blend and
            // are reused literally.
            PropertyUnit::Opaque => value.to_raw(),
        };

        let Some(style) = target.as_stylable() else {
            return ChangeDecision::Pass;
        };
        style.set_style(prop, &out);
        ChangeDecision::Applied
    }
}

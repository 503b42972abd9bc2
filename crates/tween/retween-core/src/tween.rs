//! The tween driver: step sequencing and ratio application.

use thiserror::Error;

use crate::plugin::{ChangeDecision, InitDecision, PluginRegistry, TweenPlugin};
use crate::property::PropertyBag;
use crate::step::TweenStep;
use crate::target::TweenTarget;
use crate::value::Value;

#[derive(Debug, Error)]
pub enum TweenError {
    #[error("step index {index} out of range (tween has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },
}

struct PluginSlot {
    plugin: Box<dyn TweenPlugin>,
    /// Set when the plugin claims a property in `init`; enables the
    /// `step`/`change` hooks for this tween.
    active: bool,
}

/// A tween over one target: a start snapshot plus sequential steps.
///
/// The driver owns per-tween plugin instances and invokes the lifecycle
/// hooks at the three points the plugin contract names: property
/// initialization (first sight of a property), step creation, and ratio
/// application. Ratio progression itself is supplied by the caller.
pub struct Tween {
    target: Box<dyn TweenTarget>,
    plugins: Vec<PluginSlot>,
    steps: Vec<TweenStep>,
    start: PropertyBag,
}

impl Tween {
    /// Create a tween with per-tween plugin instances from the registry.
    pub fn new(target: Box<dyn TweenTarget>, registry: &PluginRegistry) -> Self {
        Self::with_plugins(target, registry.instantiate())
    }

    /// Create a tween with explicit plugin instances, e.g. to override
    /// per-tween plugin options. Instances are sorted by descending
    /// priority, same as the registry would.
    pub fn with_plugins(target: Box<dyn TweenTarget>, mut plugins: Vec<Box<dyn TweenPlugin>>) -> Self {
        plugins.sort_by_key(|p| std::cmp::Reverse(p.priority()));
        Self {
            target,
            plugins: plugins
                .into_iter()
                .map(|plugin| PluginSlot {
                    plugin,
                    active: false,
                })
                .collect(),
            steps: Vec::new(),
            start: PropertyBag::new(),
        }
    }

    pub fn steps(&self) -> &[TweenStep] {
        &self.steps
    }

    /// Start value recorded for a property at initialization, if the
    /// property was accepted.
    pub fn start_value(&self, prop: &str) -> Option<&Value> {
        self.start.get(prop)
    }

    pub fn target(&self) -> &dyn TweenTarget {
        self.target.as_ref()
    }

    /// Append a step targeting `props`, returning its index. Properties
    /// seen for the first time are initialized through the plugin chain;
    /// properties with no plugin seed and no target value are dropped.
    pub fn to(&mut self, props: PropertyBag) -> usize {
        for prop in props.keys() {
            if !self.start.contains_key(prop.as_str()) {
                self.init_property(prop.as_str());
            }
        }

        let index = self.steps.len();
        let mut prev = self
            .steps
            .last()
            .map(|s| s.props.clone())
            .unwrap_or_default();
        for prop in props.keys() {
            if !prev.contains_key(prop.as_str()) {
                if let Some(v) = self.start.get(prop.as_str()) {
                    prev.insert(prop.clone(), v.clone());
                }
            }
        }

        let mut current = prev.clone();
        for (prop, value) in props {
            // Only initialized properties participate in the step.
            if self.start.contains_key(prop.as_str()) {
                current.insert(prop, value);
            }
        }

        let step = TweenStep {
            index,
            prev,
            props: current,
        };

        let mut plugins = std::mem::take(&mut self.plugins);
        for slot in plugins.iter_mut().filter(|s| s.active) {
            slot.plugin.step(&step);
        }
        self.plugins = plugins;

        self.steps.push(step);
        index
    }

    /// Apply `ratio` (clamped to [0, 1]) within the given step, running
    /// every property through the default blend and the plugin change
    /// chain. Highest-priority plugins write last; if no plugin reports
    /// `Applied`, the default write path commits the value.
    pub fn apply(&mut self, step_index: usize, ratio: f64) -> Result<(), TweenError> {
        let len = self.steps.len();
        let step = self
            .steps
            .get(step_index)
            .cloned()
            .ok_or(TweenError::StepOutOfRange {
                index: step_index,
                len,
            })?;
        let ratio = ratio.clamp(0.0, 1.0);
        let end = ratio >= 1.0 && step_index + 1 == len;

        let mut plugins = std::mem::take(&mut self.plugins);
        for (prop, target_value) in step.props.iter() {
            let value = default_blend(step.prev.get(prop.as_str()), target_value, ratio);
            let mut applied = false;
            for slot in plugins.iter_mut().rev().filter(|s| s.active) {
                let decision = slot.plugin.change(
                    self.target.as_mut(),
                    &step,
                    prop.as_str(),
                    &value,
                    ratio,
                    end,
                );
                if decision == ChangeDecision::Applied {
                    applied = true;
                }
            }
            if !applied {
                self.target.set_value(prop.as_str(), &value);
            }
        }
        self.plugins = plugins;
        Ok(())
    }

    fn init_property(&mut self, prop: &str) {
        let mut seed: Option<Value> = None;
        let mut plugins = std::mem::take(&mut self.plugins);
        for slot in plugins.iter_mut() {
            match slot.plugin.init(self.target.as_mut(), prop, seed.as_ref()) {
                InitDecision::Decline => {}
                InitDecision::Seed(v) => {
                    seed = Some(v);
                    slot.active = true;
                }
            }
        }
        self.plugins = plugins;

        match seed.or_else(|| self.target.get_value(prop)) {
            Some(v) => {
                self.start.insert(prop.to_string(), v);
            }
            None => log::debug!("property {prop:?} has no initial value; dropped from tween"),
        }
    }
}

/// The host's default interpolation: linear for number pairs, hold-left
/// for anything else until the ratio reaches 1.
fn default_blend(prev: Option<&Value>, current: &Value, ratio: f64) -> Value {
    match (prev, current) {
        (Some(Value::Number(a)), Value::Number(b)) => Value::Number(a + (b - a) * ratio),
        (Some(prev), _) if ratio < 1.0 => prev.clone(),
        _ => current.clone(),
    }
}

//! Plugin lifecycle contract and registry.
//!
//! Plugins are per-tween stateful instances produced by registry
//! factories, so no plugin state is ever shared across tweens. The
//! registry dedupes by plugin id and keeps entries sorted by one
//! descending priority key; the tween driver walks that order forward on
//! `init` (highest priority reads first) and backward on `change`
//! (highest priority writes last).

use crate::step::TweenStep;
use crate::target::TweenTarget;
use crate::value::Value;

/// Outcome of a plugin's `init` hook for one property.
#[derive(Clone, Debug, PartialEq)]
pub enum InitDecision {
    /// The plugin declines responsibility; host default handling applies.
    Decline,
    /// The plugin claims the property and supplies its starting value.
    /// Claiming a property activates the plugin on the tween, enabling
    /// its `change` hook.
    Seed(Value),
}

/// Outcome of a plugin's `change` hook for one property.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChangeDecision {
    /// Not handled; the host's default write path applies.
    Pass,
    /// The plugin already applied the side effect; the host must suppress
    /// its default write for this property.
    Applied,
}

/// Lifecycle hooks a host scheduler calls on each per-tween plugin
/// instance.
pub trait TweenPlugin {
    /// Unique identifying string, used by the registry to dedupe repeated
    /// installation.
    fn id(&self) -> &'static str;

    /// Single ordering key: higher sorts first for `init` and last for
    /// `change`.
    fn priority(&self) -> i32 {
        0
    }

    /// Called when a property is first seen on the tween. `current` is
    /// the seed produced by higher-priority plugins, if any.
    fn init(
        &mut self,
        target: &mut dyn TweenTarget,
        prop: &str,
        current: Option<&Value>,
    ) -> InitDecision;

    /// Called once per new step with the merged prev/current snapshot.
    fn step(&mut self, step: &TweenStep) {
        let _ = step;
    }

    /// Called for every property on each ratio application. `value` is
    /// the host's default-interpolated value for this ratio.
    fn change(
        &mut self,
        target: &mut dyn TweenTarget,
        step: &TweenStep,
        prop: &str,
        value: &Value,
        ratio: f64,
        end: bool,
    ) -> ChangeDecision;
}

type PluginFactory = Box<dyn Fn() -> Box<dyn TweenPlugin>>;

struct RegistryEntry {
    id: &'static str,
    priority: i32,
    make: PluginFactory,
}

/// Installed plugin factories, sorted by descending priority.
#[derive(Default)]
pub struct PluginRegistry {
    entries: Vec<RegistryEntry>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a plugin factory. Repeat installs of an already-present
    /// plugin id are ignored.
    pub fn install<F>(&mut self, make: F)
    where
        F: Fn() -> Box<dyn TweenPlugin> + 'static,
    {
        let probe = make();
        let id = probe.id();
        if self.entries.iter().any(|e| e.id == id) {
            return;
        }
        self.entries.push(RegistryEntry {
            id,
            priority: probe.priority(),
            make: Box::new(make),
        });
        // Stable sort keeps install order among equal priorities.
        self.entries
            .sort_by_key(|e| std::cmp::Reverse(e.priority));
    }

    pub fn is_installed(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Produce fresh per-tween plugin instances, in priority order.
    pub fn instantiate(&self) -> Vec<Box<dyn TweenPlugin>> {
        self.entries.iter().map(|e| (e.make)()).collect()
    }
}

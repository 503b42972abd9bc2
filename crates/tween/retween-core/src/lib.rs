//! retween-core: host-side tween model and plugin contract (engine-agnostic).
//!
//! This crate defines the property value model, per-step property
//! snapshots, the target seams (`TweenTarget`/`Stylable`), the plugin
//! lifecycle contract (`TweenPlugin`), and a minimal `Tween` driver that
//! sequences `.to()` steps and applies a caller-supplied ratio to one
//! step. Easing curves and playhead bookkeeping are the embedding
//! scheduler's business, not this crate's.

pub mod plugin;
pub mod property;
pub mod step;
pub mod target;
pub mod tween;
pub mod value;

// Re-exports for consumers (plugins and hosts)
pub use plugin::{ChangeDecision, InitDecision, PluginRegistry, TweenPlugin};
pub use property::PropertyBag;
pub use step::TweenStep;
pub use target::{Stylable, TweenTarget};
pub use tween::{Tween, TweenError};
pub use value::{Value, ValueKind};

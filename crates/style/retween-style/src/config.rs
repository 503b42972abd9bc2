//! Style plugin configuration.

use serde::{Deserialize, Serialize};

/// Global defaults for the style plugin. Set once at startup when
/// installing the plugin into a registry; read-only afterwards.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// When false (the default), only inline style values are used to
    /// determine which properties are tweened as styles and what units
    /// apply. When true, the resolved/computed style is read instead.
    /// Computed reads see every style affecting the target, but values
    /// come back normalized (a `%` width may read back as `px`) and the
    /// larger property surface raises the chance an unrelated property is
    /// identified as a style, so the recommended setup keeps the global
    /// default false and overrides per tween where needed.
    pub compute: bool,
}

/// Per-tween overrides, applied when constructing a plugin instance for
/// one specific tween.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Overrides [`Config::compute`] when `Some`.
    pub compute: Option<bool>,
    /// Disables the plugin entirely for this tween.
    pub disabled: bool,
}

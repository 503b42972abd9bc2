//! Target seams.
//!
//! A `TweenTarget` is anything a tween can read and write generic values
//! on. Targets with style-like capability additionally expose a
//! `Stylable` view; targets without one keep the default `None`, which is
//! how style-oriented plugins know to decline involvement.

use crate::value::Value;

/// Style-like capability: named string properties with an inline and a
/// resolved/computed read path.
pub trait Stylable {
    /// Read the inline (directly set) style value, if any.
    fn inline_style(&self, prop: &str) -> Option<String>;

    /// Read the resolved/computed style value, if any.
    fn computed_style(&self, prop: &str) -> Option<String>;

    /// Commit a style value.
    fn set_style(&mut self, prop: &str, value: &str);
}

/// The object a tween mutates.
pub trait TweenTarget {
    /// Current value of a generic property, used to seed a tween's start
    /// value when no plugin claims the property.
    fn get_value(&self, prop: &str) -> Option<Value>;

    /// Default write path for a property.
    fn set_value(&mut self, prop: &str, value: &Value);

    /// Style-like view of this target, when it has one.
    fn as_stylable(&mut self) -> Option<&mut dyn Stylable> {
        None
    }
}

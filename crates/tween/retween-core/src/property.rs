//! Property bags: string-keyed value maps owned by tweens and steps.

use crate::value::Value;

/// Per-tween/per-step key-value property snapshot.
pub type PropertyBag = hashbrown::HashMap<String, Value>;

/// Build a bag from `(name, value)` pairs; mostly a convenience for hosts
/// and tests.
pub fn bag<I, K, V>(entries: I) -> PropertyBag
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

//! Interpolated output string production.

use std::fmt::Write as _;

use crate::transform::TransformValue;

/// Concatenate a numeric value with its unit suffix, no space between.
pub fn write_scalar(number: f64, unit: &str) -> String {
    format!("{number}{unit}")
}

/// Interpolate between two transform values at `ratio`.
///
/// Endpoints reuse the literal source strings: ratio 1 returns `to.raw`
/// and ratio 0 returns `from.raw`, so author formatting is preserved and
/// no floating-point reconstruction drift can appear at the ends. When
/// `to` is not shape-compatible with `from`, every mid-range ratio also
/// falls back to `from.raw` (discrete switch instead of a blend).
pub fn write_transform(from: &TransformValue, to: &TransformValue, ratio: f64) -> String {
    if ratio == 1.0 {
        return to.raw.clone();
    }
    if ratio == 0.0 || !to.compatible {
        return from.raw.clone();
    }

    let mut out = String::new();
    for (i, (a, b)) in from.ops.iter().zip(to.ops.iter()).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&a.name);
        out.push('(');
        for (j, (ca, cb)) in a.components.iter().zip(b.components.iter()).enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            let number = ca.number + (cb.number - ca.number) * ratio;
            let unit = if cb.unit.is_empty() { &ca.unit } else { &cb.unit };
            let _ = write!(out, "{number}{unit}");
        }
        out.push(')');
    }
    out
}

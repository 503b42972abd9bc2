//! Transform value model and the shape-compatibility rule.

use serde::{Deserialize, Serialize};

/// One numeric component of a transform operation (`10`, `"px"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub number: f64,
    pub unit: String,
}

/// One named transform operation with ordered components, e.g.
/// `translate(10px, 20px)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub components: Vec<Component>,
}

/// A parsed transform list.
///
/// `raw` keeps the exact source string so endpoint writes can reproduce
/// author formatting instead of reconstructing (and drifting) from the
/// parsed numbers. `compatible` records whether this value's shape
/// matched the comparison value it was parsed against; it is false when
/// there was nothing to compare against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformValue {
    pub raw: String,
    pub compatible: bool,
    pub ops: Vec<Operation>,
}

/// Pure restatement of the compatibility rule: same operation count, and
/// per index the same operation name, component count, and per-component
/// unit. Order-sensitive; numbers are irrelevant.
pub fn matches(a: &TransformValue, b: &TransformValue) -> bool {
    a.ops.len() == b.ops.len()
        && a.ops.iter().zip(b.ops.iter()).all(|(x, y)| {
            x.name == y.name
                && x.components.len() == y.components.len()
                && x.components
                    .iter()
                    .zip(y.components.iter())
                    .all(|(c, d)| c.unit == d.unit)
        })
}

//! Tween steps: one segment of a tween's timeline.

use serde::{Deserialize, Serialize};

use crate::property::PropertyBag;

/// One segment of a tween, holding the full property snapshot at its
/// start (`prev`) and end (`props`). Properties not named by the step's
/// targets are carried forward from the previous step, so both bags
/// always cover every property the tween has ever initialized.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TweenStep {
    pub index: usize,
    pub prev: PropertyBag,
    pub props: PropertyBag,
}

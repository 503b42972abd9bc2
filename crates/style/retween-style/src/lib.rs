//! retween-style: a retween plugin for numeric style string properties
//! (ex. `top`, `left`) and transform lists.
//!
//! The plugin identifies style values by reading an initial value off the
//! target's style view and derives the unit to tween with from it. In the
//! following example `top` would be tweened as a style using `em` units,
//! but `width` would not (no initial inline value for it):
//!
//! ```text
//! el.style.top = "10em";
//! tween.to({ top: 20, width: 100 });
//! ```
//!
//! Transforms are tweened as long as their operations and units match:
//!
//! ```text
//! el.style.transform = "translate(20px, 30px)";
//! tween.to({ transform: "translate(40px, 50px)" })  // tweened, everything matches
//!      .to({ transform: "translate(5em, 300px)" })  // NOT tweened, px vs em
//!      .to({ transform: "scaleX(2)" });             // NOT tweened, different operations
//! ```
//!
//! A `*` operation copies the operation at that position from the
//! previous transform:
//!
//! ```text
//! el.style.transform = "translate(0px, 0px) rotate(0deg)";
//! tween.to({ transform: "translate(50px, 50px) *" })  // copies the rotate
//!      .to({ transform: "* rotate(90deg)" });         // copies the translate
//! ```

pub mod config;
pub mod parse;
pub mod plugin;
pub mod transform;
pub mod value;
pub mod write;

pub use config::{Config, StyleOptions};
pub use parse::{parse_scalar, parse_transform};
pub use plugin::StylePlugin;
pub use transform::{matches, Component, Operation, TransformValue};
pub use value::{PropertyUnit, StyleValue};
pub use write::{write_scalar, write_transform};

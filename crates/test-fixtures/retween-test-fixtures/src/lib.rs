//! Shared test fixtures for the retween crates.
//!
//! `FakeElement` is a stand-in for a styled rendering target (inline and
//! computed style maps); `PlainTarget` is a bare numeric target with no
//! style capability. Both are cheap cloneable handles over shared state
//! so tests can keep a handle while the tween owns the boxed target.

use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;
use retween_core::{Stylable, TweenTarget, Value};

#[derive(Default)]
struct ElementState {
    inline: HashMap<String, String>,
    computed: HashMap<String, String>,
}

/// A fake styled element. `set_style` writes into the inline map, like a
/// DOM element's `style` attribute, so committed values are visible to
/// later inline reads.
#[derive(Clone, Default)]
pub struct FakeElement {
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inline(self, prop: &str, value: &str) -> Self {
        self.state
            .borrow_mut()
            .inline
            .insert(prop.to_string(), value.to_string());
        self
    }

    pub fn with_computed(self, prop: &str, value: &str) -> Self {
        self.state
            .borrow_mut()
            .computed
            .insert(prop.to_string(), value.to_string());
        self
    }

    /// Currently committed style value, for assertions.
    pub fn style(&self, prop: &str) -> Option<String> {
        self.state.borrow().inline.get(prop).cloned()
    }
}

impl Stylable for FakeElement {
    fn inline_style(&self, prop: &str) -> Option<String> {
        self.state.borrow().inline.get(prop).cloned()
    }

    fn computed_style(&self, prop: &str) -> Option<String> {
        let state = self.state.borrow();
        state
            .computed
            .get(prop)
            .or_else(|| state.inline.get(prop))
            .cloned()
    }

    fn set_style(&mut self, prop: &str, value: &str) {
        self.state
            .borrow_mut()
            .inline
            .insert(prop.to_string(), value.to_string());
    }
}

impl TweenTarget for FakeElement {
    fn get_value(&self, _prop: &str) -> Option<Value> {
        // Styled elements expose no generic numeric properties.
        None
    }

    fn set_value(&mut self, prop: &str, value: &Value) {
        self.set_style(prop, &value.to_raw());
    }

    fn as_stylable(&mut self) -> Option<&mut dyn Stylable> {
        Some(self)
    }
}

/// A numeric target with no style capability.
#[derive(Clone, Default)]
pub struct PlainTarget {
    values: Rc<RefCell<HashMap<String, Value>>>,
}

impl PlainTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, prop: &str, value: impl Into<Value>) -> Self {
        self.values
            .borrow_mut()
            .insert(prop.to_string(), value.into());
        self
    }

    pub fn value(&self, prop: &str) -> Option<Value> {
        self.values.borrow().get(prop).cloned()
    }
}

impl TweenTarget for PlainTarget {
    fn get_value(&self, prop: &str) -> Option<Value> {
        self.values.borrow().get(prop).cloned()
    }

    fn set_value(&mut self, prop: &str, value: &Value) {
        self.values
            .borrow_mut()
            .insert(prop.to_string(), value.clone());
    }
}

/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::collections::HashMap;

use euclid::default::Size2D;
use style_interpolation::dom::TElement;
use style_interpolation::prefs::{self, Preferences};
use style_interpolation::properties::PropertyId;
use style_interpolation::values::color::ColorResolutionContext;
use style_interpolation::values::length::LengthResolutionContext;
use style_interpolation::values::{CSSFloat, RGBA, StyleValue, StyleValueKind};

/// An element with canned inherited values and layout.
#[derive(Default)]
pub struct TestElement {
    pub inherited: HashMap<PropertyId, StyleValue>,
    pub current_color: RGBA,
    pub reference_box: Option<Size2D<CSSFloat>>,
    pub prefs: Option<Preferences>,
}

impl TestElement {
    pub fn new() -> Self {
        init_logging();
        TestElement {
            current_color: RGBA::BLACK,
            ..Default::default()
        }
    }

    pub fn inheriting(mut self, property: PropertyId, value: StyleValue) -> Self {
        self.inherited.insert(property, value);
        self
    }

    pub fn with_current_color(mut self, color: RGBA) -> Self {
        self.current_color = color;
        self
    }

    /// Overrides a preference for this element only, leaving the
    /// process-wide store alone.
    pub fn with_pref(mut self, key: &str, value: bool) -> Self {
        self.prefs
            .get_or_insert_with(Preferences::with_defaults)
            .set_bool(key, value);
        self
    }
}

impl TElement for TestElement {
    fn non_animated_inherit_value(&self, property: PropertyId) -> Option<StyleValue> {
        self.inherited.get(&property).cloned()
    }

    fn color_resolution_context(&self) -> ColorResolutionContext {
        ColorResolutionContext { current_color: self.current_color }
    }

    fn reference_box(&self) -> Option<Size2D<CSSFloat>> {
        self.reference_box
    }

    fn preferences(&self) -> &Preferences {
        self.prefs.as_ref().unwrap_or(prefs::preferences())
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

/// The number a value holds, panicking on anything else.
pub fn number(value: &StyleValue) -> f32 {
    match *value.kind() {
        StyleValueKind::Number(v) => v,
        ref other => panic!("expected a number, got {:?}", other),
    }
}

/// Resolves a `calc()` value with default font and viewport sizes.
pub fn resolve_calc(value: &StyleValue, basis: Option<f32>) -> f32 {
    match *value.kind() {
        StyleValueKind::Calculated(ref calc) => calc
            .node()
            .resolve(&LengthResolutionContext::default(), basis)
            .expect("a resolvable calculation"),
        ref other => panic!("expected a calculation, got {:?}", other),
    }
}

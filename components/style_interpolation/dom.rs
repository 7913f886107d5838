/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The element an animation runs on, as far as interpolation is concerned.

use euclid::default::Size2D;

use crate::prefs::{self, Preferences};
use crate::properties::PropertyId;
use crate::values::color::ColorResolutionContext;
use crate::values::length::LengthResolutionContext;
use crate::values::transform::TransformResolutionContext;
use crate::values::{CSSFloat, StyleValue};

/// Read-only access to the styles and layout of an element.
pub trait TElement {
    /// The value `inherit` stands for: the parent's computed value of
    /// `property`, ignoring animations. `None` for the root.
    fn non_animated_inherit_value(&self, property: PropertyId) -> Option<StyleValue>;

    /// What `currentcolor` resolves to.
    fn color_resolution_context(&self) -> ColorResolutionContext {
        ColorResolutionContext::default()
    }

    /// Font sizes and the viewport, for relative lengths.
    fn length_resolution_context(&self) -> LengthResolutionContext {
        LengthResolutionContext::default()
    }

    /// The transform reference box, if the element has been laid out.
    fn reference_box(&self) -> Option<Size2D<CSSFloat>> {
        None
    }

    fn transform_resolution_context(&self) -> TransformResolutionContext {
        TransformResolutionContext {
            lengths: self.length_resolution_context(),
            reference_box: self.reference_box(),
        }
    }

    /// The preferences the element's document animates with.
    fn preferences(&self) -> &Preferences {
        prefs::preferences()
    }
}

/// An element outside of any document: it inherits nothing and uses the
/// default resolution contexts.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedElement;

impl TElement for DetachedElement {
    fn non_animated_inherit_value(&self, _: PropertyId) -> Option<StyleValue> {
        None
    }
}

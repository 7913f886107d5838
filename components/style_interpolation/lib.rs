/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Interpolation of computed CSS values, for animations and transitions.
//!
//! The entry points are [`interpolate_property`], which knows the rules of
//! every longhand in [`PropertyId`], the per-kind [`animated::interpolate_value`],
//! and [`animated::composite_value`] for additive animations.

#![deny(unsafe_code)]

pub mod animated;
pub mod calc;
pub mod dom;
pub mod prefs;
pub mod properties;
pub mod values;

pub use crate::animated::{AllowDiscrete, CompositeOperation};
pub use crate::dom::{DetachedElement, TElement};
pub use crate::properties::{
    PropertyId, TransitionBehavior, interpolate_property, property_values_are_transitionable,
};
pub use crate::values::StyleValue;

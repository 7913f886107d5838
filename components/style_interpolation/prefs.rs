/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Runtime preferences for the interpolation engine.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use log::{debug, warn};
use serde::Deserialize;

/// Whether `transition-behavior: allow-discrete` is honoured.
pub const TRANSITION_BEHAVIOR_ENABLED: &str = "layout.css.transition-behavior.enabled";

/// Whether colors written in modern syntax interpolate in Oklab.
pub const OKLAB_COLOR_INTERPOLATION_ENABLED: &str = "layout.css.oklab-color-interpolation.enabled";

/// Whether the `rotate` property interpolates rotations about different
/// axes as quaternions.
pub const INDIVIDUAL_ROTATE_SLERP_ENABLED: &str =
    "layout.css.transforms.individual-rotate-slerp.enabled";

const DEFAULTS: &[(&str, bool)] = &[
    (TRANSITION_BEHAVIOR_ENABLED, true),
    (OKLAB_COLOR_INTERPOLATION_ENABLED, true),
    (INDIVIDUAL_ROTATE_SLERP_ENABLED, true),
];

static PREFS: LazyLock<Preferences> = LazyLock::new(Preferences::with_defaults);

#[derive(Debug, Default)]
pub struct Preferences {
    bool_prefs: RwLock<HashMap<String, bool>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PrefValue {
    Bool(bool),
    Other(serde_json::Value),
}

impl Preferences {
    /// A store holding the default value of every known preference.
    pub fn with_defaults() -> Self {
        let prefs = Preferences::default();
        prefs.reset();
        prefs
    }

    /// Unknown preferences are `false`.
    pub fn get_bool(&self, key: &str) -> bool {
        let prefs = self.bool_prefs.read().unwrap_or_else(PoisonError::into_inner);
        *prefs.get(key).unwrap_or(&false)
    }

    pub fn set_bool(&self, key: &str, value: bool) {
        debug!("Setting preference {} to {}", key, value);
        let mut prefs = self.bool_prefs.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(pref) = prefs.get_mut(key) {
            *pref = value;
        } else {
            prefs.insert(key.to_owned(), value);
        }
    }

    /// Restores every known preference to its default.
    pub fn reset(&self) {
        let mut prefs = self.bool_prefs.write().unwrap_or_else(PoisonError::into_inner);
        prefs.clear();
        prefs.extend(DEFAULTS.iter().map(|&(key, value)| (key.to_owned(), value)));
    }

    /// Applies the boolean entries of a JSON object, e.g.
    /// `{"layout.css.transition-behavior.enabled": false}`, and returns how
    /// many were applied. Entries of other types are skipped.
    pub fn load_json(&self, json: &str) -> Result<usize, serde_json::Error> {
        let entries: HashMap<String, PrefValue> = serde_json::from_str(json)?;
        let mut applied = 0;
        for (key, value) in entries {
            match value {
                PrefValue::Bool(value) => {
                    self.set_bool(&key, value);
                    applied += 1;
                },
                PrefValue::Other(value) => {
                    warn!("Ignoring preference {} with non-boolean value {}", key, value);
                },
            }
        }
        Ok(applied)
    }
}

/// The process-wide store.
pub fn preferences() -> &'static Preferences {
    &PREFS
}

pub fn get_bool(key: &str) -> bool {
    PREFS.get_bool(key)
}

pub fn set_bool(key: &str, value: bool) {
    PREFS.set_bool(key, value)
}

pub fn load_json(json: &str) -> Result<usize, serde_json::Error> {
    PREFS.load_json(json).inspect_err(|error| warn!("Unparseable preferences: {}", error))
}

pub fn reset() {
    PREFS.reset()
}

/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use style_interpolation::prefs::{
    INDIVIDUAL_ROTATE_SLERP_ENABLED, OKLAB_COLOR_INTERPOLATION_ENABLED, Preferences,
    TRANSITION_BEHAVIOR_ENABLED,
};

use crate::support::init_logging;

#[test]
fn test_defaults() {
    let prefs = Preferences::with_defaults();
    assert!(prefs.get_bool(TRANSITION_BEHAVIOR_ENABLED));
    assert!(prefs.get_bool(OKLAB_COLOR_INTERPOLATION_ENABLED));
    assert!(prefs.get_bool(INDIVIDUAL_ROTATE_SLERP_ENABLED));
    assert!(!prefs.get_bool("layout.css.unknown.enabled"));
}

#[test]
fn test_set_and_reset() {
    let prefs = Preferences::with_defaults();
    prefs.set_bool(TRANSITION_BEHAVIOR_ENABLED, false);
    prefs.set_bool("layout.css.unknown.enabled", true);
    assert!(!prefs.get_bool(TRANSITION_BEHAVIOR_ENABLED));
    assert!(prefs.get_bool("layout.css.unknown.enabled"));
    prefs.reset();
    assert!(prefs.get_bool(TRANSITION_BEHAVIOR_ENABLED));
    assert!(!prefs.get_bool("layout.css.unknown.enabled"));
}

#[test]
fn test_load_json() {
    init_logging();
    let prefs = Preferences::with_defaults();
    let json = r#"{
        "layout.css.oklab-color-interpolation.enabled": false,
        "layout.css.transforms.individual-rotate-slerp.enabled": "no",
        "layout.css.transition-behavior.enabled": 0
    }"#;
    assert_eq!(prefs.load_json(json).unwrap(), 1);
    assert!(!prefs.get_bool(OKLAB_COLOR_INTERPOLATION_ENABLED));
    assert!(prefs.get_bool(INDIVIDUAL_ROTATE_SLERP_ENABLED));
    assert!(prefs.get_bool(TRANSITION_BEHAVIOR_ENABLED));
}

#[test]
fn test_load_invalid_json() {
    let prefs = Preferences::with_defaults();
    assert!(prefs.load_json("{not json").is_err());
    assert!(prefs.load_json("[true]").is_err());
    assert!(prefs.get_bool(OKLAB_COLOR_INTERPOLATION_ENABLED));
}

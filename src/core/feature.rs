//! Feature-module declarations shared by every build target.
//!
//! The feature set is declared exactly once, as a procedure over an
//! opaque configuration handle, and invoked against each target the
//! registrar constructs. Two handles configured by it end up with
//! identical ordered feature lists; the procedure holds no state and
//! may be invoked any number of times.
//!
//! Paths are logical locators expanded by the downstream build
//! framework: `{root}` is the runtime checkout, `{config}` the
//! directory holding this configuration. Whether a path resolves to a
//! real module is checked downstream, not here.

use serde::{Deserialize, Serialize};

use crate::core::target::TargetConfig;

/// A reference to one optional feature module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRef {
    /// Filesystem or logical locator of the module.
    pub path: String,

    /// What the module provides. Read by humans, not by the build.
    pub comment: String,
}

impl FeatureRef {
    /// Create a new feature reference.
    pub fn new(path: impl Into<String>, comment: impl Into<String>) -> Self {
        FeatureRef {
            path: path.into(),
            comment: comment.into(),
        }
    }
}

/// The fixed feature list, in registration order.
///
/// `mruby-simple-random` (#rand, #srand) was evaluated for this list
/// and dropped: it does not build on Windows.
const FEATURES: &[(&str, &str)] = &[
    // Standard modules shipped with the runtime
    ("{root}/mrbgems/mruby-math", "Math"),
    ("{root}/mrbgems/mruby-time", "Time"),
    ("{root}/mrbgems/mruby-struct", "Struct"),
    ("{root}/mrbgems/mruby-sprintf", "#sprintf"),
    ("{root}/mrbgems/mruby-string-ext", "More string stuff"),
    ("{root}/mrbgems/mruby-array-ext", "Arrays"),
    // Extra modules vendored next to this configuration
    ("{config}/../mruby/mgems/mruby-sleep", "Sleep"),
    ("{config}/../mruby/mgems/mruby-pcre-regexp", "PCRE regular expressions"),
    ("{config}/../mruby/mgems/mruby-md5", "MD5"),
];

/// Register the shared feature set against a configuration handle.
pub fn declare_features(conf: &mut dyn TargetConfig) {
    for (path, comment) in FEATURES {
        conf.register_feature(path, comment);
    }
}

/// Number of features every target declares. Exposed for assertions.
pub const FEATURE_COUNT: usize = FEATURES.len();

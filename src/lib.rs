//! Slipway - build-target configuration composer.
//!
//! This crate declares the feature-module set shared by every build of
//! the embedded scripting runtime, registers the unconditional native
//! target, and, when `CROSSCOMPILE_TARGET` is set, a cross target
//! whose compiler/linker/archiver commands come from `CC`/`LD`/`AR`
//! with prefix-derived fallbacks.
//!
//! The output is a declaration consumed by the surrounding build
//! framework; nothing here runs a compiler or checks that a module
//! path or tool command exists.

pub mod compose;
pub mod core;

pub use crate::compose::{compose, EnvSnapshot, CROSSCOMPILE_TARGET};
pub use crate::core::{
    declare_features, BuildTarget, ComposeError, FeatureRef, TargetBuilder, TargetConfig,
    TargetKind, TargetRegistry, ToolSlot, ToolchainFamily, ToolchainSpec,
};

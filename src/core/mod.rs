//! Core data structures for slipway.
//!
//! This module contains the foundational types of the configuration:
//! - Feature-module references and the shared declarator
//! - Toolchain families, tool slots, and command resolution
//! - Build-target declarations and the configuration-handle seam
//! - The registry the framework consumes targets from

pub mod feature;
pub mod registry;
pub mod target;
pub mod toolchain;

pub use feature::{declare_features, FeatureRef};
pub use registry::{ComposeError, TargetRegistry};
pub use target::{BuildTarget, TargetBuilder, TargetConfig, TargetKind};
pub use toolchain::{resolve_command, ToolSlot, ToolchainFamily, ToolchainSpec};

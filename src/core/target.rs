//! Build-target declarations - what the framework is asked to build.
//!
//! A [`BuildTarget`] is a finished, immutable declaration. It is
//! assembled through the [`TargetConfig`] seam, the mutable handle the
//! build framework hands to each declaration step.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::feature::FeatureRef;
use crate::core::toolchain::{ToolSlot, ToolchainFamily, ToolchainSpec};

/// The kind of build target being declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// The unconditional host build.
    Native,

    /// An environment-gated build for a foreign target prefix.
    Cross,
}

impl TargetKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Native => "native",
            TargetKind::Cross => "cross",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration handle a declaration step writes through.
///
/// The feature declarator and the registrar only see this seam; the
/// concrete handle accumulates registrations and is finalized into a
/// [`BuildTarget`].
pub trait TargetConfig {
    /// Register a feature module by path.
    fn register_feature(&mut self, path: &str, comment: &str);

    /// Select the base toolchain family.
    fn select_family(&mut self, family: ToolchainFamily);

    /// Set an explicit command for one toolchain slot.
    fn set_tool_command(&mut self, slot: ToolSlot, command: &str);
}

/// A fully composed target declaration.
///
/// Never mutated after construction; handed to the framework's
/// registry and consumed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTarget {
    /// Native or cross.
    pub kind: TargetKind,

    /// Cross-compilation prefix; `None` for the native target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_prefix: Option<String>,

    /// Base toolchain family (same fixed family for every target).
    pub family: ToolchainFamily,

    /// Resolved tool commands; only the cross target carries these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolchain: Option<ToolchainSpec>,

    /// Ordered feature-module references.
    pub features: Vec<FeatureRef>,
}

/// Accumulates registrations for one target.
#[derive(Debug)]
pub struct TargetBuilder {
    kind: TargetKind,
    target_prefix: Option<String>,
    family: ToolchainFamily,
    compiler: Option<String>,
    linker: Option<String>,
    archiver: Option<String>,
    features: Vec<FeatureRef>,
}

impl TargetBuilder {
    /// Start a native target declaration.
    pub fn native() -> Self {
        TargetBuilder::new(TargetKind::Native, None)
    }

    /// Start a cross target declaration for the given prefix.
    pub fn cross(prefix: impl Into<String>) -> Self {
        TargetBuilder::new(TargetKind::Cross, Some(prefix.into()))
    }

    fn new(kind: TargetKind, target_prefix: Option<String>) -> Self {
        TargetBuilder {
            kind,
            target_prefix,
            family: ToolchainFamily::default(),
            compiler: None,
            linker: None,
            archiver: None,
            features: Vec::new(),
        }
    }

    /// Finalize the accumulated registrations.
    ///
    /// The toolchain spec is emitted only once all three slots have
    /// been set; the native target sets none and carries none.
    pub fn finish(self) -> BuildTarget {
        let toolchain = match (self.compiler, self.linker, self.archiver) {
            (Some(compiler), Some(linker), Some(archiver)) => Some(ToolchainSpec {
                compiler,
                linker,
                archiver,
            }),
            _ => None,
        };

        BuildTarget {
            kind: self.kind,
            target_prefix: self.target_prefix,
            family: self.family,
            toolchain,
            features: self.features,
        }
    }
}

impl TargetConfig for TargetBuilder {
    fn register_feature(&mut self, path: &str, comment: &str) {
        self.features.push(FeatureRef::new(path, comment));
    }

    fn select_family(&mut self, family: ToolchainFamily) {
        self.family = family;
    }

    fn set_tool_command(&mut self, slot: ToolSlot, command: &str) {
        let command = command.to_string();
        match slot {
            ToolSlot::Compiler => self.compiler = Some(command),
            ToolSlot::Linker => self.linker = Some(command),
            ToolSlot::Archiver => self.archiver = Some(command),
        }
    }
}

//! Toolchain families and per-slot command resolution.
//!
//! Both declared targets select the same fixed base family; only the
//! cross target carries explicit tool commands, resolved one slot at a
//! time from an environment override with a prefix-derived fallback.

use serde::{Deserialize, Serialize};

/// The base toolchain family selected for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainFamily {
    /// GCC driver convention.
    Gcc,
}

impl ToolchainFamily {
    /// Get the family name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolchainFamily::Gcc => "gcc",
        }
    }
}

impl Default for ToolchainFamily {
    fn default() -> Self {
        ToolchainFamily::Gcc
    }
}

/// One of the three overridable tool slots of a cross toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSlot {
    Compiler,
    Linker,
    Archiver,
}

impl ToolSlot {
    /// Environment variable consulted for this slot.
    pub fn env_var(&self) -> &'static str {
        match self {
            ToolSlot::Compiler => "CC",
            ToolSlot::Linker => "LD",
            ToolSlot::Archiver => "AR",
        }
    }

    /// Suffix appended to the target prefix when no override is set.
    ///
    /// The compiler driver also drives linking, so both slots derive
    /// `{prefix}-gcc`; archiving derives `{prefix}-ar`.
    pub fn default_suffix(&self) -> &'static str {
        match self {
            ToolSlot::Compiler | ToolSlot::Linker => "gcc",
            ToolSlot::Archiver => "ar",
        }
    }
}

/// Resolve the command for one tool slot.
///
/// A set, non-empty (after trimming) override wins; otherwise the
/// command is derived from the target prefix and the slot's suffix
/// convention. Slots are resolved independently, so any subset of
/// {compiler, linker, archiver} may be overridden.
pub fn resolve_command(overridden: Option<&str>, prefix: &str, slot: ToolSlot) -> String {
    match overridden {
        Some(cmd) if !cmd.trim().is_empty() => cmd.to_string(),
        _ => format!("{}-{}", prefix, slot.default_suffix()),
    }
}

/// The resolved commands for a cross target's toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainSpec {
    /// Command for the compile step.
    pub compiler: String,
    /// Command for the link step.
    pub linker: String,
    /// Command for the archive step.
    pub archiver: String,
}

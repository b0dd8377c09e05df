//! Build-target registrar: one evaluation pass over the environment.
//!
//! Every invocation declares the native target. When the
//! `CROSSCOMPILE_TARGET` gate is open, a cross target is declared as
//! well, with its compiler/linker/archiver commands resolved per slot
//! from `CC`/`LD`/`AR` and prefix-derived fallbacks. A closed gate is
//! a normal configuration, not an error; whether a declared module
//! path or tool command is actually usable is checked downstream when
//! the framework resolves it.

use tracing::debug;

use crate::core::feature::declare_features;
use crate::core::registry::{ComposeError, TargetRegistry};
use crate::core::target::{TargetBuilder, TargetConfig};
use crate::core::toolchain::{resolve_command, ToolSlot, ToolchainFamily};

/// Environment variable gating the cross target and naming its prefix.
pub const CROSSCOMPILE_TARGET: &str = "CROSSCOMPILE_TARGET";

/// One-shot capture of the variables this configuration reads.
///
/// Set-but-empty and whitespace-only values are normalized to `None`
/// here, so the gate and the per-slot resolvers only ever see
/// set-or-absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// Gate + cross-compilation prefix.
    pub crosscompile_target: Option<String>,
    /// Compiler command override.
    pub cc: Option<String>,
    /// Linker command override.
    pub ld: Option<String>,
    /// Archiver command override.
    pub ar: Option<String>,
}

impl EnvSnapshot {
    /// Capture from the process environment.
    pub fn capture() -> Self {
        EnvSnapshot::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a snapshot from any lookup function.
    ///
    /// Values that come back empty or whitespace-only are treated as
    /// absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        EnvSnapshot {
            crosscompile_target: read(CROSSCOMPILE_TARGET),
            cc: read(ToolSlot::Compiler.env_var()),
            ld: read(ToolSlot::Linker.env_var()),
            ar: read(ToolSlot::Archiver.env_var()),
        }
    }
}

/// Evaluate the configuration once.
///
/// Always builds and registers the native target. Iff the gate
/// variable is set and non-empty after trimming, additionally builds
/// and registers the cross target. Both targets are configured by the
/// same feature declarator, so their feature lists are identical as
/// ordered sequences. Composition is deterministic: the same snapshot
/// yields the same declarations.
pub fn compose(env: &EnvSnapshot) -> Result<TargetRegistry, ComposeError> {
    let mut registry = TargetRegistry::new();

    let mut native = TargetBuilder::native();
    native.select_family(ToolchainFamily::Gcc);
    declare_features(&mut native);
    registry.register(native.finish())?;

    match env.crosscompile_target.as_deref() {
        Some(prefix) => {
            debug!(prefix, "cross-compile gate open");

            let mut cross = TargetBuilder::cross(prefix);
            cross.select_family(ToolchainFamily::Gcc);
            for slot in [ToolSlot::Compiler, ToolSlot::Linker, ToolSlot::Archiver] {
                let overridden = match slot {
                    ToolSlot::Compiler => env.cc.as_deref(),
                    ToolSlot::Linker => env.ld.as_deref(),
                    ToolSlot::Archiver => env.ar.as_deref(),
                };
                cross.set_tool_command(slot, &resolve_command(overridden, prefix, slot));
            }
            declare_features(&mut cross);
            registry.register(cross.finish())?;
        }
        None => debug!("cross-compile gate closed, native target only"),
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target::TargetKind;

    fn snapshot(vars: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_lookup(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn test_gate_unset_yields_native_only() {
        let registry = compose(&snapshot(&[])).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.targets()[0].kind, TargetKind::Native);
    }

    #[test]
    fn test_gate_empty_behaves_like_unset() {
        let registry = compose(&snapshot(&[("CROSSCOMPILE_TARGET", "")])).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.cross().is_none());
    }

    #[test]
    fn test_gate_whitespace_behaves_like_unset() {
        let registry = compose(&snapshot(&[("CROSSCOMPILE_TARGET", "  \t")])).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.cross().is_none());
    }

    #[test]
    fn test_gate_open_yields_cross_with_derived_defaults() {
        let env = snapshot(&[("CROSSCOMPILE_TARGET", "arm-linux-gnueabihf")]);
        let registry = compose(&env).unwrap();

        assert_eq!(registry.len(), 2);
        let cross = registry.cross().unwrap();
        assert_eq!(cross.target_prefix.as_deref(), Some("arm-linux-gnueabihf"));

        let toolchain = cross.toolchain.as_ref().unwrap();
        assert_eq!(toolchain.compiler, "arm-linux-gnueabihf-gcc");
        assert_eq!(toolchain.linker, "arm-linux-gnueabihf-gcc");
        assert_eq!(toolchain.archiver, "arm-linux-gnueabihf-ar");
    }

    #[test]
    fn test_single_override_leaves_other_slots_derived() {
        let env = snapshot(&[
            ("CROSSCOMPILE_TARGET", "arm-linux-gnueabihf"),
            ("CC", "clang"),
        ]);
        let registry = compose(&env).unwrap();

        let toolchain = registry.cross().unwrap().toolchain.as_ref().unwrap();
        assert_eq!(toolchain.compiler, "clang");
        assert_eq!(toolchain.linker, "arm-linux-gnueabihf-gcc");
        assert_eq!(toolchain.archiver, "arm-linux-gnueabihf-ar");
    }

    #[test]
    fn test_all_slots_overridable() {
        let env = snapshot(&[
            ("CROSSCOMPILE_TARGET", "aarch64-linux-gnu"),
            ("CC", "zig cc"),
            ("LD", "mold"),
            ("AR", "llvm-ar"),
        ]);
        let registry = compose(&env).unwrap();

        let toolchain = registry.cross().unwrap().toolchain.as_ref().unwrap();
        assert_eq!(toolchain.compiler, "zig cc");
        assert_eq!(toolchain.linker, "mold");
        assert_eq!(toolchain.archiver, "llvm-ar");
    }

    #[test]
    fn test_feature_parity_between_targets() {
        let env = snapshot(&[("CROSSCOMPILE_TARGET", "arm-linux-gnueabihf")]);
        let registry = compose(&env).unwrap();

        assert_eq!(
            registry.native().unwrap().features,
            registry.cross().unwrap().features
        );
    }

    #[test]
    fn test_native_target_carries_no_overrides() {
        // CC/LD/AR only affect the cross target.
        let env = snapshot(&[("CC", "clang"), ("AR", "llvm-ar")]);
        let registry = compose(&env).unwrap();

        let native = registry.native().unwrap();
        assert_eq!(native.toolchain, None);
        assert_eq!(native.target_prefix, None);
    }

    #[test]
    fn test_composition_is_idempotent() {
        let env = snapshot(&[
            ("CROSSCOMPILE_TARGET", "arm-linux-gnueabihf"),
            ("LD", "gold"),
        ]);

        let first = compose(&env).unwrap();
        let second = compose(&env).unwrap();
        assert_eq!(first.targets(), second.targets());
    }

    #[test]
    fn test_snapshot_normalizes_blank_values() {
        let env = snapshot(&[("CROSSCOMPILE_TARGET", " "), ("CC", ""), ("LD", "gold")]);
        assert_eq!(env.crosscompile_target, None);
        assert_eq!(env.cc, None);
        assert_eq!(env.ld.as_deref(), Some("gold"));
    }
}

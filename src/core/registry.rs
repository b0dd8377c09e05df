//! Registration surface handed to the surrounding build framework.
//!
//! The registry collects finished target declarations in registration
//! order. It performs no validation beyond the one structural rule it
//! owns: a single evaluation declares at most one target per kind.

use thiserror::Error;

use crate::core::target::{BuildTarget, TargetKind};

/// Error raised while registering composed targets.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A second target of the same kind was registered in one evaluation.
    #[error("a {kind} target is already declared in this evaluation")]
    DuplicateTarget { kind: TargetKind },
}

/// Collects fully built target declarations in registration order.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: Vec<BuildTarget>,
}

impl TargetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        TargetRegistry {
            targets: Vec::new(),
        }
    }

    /// Register a composed target.
    pub fn register(&mut self, target: BuildTarget) -> Result<(), ComposeError> {
        if self.targets.iter().any(|t| t.kind == target.kind) {
            return Err(ComposeError::DuplicateTarget { kind: target.kind });
        }

        tracing::info!(
            kind = %target.kind,
            features = target.features.len(),
            "registered build target"
        );
        self.targets.push(target);
        Ok(())
    }

    /// All registered targets, in registration order.
    pub fn targets(&self) -> &[BuildTarget] {
        &self.targets
    }

    /// The native target, if registered.
    pub fn native(&self) -> Option<&BuildTarget> {
        self.targets.iter().find(|t| t.kind == TargetKind::Native)
    }

    /// The cross target, if registered.
    pub fn cross(&self) -> Option<&BuildTarget> {
        self.targets.iter().find(|t| t.kind == TargetKind::Cross)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

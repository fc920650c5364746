//! Extension registry: descriptor store with registration-time validation.

use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use clipwire_protocols::error::RegistryError;
use clipwire_protocols::extension::{Extension, ExtensionDescriptor, ExtensionId};

/// One registered extension: its immutable descriptor plus the handler.
#[derive(Clone)]
pub struct ExtensionEntry {
    pub descriptor: ExtensionDescriptor,
    pub handler: Arc<dyn Extension>,
}

/// Registry for managing extensions.
///
/// Enforces identity uniqueness at registration. Dependency declarations are
/// checked by [`validate`](ExtensionRegistry::validate) once all extensions
/// are registered: a dangling or cyclic declaration is a configuration error
/// surfaced there, never a runtime fallback.
pub struct ExtensionRegistry {
    extensions: DashMap<ExtensionId, ExtensionEntry>,
}

impl ExtensionRegistry {
    /// Create a new extension registry.
    pub fn new() -> Self {
        Self {
            extensions: DashMap::new(),
        }
    }

    /// Register an extension with its descriptor.
    pub fn register(
        &self,
        descriptor: ExtensionDescriptor,
        handler: Arc<dyn Extension>,
    ) -> Result<(), RegistryError> {
        let id = descriptor.extension_id.clone();

        if self.extensions.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }

        debug!(extension_id = %id, "registering extension");
        self.extensions
            .insert(id, ExtensionEntry { descriptor, handler });
        Ok(())
    }

    /// Unregister an extension.
    pub fn unregister(&self, id: &str) -> Result<(), RegistryError> {
        self.extensions
            .remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        Ok(())
    }

    /// Get a registered entry by id.
    pub fn get(&self, id: &str) -> Option<ExtensionEntry> {
        self.extensions.get(id).map(|e| e.clone())
    }

    /// Get a descriptor by id.
    pub fn descriptor(&self, id: &str) -> Option<ExtensionDescriptor> {
        self.extensions.get(id).map(|e| e.descriptor.clone())
    }

    /// Check if an extension is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.extensions.contains_key(id)
    }

    /// List all registered descriptors.
    pub fn list(&self) -> Vec<ExtensionDescriptor> {
        self.extensions
            .iter()
            .map(|e| e.descriptor.clone())
            .collect()
    }

    /// Validate the dependency declarations across all registered extensions.
    ///
    /// Call after registration is complete and before any dispatch. Fails on
    /// a dependency naming an unregistered identity or on a cyclic
    /// declaration.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for entry in self.extensions.iter() {
            for dependency in &entry.descriptor.dependencies {
                if !self.extensions.contains_key(dependency) {
                    return Err(RegistryError::DanglingDependency {
                        extension: entry.descriptor.extension_id.clone(),
                        dependency: dependency.clone(),
                    });
                }
            }
        }

        let mut visited = HashSet::new();
        for entry in self.extensions.iter() {
            let id = entry.descriptor.extension_id.clone();
            if !visited.contains(&id) {
                self.check_cycles(&id, &mut visited, &mut HashSet::new())?;
            }
        }

        Ok(())
    }

    fn check_cycles(
        &self,
        id: &ExtensionId,
        visited: &mut HashSet<ExtensionId>,
        in_progress: &mut HashSet<ExtensionId>,
    ) -> Result<(), RegistryError> {
        if in_progress.contains(id) {
            return Err(RegistryError::DependencyCycle(id.clone()));
        }
        if visited.contains(id) {
            return Ok(());
        }

        in_progress.insert(id.clone());
        if let Some(entry) = self.extensions.get(id) {
            let dependencies = entry.descriptor.dependencies.clone();
            drop(entry);
            for dependency in &dependencies {
                self.check_cycles(dependency, visited, in_progress)?;
            }
        }
        in_progress.remove(id);
        visited.insert(id.clone());
        Ok(())
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

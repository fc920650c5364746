//! Extension registry errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Extension not found: {0}")]
    NotFound(String),

    #[error("Extension already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Dangling dependency: {extension} depends on unregistered {dependency}")]
    DanglingDependency { extension: String, dependency: String },

    #[error("Dependency cycle involving extension: {0}")]
    DependencyCycle(String),
}

//! Extension descriptor types.

use serde::{Deserialize, Serialize};

/// Extension unique identifier type.
///
/// Opaque routing key; unique within a running host and never reused across
/// unrelated extensions.
pub type ExtensionId = String;

/// Immutable record binding an extension identity to its description and
/// declared dependencies.
///
/// Created at registration time and never mutated afterwards. An extension
/// may query context only from extensions listed in `dependencies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionDescriptor {
    pub extension_id: ExtensionId,
    pub description: String,
    #[serde(default)]
    pub dependencies: Vec<ExtensionId>,
}

impl ExtensionDescriptor {
    /// Create a new descriptor with no dependencies.
    pub fn new(extension_id: impl Into<ExtensionId>, description: impl Into<String>) -> Self {
        Self {
            extension_id: extension_id.into(),
            description: description.into(),
            dependencies: Vec::new(),
        }
    }

    /// Declare a dependency on another extension.
    pub fn with_dependency(mut self, dependency: impl Into<ExtensionId>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    /// Declare dependencies on other extensions, in query order.
    pub fn with_dependencies(
        mut self,
        dependencies: impl IntoIterator<Item = impl Into<ExtensionId>>,
    ) -> Self {
        self.dependencies
            .extend(dependencies.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_new() {
        let desc = ExtensionDescriptor::new("url-enricher", "Enriches copied URLs");
        assert_eq!(desc.extension_id, "url-enricher");
        assert_eq!(desc.description, "Enriches copied URLs");
        assert!(desc.dependencies.is_empty());
    }

    #[test]
    fn test_descriptor_with_dependency() {
        let desc = ExtensionDescriptor::new("a", "A").with_dependency("b");
        assert_eq!(desc.dependencies, vec!["b".to_string()]);
    }

    #[test]
    fn test_descriptor_dependency_order_preserved() {
        let desc = ExtensionDescriptor::new("a", "A").with_dependencies(["c", "b", "d"]);
        assert_eq!(desc.dependencies, vec!["c", "b", "d"]);
    }

    #[test]
    fn test_descriptor_serialization() {
        let desc = ExtensionDescriptor::new("a", "A").with_dependency("b");
        let json = serde_json::to_string(&desc).unwrap();
        let back: ExtensionDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.extension_id, "a");
        assert_eq!(back.dependencies, vec!["b"]);
    }

    #[test]
    fn test_descriptor_deserialization_defaults_dependencies() {
        let back: ExtensionDescriptor =
            serde_json::from_str(r#"{"extension_id":"a","description":"A"}"#).unwrap();
        assert!(back.dependencies.is_empty());
    }
}

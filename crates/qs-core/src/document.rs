use serde::{Deserialize, Serialize};

/// Identifier of the single external document all captures are appended to.
///
/// Created once by the document locator and persisted for the lifetime of the
/// installation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetDocumentRef {
    pub id: String,
}

impl TargetDocumentRef {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl std::fmt::Display for TargetDocumentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

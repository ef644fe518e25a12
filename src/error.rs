use thiserror::Error;

/// Listing a visitor can return to after a failed lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovery {
    pub label: &'static str,
    pub path: &'static str,
}

impl Recovery {
    pub const PROJECTS: Recovery = Recovery {
        label: "Back to projects",
        path: "/",
    };
    pub const SERVICES: Recovery = Recovery {
        label: "Back to services",
        path: "/services",
    };
    pub const JOURNAL: Recovery = Recovery {
        label: "Back to journal",
        path: "/blog",
    };
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{kind} not found: {key}")]
    NotFound {
        kind: &'static str,
        key: String,
        recovery: Recovery,
    },

    #[error("Unknown {facet} value: {value}")]
    UnknownFacet { facet: &'static str, value: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl CatalogError {
    pub fn not_found(kind: &'static str, key: impl ToString, recovery: Recovery) -> Self {
        CatalogError::NotFound {
            kind,
            key: key.to_string(),
            recovery,
        }
    }

    /// Recovery action for lookups that missed
    pub fn recovery(&self) -> Option<Recovery> {
        match self {
            CatalogError::NotFound { recovery, .. } => Some(*recovery),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

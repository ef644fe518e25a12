use crate::catalog::traits::CatalogSource;
use crate::error::{CatalogError, Result as CatalogResult};
use crate::models::Project;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// Record set read from a JSON array of projects
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Check the invariants the filter engine relies on: a non-empty set,
/// unique ids, positive floor counts and areas.
pub fn validate_catalog(projects: &[Project]) -> CatalogResult<()> {
    if projects.is_empty() {
        return Err(CatalogError::InvalidCatalog(
            "catalog contains no projects".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.id) {
            return Err(CatalogError::InvalidCatalog(format!(
                "duplicate project id {}",
                project.id
            )));
        }
        if project.floors == 0 {
            return Err(CatalogError::InvalidCatalog(format!(
                "project {} has zero floors",
                project.id
            )));
        }
        if !(project.area > 0.0) {
            return Err(CatalogError::InvalidCatalog(format!(
                "project {} has non-positive area {}",
                project.id, project.area
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<Project>> {
        debug!("Reading catalog from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        let projects: Vec<Project> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        validate_catalog(&projects)
            .with_context(|| format!("Rejected catalog file {}", self.path.display()))?;

        info!("📂 Loaded {} projects from {}", projects.len(), self.path.display());
        Ok(projects)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

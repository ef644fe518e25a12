use crate::models::Project;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply the project record set.
/// The set is loaded once at startup and never mutated afterwards.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full record set, in display order
    async fn load(&self) -> Result<Vec<Project>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}

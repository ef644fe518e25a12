//! Catalog filter engine.
//!
//! [`filter`] is a pure function of the record set and a [`Selection`]:
//! every active facet must match, and the output keeps catalog order.
//! Callers that re-render on every input change can hold a
//! [`FilteredView`] to skip recomputation when the selection is unchanged.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::Selection;
use crate::error::{CatalogError, Recovery, Result};
use crate::models::Project;

/// Number of "Similar Projects" shown on a project page
pub const SIMILAR_PROJECTS: usize = 3;

/// File written by [`export_results`] inside the export directory
pub const EXPORT_FILE: &str = "results.json";

/// Whether `project` satisfies every facet of `selection`
pub fn matches(project: &Project, selection: &Selection) -> bool {
    selection.category.matches(&project.category)
        && selection.style.matches(&project.style)
        && selection.area.contains(project.area)
        && selection.bedrooms.matches(&project.bedrooms)
        && selection.floors.matches(&project.floors)
        && selection
            .search_term()
            .map_or(true, |term| matches_text(project, &term.to_lowercase()))
}

/// Case-insensitive substring match over the searchable fields.
/// `needle` must already be lowercase.
fn matches_text(project: &Project, needle: &str) -> bool {
    project
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Records matching `selection`, in catalog order
pub fn filter<'a>(records: &'a [Project], selection: &Selection) -> Vec<&'a Project> {
    let matched: Vec<&Project> = records.iter().filter(|p| matches(p, selection)).collect();
    debug!("Filter kept {} of {} projects", matched.len(), records.len());
    matched
}

/// Caller-owned memo of the last filtered view, keyed on selection equality
pub struct FilteredView<'a> {
    records: &'a [Project],
    selection: Option<Selection>,
    matched: Vec<&'a Project>,
    recomputations: usize,
}

impl<'a> FilteredView<'a> {
    pub fn new(records: &'a [Project]) -> Self {
        Self {
            records,
            selection: None,
            matched: Vec::new(),
            recomputations: 0,
        }
    }

    /// Filtered records for `selection`, recomputed only when it differs
    /// from the previous call
    pub fn get(&mut self, selection: &Selection) -> &[&'a Project] {
        if self.selection.as_ref() != Some(selection) {
            self.matched = filter(self.records, selection);
            self.selection = Some(selection.clone());
            self.recomputations += 1;
        }
        &self.matched
    }

    /// How many times the view has actually been recomputed
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

/// Look up one project by id for a detail page
pub fn find_project(records: &[Project], id: u32) -> Result<&Project> {
    records
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::not_found("Project", id, Recovery::PROJECTS))
}

/// The first `limit` projects other than `id`, in catalog order
pub fn similar_projects(records: &[Project], id: u32, limit: usize) -> Vec<&Project> {
    records.iter().filter(|p| p.id != id).take(limit).collect()
}

/// Write `matched` as a JSON array to [`EXPORT_FILE`] in `dir`,
/// replacing any earlier export. An empty result writes `[]`.
pub async fn export_results(dir: &Path, matched: &[&Project]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(EXPORT_FILE);
    let json = serde_json::to_string_pretty(matched)?;
    tokio::fs::write(&path, json).await?;
    info!("💾 Saved {} projects to {}", matched.len(), path.display());
    Ok(path)
}

/// Headline and subheading shown above the catalog grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub headline: String,
    pub subheading: String,
}

impl ResultSummary {
    pub fn new(selection: &Selection, count: usize) -> Self {
        match selection.search_term() {
            Some(term) => Self {
                headline: format!("Search results for \"{term}\""),
                subheading: format!("{count} projects found"),
            },
            None => Self {
                headline: "We don't build houses, we build a better life".to_string(),
                subheading: "Custom Architectural Projects".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AreaPreset, AreaRange, BuiltinCatalog, Facet};
    use crate::models::{Category, Style};
    use pretty_assertions::assert_eq;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_selection_returns_everything_in_order() {
        let records = BuiltinCatalog::new().projects();
        let result = filter(&records, &Selection::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_medium_area_bucket() {
        let records = BuiltinCatalog::new().projects();
        let selection = Selection::default().with_area_preset(AreaPreset::Medium);
        let areas: Vec<f64> = filter(&records, &selection).iter().map(|p| p.area).collect();
        assert_eq!(areas, vec![420.0, 310.0]);
    }

    #[test]
    fn test_bath_category_yields_single_record() {
        let records = BuiltinCatalog::new().projects();
        let selection = Selection::default().with_category(Facet::Only(Category::Bath));
        let result = filter(&records, &selection);
        assert_eq!(ids(&result), vec![7]);
    }

    #[test]
    fn test_search_trims_and_ignores_case() {
        let records = BuiltinCatalog::new().projects();
        let selection = Selection::default().with_search("  SAUNA ");
        assert_eq!(ids(&filter(&records, &selection)), vec![7]);
    }

    #[test]
    fn test_search_matches_style_and_category_names() {
        let records = BuiltinCatalog::new().projects();
        let pine = Selection::default().with_search("pine");
        assert_eq!(ids(&filter(&records, &pine)), vec![8]);

        let gazebo = Selection::default().with_search("GAZEBO");
        assert_eq!(ids(&filter(&records, &gazebo)), vec![8]);
    }

    #[test]
    fn test_bedrooms_is_exact_not_at_least() {
        let records = BuiltinCatalog::new().projects();
        let selection = Selection::default().with_bedrooms(Facet::Only(4));
        // Renaissance has five bedrooms and is not included
        assert_eq!(ids(&filter(&records, &selection)), vec![3]);
    }

    #[test]
    fn test_gazebo_with_three_bedrooms_is_empty() {
        let records = BuiltinCatalog::new().projects();
        let selection = Selection::default()
            .with_category(Facet::Only(Category::Gazebo))
            .with_bedrooms(Facet::Only(3));
        assert!(filter(&records, &selection).is_empty());
    }

    #[test]
    fn test_inverted_area_range_is_empty() {
        let records = BuiltinCatalog::new().projects();
        let selection = Selection::default().with_area(AreaRange::new(600.0, Some(100.0)));
        assert!(filter(&records, &selection).is_empty());
    }

    #[test]
    fn test_view_recomputes_only_on_change() {
        let records = BuiltinCatalog::new().projects();
        let mut view = FilteredView::new(&records);
        let selection = Selection::default().with_style(Facet::Only(Style::Log));

        assert_eq!(view.get(&selection).len(), 1);
        assert_eq!(view.get(&selection.clone()).len(), 1);
        assert_eq!(view.recomputations(), 1);

        let next = selection.with_style(Facet::All);
        assert_eq!(view.get(&next).len(), 8);
        assert_eq!(view.recomputations(), 2);
    }

    #[test]
    fn test_find_project_missing_id() {
        let records = BuiltinCatalog::new().projects();
        assert_eq!(find_project(&records, 4).unwrap().title, "Sun City");

        let err = find_project(&records, 99).unwrap_err();
        assert_eq!(err.to_string(), "Project not found: 99");
        assert_eq!(err.recovery(), Some(Recovery::PROJECTS));
    }

    #[test]
    fn test_similar_projects_skip_current() {
        let records = BuiltinCatalog::new().projects();
        assert_eq!(ids(&similar_projects(&records, 2, SIMILAR_PROJECTS)), vec![1, 3, 4]);
        assert_eq!(ids(&similar_projects(&records, 8, SIMILAR_PROJECTS)), vec![1, 2, 3]);
    }

    #[test]
    fn test_summary_mentions_search_term() {
        let selection = Selection::default().with_search(" log ");
        let summary = ResultSummary::new(&selection, 1);
        assert_eq!(summary.headline, "Search results for \"log\"");
        assert_eq!(summary.subheading, "1 projects found");

        let idle = ResultSummary::new(&Selection::default(), 8);
        assert_eq!(idle.subheading, "Custom Architectural Projects");
    }

    #[tokio::test]
    async fn test_export_writes_matches() {
        let dir = tempfile::tempdir().unwrap();
        let records = BuiltinCatalog::new().projects();
        let selection = Selection::default().with_category(Facet::Only(Category::Bath));

        let path = export_results(dir.path(), &filter(&records, &selection)).await.unwrap();
        let written: Vec<Project> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].title, "Nordic Spa");
    }

    #[tokio::test]
    async fn test_empty_export_replaces_previous_results() {
        let dir = tempfile::tempdir().unwrap();
        let records = BuiltinCatalog::new().projects();

        let bath = Selection::default().with_category(Facet::Only(Category::Bath));
        export_results(dir.path(), &filter(&records, &bath)).await.unwrap();

        let nothing = Selection::default()
            .with_category(Facet::Only(Category::Gazebo))
            .with_bedrooms(Facet::Only(3));
        let matched = filter(&records, &nothing);
        assert!(matched.is_empty());
        let path = export_results(dir.path(), &matched).await.unwrap();

        let written: Vec<Project> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, Vec::<Project>::new());
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");
    }
}

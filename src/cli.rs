use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use skyline_catalog::catalog::{AreaPreset, Selection};
use skyline_catalog::models::{Category, Style};
use skyline_catalog::query;

/// Browse and filter the Skyline Mon Ranch project catalog
#[derive(Parser)]
#[command(name = "skyline-catalog")]
#[command(version)]
#[command(about = "Browse and filter the Skyline Mon Ranch project catalog")]
pub struct Cli {
    /// Configuration file (defaults to ./skyline-catalog.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects matching the given filters
    List(ListArgs),

    /// Show the address a submitted search navigates to
    Search {
        /// Search text as typed
        text: String,
    },

    /// Show one project and similar projects
    Show {
        /// Project id
        id: u32,
    },

    /// List the values each filter accepts
    Facets,

    /// List services
    Services,

    /// Show one service
    Service { slug: String },

    /// List journal posts
    Posts,

    /// Show one journal post
    Post { slug: String },
}

#[derive(Args, Default)]
pub struct ListArgs {
    /// Catalog page address to seed the search from, e.g. "/?search=spa"
    #[arg(long)]
    pub url: Option<String>,

    /// House, Bath or Gazebo
    #[arg(long)]
    pub category: Option<Category>,

    /// Log, Timber or Pine
    #[arg(long)]
    pub style: Option<Style>,

    /// Area bucket: all, compact, medium or large
    #[arg(long)]
    pub area: Option<AreaPreset>,

    /// Lower area bound in m², overrides the bucket
    #[arg(long)]
    pub min_area: Option<f64>,

    /// Upper area bound in m², overrides the bucket
    #[arg(long)]
    pub max_area: Option<f64>,

    /// Exact number of bedrooms
    #[arg(long)]
    pub bedrooms: Option<u32>,

    /// Exact number of floors
    #[arg(long)]
    pub floors: Option<u32>,

    /// Free-text search, overrides the address
    #[arg(long)]
    pub search: Option<String>,

    /// Write the matching projects as JSON into the export directory
    #[arg(long)]
    pub export: bool,
}

impl ListArgs {
    pub fn selection(&self) -> Selection {
        let seeded = match &self.url {
            Some(url) => query::selection_from_url(url),
            None => Selection::default(),
        };

        let mut area = self.area.unwrap_or(AreaPreset::All).range();
        if let Some(min) = self.min_area {
            area.min = min;
        }
        if let Some(max) = self.max_area {
            area.max = Some(max);
        }

        let selection = seeded
            .with_category(self.category.into())
            .with_style(self.style.into())
            .with_area(area)
            .with_bedrooms(self.bedrooms.into())
            .with_floors(self.floors.into());

        match &self.search {
            Some(text) => selection.with_search(text.as_str()),
            None => selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_catalog::catalog::{AreaRange, Facet};

    #[test]
    fn test_flags_build_selection() {
        let cli = Cli::parse_from([
            "skyline-catalog",
            "list",
            "--category",
            "house",
            "--area",
            "medium",
            "--bedrooms",
            "3",
        ]);
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list command");
        };
        let selection = args.selection();
        assert_eq!(selection.category, Facet::Only(Category::House));
        assert_eq!(selection.area, AreaRange::new(300.0, Some(500.0)));
        assert_eq!(selection.bedrooms, Facet::Only(3));
        assert!(selection.floors.is_all());
    }

    #[test]
    fn test_url_seeds_search_unless_overridden() {
        let args = ListArgs {
            url: Some("/?search=spa".to_string()),
            ..ListArgs::default()
        };
        assert_eq!(args.selection().search, "spa");

        let args = ListArgs {
            url: Some("/?search=spa".to_string()),
            search: Some("pine".to_string()),
            ..ListArgs::default()
        };
        assert_eq!(args.selection().search, "pine");
    }

    #[test]
    fn test_explicit_bounds_override_bucket() {
        let args = ListArgs {
            area: Some(AreaPreset::Large),
            max_area: Some(600.0),
            ..ListArgs::default()
        };
        assert_eq!(args.selection().area, AreaRange::new(500.0, Some(600.0)));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = Cli::try_parse_from(["skyline-catalog", "list", "--category", "barn"]);
        assert!(result.is_err());
    }
}

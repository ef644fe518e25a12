//! Project catalog engine for a timber-home builder's website.
//!
//! The catalog is a fixed, ordered set of [`models::Project`] records.
//! [`filter::filter`] narrows it by a [`catalog::Selection`] of facets and
//! free text, and [`query`] maps the page address to and from the
//! selection's search text.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod query;

pub use catalog::{AreaPreset, AreaRange, Facet, Selection};
pub use error::{CatalogError, Recovery, Result};
pub use filter::{filter, find_project, similar_projects, FilteredView, ResultSummary};
pub use models::{Category, Project, Style};

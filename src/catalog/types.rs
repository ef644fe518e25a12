use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::models::{Category, Style};

/// Bedroom counts offered as quick-select buttons
pub const BEDROOM_CHOICES: [u32; 4] = [1, 2, 3, 4];

/// Floor counts offered as quick-select buttons
pub const FLOOR_CHOICES: [u32; 3] = [1, 2, 3];

/// Button label for a bedroom quick-select value.
///
/// The top choice reads "4+" but still selects exactly four bedrooms.
pub fn bedroom_label(count: u32) -> String {
    match BEDROOM_CHOICES.last() {
        Some(&top) if count == top => format!("{count}+"),
        _ => count.to_string(),
    }
}

/// One facet of the selection: either unconstrained or a single exact value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

impl<T> From<Option<T>> for Facet<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Facet::All, Facet::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str("All"),
            Facet::Only(value) => write!(f, "{value}"),
        }
    }
}

/// Closed area interval in square meters; `max: None` is unbounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl AreaRange {
    /// The whole area domain
    pub const ANY: AreaRange = AreaRange { min: 0.0, max: None };

    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Inclusive at both ends
    pub fn contains(&self, area: f64) -> bool {
        area >= self.min && self.max.map_or(true, |max| area <= max)
    }
}

impl Default for AreaRange {
    fn default() -> Self {
        Self::ANY
    }
}

/// Named area buckets offered by the area selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaPreset {
    All,
    Compact,
    Medium,
    Large,
}

impl AreaPreset {
    pub const ALL: [AreaPreset; 4] = [
        AreaPreset::All,
        AreaPreset::Compact,
        AreaPreset::Medium,
        AreaPreset::Large,
    ];

    pub fn range(&self) -> AreaRange {
        match self {
            AreaPreset::All => AreaRange::ANY,
            AreaPreset::Compact => AreaRange::new(0.0, Some(300.0)),
            AreaPreset::Medium => AreaRange::new(300.0, Some(500.0)),
            AreaPreset::Large => AreaRange::new(500.0, None),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AreaPreset::All => "All Sizes",
            AreaPreset::Compact => "Up to 300 m²",
            AreaPreset::Medium => "300 - 500 m²",
            AreaPreset::Large => "500+ m²",
        }
    }
}

impl FromStr for AreaPreset {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(AreaPreset::All),
            "compact" | "small" => Ok(AreaPreset::Compact),
            "medium" => Ok(AreaPreset::Medium),
            "large" => Ok(AreaPreset::Large),
            _ => Err(CatalogError::UnknownFacet {
                facet: "area",
                value: s.to_string(),
            }),
        }
    }
}

/// Current facet values chosen on the catalog page.
///
/// Transitions consume the selection and return the updated value, so a
/// selection held by a caller only changes by replacement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub category: Facet<Category>,
    pub style: Facet<Style>,
    pub area: AreaRange,
    pub bedrooms: Facet<u32>,
    pub floors: Facet<u32>,
    /// Free text as typed; trimmed when matched
    pub search: String,
}

impl Selection {
    pub fn with_category(self, category: Facet<Category>) -> Self {
        Self { category, ..self }
    }

    pub fn with_style(self, style: Facet<Style>) -> Self {
        Self { style, ..self }
    }

    pub fn with_area(self, area: AreaRange) -> Self {
        Self { area, ..self }
    }

    pub fn with_area_preset(self, preset: AreaPreset) -> Self {
        self.with_area(preset.range())
    }

    pub fn with_bedrooms(self, bedrooms: Facet<u32>) -> Self {
        Self { bedrooms, ..self }
    }

    pub fn with_floors(self, floors: Facet<u32>) -> Self {
        Self { floors, ..self }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    /// Reset every facet but keep the search text
    pub fn clear_filters(self) -> Self {
        Self {
            search: self.search,
            ..Self::default()
        }
    }

    pub fn clear_search(self) -> Self {
        self.with_search(String::new())
    }

    /// Search text with surrounding whitespace removed, if any remains
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    /// True when no facet and no search text constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_all()
            && self.style.is_all()
            && self.area == AreaRange::ANY
            && self.bedrooms.is_all()
            && self.floors.is_all()
            && self.search_term().is_none()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

pub mod content;

pub use content::{BlogPost, Service};

/// Kind of building a project describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    House,
    Bath,
    Gazebo,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::House, Category::Bath, Category::Gazebo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::House => "House",
            Category::Bath => "Bath",
            Category::Gazebo => "Gazebo",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "house" => Ok(Category::House),
            "bath" => Ok(Category::Bath),
            "gazebo" => Ok(Category::Gazebo),
            _ => Err(CatalogError::UnknownFacet {
                facet: "category",
                value: s.to_string(),
            }),
        }
    }
}

/// Construction style of a project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Style {
    Log,
    Timber,
    Pine,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Log, Style::Timber, Style::Pine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Log => "Log",
            Style::Timber => "Timber",
            Style::Pine => "Pine",
        }
    }

    /// Label used by the style selector ("Log Houses", ...)
    pub fn label(&self) -> String {
        format!("{} Houses", self.as_str())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(Style::Log),
            "timber" => Ok(Style::Timber),
            "pine" => Ok(Style::Pine),
            _ => Err(CatalogError::UnknownFacet {
                facet: "style",
                value: s.to_string(),
            }),
        }
    }
}

/// Core catalog record: one building project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub floors: u32,
    /// Floor area in square meters
    pub area: f64,
    pub bedrooms: u32,
    pub category: Category,
    pub style: Style,
    pub description: String,
}

impl Project {
    /// Fields consulted by free-text search, in match order
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            self.title.as_str(),
            self.subtitle.as_str(),
            self.description.as_str(),
            self.style.as_str(),
            self.category.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!("gazebo".parse::<Category>().unwrap(), Category::Gazebo);
        assert_eq!(" HOUSE ".parse::<Category>().unwrap(), Category::House);
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let err = "Brick".parse::<Style>().unwrap_err();
        assert!(err.to_string().contains("style"));
        assert!(err.to_string().contains("Brick"));
    }

    #[test]
    fn test_project_deserializes_from_json() {
        let json = r#"{
            "id": 9,
            "title": "Cabin",
            "subtitle": "Small log cabin",
            "image": "cabin.jpg",
            "floors": 1,
            "area": 64.5,
            "bedrooms": 1,
            "category": "House",
            "style": "Log",
            "description": "A cabin."
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.category, Category::House);
        assert_eq!(project.style, Style::Log);
        assert_eq!(project.area, 64.5);
        assert_eq!(project.searchable_fields()[3], "Log");
    }
}

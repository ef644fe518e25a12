use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A service offered by the company, addressed by slug
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub image: String,
    pub full_description: String,
    pub features: Vec<String>,
}

/// Journal entry, addressed by slug
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub published: NaiveDate,
    pub image: String,
    pub content: String,
}

impl BlogPost {
    /// Date as shown on the journal page, e.g. "Oct 12, 2023"
    pub fn display_date(&self) -> String {
        self.published.format("%b %d, %Y").to_string()
    }
}

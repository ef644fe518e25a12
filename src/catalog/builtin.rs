use crate::catalog::traits::CatalogSource;
use crate::models::{Category, Project, Style};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

const GLUED_TIMBER_HOUSE: &str = "Residential house made of glued timber";

/// The project catalog shipped with the site
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// The eight showcase projects, in display order
    pub fn projects(&self) -> Vec<Project> {
        vec![
            Project {
                id: 1,
                title: "Albatross".to_string(),
                subtitle: GLUED_TIMBER_HOUSE.to_string(),
                image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&w=1200&q=80".to_string(),
                floors: 2,
                area: 584.0,
                bedrooms: 3,
                category: Category::House,
                style: Style::Timber,
                description: "The Albatross project is a masterpiece of modern wooden architecture. Designed with spacious living areas and large panoramic windows, it offers a perfect blend of luxury and nature. The glued timber construction ensures durability and excellent thermal insulation.".to_string(),
            },
            Project {
                id: 2,
                title: "Lyubimka".to_string(),
                subtitle: GLUED_TIMBER_HOUSE.to_string(),
                image: "https://images.unsplash.com/photo-1518780664697-55e3ad937233?auto=format&fit=crop&w=1200&q=80".to_string(),
                floors: 1,
                area: 245.0,
                bedrooms: 2,
                category: Category::House,
                style: Style::Timber,
                description: "Lyubimka is a cozy single-story home perfect for a small family or as a weekend getaway. Its compact design maximizes every square meter, providing a comfortable and functional living space.".to_string(),
            },
            Project {
                id: 3,
                title: "Saint-Tropez".to_string(),
                subtitle: GLUED_TIMBER_HOUSE.to_string(),
                image: "https://images.unsplash.com/photo-1613490493576-7fde63acd811?auto=format&fit=crop&w=1200&q=80".to_string(),
                floors: 2,
                area: 420.0,
                bedrooms: 4,
                category: Category::House,
                style: Style::Timber,
                description: "Inspired by the elegance of the French Riviera, the Saint-Tropez project features a sophisticated design with multiple balconies and a large terrace. It's an ideal choice for those who appreciate fine living and outdoor spaces.".to_string(),
            },
            Project {
                id: 4,
                title: "Sun City".to_string(),
                subtitle: GLUED_TIMBER_HOUSE.to_string(),
                image: "https://images.unsplash.com/photo-1480074568708-e7b720bb3f09?auto=format&fit=crop&w=1200&q=80".to_string(),
                floors: 1,
                area: 310.0,
                bedrooms: 3,
                category: Category::House,
                style: Style::Timber,
                description: "Sun City is designed to capture as much natural light as possible. With its open-plan layout and high ceilings, it feels incredibly spacious and airy. The perfect home for sun lovers.".to_string(),
            },
            Project {
                id: 5,
                title: "Pushkino".to_string(),
                subtitle: GLUED_TIMBER_HOUSE.to_string(),
                image: "https://images.unsplash.com/photo-1464146072230-91cabc968266?auto=format&fit=crop&w=1200&q=80".to_string(),
                floors: 2,
                area: 280.0,
                bedrooms: 3,
                category: Category::House,
                style: Style::Timber,
                description: "A classic design that never goes out of style. Pushkino offers a traditional look with modern amenities, making it a versatile choice for any landscape.".to_string(),
            },
            Project {
                id: 6,
                title: "Renaissance".to_string(),
                subtitle: GLUED_TIMBER_HOUSE.to_string(),
                image: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?auto=format&fit=crop&w=1200&q=80".to_string(),
                floors: 3,
                area: 720.0,
                bedrooms: 5,
                category: Category::House,
                style: Style::Timber,
                description: "The Renaissance project is our most ambitious design yet. Spanning three floors, it includes everything from a private gym to a home cinema. A true statement of success.".to_string(),
            },
            Project {
                id: 7,
                title: "Nordic Spa".to_string(),
                subtitle: "Premium wooden bath complex".to_string(),
                image: "https://images.unsplash.com/photo-1542718610-a1d656d1884c?auto=format&fit=crop&w=1200&q=80".to_string(),
                floors: 1,
                area: 85.0,
                bedrooms: 1,
                category: Category::Bath,
                style: Style::Log,
                description: "A luxurious bath complex featuring a traditional sauna, a cold plunge pool, and a relaxation area with a fireplace. Built with thick cedar logs for an authentic experience.".to_string(),
            },
            Project {
                id: 8,
                title: "Forest Retreat".to_string(),
                subtitle: "Modern garden gazebo".to_string(),
                image: "https://images.unsplash.com/photo-1470770841072-f978cf4d019e?auto=format&fit=crop&w=1200&q=80".to_string(),
                floors: 1,
                area: 35.0,
                bedrooms: 0,
                category: Category::Gazebo,
                style: Style::Pine,
                description: "An elegant open-air gazebo designed for summer dining and relaxation. Features a built-in BBQ area and integrated lighting.".to_string(),
            },
        ]
    }
}

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn load(&self) -> Result<Vec<Project>> {
        let projects = self.projects();
        info!("📋 Loaded {} built-in projects", projects.len());
        Ok(projects)
    }

    fn source_name(&self) -> &'static str {
        "builtin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = BuiltinCatalog::new().projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn test_builtin_records_are_well_formed() {
        for project in BuiltinCatalog::new().projects() {
            assert!(project.floors > 0, "{} has no floors", project.title);
            assert!(project.area > 0.0, "{} has no area", project.title);
        }
    }

    #[tokio::test]
    async fn test_load_returns_full_set() {
        let catalog = BuiltinCatalog::new();
        let projects = catalog.load().await.unwrap();
        assert_eq!(projects.len(), 8);
        assert_eq!(catalog.source_name(), "builtin");
    }
}

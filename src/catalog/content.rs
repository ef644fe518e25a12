//! Services and journal entries shown alongside the project catalog.
//!
//! Both collections are static and addressed by slug; a missed lookup
//! carries the listing page to return to.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{CatalogError, Recovery, Result};
use crate::models::{BlogPost, Service};

fn service(
    slug: &str,
    title: &str,
    summary: &str,
    image: &str,
    full_description: &str,
    features: [&str; 4],
) -> Service {
    Service {
        slug: slug.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        image: image.to_string(),
        full_description: full_description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn post(id: u32, slug: &str, title: &str, (y, m, d): (i32, u32, u32), image: &str, content: &str) -> BlogPost {
    BlogPost {
        id,
        slug: slug.to_string(),
        title: title.to_string(),
        published: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        image: image.to_string(),
        content: content.to_string(),
    }
}

/// All services, in display order
pub fn services() -> Vec<Service> {
    vec![
        service(
            "architectural-design",
            "Architectural Design",
            "Bespoke blueprints tailored to your lifestyle and the natural landscape.",
            "https://images.unsplash.com/photo-1487958449943-2429e8be8625?auto=format&fit=crop&w=1200&q=80",
            "Our architectural design process is a collaborative journey. We start by understanding your vision, the unique characteristics of your site, and your functional requirements. Our team of expert architects then crafts detailed blueprints that harmonize with the natural environment, utilizing the latest in sustainable design principles and timber engineering.",
            ["Site Analysis", "Concept Development", "3D Visualization", "Technical Blueprints"],
        ),
        service(
            "timber-construction",
            "Timber Construction",
            "Expert assembly of log and timber frame structures using premium wood.",
            "https://images.unsplash.com/photo-1518780664697-55e3ad937233?auto=format&fit=crop&w=1200&q=80",
            "We specialize in the construction of high-end log and timber frame homes. Using only the finest, sustainably sourced wood, our master builders combine traditional joinery techniques with modern precision. Every beam is carefully selected and every joint is expertly crafted to ensure structural integrity and aesthetic perfection.",
            ["Log Home Assembly", "Timber Framing", "Glued Timber Construction", "Structural Engineering"],
        ),
        service(
            "interior-design",
            "Interior Design",
            "Warm, modern interiors that celebrate the natural texture of wood.",
            "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?auto=format&fit=crop&w=1200&q=80",
            "Our interior design philosophy is centered around creating spaces that feel both luxurious and grounded. We celebrate the natural warmth and texture of wood, complementing it with modern finishes and thoughtful lighting. From custom furniture to integrated storage solutions, we ensure every detail contributes to a cohesive and inviting atmosphere.",
            ["Space Planning", "Material Selection", "Custom Cabinetry", "Lighting Design"],
        ),
        service(
            "landscape-integration",
            "Landscape Integration",
            "Harmonizing your home with its surroundings for a seamless outdoor experience.",
            "https://images.unsplash.com/photo-1542718610-a1d656d1884c?auto=format&fit=crop&w=1200&q=80",
            "A Skyline Mon Ranch home is never an island. We design with the landscape in mind, creating seamless transitions between indoor and outdoor living. Our landscape integration services include site grading, terrace design, and the selection of native plantings that enhance the natural beauty of your property while providing privacy and functionality.",
            ["Terrace & Deck Design", "Native Landscaping", "Outdoor Living Spaces", "Site Grading"],
        ),
    ]
}

/// All journal entries, newest first
pub fn posts() -> Vec<BlogPost> {
    vec![
        post(
            1,
            "choosing-timber",
            "Choosing the Right Timber for Your Climate",
            (2023, 10, 12),
            "https://images.unsplash.com/photo-1510798831971-661eb04b3739?auto=format&fit=crop&w=1200&q=80",
            "Selecting the right timber is crucial for the longevity and performance of your wooden home. Different species react differently to moisture, temperature fluctuations, and UV exposure. In this guide, we explore the best options for various climatic zones...",
        ),
        post(
            2,
            "modern-minimalism",
            "Modern Minimalism in Wooden Architecture",
            (2023, 9, 28),
            "https://images.unsplash.com/photo-1480074568708-e7b720bb3f09?auto=format&fit=crop&w=1200&q=80",
            "Minimalism isn't just about having less; it's about making every element count. When applied to wooden architecture, minimalism highlights the natural beauty of the grain and the precision of the joinery...",
        ),
        post(
            3,
            "benefits-log-home",
            "The Benefits of Living in a Log Home",
            (2023, 8, 15),
            "https://images.unsplash.com/photo-1464146072230-91cabc968266?auto=format&fit=crop&w=1200&q=80",
            "Beyond their aesthetic appeal, log homes offer exceptional energy efficiency, natural air filtration, and a unique sense of tranquility. Discover why more people are choosing log construction for their primary residences...",
        ),
        post(
            4,
            "sustainable-forestry",
            "Sustainable Forestry: Our Commitment",
            (2023, 7, 2),
            "https://images.unsplash.com/photo-1542718610-a1d656d1884c?auto=format&fit=crop&w=1200&q=80",
            "At Skyline Mon Ranch, sustainability is at the core of everything we do. We partner with certified forests to ensure that every tree harvested is replaced, maintaining the ecological balance for future generations...",
        ),
        post(
            5,
            "natural-light-design",
            "Designing for Natural Light",
            (2023, 6, 18),
            "https://images.unsplash.com/photo-1518780664697-55e3ad937233?auto=format&fit=crop&w=1200&q=80",
            "Natural light can transform a space, making it feel larger, warmer, and more inviting. Our architectural designs prioritize large windows and strategic orientations to maximize daylight throughout the year...",
        ),
        post(
            6,
            "winter-maintenance",
            "Winter Maintenance for Timber Structures",
            (2023, 5, 24),
            "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=1200&q=80",
            "Winter can be harsh on any building, but timber structures require specific care to stay in top condition. From checking seals to managing snow loads, here's what you need to know to protect your home...",
        ),
    ]
}

pub fn find_service(slug: &str) -> Result<Service> {
    debug!("Looking up service {}", slug);
    services()
        .into_iter()
        .find(|s| s.slug == slug)
        .ok_or_else(|| CatalogError::not_found("Service", slug, Recovery::SERVICES))
}

pub fn find_post(slug: &str) -> Result<BlogPost> {
    debug!("Looking up post {}", slug);
    posts()
        .into_iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| CatalogError::not_found("Post", slug, Recovery::JOURNAL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_service_by_slug() {
        let service = find_service("timber-construction").unwrap();
        assert_eq!(service.title, "Timber Construction");
        assert_eq!(service.features.len(), 4);
    }

    #[test]
    fn test_unknown_service_offers_way_back() {
        let err = find_service("roofing").unwrap_err();
        assert_eq!(err.to_string(), "Service not found: roofing");
        assert_eq!(err.recovery(), Some(Recovery::SERVICES));
    }

    #[test]
    fn test_unknown_post_returns_to_journal() {
        let err = find_post("summer-maintenance").unwrap_err();
        assert_eq!(err.recovery().map(|r| r.path), Some("/blog"));
    }

    #[test]
    fn test_posts_are_newest_first() {
        let posts = posts();
        assert!(posts.windows(2).all(|w| w[0].published > w[1].published));
        assert_eq!(posts[0].display_date(), "Oct 12, 2023");
    }
}

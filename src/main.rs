mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ListArgs};
use skyline_catalog::catalog::types::{bedroom_label, BEDROOM_CHOICES, FLOOR_CHOICES};
use skyline_catalog::catalog::{self, AreaPreset, Facet, Selection};
use skyline_catalog::config::Config;
use skyline_catalog::error::CatalogError;
use skyline_catalog::filter::{self, ResultSummary, SIMILAR_PROJECTS};
use skyline_catalog::models::{Category, Project, Style};
use skyline_catalog::query;
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    debug!("Using config: {:?}", config);

    let command = cli.command.unwrap_or(Commands::List(ListArgs::default()));

    let outcome = match command {
        Commands::List(args) => list(&config, &args).await,
        Commands::Search { text } => {
            match query::submit_search(&text) {
                Some(url) => println!("{url}"),
                None => info!("Nothing to search for"),
            }
            Ok(())
        }
        Commands::Show { id } => show(&config, id).await,
        Commands::Facets => {
            facets();
            Ok(())
        }
        Commands::Services => {
            for service in catalog::services() {
                println!("{} ({})", service.title, service.slug);
                println!("   {}", service.summary);
            }
            Ok(())
        }
        Commands::Service { slug } => catalog::find_service(&slug)
            .map(|service| {
                println!("{}", service.title);
                println!();
                println!("{}", service.full_description);
                println!();
                for feature in &service.features {
                    println!("   • {feature}");
                }
            })
            .map_err(anyhow::Error::from),
        Commands::Posts => {
            for post in catalog::posts() {
                println!("{}  {} ({})", post.display_date(), post.title, post.slug);
            }
            Ok(())
        }
        Commands::Post { slug } => catalog::find_post(&slug)
            .map(|post| {
                println!("{}", post.title);
                println!("{}", post.display_date());
                println!();
                println!("{}", post.content);
            })
            .map_err(anyhow::Error::from),
    };

    // Missed lookups are shown with a way back, not as failures
    let err = match outcome {
        Ok(()) => return Ok(ExitCode::SUCCESS),
        Err(err) => err,
    };
    match err.downcast_ref::<CatalogError>() {
        Some(not_found) if not_found.recovery().is_some() => {
            println!("{not_found}");
            if let Some(recovery) = not_found.recovery() {
                println!("{} → {}", recovery.label, recovery.path);
            }
            Ok(ExitCode::from(2))
        }
        _ => Err(err),
    }
}

async fn load_projects(config: &Config) -> Result<Vec<Project>> {
    let source = config.catalog_source();
    info!("Loading catalog from {} source", source.source_name());
    source.load().await
}

async fn list(config: &Config, args: &ListArgs) -> Result<()> {
    let projects = load_projects(config).await?;
    let selection = args.selection();
    let matched = filter::filter(&projects, &selection);

    let summary = ResultSummary::new(&selection, matched.len());
    println!("{}", summary.headline);
    println!("{}", summary.subheading);
    if !selection.is_unconstrained() {
        println!("Filters: {}", describe(&selection));
    }
    println!();

    if args.export {
        filter::export_results(&config.export_dir, &matched)
            .await
            .with_context(|| format!("Failed to export to {}", config.export_dir.display()))?;
    }

    if matched.is_empty() {
        warn!("No projects found matching your criteria");
        return Ok(());
    }

    for (i, project) in matched.iter().enumerate() {
        print_card(i + 1, project);
    }

    Ok(())
}

async fn show(config: &Config, id: u32) -> Result<()> {
    let projects = load_projects(config).await?;
    let project = filter::find_project(&projects, id)?;

    println!("{}", project.title);
    println!("{}", project.subtitle);
    println!();
    println!("   Category: {}   Style: {}", project.category, project.style);
    println!(
        "   {} m², {} floors, {} bedrooms",
        project.area, project.floors, project.bedrooms
    );
    println!();
    println!("{}", project.description);
    println!();
    println!("Similar Projects");
    for (i, similar) in filter::similar_projects(&projects, id, SIMILAR_PROJECTS)
        .into_iter()
        .enumerate()
    {
        print_card(i + 1, similar);
    }
    Ok(())
}

fn print_card(position: usize, project: &Project) {
    println!("{}. {} (#{})", position, project.title, project.id);
    println!("   {}", project.subtitle);
    println!(
        "   {} m², {} floors, {} bedrooms",
        project.area, project.floors, project.bedrooms
    );
    println!("   {} · {}", project.category, project.style);
    println!();
}

fn describe(selection: &Selection) -> String {
    let mut parts = vec![
        format!("category={}", selection.category),
        format!("style={}", selection.style),
    ];
    let area = match selection.area.max {
        Some(max) => format!("area={}-{} m²", selection.area.min, max),
        None => format!("area={}+ m²", selection.area.min),
    };
    parts.push(area);
    parts.push(match selection.bedrooms {
        Facet::Only(n) => format!("bedrooms={}", bedroom_label(n)),
        Facet::All => "bedrooms=All".to_string(),
    });
    parts.push(format!("floors={}", selection.floors));
    parts.join(", ")
}

fn facets() {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    println!("Categories: All, {}", categories.join(", "));

    let styles: Vec<String> = Style::ALL.iter().map(|s| s.label()).collect();
    println!("Styles:     All Styles, {}", styles.join(", "));

    let areas: Vec<&str> = AreaPreset::ALL.iter().map(|a| a.label()).collect();
    println!("Area:       {}", areas.join(", "));

    let bedrooms: Vec<String> = BEDROOM_CHOICES.iter().map(|&n| bedroom_label(n)).collect();
    println!("Bedrooms:   {}, All", bedrooms.join(" "));

    let floors: Vec<String> = FLOOR_CHOICES.iter().map(|n| n.to_string()).collect();
    println!("Floors:     {}, All", floors.join(" "));
}

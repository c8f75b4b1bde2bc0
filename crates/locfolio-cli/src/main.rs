//! Localization Portfolio CLI
//!
//! Thin wrapper around locfolio-core for checking project data and building
//! the static page.
//!
//! ## Usage
//!
//! ```bash
//! # Validate the data file and show status counts
//! locfolio check
//!
//! # Show the projects in display order
//! locfolio --projects data/projects.json list
//!
//! # Render the grid fragment
//! locfolio render --output grid.html
//!
//! # Fill a page template with the rendered grid
//! locfolio build --template index.template.html --output index.html
//!
//! # Show or flip the saved theme of the desktop app
//! locfolio theme --toggle
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use locfolio_core::render::grid_html;
use locfolio_core::view::SoonCardView;
use locfolio_core::{
    load_projects, resolve_progress, sort_projects, template, FileSource, ProjectStatus,
    RedbPreferences, RenderedGrid, SiteConfig, ThemeController,
};

/// Localization Portfolio
#[derive(Parser)]
#[command(name = "locfolio")]
#[command(version = "0.1.0")]
#[command(about = "Localization portfolio - project data and static pages")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Project data file
    #[arg(short, long, global = true, default_value = "projects.json")]
    projects: PathBuf,

    /// Contact address used by the suggestion and bug report links
    #[arg(long, global = true)]
    contact_email: Option<String>,

    /// Calendar year for NEW markers and the footer (default: this year)
    #[arg(long, global = true)]
    year: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the data file and print status counts
    Check,

    /// List projects in display order
    List,

    /// Render the project grid as an HTML fragment
    Render {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fill a page template with the rendered grid and footer year
    Build {
        /// Page template carrying the required element ids
        #[arg(short, long)]
        template: PathBuf,

        /// Output page
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show (or flip) the theme saved by the desktop app
    Theme {
        /// Data directory of the desktop app
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Flip the saved theme
        #[arg(long)]
        toggle: bool,
    },
}

/// Get the default data directory of the desktop app
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("locfolio")
}

async fn build_grid(config: &SiteConfig, year: i32) -> Result<RenderedGrid> {
    let source = FileSource::new(&config.projects_path);
    let projects = load_projects(&source)
        .await
        .with_context(|| format!("Failed to load {}", config.projects_path.display()))?;
    Ok(RenderedGrid::build(&projects, year, &config.contact_email))
}

fn grid_fragment(grid: &RenderedGrid, config: &SiteConfig) -> String {
    grid_html(grid.cards(), &SoonCardView::new(config.contact_email.clone()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    locfolio_core::logging::setup_logging(cli.verbose);

    let mut config = SiteConfig::default().with_projects_path(&cli.projects);
    if let Some(email) = cli.contact_email {
        config.contact_email = email;
    }
    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());

    match cli.command {
        Commands::Check => {
            let source = FileSource::new(&config.projects_path);
            let projects = load_projects(&source)
                .await
                .with_context(|| format!("Failed to load {}", config.projects_path.display()))?;

            let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();

            println!("Projects: {}", projects.len());
            println!("  In progress: {}", count(ProjectStatus::InProgress));
            println!("  Completed: {}", count(ProjectStatus::Completed));
            let other = count(ProjectStatus::Other);
            if other > 0 {
                println!("  Unknown status: {}", other);
            }
            let untitled = projects.iter().filter(|p| p.title.trim().is_empty()).count();
            if untitled > 0 {
                println!("  Without title: {}", untitled);
            }
        }

        Commands::List => {
            let source = FileSource::new(&config.projects_path);
            let projects = load_projects(&source)
                .await
                .with_context(|| format!("Failed to load {}", config.projects_path.display()))?;
            let view = sort_projects(&projects);

            if view.is_empty() {
                println!("No projects found.");
            } else {
                for (index, project) in view.iter() {
                    let year = project
                        .year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "----".to_string());
                    println!(
                        "{:>3}  {:<10} {}  {:>3}%  {}",
                        index,
                        project.status.label(),
                        year,
                        resolve_progress(project),
                        project.title
                    );
                }
            }
        }

        Commands::Render { output } => {
            let grid = build_grid(&config, year).await?;
            let html = grid_fragment(&grid, &config);
            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Rendered {} projects to {}", grid.cards().len(), path.display());
                }
                None => println!("{}", html),
            }
        }

        Commands::Build {
            template: template_path,
            output,
        } => {
            let page_template = std::fs::read_to_string(&template_path)
                .with_context(|| format!("Failed to read {}", template_path.display()))?;
            template::check_contract(&page_template)?;

            let grid = build_grid(&config, year).await?;
            let page = template::assemble(&page_template, &grid_fragment(&grid, &config), year)?;
            std::fs::write(&output, page)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            tracing::info!(projects = grid.cards().len(), "page assembled");
            println!("Built {} ({} projects)", output.display(), grid.cards().len());
        }

        Commands::Theme { data_dir, toggle } => {
            let data_dir = data_dir.unwrap_or_else(default_data_dir);
            let store = RedbPreferences::open(data_dir.join("preferences.redb"))?;
            let mut controller = ThemeController::load_with_key(store, config.theme_key.clone());
            if toggle {
                controller.toggle();
            }
            println!("Theme: {}", controller.current());
        }
    }

    Ok(())
}

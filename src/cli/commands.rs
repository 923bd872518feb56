use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::{HttpCatalog, ShowCatalog};
use crate::filters::sync::FilterSync;
use crate::models::genre::{GENRES, genre_line};
use crate::tui;

#[derive(Parser)]
#[command(name = "podcast-browser")]
#[command(version = "0.1.0")]
#[command(about = "Browse and search the public podcast directory", long_about = None)]
pub struct Cli {
    /// Initial filter state as a query string, e.g. "search=tech&genre=3"
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one show's seasons and episodes
    Show {
        /// Show identifier
        id: u32,
    },
    /// List the genre catalog
    Genres,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Show { id }) => {
            print_show(*id)?;
        }
        Some(Commands::Genres) => {
            print_genres();
        }
        None => {
            browse(cli.query.as_deref())?;
        }
    }

    Ok(())
}

fn browse(query: Option<&str>) -> Result<()> {
    let catalog = HttpCatalog::new();

    println!("Loading podcasts...");
    let shows = catalog.fetch_previews()?;

    let filter = query.map(FilterSync::from_query).unwrap_or_default();
    tui::run_interactive(catalog, shows, filter)
}

fn print_show(id: u32) -> Result<()> {
    let catalog = HttpCatalog::new();
    let show = catalog.fetch_show(id)?;

    println!("{}", show.title);
    println!("{}", "=".repeat(show.title.len()));
    if !show.genres.is_empty() {
        println!("Genres: {}", genre_line(&show.genres));
    }
    if let Some(updated) = show.updated {
        println!("Last updated: {}", updated.format("%b %-d, %Y"));
    }
    println!();

    if show.seasons.is_empty() {
        println!("No seasons available.");
        return Ok(());
    }

    for season in &show.seasons {
        println!("{} ({} episodes)", season.title, season.episodes.len());
        for (idx, episode) in season.episodes.iter().enumerate() {
            println!("  {}. {}", idx + 1, episode.title);
        }
    }

    Ok(())
}

fn print_genres() {
    println!("Genre catalog");
    println!("=============");
    for (id, title) in GENRES {
        println!("{:>2}  {}", id, title);
    }
}

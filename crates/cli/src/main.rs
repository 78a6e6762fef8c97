use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use catalog::{Catalog, Language, Movie};
use server::{SuggestMode, Suggester};
use session::SessionState;

/// Film Aura - Movie Suggestions
#[derive(Parser)]
#[command(name = "film-aura")]
#[command(about = "Movie suggestions by language, mood, random pick, or trending list", long_about = None)]
struct Cli {
    /// Path to the data directory holding the shelf files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw one or more suggestions in a fresh session
    Suggest {
        /// Restrict to one language shelf (english, hindi, malayalam, tamil)
        #[arg(long, conflicts_with_all = ["mood", "trending"])]
        language: Option<Language>,

        /// Keep only movies whose mood matches this keyword
        /// (e.g. comedy, thriller, romantic, action, horror, drama)
        #[arg(long, conflicts_with = "trending")]
        mood: Option<String>,

        /// Draw from the trending shelf
        #[arg(long)]
        trending: bool,

        /// Number of suggestions to draw before showing the session recap
        #[arg(long, default_value = "1")]
        count: usize,
    },

    /// Show per-shelf record counts
    Stats,

    /// Search movie titles (case-insensitive substring match)
    Search {
        /// Title fragment to look for
        #[arg(long)]
        title: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading shelf files from {}...", cli.data_dir.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_dir(&cli.data_dir).context("Failed to load the movie catalog")?,
    );
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Suggest {
            language,
            mood,
            trending,
            count,
        } => handle_suggest(catalog, language, mood, trending, count)?,
        Commands::Stats => handle_stats(&catalog),
        Commands::Search { title } => handle_search(&catalog, &title),
    }

    Ok(())
}

/// Handle the 'suggest' command
fn handle_suggest(
    catalog: Arc<Catalog>,
    language: Option<Language>,
    mood: Option<String>,
    trending: bool,
    count: usize,
) -> Result<()> {
    let mode = if trending {
        SuggestMode::Trending
    } else if let Some(language) = language {
        SuggestMode::Language { language }
    } else if let Some(keyword) = mood {
        SuggestMode::Mood { keyword }
    } else {
        SuggestMode::Random
    };

    let suggester = Suggester::new(catalog);
    let mut session = SessionState::new();

    for _ in 0..count {
        match suggester.suggest(&mut session, &mode)? {
            Some(movie) => print_movie_card(&movie),
            None => {
                println!("{}", mode.empty_notice().yellow());
                break;
            }
        }
    }

    if session.history().len() > 1 {
        println!("{}", "Shown this session:".bold().blue());
        for (i, movie) in session.history().iter().enumerate() {
            println!("  {}. {}", i + 1, movie.title);
        }
    }

    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(catalog: &Catalog) {
    println!("{}", "Catalog:".bold().blue());
    for language in Language::ALL {
        println!(
            "{}{}: {} titles",
            "• ".green(),
            language,
            catalog.language(language).len()
        );
    }
    println!(
        "{}trending: {} titles",
        "• ".cyan(),
        catalog.trending().len()
    );

    let (titles, _) = catalog.counts();
    println!("{}total across languages: {}", "• ".cyan(), titles);
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str) {
    let needle = title.to_lowercase();
    let mut matches: Vec<(&Movie, Language, usize)> = Vec::new();

    for language in Language::ALL {
        for movie in catalog.language(language) {
            let haystack = movie.title.to_lowercase();
            if haystack == needle {
                // Exact match
                matches.push((movie, language, 0));
            } else if haystack.contains(&needle) {
                // Substring match
                matches.push((movie, language, 1));
            }
        }
    }

    // Sort by relevance (exact match first, then contains); the stable sort
    // keeps shelf order within each rank
    matches.sort_by_key(|(_, _, rank)| *rank);

    println!("{}", format!("Search results for '{title}':").bold().blue());
    if matches.is_empty() {
        println!("  (no matches)");
    }
    for (movie, language, _) in matches.iter().take(20) {
        println!(
            "  {} [{}] {} - {}",
            movie.title, language, movie.rating, movie.mood
        );
    }
}

/// Helper function to format and print one suggestion card
fn print_movie_card(movie: &Movie) {
    println!("{}", format!("🎬 {}", movie.title).bold().blue());
    println!(
        "   {} {} | {} {} | {} {}",
        "Director:".green(),
        movie.director,
        "Rating:".green(),
        movie.rating,
        "Mood:".green(),
        movie.mood
    );
    println!("   {}", movie.summary);
}

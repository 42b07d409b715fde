use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lesejournal::config::Config;
use lesejournal::google_books::GoogleBooksClient;
use lesejournal::models::CanonicalRecord;
use lesejournal::services::{
    EnrichMode, LibraryStats, build_catalog, sort_records, upgrade_cover_zoom,
};
use lesejournal::{import, storage};

#[derive(Parser, Debug)]
#[command(name = "lesejournal")]
#[command(about = "Normalize personal reading lists into a JSON book database")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse free-text catalog files ("Author (Place): Title (Date) note")
    ParseText {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output database (defaults to DATABASE_PATH)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse preparsed JSON files, optionally enriching from Google Books
    ParsePreparsed {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// quick, full, sample or sample:<n>
        #[arg(short, long, default_value = "quick")]
        mode: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Enrich an existing database from Google Books
    Enrich {
        /// full, sample or sample:<n>
        #[arg(short, long, default_value = "full")]
        mode: String,
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rewrite cover references to request larger images
    UpgradeCovers {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print statistics for a database
    Stats {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn parse_mode(raw: &str, config: &Config) -> anyhow::Result<EnrichMode> {
    let mode = raw.parse::<EnrichMode>().map_err(anyhow::Error::msg)?;
    // A bare "sample" uses the configured size
    Ok(match mode {
        EnrichMode::Sample(_) if raw.trim().eq_ignore_ascii_case("sample") => {
            EnrichMode::Sample(config.sample_size)
        }
        other => other,
    })
}

fn print_stats(records: &[CanonicalRecord]) {
    let stats = LibraryStats::compute(records);
    println!("Total books: {}", stats.total);
    if let Some((first, last)) = stats.year_range {
        println!("Date range: {} - {}", first, last);
    }
    println!(
        "Books with descriptions: {} ({:.1}%)",
        stats.with_description,
        stats.percentage(stats.with_description)
    );
    println!(
        "Books with covers: {} ({:.1}%)",
        stats.with_cover,
        stats.percentage(stats.with_cover)
    );
    println!("Top {} authors:", stats.top_authors.len());
    for (author, count) in &stats.top_authors {
        println!("  {}: {} books", author, count);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lesejournal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::ParseText { files, output } => {
            let mut records = import::parse_text_files(&files)?;
            sort_records(&mut records);

            let output = output.unwrap_or_else(|| config.database_path.clone());
            storage::save_records(&output, &records)?;
            print_stats(&records);
        }
        Command::ParsePreparsed { files, mode, output } => {
            let mode = parse_mode(&mode, &config)?;
            let entries = import::load_preparsed_files(&files)?;
            if entries.is_empty() {
                anyhow::bail!("No books found in preparsed files");
            }
            let records = import::records_from_entries(&entries)?;

            let client = GoogleBooksClient::new(&config)?;
            let (records, report) =
                build_catalog(records, mode, &client, config.lookup_delay).await;
            tracing::info!("{:?}", report);

            let output = output.unwrap_or_else(|| config.database_path.clone());
            storage::save_records(&output, &records)?;
            print_stats(&records);
        }
        Command::Enrich {
            mode,
            input,
            output,
        } => {
            let mode = parse_mode(&mode, &config)?;
            let input = input.unwrap_or_else(|| config.database_path.clone());
            let records = storage::load_records(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;

            let client = GoogleBooksClient::new(&config)?;
            let (records, report) =
                build_catalog(records, mode, &client, config.lookup_delay).await;
            println!(
                "Looked up {} books: {} enriched, {} without data",
                report.attempted, report.enriched, report.missed
            );

            let output = output.unwrap_or_else(|| PathBuf::from("books_enriched.json"));
            storage::save_records(&output, &records)?;
            print_stats(&records);
        }
        Command::UpgradeCovers { input } => {
            let input = input.unwrap_or_else(|| config.database_path.clone());
            let mut records = storage::load_records(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;

            let upgraded = upgrade_cover_zoom(&mut records);
            storage::save_records(&input, &records)?;
            println!("Upgraded {} cover URLs to higher quality (zoom=5)", upgraded);
            print_stats(&records);
        }
        Command::Stats { input } => {
            let input = input.unwrap_or_else(|| config.database_path.clone());
            let records = storage::load_records(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            print_stats(&records);
        }
    }

    Ok(())
}

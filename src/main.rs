use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use itinera::{
    extract_location, normalize_location, Error, MemoryStore, RankedResult, SearchConfig,
    SearchFilters, SearchService,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

/// Log filter variable, e.g. `ITINERA_LOG=itinera=debug`.
const LOG_ENV: &str = "ITINERA_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", themed(RED, &[BOLD], "error:"), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Search {
            dataset,
            query,
            kind,
            location,
            start_date,
            end_date,
            limit,
            json,
        } => {
            let mut filters = SearchFilters::for_type(kind.into()).with_dates(
                parse_date(start_date.as_deref())?,
                parse_date(end_date.as_deref())?,
            );
            if let Some(location) = location {
                filters = filters.with_location(location);
            }
            let service = SearchService::new(Arc::new(MemoryStore::from_path(&dataset)?), config)?;

            let start = Instant::now();
            let results = service.search(&query, &filters, limit).await;
            let elapsed = start.elapsed().as_secs_f64() * 1000.0;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            banner(&format!("itinera search: \"{}\"", truncate(&query, 50)));
            section_top(&format!("ITINERARIES ({})", results.itineraries.len()));
            print_hits(&results.itineraries, |it| {
                (it.item.title.clone(), it.item.location.clone())
            });
            section_mid(&format!("USERS ({})", results.users.len()));
            print_hits(&results.users, |user| {
                (user.item.title.clone(), format!("@{}", user.item.username))
            });
            section_mid("SUMMARY");
            row(&format!(
                " {} results in {}",
                results.total_count,
                timing_ms(elapsed)
            ));
            section_bot();
        }

        Commands::Suggest {
            dataset,
            query,
            limit,
        } => {
            let service = SearchService::new(Arc::new(MemoryStore::from_path(&dataset)?), config)?;
            let suggestions = service.suggest(&query, limit).await;

            section_top(&format!("SUGGESTIONS FOR \"{}\"", truncate(&query, 40)));
            if suggestions.is_empty() {
                row(&themed(GRAY, &[DIM], " no suggestions"));
            }
            for (i, suggestion) in suggestions.iter().enumerate() {
                row(&format!(" {} {}", pad_left(&(i + 1).to_string(), 2), suggestion));
            }
            section_bot();
        }

        Commands::Popular { limit } => {
            let service = SearchService::new(Arc::new(MemoryStore::default()), config)?;
            section_top("POPULAR SEARCHES");
            for (i, search) in service.popular_searches(limit).iter().enumerate() {
                row(&format!(" {} {}", pad_left(&(i + 1).to_string(), 2), search));
            }
            section_bot();
        }

        Commands::Locations { location } => {
            let variants = normalize_location(&location);
            section_top("LOCATION VARIANTS");
            if variants.is_empty() {
                row(&themed(GRAY, &[DIM], " (empty location)"));
            }
            for (i, variant) in variants.iter().enumerate() {
                let tag = if i == 0 { "original" } else { "alias" };
                row(&format!(
                    " {} {}",
                    pad_right(&themed(MAGENTA, &[], tag), 10),
                    variant
                ));
            }
            section_mid("EXTRACTED FROM QUERY");
            let extracted = extract_location(&location).unwrap_or_else(|| "-".to_string());
            row(&format!(" {}", extracted));
            section_bot();
        }
    }

    Ok(())
}

fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>, Error> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d").map_err(|_| Error::InvalidDate(v.to_string()))
        })
        .transpose()
}

fn print_hits<T>(hits: &[RankedResult<T>], label: impl Fn(&RankedResult<T>) -> (String, String)) {
    if hits.is_empty() {
        row(&themed(GRAY, &[DIM], " no matches"));
        return;
    }
    for hit in hits {
        let (title, detail) = label(hit);
        row(&format!(
            " {} {} {} {}",
            score_value(hit.relevance_score),
            pad_right(&truncate(&title, 30), 30),
            pad_right(&themed(GRAY, &[], &truncate(&detail, 20)), 20),
            field_tags(&hit.matched_fields),
        ));
    }
}

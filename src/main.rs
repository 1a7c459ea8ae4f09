mod config;
mod core;
mod models;
mod services;

use crate::config::Settings;
use crate::core::{remove_blank_lines, scoring_prompt, PairingEngine};
use crate::models::Participant;
use crate::services::{OpenAiClient, SheetsClient};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true)
        // Rankings go to stdout for the spreadsheet paste; logs stay on stderr
        .with_writer(std::io::stderr);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Mentor Match pairing run...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    let sheets = SheetsClient::new(
        settings.sheets.endpoint,
        settings.sheets.access_token,
    );
    let oracle = OpenAiClient::new(
        settings.openai.endpoint,
        settings.openai.api_key,
        settings.openai.model,
    );
    let engine = PairingEngine::new();
    let max_matches = settings.matching.max_matches;

    // Fetch the questionnaire rows once; a transport failure here is fatal
    let rows = sheets
        .fetch_rows(&settings.sheets.spreadsheet_id, &settings.sheets.range)
        .await
        .map_err(|e| {
            error!("Failed to fetch spreadsheet rows: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;

    if rows.len() <= 1 {
        info!("No data found.");
        return Ok(());
    }

    // Skip the header row and parse once into named-field records
    let participants: Vec<Participant> = rows[1..].iter().map(|row| Participant::from_row(row)).collect();

    let mentor_count = participants.iter().filter(|p| p.is_mentor()).count();
    info!(
        "Parsed {} participants ({} mentors)",
        participants.len(),
        mentor_count
    );

    // One oracle call per mentor, strictly in row order
    for dossier in engine.build_dossiers(&participants) {
        info!(
            "Ranking mentor {} <{}> against {} compatible mentees",
            dossier.mentor_name, dossier.mentor_email, dossier.mentee_count
        );

        let prompt = scoring_prompt(&dossier, max_matches);

        // Oracle failures are per-mentor recoverable: substitute a
        // descriptive line and keep going
        let ranking = match oracle.rank(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Ranking failed for {}: {}", dossier.mentor_name, e);
                format!("An error occurred: {}", e)
            }
        };

        println!("{}", remove_blank_lines(&ranking));
    }

    info!("Pairing run complete");

    Ok(())
}

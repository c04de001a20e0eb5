use std::env;
use anyhow::{Context, Result};
use chrono::{FixedOffset, Local, TimeZone};
use log::{error, info};
use serde::Serialize;
use bikecast::config::{load_config, Config, Output, Presentation};
use bikecast::logging::setup_logger;
use bikecast::manager_forecast::load_forecast;
use bikecast::models::bike_score::BikeRidingScore;
use bikecast::models::daily_forecast::DailyForecast;
use bikecast::models::forecast::ForecastSample;
use bikecast::presentation::{best_day, format_date, icon_url, score_color};
use bikecast::daily_scores_in;

#[derive(Serialize)]
struct DayReport<'a> {
    label: String,
    color: &'static str,
    icon_url: Option<String>,
    forecast: &'a DailyForecast,
    score: &'a BikeRidingScore,
}

fn main() {
    let config_path = env::args()
        .nth(1)
        .or_else(|| env::var("CONFIG_PATH").ok())
        .unwrap_or("config.toml".to_string());

    // No logger is listening until init has succeeded
    let config = match init(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Loads the configuration and sets up logging
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
fn init(config_path: &str) -> Result<Config> {
    let config = load_config(config_path)
        .with_context(|| format!("loading config {}", config_path))?;
    setup_logger(&config.general).context("setting up logging")?;

    info!("bikecast version: {}", env!("CARGO_PKG_VERSION"));

    Ok(config)
}

/// Loads the forecast and prints the scored report
///
/// # Arguments
///
/// * 'config' - the loaded configuration
fn run(config: &Config) -> Result<()> {
    let samples = load_forecast(&config.files.forecast_file)
        .with_context(|| format!("loading forecast {}", config.files.forecast_file))?;

    match config.presentation.utc_offset() {
        Some(offset) => report::<FixedOffset>(&samples, &offset, &config.presentation),
        None => report(&samples, &Local, &config.presentation),
    }
}

/// Scores the forecast and prints a report to stdout
///
/// # Arguments
///
/// * 'samples' - forecast samples
/// * 'tz' - timezone to group days in
/// * 'presentation' - presentation configuration
fn report<Tz: TimeZone>(samples: &[ForecastSample], tz: &Tz, presentation: &Presentation) -> Result<()>
where
    Tz::Offset: std::fmt::Display,
{
    let scores = daily_scores_in(samples, tz);
    info!("scored {} days", scores.len());

    match presentation.output {
        Output::Json => {
            let days = scores.iter()
                .map(|(forecast, score)| DayReport {
                    label: format_date(forecast.date_time, tz),
                    color: score_color(score.score),
                    icon_url: forecast.weather.as_ref().map(|w| icon_url(&presentation.icon_base_url, &w.icon)),
                    forecast,
                    score,
                })
                .collect::<Vec<DayReport>>();

            println!("{}", serde_json::to_string_pretty(&days)?);
        },
        Output::Text => {
            for (forecast, score) in &scores {
                println!("{:<10} {}", format_date(forecast.date_time, tz), forecast);
                print!("{}", score);
            }

            if let Some((forecast, score)) = best_day(&scores) {
                println!("Best day: {} ({}, {})", format_date(forecast.date_time, tz), score.score, score.recommendation);
            }
        },
    }

    Ok(())
}

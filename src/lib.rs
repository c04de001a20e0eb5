//! Turns a multi-day, 3-hourly weather forecast into a per day bike riding score.
//!
//! Forecast samples are first grouped per calendar day by [`aggregation`], then each day is
//! scored by [`scoring`] on temperature, wind, precipitation, weather condition and humidity.

use chrono::{Local, TimeZone};
use crate::models::bike_score::BikeRidingScore;
use crate::models::daily_forecast::DailyForecast;
use crate::models::forecast::ForecastSample;

pub mod aggregation;
pub mod config;
pub mod errors;
pub mod logging;
pub mod manager_forecast;
pub mod models;
pub mod presentation;
pub mod scoring;

/// Aggregates samples into days in the local timezone and scores each day
///
/// # Arguments
///
/// * 'samples' - forecast samples in chronological order
pub fn daily_scores(samples: &[ForecastSample]) -> Vec<(DailyForecast, BikeRidingScore)> {
    daily_scores_in(samples, &Local)
}

/// Aggregates samples into days in the given timezone and scores each day
///
/// # Arguments
///
/// * 'samples' - forecast samples in chronological order
/// * 'tz' - timezone used to derive the calendar date of each sample
pub fn daily_scores_in<Tz: TimeZone>(samples: &[ForecastSample], tz: &Tz) -> Vec<(DailyForecast, BikeRidingScore)> {
    aggregation::aggregate_in(samples, tz)
        .into_iter()
        .map(|day| {
            let score = scoring::score(&day);
            (day, score)
        })
        .collect()
}

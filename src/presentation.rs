use chrono::{DateTime, TimeZone};
use crate::models::bike_score::BikeRidingScore;
use crate::models::daily_forecast::DailyForecast;

/// Default base url for provider weather icons
pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn/";

/// Returns the day with the highest score, the earliest day wins on equal scores
///
/// # Arguments
///
/// * 'daily_scores' - scored days in chronological order
pub fn best_day(daily_scores: &[(DailyForecast, BikeRidingScore)]) -> Option<&(DailyForecast, BikeRidingScore)> {
    let mut best: Option<&(DailyForecast, BikeRidingScore)> = None;
    for entry in daily_scores {
        if best.is_none_or(|b| entry.1.score > b.1.score) {
            best = Some(entry);
        }
    }

    best
}

/// Formats a timestamp as a short day label, e.g. "Mon,Jun 3"
///
/// # Arguments
///
/// * 'timestamp' - seconds since the unix epoch
/// * 'tz' - timezone to express the date in
pub fn format_date<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.with_timezone(tz).format("%a,%b %-d").to_string(),
        None => String::new(),
    }
}

/// Returns a hex colour for a total score, green for good and red for bad days
pub fn score_color(score: u32) -> &'static str {
    if score >= 80 {
        "#22C55E"
    } else if score >= 60 {
        "#4ADE80"
    } else if score >= 40 {
        "#FACC15"
    } else if score >= 20 {
        "#F87171"
    } else {
        "#DC2626"
    }
}

/// Builds the url for a provider weather icon
///
/// # Arguments
///
/// * 'base_url' - base url including trailing slash
/// * 'icon_code' - the icon code from the weather condition, e.g. "10d"
pub fn icon_url(base_url: &str, icon_code: &str) -> String {
    format!("{}{}@2x.png", base_url, icon_code)
}

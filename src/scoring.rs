use crate::models::bike_score::{BikeRidingFactor, BikeRidingScore, FactorKind, Recommendation};
use crate::models::daily_forecast::DailyForecast;
use crate::models::forecast::WeatherCondition;

/// Condition code assumed when a day has no representative weather condition
pub const DEFAULT_CONDITION_CODE: u32 = 800;

/// Conversion factor from m/s to km/h
const MS_TO_KMH: f64 = 3.6;

/// Calculates the bike riding score for one day.
///
/// Each of the five factors is scored on its own input by an ordered chain of thresholds,
/// the total is the weighted sum of the factor scores truncated towards zero. The ordering
/// of the branches matters since the ranges are not exhaustive, e.g. a humidity between 30%
/// and 39% is caught by the "below 70%" branch.
///
/// # Arguments
///
/// * 'forecast' - the daily forecast to score
pub fn score(forecast: &DailyForecast) -> BikeRidingScore {
    let factors = FactorKind::ALL
        .iter()
        .map(|kind| factor(*kind, forecast))
        .collect::<Vec<BikeRidingFactor>>();

    let total = factors.iter().map(|f| f.weighted()).sum::<f64>() as u32;
    let recommendation = Recommendation::from_score(total);

    BikeRidingScore {
        score: total,
        recommendation,
        factors,
        overall_rating: overall_rating(recommendation),
    }
}

/// Builds one fully populated factor for the given forecast
///
/// # Arguments
///
/// * 'kind' - the factor to build
/// * 'forecast' - the daily forecast holding the input for the factor
fn factor(kind: FactorKind, forecast: &DailyForecast) -> BikeRidingFactor {
    let (score, description, icon) = match kind {
        FactorKind::Temperature => {
            let temp = forecast.temperature.max;
            (temperature_score(temp), temperature_description(temp).to_string(), temperature_icon(temp))
        },
        FactorKind::Wind => {
            let kmh = forecast.wind_speed * MS_TO_KMH;
            (wind_score(kmh), wind_description(kmh).to_string(), wind_icon(kmh))
        },
        FactorKind::Precipitation => {
            let p = forecast.precipitation_probability;
            (precipitation_score(p), precipitation_description(p).to_string(), precipitation_icon(p))
        },
        FactorKind::Weather => {
            let w = forecast.weather.as_ref();
            (weather_score(w), weather_description(w), weather_icon(w))
        },
        FactorKind::Humidity => {
            let h = forecast.humidity;
            (humidity_score(h), humidity_description(h).to_string(), humidity_icon(h))
        },
    };

    BikeRidingFactor { kind, score, weight: kind.weight(), description, icon }
}

/// Scores the daily max temperature in degrees Celsius
fn temperature_score(temp: f64) -> u32 {
    if temp < -10.0 {
        0
    } else if temp < 0.0 {
        20
    } else if temp < 10.0 {
        60
    } else if (15.0..=25.0).contains(&temp) {
        100
    } else if temp < 30.0 {
        80
    } else if temp < 35.0 {
        40
    } else {
        10
    }
}

fn temperature_description(temp: f64) -> &'static str {
    if temp < 0.0 {
        "Very cold, wear warm gear"
    } else if temp < 10.0 {
        "Cold, layer up"
    } else if (15.0..=25.0).contains(&temp) {
        "Perfect temperature for cycling"
    } else if temp < 30.0 {
        "Warm, stay hydrated"
    } else {
        "Very hot, avoid peak hours"
    }
}

fn temperature_icon(temp: f64) -> &'static str {
    if temp < 0.0 {
        "❄️"
    } else if temp < 10.0 {
        "🥶"
    } else if (15.0..=25.0).contains(&temp) {
        "🌡️"
    } else if temp < 30.0 {
        "🔥"
    } else {
        "🌞"
    }
}

/// Scores the average wind speed in km/h
fn wind_score(kmh: f64) -> u32 {
    if kmh < 10.0 {
        100
    } else if kmh < 15.0 {
        80
    } else if kmh < 20.0 {
        60
    } else if kmh < 25.0 {
        40
    } else if kmh < 30.0 {
        20
    } else {
        0
    }
}

fn wind_description(kmh: f64) -> &'static str {
    if kmh < 10.0 {
        "Light breeze, perfect"
    } else if kmh < 15.0 {
        "Moderate wind"
    } else if kmh < 20.0 {
        "Strong wind, challenging"
    } else if kmh < 25.0 {
        "Very windy, difficult"
    } else {
        "Extreme wind, dangerous"
    }
}

fn wind_icon(kmh: f64) -> &'static str {
    if kmh < 10.0 {
        "🍃"
    } else if kmh < 15.0 {
        "🌬️💨"
    } else if kmh < 20.0 {
        "🌪️"
    } else if kmh < 25.0 {
        "💨💨"
    } else {
        "🌪️💨"
    }
}

/// Scores the average probability of precipitation (0.0-1.0)
fn precipitation_score(probability: f64) -> u32 {
    if probability < 0.1 {
        100
    } else if probability < 0.2 {
        80
    } else if probability < 0.3 {
        60
    } else if probability < 0.5 {
        40
    } else if probability < 0.7 {
        20
    } else {
        0
    }
}

fn precipitation_description(probability: f64) -> &'static str {
    if probability < 0.1 {
        "No rain expected"
    } else if probability < 0.2 {
        "Low chance of rain"
    } else if probability < 0.3 {
        "Some chance of rain"
    } else if probability < 0.5 {
        "Moderate chance of rain"
    } else if probability < 0.7 {
        "High chance of rain"
    } else {
        "Very likely to rain"
    }
}

fn precipitation_icon(probability: f64) -> &'static str {
    if probability < 0.1 {
        "☀️"
    } else if probability < 0.2 {
        "🌤️"
    } else if probability < 0.3 {
        "⛅"
    } else if probability < 0.5 {
        "🌥️"
    } else if probability < 0.7 {
        "🌦️"
    } else {
        "⛈️"
    }
}

/// Scores the representative weather condition on its provider code.
/// A missing condition is treated as clear sky.
fn weather_score(weather: Option<&WeatherCondition>) -> u32 {
    let code = weather.map_or(DEFAULT_CONDITION_CODE, |w| w.code);
    match code {
        200..=232 => 0,
        300..=321 => 20,
        500..=531 => 30,
        600..=622 => 40,
        701..=781 => 60,
        800 => 100,
        801..=804 => 80,
        _ => 50,
    }
}

fn weather_description(weather: Option<&WeatherCondition>) -> String {
    weather
        .map(|w| capitalize(&w.description))
        .unwrap_or_else(|| "Clear conditions".to_string())
}

fn weather_icon(weather: Option<&WeatherCondition>) -> &'static str {
    match weather.map(|w| w.code) {
        Some(200..=232) => "⛈️",
        Some(300..=321) => "🌦️",
        Some(500..=531) => "🌧️",
        Some(600..=622) => "❄️",
        Some(701..=781) => "🌫️",
        Some(800) => "☀️",
        Some(801..=804) => "☁️",
        _ => "🌤️",
    }
}

/// Scores the average relative humidity in percent
fn humidity_score(humidity: u8) -> u32 {
    if humidity < 30 {
        60
    } else if (40..=60).contains(&humidity) {
        100
    } else if humidity < 70 {
        80
    } else if humidity < 80 {
        60
    } else {
        40
    }
}

fn humidity_description(humidity: u8) -> &'static str {
    if humidity < 30 {
        "Very dry air"
    } else if (40..=60).contains(&humidity) {
        "Comfortable humidity"
    } else if humidity < 70 {
        "Moderate humidity"
    } else if humidity < 80 {
        "High humidity"
    } else {
        "Very high humidity"
    }
}

fn humidity_icon(humidity: u8) -> &'static str {
    if humidity < 30 {
        "🏜️"
    } else if (40..=60).contains(&humidity) {
        "🌤️"
    } else if humidity < 70 {
        "💧"
    } else if humidity < 80 {
        "💧💧"
    } else {
        "💧💧💧"
    }
}

fn overall_rating(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Excellent => "Perfect for cycling! 🚴🏻",
        Recommendation::Good      => "Great conditions for cycling! 🚴🏻",
        Recommendation::Moderate  => "Moderate conditions, be cautious! ⚠️",
        Recommendation::Poor      => "Challenging conditions! ‼️",
        Recommendation::Dangerous => "Dangerous conditions! 💀",
    }
}

/// Upper cases the first character of a text
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

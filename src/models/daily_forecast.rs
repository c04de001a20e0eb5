use std::fmt;
use std::fmt::Formatter;
use chrono::NaiveDate;
use serde::Serialize;
use crate::models::forecast::WeatherCondition;

/// Temperature summary for one day.
///
/// Both `day` and `night` hold the current temperature of the first sample of the day,
/// not any daily extreme.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct DailyTemperature {
    pub day: f64,
    pub min: f64,
    pub max: f64,
    pub night: f64,
}

/// One calendar day's aggregated weather summary
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub date_time: i64,
    pub temperature: DailyTemperature,
    pub weather: Option<WeatherCondition>,
    pub humidity: u8,
    pub wind_speed: f64,
    pub precipitation_probability: f64,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for DailyForecast {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let condition = self.weather
            .as_ref()
            .map_or("-".to_string(), |w| format!("{} ({})", w.category, w.code));

        write!(f, "{} -> temp {:>5.1}/{:>5.1} C, wind {:>4.1} m/s, rain {:>3.0}%, humidity {:>3}%, {}",
               self.date.format("%Y-%m-%d"),
               self.temperature.min, self.temperature.max,
               self.wind_speed,
               self.precipitation_probability * 100.0,
               self.humidity,
               condition)
    }
}

use std::collections::HashMap;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use log::{debug, warn};
use crate::models::daily_forecast::{DailyForecast, DailyTemperature};
use crate::models::forecast::{ForecastSample, WeatherCondition};

/// Max number of days returned from an aggregation
pub const MAX_DAYS: usize = 6;

/// Running totals for one calendar day while scanning the samples
struct DayAccumulator<'a> {
    date: NaiveDate,
    first: &'a ForecastSample,
    count: usize,
    max: f64,
    min: f64,
    humidity_sum: u64,
    wind_sum: f64,
    precipitation_sum: f64,
    categories: Vec<(&'a str, usize, &'a WeatherCondition)>,
}

impl<'a> DayAccumulator<'a> {
    fn new(date: NaiveDate, first: &'a ForecastSample) -> DayAccumulator<'a> {
        DayAccumulator {
            date,
            first,
            count: 0,
            max: f64::NEG_INFINITY,
            min: f64::INFINITY,
            humidity_sum: 0,
            wind_sum: 0.0,
            precipitation_sum: 0.0,
            categories: Vec::new(),
        }
    }

    fn add(&mut self, sample: &'a ForecastSample) {
        self.count += 1;
        self.max = self.max.max(sample.main.max);
        self.min = self.min.min(sample.main.min);
        self.humidity_sum += sample.main.humidity as u64;
        self.wind_sum += sample.wind.speed;
        self.precipitation_sum += sample.precipitation_probability;

        for condition in &sample.weather {
            match self.categories.iter_mut().find(|(c, _, _)| *c == condition.category) {
                Some(entry) => entry.1 += 1,
                None => self.categories.push((condition.category.as_str(), 1, condition)),
            }
        }
    }

    /// Returns the first condition seen of the most frequent category.
    /// On equal counts the category encountered first wins.
    fn most_common_condition(&self) -> Option<&'a WeatherCondition> {
        let mut best: Option<(usize, &'a WeatherCondition)> = None;
        for (_, count, condition) in &self.categories {
            if best.is_none_or(|(c, _)| *count > c) {
                best = Some((*count, *condition));
            }
        }

        best.map(|(_, condition)| condition)
    }

    fn finish(self) -> DailyForecast {
        let n = self.count as f64;
        let weather = self.most_common_condition()
            .or_else(|| self.first.weather.first())
            .cloned();

        DailyForecast {
            date: self.date,
            date_time: self.first.date_time,
            temperature: DailyTemperature {
                day: self.first.main.current,
                min: self.min,
                max: self.max,
                night: self.first.main.current,
            },
            weather,
            humidity: (self.humidity_sum as f64 / n) as u8,
            wind_speed: self.wind_sum / n,
            precipitation_probability: self.precipitation_sum / n,
        }
    }
}

/// Aggregates forecast samples into daily forecasts using the local timezone
/// to decide which calendar day a sample belongs to.
///
/// # Arguments
///
/// * 'samples' - forecast samples in chronological order
pub fn aggregate(samples: &[ForecastSample]) -> Vec<DailyForecast> {
    aggregate_in(samples, &Local)
}

/// Aggregates forecast samples into at most six daily forecasts.
///
/// Samples are grouped on their calendar date in the given timezone. Days are returned in
/// the order their first sample appears in the input, nothing is sorted or filtered. Samples
/// with a timestamp outside what chrono can represent are skipped.
///
/// # Arguments
///
/// * 'samples' - forecast samples in chronological order
/// * 'tz' - timezone used to derive the calendar date of each sample
pub fn aggregate_in<Tz: TimeZone>(samples: &[ForecastSample], tz: &Tz) -> Vec<DailyForecast> {
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut days: Vec<DayAccumulator> = Vec::new();

    for sample in samples {
        let Some(date) = calendar_date(sample.date_time, tz) else {
            warn!("skipping forecast sample with invalid timestamp {}", sample.date_time);
            continue;
        };

        let i = *index.entry(date).or_insert_with(|| {
            days.push(DayAccumulator::new(date, sample));
            days.len() - 1
        });
        days[i].add(sample);
    }

    debug!("aggregated {} forecast samples into {} days", samples.len(), days.len());

    days.into_iter()
        .take(MAX_DAYS)
        .map(|d| d.finish())
        .collect()
}

/// Returns the calendar date of an epoch timestamp in the given timezone
///
/// # Arguments
///
/// * 'timestamp' - seconds since the unix epoch
/// * 'tz' - timezone to express the date in
fn calendar_date<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.with_timezone(tz).date_naive())
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};
    use crate::models::forecast::{MainReadings, Wind};
    use super::*;

    // 2024-06-01T00:00:00Z
    const DAY_START: i64 = 1_717_200_000;
    const HOURS_3: i64 = 3 * 3600;

    fn condition(code: u32, category: &str, description: &str) -> WeatherCondition {
        WeatherCondition {
            code,
            category: category.to_string(),
            description: description.to_string(),
            icon: "01d".to_string(),
        }
    }

    fn sample(date_time: i64, temp: (f64, f64, f64), humidity: u8, wind: f64, pop: f64, weather: Vec<WeatherCondition>) -> ForecastSample {
        ForecastSample {
            date_time,
            main: MainReadings { current: temp.0, min: temp.1, max: temp.2, humidity },
            wind: Wind { speed: wind },
            precipitation_probability: pop,
            weather,
        }
    }

    fn clear(date_time: i64) -> ForecastSample {
        sample(date_time, (15.0, 14.0, 16.0), 50, 2.0, 0.0, vec![condition(800, "Clear", "clear sky")])
    }

    #[test]
    fn empty_input_gives_no_days() {
        assert!(aggregate_in(&[], &Utc).is_empty());
    }

    #[test]
    fn reduces_one_day() {
        let samples = vec![
            sample(DAY_START, (12.0, 11.0, 13.0), 41, 2.0, 0.1, vec![condition(800, "Clear", "clear sky")]),
            sample(DAY_START + HOURS_3, (18.0, 17.5, 21.0), 50, 4.0, 0.2, vec![condition(500, "Rain", "light rain")]),
            sample(DAY_START + 2 * HOURS_3, (16.0, 9.5, 17.0), 60, 6.0, 0.6, vec![condition(501, "Rain", "moderate rain")]),
        ];

        let days = aggregate_in(&samples, &Utc);
        assert_eq!(days.len(), 1);

        let day = &days[0];
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(day.date_time, DAY_START);
        assert_eq!(day.temperature.max, 21.0);
        assert_eq!(day.temperature.min, 9.5);
        assert_eq!(day.temperature.day, 12.0);
        assert_eq!(day.temperature.night, 12.0);
        assert_eq!(day.humidity, 50);
        assert!((day.wind_speed - 4.0).abs() < 1e-9);
        assert!((day.precipitation_probability - 0.3).abs() < 1e-9);

        let weather = day.weather.as_ref().unwrap();
        assert_eq!(weather.code, 500);
        assert_eq!(weather.description, "light rain");
    }

    #[test]
    fn humidity_mean_is_truncated() {
        let samples = vec![
            sample(DAY_START, (15.0, 14.0, 16.0), 50, 2.0, 0.0, vec![]),
            sample(DAY_START + HOURS_3, (15.0, 14.0, 16.0), 51, 2.0, 0.0, vec![]),
        ];

        assert_eq!(aggregate_in(&samples, &Utc)[0].humidity, 50);
    }

    #[test]
    fn humidity_sum_does_not_overflow() {
        let first = sample(DAY_START, (15.0, 14.0, 16.0), 100, 2.0, 0.0, vec![]);
        let mut acc = DayAccumulator::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), &first);
        acc.humidity_sum = u32::MAX as u64;
        acc.count = 42_949_672;
        acc.add(&first);

        assert_eq!(acc.humidity_sum, u32::MAX as u64 + 100);
        assert_eq!(acc.finish().humidity, 100);
    }

    #[test]
    fn category_tie_goes_to_first_seen() {
        let samples = vec![
            sample(DAY_START, (15.0, 14.0, 16.0), 50, 2.0, 0.0, vec![condition(803, "Clouds", "broken clouds")]),
            sample(DAY_START + HOURS_3, (15.0, 14.0, 16.0), 50, 2.0, 0.0, vec![condition(800, "Clear", "clear sky")]),
            sample(DAY_START + 2 * HOURS_3, (15.0, 14.0, 16.0), 50, 2.0, 0.0, vec![condition(800, "Clear", "clear sky")]),
            sample(DAY_START + 3 * HOURS_3, (15.0, 14.0, 16.0), 50, 2.0, 0.0, vec![condition(801, "Clouds", "few clouds")]),
        ];

        let weather = aggregate_in(&samples, &Utc)[0].weather.clone().unwrap();
        assert_eq!(weather.category, "Clouds");
        assert_eq!(weather.code, 803);
    }

    #[test]
    fn counts_every_listed_condition() {
        let samples = vec![
            sample(DAY_START, (15.0, 14.0, 16.0), 50, 2.0, 0.0, vec![condition(800, "Clear", "clear sky")]),
            sample(DAY_START + HOURS_3, (15.0, 14.0, 16.0), 50, 2.0, 0.0,
                   vec![condition(701, "Mist", "mist"), condition(721, "Haze", "haze"), condition(741, "Mist", "fog")]),
        ];

        let weather = aggregate_in(&samples, &Utc)[0].weather.clone().unwrap();
        assert_eq!(weather.category, "Mist");
        assert_eq!(weather.code, 701);
    }

    #[test]
    fn no_conditions_gives_none() {
        let samples = vec![sample(DAY_START, (15.0, 14.0, 16.0), 50, 2.0, 0.0, vec![])];

        assert!(aggregate_in(&samples, &Utc)[0].weather.is_none());
    }

    #[test]
    fn caps_at_six_days_in_input_order() {
        let samples = (0..8i64)
            .map(|d| clear(DAY_START + d * 86_400))
            .collect::<Vec<ForecastSample>>();

        let days = aggregate_in(&samples, &Utc);
        assert_eq!(days.len(), MAX_DAYS);
        for (d, day) in days.iter().enumerate() {
            assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 6, 1 + d as u32).unwrap());
        }
    }

    #[test]
    fn keeps_first_appearance_order() {
        let samples = vec![
            clear(DAY_START + 86_400),
            clear(DAY_START),
            clear(DAY_START + 86_400 + HOURS_3),
        ];

        let days = aggregate_in(&samples, &Utc);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn timezone_decides_the_day() {
        // 20:00Z is 23:00 at UTC+3, 22:00Z is already the next day there
        let samples = vec![clear(DAY_START + 20 * 3600), clear(DAY_START + 22 * 3600)];

        assert_eq!(aggregate_in(&samples, &Utc).len(), 1);

        let eest = FixedOffset::east_opt(3 * 3600).unwrap();
        let days = aggregate_in(&samples, &eest);
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    }

    #[test]
    fn skips_unrepresentable_timestamps() {
        let samples = vec![clear(i64::MAX), clear(DAY_START)];

        let days = aggregate_in(&samples, &Utc);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date_time, DAY_START);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let samples = vec![
            sample(DAY_START, (12.0, 11.0, 13.0), 41, 2.0, 0.1, vec![condition(800, "Clear", "clear sky")]),
            sample(DAY_START + HOURS_3, (18.0, 17.5, 21.0), 50, 4.0, 0.2, vec![condition(500, "Rain", "light rain")]),
            clear(DAY_START + 86_400),
        ];

        assert_eq!(aggregate_in(&samples, &Utc), aggregate_in(&samples, &Utc));
    }
}

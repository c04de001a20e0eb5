use std::fs;
use log::info;
use crate::errors::ForecastError;
use crate::models::forecast::{ForecastSample, FullForecast};

/// Reads a 5 day / 3 hour forecast document from file and returns its samples
///
/// # Arguments
///
/// * 'forecast_file' - path to a json document in the provider's forecast format
pub fn load_forecast(forecast_file: &str) -> Result<Vec<ForecastSample>, ForecastError> {
    let json = fs::read_to_string(forecast_file)?;
    let samples = parse_forecast(&json)?;
    info!("loaded {} forecast samples from {}", samples.len(), forecast_file);

    Ok(samples)
}

/// Parses a forecast document and returns its samples in document order
///
/// # Arguments
///
/// * 'json' - the forecast document
pub fn parse_forecast(json: &str) -> Result<Vec<ForecastSample>, ForecastError> {
    let forecast: FullForecast = serde_json::from_str(json)?;

    Ok(forecast.list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_document() {
        let json = r#"{
            "cod": "200",
            "list": [
                {
                    "dt": 1717286400,
                    "main": {"temp": 18.2, "feels_like": 17.9, "temp_min": 17.1, "temp_max": 19.4, "humidity": 55},
                    "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
                    "wind": {"speed": 3.4, "deg": 240},
                    "pop": 0.12
                },
                {
                    "dt": 1717297200,
                    "main": {"temp": 20.0, "temp_min": 19.0, "temp_max": 21.0, "humidity": 50},
                    "wind": {"speed": 2.1}
                }
            ]
        }"#;

        let samples = parse_forecast(json).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].date_time, 1_717_286_400);
        assert_eq!(samples[0].main.max, 19.4);
        assert_eq!(samples[0].main.humidity, 55);
        assert_eq!(samples[0].weather[0].code, 803);
        assert_eq!(samples[0].weather[0].category, "Clouds");
        assert_eq!(samples[0].weather[0].icon, "04d");
        assert_eq!(samples[0].precipitation_probability, 0.12);
        assert_eq!(samples[1].precipitation_probability, 0.0);
        assert!(samples[1].weather.is_empty());
    }

    #[test]
    fn rejects_broken_document() {
        assert!(matches!(parse_forecast("{\"list\": [{}]}"), Err(ForecastError::Document(_))));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(load_forecast("/nonexistent/forecast.json"), Err(ForecastError::File(_))));
    }
}

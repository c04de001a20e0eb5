use serde::{Deserialize, Serialize};

/// One weather phenomenon as classified by the forecast provider
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct WeatherCondition {
    #[serde(rename = "id")]
    pub code: u32,
    #[serde(rename = "main")]
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct MainReadings {
    #[serde(rename = "temp")]
    pub current: f64,
    #[serde(rename = "temp_min")]
    pub min: f64,
    #[serde(rename = "temp_max")]
    pub max: f64,
    pub humidity: u8,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Wind {
    pub speed: f64,
}

/// One 3-hour forecast slot
#[derive(Deserialize, Clone, Debug)]
pub struct ForecastSample {
    #[serde(rename = "dt")]
    pub date_time: i64,
    pub main: MainReadings,
    pub wind: Wind,
    #[serde(rename = "pop", default)]
    pub precipitation_probability: f64,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

#[derive(Deserialize, Debug)]
pub struct FullForecast {
    pub list: Vec<ForecastSample>,
}

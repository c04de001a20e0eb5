pub mod forecast;
pub mod daily_forecast;
pub mod bike_score;

/// Application configuration, parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenWeatherMap API key, shared by the geocoding and One Call endpoints.
    pub api_key: String,
    pub geocode_base_url: String,
    pub weather_base_url: String,
}

const DEFAULT_GEOCODE_BASE_URL: &str = "http://api.openweathermap.org/geo/1.0";
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/3.0";

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENWEATHER_API_KEY")
                .expect("OPENWEATHER_API_KEY must be set"),
            geocode_base_url: std::env::var("GEOCODE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEOCODE_BASE_URL.to_string()),
            weather_base_url: std::env::var("WEATHER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_BASE_URL.to_string()),
        }
    }
}

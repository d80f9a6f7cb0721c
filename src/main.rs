// Skycast — interactive city weather lookup over OpenWeatherMap.
use colored::Colorize;
use std::io::Write;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod display;
mod errors;
mod prompt;
mod services;

use config::AppConfig;
use display::{render_current, render_forecast};
use errors::AppError;
use prompt::Mode;
use services::cache::WeatherCache;
use services::geocode::GeocodeClient;
use services::weather::{Unit, WeatherClient};

/// Sentinel typed at the city prompt to end the session.
const EXIT_SENTINEL: &str = "exit";
/// Cosmetic progress indicator between resolution and fetch.
const PROGRESS_STEPS: u32 = 3;
const PROGRESS_STEP_MS: u64 = 500;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skycast=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let geocode_client = GeocodeClient::new(&config.geocode_base_url, &config.api_key);
    let weather_client = WeatherClient::new(&config.weather_base_url, &config.api_key);
    let mut cache = WeatherCache::new();

    loop {
        let city = match prompt::read_line(
            &"Enter the city name (or 'exit' to quit): ".cyan().to_string(),
        ) {
            Ok(city) => city,
            Err(_) => break,
        };
        if city.eq_ignore_ascii_case(EXIT_SENTINEL) {
            println!("Exiting program...");
            break;
        }

        let country = prompt::read_line("Enter the country code (optional, press Enter to skip): ")
            .unwrap_or_default();
        let country = if country.is_empty() {
            None
        } else {
            Some(country)
        };

        let unit_input = prompt::read_line(&"Choose temperature unit (C/F): ".cyan().to_string())
            .unwrap_or_default();
        let unit = match Unit::from_input(&unit_input) {
            Some(unit) => unit,
            None => {
                println!("{}", "Invalid choice! Defaulting to Celsius.".red());
                Unit::Celsius
            }
        };

        let mode_input = prompt::read_line(
            &"Do you want the current weather or a 5-day forecast? (curr/day): "
                .cyan()
                .to_string(),
        )
        .unwrap_or_default();
        let mode = match Mode::from_input(&mode_input) {
            Some(mode) => mode,
            None => {
                println!("{}", "Invalid choice! Defaulting to current weather.".red());
                Mode::Current
            }
        };

        // Any failure aborts this lookup only; the session continues.
        if let Err(e) = run_lookup(
            &geocode_client,
            &weather_client,
            &mut cache,
            &city,
            country.as_deref(),
            unit,
            mode,
        )
        .await
        {
            e.report();
        }
    }
}

/// One resolve → fetch → render pass for a single user request.
async fn run_lookup(
    geocode_client: &GeocodeClient,
    weather_client: &WeatherClient,
    cache: &mut WeatherCache,
    city: &str,
    country: Option<&str>,
    unit: Unit,
    mode: Mode,
) -> Result<(), AppError> {
    let candidates = geocode_client.fetch_candidates(city, country).await?;
    let place = prompt::choose_location(city, &candidates)?;
    tracing::debug!("Resolved {} to ({}, {})", city, place.lat, place.lon);

    print!("{}", "Fetching weather data".magenta());
    for _ in 0..PROGRESS_STEPS {
        print!(".");
        std::io::stdout().flush().ok();
        tokio::time::sleep(Duration::from_millis(PROGRESS_STEP_MS)).await;
    }
    println!();

    let (report, from_cache) = weather_client
        .fetch(place.lat, place.lon, unit, cache)
        .await?;
    if from_cache {
        println!("{}", "Returning cached data.".green());
    }

    let rendered = match mode {
        Mode::Current => render_current(&report, unit)?,
        Mode::Forecast => render_forecast(&report, unit)?,
    };
    print!("{}", rendered);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Full lookup flow against a mocked OpenWeatherMap: a single London
    /// candidate resolves without a disambiguation prompt, the One Call
    /// response is fetched in metric units, and the current view carries the
    /// °C suffix and the icon for the returned condition.
    #[tokio::test]
    async fn test_london_lookup_end_to_end() {
        colored::control::set_override(false);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/direct"))
            .and(query_param("q", "London"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "name": "London", "lat": 51.51, "lon": -0.13, "country": "GB" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/onecall"))
            .and(query_param("lat", "51.51"))
            .and(query_param("lon", "-0.13"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current": {
                    "temp": 9.8,
                    "feels_like": 7.2,
                    "humidity": 86,
                    "wind_speed": 5.1,
                    "weather": [
                        { "main": "Drizzle", "description": "light intensity drizzle" }
                    ]
                },
                "daily": []
            })))
            .mount(&server)
            .await;

        let geocode_client = GeocodeClient::new(&server.uri(), "test-key");
        let weather_client = WeatherClient::new(&server.uri(), "test-key");
        let mut cache = WeatherCache::new();

        let candidates = geocode_client.fetch_candidates("London", None).await.unwrap();
        // One candidate — selected automatically, no prompt
        let place = tokio_test::assert_ok!(prompt::choose_location("London", &candidates));
        assert_eq!((place.lat, place.lon), (51.51, -0.13));

        let (report, from_cache) = weather_client
            .fetch(place.lat, place.lon, Unit::Celsius, &mut cache)
            .await
            .unwrap();
        assert!(!from_cache);

        let out = render_current(&report, Unit::Celsius).unwrap();
        assert!(out.contains("Temperature: 9.8°C"));
        assert!(out.contains("🌦️"));
        assert!(out.contains("Drizzle (light intensity drizzle)"));
    }

    /// An unrecognized condition string falls back to the globe icon.
    #[tokio::test]
    async fn test_unrecognized_condition_renders_globe() {
        colored::control::set_override(false);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/onecall"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current": {
                    "temp": 30.1,
                    "feels_like": 33.0,
                    "humidity": 20,
                    "wind_speed": 9.0,
                    "weather": [
                        { "main": "Sandstorm", "description": "blowing sand" }
                    ]
                },
                "daily": []
            })))
            .mount(&server)
            .await;

        let weather_client = WeatherClient::new(&server.uri(), "test-key");
        let mut cache = WeatherCache::new();

        let (report, _) = weather_client
            .fetch(24.47, 54.37, Unit::Celsius, &mut cache)
            .await
            .unwrap();
        let out = render_current(&report, Unit::Celsius).unwrap();

        assert!(out.contains("🌍"));
    }
}

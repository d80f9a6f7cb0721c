//! Console presenters for weather reports.
//!
//! Pure projections from a `WeatherReport` to colorized text; the driver
//! prints whatever these return. Condition names map to a fixed icon table,
//! with a globe for anything unrecognized.

use chrono::DateTime;
use colored::Colorize;

use crate::errors::AppError;
use crate::services::weather::{Condition, Unit, WeatherReport};

/// Number of daily entries shown in forecast mode.
pub const FORECAST_DAYS: usize = 5;

/// Icon for a One Call condition group. Unrecognized conditions get a globe.
pub fn condition_icon(main: &str) -> &'static str {
    match main {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Snow" => "❄️",
        "Mist" => "🌫️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        _ => "🌍",
    }
}

fn primary_condition<'a>(
    conditions: &'a [Condition],
    section: &str,
) -> Result<&'a Condition, AppError> {
    conditions
        .first()
        .ok_or_else(|| AppError::MalformedData(format!("no weather condition in {}", section)))
}

/// Render the current-conditions view.
pub fn render_current(report: &WeatherReport, unit: Unit) -> Result<String, AppError> {
    let current = &report.current;
    let condition = primary_condition(&current.weather, "current conditions")?;
    let icon = condition_icon(&condition.main);
    let suffix = unit.suffix();

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("Temperature: {}{} {}", current.temp, suffix, icon)
            .yellow()
            .bold()
    ));
    out.push_str(&format!(
        "{}\n",
        format!("Feels like: {}{}", current.feels_like, suffix)
            .yellow()
            .bold()
    ));
    out.push_str(&format!(
        "{}\n",
        format!("Humidity: {}%", current.humidity).cyan()
    ));
    out.push_str(&format!(
        "{}\n",
        format!("Wind Speed: {} m/s", current.wind_speed).cyan()
    ));
    out.push_str(&format!(
        "{}\n",
        format!("Weather: {} {} ({})", icon, condition.main, condition.description)
            .blue()
            .bold()
    ));

    Ok(out)
}

/// Render the 5-day forecast view.
///
/// A payload with fewer than 5 daily entries is malformed; the lookup is
/// aborted with an error instead of truncating the view.
pub fn render_forecast(report: &WeatherReport, unit: Unit) -> Result<String, AppError> {
    if report.daily.len() < FORECAST_DAYS {
        return Err(AppError::MalformedData(format!(
            "forecast has {} daily entries, expected at least {}",
            report.daily.len(),
            FORECAST_DAYS
        )));
    }

    let suffix = unit.suffix();
    let mut out = String::new();
    out.push_str(&format!("{}\n", "\n5-Day Weather Forecast:".cyan()));

    for day in &report.daily[..FORECAST_DAYS] {
        let date = DateTime::from_timestamp(day.dt, 0)
            .ok_or_else(|| {
                AppError::MalformedData(format!("invalid forecast timestamp {}", day.dt))
            })?
            .format("%Y-%m-%d");
        let condition = primary_condition(&day.weather, "daily forecast")?;
        let icon = condition_icon(&condition.main);

        out.push_str(&format!("{}\n", format!("\nDate: {}", date).yellow()));
        out.push_str(&format!(
            "{}\n",
            format!(
                "Temperature: Day {}{}, Min {}{}, Max {}{} {}",
                day.temp.day, suffix, day.temp.min, suffix, day.temp.max, suffix, icon
            )
            .yellow()
            .bold()
        ));
        out.push_str(&format!(
            "{}\n",
            format!("Weather: {} {} ({})", icon, condition.main, condition.description)
                .blue()
                .bold()
        ));
    }

    Ok(out)
}

use colored::Colorize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("No results found for {0}")]
    NoResults(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Malformed weather data: {0}")]
    MalformedData(String),
}

impl AppError {
    /// Report this error to the console as the interactive loop does: a red
    /// one-liner. The loop continues to the next prompt afterwards.
    pub fn report(&self) {
        println!("{}", self.to_string().red());
    }
}

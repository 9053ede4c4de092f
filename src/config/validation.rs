use crate::config::CrawlConfig;
use crate::ConfigError;

/// Upper bound on the run-time budget, in seconds (one year)
///
/// `Duration::from_secs_f64` panics on values it cannot represent, so the
/// budget must be rejected here rather than deep inside the engine.
const MAX_RUN_SECONDS_CEILING: f64 = 31_536_000.0;

/// Validates a run configuration
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_seed_url(config)?;
    validate_search_string(config)?;
    validate_output_path(config)?;
    validate_run_time(config)?;
    Ok(())
}

/// Validates the seed URL scheme
fn validate_seed_url(config: &CrawlConfig) -> Result<(), ConfigError> {
    match config.seed_url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Validation(format!(
            "seed URL must use http or https, got '{}'",
            other
        ))),
    }
}

/// Validates the search string
fn validate_search_string(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.search_string.is_empty() {
        return Err(ConfigError::Validation(
            "search string cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates the output path
fn validate_output_path(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.output_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates the run-time budget
///
/// Zero is accepted: the budget check runs before the first fetch, so a zero
/// budget simply times the run out immediately.
fn validate_run_time(config: &CrawlConfig) -> Result<(), ConfigError> {
    let seconds = config.max_run_seconds;

    if !seconds.is_finite() {
        return Err(ConfigError::Validation(format!(
            "run time must be a finite number of seconds, got {}",
            seconds
        )));
    }

    if seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "run time cannot be negative, got {}",
            seconds
        )));
    }

    if seconds > MAX_RUN_SECONDS_CEILING {
        return Err(ConfigError::Validation(format!(
            "run time must be at most {} seconds, got {}",
            MAX_RUN_SECONDS_CEILING, seconds
        )));
    }

    Ok(())
}

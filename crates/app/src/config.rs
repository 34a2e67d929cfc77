//! CLI configuration groups

use clap::{Args, ValueEnum};
use rusty_money::iso::{self, Currency};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
}

/// Money display settings.
#[derive(Debug, Args)]
pub struct DisplayConfig {
    /// ISO 4217 currency that stored minor units are shown in
    #[arg(
        long,
        env = "CARTKEEP_CURRENCY",
        default_value = "USD",
        value_parser = parse_currency,
        global = true
    )]
    pub currency: &'static Currency,
}

/// Resolve an ISO 4217 code, case-insensitively.
///
/// # Errors
///
/// Returns an error naming the code when it is not a known currency.
pub fn parse_currency(code: &str) -> Result<&'static Currency, String> {
    iso::find(&code.trim().to_ascii_uppercase())
        .ok_or_else(|| format!("unknown currency code: {code}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_codes_are_case_insensitive() {
        assert_eq!(parse_currency("gbp"), Ok(iso::GBP));
        assert_eq!(parse_currency(" USD "), Ok(iso::USD));
    }

    #[test]
    fn unknown_currency_is_rejected() {
        assert_eq!(
            parse_currency("XYZ"),
            Err("unknown currency code: XYZ".to_string())
        );
    }
}

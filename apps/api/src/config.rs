use anyhow::{Context, Result};

use crate::layout::DEFAULT_MARGIN_MM;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a request body, enforced before JSON parsing.
    pub max_body_bytes: usize,
    /// Applied to all four margins of the A4 page.
    pub page_margin_mm: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_body_bytes: 64 * 1024,
            page_margin_mm: DEFAULT_MARGIN_MM,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_body_bytes: parse_env("MAX_BODY_BYTES", defaults.max_body_bytes)
                .context("MAX_BODY_BYTES must be a byte count")?,
            page_margin_mm: parse_page_margin(parse_env(
                "PAGE_MARGIN_MM",
                defaults.page_margin_mm,
            )?)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Margins must leave room for text on an A4 page (210mm wide).
fn parse_page_margin(margin_mm: f32) -> Result<f32> {
    if !(0.0..100.0).contains(&margin_mm) {
        anyhow::bail!("PAGE_MARGIN_MM must be between 0 and 100, got {margin_mm}");
    }
    Ok(margin_mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_body_bytes, 65536);
        assert_eq!(config.page_margin_mm, 20.0);
    }

    #[test]
    fn test_page_margin_bounds() {
        assert!(parse_page_margin(20.0).is_ok());
        assert!(parse_page_margin(0.0).is_ok());
        assert!(parse_page_margin(-1.0).is_err());
        assert!(parse_page_margin(105.0).is_err());
        assert!(parse_page_margin(f32::NAN).is_err());
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        let value: u16 = parse_env("PROCURACAO_TEST_UNSET_VARIABLE", 4321).unwrap();
        assert_eq!(value, 4321);
    }
}

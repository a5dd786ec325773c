use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Rate limit student creation per peer IP
    pub rate_limit_enabled: bool,
    /// Seconds before a peer regains one student creation from its quota
    pub rate_limit_replenish_secs: u64,
    /// Creations a peer may make back to back before replenishment kicks in
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rate_limit_enabled: true,
            rate_limit_replenish_secs: 2,
            rate_limit_burst: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            port: parse_or("PORT", env::var("PORT").ok(), defaults.port),
            rate_limit_enabled: parse_or(
                "RATE_LIMIT_ENABLED",
                env::var("RATE_LIMIT_ENABLED").ok(),
                defaults.rate_limit_enabled,
            ),
            rate_limit_replenish_secs: parse_or(
                "RATE_LIMIT_REPLENISH_SECONDS",
                env::var("RATE_LIMIT_REPLENISH_SECONDS").ok(),
                defaults.rate_limit_replenish_secs,
            ),
            rate_limit_burst: parse_or(
                "RATE_LIMIT_BURST",
                env::var("RATE_LIMIT_BURST").ok(),
                defaults.rate_limit_burst,
            ),
        }
    }

    /// Config for tests: no rate limiting, since test requests carry no peer address
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            rate_limit_enabled: false,
            ..Self::default()
        }
    }
}

/// Parse an optional raw value, falling back to `default` when unset or invalid
fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(var = name, value = %raw, "Invalid config value, using default");
                default
            }
        },
    }
}

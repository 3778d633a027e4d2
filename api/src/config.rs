use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";
const DEFAULT_PORT: u16 = 5555;

#[derive(Debug, Clone)]
pub struct Config {
    /// SeaORM connection string; `sqlite://` and `postgres://` are supported
    pub database_url: String,
    pub port: u16,
    /// Insert the demo catalogue on start if the store is empty
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .or_else(|_| env::var("DB_URI"))
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            port: parse_port(env::var("PORT").ok().as_deref()),
            seed_demo_data: parse_flag(env::var("SEED_DEMO_DATA").ok().as_deref()),
        }
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    match value {
        None => DEFAULT_PORT,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
            DEFAULT_PORT
        }),
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("1" | "true" | "yes")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_5555() {
        assert_eq!(parse_port(None), 5555);
    }

    #[test]
    fn port_parses_valid_values() {
        assert_eq!(parse_port(Some("8080")), 8080);
        assert_eq!(parse_port(Some(" 3000 ")), 3000);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        assert_eq!(parse_port(Some("not-a-port")), 5555);
        assert_eq!(parse_port(Some("70000")), 5555);
    }

    #[test]
    fn flag_accepts_truthy_values() {
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("yes")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(Some("no")));
        assert!(!parse_flag(None));
    }
}

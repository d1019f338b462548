use taramind_core::locale::LocaleConfig;

use crate::auth::jwt::JwtConfig;
use crate::mailer::MailerConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development,
/// except the secrets (`JWT_SECRET`, `DATABASE_URL`, S3 settings) whose
/// absence is fatal at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Supported locales and the fallback default.
    pub locale: LocaleConfig,
    /// Outbound email configuration.
    pub mailer: MailerConfig,
    /// Upstream dictionary service, queried as `{base}/{word}`.
    pub dictionary_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `SUPPORTED_LOCALES`     | `en,vi`                 |
    /// | `DEFAULT_LOCALE`        | `en`                    |
    /// | `DICTIONARY_BASE_URL`   | `http://tratu.soha.vn/dict/vn_vn` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let supported: Vec<String> = std::env::var("SUPPORTED_LOCALES")
            .unwrap_or_else(|_| "en,vi".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let default_locale = std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".into());
        assert!(
            supported.iter().any(|l| l == &default_locale),
            "DEFAULT_LOCALE must be one of SUPPORTED_LOCALES"
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt: JwtConfig::from_env(),
            locale: LocaleConfig {
                supported,
                default_locale,
            },
            mailer: MailerConfig::from_env(),
            dictionary_base_url: std::env::var("DICTIONARY_BASE_URL")
                .unwrap_or_else(|_| "http://tratu.soha.vn/dict/vn_vn".into())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

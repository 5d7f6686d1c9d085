/// Configuration management for the RankPot API service
///
/// Settings come from environment variables (optionally seeded from a `.env`
/// file by `main`). Names are case-insensitive and unknown variables are
/// ignored.
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("Insecure configuration: {0}")]
    Insecure(String),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub jwt: JwtConfig,
    pub external: ExternalApiConfig,
    pub email: EmailConfig,
}

/// Application settings
#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub name: String,
    /// Application environment (development, staging, production)
    pub env: String,
    pub debug: bool,
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Normalized tracing level: trace, debug, info, warn or error
    pub level: String,
    pub format: LogFormat,
    /// Mirrors `AppConfig::debug`; turns on actix-web debug logs
    pub debug: bool,
}

impl LoggingConfig {
    /// Directive used when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> String {
        if self.debug {
            format!("{},actix_web=debug", self.level)
        } else {
            self.level.clone()
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Database configuration
#[derive(Debug, Clone, Validate)]
pub struct DatabaseConfig {
    pub url: String,
    #[validate(range(min = 1))]
    pub pool_size: u32,
    pub max_overflow: u32,
}

/// Cache (Redis) configuration
#[derive(Debug, Clone, Validate)]
pub struct CacheConfig {
    pub url: String,
    #[validate(range(min = 1))]
    pub ttl_secs: u64,
}

/// JWT settings
#[derive(Clone, Validate)]
pub struct JwtConfig {
    #[validate(length(min = 1))]
    pub secret: String,
    pub algorithm: String,
    #[validate(range(min = 1, max = 720))]
    pub expiration_hours: u32,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

/// Third-party content and AI APIs
#[derive(Clone)]
pub struct ExternalApiConfig {
    pub rapidapi_key: String,
    pub rapidapi_tiktok_host: String,
    pub rapidapi_instagram_host: String,
    pub openai_api_key: String,
}

impl std::fmt::Debug for ExternalApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalApiConfig")
            .field("rapidapi_key_set", &!self.rapidapi_key.is_empty())
            .field("rapidapi_tiktok_host", &self.rapidapi_tiktok_host)
            .field("rapidapi_instagram_host", &self.rapidapi_instagram_host)
            .field("openai_api_key_set", &!self.openai_api_key.is_empty())
            .finish()
    }
}

/// SMTP settings for password-reset mail
#[derive(Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_password: String,
    pub from: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("from", &self.from)
            .finish()
    }
}

/// Flat view of the environment, one field per variable
#[derive(Deserialize)]
struct EnvSettings {
    #[serde(default = "default_app_name")]
    app_name: String,
    #[serde(default = "default_app_env")]
    app_env: String,
    #[serde(default = "default_debug")]
    debug: String,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_log_format")]
    log_format: String,
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    #[serde(default = "default_database_url")]
    database_url: String,
    #[serde(default = "default_database_pool_size")]
    database_pool_size: u32,
    #[serde(default = "default_database_max_overflow")]
    database_max_overflow: u32,

    #[serde(default = "default_redis_url")]
    redis_url: String,
    #[serde(default = "default_cache_ttl_seconds")]
    cache_ttl_seconds: u64,

    #[serde(default = "default_jwt_secret")]
    jwt_secret: String,
    #[serde(default = "default_jwt_algorithm")]
    jwt_algorithm: String,
    #[serde(default = "default_jwt_expiration_hours")]
    jwt_expiration_hours: u32,

    #[serde(default)]
    rapidapi_key: String,
    #[serde(default = "default_rapidapi_tiktok_host")]
    rapidapi_tiktok_host: String,
    #[serde(default = "default_rapidapi_instagram_host")]
    rapidapi_instagram_host: String,
    #[serde(default)]
    openai_api_key: String,

    #[serde(default = "default_cors_origins")]
    cors_origins: Vec<String>,

    #[serde(default)]
    smtp_host: String,
    #[serde(default = "default_smtp_port")]
    smtp_port: u16,
    #[serde(default)]
    smtp_user: String,
    #[serde(default)]
    smtp_password: String,
    #[serde(default = "default_email_from")]
    email_from: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of `(name, value)` pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: EnvSettings = envy::from_iter(vars)?;
        let debug = parse_flag("DEBUG", &raw.debug)?;

        let config = Config {
            app: AppConfig {
                name: raw.app_name,
                env: raw.app_env,
                debug,
                host: raw.host,
                port: raw.port,
            },
            logging: LoggingConfig {
                level: normalize_log_level(&raw.log_level)?,
                format: parse_log_format(&raw.log_format)?,
                debug,
            },
            cors: CorsConfig {
                allowed_origins: raw
                    .cors_origins
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
            database: DatabaseConfig {
                url: raw.database_url,
                pool_size: raw.database_pool_size,
                max_overflow: raw.database_max_overflow,
            },
            cache: CacheConfig {
                url: raw.redis_url,
                ttl_secs: raw.cache_ttl_seconds,
            },
            jwt: JwtConfig {
                secret: raw.jwt_secret,
                algorithm: raw.jwt_algorithm,
                expiration_hours: raw.jwt_expiration_hours,
            },
            external: ExternalApiConfig {
                rapidapi_key: raw.rapidapi_key,
                rapidapi_tiktok_host: raw.rapidapi_tiktok_host,
                rapidapi_instagram_host: raw.rapidapi_instagram_host,
                openai_api_key: raw.openai_api_key,
            },
            email: EmailConfig {
                smtp_host: raw.smtp_host,
                smtp_port: raw.smtp_port,
                smtp_user: raw.smtp_user,
                smtp_password: raw.smtp_password,
                from: raw.email_from,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.database.validate()?;
        self.cache.validate()?;
        self.jwt.validate()?;

        if self.app.is_production() {
            if self.jwt.secret == DEFAULT_JWT_SECRET {
                return Err(ConfigError::Insecure(
                    "JWT_SECRET must be set to a non-default value in production".to_string(),
                ));
            }
            if self.cors.allows_any_origin() {
                return Err(ConfigError::Insecure(
                    "CORS_ORIGINS cannot contain '*' in production".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> (String, u16) {
        (self.app.host.clone(), self.app.port)
    }
}

fn normalize_log_level(raw: &str) -> Result<String, ConfigError> {
    let level = match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => {
            return Err(ConfigError::Invalid {
                key: "LOG_LEVEL",
                value: raw.to_string(),
            })
        }
    };
    Ok(level.to_string())
}

fn parse_log_format(raw: &str) -> Result<LogFormat, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::Invalid {
            key: "LOG_FORMAT",
            value: raw.to_string(),
        }),
    }
}

/// Boolean switches accept the usual spellings: 1/0, true/false, yes/no, on/off
fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
        }),
    }
}

fn default_app_name() -> String {
    "RankPot API".to_string()
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_debug() -> String {
    "false".to_string()
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "postgresql://localhost:5432/rankpot".to_string()
}

fn default_database_pool_size() -> u32 {
    5
}

fn default_database_max_overflow() -> u32 {
    10
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_cache_ttl_seconds() -> u64 {
    3600 // 1 hour
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_jwt_expiration_hours() -> u32 {
    24
}

fn default_rapidapi_tiktok_host() -> String {
    "tiktok-scraper7.p.rapidapi.com".to_string()
}

fn default_rapidapi_instagram_host() -> String {
    "instagram-scraper-api2.p.rapidapi.com".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
    ]
}

fn default_smtp_port() -> u16 {
    587
}

fn default_email_from() -> String {
    "noreply@rankpot.com".to_string()
}

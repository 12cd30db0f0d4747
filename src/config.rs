/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, CORS 許可, 必須スコープ, principal ヘッダ名, HTTP 上限)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderName;
use thiserror::Error;

pub const DEFAULT_REQUIRED_SCOPE: &str = "Greeting.Read";
pub const DEFAULT_PRINCIPAL_HEADER: &str = "x-ms-client-principal";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub required_scopes: Vec<String>,
    pub principal_header: HeaderName,

    // GET /api/greeting はボディを取らないので上限は小さく
    pub body_limit_bytes: usize,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (process env in production, a map in tests).
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = lookup("APP_ENV")
            .map(|raw| AppEnv::parse(&raw))
            .unwrap_or(AppEnv::Development);

        let cors_allowed_origins = split_list(&lookup("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        // 未設定ならデフォルト、設定されていて空なら誤設定として扱う
        let required_scopes = match lookup("REQUIRED_SCOPES") {
            Some(raw) => {
                let scopes = split_list(&raw);
                if scopes.is_empty() {
                    return Err(ConfigError::Invalid("REQUIRED_SCOPES"));
                }
                scopes
            }
            None => vec![DEFAULT_REQUIRED_SCOPE.to_string()],
        };

        let principal_header =
            lookup("PRINCIPAL_HEADER").unwrap_or_else(|| DEFAULT_PRINCIPAL_HEADER.to_string());
        let principal_header = HeaderName::from_str(principal_header.trim())
            .map_err(|_| ConfigError::Invalid("PRINCIPAL_HEADER"))?;

        let body_limit_bytes = match lookup("BODY_LIMIT_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("BODY_LIMIT_BYTES"))?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS")),
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            required_scopes,
            principal_header,
            body_limit_bytes,
            request_timeout,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            required_scopes: vec![DEFAULT_REQUIRED_SCOPE.to_string()],
            principal_header: HeaderName::from_static(DEFAULT_PRINCIPAL_HEADER),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

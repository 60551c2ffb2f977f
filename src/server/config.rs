use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PAYMENT_API_URL: &str = "https://api.tosspayments.com";
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

/// Credentials of the administrator account ensured at startup.
pub struct AdminAccount {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,

    pub payment_secret_key: String,
    pub payment_api_url: String,

    pub server_addr: SocketAddr,

    /// Set when both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are present.
    pub admin: Option<AdminAccount>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let server_addr = std::env::var("SERVER_ADDR")
            .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "SERVER_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let admin = match (
            std::env::var("ADMIN_EMAIL").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        ) {
            (Some(email), Some(password)) => Some(AdminAccount { email, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_EMAIL".to_string()).into())
            }
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            payment_secret_key: std::env::var("PAYMENT_SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("PAYMENT_SECRET_KEY".to_string()))?,
            payment_api_url: std::env::var("PAYMENT_API_URL")
                .unwrap_or_else(|_| DEFAULT_PAYMENT_API_URL.to_string()),
            server_addr,
            admin,
        })
    }
}

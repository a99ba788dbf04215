use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Directory served as the fallback for non-API paths (the browser frontend).
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
        })
    }

    /// `host:port` pair the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

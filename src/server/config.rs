use crate::server::error::config::ConfigError;

/// Port the API listens on when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from environment variables
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present & valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `JWT_SECRET` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `JWT_SECRET` is empty or `PORT` is not a valid port
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = required_var("JWT_SECRET")?;
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "JWT_SECRET".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let port = match std::env::var("PORT") {
            Ok(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            jwt_secret,
            port,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

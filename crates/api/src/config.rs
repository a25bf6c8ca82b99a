use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8001`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Per-client request quota over a trailing 60-second window
    /// (default: `100`).
    pub rate_limit_per_minute: usize,
    /// JWT verification configuration (shared secret with the auth service).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default   |
    /// |-------------------------|-----------|
    /// | `HOST`                  | `0.0.0.0` |
    /// | `PORT`                  | `8001`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`      |
    /// | `RATE_LIMIT_PER_MINUTE` | `100`     |
    ///
    /// # Panics
    ///
    /// Panics if a variable is present but unparseable, or if `JWT_SECRET`
    /// is missing -- misconfiguration should fail at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let rate_limit_per_minute: usize = std::env::var("RATE_LIMIT_PER_MINUTE")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("RATE_LIMIT_PER_MINUTE must be a valid usize");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            request_timeout_secs,
            rate_limit_per_minute,
            jwt,
        }
    }
}

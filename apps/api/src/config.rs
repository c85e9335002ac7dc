use anyhow::{bail, Context, Result};

const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on an uploaded PDF, in bytes.
    pub max_file_size: usize,
    pub environment: Environment,
    /// The only CORS origin accepted in production.
    pub frontend_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let environment = match lookup("APP_ENV").as_deref() {
            None | Some("development") => Environment::Development,
            Some("production") => Environment::Production,
            Some(other) => bail!("APP_ENV must be 'development' or 'production', got '{other}'"),
        };

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_file_size: match lookup("MAX_FILE_SIZE") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_FILE_SIZE must be a number of bytes")?,
                None => DEFAULT_MAX_FILE_SIZE,
            },
            environment,
            frontend_url: lookup("FRONTEND_URL").filter(|url| !url.trim().is_empty()),
        })
    }

    /// Config for tests: defaults plus the given upload limit.
    #[cfg(test)]
    pub fn for_tests(max_file_size: usize) -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            max_file_size,
            environment: Environment::Development,
            frontend_url: None,
        }
    }
}

use crate::error::{Error, Result};
use dotenvy::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database: DatabaseConfig,
    pub llm: LlmConfig,
    pub fetch_timeout: Duration,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub timeout: Duration,
    pub question_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let database = DatabaseConfig {
            url: vars.optional("DATABASE_URL"),
            host: vars.or("DB_HOST", "127.0.0.1"),
            port: vars.parse_or("DB_PORT", 5432)?,
            user: vars.or("DB_USER", "postgres"),
            password: vars.optional("DB_PASSWORD"),
            name: vars.or("DB_NAME", "wiki_quiz"),
            max_connections: vars.parse_or("DB_MAX_CONNECTIONS", 10)?,
        };
        if database.url.is_none() && database.password.is_none() {
            return Err(Error::Config(
                "Missing environment variable: DB_PASSWORD (or DATABASE_URL)".to_string(),
            ));
        }

        let llm = LlmConfig {
            api_key: vars.required("GROQ_API_KEY")?,
            base_url: vars
                .or("LLM_BASE_URL", "https://api.groq.com/openai/v1")
                .trim_end_matches('/')
                .to_string(),
            model: vars.or("LLM_MODEL", "llama-3.3-70b-versatile"),
            temperature: vars.parse_or("LLM_TEMPERATURE", 0.1)?,
            timeout: Duration::from_secs(vars.parse_or("LLM_TIMEOUT_SECS", 120)?),
            question_count: vars.parse_or("QUIZ_QUESTION_COUNT", 7)?,
        };
        if llm.question_count == 0 {
            return Err(Error::Config(
                "Invalid value for QUIZ_QUESTION_COUNT: must be at least 1".to_string(),
            ));
        }

        let log_format = match vars.or("LOG_FORMAT", "text").to_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(Error::Config(format!(
                    "Invalid value for LOG_FORMAT: {}",
                    other
                )))
            }
        };

        Ok(Self {
            server_address: vars.or("SERVER_ADDRESS", "127.0.0.1:8000"),
            database,
            llm,
            fetch_timeout: Duration::from_secs(vars.parse_or("FETCH_TIMEOUT_SECS", 10)?),
            log_format,
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return url
                .parse()
                .map_err(|e| Error::Config(format!("Invalid value for DATABASE_URL: {}", e)));
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String> {
        self.optional(name)
            .ok_or_else(|| Error::Config(format!("Missing environment variable: {}", name)))
    }

    fn or(&self, name: &str, default: &str) -> String {
        self.optional(name).unwrap_or_else(|| default.to_string())
    }

    fn parse_or<T>(&self, name: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(name) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
            None => Ok(default),
        }
    }
}

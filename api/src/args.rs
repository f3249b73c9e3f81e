use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use morsel_core::domain::common::{DatabaseConfig, LLMConfig, MorselConfig, SuggestionConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "morsel-api", version, about = "Morsel HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub suggestion: SuggestionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "morsel")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "morsel")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "morsel")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// Without a key, chain suggestions come from the rule table only.
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SuggestionArgs {
    #[arg(
        long = "suggestion-timeout-ms",
        env = "SUGGESTION_TIMEOUT_MS",
        default_value_t = 8000
    )]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for MorselConfig {
    fn from(args: Args) -> Self {
        let llm = args
            .llm
            .gemini_api_key
            .filter(|key| !key.trim().is_empty())
            .map(|gemini_api_key| LLMConfig {
                gemini_api_key,
                gemini_model: args.llm.gemini_model.clone(),
            });

        MorselConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.user,
                password: args.database.password,
                name: args.database.name,
            },
            llm,
            suggestion: SuggestionConfig {
                backend_timeout: Duration::from_millis(args.suggestion.timeout_ms),
            },
        }
    }
}

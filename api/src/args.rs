use clap::{Args as ClapArgs, Parser};
use ferrischef_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_IMAGE_MODEL, DEFAULT_GEMINI_MODEL, FerrisChefConfig,
    LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ferrischef", version, about = "FerrisChef recipe assistant API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
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
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(
        long = "gemini-image-model",
        env = "GEMINI_IMAGE_MODEL",
        default_value = DEFAULT_GEMINI_IMAGE_MODEL
    )]
    pub gemini_image_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for FerrisChefConfig {
    fn from(args: Args) -> Self {
        FerrisChefConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_image_model: args.llm.gemini_image_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::parse_from(["ferrischef", "--gemini-api-key", "secret"]);
        let config = FerrisChefConfig::from(args.clone());

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "");
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.llm.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.llm.gemini_image_model, DEFAULT_GEMINI_IMAGE_MODEL);
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::parse_from([
            "ferrischef",
            "--gemini-api-key",
            "secret",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
    }
}

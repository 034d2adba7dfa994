// Configuration loader
// Loads the API key from ~/.tudonum/config.toml or the environment

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use super::settings::Config;

/// Load configuration from the Tudo Num config file or environment.
///
/// Precedence: `~/.tudonum/config.toml`, then the `OPENAI_API_KEY`
/// environment variable with built-in defaults for everything else.
pub fn load_config() -> Result<Config> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".tudonum/config.toml");

    if config_path.exists() {
        return load_from_file(&config_path);
    }

    if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
        if !api_key.is_empty() {
            return Ok(Config::new(api_key));
        }
    }

    bail!(
        "No configuration found.\n\n\
        Either create ~/.tudonum/config.toml:\n\n\
        [openai]\n\
        api_key = \"sk-...\"\n\n\
        or set the environment variable:\n\
        export OPENAI_API_KEY=\"sk-...\""
    )
}

fn load_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn parse_config(contents: &str) -> Result<Config> {
    #[derive(serde::Deserialize, Default)]
    struct TomlConfig {
        #[serde(default)]
        openai: OpenAiSection,
        #[serde(default)]
        server: ServerSection,
    }

    #[derive(serde::Deserialize, Default)]
    struct OpenAiSection {
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    }

    #[derive(serde::Deserialize, Default)]
    struct ServerSection {
        bind: Option<String>,
    }

    let toml_config: TomlConfig = toml::from_str(contents)?;

    let Some(api_key) = toml_config.openai.api_key.filter(|k| !k.is_empty()) else {
        bail!("Config is missing [openai] api_key");
    };

    let mut config = Config::new(api_key);
    if let Some(model) = toml_config.openai.model {
        config.model = model;
    }
    if let Some(base_url) = toml_config.openai.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Some(bind) = toml_config.server.bind {
        config.bind_address = bind;
    }

    Ok(config)
}

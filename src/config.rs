use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Address every contact message is delivered to
    pub recipient: String,
    /// Resume document offered at `/resume.pdf`
    #[serde(default)]
    pub resume_path: Option<PathBuf>,
}

fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    let port = env::var("PORT")
        .map_err(|_| "PORT environment variable is required")?
        .parse::<u16>()
        .map_err(|e| format!("Failed to parse PORT: {e}"))?;

    let recipient = env::var("CONTACT_RECIPIENT")
        .map_err(|_| "CONTACT_RECIPIENT environment variable is required")?;

    let resume_path = env::var("RESUME_PATH").ok().map(PathBuf::from);

    Ok(Config {
        port,
        recipient,
        resume_path,
    })
}

fn read_file(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(Into::into)
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let config_path =
        env::var("CONTACT_SERVER_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    if Path::new(&config_path).exists() {
        return read_file(&config_path);
    }

    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return read_file("config.yaml");
    }

    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'\
             \n This file should not be used and should be replaced with actual data",
            config_path
        );
        return read_file("config.example.yaml");
    }

    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Successfully loaded configuration from environment variables");
            Ok(config)
        }
        Err(e) => Err(format!(
            "Config file not found and environment variables are incomplete. \
             Tried: '{config_path}', 'config.yaml', 'config.example.yaml', and environment variables. \
             Error: {e}"
        )
        .into()),
    }
}

use anyhow::Result;
use std::env::VarError;

pub const DEFAULT_DATASET: &str = "playlists.csv";

/// Configuration loaded from environment variables
#[derive(Debug)]
pub struct Config {
    pub dataset_path: String,
}

impl Config {
    /// Build from the raw `PLAYLIST_DATASET` lookup; unset or blank means the default
    fn from_dataset_var(value: Result<String, VarError>) -> Result<Self> {
        let dataset_path = match value {
            Ok(path) if !path.trim().is_empty() => path,
            Ok(_) | Err(VarError::NotPresent) => DEFAULT_DATASET.to_string(),
            Err(e) => return Err(anyhow::anyhow!("PLAYLIST_DATASET is not valid: {}", e)),
        };
        Ok(Config { dataset_path })
    }

    /// Dataset to load; a path given on the command line wins over the environment
    pub fn dataset_path(&self, cli_override: Option<String>) -> String {
        cli_override.unwrap_or_else(|| self.dataset_path.clone())
    }
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    Config::from_dataset_var(std::env::var("PLAYLIST_DATASET"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_dataset_defaults_when_unset_or_blank() {
        let unset = Config::from_dataset_var(Err(VarError::NotPresent)).unwrap();
        assert_eq!(unset.dataset_path, "playlists.csv");

        let blank = Config::from_dataset_var(Ok("  ".to_string())).unwrap();
        assert_eq!(blank.dataset_path, DEFAULT_DATASET);
    }

    #[test]
    fn test_dataset_from_environment() {
        let config = Config::from_dataset_var(Ok("/data/top.csv".to_string())).unwrap();
        assert_eq!(config.dataset_path, "/data/top.csv");
    }

    #[test]
    fn test_non_unicode_dataset_is_an_error() {
        let result = Config::from_dataset_var(Err(VarError::NotUnicode(OsString::from("x"))));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_path_wins_over_environment() {
        let config = Config::from_dataset_var(Ok("/data/top.csv".to_string())).unwrap();

        assert_eq!(
            config.dataset_path(Some("local.csv".to_string())),
            "local.csv"
        );
        assert_eq!(config.dataset_path(None), "/data/top.csv");
    }
}

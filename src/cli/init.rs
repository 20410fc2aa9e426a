//! Init command implementation

use anyhow::{Result, bail};
use std::path::PathBuf;

use relaykey::config::Config;

/// Default configuration content for relaykey init
pub const DEFAULT_CONFIG: &str = r#"# relaykey configuration
# =======================

# Remote API
#   base_url              - API root; requests go to {base_url}/organizations/{org}/relay-keys/{key}/
#   timeout_connect_secs  - Connect timeout for save requests
#   timeout_read_secs     - Read timeout for save requests
[api]
base_url = "https://sentry.io/api/0"
timeout_connect_secs = 5
timeout_read_secs = 30

# Used when --org is not passed
[defaults]
org_slug = ""
"#;

/// Initialize a new configuration file
pub async fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_init_writes_commented_config_once() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(".relaykey").join("config.toml");

        init_command(Some(path.clone()), false).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
        assert!(!path.with_extension("toml.tmp").exists());

        let err = init_command(Some(path.clone()), false).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));

        init_command(Some(path), true).await.unwrap();
    }
}

//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use infocli_core::Config;

use crate::output::{Output, OutputFormat};

const VALID_KEYS: &str = "data_dir, log_file, birthday_window_days";

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "log_file": config.log_file,
                    "birthday_window_days": config.birthday_window_days
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  data_dir:             {}", config.data_dir.display());
            println!(
                "  log_file:             {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!("  birthday_window_days: {}", config.birthday_window_days);
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let mut config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    apply(&mut config, &key, &value)?;

    let save_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    config
        .save_to_path(&save_path)
        .context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "data_dir" => {
            config.data_dir = value.into();
        }
        "log_file" => {
            config.log_file = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.into())
            };
        }
        "birthday_window_days" => {
            let days: u32 = value
                .parse()
                .context("Invalid value for birthday_window_days. Use a whole number.")?;
            if days == 0 {
                bail!("birthday_window_days must be at least 1");
            }
            config.birthday_window_days = days;
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\nValid keys: {}",
                key,
                VALID_KEYS
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_apply_known_keys() {
        let mut config = Config::default();

        apply(&mut config, "data_dir", "/tmp/infocli").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/infocli"));

        apply(&mut config, "log_file", "/tmp/infocli.log").unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/infocli.log")));
        apply(&mut config, "log_file", "none").unwrap();
        assert!(config.log_file.is_none());

        apply(&mut config, "birthday_window_days", "14").unwrap();
        assert_eq!(config.birthday_window_days, 14);
    }

    #[test]
    fn test_apply_rejects_bad_input() {
        let mut config = Config::default();
        assert!(apply(&mut config, "birthday_window_days", "0").is_err());
        assert!(apply(&mut config, "birthday_window_days", "soon").is_err());

        let err = apply(&mut config, "sync_url", "x").unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
    }

    #[test]
    fn test_set_writes_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let output = Output::new(OutputFormat::Quiet);

        set(
            "birthday_window_days".to_string(),
            "10".to_string(),
            Some(&path),
            &output,
        )
        .unwrap();

        let saved = Config::load_from_path(&path).unwrap();
        assert_eq!(saved.birthday_window_days, 10);
    }
}

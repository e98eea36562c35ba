//! Configuration initialization and hierarchy management

use crate::adapters::{AppConfig, TomlConfigAdapter};
use crate::cli::Cli;
use crate::error::EzffResult;

/// Resolve settings following precedence: CLI > Env > File > Defaults.
///
/// Environment variables reach this function through clap, so the CLI and
/// environment layers arrive together as overrides.
pub fn initialize_configuration(cli: &Cli) -> EzffResult<AppConfig> {
    let mut config = TomlConfigAdapter::load(cli.config.as_deref())?;
    config.apply(cli.overrides());
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_cli_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[ezff]\nsuffix = \"_file\"\nffprobe = \"/opt/ffprobe\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "ezff",
            "--config",
            path.to_str().unwrap(),
            "--suffix",
            "_cli",
            "trim-start",
            "clip.mp4",
            "1",
        ])
        .unwrap();

        let config = initialize_configuration(&cli).unwrap();
        assert_eq!(config.suffix, "_cli");
        assert_eq!(config.ffprobe, "/opt/ffprobe");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let cli = Cli::try_parse_from([
            "ezff",
            "--config",
            path.to_str().unwrap(),
            "--suffix",
            "",
            "trim-start",
            "clip.mp4",
            "1",
        ])
        .unwrap();

        assert!(initialize_configuration(&cli).is_err());
    }
}

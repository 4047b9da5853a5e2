//! Simulation configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Parameters of a simulation run, loadable from `wegweiser.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Days to simulate.
    pub days: u32,
    /// Phrases a full session aims to complete.
    pub daily_quota: u32,
    /// Size of the generated placeholder phrase set when no phrase file is
    /// given.
    pub phrase_count: u32,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Default phrase file, overridable on the command line.
    pub phrase_file: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            days: 30,
            daily_quota: 5,
            phrase_count: 150,
            seed: None,
            phrase_file: None,
        }
    }
}

/// Shape of `wegweiser.toml`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    simulation: SimConfig,
}

/// Load simulation config from an explicit path, or from `wegweiser.toml`
/// in the current directory, or fall back to the defaults.
pub fn load_sim_config(path: Option<&Path>) -> Result<SimConfig> {
    let config_path = match path {
        Some(p) => {
            anyhow::ensure!(p.exists(), "config file not found: {}", p.display());
            Some(p.to_path_buf())
        }
        None => {
            let local = PathBuf::from("wegweiser.toml");
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let file: ConfigFile = toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            Ok(file.simulation)
        }
        None => Ok(SimConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SimConfig::default();
        assert_eq!(config.days, 30);
        assert_eq!(config.daily_quota, 5);
        assert_eq!(config.phrase_count, 150);
        assert!(config.seed.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wegweiser.toml");
        std::fs::write(
            &path,
            r#"
[simulation]
days = 14
seed = 42
"#,
        )
        .unwrap();

        let config = load_sim_config(Some(&path)).unwrap();
        assert_eq!(config.days, 14);
        assert_eq!(config.seed, Some(42));
        // Unspecified keys keep their defaults.
        assert_eq!(config.daily_quota, 5);
    }

    #[test]
    fn missing_explicit_path_fails() {
        assert!(load_sim_config(Some(Path::new("no_such_config.toml"))).is_err());
    }

    #[test]
    fn malformed_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wegweiser.toml");
        std::fs::write(&path, "[simulation\ndays = ]").unwrap();
        assert!(load_sim_config(Some(&path)).is_err());
    }
}

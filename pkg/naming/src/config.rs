use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How `knamectl` prints its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One name per line.
    #[default]
    Plain,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!(
                "unknown output format '{}' (expected plain, json or yaml)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// CLI configuration file (YAML).
///
/// Example `config.yaml`:
/// ```yaml
/// output: json
/// reject-empty: true
/// validate: true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingConfigFile {
    #[serde(default)]
    pub output: Option<OutputFormat>,
    #[serde(default, alias = "reject-empty")]
    pub reject_empty: Option<bool>,
    #[serde(default)]
    pub validate: Option<bool>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e).with_context(|| format!("failed to read config file {}", path)),
    };
    let config: T = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path))?;
    Ok(config)
}

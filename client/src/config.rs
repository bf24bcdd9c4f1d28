use std::fs;
use std::path::Path;

use aircraft::AircraftTuning;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Runtime configuration read from `config.json` next to the binary.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub tuning: AircraftTuning,
}

impl RuntimeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn load_or_default(path: &str) -> Self {
        match Self::load(Path::new(path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("using default config: {err:#}");
                Self::default()
            }
        }
    }
}

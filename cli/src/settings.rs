use anyhow::Context;
use chicken_banana_core::GameConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// On-disk settings, every field optional so a partial file only overrides what it names.
///
/// ```toml
/// coin_flip_delay_ms = 2000
/// reveal_delay_ms = 1500
/// seed = 42
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Settings {
    pub coin_flip_delay_ms: Option<u64>,
    pub reveal_delay_ms: Option<u64>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn game_config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig {
            coin_flip_delay: self
                .coin_flip_delay_ms
                .map_or(defaults.coin_flip_delay, Duration::from_millis),
            reveal_delay: self
                .reveal_delay_ms
                .map_or(defaults.reveal_delay, Duration::from_millis),
            seed: self.seed,
        }
    }
}

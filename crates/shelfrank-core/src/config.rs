//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Nested keys in env vars use `__`, e.g. `APP_ENGINE__THRESHOLD=0.4`.
//! Every section has defaults, so running without any config file is fine.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Weights and cut-off applied by rank fusion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub lexical_weight: f32,
    pub fuzzy_weight: f32,
    /// Results must score strictly above this.
    pub threshold: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { lexical_weight: 0.75, fuzzy_weight: 0.25, threshold: 0.3 }
    }
}

impl EngineConfig {
    /// Combined scores stay within [0, 1] only while the weights are
    /// non-negative and sum to at most one.
    pub fn validate(&self) -> Result<()> {
        for (name, w) in [("lexical_weight", self.lexical_weight), ("fuzzy_weight", self.fuzzy_weight)] {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidConfig(format!("engine.{name} must be a non-negative number, got {w}")));
            }
        }
        let total = self.lexical_weight + self.fuzzy_weight;
        if total > 1.0 + f32::EPSILON {
            return Err(Error::InvalidConfig(format!("engine weights must sum to at most 1, got {total}")));
        }
        if !self.threshold.is_finite() || !(0.0..1.0).contains(&self.threshold) {
            return Err(Error::InvalidConfig(format!("engine.threshold must lie in [0, 1), got {}", self.threshold)));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Tokens shorter than this (in chars) never enter the vocabulary.
    pub min_token_len: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { min_token_len: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub catalog_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { catalog_path: "data/catalog.json".to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub text: TextConfig,
    pub data: DataConfig,
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_in(Path::new("."))
    }

    /// Same as [`Config::load`] but resolves the TOML files against `dir`.
    pub fn load_in(dir: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(dir.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn settings(&self) -> anyhow::Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.settings()?.engine.validate()?;
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

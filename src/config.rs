use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::antenna::Enforcement;
use crate::cars::Market;
use crate::error::ConfigError;
use crate::toy::{default_catalog, CatalogEntry, ToyConfig};

/// Optional overrides for the demo programs, read from TOML.
///
/// Every section may be omitted; the built-in values are used instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub antenna: AntennaSettings,
    pub cars: Vec<CarOrder>,
    pub toys: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AntennaSettings {
    pub enforce_singleton: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CarOrder {
    pub market: Market,
    pub suv: bool,
}

impl Default for AntennaSettings {
    fn default() -> Self {
        Self {
            enforce_singleton: true,
            seed: None,
        }
    }
}

impl AntennaSettings {
    pub fn enforcement(&self) -> Enforcement {
        if self.enforce_singleton {
            Enforcement::Strict
        } else {
            Enforcement::Intercept
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            antenna: AntennaSettings::default(),
            cars: Vec::new(),
            toys: default_catalog(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), toys = config.toys.len(), orders = config.cars.len(), "loaded demo config");
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no config file given, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn toy(&self, name: &str) -> Result<&ToyConfig, ConfigError> {
        self.toys
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.toy)
            .ok_or_else(|| ConfigError::UnknownToy(name.to_string()))
    }

    pub fn orders(&self) -> Vec<(Market, bool)> {
        self.cars.iter().map(|order| (order.market, order.suv)).collect()
    }
}

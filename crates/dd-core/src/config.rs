//! Settings document for a drill run.
//!
//! Settings are loaded once at startup from a TOML document and passed by
//! reference into every generator. All keys are required:
//!
//! ```text
//! [scenario]
//! types = ["tsunami", "earthquake"]
//! [scenario.distance]
//! min = 0.1
//! max = 5.0
//!
//! [personnel]
//! skills = ["welding", "cooking", "sailing"]
//! [personnel.numbers]
//! min = 3
//! max = 7
//!
//! [resources]
//! items = ["flashlights", "tarps"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{DrillError, DrillResult};
use crate::sampler::decimal_steps;
use crate::scenario::DISTANCE_DECIMALS;

/// The settings document shipped with the crate.
pub const DEFAULT_SETTINGS: &str = include_str!("../assets/default.toml");

/// Number of extra skills listed for each person.
pub const OTHER_SKILL_COUNT: usize = 3;

/// An inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds<T> {
    /// Lower bound (inclusive).
    pub min: T,
    /// Upper bound (inclusive).
    pub max: T,
}

/// Settings for the scenario generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioSettings {
    /// Disaster types to choose from.
    pub types: Vec<String>,
    /// Distance from the disaster site, in miles.
    pub distance: Bounds<f64>,
}

/// Settings for the personnel generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonnelSettings {
    /// Roster size.
    pub numbers: Bounds<u32>,
    /// Pool of miscellaneous skills listed for each person.
    pub skills: Vec<String>,
}

/// Settings for the resource generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceSettings {
    /// Pool of item names (plural, e.g. "flashlights").
    pub items: Vec<String>,
}

/// Complete settings for one run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Scenario settings.
    pub scenario: ScenarioSettings,
    /// Personnel settings.
    pub personnel: PersonnelSettings,
    /// Resource settings.
    pub resources: ResourceSettings,
}

impl Settings {
    /// Parse and validate a TOML settings document.
    pub fn from_toml_str(source: &str) -> DrillResult<Self> {
        let settings: Self = toml::from_str(source)
            .map_err(|e| DrillError::InvalidConfiguration(e.message().to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse, and validate a settings file.
    pub fn load(path: &Path) -> DrillResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| DrillError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// The built-in settings.
    pub fn builtin() -> DrillResult<Self> {
        Self::from_toml_str(DEFAULT_SETTINGS)
    }

    /// Check ranges and pool sizes.
    pub fn validate(&self) -> DrillResult<()> {
        let invalid = |msg: &str| Err(DrillError::InvalidConfiguration(msg.to_string()));

        if self.scenario.types.is_empty() {
            return invalid("scenario.types must not be empty");
        }
        let distance = self.scenario.distance;
        if !distance.min.is_finite() || !distance.max.is_finite() {
            return invalid("scenario.distance bounds must be finite");
        }
        if distance.min <= 0.0 {
            return invalid("scenario.distance.min must be greater than 0");
        }
        if distance.min > distance.max {
            return invalid("scenario.distance.min must not exceed scenario.distance.max");
        }
        if decimal_steps(distance.min, distance.max, DISTANCE_DECIMALS).is_err() {
            return Err(DrillError::InvalidConfiguration(format!(
                "scenario.distance holds no value with {DISTANCE_DECIMALS} decimal places"
            )));
        }

        let numbers = self.personnel.numbers;
        if numbers.min < 1 {
            return invalid("personnel.numbers.min must be at least 1");
        }
        if numbers.min > numbers.max {
            return invalid("personnel.numbers.min must not exceed personnel.numbers.max");
        }
        if self.personnel.skills.len() < OTHER_SKILL_COUNT {
            return Err(DrillError::InvalidConfiguration(format!(
                "personnel.skills needs at least {OTHER_SKILL_COUNT} entries"
            )));
        }

        if self.resources.items.is_empty() {
            return invalid("resources.items must not be empty");
        }

        Ok(())
    }
}

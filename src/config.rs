use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::SeverityLevel;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub light_max: u32,
    pub moderate_max: u32,
    pub symptom_priority_base: f64,
    pub symptom_priority_step: f64,
    pub max_suggestions: usize,
    pub fallback_min_suggestions: usize,
    pub top_symptom_limit: usize,
    pub low_logging_days: u32,
    pub postpartum_sad_threshold: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            light_max: 5,
            moderate_max: 12,
            symptom_priority_base: 4.0,
            symptom_priority_step: 0.5,
            max_suggestions: 3,
            fallback_min_suggestions: 2,
            top_symptom_limit: 3,
            low_logging_days: 2,
            postpartum_sad_threshold: 3,
        }
    }
}

impl EngineConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.light_max > self.moderate_max {
            return Err(ConfigError::Invalid(format!(
                "light_max ({}) must not exceed moderate_max ({})",
                self.light_max, self.moderate_max
            )));
        }
        if self.max_suggestions == 0 {
            return Err(ConfigError::Invalid(
                "max_suggestions must be at least 1".to_string(),
            ));
        }
        if self.fallback_min_suggestions == 0 {
            return Err(ConfigError::Invalid(
                "fallback_min_suggestions must be at least 1".to_string(),
            ));
        }
        if self.top_symptom_limit == 0 {
            return Err(ConfigError::Invalid(
                "top_symptom_limit must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("symptom_priority_base", self.symptom_priority_base),
            ("symptom_priority_step", self.symptom_priority_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn severity_for(&self, total_score: u32) -> SeverityLevel {
        if total_score <= self.light_max {
            SeverityLevel::Light
        } else if total_score <= self.moderate_max {
            SeverityLevel::Moderate
        } else {
            SeverityLevel::Heavy
        }
    }

    // Weight 3 maps to the base; each lighter point adds one step.
    pub fn symptom_priority(&self, weight: u8) -> f64 {
        let below_max = 3u8.saturating_sub(weight) as f64;
        self.symptom_priority_base + below_max * self.symptom_priority_step
    }
}

//! Classifier weights and thresholds.
//!
//! `Default` holds the calibrated values. [`ClassifierConfig::legacy`] keeps
//! the pre-calibration rule set, whose Lifestyle axis almost always lands
//! on Y and whose code distribution is dominated by two codes; it exists so
//! the coverage check can demonstrate that defect.
//!
//! Configs load from TOML; missing tables fall back to the defaults:
//!
//! ```toml
//! [energy]
//! threshold = 4
//!
//! [lifestyle]
//! threshold = 2
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// Energy (W/N): seasonal support plus self-supporting glyph counts.
///
/// `score = season_bonus·[month branch is the day element or feeds it]
///        + peer_weight·(Peer + Rival) + input_weight·(Input-Same + Input-Diff)`;
/// W when `score > threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyRule {
    pub season_bonus: u32,
    pub peer_weight: u32,
    pub input_weight: u32,
    pub threshold: u32,
}

impl Default for EnergyRule {
    fn default() -> Self {
        Self {
            season_bonus: 3,
            peer_weight: 1,
            input_weight: 1,
            threshold: 3,
        }
    }
}

/// Perception (S/G): G when `ideal_weight·Input > practical_weight·(Output + Assert)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptionRule {
    pub practical_weight: u32,
    pub ideal_weight: u32,
}

impl Default for PerceptionRule {
    fn default() -> Self {
        Self {
            practical_weight: 1,
            ideal_weight: 2,
        }
    }
}

/// Judgement (I/H): I when `rule_weight·Pressure > harmony_weight·(Output + Peer + Rival)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgementRule {
    pub rule_weight: u32,
    pub harmony_weight: u32,
}

impl Default for JudgementRule {
    fn default() -> Self {
        Self {
            rule_weight: 2,
            harmony_weight: 1,
        }
    }
}

/// Lifestyle (J/Y): graded element balance.
///
/// `balance = (present elements - breadth_floor, floored at 0)
///          + [no element count reaches excess_count]`;
/// J when `balance >= threshold`. With the defaults all five elements
/// present scores 2, four present scores 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleRule {
    pub breadth_floor: u8,
    pub excess_count: u8,
    pub threshold: u32,
}

impl Default for LifestyleRule {
    fn default() -> Self {
        Self {
            breadth_floor: 3,
            excess_count: 3,
            threshold: 2,
        }
    }
}

impl LifestyleRule {
    /// Highest balance this rule can award.
    pub const fn max_balance(&self) -> u32 {
        5u32.saturating_sub(self.breadth_floor as u32) + 1
    }
}

/// Complete classifier configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub energy: EnergyRule,
    pub perception: PerceptionRule,
    pub judgement: JudgementRule,
    pub lifestyle: LifestyleRule,
}

impl ClassifierConfig {
    /// Pre-calibration rules: Lifestyle requires all five elements present
    /// and no element at three or more.
    pub fn legacy() -> Self {
        Self {
            lifestyle: LifestyleRule {
                threshold: 3,
                ..LifestyleRule::default()
            },
            ..Self::default()
        }
    }

    /// Reject configs that would pin an axis to one letter.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        if self.energy.peer_weight == 0 && self.energy.input_weight == 0 {
            return Err(ClassifyError::InvalidConfig(
                "energy peer_weight and input_weight cannot both be zero",
            ));
        }
        if self.perception.practical_weight == 0 || self.perception.ideal_weight == 0 {
            return Err(ClassifyError::InvalidConfig(
                "perception weights must be greater than zero",
            ));
        }
        if self.judgement.rule_weight == 0 || self.judgement.harmony_weight == 0 {
            return Err(ClassifyError::InvalidConfig(
                "judgement weights must be greater than zero",
            ));
        }
        if self.lifestyle.breadth_floor > 4 {
            return Err(ClassifyError::InvalidConfig(
                "lifestyle breadth_floor must be at most 4",
            ));
        }
        if !(2..=8).contains(&self.lifestyle.excess_count) {
            return Err(ClassifyError::InvalidConfig(
                "lifestyle excess_count must be in 2..=8",
            ));
        }
        if self.lifestyle.threshold == 0 || self.lifestyle.threshold > self.lifestyle.max_balance() {
            return Err(ClassifyError::InvalidConfig(
                "lifestyle threshold must be reachable and greater than zero",
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML config.
    pub fn from_toml_str(contents: &str) -> Result<Self, ClassifyError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded classifier config");
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, ClassifyError> {
        toml::to_string(self).map_err(|e| ClassifyError::Parse(e.to_string()))
    }
}

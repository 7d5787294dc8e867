//! Four-axis type-code classifier.
//!
//! This crate provides:
//! - The 16-value [`TypeCode`] and its four axes
//! - Configurable scoring rules, loadable from TOML
//! - The classifier reducing a chart's tallies to a code
//! - A calibration harness checking code coverage and axis balance over
//!   a span of birth dates, and a threshold sweep built on it

pub mod calibration;
pub mod classifier;
pub mod config;
pub mod error;
pub mod type_code;

pub use calibration::{
    CalibrationReport, CalibrationSample, CalibrationSpan, CoverageBounds, CoverageViolation,
    run_calibration, tune,
};
pub use classifier::{AxisInputs, AxisScores, classify, classify_with, decide, score_axes, score_inputs};
pub use config::{ClassifierConfig, EnergyRule, JudgementRule, LifestyleRule, PerceptionRule};
pub use error::ClassifyError;
pub use type_code::{ALL_AXES, ALL_TYPE_CODES, Axis, Energy, Judgement, Lifestyle, Perception, TypeCode};

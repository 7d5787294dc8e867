//! Statistical calibration over the enumerable input space.
//!
//! The input space is every `(day, hour slot)` pair in a span of years. It
//! is flattened as `day_offset * 12 + slot` and sampled every `stride`
//! points, so a stride coprime to 12 and 60 walks through all slots and
//! all sexagenary days evenly. Each sample runs the full pipeline.
//!
//! There is no closed-form balance proof for the axis formulas; thresholds
//! are chosen here, by [`tune`], against [`CoverageBounds`].

use serde::Serialize;

use saju_base::{compute_pillars, tally};
use saju_time::{HourSlot, SolarDate, TimeSlot};

use crate::classifier::{AxisInputs, decide, score_inputs};
use crate::config::ClassifierConfig;
use crate::error::ClassifyError;
use crate::type_code::{ALL_AXES, ALL_TYPE_CODES, Axis, TypeCode};

/// Range of birth years and sampling stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalibrationSpan {
    pub first_year: i32,
    pub last_year: i32,
    /// Take every `stride`-th point of the flattened (day, slot) space.
    pub stride: usize,
}

impl Default for CalibrationSpan {
    fn default() -> Self {
        Self {
            first_year: 1940,
            last_year: 2009,
            stride: 61,
        }
    }
}

impl CalibrationSpan {
    fn validate(&self) -> Result<(), ClassifyError> {
        if self.first_year > self.last_year {
            return Err(ClassifyError::InvalidSpan("first_year after last_year"));
        }
        if self.stride == 0 {
            return Err(ClassifyError::InvalidSpan("stride must be greater than zero"));
        }
        Ok(())
    }

    /// Sampled `(date, slot)` points in ascending order.
    pub fn points(&self) -> Result<Vec<(SolarDate, HourSlot)>, ClassifyError> {
        self.validate()?;
        let first = SolarDate::new(self.first_year, 1, 1)?.check_supported()?;
        let last = SolarDate::new(self.last_year, 12, 31)?.check_supported()?;
        let days = (last.julian_day_number() - first.julian_day_number() + 1) as usize;

        let mut out = Vec::with_capacity(days * 12 / self.stride + 1);
        for flat in (0..days * 12).step_by(self.stride) {
            let date =
                SolarDate::from_julian_day_number(first.julian_day_number() + (flat / 12) as i64)?;
            let slot = HourSlot::new((flat % 12) as u8)?;
            out.push((date, slot));
        }
        Ok(out)
    }
}

/// Acceptance bounds for a calibrated config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageBounds {
    /// No single code may exceed this share of the sample.
    pub max_code_share: f64,
    /// Each axis' first-letter share must lie in `[min, 1 - min]`.
    pub min_axis_share: f64,
}

impl Default for CoverageBounds {
    fn default() -> Self {
        Self {
            max_code_share: 0.18,
            min_axis_share: 0.25,
        }
    }
}

/// A failed coverage or balance check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum CoverageViolation {
    MissingCode(TypeCode),
    CodeShareTooHigh { code: TypeCode, share: f64 },
    AxisImbalance { axis: Axis, first_letter_share: f64 },
}

impl std::fmt::Display for CoverageViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCode(code) => write!(f, "code {code} never produced"),
            Self::CodeShareTooHigh { code, share } => {
                write!(f, "code {code} takes {:.1}% of the sample", share * 100.0)
            }
            Self::AxisImbalance {
                axis,
                first_letter_share,
            } => write!(
                f,
                "{} axis picks {} for {:.1}% of the sample",
                axis.name(),
                axis.letters()[0],
                first_letter_share * 100.0
            ),
        }
    }
}

/// Distribution of codes and axis letters over a sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalibrationReport {
    pub config: ClassifierConfig,
    pub samples: usize,
    /// Count per code, indexed by [`TypeCode::index`].
    pub histogram: [usize; 16],
    /// First-letter count per axis, indexed by [`Axis::index`].
    pub first_letter_counts: [usize; 4],
}

impl CalibrationReport {
    fn empty(config: ClassifierConfig) -> Self {
        Self {
            config,
            samples: 0,
            histogram: [0; 16],
            first_letter_counts: [0; 4],
        }
    }

    fn record(&mut self, code: TypeCode) {
        self.samples += 1;
        self.histogram[code.index() as usize] += 1;
        for axis in ALL_AXES {
            if code.is_first_letter(axis) {
                self.first_letter_counts[axis.index() as usize] += 1;
            }
        }
    }

    pub fn count(&self, code: TypeCode) -> usize {
        self.histogram[code.index() as usize]
    }

    pub fn share(&self, code: TypeCode) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.count(code) as f64 / self.samples as f64
    }

    /// Share of the sample taking the first letter of `axis`.
    pub fn first_letter_share(&self, axis: Axis) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.first_letter_counts[axis.index() as usize] as f64 / self.samples as f64
    }

    pub fn missing_codes(&self) -> Vec<TypeCode> {
        ALL_TYPE_CODES
            .iter()
            .copied()
            .filter(|&c| self.count(c) == 0)
            .collect()
    }

    /// Most frequent code and its share.
    pub fn dominant(&self) -> (TypeCode, f64) {
        let code = ALL_TYPE_CODES
            .iter()
            .copied()
            .max_by_key(|&c| self.count(c))
            .unwrap_or(ALL_TYPE_CODES[0]);
        (code, self.share(code))
    }

    pub fn max_share(&self) -> f64 {
        self.dominant().1
    }

    pub fn min_share(&self) -> f64 {
        ALL_TYPE_CODES
            .iter()
            .map(|&c| self.share(c))
            .fold(f64::INFINITY, f64::min)
    }

    /// All violations of `bounds`. Empty means the config passes.
    pub fn check(&self, bounds: &CoverageBounds) -> Vec<CoverageViolation> {
        let mut out: Vec<CoverageViolation> = self
            .missing_codes()
            .into_iter()
            .map(CoverageViolation::MissingCode)
            .collect();
        for code in ALL_TYPE_CODES {
            let share = self.share(code);
            if share > bounds.max_code_share {
                out.push(CoverageViolation::CodeShareTooHigh { code, share });
            }
        }
        for axis in ALL_AXES {
            let share = self.first_letter_share(axis);
            if share < bounds.min_axis_share || share > 1.0 - bounds.min_axis_share {
                out.push(CoverageViolation::AxisImbalance {
                    axis,
                    first_letter_share: share,
                });
            }
        }
        out
    }

    pub fn passes(&self, bounds: &CoverageBounds) -> bool {
        self.check(bounds).is_empty()
    }
}

/// Axis inputs for every sampled point, computed once.
#[derive(Debug, Clone)]
pub struct CalibrationSample {
    pub span: CalibrationSpan,
    inputs: Vec<AxisInputs>,
}

impl CalibrationSample {
    /// Run pillars and tallies for every point in `span`.
    pub fn collect(span: CalibrationSpan) -> Result<Self, ClassifyError> {
        let points = span.points()?;
        let mut inputs = Vec::with_capacity(points.len());
        for (date, slot) in points {
            let pillars = compute_pillars(date, TimeSlot::Known(slot))?;
            let (elements, ten_gods) = tally(&pillars);
            inputs.push(AxisInputs::from_tallies(&elements, &ten_gods, &pillars));
        }
        tracing::debug!(
            first_year = span.first_year,
            last_year = span.last_year,
            stride = span.stride,
            samples = inputs.len(),
            "collected calibration sample"
        );
        Ok(Self { span, inputs })
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Classify every sample under `config`.
    pub fn report(&self, config: &ClassifierConfig) -> CalibrationReport {
        let mut report = CalibrationReport::empty(*config);
        for x in &self.inputs {
            report.record(decide(config, &score_inputs(config, x)));
        }
        report
    }
}

/// Classify every point of `span` under `config` and summarize.
pub fn run_calibration(
    config: &ClassifierConfig,
    span: CalibrationSpan,
) -> Result<CalibrationReport, ClassifyError> {
    let report = CalibrationSample::collect(span)?.report(config);
    let (code, share) = report.dominant();
    tracing::info!(
        samples = report.samples,
        dominant = %code,
        dominant_share = share,
        missing = report.missing_codes().len(),
        "calibration run"
    );
    Ok(report)
}

/// Sweep the Energy and Lifestyle thresholds, keeping all weights of
/// `base`, and return the passing config with the smallest dominant-code
/// share. `None` if no threshold pair passes.
pub fn tune(
    base: &ClassifierConfig,
    sample: &CalibrationSample,
    bounds: &CoverageBounds,
) -> Option<CalibrationReport> {
    let max_energy = base.energy.season_bonus + 7 * base.energy.peer_weight.max(base.energy.input_weight);
    let mut best: Option<CalibrationReport> = None;

    for energy_threshold in 0..=max_energy {
        for lifestyle_threshold in 1..=base.lifestyle.max_balance() {
            let mut config = *base;
            config.energy.threshold = energy_threshold;
            config.lifestyle.threshold = lifestyle_threshold;

            let report = sample.report(&config);
            let violations = report.check(bounds);
            if !violations.is_empty() {
                tracing::trace!(energy_threshold, lifestyle_threshold, violations = violations.len(), "rejected");
                continue;
            }
            if best.as_ref().is_none_or(|b| report.max_share() < b.max_share()) {
                best = Some(report);
            }
        }
    }

    match &best {
        Some(r) => tracing::info!(
            energy_threshold = r.config.energy.threshold,
            lifestyle_threshold = r.config.lifestyle.threshold,
            max_share = r.max_share(),
            "tuned thresholds"
        ),
        None => tracing::warn!("no threshold pair satisfies the coverage bounds"),
    }
    best
}

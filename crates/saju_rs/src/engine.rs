//! Memoizing reading engine.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use saju_base::{ElementTally, FourPillars, TenGodTally, compute_pillars, tally};
use saju_classify::{AxisScores, ClassifierConfig, TypeCode, decide, score_axes};
use saju_time::{HourSlot, SolarDate, TimeSlot};

use crate::error::EngineError;
use crate::lunar::{CalendarKind, ConversionError, LunarConverter, LunarDate, NoLunarConverter};

/// Engine configuration used at startup time.
///
/// ```toml
/// cache_capacity = 10000
///
/// [classifier.energy]
/// threshold = 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub classifier: ClassifierConfig,
    /// Upper bound on memoized readings.
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            cache_capacity: 4096,
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<(), EngineError> {
        if self.cache_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "cache_capacity must be greater than zero",
            ));
        }
        self.classifier.validate()?;
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, EngineError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| EngineError::ConfigLoad(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| EngineError::ConfigLoad(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }
}

/// Birth data exactly as supplied by the caller. Also the memoization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub time: TimeSlot,
    pub calendar: CalendarKind,
}

impl BirthInput {
    pub fn solar(date: SolarDate, time: TimeSlot) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            time,
            calendar: CalendarKind::Solar,
        }
    }

    pub fn lunar(date: LunarDate, time: TimeSlot) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            time,
            calendar: CalendarKind::Lunar {
                leap_month: date.is_leap_month(),
            },
        }
    }
}

/// Complete, immutable result for one birth input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub input: BirthInput,
    pub solar_date: SolarDate,
    /// Slot actually used; [`saju_time::UNKNOWN_TIME_SLOT`] when the time was unknown.
    pub resolved_slot: HourSlot,
    pub pillars: FourPillars,
    pub elements: ElementTally,
    pub ten_gods: TenGodTally,
    pub scores: AxisScores,
    pub type_code: TypeCode,
}

/// Telemetry since the engine was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EngineStats {
    pub evaluations: u64,
    pub cache_hits: u64,
    pub cached: usize,
}

/// Reading engine.
///
/// `Engine` is [`Send`] + [`Sync`]; share it via `Arc<Engine>`. Readings
/// are pure functions of [`BirthInput`], so the cache never needs
/// invalidation. Errors are not cached.
pub struct Engine {
    config: EngineConfig,
    converter: Box<dyn LunarConverter>,
    cache: RwLock<HashMap<BirthInput, Reading>>,
    evaluations: AtomicU64,
    cache_hits: AtomicU64,
}

impl Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("converter", &self.converter.name())
            .field("stats", &self.stats())
            .finish()
    }
}

impl Engine {
    pub fn new(config: EngineConfig, converter: impl LunarConverter + 'static) -> Result<Self, EngineError> {
        config.validate()?;
        tracing::debug!(
            converter = converter.name(),
            cache_capacity = config.cache_capacity,
            "engine created"
        );
        Ok(Self {
            config,
            converter: Box::new(converter),
            cache: RwLock::new(HashMap::new()),
            evaluations: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
        })
    }

    /// Engine without a lunar converter; lunar input fails with
    /// [`EngineError::ConversionFailure`].
    pub fn solar_only(config: EngineConfig) -> Result<Self, EngineError> {
        Self::new(config, NoLunarConverter)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Convert (if lunar) and validate to a supported solar date.
    pub fn solar_date(&self, input: &BirthInput) -> Result<SolarDate, EngineError> {
        let date = match input.calendar {
            CalendarKind::Solar => SolarDate::new(input.year, input.month, input.day)?,
            CalendarKind::Lunar { leap_month } => {
                let lunar = LunarDate::new(input.year, input.month, input.day, leap_month)?;
                let parts = self.converter.to_solar(lunar)?;
                let date = SolarDate::new(parts.year, parts.month, parts.day)
                    .map_err(|_| ConversionError::Inconsistent(parts))?;
                tracing::trace!(%lunar, solar = %date, "converted lunar date");
                date
            }
        };
        Ok(date.check_supported()?)
    }

    /// Produce the reading for `input`, from cache when possible.
    pub fn analyze(&self, input: &BirthInput) -> Result<Reading, EngineError> {
        if let Some(reading) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(input)
        {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            return Ok(*reading);
        }

        let reading = self.evaluate(input)?;
        self.evaluations.fetch_add(1, Ordering::Relaxed);

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if cache.len() < self.config.cache_capacity {
            cache.insert(*input, reading);
        } else {
            tracing::trace!("reading cache full");
        }
        Ok(reading)
    }

    /// Analyze several inputs. Results are returned in input order.
    pub fn analyze_batch(&self, inputs: &[BirthInput]) -> Vec<Result<Reading, EngineError>> {
        inputs.iter().map(|input| self.analyze(input)).collect()
    }

    fn evaluate(&self, input: &BirthInput) -> Result<Reading, EngineError> {
        let solar_date = self.solar_date(input)?;
        let pillars = compute_pillars(solar_date, input.time)?;
        let (elements, ten_gods) = tally(&pillars);
        let scores = score_axes(&self.config.classifier, &elements, &ten_gods, &pillars);
        let type_code = decide(&self.config.classifier, &scores);
        tracing::debug!(%solar_date, %pillars, %type_code, "evaluated reading");
        Ok(Reading {
            input: *input,
            solar_date,
            resolved_slot: input.time.resolve(),
            pillars,
            elements,
            ten_gods,
            scores,
            type_code,
        })
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            evaluations: self.evaluations.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cached: self.cache.read().unwrap_or_else(PoisonError::into_inner).len(),
        }
    }

    pub fn clear_cache(&self) {
        self.cache.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(y: i32, m: u32, d: u32, time: TimeSlot) -> BirthInput {
        BirthInput::solar(SolarDate::new(y, m, d).unwrap(), time)
    }

    #[test]
    fn engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn rejects_zero_capacity() {
        let config = EngineConfig {
            cache_capacity: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            Engine::solar_only(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn second_call_hits_cache() {
        let engine = Engine::solar_only(EngineConfig::default()).unwrap();
        let input = solar(1990, 5, 15, TimeSlot::Unknown);
        let a = engine.analyze(&input).unwrap();
        let b = engine.analyze(&input).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            engine.stats(),
            EngineStats {
                evaluations: 1,
                cache_hits: 1,
                cached: 1
            }
        );
        engine.clear_cache();
        assert_eq!(engine.stats().cached, 0);
    }

    #[test]
    fn capacity_bounds_cache() {
        let config = EngineConfig {
            cache_capacity: 1,
            ..EngineConfig::default()
        };
        let engine = Engine::solar_only(config).unwrap();
        engine.analyze(&solar(2000, 1, 1, TimeSlot::Unknown)).unwrap();
        engine.analyze(&solar(2000, 1, 2, TimeSlot::Unknown)).unwrap();
        assert_eq!(engine.stats().cached, 1);
        assert_eq!(engine.stats().evaluations, 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let engine = Engine::solar_only(EngineConfig::default()).unwrap();
        let input = BirthInput {
            year: 2023,
            month: 2,
            day: 30,
            time: TimeSlot::Unknown,
            calendar: CalendarKind::Solar,
        };
        assert!(matches!(engine.analyze(&input), Err(EngineError::InvalidDate(_))));
        assert_eq!(engine.stats(), EngineStats::default());
    }

    #[test]
    fn config_from_toml() {
        let config = EngineConfig::from_toml_str(
            "cache_capacity = 16\n[classifier.lifestyle]\nthreshold = 3\n",
        )
        .unwrap();
        assert_eq!(config.cache_capacity, 16);
        assert_eq!(config.classifier, ClassifierConfig::legacy());
        assert!(matches!(
            EngineConfig::from_toml_str("cache_capacity = 0\n"),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("cache_capacity = \"x\"\n"),
            Err(EngineError::ConfigLoad(_))
        ));
    }
}

use saju_base::{ElementTally, FourPillars, TenGodTally};
use saju_classify::TypeCode;
use saju_time::{SolarDate, TimeSlot};

use crate::engine::{BirthInput, EngineStats, Reading};
use crate::error::EngineError;
use crate::global::engine;
use crate::lunar::LunarDate;

/// Full reading for arbitrary input from the global engine.
pub fn reading(input: &BirthInput) -> Result<Reading, EngineError> {
    engine()?.analyze(input)
}

/// Reading for a solar birth date.
pub fn solar_reading(date: SolarDate, time: TimeSlot) -> Result<Reading, EngineError> {
    reading(&BirthInput::solar(date, time))
}

/// Reading for a lunar birth date, converted by the global engine's converter.
pub fn lunar_reading(date: LunarDate, time: TimeSlot) -> Result<Reading, EngineError> {
    reading(&BirthInput::lunar(date, time))
}

pub fn pillars(date: SolarDate, time: TimeSlot) -> Result<FourPillars, EngineError> {
    Ok(solar_reading(date, time)?.pillars)
}

pub fn tallies(date: SolarDate, time: TimeSlot) -> Result<(ElementTally, TenGodTally), EngineError> {
    let r = solar_reading(date, time)?;
    Ok((r.elements, r.ten_gods))
}

pub fn type_code(date: SolarDate, time: TimeSlot) -> Result<TypeCode, EngineError> {
    Ok(solar_reading(date, time)?.type_code)
}

/// Telemetry of the global engine.
pub fn stats() -> Result<EngineStats, EngineError> {
    Ok(engine()?.stats())
}

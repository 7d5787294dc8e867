//! The process-wide engine. Kept in its own test binary so `init` runs once.

use std::sync::Once;

use saju_rs::*;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let table = TableConverter::from_toml_str(
            "[[month]]\nyear = 2024\nmonth = 1\nstart = \"2024-02-10\"\ndays = 29\n",
        )
        .unwrap();
        init(EngineConfig::default(), table).expect("engine init");
    });
}

#[test]
fn initialized_once() {
    ensure_init();
    assert!(is_initialized());
    assert_eq!(
        init(EngineConfig::default(), NoLunarConverter),
        Err(EngineError::AlreadyInitialized)
    );
}

#[test]
fn convenience_functions_agree() {
    ensure_init();
    let date = SolarDate::new(2000, 1, 1).unwrap();
    let time = TimeSlot::Known(HourSlot::new(6).unwrap());
    let r = solar_reading(date, time).unwrap();
    assert_eq!(pillars(date, time).unwrap(), r.pillars);
    assert_eq!(type_code(date, time).unwrap().to_string(), "WGHY");
    let (el, tg) = tallies(date, time).unwrap();
    assert_eq!((el.total(), tg.total()), (8, 7));
    assert!(stats().unwrap().cache_hits >= 3);
}

#[test]
fn lunar_through_global_engine() {
    ensure_init();
    let r = lunar_reading(LunarDate::new(2024, 1, 1, false).unwrap(), TimeSlot::Unknown).unwrap();
    assert_eq!(r.solar_date.to_string(), "2024-02-10");
    assert_eq!(r.resolved_slot, UNKNOWN_TIME_SLOT);
}

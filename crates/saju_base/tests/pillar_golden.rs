//! Golden tests for pillar calculation against almanac reference dates.
//!
//! Pure-math tests (no external data needed).

use saju_base::{Branch, FourPillars, Stem, compute_pillars, day_pillar};
use saju_time::{HourSlot, SolarDate, TimeSlot, UNKNOWN_TIME_SLOT};

fn date(y: i32, m: u32, d: u32) -> SolarDate {
    SolarDate::new(y, m, d).unwrap()
}

fn chart(y: i32, m: u32, d: u32, slot: u8) -> FourPillars {
    compute_pillars(date(y, m, d), TimeSlot::Known(HourSlot::new(slot).unwrap())).unwrap()
}

// ---------------------------------------------------------------------------
// Day pillar anchors
// ---------------------------------------------------------------------------

#[test]
fn day_anchor_1949_10_01_gapja() {
    let p = day_pillar(date(1949, 10, 1));
    assert_eq!((p.stem, p.branch), (Stem::Gap, Branch::Ja));
}

#[test]
fn day_anchor_1900_01_01_gapsul() {
    assert_eq!(day_pillar(date(1900, 1, 1)).to_string(), "甲戌");
}

#[test]
fn day_anchor_2000_01_01_muo() {
    assert_eq!(day_pillar(date(2000, 1, 1)).to_string(), "戊午");
}

#[test]
fn day_anchor_2024_02_10_gapjin() {
    assert_eq!(day_pillar(date(2024, 2, 10)).to_string(), "甲辰");
}

#[test]
fn day_pillars_repeat_every_sixty_days() {
    let mut d = date(1999, 11, 1);
    let first = day_pillar(d);
    for _ in 0..60 {
        d = d.succ();
    }
    assert_eq!(day_pillar(d), first);
}

// ---------------------------------------------------------------------------
// Full charts
// ---------------------------------------------------------------------------

#[test]
fn full_chart_golden_set() {
    let cases = [
        ((2024, 2, 10, 0), "甲辰 丙寅 甲辰 甲子"),
        ((2000, 1, 1, 6), "己卯 丙子 戊午 戊午"),
        ((1990, 5, 15, 3), "庚午 辛巳 庚辰 己卯"),
        ((1984, 2, 3, 6), "癸亥 乙丑 丁卯 丙午"),
        ((1984, 2, 4, 6), "甲子 丙寅 戊辰 戊午"),
        ((1988, 12, 25, 11), "戊辰 甲子 甲寅 乙亥"),
        ((2024, 1, 5, 6), "癸卯 甲子 戊辰 戊午"),
        ((2024, 1, 6, 6), "癸卯 乙丑 己巳 庚午"),
        ((1975, 8, 8, 9), "乙卯 甲申 丙戌 丁酉"),
        ((2024, 5, 4, 6), "甲辰 戊辰 戊辰 戊午"),
        ((2024, 5, 5, 6), "甲辰 己巳 己巳 庚午"),
    ];
    for ((y, m, d, s), expected) in cases {
        assert_eq!(chart(y, m, d, s).to_string(), expected, "{y}-{m}-{d} slot {s}");
    }
}

#[test]
fn hour_stems_advance_through_the_day() {
    let d = date(2024, 2, 10); // 甲 day: 甲子, 乙丑, 丙寅 ...
    for slot in HourSlot::all() {
        let p = compute_pillars(d, TimeSlot::Known(slot)).unwrap();
        assert_eq!(p.hour.stem, Stem::from_index(slot.index()));
        assert_eq!(p.hour.branch, Branch::from_index(slot.index()));
    }
}

#[test]
fn unknown_time_equals_explicit_default_slot() {
    let mut d = date(1970, 1, 1);
    for _ in 0..400 {
        let unknown = compute_pillars(d, TimeSlot::Unknown).unwrap();
        let explicit = compute_pillars(d, TimeSlot::Known(UNKNOWN_TIME_SLOT)).unwrap();
        assert_eq!(unknown.hour, explicit.hour, "{d}");
        assert_eq!(unknown, explicit);
        d = d.succ();
    }
}

//! Property tests for the tallies over the supported date range.

use proptest::prelude::*;
use saju_base::{
    Branch, Glyph, PillarRole, Stem, TenGod, compute_pillars, tally, ten_god, ten_gods,
};
use saju_time::{HourSlot, SolarDate, TimeSlot, days_in_month};

fn any_input() -> impl Strategy<Value = (SolarDate, TimeSlot)> {
    (1900i32..=2100, 1u32..=12, 0u8..13)
        .prop_flat_map(|(y, m, s)| (Just(y), Just(m), 1..=days_in_month(y, m), Just(s)))
        .prop_map(|(y, m, d, s)| {
            let time = if s == 12 {
                TimeSlot::Unknown
            } else {
                TimeSlot::Known(HourSlot::new(s).unwrap())
            };
            (SolarDate::new(y, m, d).unwrap(), time)
        })
}

proptest! {
    #[test]
    fn element_tally_sums_to_eight((date, time) in any_input()) {
        let p = compute_pillars(date, time).unwrap();
        let (el, _) = tally(&p);
        prop_assert_eq!(el.total(), 8);
    }

    #[test]
    fn ten_god_tally_sums_to_seven((date, time) in any_input()) {
        let p = compute_pillars(date, time).unwrap();
        let (_, tg) = tally(&p);
        prop_assert_eq!(tg.total(), 7);
    }

    #[test]
    fn day_stem_is_never_counted((date, time) in any_input()) {
        let p = compute_pillars(date, time).unwrap();
        let related = ten_gods(&p);
        prop_assert_eq!(related.len(), 7);
        prop_assert!(related
            .iter()
            .all(|(g, _)| !(g.role == PillarRole::Day && matches!(g.glyph, Glyph::Stem(_)))));
    }

    #[test]
    fn pipeline_is_deterministic((date, time) in any_input()) {
        let a = compute_pillars(date, time).unwrap();
        let b = compute_pillars(date, time).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(tally(&a), tally(&b));
    }

    #[test]
    fn peer_only_for_same_element_and_polarity(s in 0u8..10, g in 0u8..10) {
        let day = Stem::from_index(s);
        let other = Stem::from_index(g);
        let same = day.element() == other.element() && day.polarity() == other.polarity();
        prop_assert_eq!(ten_god(day, Glyph::Stem(other)) == TenGod::Peer, same);
    }
}

#[test]
fn intrinsic_branch_rule_gap_vs_ja() {
    assert_eq!(ten_god(Stem::Gap, Glyph::Branch(Branch::Ja)), TenGod::InputSame);
}

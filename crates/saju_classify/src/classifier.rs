//! Four independent binary decisions reducing tallies to a type code.
//!
//! Scoring and deciding are split: [`score_axes`] produces the raw numbers,
//! [`decide`] compares them against a config. The calibration harness
//! scores each sample once and re-decides under many configs.

use serde::Serialize;

use saju_base::{ElementTally, FourPillars, TenGod, TenGodTally};

use crate::config::ClassifierConfig;
use crate::type_code::{Energy, Judgement, Lifestyle, Perception, TypeCode};

const PEERS: [TenGod; 2] = [TenGod::Peer, TenGod::Rival];
const INPUTS: [TenGod; 2] = [TenGod::InputSame, TenGod::InputDiff];
const OUTPUTS: [TenGod; 2] = [TenGod::OutputSame, TenGod::OutputDiff];
const ASSERTS: [TenGod; 2] = [TenGod::AssertSame, TenGod::AssertDiff];
const PRESSURES: [TenGod; 2] = [TenGod::PressureSame, TenGod::PressureDiff];

/// Config-independent facts a chart contributes to each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AxisInputs {
    /// Month branch shares the day stem's element or generates it.
    pub season_support: bool,
    pub peers: u8,
    pub inputs: u8,
    pub outputs: u8,
    pub asserts: u8,
    pub pressures: u8,
    pub present_elements: u8,
    pub max_element_count: u8,
}

impl AxisInputs {
    pub fn from_tallies(elements: &ElementTally, ten_gods: &TenGodTally, pillars: &FourPillars) -> Self {
        let day = pillars.day_stem().element();
        let month = pillars.month.branch.element();
        Self {
            season_support: month == day || month.generates() == day,
            peers: ten_gods.sum_of(&PEERS),
            inputs: ten_gods.sum_of(&INPUTS),
            outputs: ten_gods.sum_of(&OUTPUTS),
            asserts: ten_gods.sum_of(&ASSERTS),
            pressures: ten_gods.sum_of(&PRESSURES),
            present_elements: elements.present_count(),
            max_element_count: elements.max_count(),
        }
    }
}

/// Weighted scores for every axis under one config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AxisScores {
    pub energy: u32,
    pub practical: u32,
    pub ideal: u32,
    pub rule: u32,
    pub harmony: u32,
    pub balance: u32,
}

/// Weight the axis inputs.
pub fn score_inputs(config: &ClassifierConfig, x: &AxisInputs) -> AxisScores {
    let e = &config.energy;
    let l = &config.lifestyle;

    let season = if x.season_support { e.season_bonus } else { 0 };
    let energy = season
        + e.peer_weight * x.peers as u32
        + e.input_weight * x.inputs as u32;

    let practical = config.perception.practical_weight * (x.outputs + x.asserts) as u32;
    let ideal = config.perception.ideal_weight * x.inputs as u32;

    let rule = config.judgement.rule_weight * x.pressures as u32;
    let harmony = config.judgement.harmony_weight * (x.outputs + x.peers) as u32;

    let breadth = (x.present_elements as u32).saturating_sub(l.breadth_floor as u32);
    let no_excess = u32::from(x.max_element_count < l.excess_count);
    let balance = breadth + no_excess;

    AxisScores {
        energy,
        practical,
        ideal,
        rule,
        harmony,
        balance,
    }
}

/// Score all four axes for a chart.
pub fn score_axes(
    config: &ClassifierConfig,
    elements: &ElementTally,
    ten_gods: &TenGodTally,
    pillars: &FourPillars,
) -> AxisScores {
    score_inputs(config, &AxisInputs::from_tallies(elements, ten_gods, pillars))
}

/// Turn scores into letters.
pub fn decide(config: &ClassifierConfig, s: &AxisScores) -> TypeCode {
    TypeCode {
        energy: if s.energy > config.energy.threshold { Energy::W } else { Energy::N },
        perception: if s.ideal > s.practical { Perception::G } else { Perception::S },
        judgement: if s.rule > s.harmony { Judgement::I } else { Judgement::H },
        lifestyle: if s.balance >= config.lifestyle.threshold {
            Lifestyle::J
        } else {
            Lifestyle::Y
        },
    }
}

/// Classify with an explicit config.
pub fn classify_with(
    config: &ClassifierConfig,
    elements: &ElementTally,
    ten_gods: &TenGodTally,
    pillars: &FourPillars,
) -> TypeCode {
    decide(config, &score_axes(config, elements, ten_gods, pillars))
}

/// Classify with the calibrated default config.
pub fn classify(elements: &ElementTally, ten_gods: &TenGodTally, pillars: &FourPillars) -> TypeCode {
    classify_with(&ClassifierConfig::default(), elements, ten_gods, pillars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{compute_pillars, tally};
    use saju_time::{HourSlot, SolarDate, TimeSlot};

    fn code_for(y: i32, m: u32, d: u32, slot: u8) -> (AxisScores, TypeCode) {
        let p = compute_pillars(
            SolarDate::new(y, m, d).unwrap(),
            TimeSlot::Known(HourSlot::new(slot).unwrap()),
        )
        .unwrap();
        let (el, tg) = tally(&p);
        let config = ClassifierConfig::default();
        let scores = score_axes(&config, &el, &tg, &p);
        (scores, decide(&config, &scores))
    }

    #[test]
    fn gapjin_2024_scores() {
        // 甲辰 丙寅 甲辰 甲子: 寅 (Wood) month supports 甲 (Wood).
        let (s, code) = code_for(2024, 2, 10, 0);
        assert_eq!(s.energy, 3 + 3 + 1);
        assert_eq!(s.practical, 1 + 2);
        assert_eq!(s.ideal, 2);
        assert_eq!(s.rule, 0);
        assert_eq!(s.harmony, 1 + 3);
        assert_eq!(s.balance, 1);
        assert_eq!(code.to_string(), "WSHY");
    }

    #[test]
    fn j2000_scores() {
        let (s, code) = code_for(2000, 1, 1, 6);
        // 子 (Water) month does not support 戊 (Earth).
        assert_eq!(s.energy, 2 + 3);
        assert_eq!(code.to_string(), "WGHY");
    }

    #[test]
    fn balanced_chart_is_j() {
        // 癸卯 乙丑 己巳 庚午: all five elements, none above two.
        let (s, code) = code_for(2024, 1, 6, 6);
        assert_eq!(s.balance, 3);
        assert_eq!(code.to_string(), "WGIJ");
    }

    #[test]
    fn weak_chart_is_n() {
        let (s, code) = code_for(2024, 1, 5, 6);
        assert_eq!(s.energy, 3);
        assert_eq!(code.to_string(), "NSIY");
    }

    #[test]
    fn energy_threshold_is_strict() {
        let config = ClassifierConfig::default();
        let mut s = AxisScores {
            energy: config.energy.threshold,
            practical: 0,
            ideal: 0,
            rule: 0,
            harmony: 0,
            balance: 0,
        };
        assert_eq!(decide(&config, &s).energy, Energy::N);
        s.energy += 1;
        assert_eq!(decide(&config, &s).energy, Energy::W);
    }

    #[test]
    fn ties_go_to_second_letter_on_comparison_axes() {
        let config = ClassifierConfig::default();
        let s = AxisScores {
            energy: 0,
            practical: 4,
            ideal: 4,
            rule: 2,
            harmony: 2,
            balance: 0,
        };
        let code = decide(&config, &s);
        assert_eq!(code.perception, Perception::S);
        assert_eq!(code.judgement, Judgement::H);
    }

    #[test]
    fn legacy_lifestyle_needs_full_balance() {
        let legacy = ClassifierConfig::legacy();
        let inputs = AxisInputs {
            season_support: false,
            peers: 0,
            inputs: 0,
            outputs: 0,
            asserts: 0,
            pressures: 0,
            present_elements: 5,
            max_element_count: 3,
        };
        let s = score_inputs(&legacy, &inputs);
        assert_eq!(s.balance, 2);
        assert_eq!(decide(&legacy, &s).lifestyle, Lifestyle::Y);
        assert_eq!(decide(&ClassifierConfig::default(), &s).lifestyle, Lifestyle::J);
    }
}

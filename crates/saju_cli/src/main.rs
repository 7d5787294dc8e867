use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use saju_base::{ALL_BRANCHES, ALL_ELEMENTS, ALL_ROLES, ALL_STEMS, ten_gods};
use saju_classify::{
    ALL_AXES, ALL_TYPE_CODES, Axis, CalibrationReport, CalibrationSample, CalibrationSpan,
    ClassifierConfig, CoverageBounds, tune,
};
use saju_rs::{
    BirthInput, CalendarKind, Engine, EngineConfig, LunarConverter, NoLunarConverter, Reading,
    TableConverter,
};
use saju_time::{HourSlot, TimeSlot, parse_date_parts};

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillars calendar engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Year, month, day and hour pillars for a birth date
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Element and ten-god counts for a birth date
    Tally {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Four-letter type code for a birth date
    Classify {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Run the coverage check over a span of birth years
    Calibrate {
        /// First birth year
        #[arg(long, default_value = "1940")]
        from: i32,
        /// Last birth year
        #[arg(long, default_value = "2009")]
        to: i32,
        /// Sample every N-th (day, slot) point
        #[arg(long, default_value = "61")]
        stride: usize,
        /// Largest share any one code may take
        #[arg(long, default_value = "0.18")]
        max_share: f64,
        /// Smallest share either letter of an axis may take
        #[arg(long, default_value = "0.25")]
        min_axis_share: f64,
        /// Check the legacy rule set instead of the calibrated one
        #[arg(long, conflicts_with = "config")]
        legacy: bool,
        /// Sweep the energy and lifestyle thresholds for the best passing pair
        #[arg(long)]
        tune: bool,
        /// Classifier config (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Stems, branches and the element cycles
    Elements {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Hour slot index (0-11)
    #[arg(long, conflicts_with = "time")]
    slot: Option<u8>,
    /// Local clock time (HH:MM); unknown if neither --slot nor --time is given
    #[arg(long)]
    time: Option<String>,
    /// The date is a lunar date
    #[arg(long)]
    lunar: bool,
    /// The lunar month is a leap month
    #[arg(long, requires = "lunar")]
    leap: bool,
    /// Lunar conversion table (TOML)
    #[arg(long)]
    lunar_table: Option<PathBuf>,
    /// Classifier config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the reading as JSON
    #[arg(long)]
    json: bool,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn load_classifier(path: Option<&PathBuf>) -> ClassifierConfig {
    match path {
        Some(p) => ClassifierConfig::load(p).unwrap_or_else(|e| fail(e)),
        None => ClassifierConfig::default(),
    }
}

fn birth_input(args: &BirthArgs) -> BirthInput {
    let (year, month, day) = parse_date_parts(&args.date).unwrap_or_else(|e| fail(e));
    let time = match (args.slot, &args.time) {
        (Some(slot), _) => HourSlot::new(slot)
            .map(TimeSlot::Known)
            .unwrap_or_else(|e| fail(e)),
        (None, Some(t)) => t.parse::<TimeSlot>().unwrap_or_else(|e| fail(e)),
        (None, None) => TimeSlot::Unknown,
    };
    let calendar = if args.lunar {
        CalendarKind::Lunar {
            leap_month: args.leap,
        }
    } else {
        CalendarKind::Solar
    };
    BirthInput {
        year,
        month,
        day,
        time,
        calendar,
    }
}

fn build_engine(args: &BirthArgs) -> Engine {
    let config = EngineConfig {
        classifier: load_classifier(args.config.as_ref()),
        ..EngineConfig::default()
    };
    tracing::debug!(lunar_table = ?args.lunar_table, config = ?args.config, "building engine");
    let converter: Box<dyn LunarConverter> = match &args.lunar_table {
        Some(path) => Box::new(TableConverter::load(path).unwrap_or_else(|e| fail(e))),
        None => Box::new(NoLunarConverter),
    };
    Engine::new(config, converter).unwrap_or_else(|e| fail(e))
}

fn read(args: &BirthArgs) -> Reading {
    let engine = build_engine(args);
    engine
        .analyze(&birth_input(args))
        .unwrap_or_else(|e| fail(e))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn print_header(r: &Reading) {
    let slot = r.resolved_slot;
    let (start, end) = slot.window();
    let known = if r.input.time.is_known() { "" } else { ", time unknown" };
    println!(
        "Solar date: {}  Hour slot: {} ({start}-{end}{known})",
        r.solar_date,
        slot.index()
    );
}

fn print_pillars(r: &Reading) {
    print_header(r);
    for role in ALL_ROLES {
        let p = r.pillars.get(role);
        println!(
            "  {:<6} {}  {}{}  {} {} / {} {}",
            role.name(),
            p,
            p.stem.hangul(),
            p.branch.hangul(),
            p.stem.element().name(),
            p.stem.polarity().name(),
            p.branch.element().name(),
            p.branch.zodiac(),
        );
    }
}

fn print_tally(r: &Reading) {
    print_header(r);
    println!("  Pillars: {}", r.pillars);
    println!("  Elements:");
    for (element, count) in r.elements.iter() {
        println!("    {} {:<6} {count}", element.hanja(), element.name());
    }
    println!("  Ten gods (day stem {}):", r.pillars.day_stem().hanja());
    for (category, count) in r.ten_gods.iter().filter(|(_, c)| *c > 0) {
        println!("    {:<4} {:<14} {count}", category.hangul(), category.name());
    }
    println!("  Glyphs:");
    for (placed, category) in ten_gods(&r.pillars) {
        println!(
            "    {:<6} {}  {}",
            placed.role.name(),
            placed.glyph.hanja(),
            category.name()
        );
    }
}

fn print_classification(r: &Reading) {
    print_header(r);
    println!("  Pillars: {}", r.pillars);
    let s = &r.scores;
    println!("  Type code: {}", r.type_code);
    println!("    Energy      {}  score {}", r.type_code.letter(Axis::Energy), s.energy);
    println!(
        "    Perception  {}  practical {} / ideal {}",
        r.type_code.letter(Axis::Perception),
        s.practical,
        s.ideal
    );
    println!(
        "    Judgement   {}  rule {} / harmony {}",
        r.type_code.letter(Axis::Judgement),
        s.rule,
        s.harmony
    );
    println!("    Lifestyle   {}  balance {}", r.type_code.letter(Axis::Lifestyle), s.balance);
}

fn print_report(report: &CalibrationReport, bounds: &CoverageBounds) {
    let c = &report.config;
    println!(
        "Samples: {}  (energy threshold {}, lifestyle threshold {})",
        report.samples, c.energy.threshold, c.lifestyle.threshold
    );
    for code in ALL_TYPE_CODES {
        let share = report.share(code);
        let bar = "#".repeat((share * 200.0).round() as usize);
        println!("  {code}  {:>7}  {:>5.1}%  {bar}", report.count(code), share * 100.0);
    }
    for axis in ALL_AXES {
        let [first, second] = axis.letters();
        let share = report.first_letter_share(axis);
        println!(
            "  {:<10}  {first} {:>5.1}%  {second} {:>5.1}%",
            axis.name(),
            share * 100.0,
            (1.0 - share) * 100.0
        );
    }
    let violations = report.check(bounds);
    if violations.is_empty() {
        println!("Coverage: PASS");
    } else {
        println!("Coverage: FAIL");
        for v in &violations {
            println!("  - {v}");
        }
    }
}

#[derive(Serialize)]
struct SymbolRow {
    hanja: &'static str,
    hangul: &'static str,
    element: &'static str,
    polarity: &'static str,
}

#[derive(Serialize)]
struct ElementRow {
    name: &'static str,
    hanja: &'static str,
    generates: &'static str,
    overcomes: &'static str,
}

#[derive(Serialize)]
struct SymbolTables {
    elements: Vec<ElementRow>,
    stems: Vec<SymbolRow>,
    branches: Vec<SymbolRow>,
}

fn symbol_tables() -> SymbolTables {
    SymbolTables {
        elements: ALL_ELEMENTS
            .iter()
            .map(|e| ElementRow {
                name: e.name(),
                hanja: e.hanja(),
                generates: e.generates().name(),
                overcomes: e.overcomes().name(),
            })
            .collect(),
        stems: ALL_STEMS
            .iter()
            .map(|s| SymbolRow {
                hanja: s.hanja(),
                hangul: s.hangul(),
                element: s.element().name(),
                polarity: s.polarity().name(),
            })
            .collect(),
        branches: ALL_BRANCHES
            .iter()
            .map(|b| SymbolRow {
                hanja: b.hanja(),
                hangul: b.hangul(),
                element: b.element().name(),
                polarity: b.polarity().name(),
            })
            .collect(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pillars { birth } => {
            let r = read(&birth);
            if birth.json {
                print_json(&r);
            } else {
                print_pillars(&r);
            }
        }

        Commands::Tally { birth } => {
            let r = read(&birth);
            if birth.json {
                print_json(&r);
            } else {
                print_tally(&r);
            }
        }

        Commands::Classify { birth } => {
            let r = read(&birth);
            if birth.json {
                print_json(&r);
            } else {
                print_classification(&r);
            }
        }

        Commands::Calibrate {
            from,
            to,
            stride,
            max_share,
            min_axis_share,
            legacy,
            tune: sweep,
            config,
            json,
        } => {
            let base = if legacy {
                ClassifierConfig::legacy()
            } else {
                load_classifier(config.as_ref())
            };
            let bounds = CoverageBounds {
                max_code_share: max_share,
                min_axis_share,
            };
            let span = CalibrationSpan {
                first_year: from,
                last_year: to,
                stride,
            };
            let sample = CalibrationSample::collect(span).unwrap_or_else(|e| fail(e));
            let report = if sweep {
                tune(&base, &sample, &bounds)
                    .unwrap_or_else(|| fail("no threshold pair satisfies the coverage bounds"))
            } else {
                sample.report(&base)
            };
            let passed = report.passes(&bounds);
            if json {
                print_json(&report);
            } else {
                print_report(&report, &bounds);
                if sweep {
                    match report.config.to_toml_string() {
                        Ok(text) => println!("\n{text}"),
                        Err(e) => fail(e),
                    }
                }
            }
            if !passed {
                std::process::exit(1);
            }
        }

        Commands::Elements { json } => {
            let tables = symbol_tables();
            if json {
                print_json(&tables);
                return;
            }
            println!("Elements:");
            for e in &tables.elements {
                println!(
                    "  {} {:<6} generates {:<6} overcomes {}",
                    e.hanja, e.name, e.generates, e.overcomes
                );
            }
            println!("Stems:");
            for s in &tables.stems {
                println!("  {} {}  {:<6} {}", s.hanja, s.hangul, s.element, s.polarity);
            }
            println!("Branches:");
            for b in &tables.branches {
                println!("  {} {}  {:<6} {}", b.hanja, b.hangul, b.element, b.polarity);
            }
        }
    }
}

use clap::{Parser, Subcommand};
use ziping_base::{FourPillars, Gender, Pillar, assess_strength, liu_nian_overlay};
use ziping_engine::{ChartError, compute_da_yun, resolve_four_pillars};
use ziping_solar::SolarTermCalculator;
use ziping_time::CivilTime;

#[derive(Parser)]
#[command(name = "ziping", about = "Four-Pillars chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the four pillars of a birth instant
    Pillars {
        /// Birth instant, UTC+8 (YYYY-MM-DDThh:mm)
        #[arg(long)]
        birth: String,
        /// Hour-branch index 0-11; derived from the clock hour if omitted
        #[arg(long)]
        hour_index: Option<u8>,
    },
    /// List the 24 solar-term moments of a civil year
    Terms {
        /// Civil year (1900-2100)
        year: i32,
    },
    /// Compute the decade progression of a chart
    Dayun {
        /// Birth instant, UTC+8 (YYYY-MM-DDThh:mm)
        #[arg(long)]
        birth: String,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
        /// Number of decade steps (default 8)
        #[arg(long, default_value = "8")]
        steps: u16,
        /// Hour-branch index 0-11; derived from the clock hour if omitted
        #[arg(long)]
        hour_index: Option<u8>,
    },
    /// Score a target year's annual overlay against a chart
    Liunian {
        /// Birth instant, UTC+8 (YYYY-MM-DDThh:mm)
        #[arg(long)]
        birth: String,
        /// Gender: male or female (fixes the active decade)
        #[arg(long)]
        gender: String,
        /// Target calendar year
        #[arg(long)]
        year: i32,
        /// Hour-branch index 0-11; derived from the clock hour if omitted
        #[arg(long)]
        hour_index: Option<u8>,
    },
    /// Assess day-master strength for a chart
    Strength {
        /// Birth instant, UTC+8 (YYYY-MM-DDThh:mm)
        #[arg(long)]
        birth: String,
        /// Hour-branch index 0-11; derived from the clock hour if omitted
        #[arg(long)]
        hour_index: Option<u8>,
    },
}

fn parse_civil(s: &str) -> Result<CivilTime, String> {
    // Parse "YYYY-MM-DDThh:mm" or "YYYY-MM-DDThh:mm:ss"
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || !(2..=3).contains(&time_parts.len()) {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = if time_parts.len() == 3 {
        time_parts[2].parse().map_err(|e| format!("{e}"))?
    } else {
        0.0
    };
    Ok(CivilTime::new(year, month, day, hour, minute, second))
}

fn require_civil(s: &str) -> CivilTime {
    parse_civil(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_gender(s: &str) -> Gender {
    match s.to_lowercase().as_str() {
        "male" | "m" => Gender::Male,
        "female" | "f" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s} (male or female)");
            std::process::exit(1);
        }
    }
}

/// Hour-branch index from the clock hour: 23:00-00:59 is Zi (0), each later
/// branch spans two hours.
fn hour_index_from_clock(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}

fn resolve_or_exit(calc: &SolarTermCalculator, birth: &CivilTime, hour_index: Option<u8>) -> FourPillars {
    let idx = hour_index.unwrap_or_else(|| hour_index_from_clock(birth.hour));
    resolve_four_pillars(calc, birth, idx).unwrap_or_else(|e: ChartError| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn print_pillar(p: &Pillar) {
    println!(
        "{:<6} {} ({}-{})",
        p.role.name(),
        format!("{}{}", p.stem.chinese(), p.branch.chinese()),
        p.stem.name(),
        p.branch.name()
    );
}

fn main() {
    let cli = Cli::parse();
    let calc = SolarTermCalculator::new();

    match cli.command {
        Commands::Pillars { birth, hour_index } => {
            let birth = require_civil(&birth);
            let chart = resolve_or_exit(&calc, &birth, hour_index);
            println!("Birth: {birth}");
            for p in chart.pillars() {
                print_pillar(p);
            }
        }
        Commands::Terms { year } => {
            let terms = calc.terms_for_year(year).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            for t in terms {
                let kind = if t.term.is_jie() { "Jie" } else { "Qi" };
                println!(
                    "{:>2}  {:<12} {:<4} {}",
                    t.term.index(),
                    t.term.name(),
                    kind,
                    t.time
                );
            }
        }
        Commands::Dayun {
            birth,
            gender,
            steps,
            hour_index,
        } => {
            let birth = require_civil(&birth);
            let gender = parse_gender(&gender);
            let chart = resolve_or_exit(&calc, &birth, hour_index);
            let plan = compute_da_yun(&calc, &chart, gender, steps).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            println!(
                "Direction: {}  starting age: {}",
                plan.direction.name(),
                plan.start_age
            );
            for s in &plan.steps {
                println!(
                    "{:>2}  {}  ages {:>3}-{:<3} {}",
                    s.order,
                    s.pillar.chinese(),
                    s.start_age,
                    s.end_age,
                    s.ten_god.name()
                );
            }
        }
        Commands::Liunian {
            birth,
            gender,
            year,
            hour_index,
        } => {
            let birth = require_civil(&birth);
            let gender = parse_gender(&gender);
            let chart = resolve_or_exit(&calc, &birth, hour_index);
            let plan = compute_da_yun(&calc, &chart, gender, 8).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            // Active step by age in the target year; fall back to the first.
            let age = (year - birth.year).max(0) as u16;
            let active = plan
                .steps
                .iter()
                .find(|s| s.start_age <= age && age <= s.end_age)
                .unwrap_or(&plan.steps[0]);
            let overlay = liu_nian_overlay(&chart, active, year);
            println!(
                "{}: {} ({})  score {}",
                year,
                overlay.pillar.chinese(),
                overlay.ten_god.name(),
                overlay.score
            );
            for f in &overlay.findings {
                let companion = f
                    .companion
                    .map(|c| format!(" + {}", c.name()))
                    .unwrap_or_default();
                println!(
                    "  {:<16} vs {}{}  {:+}",
                    f.kind.name(),
                    f.target.name(),
                    companion,
                    f.weight
                );
            }
        }
        Commands::Strength { birth, hour_index } => {
            let birth = require_civil(&birth);
            let chart = resolve_or_exit(&calc, &birth, hour_index);
            let a = assess_strength(&chart);
            println!(
                "Day master: {} ({})",
                chart.day_master().chinese(),
                chart.day_master().element().western_name()
            );
            println!(
                "Score: {} (month {}, stems {}, hidden {})",
                a.score, a.season_points, a.stem_points, a.hidden_points
            );
            println!("Verdict: {}", a.verdict.name());
            let fav: Vec<&str> = a.favorable.iter().map(|e| e.western_name()).collect();
            let unf: Vec<&str> = a.unfavorable.iter().map(|e| e.western_name()).collect();
            println!("Favorable: {}", fav.join(", "));
            println!("Unfavorable: {}", unf.join(", "));
        }
    }
}

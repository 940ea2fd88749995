use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::info;

use motor_sim::curve::{stats, CurveStatistics};
use motor_sim::io::csv::{read_points_file, write_trajectory_file};
use motor_sim::io::json::{write_json, write_summary, FlightReport};
use motor_sim::io::FlightConfig;
use motor_sim::physics::gravity::G0;
use motor_sim::report::LogReporter;
use motor_sim::sim::{simulate_traced, FlightSummary};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Standardized statistics of a thrust curve
    Stats {
        /// CSV with `time,thrust` columns
        points: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Simulate a vertical flight on a thrust curve
    Simulate {
        /// CSV with `time,thrust` columns
        points: PathBuf,

        /// TOML flight file with [rocket] and [motor] tables
        flight: PathBuf,

        /// Write every integration step to this CSV file
        #[arg(short, long)]
        trace: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }

    pretty_env_logger::init();

    match Cli::parse().command {
        Command::Stats { points, json } => run_stats(points, json),
        Command::Simulate {
            points,
            flight,
            trace,
            json,
        } => run_simulate(points, flight, trace, json),
    }
}

fn run_stats(path: PathBuf, json: bool) -> anyhow::Result<()> {
    let points = read_points_file(&path).with_context(|| format!("reading {}", path.display()))?;
    let Some(s) = stats(&points, &Default::default(), &mut LogReporter) else {
        bail!("{} holds no usable thrust data", path.display());
    };

    if json {
        write_json(io::stdout().lock(), &s)?;
    } else {
        print_statistics(&path.display().to_string(), &s);
    }
    Ok(())
}

fn run_simulate(
    points_path: PathBuf,
    flight_path: PathBuf,
    trace: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let points = read_points_file(&points_path)
        .with_context(|| format!("reading {}", points_path.display()))?;
    let config = FlightConfig::from_file(&flight_path)
        .with_context(|| format!("reading {}", flight_path.display()))?;

    let mut reporter = LogReporter;
    let Some(statistics) = stats(&points, &config.analysis, &mut reporter) else {
        bail!("{} holds no usable thrust data", points_path.display());
    };
    let Some(flight) = simulate_traced(&config.inputs(), &points, &config.launch, &mut reporter) else {
        bail!("simulation failed, see warnings above");
    };

    if let Some(path) = trace {
        write_trajectory_file(&path, &flight.trajectory)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote {} trajectory rows to {}", flight.trajectory.len(), path.display());
    }

    let report = FlightReport {
        rocket: config.rocket.name.as_deref(),
        motor: config.motor.designation.as_deref(),
        designation: statistics.designation(),
        statistics: &statistics,
        summary: &flight.summary,
    };

    if json {
        write_summary(io::stdout().lock(), &report)?;
    } else {
        print_statistics(&points_path.display().to_string(), &statistics);
        print_flight(&report);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

fn print_statistics(source: &str, s: &CurveStatistics) {
    println!();
    println!("====================================================================");
    println!(
        "  THRUST CURVE — {}  ({})",
        source,
        s.designation().unwrap_or_else(|| "unclassified".into())
    );
    println!("====================================================================");
    println!();
    println!(
        "  Points:        {:>8}         Max time:     {:>8.3} s",
        s.point_count, s.max_time
    );
    println!(
        "  Max thrust:    {:>8.1} N       Avg thrust:   {:>8.1} N",
        s.max_thrust, s.avg_thrust
    );
    println!(
        "  Burn start:    {:>8.3} s       Burn end:     {:>8.3} s",
        s.burn_start, s.burn_end
    );
    println!(
        "  Burn time:     {:>8.3} s       Impulse:      {:>8.1} N·s",
        s.burn_time, s.total_impulse
    );
    println!();
}

fn print_flight(report: &FlightReport<'_>) {
    let s: &FlightSummary = report.summary;
    let inputs = &s.inputs;

    println!("  Flight — {} on {}", report.rocket.unwrap_or("rocket"), report.motor.unwrap_or("motor"));
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Launch mass:   {:>8.2} kg      Burnout mass: {:>8.2} kg",
        inputs.launch_mass(),
        inputs.burnout_mass()
    );
    println!(
        "  Motor mass:    {:>8.3} kg      Propellant:   {:>8.3} kg",
        inputs.motor.initial_mass,
        inputs.motor.mass_loss()
    );
    println!(
        "  Temperature:   {:>8.1} °C      Pad altitude: {:>8.0} m",
        inputs.conditions.temperature_c, inputs.conditions.base_altitude_m
    );
    println!();

    match s.liftoff_time {
        Some(t) => println!("  LIFTOFF   t={:>6.2}s", t),
        None => println!("  LIFTOFF   never (thrust below weight)"),
    }
    match s.guide_velocity {
        Some(v) => println!("  GUIDE     vel={:>7.1}m/s", v),
        None => println!("  GUIDE     not cleared"),
    }
    if let Some(d) = s.stable_velocity_distance {
        println!(
            "  STABLE    {:.0} m/s reached at alt={:>6.1}m",
            inputs.conditions.stable_velocity_ms, d
        );
    }
    println!(
        "  BURNOUT   t={:>6.2}s   alt={:>8.0}m",
        s.burnout_time, s.burnout_altitude
    );
    println!(
        "  APOGEE    t={:>6.2}s   alt={:>8.0}m",
        s.apogee_time, s.max_altitude
    );
    println!();
    println!(
        "  Max velocity:  {:>8.1} m/s     Max accel:    {:>8.1} m/s^2 ({:.1} g)",
        s.max_velocity,
        s.max_acceleration,
        s.max_acceleration / G0
    );
    println!(
        "  Impulse:       {:>8.1} N·s     Deviation:    {:>8.3} %",
        s.integrated_impulse,
        s.impulse_deviation() * 100.0
    );
    println!("====================================================================");
    println!();
}

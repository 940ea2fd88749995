use std::env;

use anyhow::{anyhow, Context};
use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use motor_sim::curve::{fit, normalize, DataPoint, ThrustCurve};
use motor_sim::io::csv::{read_points, read_points_file};
use motor_sim::io::FlightConfig;
use motor_sim::report::LogReporter;
use motor_sim::sim::{simulate_traced, Flight};

const DEFAULT_POINTS: &str = include_str!("../../data/n1502.csv");
const DEFAULT_FLIGHT: &str = include_str!("../../data/flight.toml");

/// `motor-viz [points.csv [flight.toml]]`; without arguments the bundled
/// N-class flight is shown.
fn main() -> anyhow::Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();

    let mut args = env::args().skip(1);
    let points = match args.next() {
        Some(path) => read_points_file(&path).with_context(|| format!("reading {path}"))?,
        None => read_points(DEFAULT_POINTS.as_bytes())?,
    };
    let config = match args.next() {
        Some(path) => FlightConfig::from_file(&path).with_context(|| format!("reading {path}"))?,
        None => FlightConfig::from_toml_str(DEFAULT_FLIGHT)?,
    };

    let mut reporter = LogReporter;
    let samples = normalize(&points, &config.analysis, &mut reporter)
        .ok_or_else(|| anyhow!("no usable thrust data"))?;
    let curve = fit(&samples, &config.analysis, &mut reporter)
        .ok_or_else(|| anyhow!("thrust curve cannot be fitted"))?;
    let flight = simulate_traced(&config.inputs(), &points, &config.launch, &mut reporter)
        .ok_or_else(|| anyhow!("simulation failed, see warnings above"))?;

    let title = config
        .motor
        .designation
        .clone()
        .unwrap_or_else(|| "motor".into());
    let app = FlightViz { title, samples, curve, flight };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Motor Flight Simulator", options, Box::new(|_| Ok(Box::new(app))))
        .map_err(|e| anyhow!("{e}"))
}

struct FlightViz {
    title: String,
    samples: Vec<DataPoint>,
    curve: ThrustCurve,
    flight: Flight,
}

impl eframe::App for FlightViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let summary = &self.flight.summary;
        let trajectory = &self.flight.trajectory;
        let step = (trajectory.len() / 2000).max(1);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Motor: {}", self.title));
            ui.label(format!(
                "Apogee: {:.0} m at {:.1} s  |  Max velocity: {:.1} m/s  |  Guide: {}  |  Burnout: {:.2} s",
                summary.max_altitude,
                summary.apogee_time,
                summary.max_velocity,
                summary
                    .guide_velocity
                    .map_or("not cleared".to_string(), |v| format!("{v:.1} m/s")),
                summary.burnout_time,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Thrust vs Time
                ui.vertical(|ui| {
                    ui.label("Thrust (N)");
                    let fitted: PlotPoints = self
                        .curve
                        .breakpoints()
                        .map(|(t, f)| [t, f])
                        .collect();
                    let samples: PlotPoints = self.samples.iter().map(|p| [p.time, p.thrust]).collect();
                    Plot::new("thrust")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Fitted", fitted));
                            plot_ui.points(Points::new("Samples", samples).radius(3.0));
                        });
                });

                // Altitude vs Time
                ui.vertical(|ui| {
                    ui.label("Altitude (m)");
                    let points: PlotPoints = trajectory
                        .iter()
                        .step_by(step)
                        .map(|s| [s.time, s.altitude])
                        .collect();
                    Plot::new("altitude")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Altitude", points));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Velocity vs Time
                ui.vertical(|ui| {
                    ui.label("Velocity (m/s)");
                    let points: PlotPoints = trajectory
                        .iter()
                        .step_by(step)
                        .map(|s| [s.time, s.velocity])
                        .collect();
                    Plot::new("velocity")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Velocity", points));
                        });
                });

                // Acceleration vs Time
                ui.vertical(|ui| {
                    ui.label("Acceleration (m/s^2)");
                    let points: PlotPoints = trajectory
                        .iter()
                        .step_by(step)
                        .map(|s| [s.time, s.acceleration])
                        .collect();
                    Plot::new("acceleration")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Acceleration", points));
                        });
                });
            });
        });
    }
}

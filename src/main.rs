use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::Parser;
use depot_tour::dataset;
use depot_tour::models::Point;
use depot_tour::report::{FuelProfile, TourReport};
use depot_tour::solver::{LocalSearchStrategy, SolverConfig, TourSolver};
use depot_tour::Result;
use log::error;

#[derive(Parser)]
#[command(name = "depot-tour")]
#[command(about = "Plan the shortest closed delivery tour from a depot")]
#[command(version)]
struct Cli {
    /// JSON file with the points (index 0 = depot); built-in instance if omitted
    #[arg(short, long)]
    points: Option<PathBuf>,

    /// Search time budget in seconds
    #[arg(short, long, default_value_t = 10.0)]
    time_limit: f64,

    /// Improvement strategy
    #[arg(short, long, value_enum, default_value_t = LocalSearchStrategy::GuidedLocalSearch)]
    strategy: LocalSearchStrategy,

    /// Disable Or-opt segment relocation during guided local search
    #[arg(long)]
    no_or_opt: bool,

    /// Cap on guided local search penalty rounds
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Fuel consumption in liters per 100 km
    #[arg(long, default_value_t = 12.0)]
    fuel_consumption: f64,

    /// Fuel price per liter
    #[arg(long, default_value_t = 43.50)]
    fuel_price: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let points = match &cli.points {
        Some(path) => load_points(path)?,
        None => dataset::turkey(),
    };

    let time_limit = if cli.time_limit.is_finite() && cli.time_limit > 0.0 {
        Duration::try_from_secs_f64(cli.time_limit).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    };
    let mut config = SolverConfig::default()
        .with_time_limit(time_limit)
        .with_strategy(cli.strategy)
        .with_or_opt(!cli.no_or_opt);
    if let Some(max) = cli.max_iterations {
        config = config.with_max_iterations(max);
    }

    let solver = TourSolver::new(config);
    log::info!(
        "main: solving points={} strategy={:?} or_opt={} time_limit={:?}",
        points.len(),
        solver.config().strategy,
        solver.config().or_opt,
        solver.config().time_limit
    );
    let (matrix, solution) = solver.solve_points(&points)?;

    let fuel = FuelProfile {
        liters_per_100km: cli.fuel_consumption,
        price_per_liter: cli.fuel_price,
    };
    let report = TourReport::new(&points, &matrix, &solution, fuel);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn load_points(path: &Path) -> Result<Vec<Point>> {
    let text = fs::read_to_string(path)?;
    let points = serde_json::from_str(&text)?;
    Ok(points)
}

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anstream::eprintln;
use anstream::println;
use clap::Parser;
use hrsw::Stopwatch;
use human_duration::human_duration;
use log::debug;
use owo_colors::OwoColorize;
use thousands::Separable;
use tracing_subscriber::EnvFilter;

use quest::algorithms::Algorithm;
use quest::problem::Problem;
use quest::problems::quest::ActionCost;
use quest::problems::quest::ActionCosts;
use quest::problems::quest::QuestAction;
use quest::problems::quest::QuestProblem;
use quest::replay;
use quest::replay::Frame;
use quest::replay::Replay;
use quest::replay::ReplayError;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Collects every medal in a quest using an uninformed search, then replays
/// the solution.
#[derive(Parser, Debug)]
#[clap(long_version = quest::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quest file. One row per line, `W` for walls, `M` for medals and `S`
    /// for the start.
    #[arg()]
    pub quest: PathBuf,

    #[arg(value_enum)]
    pub algorithm: Algorithm,

    #[arg(long, env = "QUEST_COST_NORTH", default_value_t = 1)]
    pub cost_north: ActionCost,
    #[arg(long, env = "QUEST_COST_SOUTH", default_value_t = 1)]
    pub cost_south: ActionCost,
    #[arg(long, env = "QUEST_COST_EAST", default_value_t = 1)]
    pub cost_east: ActionCost,
    #[arg(long, env = "QUEST_COST_WEST", default_value_t = 1)]
    pub cost_west: ActionCost,

    /// Print every step of the replay, not just the last one.
    #[arg(long)]
    pub animate: bool,
    /// Pause between animation steps.
    #[arg(long, env = "QUEST_DELAY_MS", default_value_t = 90u64)]
    pub delay_ms: u64,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

impl Args {
    fn costs(&self) -> ActionCosts {
        ActionCosts {
            east: self.cost_east,
            west: self.cost_west,
            south: self.cost_south,
            north: self.cost_north,
        }
    }
}

fn paint(frame: &Frame) -> String {
    let header = match frame.action {
        None => format!("Start at {}", frame.position),
        Some(a) => format!("Step {}: {a} to {}", frame.step, frame.position),
    };

    let mut out = format!("{} ({} medals left)\n", header.bold(), frame.medals_left);
    out.reserve(frame.grid.len() * 4);
    for ch in frame.grid.chars() {
        let cell = match ch {
            replay::WALL => ch.blue().to_string(),
            replay::MEDAL => ch.yellow().to_string(),
            replay::AGENT => ch.bright_yellow().bold().to_string(),
            replay::FLOOR => ch.dimmed().to_string(),
            _ => ch.to_string(),
        };
        out.push_str(&cell);
    }
    out
}

fn show(problem: &QuestProblem, actions: &[QuestAction], args: &Args) -> Result<(), ReplayError> {
    let replay = Replay::new(problem, actions);
    if !args.animate {
        println!("{}", paint(&replay.final_frame()?));
        return Ok(());
    }

    let delay = Duration::from_millis(args.delay_ms);
    for frame in replay {
        let frame = frame?;
        if frame.step > 0 {
            std::thread::sleep(delay);
        }
        println!("{}", paint(&frame));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    args.color.write_global();

    let mut problem = match QuestProblem::try_from(args.quest.as_path()) {
        Ok(problem) => problem.with_costs(args.costs()),
        Err(e) => {
            eprintln!("{}: {e}", "Error".red().bold());
            return ExitCode::FAILURE;
        }
    };
    debug!(
        "Loaded {:?} with {} medals and costs {:?}",
        problem.space(),
        problem.medals().len(),
        problem.space().costs()
    );

    let mut stopwatch = Stopwatch::new_started();
    let solution = args.algorithm.search(&mut problem);
    stopwatch.stop();
    let elapsed = stopwatch.elapsed();

    match &solution {
        Some(path) if !path.seems_valid() => {
            eprintln!(
                "{}: path cost overflowed ({} actions)",
                "Error".red().bold(),
                path.len()
            );
            return ExitCode::FAILURE;
        }
        Some(path) => {
            println!("Path length: {}", path.len().bold());
            println!("Path cost: {}", path.cost.bold());
        }
        None => println!("{}", "The quest failed!".red().bold()),
    }
    println!(
        "Number of nodes expanded: {}",
        problem.expansions().separate_with_commas()
    );
    println!(
        "Processing time: {:.4}(sec) ({})",
        elapsed.as_secs_f64(),
        human_duration(&elapsed)
    );

    let actions = solution.map(|path| path.actions).unwrap_or_default();
    match show(&problem, &actions, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "Replay failed".red().bold());
            ExitCode::FAILURE
        }
    }
}

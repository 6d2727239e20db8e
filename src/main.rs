use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::{Args, Parser};
use serde::Serialize;

// 导入库模块
use gridreach::config::Config;
use gridreach::core::{Coord, Grid};
use gridreach::services::{search, search_with_observer, Algorithm, GridGenerator, SearchStats};
use gridreach::utils::{logging, render, ConsoleVisualizer};

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GridReach Contributors")]
enum Cli {
    /// Generate a random grid and search it from a random start
    Run {
        #[clap(flatten)]
        grid: GridArgs,
        #[clap(short, long, value_enum)]
        algorithm: Option<Algorithm>,
        /// Print every expansion step
        #[clap(long)]
        visualize: bool,
        /// Pause between visualized steps, in milliseconds
        #[clap(long)]
        pause_ms: Option<u64>,
        /// Print the report as JSON instead of the colored grid
        #[clap(long)]
        json: bool,
    },
    /// Run every algorithm on the same grid and check they agree
    Compare {
        #[clap(flatten)]
        grid: GridArgs,
    },
    /// Write the default configuration file
    InitConfig {
        #[clap(default_value = "gridreach.toml")]
        path: PathBuf,
    },
}

#[derive(Args)]
struct GridArgs {
    #[clap(short, long)]
    config: Option<PathBuf>,
    #[clap(long)]
    height: Option<usize>,
    #[clap(long)]
    width: Option<usize>,
    #[clap(long)]
    density: Option<f64>,
    #[clap(long)]
    seed: Option<u64>,
}

impl GridArgs {
    fn load(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(height) = self.height {
            config.grid.height = height;
        }
        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(density) = self.density {
            config.grid.wall_density = density;
        }
        if self.seed.is_some() {
            config.grid.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Serialize)]
struct RunReport {
    algorithm: Algorithm,
    height: usize,
    width: usize,
    start: Coord,
    elapsed_ms: f64,
    fully_connected: bool,
    stats: SearchStats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let outcome = match cli {
        Cli::Run {
            grid,
            algorithm,
            visualize,
            pause_ms,
            json,
        } => {
            let mut config = grid.load()?;
            if let Some(algorithm) = algorithm {
                config.search.algorithm = algorithm;
            }
            if let Some(pause_ms) = pause_ms {
                config.search.render_pause_ms = pause_ms;
            }
            config.search.visualize |= visualize;
            logging::init(&config.log)?;
            run(&config, json)
        }
        Cli::Compare { grid } => {
            let config = grid.load()?;
            logging::init(&config.log)?;
            compare(&config)
        }
        Cli::InitConfig { path } => {
            Config::default().save(&path)?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        }
    };

    logging::shutdown();
    outcome
}

fn generate(config: &Config) -> Result<(Grid, Coord)> {
    let mut generator = GridGenerator::from_config(&config.grid)?;
    let mut grid = generator.generate()?;
    let start = generator.random_start(&mut grid)?;
    log::info!(
        "网格 {}x{}, 起点 {}",
        grid.height(),
        grid.width(),
        start
    );
    Ok((grid, start))
}

fn run(config: &Config, json: bool) -> Result<()> {
    let (grid, start) = generate(config)?;
    let algorithm = config.search.algorithm;

    if !json {
        println!("\n{}", render(&grid));
    }

    let tic = Instant::now();
    let result = if config.search.visualize && !json {
        let mut visualizer = ConsoleVisualizer::stdout(config.search.render_pause());
        search_with_observer(&grid, start, algorithm, &mut visualizer)?
    } else {
        search(&grid, start, algorithm)?
    };
    let elapsed = tic.elapsed();

    let stats = SearchStats::classify(&grid, &result);
    log::info!("{} 搜索耗时 {:.3} ms: {}", algorithm, millis(elapsed), stats);

    if json {
        let report = RunReport {
            algorithm,
            height: grid.height(),
            width: grid.width(),
            start,
            elapsed_ms: millis(elapsed),
            fully_connected: stats.is_fully_connected(),
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{}", render(result.grid()));
        println!("search took {:.3} ms", millis(elapsed));
        println!("{}", stats);
    }
    Ok(())
}

fn compare(config: &Config) -> Result<()> {
    let (grid, start) = generate(config)?;
    let mut outcomes = Vec::with_capacity(Algorithm::ALL.len());

    for algorithm in Algorithm::ALL {
        let tic = Instant::now();
        let result = search(&grid, start, algorithm)?;
        let elapsed = tic.elapsed();
        let stats = SearchStats::classify(&grid, &result);
        println!("{:>8}: {:>9.3} ms  {}", algorithm.name(), millis(elapsed), stats);
        outcomes.push((algorithm, result.reachable_set()));
    }

    if let Some(((first, expected), rest)) = outcomes.split_first() {
        for (algorithm, reachable) in rest {
            if reachable != expected {
                bail!("{} and {} disagree on the reachable set", first, algorithm);
            }
        }
    }

    println!("all algorithms agree");
    Ok(())
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

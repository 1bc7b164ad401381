//! Runner CLI
//!
//! Load a match config, play the games, save and print the results.

use std::env;
use std::path::Path;

use alphabetical_strategy::AlphabeticalStrategy;
use anyhow::Context;
use bot_core::Engine;
use bot_runner::{Config, EngineSpec, GameRunner, MatchReport};
use engine_adapter::ExternalEngine;
use first_move_strategy::FirstMoveStrategy;
use random_strategy::RandomStrategy;

const DEFAULT_RESULTS_PATH: &str = "match_results.json";

fn print_usage() {
    println!("Homemade bot runner");
    println!();
    println!("Usage:");
    println!("  bot-runner play <config.toml>");
    println!("  bot-runner report <results.json>");
    println!();
    println!("Strategies (for the [white]/[black] config sections):");
    println!("  random        - uniformly random legal move");
    println!("  alphabetical  - first legal move by SAN order");
    println!("  first_move    - first legal move by UCI order");
    println!("  external      - spawn the configured command and speak the");
    println!("                  line protocol (command = [...], working_dir,");
    println!("                  silence_stderr)");
}

/// Build an engine from its config section. External engines get a fresh
/// child process per call, so call this once per game.
fn create_engine(spec: &EngineSpec) -> anyhow::Result<Box<dyn Engine>> {
    Ok(match spec {
        EngineSpec::Random => Box::new(RandomStrategy::new()),
        EngineSpec::Alphabetical => Box::new(AlphabeticalStrategy::new()),
        EngineSpec::FirstMove => Box::new(FirstMoveStrategy::new()),
        EngineSpec::External(config) => {
            Box::new(ExternalEngine::spawn(config).context("failed to spawn external engine")?)
        }
    })
}

/// Report name for an engine spec, without constructing the engine.
fn spec_name(spec: &EngineSpec) -> String {
    match spec {
        EngineSpec::Random => "Random".to_string(),
        EngineSpec::Alphabetical => "Alphabetical".to_string(),
        EngineSpec::FirstMove => "FirstMove".to_string(),
        EngineSpec::External(config) => config.display_name(),
    }
}

fn run_play(config_path: &str) -> anyhow::Result<()> {
    let config = Config::load(Path::new(config_path))
        .with_context(|| format!("failed to load config {config_path}"))?;

    let runner = GameRunner::new(config.game.clone(), config.draw_or_resign.clone());

    let name1 = spec_name(&config.white);
    let name2 = spec_name(&config.black);
    let mut report = MatchReport::new(&name1, &name2);

    println!("=== Match: {} vs {} ===", name1, name2);
    println!("Games: {}", config.game.games);
    println!();

    for game_num in 0..config.game.games {
        let engine1_white = !config.game.alternate_colors || game_num % 2 == 0;

        let (white_spec, black_spec) = if engine1_white {
            (&config.white, &config.black)
        } else {
            (&config.black, &config.white)
        };

        let mut white = create_engine(white_spec)?;
        let mut black = create_engine(black_spec)?;

        let record = runner.play_game(white.as_mut(), black.as_mut())?;
        white.shutdown()?;
        black.shutdown()?;

        println!(
            "Game {}/{}: {} vs {} - {} ({} plies)",
            game_num + 1,
            config.game.games,
            record.white,
            record.black,
            record.reason,
            record.moves.len()
        );

        report.add_game(record, engine1_white);
    }

    println!();
    report.print_report();

    if let Err(e) = report.save(Path::new(DEFAULT_RESULTS_PATH)) {
        eprintln!("Warning: failed to save results: {e}");
    } else {
        println!("Results saved to {DEFAULT_RESULTS_PATH}");
    }

    Ok(())
}

fn run_report(results_path: &str) -> anyhow::Result<()> {
    let report = MatchReport::load(Path::new(results_path))
        .with_context(|| format!("failed to load results {results_path}"))?;
    report.print_report();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "play" if args.len() >= 3 => run_play(&args[2]),
        "report" if args.len() >= 3 => run_report(&args[2]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown or incomplete command");
            print_usage();
            Ok(())
        }
    }
}

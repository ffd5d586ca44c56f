//! AI Simulator CLI - fast in-memory rounds for bot tuning.
//!
//! Runs seeded games of several rounds between four bots and reports how
//! often each seat captured exactly what it declared.

mod metrics;
mod output;
mod simulator;
mod types;

use clap::Parser;
use engine::ai::{create_ai, AiPlayer};
use engine::domain::declaration::PLAYERS;
use engine::domain::derive_bot_seed;
use metrics::{build_game_metrics, GameMetrics};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use std::time::Instant;
use tracing::{info, warn};
use types::{AiType, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory round simulator for bot tuning")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Rounds per game
    #[arg(short, long, default_value = "8")]
    rounds: u32,

    /// AI type for all seats (shortcut to set all 4 seats to the same AI)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "strategic")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "strategic")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "strategic")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "strategic")]
    seat3: AiType,

    /// Base seed; game N uses seed + N. Random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_types: [AiType; PLAYERS] = match args.seats {
        Some(ai) => [ai.clone(), ai.clone(), ai.clone(), ai],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    let ai_types: [String; PLAYERS] = std::array::from_fn(|s| seat_types[s].name().to_string());

    if args.show_output {
        info!(games = args.games, rounds = args.rounds, ?ai_types, "Starting AI simulator");
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results: Vec<GameMetrics> = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(s) => s.wrapping_add(game_num as u64),
            None => rand::random(),
        };

        match run_game(game_num, game_seed, &seat_types, args.rounds) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    ai_types.clone(),
                    args.games,
                    &result,
                    duration_ms,
                    &args.metrics_level,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(game_num, game_seed, "game completed");
                }
                results.push(metrics);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (json_path, csv_path) = output_writer.output_paths();
    let (json_path, csv_path) = (json_path.clone(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", json_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

fn create_ai_player(
    ai_type: &AiType,
    seed: u64,
) -> Result<Box<dyn AiPlayer>, Box<dyn std::error::Error>> {
    let config = serde_json::json!({ "seed": seed });
    create_ai(ai_type.name(), Some(&config))
        .ok_or_else(|| format!("Unknown AI type: {}", ai_type.name()).into())
}

fn run_game(
    game_num: u32,
    game_seed: u64,
    seat_types: &[AiType; PLAYERS],
    rounds: u32,
) -> Result<GameResult, Box<dyn std::error::Error>> {
    let ais = [
        create_ai_player(&seat_types[0], derive_bot_seed(game_seed, 0))?,
        create_ai_player(&seat_types[1], derive_bot_seed(game_seed, 1))?,
        create_ai_player(&seat_types[2], derive_bot_seed(game_seed, 2))?,
        create_ai_player(&seat_types[3], derive_bot_seed(game_seed, 3))?,
    ];
    let simulator = Simulator::new(game_seed, game_num);
    simulator.simulate_game(&ais, rounds).map_err(|e| e.into())
}

fn print_summary(results: &[GameMetrics], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut exact = [0u32; PLAYERS];
    let mut over = [0u32; PLAYERS];
    let mut under = [0u32; PLAYERS];
    let mut captured = [0f64; PLAYERS];
    let mut rounds = 0u32;

    for game in results {
        rounds += game.config.rounds_per_game;
        for player in &game.player_metrics {
            let seat = player.seat as usize;
            exact[seat] += player.accuracy.exact;
            over[seat] += player.accuracy.over;
            under[seat] += player.accuracy.under;
            captured[seat] += player.avg_captured * game.config.rounds_per_game as f64;
        }
    }
    if rounds == 0 {
        return;
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..PLAYERS {
        let exact_pct = (exact[seat] as f64 / rounds as f64) * 100.0;
        println!(
            "Seat {} ({}): exact={} ({:.1}%), over={}, under={}, avg_captured={:.2}",
            seat,
            results[0].config.ai_types[seat],
            exact[seat],
            exact_pct,
            over[seat],
            under[seat],
            captured[seat] / rounds as f64
        );
    }
}
